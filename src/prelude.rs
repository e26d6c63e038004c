pub use super::register::main::*;
use derive_more::TryFrom;

/// Expected content of the WhoAmI register.
pub const ID: u8 = 0x33;

/// I²C device address, selected by the SA0 pin.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2CAddress {
    /// I²C address when the SA0 pin is low.
    Primary = 0x18,
    /// I²C address when the SA0 pin is high.
    Secondary = 0x19,
}

/// Operating mode.
///
/// Spread over LPen in CTRL_REG1 and HR in CTRL_REG4.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// 8-bit data output.
    LowPower,
    /// 10-bit data output.
    #[default]
    Normal,
    /// 12-bit data output.
    HighResolution,
}

/// Output data rate, as the ODR field of CTRL_REG1.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum DataRate {
    _1hz = 0x1,
    _10hz = 0x2,
    _25hz = 0x3,
    _50hz = 0x4,
    _100hz = 0x5,
    _200hz = 0x6,
    _400hz = 0x7,
    /// Available in low-power mode only.
    _1600hz = 0x8,
    /// 1.344 kHz in normal/high-resolution mode, 5.376 kHz in low-power mode.
    _1344hz_5376hz = 0x9,
}

/// Accelerometer full scale, as the FS field of CTRL_REG4.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum FullScale {
    #[default]
    _2g = 0x0,
    _4g = 0x1,
    _8g = 0x2,
    _16g = 0x3,
}

/// Interrupt generator selection.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptTarget {
    Int1,
    Int2,
}

impl InterruptTarget {
    pub(crate) fn cfg_reg(self) -> Reg {
        match self {
            InterruptTarget::Int1 => Reg::Int1Cfg,
            InterruptTarget::Int2 => Reg::Int2Cfg,
        }
    }

    pub(crate) fn src_reg(self) -> Reg {
        match self {
            InterruptTarget::Int1 => Reg::Int1Src,
            InterruptTarget::Int2 => Reg::Int2Src,
        }
    }

    pub(crate) fn ths_reg(self) -> Reg {
        match self {
            InterruptTarget::Int1 => Reg::Int1Ths,
            InterruptTarget::Int2 => Reg::Int2Ths,
        }
    }

    pub(crate) fn duration_reg(self) -> Reg {
        match self {
            InterruptTarget::Int1 => Reg::Int1Duration,
            InterruptTarget::Int2 => Reg::Int2Duration,
        }
    }

    /// I1_IA1 or I1_IA2 bit in CTRL_REG3.
    pub(crate) fn route_bit(self) -> u8 {
        match self {
            InterruptTarget::Int1 => Ctrl3::I1_IA1_BIT,
            InterruptTarget::Int2 => Ctrl3::I1_IA2_BIT,
        }
    }

    /// LIR_INT1 or LIR_INT2 bit in CTRL_REG5.
    pub(crate) fn latch_bit(self) -> u8 {
        match self {
            InterruptTarget::Int1 => Ctrl5::LIR_INT1_BIT,
            InterruptTarget::Int2 => Ctrl5::LIR_INT2_BIT,
        }
    }
}

/// Active level of the interrupt pins.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPolarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

/// Axes enabled by [`Lis3dh::setup`](super::Lis3dh::setup).
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxesEnable {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Default for AxesEnable {
    fn default() -> Self {
        Self {
            x: true,
            y: true,
            z: true,
        }
    }
}

/// Motion detection settings for one interrupt generator.
///
/// `threshold` and `duration` are raw register values; their LSB weight
/// depends on the full scale and the data rate respectively.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionDetection {
    pub enable: bool,
    pub threshold: u8,
    pub duration: u8,
    /// Keep the interrupt asserted until the source register is read.
    pub latch: bool,
}

/// Converts a left-justified output word to mg for the given full scale.
///
/// Division truncates toward zero.
pub fn from_lsb_to_mg(lsb: i16, fs: FullScale) -> i16 {
    let (product, divisor): (i32, i32) = match fs {
        FullScale::_2g => (1, 16),
        FullScale::_4g => (1, 8),
        FullScale::_8g => (1, 4),
        FullScale::_16g => (3, 4),
    };

    // |lsb * 3 / 4| never exceeds i16::MAX
    ((lsb as i32 * product) / divisor) as i16
}
