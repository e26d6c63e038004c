use super::{BusOperation, Error, Lis3dh, SensorOperation, bisync, only_async, only_sync};
use bitfield_struct::bitfield;
use st_mem_bank_macro::register;

/// LIS3DH register map.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
    StatusRegAux = 0x07,
    OutAdc1L = 0x08,
    OutAdc1H = 0x09,
    OutAdc2L = 0x0A,
    OutAdc2H = 0x0B,
    OutAdc3L = 0x0C,
    OutAdc3H = 0x0D,
    WhoAmI = 0x0F,
    CtrlReg0 = 0x1E,
    TempCfgReg = 0x1F,
    CtrlReg1 = 0x20,
    CtrlReg2 = 0x21,
    CtrlReg3 = 0x22,
    CtrlReg4 = 0x23,
    CtrlReg5 = 0x24,
    CtrlReg6 = 0x25,
    Reference = 0x26,
    StatusReg = 0x27,
    OutXL = 0x28,
    OutXH = 0x29,
    OutYL = 0x2A,
    OutYH = 0x2B,
    OutZL = 0x2C,
    OutZH = 0x2D,
    FifoCtrlReg = 0x2E,
    FifoSrcReg = 0x2F,
    Int1Cfg = 0x30,
    Int1Src = 0x31,
    Int1Ths = 0x32,
    Int1Duration = 0x33,
    Int2Cfg = 0x34,
    Int2Src = 0x35,
    Int2Ths = 0x36,
    Int2Duration = 0x37,
    ClickCfg = 0x38,
    ClickSrc = 0x39,
    ClickThs = 0x3A,
    TimeLimit = 0x3B,
    TimeLatency = 0x3C,
    TimeWindow = 0x3D,
    ActThs = 0x3E,
    ActDur = 0x3F,
}

/// Sub-address flag enabling register auto-increment on multi-byte I²C reads.
pub const AUTO_INCREMENT: u8 = 0x80;

/// WhoAmI (0x0F)
///
/// Device identification register (R).
#[register(address = Reg::WhoAmI, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct WhoAmI {
    #[bits(8, access = RO)]
    pub id: u8,
}

/// CtrlReg1 (0x20)
///
/// Data rate selection, low-power enable and axis enable (R/W). Default: 0x07.
#[register(address = Reg::CtrlReg1, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct Ctrl1 {
    /// X-axis enable. Default: 1.
    #[bits(1, default = 1)]
    pub xen: u8,
    /// Y-axis enable. Default: 1.
    #[bits(1, default = 1)]
    pub yen: u8,
    /// Z-axis enable. Default: 1.
    #[bits(1, default = 1)]
    pub zen: u8,
    /// Low-power mode enable. Default: 0.
    #[bits(1, default = 0)]
    pub lpen: u8,
    /// Output data rate selection; 0 is power-down. Default: 0.
    #[bits(4, default = 0)]
    pub odr: u8,
}

/// CtrlReg2 (0x21)
///
/// High-pass filter configuration (R/W).
#[register(address = Reg::CtrlReg2, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct Ctrl2 {
    /// High-pass filter enabled for AOI function on interrupt 1.
    #[bits(1)]
    pub hp_ia1: u8,
    /// High-pass filter enabled for AOI function on interrupt 2.
    #[bits(1)]
    pub hp_ia2: u8,
    /// High-pass filter enabled for CLICK function.
    #[bits(1)]
    pub hpclick: u8,
    /// Filtered data selection; 1 sends filtered data to output and FIFO.
    #[bits(1)]
    pub fds: u8,
    /// High-pass filter cutoff frequency selection.
    #[bits(2)]
    pub hpcf: u8,
    /// High-pass filter mode selection.
    #[bits(2)]
    pub hpm: u8,
}

/// CtrlReg3 (0x22)
///
/// Interrupt routing on the INT1 pin (R/W).
#[register(address = Reg::CtrlReg3, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct Ctrl3 {
    #[bits(1, access = RO)]
    not_used0: u8,
    /// FIFO overrun interrupt on INT1.
    #[bits(1)]
    pub i1_overrun: u8,
    /// FIFO watermark interrupt on INT1.
    #[bits(1)]
    pub i1_wtm: u8,
    /// 321DA interrupt on INT1.
    #[bits(1)]
    pub i1_321da: u8,
    /// ZYXDA interrupt on INT1.
    #[bits(1)]
    pub i1_zyxda: u8,
    /// IA2 interrupt on INT1.
    #[bits(1)]
    pub i1_ia2: u8,
    /// IA1 interrupt on INT1.
    #[bits(1)]
    pub i1_ia1: u8,
    /// CLICK interrupt on INT1.
    #[bits(1)]
    pub i1_click: u8,
}

/// CtrlReg4 (0x23)
///
/// Full scale, resolution and data format (R/W).
#[register(address = Reg::CtrlReg4, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct Ctrl4 {
    /// SPI serial interface mode; 0 = 4-wire, 1 = 3-wire.
    #[bits(1)]
    pub sim: u8,
    /// Self-test enable.
    #[bits(2)]
    pub st: u8,
    /// High-resolution output mode.
    #[bits(1)]
    pub hr: u8,
    /// Full-scale selection.
    #[bits(2)]
    pub fs: u8,
    /// Big/little endian data selection.
    #[bits(1)]
    pub ble: u8,
    /// Block data update.
    #[bits(1)]
    pub bdu: u8,
}

/// CtrlReg5 (0x24)
///
/// Boot, FIFO enable and interrupt latching (R/W).
#[register(address = Reg::CtrlReg5, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct Ctrl5 {
    /// 4D detection on INT2 when 6D is enabled on INT2_CFG.
    #[bits(1)]
    pub d4d_int2: u8,
    /// Latch interrupt request on INT2_SRC.
    #[bits(1)]
    pub lir_int2: u8,
    /// 4D detection on INT1 when 6D is enabled on INT1_CFG.
    #[bits(1)]
    pub d4d_int1: u8,
    /// Latch interrupt request on INT1_SRC.
    #[bits(1)]
    pub lir_int1: u8,
    #[bits(2, access = RO)]
    not_used0: u8,
    /// FIFO enable.
    #[bits(1)]
    pub fifo_en: u8,
    /// Reboot memory content.
    #[bits(1)]
    pub boot: u8,
}

/// CtrlReg6 (0x25)
///
/// Interrupt routing on the INT2 pin and interrupt polarity (R/W).
#[register(address = Reg::CtrlReg6, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct Ctrl6 {
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Interrupt active level; 0 = active high, 1 = active low.
    #[bits(1)]
    pub int_polarity: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
    /// Activity interrupt on INT2.
    #[bits(1)]
    pub i2_act: u8,
    /// Boot on INT2.
    #[bits(1)]
    pub i2_boot: u8,
    /// IA2 interrupt on INT2.
    #[bits(1)]
    pub i2_ia2: u8,
    /// IA1 interrupt on INT2.
    #[bits(1)]
    pub i2_ia1: u8,
    /// CLICK interrupt on INT2.
    #[bits(1)]
    pub i2_click: u8,
}

/// StatusReg (0x27)
///
/// Data available and overrun flags (R).
#[register(address = Reg::StatusReg, access_type = Lis3dh, generics = 1)]
#[bitfield(u8, order = Lsb)]
pub struct StatusReg {
    #[bits(1, access = RO)]
    pub xda: u8,
    #[bits(1, access = RO)]
    pub yda: u8,
    #[bits(1, access = RO)]
    pub zda: u8,
    /// New data available on all three axes.
    #[bits(1, access = RO)]
    pub zyxda: u8,
    #[bits(1, access = RO)]
    pub xor: u8,
    #[bits(1, access = RO)]
    pub yor: u8,
    #[bits(1, access = RO)]
    pub zor: u8,
    /// Data overrun on at least one axis.
    #[bits(1, access = RO)]
    pub zyxor: u8,
}

/// Int1Cfg (0x30) - Int2Cfg (0x34)
///
/// Interrupt generator configuration (R/W). Both generators share this layout.
#[bitfield(u8, order = Lsb)]
pub struct IntCfg {
    /// Interrupt on X low event.
    #[bits(1)]
    pub xlie: u8,
    /// Interrupt on X high event.
    #[bits(1)]
    pub xhie: u8,
    /// Interrupt on Y low event.
    #[bits(1)]
    pub ylie: u8,
    /// Interrupt on Y high event.
    #[bits(1)]
    pub yhie: u8,
    /// Interrupt on Z low event.
    #[bits(1)]
    pub zlie: u8,
    /// Interrupt on Z high event.
    #[bits(1)]
    pub zhie: u8,
    /// 6-direction detection.
    #[bits(1)]
    pub six_d: u8,
    /// And/Or combination of interrupt events; 0 = OR.
    #[bits(1)]
    pub aoi: u8,
}

// Crate-visible aliases of the bitfield offsets; bitfield-struct emits the
// `*_OFFSET` constants without visibility, so they are private to this module.
impl Ctrl1 {
    pub(crate) const LPEN_BIT: u8 = Self::LPEN_OFFSET as u8;
}
impl Ctrl3 {
    pub(crate) const I1_IA1_BIT: u8 = Self::I1_IA1_OFFSET as u8;
    pub(crate) const I1_IA2_BIT: u8 = Self::I1_IA2_OFFSET as u8;
}
impl Ctrl4 {
    pub(crate) const HR_BIT: u8 = Self::HR_OFFSET as u8;
}
impl Ctrl5 {
    pub(crate) const LIR_INT1_BIT: u8 = Self::LIR_INT1_OFFSET as u8;
    pub(crate) const LIR_INT2_BIT: u8 = Self::LIR_INT2_OFFSET as u8;
}
impl Ctrl6 {
    pub(crate) const INT_POLARITY_BIT: u8 = Self::INT_POLARITY_OFFSET as u8;
}
