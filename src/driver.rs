use super::{BusOperation, I2c, SensorOperation, SevenBitAddress, bisync, i2c, prelude::*};

/// Driver for the LIS3DH sensor.
///
/// The struct takes a bus object to write to the registers.
/// The bus is generalized over the BusOperation trait; passing `&mut P` as
/// the I2C peripheral keeps it owned by the caller, and allows the use of
/// bus sharing wrappers.
#[bisync]
pub struct Lis3dh<B>
where
    B: BusOperation,
{
    pub bus: B,
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[bisync]
pub enum Error<B> {
    Bus(B),              // Error at the bus level
    InvalidDeviceId(u8), // WhoAmI content differs from ID
}

// Flag bits driven through `bit_set`/`bit_clear`.
const LPEN: u8 = Ctrl1::LPEN_BIT;
const HR: u8 = Ctrl4::HR_BIT;
const INT_POLARITY: u8 = Ctrl6::INT_POLARITY_BIT;

#[bisync]
impl<P> Lis3dh<i2c::I2cBus<P>>
where
    P: I2c,
{
    /// Constructor method for using the I2C bus.
    ///
    /// No transaction is performed; see `initialize` for a checked constructor.
    pub fn new_i2c(i2c: P, address: I2CAddress) -> Self {
        let bus = i2c::I2cBus::new(i2c, address as SevenBitAddress);
        Self { bus }
    }

    /// Bind the sensor at `address` and check its identity.
    ///
    /// Fails with `Error::InvalidDeviceId` if the WhoAmI register does not
    /// contain `ID`.
    pub async fn initialize(i2c: P, address: I2CAddress) -> Result<Self, Error<P::Error>> {
        let mut sensor = Self::new_i2c(i2c, address);
        sensor.device_id_check().await?;
        Ok(sensor)
    }

    /// Bind the sensor at whichever of the two addresses answers with `ID`.
    ///
    /// The primary address is tried first.
    pub async fn initialize_auto(mut i2c: P) -> Result<Self, Error<P::Error>> {
        let address = Self::probe(&mut i2c).await?;
        Ok(Self::new_i2c(i2c, address))
    }

    /// Find the address the sensor answers on.
    ///
    /// A bus error or an unexpected id on the primary address falls back to
    /// the secondary one; the outcome of the secondary is returned.
    pub async fn probe(i2c: &mut P) -> Result<I2CAddress, Error<P::Error>> {
        if let Ok(ID) = Self::probe_id(i2c, I2CAddress::Primary).await {
            return Ok(I2CAddress::Primary);
        }

        let id = Self::probe_id(i2c, I2CAddress::Secondary)
            .await
            .map_err(Error::Bus)?;
        if id == ID {
            Ok(I2CAddress::Secondary)
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("LIS3DH not found: WhoAmI {=u8:#x}, expected {=u8:#x}", id, ID);
            Err(Error::InvalidDeviceId(id))
        }
    }

    async fn probe_id(i2c: &mut P, address: I2CAddress) -> Result<u8, P::Error> {
        let mut buf = [0u8; 1];
        i2c.write_read(address as SevenBitAddress, &[Reg::WhoAmI as u8], &mut buf)
            .await?;
        Ok(buf[0])
    }
}

#[bisync]
impl<B: BusOperation> SensorOperation for Lis3dh<B> {
    type Error = Error<B::Error>;

    /// Write `buf` to consecutive registers starting at `reg`.
    async fn write_to_register(&mut self, reg: u8, buf: &[u8]) -> Result<(), Error<B::Error>> {
        self.bus
            .write_to_register(reg, buf)
            .await
            .map_err(Error::Bus)
    }

    /// Read `buf.len()` bytes starting at `reg`.
    async fn read_from_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.bus
            .read_from_register(reg, buf)
            .await
            .map_err(Error::Bus)
    }
}

#[bisync]
impl<B: BusOperation> Lis3dh<B> {
    /// Constructor method using a generic Bus that implements BusOperation
    pub fn from_bus(bus: B) -> Self {
        Self { bus }
    }

    async fn register_read(&mut self, reg: Reg) -> Result<u8, Error<B::Error>> {
        let mut buf = [0u8; 1];
        self.read_from_register(reg as u8, &mut buf).await?;
        Ok(buf[0])
    }

    async fn register_write(&mut self, reg: Reg, val: u8) -> Result<(), Error<B::Error>> {
        self.write_to_register(reg as u8, &[val]).await
    }

    /// Set a single bit of a register, leaving the others untouched.
    async fn bit_set(&mut self, reg: Reg, bit: u8) -> Result<(), Error<B::Error>> {
        let val = self.register_read(reg).await?;
        self.register_write(reg, val | (1 << bit)).await
    }

    /// Clear a single bit of a register, leaving the others untouched.
    async fn bit_clear(&mut self, reg: Reg, bit: u8) -> Result<(), Error<B::Error>> {
        let val = self.register_read(reg).await?;
        self.register_write(reg, val & !(1 << bit)).await
    }

    /// Get the device ID.
    ///
    /// Return the value contained in the WhoAmI Register.
    pub async fn device_id_get(&mut self) -> Result<u8, Error<B::Error>> {
        WhoAmI::read(self).await.map(|whoami| whoami.id())
    }

    async fn device_id_check(&mut self) -> Result<(), Error<B::Error>> {
        let id = self.device_id_get().await?;
        if id != ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("LIS3DH WhoAmI mismatch: {=u8:#x}, expected {=u8:#x}", id, ID);
            return Err(Error::InvalidDeviceId(id));
        }
        Ok(())
    }

    /// Sensor setup.
    ///
    /// Applies the operating mode, then data rate and axis enable in a single
    /// CTRL_REG1 write, then the full scale. The reference register is read
    /// afterwards to reset the high-pass filter.
    pub async fn setup(
        &mut self,
        mode: OperatingMode,
        odr: DataRate,
        fs: FullScale,
        axes: AxesEnable,
    ) -> Result<(), Error<B::Error>> {
        self.mode_set(mode).await?;

        let mut ctrl1 = Ctrl1::read(self).await?;
        ctrl1.set_xen(axes.x as u8);
        ctrl1.set_yen(axes.y as u8);
        ctrl1.set_zen(axes.z as u8);
        ctrl1.set_odr(odr as u8);
        ctrl1.write(self).await?;

        self.range_set(fs).await?;
        self.reference_get().await?;

        Ok(())
    }

    /// Set the operating mode.
    ///
    /// LPen (CTRL_REG1) and HR (CTRL_REG4) are never both set.
    pub async fn mode_set(&mut self, val: OperatingMode) -> Result<(), Error<B::Error>> {
        match val {
            OperatingMode::LowPower => {
                self.bit_set(Reg::CtrlReg1, LPEN).await?;
                self.bit_clear(Reg::CtrlReg4, HR).await
            }
            OperatingMode::Normal => {
                self.bit_clear(Reg::CtrlReg1, LPEN).await?;
                self.bit_clear(Reg::CtrlReg4, HR).await
            }
            OperatingMode::HighResolution => {
                self.bit_clear(Reg::CtrlReg1, LPEN).await?;
                self.bit_set(Reg::CtrlReg4, HR).await
            }
        }
    }

    /// Get the operating mode.
    ///
    /// If LPen and HR are both set, low-power is reported.
    pub async fn mode_get(&mut self) -> Result<OperatingMode, Error<B::Error>> {
        let lpen = Ctrl1::read(self).await?.lpen();
        let hr = Ctrl4::read(self).await?.hr();

        let val = match (lpen, hr) {
            (0, 0) => OperatingMode::Normal,
            (1, _) => OperatingMode::LowPower,
            _ => OperatingMode::HighResolution,
        };
        Ok(val)
    }

    /// Set the accelerometer full scale.
    pub async fn range_set(&mut self, val: FullScale) -> Result<(), Error<B::Error>> {
        let mut ctrl4 = Ctrl4::read(self).await?;
        ctrl4.set_fs(val as u8);
        ctrl4.write(self).await
    }

    /// Get the accelerometer full scale.
    pub async fn range_get(&mut self) -> Result<FullScale, Error<B::Error>> {
        let ctrl4 = Ctrl4::read(self).await?;
        Ok(FullScale::try_from(ctrl4.fs()).unwrap_or_default())
    }

    /// Set the output data rate.
    ///
    /// Axis enable and LPen bits are preserved.
    pub async fn data_rate_set(&mut self, val: DataRate) -> Result<(), Error<B::Error>> {
        let mut ctrl1 = Ctrl1::read(self).await?;
        ctrl1.set_odr(val as u8);
        ctrl1.write(self).await
    }

    /// Put the sensor in power-down.
    ///
    /// Clears the data rate and the axis enable bits; the operating mode and
    /// the full scale are kept. LPen survives, so the value written to
    /// CTRL_REG1 is `ctrl1 & 0x08`, not `ctrl1 & 0xF0`.
    pub async fn power_down(&mut self) -> Result<(), Error<B::Error>> {
        let mut ctrl1 = Ctrl1::read(self).await?;
        ctrl1.set_odr(0);
        ctrl1.set_xen(0);
        ctrl1.set_yen(0);
        ctrl1.set_zen(0);
        ctrl1.write(self).await
    }

    /// Configure motion detection on an interrupt generator.
    ///
    /// When enabling, the generator fires on a high event of any axis (OR
    /// combination) through the high-pass filter, and is routed to the INT1
    /// pin. When disabling, threshold and duration registers are left as is.
    /// The reference register is read last to re-arm the filter.
    pub async fn motion_detection_set(
        &mut self,
        target: InterruptTarget,
        val: MotionDetection,
    ) -> Result<(), Error<B::Error>> {
        let int_cfg = if val.enable {
            IntCfg::new().with_xhie(1).with_yhie(1).with_zhie(1)
        } else {
            IntCfg::new()
        };
        self.register_write(target.cfg_reg(), int_cfg.into_bits()).await?;

        if val.enable {
            let ctrl2 = match target {
                InterruptTarget::Int1 => Ctrl2::new().with_fds(1).with_hp_ia1(1),
                InterruptTarget::Int2 => Ctrl2::new().with_fds(1).with_hp_ia2(1),
            };
            ctrl2.write(self).await?;

            self.bit_set(Reg::CtrlReg3, target.route_bit()).await?;
            if val.latch {
                self.bit_set(Reg::CtrlReg5, target.latch_bit()).await?;
            } else {
                self.bit_clear(Reg::CtrlReg5, target.latch_bit()).await?;
            }

            self.register_write(target.ths_reg(), val.threshold).await?;
            self.register_write(target.duration_reg(), val.duration).await?;
        } else {
            self.bit_clear(Reg::CtrlReg3, target.route_bit()).await?;
        }

        self.reference_get().await?;
        Ok(())
    }

    /// Get the raw content of the interrupt source register.
    ///
    /// Reading it also clears a latched interrupt.
    pub async fn interrupt_source_get(
        &mut self,
        target: InterruptTarget,
    ) -> Result<u8, Error<B::Error>> {
        self.register_read(target.src_reg()).await
    }

    /// Set the active level of the interrupt pins.
    pub async fn interrupt_polarity_set(
        &mut self,
        val: InterruptPolarity,
    ) -> Result<(), Error<B::Error>> {
        match val {
            InterruptPolarity::ActiveLow => self.bit_set(Reg::CtrlReg6, INT_POLARITY).await,
            InterruptPolarity::ActiveHigh => self.bit_clear(Reg::CtrlReg6, INT_POLARITY).await,
        }
    }

    /// Get the active level of the interrupt pins.
    pub async fn interrupt_polarity_get(&mut self) -> Result<InterruptPolarity, Error<B::Error>> {
        let ctrl6 = Ctrl6::read(self).await?;
        let val = if ctrl6.int_polarity() == 1 {
            InterruptPolarity::ActiveLow
        } else {
            InterruptPolarity::ActiveHigh
        };
        Ok(val)
    }

    /// Read the reference register, resetting the high-pass filter.
    pub async fn reference_get(&mut self) -> Result<u8, Error<B::Error>> {
        self.register_read(Reg::Reference).await
    }

    /// Get the data available and overrun flags.
    pub async fn status_get(&mut self) -> Result<StatusReg, Error<B::Error>> {
        StatusReg::read(self).await
    }

    /// Get the linear acceleration output registers, OUT_X_L to OUT_Z_H.
    ///
    /// One burst read in device byte order.
    pub async fn acceleration_raw_get(&mut self) -> Result<[u8; 6], Error<B::Error>> {
        let mut buf = [0u8; 6];
        self.read_from_register(Reg::OutXL as u8 | AUTO_INCREMENT, &mut buf)
            .await?;
        Ok(buf)
    }

    /// Get the linear acceleration in mg.
    ///
    /// Scaled against the full scale currently set; see `from_lsb_to_mg`.
    pub async fn acceleration_mg_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let raw = self.acceleration_raw_get().await?;
        let fs = self.range_get().await?;

        let mut val = [0i16; 3];
        for (axis, bytes) in val.iter_mut().zip(raw.chunks_exact(2)) {
            *axis = from_lsb_to_mg(i16::from_le_bytes([bytes[0], bytes[1]]), fs);
        }
        Ok(val)
    }
}
