#![allow(dead_code)]

pub use embedded_hal::i2c::ErrorKind;
pub use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
pub use lis3dh::blocking::{Error, Lis3dh, prelude::*};

pub const DEV_ADDR: u8 = 0x18;

pub fn trans_read(reg: Reg, val: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![reg as u8], vec![val])
}

pub fn trans_write(reg: Reg, val: u8) -> I2cTrans {
    I2cTrans::write(DEV_ADDR, vec![reg as u8, val])
}

/// Read-modify-write of a single register.
pub fn trans_rmw(reg: Reg, before: u8, after: u8) -> [I2cTrans; 2] {
    [trans_read(reg, before), trans_write(reg, after)]
}

pub fn trans_who_am_i(addr: u8, id: u8) -> I2cTrans {
    I2cTrans::write_read(addr, vec![0x0F], vec![id])
}
