#![cfg(feature = "async")]

use embassy_futures::block_on;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use lis3dh::asynchronous::{Error, Lis3dh, prelude::*};

const DEV_ADDR: u8 = 0x18;

#[test]
fn initialize_accepts_the_expected_id() {
    let mut i2c = I2cMock::new(&[I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x33])]);

    let sensor = block_on(Lis3dh::initialize(&mut i2c, I2CAddress::Primary));
    assert!(sensor.is_ok());
    drop(sensor);

    i2c.done();
}

#[test]
fn initialize_rejects_another_id() {
    let mut i2c = I2cMock::new(&[I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x44])]);

    let err = block_on(Lis3dh::initialize(&mut i2c, I2CAddress::Primary)).err();
    assert_eq!(err, Some(Error::InvalidDeviceId(0x44)));

    i2c.done();
}

#[test]
fn acceleration_at_2g() {
    let mut i2c = I2cMock::new(&[
        I2cTrans::write_read(
            DEV_ADDR,
            vec![0xA8],
            vec![0x00, 0x10, 0x00, 0x00, 0x00, 0x00],
        ),
        I2cTrans::write_read(DEV_ADDR, vec![Reg::CtrlReg4 as u8], vec![0x00]),
    ]);
    let mut sensor = Lis3dh::new_i2c(&mut i2c, I2CAddress::Primary);

    let mg = block_on(sensor.acceleration_mg_get()).unwrap();
    assert_eq!(mg, [256, 0, 0]);
    drop(sensor);

    i2c.done();
}

#[test]
fn bus_error_is_propagated() {
    let mut i2c = I2cMock::new(&[
        I2cTrans::write_read(DEV_ADDR, vec![0xA8], vec![0; 6]).with_error(ErrorKind::Other)
    ]);
    let mut sensor = Lis3dh::new_i2c(&mut i2c, I2CAddress::Primary);

    let res = block_on(sensor.acceleration_mg_get());
    assert_eq!(res, Err(Error::Bus(ErrorKind::Other)));
    drop(sensor);

    i2c.done();
}
