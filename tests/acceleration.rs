mod common;

use common::*;

fn trans_out(data: [u8; 6]) -> I2cTrans {
    // OUT_X_L with the auto-increment flag
    I2cTrans::write_read(DEV_ADDR, vec![0xA8], data.to_vec())
}

#[test]
fn raw_acceleration_is_one_burst_read() {
    let mut i2c = I2cMock::new(&[trans_out([0x01, 0x02, 0x03, 0x04, 0x05, 0x06])]);
    let mut sensor = Lis3dh::new_i2c(&mut i2c, I2CAddress::Primary);

    assert_eq!(
        sensor.acceleration_raw_get().unwrap(),
        [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]
    );
    drop(sensor);

    i2c.done();
}

#[test]
fn acceleration_at_2g() {
    let mut i2c = I2cMock::new(&[
        trans_out([0x00, 0x10, 0x00, 0x00, 0x00, 0x00]),
        trans_read(Reg::CtrlReg4, 0x08),
    ]);
    let mut sensor = Lis3dh::new_i2c(&mut i2c, I2CAddress::Primary);

    assert_eq!(sensor.acceleration_mg_get().unwrap(), [256, 0, 0]);
    drop(sensor);

    i2c.done();
}

#[test]
fn acceleration_at_16g() {
    let mut i2c = I2cMock::new(&[
        trans_out([0x00, 0x10, 0x00, 0x00, 0x00, 0x00]),
        trans_read(Reg::CtrlReg4, 0x38),
    ]);
    let mut sensor = Lis3dh::new_i2c(&mut i2c, I2CAddress::Primary);

    assert_eq!(sensor.acceleration_mg_get().unwrap(), [3072, 0, 0]);
    drop(sensor);

    i2c.done();
}

#[test]
fn acceleration_negative_values_truncate_toward_zero() {
    // X = -17, Y = -4096, Z = 4095
    let mut i2c = I2cMock::new(&[
        trans_out([0xEF, 0xFF, 0x00, 0xF0, 0xFF, 0x0F]),
        trans_read(Reg::CtrlReg4, 0x10),
    ]);
    let mut sensor = Lis3dh::new_i2c(&mut i2c, I2CAddress::Primary);

    assert_eq!(sensor.acceleration_mg_get().unwrap(), [-2, -512, 511]);
    drop(sensor);

    i2c.done();
}

#[test]
fn scaling_per_full_scale() {
    assert_eq!(from_lsb_to_mg(16, FullScale::_2g), 1);
    assert_eq!(from_lsb_to_mg(16, FullScale::_4g), 2);
    assert_eq!(from_lsb_to_mg(16, FullScale::_8g), 4);
    assert_eq!(from_lsb_to_mg(16, FullScale::_16g), 12);
    assert_eq!(from_lsb_to_mg(-15, FullScale::_2g), 0);
}

#[test]
fn scaling_does_not_overflow_at_16g() {
    assert_eq!(from_lsb_to_mg(i16::MAX, FullScale::_16g), 24575);
    assert_eq!(from_lsb_to_mg(i16::MIN, FullScale::_16g), -24576);
}
