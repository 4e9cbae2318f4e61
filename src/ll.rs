//! Low-level register map and bus interface for the TCS34725

use embedded_hal::i2c::I2c;

/// I2C address of the TCS34725
pub const I2C_ADDRESS: u8 = 0x29;

/// Command bit that must be set on every register address sent to the sensor
pub const COMMAND_BIT: u8 = 0x80;

/// Register addresses
pub mod reg {
    /// Enable register (PON, AEN)
    pub const ENABLE: u8 = 0x00;
    /// RGBC integration time
    pub const ATIME: u8 = 0x01;
    /// Control register (analog gain)
    pub const CONTROL: u8 = 0x0F;
    /// Chip identification
    pub const ID: u8 = 0x12;
    /// Device status
    pub const STATUS: u8 = 0x13;
    /// Clear channel, low byte
    pub const CDATAL: u8 = 0x14;
    /// Red channel, low byte
    pub const RDATAL: u8 = 0x16;
    /// Green channel, low byte
    pub const GDATAL: u8 = 0x18;
    /// Blue channel, low byte
    pub const BDATAL: u8 = 0x1A;
}

/// Power on. Activates the internal oscillator.
pub const ENABLE_PON: u8 = 0x01;
/// RGBC ADC enable
pub const ENABLE_AEN: u8 = 0x02;
/// Everything off
pub const ENABLE_OFF: u8 = 0x00;

/// STATUS: an RGBC integration cycle has completed
pub const STATUS_AVALID: u8 = 0x01;

/// Frames a register address for the bus.
///
/// Every access goes through here so the command bit cannot be forgotten.
#[inline]
pub const fn command(register: u8) -> u8 {
    COMMAND_BIT | register
}

/// Device interface error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DeviceInterfaceError<I2cError> {
    /// I2C communication error
    I2c(I2cError),
}

/// Register transport over an `embedded-hal` I2C bus.
///
/// Registers are accessed one byte at a time with the SMBus "read/write byte
/// data" framing: the command byte followed by either a repeated-start read or
/// the data byte.
#[derive(Debug)]
pub struct DeviceInterface<I2c> {
    /// The I2C interface
    pub i2c: I2c,
    /// Bus address of the sensor
    pub address: u8,
}

impl<I2C> DeviceInterface<I2C> {
    /// Wrap a bus using the default sensor address
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS,
        }
    }
}

impl<I2cTrait: I2c> device_driver::RegisterInterface for DeviceInterface<I2cTrait> {
    type AddressType = u8;
    type Error = DeviceInterfaceError<I2cTrait::Error>;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[command(address)], data)
            .map_err(DeviceInterfaceError::I2c)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        // Only single-byte registers are written: command byte + 1 data byte
        let mut buf = [0u8; 2];
        buf[0] = command(address);
        let len = data.len().min(1);
        buf[1..1 + len].copy_from_slice(&data[..len]);
        self.i2c
            .write(self.address, &buf[..1 + len])
            .map_err(DeviceInterfaceError::I2c)
    }
}

#[cfg(feature = "async")]
impl<I2cTrait: embedded_hal_async::i2c::I2c> device_driver::AsyncRegisterInterface
    for DeviceInterface<I2cTrait>
{
    type AddressType = u8;
    type Error = DeviceInterfaceError<I2cTrait::Error>;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[command(address)], data)
            .await
            .map_err(DeviceInterfaceError::I2c)
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut buf = [0u8; 2];
        buf[0] = command(address);
        let len = data.len().min(1);
        buf[1..1 + len].copy_from_slice(&data[..len]);
        self.i2c
            .write(self.address, &buf[..1 + len])
            .await
            .map_err(DeviceInterfaceError::I2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_driver::RegisterInterface;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    extern crate std;
    use std::vec;

    #[test]
    fn command_bit_is_always_set() {
        assert_eq!(command(reg::ENABLE), 0x80);
        assert_eq!(command(reg::ID), 0x92);
        assert_eq!(command(reg::BDATAL + 1), 0x9B);
    }

    #[test]
    fn byte_read_uses_command_framing() {
        let expectations = [I2cTransaction::write_read(
            I2C_ADDRESS,
            vec![0x92],
            vec![0x44],
        )];
        let mut iface = DeviceInterface::new(I2cMock::new(&expectations));

        let mut buf = [0u8; 1];
        iface.read_register(reg::ID, 8, &mut buf).unwrap();
        assert_eq!(buf[0], 0x44);

        iface.i2c.done();
    }

    #[test]
    fn byte_write_uses_command_framing() {
        let expectations = [I2cTransaction::write(I2C_ADDRESS, vec![0x8F, 0x03])];
        let mut iface = DeviceInterface::new(I2cMock::new(&expectations));

        iface.write_register(reg::CONTROL, 8, &[0x03]).unwrap();

        iface.i2c.done();
    }

    #[test]
    fn bus_errors_are_wrapped() {
        let expectations = [
            I2cTransaction::write(I2C_ADDRESS, vec![0x81, 0xD5]).with_error(ErrorKind::Other)
        ];
        let mut iface = DeviceInterface::new(I2cMock::new(&expectations));

        let err = iface.write_register(reg::ATIME, 8, &[0xD5]).unwrap_err();
        assert_eq!(err, DeviceInterfaceError::I2c(ErrorKind::Other));

        iface.i2c.done();
    }
}
