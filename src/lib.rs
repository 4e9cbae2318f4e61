//! # TCS34725 RGBC Color Light Sensor Driver
//!
//! This is a platform-agnostic Rust driver for the TCS3472x family of color light-to-digital
//! converters (TCS34721, TCS34723, TCS34725, TCS34727), built using the [`embedded-hal`] traits
//! for I2C communication.
//!
//! The sensor provides:
//! - Clear, Red, Green and Blue channels, 16 bits each
//! - Programmable analog gain (1x, 4x, 16x, 60x)
//! - Programmable integration time (2.4ms to 614ms)
//! - I2C interface (address 0x29)
//!
//! ## Features
//!
//! - **Lifecycle controller** with chip identification and the power-on / ADC-enable sequence
//! - **Channel and sample reads** with strict low-byte-first register access
//! - **Configurable gain and integration time**
//! - **Request interface** with a closed command set for a controlling process
//! - **Client-side normalization** of a sample against its clear channel
//! - **Async/await support** with feature gating (optional)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tcs34725::{Gain, IntegrationTime, Tcs34725};
//!
//! # struct NoDelay;
//! # impl embedded_hal::delay::DelayNs for NoDelay {
//! #     fn delay_ns(&mut self, _ns: u32) {}
//! # }
//! # fn main() {
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! # let delay = NoDelay;
//! let mut sensor = Tcs34725::new(i2c, delay);
//!
//! // Identify the chip and run the power-on sequence (blocks ~710ms)
//! let chip = sensor.attach().unwrap();
//!
//! // Configure measurement settings
//! sensor.set_gain(Gain::X4.bits()).unwrap();
//! sensor.set_integration_time(IntegrationTime::MS_101.raw()).unwrap();
//!
//! // Read all four channels
//! let sample = sensor.read_sample().unwrap();
//! if let Some(rgb) = sample.normalized() {
//!     // rgb.red, rgb.green, rgb.blue in 0..=255
//! }
//!
//! // Power down and get the bus back
//! let detached = sensor.detach();
//! let _i2c = detached.interface.i2c;
//! # }
//! ```
//!
//! ## Cargo features
//!
//! - `async`: `_async` variants of every operation over [`embedded-hal-async`]
//! - `defmt-03`: `defmt::Format` derives and diagnostic output through `defmt`
//! - `log`: diagnostic output through the `log` facade (exclusive with `defmt-03`)
//!
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal
//! [`embedded-hal-async`]: https://crates.io/crates/embedded-hal-async

#![no_std]
#![deny(missing_docs)]

#[cfg(all(feature = "defmt-03", feature = "log"))]
compile_error!("Features \"defmt-03\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod fmt;

pub mod ll;
pub mod normalize;
pub mod request;

#[cfg(test)]
mod mock;

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

use ll::{reg, ENABLE_AEN, ENABLE_OFF, ENABLE_PON, STATUS_AVALID};

pub use ll::{DeviceInterface, DeviceInterfaceError, I2C_ADDRESS};
pub use normalize::NormalizedRgb;
pub use request::{Request, Response};

/// Settling time after setting PON, before the ADC may be enabled.
pub const POWER_ON_DELAY_MS: u32 = 10;

/// Settling time after enabling the ADC, before channel data is valid.
///
/// Covers a full integration cycle at the longest ATIME (614ms) plus margin.
pub const ADC_SETTLE_DELAY_MS: u32 = 700;

/// Identity of a supported chip, as read from the ID register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ChipId {
    /// TCS34721 / TCS34725
    Tcs34725 = 0x44,
    /// TCS34723 / TCS34727
    Tcs34727 = 0x4D,
}

impl ChipId {
    /// Map a raw ID register value to a supported chip
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0x44 => Some(ChipId::Tcs34725),
            0x4D => Some(ChipId::Tcs34727),
            _ => None,
        }
    }

    /// Raw ID register value
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// One of the four light channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Channel {
    /// Clear (unfiltered) channel
    Clear,
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// Channels in acquisition order
    pub const ALL: [Channel; 4] = [Channel::Clear, Channel::Red, Channel::Green, Channel::Blue];

    /// Address of the channel's low data byte
    pub const fn register(self) -> u8 {
        match self {
            Channel::Clear => reg::CDATAL,
            Channel::Red => reg::RDATAL,
            Channel::Green => reg::GDATAL,
            Channel::Blue => reg::BDATAL,
        }
    }
}

/// One RGBC measurement.
///
/// The four channels are read one after another, so a light change during
/// acquisition can skew them relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ColorSample {
    /// Clear channel count
    pub clear: u16,
    /// Red channel count
    pub red: u16,
    /// Green channel count
    pub green: u16,
    /// Blue channel count
    pub blue: u16,
}

impl ColorSample {
    /// Count for a single channel
    pub const fn channel(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Clear => self.clear,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Scale red, green and blue against clear; `None` when clear is zero
    pub fn normalized(&self) -> Option<NormalizedRgb> {
        NormalizedRgb::from_sample(self)
    }
}

/// RGBC analog gain, written to the CONTROL register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Gain {
    /// 1x gain
    #[default]
    X1 = 0b00,
    /// 4x gain
    X4 = 0b01,
    /// 16x gain
    X16 = 0b10,
    /// 60x gain
    X60 = 0b11,
}

impl Gain {
    /// Raw CONTROL register value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Gain factor
    pub const fn multiplier(self) -> u8 {
        match self {
            Gain::X1 => 1,
            Gain::X4 => 4,
            Gain::X16 => 16,
            Gain::X60 => 60,
        }
    }
}

/// RGBC integration time, as the raw ATIME register value.
///
/// The sensor integrates for `256 - ATIME` cycles of 2.4ms each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct IntegrationTime(u8);

impl IntegrationTime {
    /// 2.4ms, 1 cycle (power-on default)
    pub const MS_2_4: Self = Self(0xFF);
    /// 24ms, 10 cycles
    pub const MS_24: Self = Self(0xF6);
    /// 101ms, 42 cycles
    pub const MS_101: Self = Self(0xD6);
    /// 154ms, 64 cycles
    pub const MS_154: Self = Self(0xC0);
    /// 614ms, 256 cycles
    pub const MS_614: Self = Self(0x00);

    const CYCLE_US: u32 = 2_400;

    /// Wrap a raw ATIME value
    pub const fn from_raw(atime: u8) -> Self {
        Self(atime)
    }

    /// Closest integration time to `us` microseconds, clamped to 1..=256 cycles
    pub const fn from_micros(us: u32) -> Self {
        let mut cycles = us.saturating_add(Self::CYCLE_US / 2) / Self::CYCLE_US;
        if cycles < 1 {
            cycles = 1;
        }
        if cycles > 256 {
            cycles = 256;
        }
        Self((256 - cycles) as u8)
    }

    /// Raw ATIME register value
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Number of 2.4ms integration cycles
    pub const fn cycles(self) -> u32 {
        256 - self.0 as u32
    }

    /// Integration time in microseconds
    pub const fn as_micros(self) -> u32 {
        self.cycles() * Self::CYCLE_US
    }

    /// Largest count a channel can report at this integration time
    pub const fn max_count(self) -> u16 {
        let max = self.cycles() * 1024;
        if max > u16::MAX as u32 {
            u16::MAX
        } else {
            max as u16
        }
    }
}

impl Default for IntegrationTime {
    fn default() -> Self {
        Self::MS_2_4
    }
}

/// Measurement settings applied by [`Tcs34725::configure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Config {
    /// Analog gain
    pub gain: Gain,
    /// Integration time
    pub integration_time: IntegrationTime,
}

/// Lifecycle state of a sensor handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum State {
    /// Not yet probed
    Uninitialized,
    /// Chip ID accepted, sensor still off
    Identified,
    /// PON written, oscillator settling
    Powered,
    /// PON and AEN written, channel data readable
    Active,
    /// Identification or power-on failed; only [`Tcs34725::detach`] is allowed
    Failed,
}

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// A register read or write failed
    Transport(E),
    /// The ID register did not hold a supported chip identity
    UnrecognizedDevice {
        /// ID register value found
        found: u8,
    },
    /// Unknown request code or malformed request argument
    InvalidRequest,
    /// Operation attempted outside the state it requires
    NotReady,
}

/// Transport-independent classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ErrorKind {
    /// A register read or write failed
    Transport,
    /// The chip is not a supported TCS3472x
    UnrecognizedDevice,
    /// Unknown request code or malformed argument
    InvalidRequest,
    /// The handle is not active
    NotReady,
}

impl ErrorKind {
    /// Whether repeating the same request may succeed
    pub const fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Transport)
    }
}

impl<E> Error<E> {
    /// Classification of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) => ErrorKind::Transport,
            Error::UnrecognizedDevice { .. } => ErrorKind::UnrecognizedDevice,
            Error::InvalidRequest => ErrorKind::InvalidRequest,
            Error::NotReady => ErrorKind::NotReady,
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "register transport error: {e:?}"),
            Error::UnrecognizedDevice { found } => {
                write!(f, "device not recognized (id {found:#04x})")
            }
            Error::InvalidRequest => f.write_str("invalid request"),
            Error::NotReady => f.write_str("sensor not active"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

impl<E> From<Error<E>> for ErrorKind {
    fn from(err: Error<E>) -> Self {
        err.kind()
    }
}

/// Resources handed back by [`Tcs34725::detach`]
#[derive(Debug)]
pub struct Detached<IFACE, D, E> {
    /// The register interface
    pub interface: IFACE,
    /// The delay provider
    pub delay: D,
    /// Outcome of the power-down write
    pub power_down: Result<(), Error<E>>,
}

/// High-level TCS34725 driver
#[derive(Debug)]
pub struct Tcs34725<IFACE, D> {
    iface: IFACE,
    delay: D,
    state: State,
    chip_id: Option<ChipId>,
    // An enable write has been attempted, so teardown must power down
    enable_written: bool,
}

impl<I2C, D> Tcs34725<DeviceInterface<I2C>, D> {
    /// Create a driver on an I2C bus at the default address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::new_with_interface(DeviceInterface::new(i2c), delay)
    }
}

impl<IFACE, D> Tcs34725<IFACE, D> {
    /// Create a driver over any register interface
    pub fn new_with_interface(iface: IFACE, delay: D) -> Self {
        Self {
            iface,
            delay,
            state: State::Uninitialized,
            chip_id: None,
            enable_written: false,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Chip identity accepted at attach
    pub fn chip_id(&self) -> Option<ChipId> {
        self.chip_id
    }

    /// Whether channel reads and configuration writes are allowed
    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }

    fn fail<T, E>(&mut self, err: Error<E>) -> Result<T, Error<E>> {
        self.state = State::Failed;
        Err(err)
    }

    fn accept_identity(&mut self, id: u8) -> Option<ChipId> {
        let chip = ChipId::from_id(id);
        match chip {
            Some(chip) => {
                self.chip_id = Some(chip);
                self.state = State::Identified;
                debug!("chip id {:#x} accepted", id);
            }
            None => error!("device not recognized: id {:#x}", id),
        }
        chip
    }

    fn finish_detach<E>(self, power_down: Result<(), Error<E>>) -> Detached<IFACE, D, E> {
        if power_down.is_err() {
            warn!("power-down write failed, releasing sensor anyway");
        }
        info!("TCS34725 removed");
        Detached {
            interface: self.iface,
            delay: self.delay,
            power_down,
        }
    }
}

impl<IFACE, D> Tcs34725<IFACE, D>
where
    IFACE: RegisterInterface<AddressType = u8>,
    D: DelayNs,
{
    /// Identify the chip and bring it to [`State::Active`].
    ///
    /// Writes PON, waits [`POWER_ON_DELAY_MS`], writes PON|AEN, then waits
    /// [`ADC_SETTLE_DELAY_MS`]. Any failure leaves the handle in
    /// [`State::Failed`] for good.
    pub fn attach(&mut self) -> Result<ChipId, Error<IFACE::Error>> {
        if self.state != State::Uninitialized {
            return Err(Error::NotReady);
        }

        let id = match self.read_byte(reg::ID) {
            Ok(id) => id,
            Err(e) => {
                error!("ID read failed");
                return self.fail(e);
            }
        };
        let Some(chip) = self.accept_identity(id) else {
            return self.fail(Error::UnrecognizedDevice { found: id });
        };

        self.enable_written = true;
        if let Err(e) = self.write_byte(reg::ENABLE, ENABLE_PON) {
            error!("enable write failed");
            return self.fail(e);
        }
        self.delay.delay_ms(POWER_ON_DELAY_MS);
        self.state = State::Powered;
        debug!("powered on");

        if let Err(e) = self.write_byte(reg::ENABLE, ENABLE_PON | ENABLE_AEN) {
            error!("ADC enable failed");
            return self.fail(e);
        }
        self.delay.delay_ms(ADC_SETTLE_DELAY_MS);
        self.state = State::Active;

        info!("TCS3472x initialized, id {:#x}", id);
        Ok(chip)
    }
}

impl<IFACE, D> Tcs34725<IFACE, D>
where
    IFACE: RegisterInterface<AddressType = u8>,
{
    /// Power the sensor down and release the interface and delay.
    ///
    /// The power-down write is best-effort: its outcome is reported in
    /// [`Detached::power_down`] and never prevents the release.
    pub fn detach(mut self) -> Detached<IFACE, D, IFACE::Error> {
        let power_down = if self.enable_written {
            self.write_byte(reg::ENABLE, ENABLE_OFF)
        } else {
            Ok(())
        };
        self.finish_detach(power_down)
    }

    /// Read a little-endian 16-bit value from `register` and `register + 1`
    pub fn read_word(&mut self, register: u8) -> Result<u16, Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.word(register)
    }

    /// Read one channel
    pub fn read_channel(&mut self, channel: Channel) -> Result<u16, Error<IFACE::Error>> {
        self.read_word(channel.register())
    }

    /// Read clear, red, green and blue, in that order.
    ///
    /// Fails with the first channel error; no partial sample is returned.
    pub fn read_sample(&mut self) -> Result<ColorSample, Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        let clear = self.word(reg::CDATAL)?;
        let red = self.word(reg::RDATAL)?;
        let green = self.word(reg::GDATAL)?;
        let blue = self.word(reg::BDATAL)?;
        trace!("sample c={} r={} g={} b={}", clear, red, green, blue);
        Ok(ColorSample {
            clear,
            red,
            green,
            blue,
        })
    }

    /// Write the CONTROL register. Any value is forwarded unchanged.
    pub fn set_gain(&mut self, gain: u8) -> Result<(), Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.write_byte(reg::CONTROL, gain)
    }

    /// Write the ATIME register. Any value is forwarded unchanged.
    pub fn set_integration_time(&mut self, atime: u8) -> Result<(), Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.write_byte(reg::ATIME, atime)
    }

    /// Apply integration time, then gain
    pub fn configure(&mut self, config: &Config) -> Result<(), Error<IFACE::Error>> {
        self.set_integration_time(config.integration_time.raw())?;
        self.set_gain(config.gain.bits())
    }

    /// Read a single register
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.read_byte(register)
    }

    /// Check whether an integration cycle has completed since the ADC was enabled
    pub fn is_data_valid(&mut self) -> Result<bool, Error<IFACE::Error>> {
        Ok(self.read_register(reg::STATUS)? & STATUS_AVALID != 0)
    }

    // Low byte strictly before high byte; the high byte is skipped if the low read fails
    fn word(&mut self, register: u8) -> Result<u16, Error<IFACE::Error>> {
        let low = self.read_byte(register)?;
        let high = self.read_byte(register.wrapping_add(1))?;
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, Error<IFACE::Error>> {
        let mut buffer = [0u8; 1];
        self.iface
            .read_register(register, 8, &mut buffer)
            .map_err(Error::Transport)?;
        Ok(buffer[0])
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Error<IFACE::Error>> {
        self.iface
            .write_register(register, 8, &[value])
            .map_err(Error::Transport)
    }
}

#[cfg(feature = "async")]
impl<IFACE, D> Tcs34725<IFACE, D>
where
    IFACE: device_driver::AsyncRegisterInterface<AddressType = u8>,
    D: embedded_hal_async::delay::DelayNs,
{
    /// Identify the chip and bring it to [`State::Active`] (async version)
    pub async fn attach_async(&mut self) -> Result<ChipId, Error<IFACE::Error>> {
        if self.state != State::Uninitialized {
            return Err(Error::NotReady);
        }

        let id = match self.read_byte_async(reg::ID).await {
            Ok(id) => id,
            Err(e) => {
                error!("ID read failed");
                return self.fail(e);
            }
        };
        let Some(chip) = self.accept_identity(id) else {
            return self.fail(Error::UnrecognizedDevice { found: id });
        };

        self.enable_written = true;
        if let Err(e) = self.write_byte_async(reg::ENABLE, ENABLE_PON).await {
            error!("enable write failed");
            return self.fail(e);
        }
        self.delay.delay_ms(POWER_ON_DELAY_MS).await;
        self.state = State::Powered;
        debug!("powered on");

        if let Err(e) = self
            .write_byte_async(reg::ENABLE, ENABLE_PON | ENABLE_AEN)
            .await
        {
            error!("ADC enable failed");
            return self.fail(e);
        }
        self.delay.delay_ms(ADC_SETTLE_DELAY_MS).await;
        self.state = State::Active;

        info!("TCS3472x initialized, id {:#x}", id);
        Ok(chip)
    }
}

#[cfg(feature = "async")]
impl<IFACE, D> Tcs34725<IFACE, D>
where
    IFACE: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Power the sensor down and release the interface and delay (async version)
    pub async fn detach_async(mut self) -> Detached<IFACE, D, IFACE::Error> {
        let power_down = if self.enable_written {
            self.write_byte_async(reg::ENABLE, ENABLE_OFF).await
        } else {
            Ok(())
        };
        self.finish_detach(power_down)
    }

    /// Read a little-endian 16-bit register pair (async version)
    pub async fn read_word_async(&mut self, register: u8) -> Result<u16, Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.word_async(register).await
    }

    /// Read one channel (async version)
    pub async fn read_channel_async(
        &mut self,
        channel: Channel,
    ) -> Result<u16, Error<IFACE::Error>> {
        self.read_word_async(channel.register()).await
    }

    /// Read clear, red, green and blue, in that order (async version)
    pub async fn read_sample_async(&mut self) -> Result<ColorSample, Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        let clear = self.word_async(reg::CDATAL).await?;
        let red = self.word_async(reg::RDATAL).await?;
        let green = self.word_async(reg::GDATAL).await?;
        let blue = self.word_async(reg::BDATAL).await?;
        Ok(ColorSample {
            clear,
            red,
            green,
            blue,
        })
    }

    /// Write the CONTROL register (async version)
    pub async fn set_gain_async(&mut self, gain: u8) -> Result<(), Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.write_byte_async(reg::CONTROL, gain).await
    }

    /// Write the ATIME register (async version)
    pub async fn set_integration_time_async(
        &mut self,
        atime: u8,
    ) -> Result<(), Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.write_byte_async(reg::ATIME, atime).await
    }

    /// Apply integration time, then gain (async version)
    pub async fn configure_async(&mut self, config: &Config) -> Result<(), Error<IFACE::Error>> {
        self.set_integration_time_async(config.integration_time.raw())
            .await?;
        self.set_gain_async(config.gain.bits()).await
    }

    /// Read a single register (async version)
    pub async fn read_register_async(&mut self, register: u8) -> Result<u8, Error<IFACE::Error>> {
        if !self.is_active() {
            return Err(Error::NotReady);
        }
        self.read_byte_async(register).await
    }

    /// Check whether an integration cycle has completed (async version)
    pub async fn is_data_valid_async(&mut self) -> Result<bool, Error<IFACE::Error>> {
        Ok(self.read_register_async(reg::STATUS).await? & STATUS_AVALID != 0)
    }

    async fn word_async(&mut self, register: u8) -> Result<u16, Error<IFACE::Error>> {
        let low = self.read_byte_async(register).await?;
        let high = self.read_byte_async(register.wrapping_add(1)).await?;
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    async fn read_byte_async(&mut self, register: u8) -> Result<u8, Error<IFACE::Error>> {
        let mut buffer = [0u8; 1];
        self.iface
            .read_register(register, 8, &mut buffer)
            .await
            .map_err(Error::Transport)?;
        Ok(buffer[0])
    }

    async fn write_byte_async(&mut self, register: u8, value: u8) -> Result<(), Error<IFACE::Error>> {
        self.iface
            .write_register(register, 8, &[value])
            .await
            .map_err(Error::Transport)
    }
}
