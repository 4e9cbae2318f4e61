//! Request interface for a controlling process.
//!
//! A closed set of six requests, each a single bus round trip: four channel
//! reads returning a 16-bit count and two configuration writes taking one
//! byte. Requests can be built directly or decoded from a raw operation code
//! plus argument bytes, using the same control numbers as the Linux character
//! device (`_IOR('t', n, u16)` for reads, `_IOW('t', n, u8)` for writes).

use device_driver::RegisterInterface;

use crate::{Channel, Error, Tcs34725};

/// Control number type byte
pub const MAGIC: u8 = b't';

/// Size of a channel read result on the wire
pub const CHANNEL_RESULT_LEN: usize = 2;

/// Size of a configuration write argument on the wire
pub const CONFIG_ARG_LEN: usize = 1;

const IOC_WRITE: u32 = 1;
const IOC_READ: u32 = 2;

const fn ioc(dir: u32, nr: u8, size: usize) -> u32 {
    dir << 30 | (size as u32) << 16 | (MAGIC as u32) << 8 | nr as u32
}

/// A request from the controlling process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Request {
    /// Read the clear channel
    ReadClear,
    /// Read the red channel
    ReadRed,
    /// Read the green channel
    ReadGreen,
    /// Read the blue channel
    ReadBlue,
    /// Write the CONTROL (gain) register
    SetGain(u8),
    /// Write the ATIME (integration time) register
    SetIntegrationTime(u8),
}

/// Result of a successful request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Response {
    /// Channel count
    Channel(u16),
    /// Configuration written
    Configured,
}

/// Unknown operation code or malformed argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidRequest;

impl<E> From<InvalidRequest> for Error<E> {
    fn from(_: InvalidRequest) -> Self {
        Error::InvalidRequest
    }
}

impl Request {
    /// Operation code, 1 through 6
    pub const fn code(&self) -> u8 {
        match self {
            Request::ReadClear => 1,
            Request::ReadRed => 2,
            Request::ReadGreen => 3,
            Request::ReadBlue => 4,
            Request::SetGain(_) => 5,
            Request::SetIntegrationTime(_) => 6,
        }
    }

    /// Channel read by this request, if it is a read
    pub const fn channel(&self) -> Option<Channel> {
        match self {
            Request::ReadClear => Some(Channel::Clear),
            Request::ReadRed => Some(Channel::Red),
            Request::ReadGreen => Some(Channel::Green),
            Request::ReadBlue => Some(Channel::Blue),
            Request::SetGain(_) | Request::SetIntegrationTime(_) => None,
        }
    }

    /// Number of result bytes the request produces
    pub const fn response_len(&self) -> usize {
        match self.channel() {
            Some(_) => CHANNEL_RESULT_LEN,
            None => 0,
        }
    }

    /// Linux ioctl number for this request
    pub const fn control_number(&self) -> u32 {
        match self.channel() {
            Some(_) => ioc(IOC_READ, self.code(), CHANNEL_RESULT_LEN),
            None => ioc(IOC_WRITE, self.code(), CONFIG_ARG_LEN),
        }
    }

    /// Decode an operation code and its argument bytes.
    ///
    /// Configuration writes take the first argument byte; reads ignore `arg`.
    pub fn decode(code: u8, arg: &[u8]) -> Result<Self, InvalidRequest> {
        match code {
            1 => Ok(Request::ReadClear),
            2 => Ok(Request::ReadRed),
            3 => Ok(Request::ReadGreen),
            4 => Ok(Request::ReadBlue),
            5 => arg.first().map(|&gain| Request::SetGain(gain)).ok_or(InvalidRequest),
            6 => arg
                .first()
                .map(|&atime| Request::SetIntegrationTime(atime))
                .ok_or(InvalidRequest),
            _ => Err(InvalidRequest),
        }
    }

    /// Decode a full Linux ioctl number and its argument bytes
    pub fn from_control(number: u32, arg: &[u8]) -> Result<Self, InvalidRequest> {
        let request = Self::decode((number & 0xFF) as u8, arg)?;
        if request.control_number() == number {
            Ok(request)
        } else {
            Err(InvalidRequest)
        }
    }
}

impl Response {
    /// Write the response into `out`, returning the number of bytes used.
    ///
    /// Channel counts are little-endian.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, InvalidRequest> {
        match self {
            Response::Channel(count) => {
                let dest = out.get_mut(..CHANNEL_RESULT_LEN).ok_or(InvalidRequest)?;
                dest.copy_from_slice(&count.to_le_bytes());
                Ok(CHANNEL_RESULT_LEN)
            }
            Response::Configured => Ok(0),
        }
    }
}

impl<IFACE, D> Tcs34725<IFACE, D>
where
    IFACE: RegisterInterface<AddressType = u8>,
{
    /// Execute one request
    pub fn handle(&mut self, request: Request) -> Result<Response, Error<IFACE::Error>> {
        trace!("request {}", request.code());
        match request {
            Request::ReadClear => self.read_channel(Channel::Clear).map(Response::Channel),
            Request::ReadRed => self.read_channel(Channel::Red).map(Response::Channel),
            Request::ReadGreen => self.read_channel(Channel::Green).map(Response::Channel),
            Request::ReadBlue => self.read_channel(Channel::Blue).map(Response::Channel),
            Request::SetGain(gain) => self.set_gain(gain).map(|()| Response::Configured),
            Request::SetIntegrationTime(atime) => self
                .set_integration_time(atime)
                .map(|()| Response::Configured),
        }
    }

    /// Decode a raw ioctl number and argument, execute it and encode the result.
    ///
    /// The output buffer is checked before any bus traffic. Returns the number
    /// of bytes written to `out`.
    pub fn handle_raw(
        &mut self,
        number: u32,
        arg: &[u8],
        out: &mut [u8],
    ) -> Result<usize, Error<IFACE::Error>> {
        let request = Request::from_control(number, arg)?;
        if out.len() < request.response_len() {
            return Err(Error::InvalidRequest);
        }
        let response = self.handle(request)?;
        Ok(response.encode(out)?)
    }
}

#[cfg(feature = "async")]
impl<IFACE, D> Tcs34725<IFACE, D>
where
    IFACE: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Execute one request (async version)
    pub async fn handle_async(
        &mut self,
        request: Request,
    ) -> Result<Response, Error<IFACE::Error>> {
        match request {
            Request::ReadClear => self.read_channel_async(Channel::Clear).await.map(Response::Channel),
            Request::ReadRed => self.read_channel_async(Channel::Red).await.map(Response::Channel),
            Request::ReadGreen => self.read_channel_async(Channel::Green).await.map(Response::Channel),
            Request::ReadBlue => self.read_channel_async(Channel::Blue).await.map(Response::Channel),
            Request::SetGain(gain) => self.set_gain_async(gain).await.map(|()| Response::Configured),
            Request::SetIntegrationTime(atime) => self
                .set_integration_time_async(atime)
                .await
                .map(|()| Response::Configured),
        }
    }

    /// Decode, execute and encode a raw request (async version)
    pub async fn handle_raw_async(
        &mut self,
        number: u32,
        arg: &[u8],
        out: &mut [u8],
    ) -> Result<usize, Error<IFACE::Error>> {
        let request = Request::from_control(number, arg)?;
        if out.len() < request.response_len() {
            return Err(Error::InvalidRequest);
        }
        let response = self.handle_async(request).await?;
        Ok(response.encode(out)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ll::reg;
    use crate::mock::{recording_sensor, Event, MockError};
    use crate::ErrorKind;
    extern crate std;
    use std::vec;

    const READ_C: u32 = 0x8002_7401;
    const READ_R: u32 = 0x8002_7402;
    const READ_G: u32 = 0x8002_7403;
    const READ_B: u32 = 0x8002_7404;
    const SET_GAIN: u32 = 0x4001_7405;
    const SET_ATIME: u32 = 0x4001_7406;

    #[test]
    fn control_numbers_match_linux_encoding() {
        assert_eq!(Request::ReadClear.control_number(), READ_C);
        assert_eq!(Request::ReadRed.control_number(), READ_R);
        assert_eq!(Request::ReadGreen.control_number(), READ_G);
        assert_eq!(Request::ReadBlue.control_number(), READ_B);
        assert_eq!(Request::SetGain(0).control_number(), SET_GAIN);
        assert_eq!(Request::SetIntegrationTime(0).control_number(), SET_ATIME);
    }

    #[test]
    fn decode_covers_the_command_set() {
        assert_eq!(Request::decode(1, &[]), Ok(Request::ReadClear));
        assert_eq!(Request::decode(4, &[0xAA]), Ok(Request::ReadBlue));
        assert_eq!(Request::decode(5, &[0x03]), Ok(Request::SetGain(0x03)));
        assert_eq!(
            Request::decode(6, &[0xD5, 0x00]),
            Ok(Request::SetIntegrationTime(0xD5))
        );
        assert_eq!(Request::from_control(SET_ATIME, &[0xC0]), Ok(Request::SetIntegrationTime(0xC0)));
    }

    #[test]
    fn unknown_or_malformed_requests_are_invalid() {
        for code in [0u8, 7, 0x80, 0xFF] {
            assert_eq!(Request::decode(code, &[0x01]), Err(InvalidRequest));
        }
        assert_eq!(Request::decode(5, &[]), Err(InvalidRequest));
        assert_eq!(Request::decode(6, &[]), Err(InvalidRequest));
        // Right sequence number, wrong direction or magic
        assert_eq!(Request::from_control(0x4002_7401, &[]), Err(InvalidRequest));
        assert_eq!(Request::from_control(0x8002_7501, &[]), Err(InvalidRequest));
    }

    #[test]
    fn channel_result_is_little_endian() {
        let mut out = [0u8; 4];
        assert_eq!(Response::Channel(0x1234).encode(&mut out), Ok(2));
        assert_eq!(out, [0x34, 0x12, 0x00, 0x00]);
        assert_eq!(Response::Configured.encode(&mut out), Ok(0));
        assert_eq!(Response::Channel(1).encode(&mut out[..1]), Err(InvalidRequest));
    }

    #[test]
    fn each_read_is_one_word_read() {
        let (mut sensor, bus) = recording_sensor(0x44);
        {
            let mut bus = bus.borrow_mut();
            bus.registers[0x18] = 0xCD;
            bus.registers[0x19] = 0xAB;
        }
        sensor.attach().unwrap();
        bus.borrow_mut().events.clear();

        assert_eq!(sensor.handle(Request::ReadGreen), Ok(Response::Channel(0xABCD)));
        assert_eq!(
            bus.borrow().events,
            vec![Event::Read(reg::GDATAL), Event::Read(reg::GDATAL + 1)]
        );
    }

    #[test]
    fn each_config_request_is_one_write() {
        let (mut sensor, bus) = recording_sensor(0x44);
        sensor.attach().unwrap();
        bus.borrow_mut().events.clear();

        assert_eq!(sensor.handle(Request::SetGain(0x03)), Ok(Response::Configured));
        assert_eq!(
            sensor.handle(Request::SetIntegrationTime(0xD5)),
            Ok(Response::Configured)
        );
        assert_eq!(
            bus.borrow().events,
            vec![Event::Write(reg::CONTROL, 0x03), Event::Write(reg::ATIME, 0xD5)]
        );
    }

    #[test]
    fn raw_round_trip() {
        let (mut sensor, bus) = recording_sensor(0x44);
        {
            let mut bus = bus.borrow_mut();
            bus.registers[0x1A] = 0x02;
            bus.registers[0x1B] = 0x01;
        }
        sensor.attach().unwrap();

        let mut out = [0u8; 2];
        assert_eq!(sensor.handle_raw(SET_GAIN, &[0x03], &mut out), Ok(0));
        assert_eq!(sensor.handle_raw(READ_B, &[], &mut out), Ok(2));
        assert_eq!(out, [0x02, 0x01]);
        assert_eq!(bus.borrow().registers[reg::CONTROL as usize], 0x03);
    }

    #[test]
    fn dark_end_to_end() {
        let (mut sensor, _bus) = recording_sensor(0x44);
        sensor.attach().unwrap();

        let mut out = [0xFFu8; 2];
        for number in [READ_C, READ_R, READ_G, READ_B] {
            assert_eq!(sensor.handle_raw(number, &[], &mut out), Ok(2));
            assert_eq!(u16::from_le_bytes(out), 0);
        }
    }

    #[test]
    fn invalid_requests_never_reach_the_bus() {
        let (mut sensor, bus) = recording_sensor(0x44);
        sensor.attach().unwrap();
        bus.borrow_mut().events.clear();

        let mut out = [0u8; 2];
        let err = sensor.handle_raw(0x8002_7407, &[], &mut out).unwrap_err();
        assert_eq!(err, Error::InvalidRequest);
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);

        assert_eq!(
            sensor.handle_raw(SET_GAIN, &[], &mut out),
            Err(Error::InvalidRequest)
        );
        assert_eq!(
            sensor.handle_raw(READ_C, &[], &mut out[..1]),
            Err(Error::InvalidRequest)
        );
        assert!(bus.borrow().events.is_empty());
    }

    #[test]
    fn transport_errors_stay_distinct_at_the_boundary() {
        let (mut sensor, bus) = recording_sensor(0x44);
        sensor.attach().unwrap();
        bus.borrow_mut().fail_reads.push(reg::CDATAL + 1);

        let mut out = [0u8; 2];
        let err = sensor.handle_raw(READ_C, &[], &mut out).unwrap_err();
        assert_eq!(err, Error::Transport(MockError::Read(reg::CDATAL + 1)));
        assert!(err.kind().is_retryable());

        // Only that request failed
        bus.borrow_mut().fail_reads.clear();
        assert_eq!(sensor.handle_raw(READ_C, &[], &mut out), Ok(2));
    }

    #[test]
    fn requests_before_attach_are_not_ready() {
        let (mut sensor, bus) = recording_sensor(0x44);

        assert_eq!(sensor.handle(Request::ReadClear), Err(Error::NotReady));
        assert_eq!(sensor.handle(Request::SetGain(1)), Err(Error::NotReady));
        assert!(bus.borrow().events.is_empty());
    }

    #[test]
    fn requests_after_unrecognized_device_are_not_ready() {
        let (mut sensor, _bus) = recording_sensor(0x00);
        let err = sensor.attach().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedDevice);

        let mut out = [0u8; 2];
        assert_eq!(
            sensor.handle_raw(READ_R, &[], &mut out),
            Err(Error::NotReady)
        );
    }
}
