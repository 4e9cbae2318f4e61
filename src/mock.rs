//! Recording register interface and delay for ordering tests.
//!
//! Both halves push into one shared event log, so tests can check where the
//! settling delays fall relative to the enable writes.

extern crate std;

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use crate::ll::reg;
use crate::Tcs34725;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Read(u8),
    Write(u8, u8),
    DelayMs(u32),
    DelayNs(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Read(u8),
    Write(u8),
}

/// Register file plus fault injection
pub struct FakeBus {
    pub registers: [u8; 256],
    pub events: Vec<Event>,
    /// Reads of these registers fail
    pub fail_reads: Vec<u8>,
    /// Writes to these registers fail
    pub fail_writes: Vec<u8>,
    /// Writes of these values fail, whatever the register
    pub fail_write_values: Vec<u8>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            events: Vec::new(),
            fail_reads: Vec::new(),
            fail_writes: Vec::new(),
            fail_write_values: Vec::new(),
        }
    }
}

pub struct FakeInterface {
    bus: Rc<RefCell<FakeBus>>,
}

pub struct FakeDelay {
    bus: Rc<RefCell<FakeBus>>,
}

impl device_driver::RegisterInterface for FakeInterface {
    type AddressType = u8;
    type Error = MockError;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut bus = self.bus.borrow_mut();
        if bus.fail_reads.contains(&address) {
            return Err(MockError::Read(address));
        }
        bus.events.push(Event::Read(address));
        data[0] = bus.registers[address as usize];
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut bus = self.bus.borrow_mut();
        let value = data[0];
        if bus.fail_writes.contains(&address) || bus.fail_write_values.contains(&value) {
            return Err(MockError::Write(address));
        }
        bus.events.push(Event::Write(address, value));
        bus.registers[address as usize] = value;
        Ok(())
    }
}

impl embedded_hal::delay::DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.bus.borrow_mut().events.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.bus.borrow_mut().events.push(Event::DelayMs(ms));
    }
}

/// A sensor whose ID register holds `id`, and the bus it talks to
pub fn recording_sensor(id: u8) -> (Tcs34725<FakeInterface, FakeDelay>, Rc<RefCell<FakeBus>>) {
    let bus = Rc::new(RefCell::new(FakeBus::new()));
    bus.borrow_mut().registers[reg::ID as usize] = id;
    let iface = FakeInterface { bus: bus.clone() };
    let delay = FakeDelay { bus: bus.clone() };
    (Tcs34725::new_with_interface(iface, delay), bus)
}
