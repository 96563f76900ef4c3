//! In-memory GPIO bank wired to a simulated FPGA register interface.
//!
//! `SimGpio` keeps the mode and output latch of every pin and records each
//! call made on it. Strobe edges are decoded with the same `BusConfig` the
//! driver uses and forwarded to a `Device`, which plays the FPGA side.

use super::Gpio;
use crate::bus::BusConfig;
use crate::constants::*;
use crate::types::{Address, Byte, Level, Pin, PinMode};

const PINS: usize = 256;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    Mode(Pin, PinMode),
    Write(Pin, Level),
    Read(Pin),
}

/// The FPGA side of the bus.
pub trait Device {
    /// Called on the rising edge of the write strobe.
    fn strobe_write(&mut self, addr: Address, data: Byte);

    /// Called on the rising edge of the read strobe. `None` leaves the data
    /// lines undriven.
    fn strobe_read(&mut self, addr: Address) -> Option<Byte>;
}

pub struct SimGpio<D> {
    config: BusConfig,
    device: D,
    modes: [Option<PinMode>; PINS],
    latches: [Level; PINS],
    external: [Option<Level>; PINS],
    events: Vec<Event>,
    overlapped: bool,
}

impl<D> SimGpio<D>
where
    D: Device,
{
    pub fn new(config: BusConfig, device: D) -> SimGpio<D> {
        SimGpio {
            config,
            device,
            modes: [None; PINS],
            latches: [Level::Low; PINS],
            external: [None; PINS],
            events: Vec::new(),
            overlapped: false,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn mode(&self, pin: Pin) -> Option<PinMode> {
        self.modes[pin as usize]
    }

    /// Level the host is driving on `pin`.
    pub fn level(&self, pin: Pin) -> Level {
        self.latches[pin as usize]
    }

    /// True if both strobes were ever high at the same time.
    pub fn strobes_overlapped(&self) -> bool {
        self.overlapped
    }

    pub fn snapshot_address(&self) -> Address {
        self.gather(self.config.addr_pins())
    }

    pub fn snapshot_data(&self) -> Byte {
        self.gather(self.config.data_pins())
    }

    fn gather<I>(&self, pins: I) -> u8
    where
        I: DoubleEndedIterator<Item = Pin>,
    {
        pins.rev()
            .fold(0, |acc, pin| (acc << 1) | self.level(pin).as_bit())
    }

    fn on_edge(&mut self, pin: Pin, prev: Level, level: Level) {
        let rising = prev == Level::Low && level == Level::High;
        let falling = prev == Level::High && level == Level::Low;
        if pin == self.config.reg_write && rising {
            let (addr, data) = (self.snapshot_address(), self.snapshot_data());
            self.device.strobe_write(addr, data);
        } else if pin == self.config.reg_read && rising {
            let addr = self.snapshot_address();
            if let Some(data) = self.device.strobe_read(addr) {
                let mut bits = u32::from(data);
                for pin in self.config.data_pins() {
                    self.external[pin as usize] = Some(Level::from_bit(bits));
                    bits >>= 1;
                }
            }
        } else if pin == self.config.reg_read && falling {
            for pin in self.config.data_pins() {
                self.external[pin as usize] = None;
            }
        }
        if self.level(self.config.reg_write) == Level::High
            && self.level(self.config.reg_read) == Level::High
        {
            self.overlapped = true;
        }
    }
}

impl<D> Gpio for SimGpio<D>
where
    D: Device,
{
    fn set_mode(&mut self, pin: Pin, mode: PinMode) {
        self.events.push(Event::Mode(pin, mode));
        self.modes[pin as usize] = Some(mode);
    }

    fn write(&mut self, pin: Pin, level: Level) {
        self.events.push(Event::Write(pin, level));
        let prev = self.latches[pin as usize];
        self.latches[pin as usize] = level;
        self.on_edge(pin, prev, level);
    }

    // Undriven inputs read low.
    fn read(&mut self, pin: Pin) -> Level {
        self.events.push(Event::Read(pin));
        match self.modes[pin as usize] {
            Some(PinMode::Output) => self.latches[pin as usize],
            _ => self.external[pin as usize].unwrap_or(Level::Low),
        }
    }
}

/// One byte of storage per bus address.
pub struct RegisterFile {
    regs: [Byte; PINS],
    silent: [bool; PINS],
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            regs: [0; PINS],
            silent: [false; PINS],
        }
    }

    pub fn get(&self, addr: Address) -> Byte {
        self.regs[addr as usize]
    }

    pub fn set(&mut self, addr: Address, data: Byte) {
        self.regs[addr as usize] = data;
    }

    /// A silent register never drives the data lines on a read.
    pub fn set_silent(&mut self, addr: Address, silent: bool) {
        self.silent[addr as usize] = silent;
    }

    /// Copies the CPU and RAM write-data registers to their read-data
    /// counterparts.
    pub fn loopback(&mut self) {
        for i in 0..4 {
            self.regs[(CPU_RDATA1 + i) as usize] = self.regs[(CPU_WDATA1 + i) as usize];
            self.regs[(RAM_RDATA1 + i) as usize] = self.regs[(RAM_WDATA1 + i) as usize];
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        RegisterFile::new()
    }
}

impl Device for RegisterFile {
    fn strobe_write(&mut self, addr: Address, data: Byte) {
        self.set(addr, data);
    }

    fn strobe_read(&mut self, addr: Address) -> Option<Byte> {
        if self.silent[addr as usize] {
            None
        } else {
            Some(self.get(addr))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sim() -> SimGpio<RegisterFile> {
        SimGpio::new(BusConfig::default(), RegisterFile::new())
    }

    #[test]
    fn write_strobe_latches_on_rising_edge() {
        let mut gpio = sim();
        gpio.write(ADDR_LSB + 1, Level::High);
        gpio.write(DATA_LSB + 7, Level::High);
        gpio.write(REG_WRITE, Level::High);
        assert_eq!(gpio.device().get(0b10), 0x80);

        gpio.write(DATA_LSB, Level::High);
        gpio.write(REG_WRITE, Level::High);
        assert_eq!(gpio.device().get(0b10), 0x80);
    }

    #[test]
    fn read_strobe_drives_inputs_until_falling_edge() {
        let mut gpio = sim();
        gpio.device_mut().set(0, 0x81);
        gpio.set_mode(DATA_LSB, PinMode::Input);
        gpio.set_mode(DATA_MSB, PinMode::Input);
        gpio.write(REG_READ, Level::High);
        assert_eq!(gpio.read(DATA_LSB), Level::High);
        assert_eq!(gpio.read(DATA_MSB), Level::High);
        assert_eq!(gpio.read(DATA_LSB + 1), Level::Low);
        gpio.write(REG_READ, Level::Low);
        assert_eq!(gpio.read(DATA_LSB), Level::Low);
    }

    #[test]
    fn output_pin_reads_its_latch() {
        let mut gpio = sim();
        gpio.device_mut().set(0, 0x00);
        gpio.set_mode(DATA_LSB, PinMode::Output);
        gpio.write(DATA_LSB, Level::High);
        gpio.write(REG_READ, Level::High);
        assert_eq!(gpio.read(DATA_LSB), Level::High);
    }

    #[test]
    fn records_overlapping_strobes() {
        let mut gpio = sim();
        gpio.write(REG_READ, Level::High);
        assert!(!gpio.strobes_overlapped());
        gpio.write(REG_WRITE, Level::High);
        assert!(gpio.strobes_overlapped());
    }

    #[test]
    fn loopback_copies_both_blocks() {
        let mut regs = RegisterFile::new();
        regs.set(CPU_WDATA3, 0x33);
        regs.set(RAM_WDATA4, 0x44);
        regs.loopback();
        assert_eq!(regs.get(CPU_RDATA3), 0x33);
        assert_eq!(regs.get(RAM_RDATA4), 0x44);
        assert_eq!(regs.get(CPU_RADDR12), 0);
    }
}
