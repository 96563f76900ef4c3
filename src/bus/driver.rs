use super::config::BusConfig;
use super::Bus;
use crate::error::BusError;
use crate::gpio::Gpio;
use crate::types::{Address, Byte, Level, PinMode};

/// Bus master for the FPGA CPU's register interface.
///
/// Every transaction leaves the bus at rest: data lines are inputs and both
/// strobes are low. The protocol is open-loop, so nothing here can tell
/// whether the FPGA actually latched a write or drove a read.
pub struct FpgaBus<G> {
    gpio: G,
    config: BusConfig,
}

impl<G> FpgaBus<G>
where
    G: Gpio,
{
    pub fn new(gpio: G, config: BusConfig) -> Result<FpgaBus<G>, BusError> {
        config.validate()?;
        debug!("fpga bus pins = {:?}", config);
        Ok(FpgaBus { gpio, config })
    }

    pub fn with_default_pins(gpio: G) -> FpgaBus<G> {
        FpgaBus {
            gpio,
            config: BusConfig::default(),
        }
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    pub fn release(self) -> G {
        self.gpio
    }

    pub fn max_address(&self) -> Address {
        self.config.max_address()
    }

    pub fn checked_address(&self, addr: u16) -> Result<Address, BusError> {
        if addr > u16::from(self.max_address()) {
            return Err(BusError::AddressOutOfRange(addr));
        }
        Ok(addr as Address)
    }

    /// Drives the address lines with `addr`, LSB on the first line.
    /// Bits above the address bus width are dropped.
    pub fn set_address(&mut self, addr: Address) {
        if addr > self.max_address() {
            debug!(
                "address {:#04x} truncated to {:#04x}",
                addr,
                addr & self.max_address()
            );
        }
        let mut bits = u32::from(addr);
        for pin in self.config.addr_pins() {
            self.gpio.set_mode(pin, PinMode::Output);
            self.gpio.write(pin, Level::from_bit(bits));
            bits >>= 1;
        }
    }

    /// Presents `data` on the data lines and pulses the write strobe.
    pub fn write(&mut self, data: Byte) {
        trace!("write {:#04x}", data);
        self.strobes_low();
        let mut bits = u32::from(data);
        for pin in self.config.data_pins() {
            self.gpio.set_mode(pin, PinMode::Output);
            self.gpio.write(pin, Level::from_bit(bits));
            bits >>= 1;
        }
        self.gpio.write(self.config.reg_write, Level::High);
        self.gpio.write(self.config.reg_write, Level::Low);
        for pin in self.config.data_pins() {
            self.gpio.write(pin, Level::Low);
            self.gpio.set_mode(pin, PinMode::Input);
        }
    }

    /// Raises the read strobe and samples the data lines, MSB first.
    ///
    /// Whatever the lines float to is returned if the addressed register
    /// does not drive them while the strobe is high.
    pub fn read(&mut self) -> Byte {
        self.strobes_low();
        for pin in self.config.data_pins() {
            self.gpio.set_mode(pin, PinMode::Input);
        }
        self.gpio.write(self.config.reg_read, Level::High);
        let mut data: Byte = 0;
        for pin in self.config.data_pins().rev() {
            data = (data << 1) + self.gpio.read(pin).as_bit();
        }
        self.gpio.write(self.config.reg_read, Level::Low);
        trace!("read {:#04x}", data);
        data
    }

    pub fn write_at(&mut self, addr: Address, data: Byte) {
        self.set_address(addr);
        self.write(data);
    }

    pub fn read_at(&mut self, addr: Address) -> Byte {
        self.set_address(addr);
        self.read()
    }

    fn strobes_low(&mut self) {
        self.gpio.write(self.config.reg_write, Level::Low);
        self.gpio.write(self.config.reg_read, Level::Low);
    }
}

impl<G> Bus for FpgaBus<G>
where
    G: Gpio,
{
    fn read_at(&mut self, addr: Address) -> Byte {
        FpgaBus::read_at(self, addr)
    }

    fn write_at(&mut self, addr: Address, data: Byte) {
        FpgaBus::write_at(self, addr, data)
    }
}
