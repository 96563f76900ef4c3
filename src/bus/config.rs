use std::ops::Range;

use crate::constants::{ADDR_LSB, ADDR_MSB, DATA_LSB, DATA_WIDTH, REG_READ, REG_WRITE, SLOW_CLOCK};
use crate::error::BusError;
use crate::types::{Address, Pin};

/// Which host pins carry which bus lines.
///
/// Data and address lines occupy contiguous pin runs starting at their LSB
/// pin. The data bus is always eight lines wide.
#[derive(Debug, PartialEq, Clone)]
pub struct BusConfig {
    pub data_lsb: Pin,
    pub addr_lsb: Pin,
    pub addr_width: u8,
    pub reg_write: Pin,
    pub reg_read: Pin,
    /// Reserved for the FPGA's clock mode select. Never driven by the bus.
    pub slow_clock: Pin,
}

impl Default for BusConfig {
    fn default() -> BusConfig {
        BusConfig {
            data_lsb: DATA_LSB,
            addr_lsb: ADDR_LSB,
            addr_width: ADDR_MSB - ADDR_LSB + 1,
            reg_write: REG_WRITE,
            reg_read: REG_READ,
            slow_clock: SLOW_CLOCK,
        }
    }
}

impl BusConfig {
    pub fn validate(&self) -> Result<(), BusError> {
        if self.addr_width == 0 || self.addr_width > 8 {
            return Err(BusError::InvalidAddressWidth(self.addr_width));
        }
        let mut used: Vec<u16> = Vec::new();
        let control = [self.reg_write, self.reg_read, self.slow_clock];
        let lines = Self::run(self.data_lsb, DATA_WIDTH)
            .chain(Self::run(self.addr_lsb, self.addr_width))
            .chain(
                control
                    .iter()
                    .map(|p| u16::from(*p)),
            );
        for pin in lines {
            if pin > u16::from(Pin::MAX) {
                return Err(BusError::PinConflict(Pin::MAX));
            }
            if used.contains(&pin) {
                return Err(BusError::PinConflict(pin as Pin));
            }
            used.push(pin);
        }
        Ok(())
    }

    /// Data pins, LSB first.
    pub fn data_pins(&self) -> impl DoubleEndedIterator<Item = Pin> {
        Self::pins(self.data_lsb, DATA_WIDTH)
    }

    /// Address pins, LSB first.
    pub fn addr_pins(&self) -> impl DoubleEndedIterator<Item = Pin> {
        Self::pins(self.addr_lsb, self.addr_width)
    }

    pub fn max_address(&self) -> Address {
        ((1u16 << self.addr_width) - 1) as Address
    }

    fn run(lsb: Pin, width: u8) -> Range<u16> {
        u16::from(lsb)..u16::from(lsb) + u16::from(width)
    }

    // Only valid after validate() has ruled out pins past Pin::MAX.
    fn pins(lsb: Pin, width: u8) -> impl DoubleEndedIterator<Item = Pin> {
        Self::run(lsb, width).map(|p| p as Pin)
    }
}
