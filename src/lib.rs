//! Bit-banged register bus between a microcontroller and an FPGA-hosted CPU.
//!
//! The host drives a 7-line address bus, an 8-line bidirectional data bus
//! and two strobes. `FpgaBus` performs single-byte transactions over any
//! `Gpio` implementation. `constants` and `registers` name the addresses and
//! bit encodings the FPGA design expects.

extern crate bitflags;
extern crate byteorder;
#[macro_use]
extern crate log;

pub mod bus;
pub mod constants;
pub mod error;
pub mod gpio;
pub mod registers;
pub mod types;

pub use crate::bus::{Bus, BusConfig, FpgaBus};
pub use crate::error::BusError;
pub use crate::gpio::Gpio;
pub use crate::types::{Address, Byte, Level, Pin, PinMode};
