use std::error;
use std::fmt;

use crate::types::Pin;

#[derive(Debug, PartialEq, Clone)]
pub enum BusError {
    InvalidAddressWidth(u8),
    PinConflict(Pin),
    AddressOutOfRange(u16),
}

impl error::Error for BusError {}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BusError::InvalidAddressWidth(width) => {
                write!(f, "address bus must be 1 to 8 lines wide, got {}", width)
            }
            BusError::PinConflict(pin) => write!(f, "pin {} is assigned to more than one line", pin),
            BusError::AddressOutOfRange(addr) => {
                write!(f, "address {:#04x} does not fit on the address bus", addr)
            }
        }
    }
}

#[test]
fn display_names_the_pin() {
    assert_eq!(
        BusError::PinConflict(15).to_string(),
        "pin 15 is assigned to more than one line"
    );
    assert_eq!(
        BusError::AddressOutOfRange(0x80).to_string(),
        "address 0x80 does not fit on the address bus"
    );
}
