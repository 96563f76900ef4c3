pub mod sim;

use crate::types::{Level, Pin, PinMode};

/// Pin-level access to the host controller's GPIO bank.
pub trait Gpio {
    fn set_mode(&mut self, pin: Pin, mode: PinMode);
    fn write(&mut self, pin: Pin, level: Level);
    fn read(&mut self, pin: Pin) -> Level;
}

impl<'a, G: Gpio + ?Sized> Gpio for &'a mut G {
    fn set_mode(&mut self, pin: Pin, mode: PinMode) {
        (**self).set_mode(pin, mode)
    }

    fn write(&mut self, pin: Pin, level: Level) {
        (**self).write(pin, level)
    }

    fn read(&mut self, pin: Pin) -> Level {
        (**self).read(pin)
    }
}
