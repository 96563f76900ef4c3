pub type Byte = u8;
pub type HalfWord = u16;
pub type Word = u32;

pub type Address = u8;
pub type Pin = u8;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn from_bit(bit: u32) -> Self {
        if bit & 1 != 0 {
            Level::High
        } else {
            Level::Low
        }
    }

    pub fn as_bit(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinMode {
    Input,
    Output,
}

#[test]
fn level_from_bit_uses_lsb_only() {
    assert_eq!(Level::from_bit(0b10), Level::Low);
    assert_eq!(Level::from_bit(0b11), Level::High);
    assert_eq!(Level::High.as_bit(), 1);
}
