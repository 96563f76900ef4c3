pub mod config;
mod driver;

pub use self::config::BusConfig;
pub use self::driver::FpgaBus;

use byteorder::{ByteOrder, LittleEndian};

use crate::types::{Address, Byte, HalfWord, Word};

/// Register-level access to the FPGA.
///
/// Multi-byte values span consecutive registers, least significant byte at
/// the lowest address. Each byte is its own transaction, so a multi-byte
/// access is not atomic.
pub trait Bus {
    fn read_at(&mut self, addr: Address) -> Byte;
    fn write_at(&mut self, addr: Address, data: Byte);

    fn read_halfword_at(&mut self, addr: Address) -> HalfWord {
        let mut buf = [0; 2];
        self.read_bytes_at(addr, &mut buf);
        LittleEndian::read_u16(&buf)
    }

    fn read_word_at(&mut self, addr: Address) -> Word {
        let mut buf = [0; 4];
        self.read_bytes_at(addr, &mut buf);
        LittleEndian::read_u32(&buf)
    }

    fn write_halfword_at(&mut self, addr: Address, data: HalfWord) {
        let mut buf = [0; 2];
        LittleEndian::write_u16(&mut buf, data);
        self.write_bytes_at(addr, &buf);
    }

    fn write_word_at(&mut self, addr: Address, data: Word) {
        let mut buf = [0; 4];
        LittleEndian::write_u32(&mut buf, data);
        self.write_bytes_at(addr, &buf);
    }

    fn read_bytes_at(&mut self, addr: Address, buf: &mut [u8]) {
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.read_at(addr.wrapping_add(offset as Address));
        }
    }

    fn write_bytes_at(&mut self, addr: Address, buf: &[u8]) {
        for (offset, byte) in buf.iter().enumerate() {
            self.write_at(addr.wrapping_add(offset as Address), *byte);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::*;

    struct MockBus {
        pub regs: Vec<u8>,
        pub log: Vec<(char, Address)>,
    }

    impl MockBus {
        pub fn new() -> Self {
            MockBus {
                regs: vec![0; 256],
                log: Vec::new(),
            }
        }
    }

    impl Bus for MockBus {
        fn read_at(&mut self, addr: Address) -> Byte {
            self.log.push(('r', addr));
            self.regs[addr as usize]
        }

        fn write_at(&mut self, addr: Address, data: Byte) {
            self.log.push(('w', addr));
            self.regs[addr as usize] = data;
        }
    }

    #[test]
    fn counter_reads_lsb_first() {
        let mut bus = MockBus::new();
        bus.regs[COUNT_LSB as usize] = 0x34;
        bus.regs[COUNT_MSB as usize] = 0x12;
        assert_eq!(bus.read_halfword_at(COUNT_LSB), 0x1234);
        assert_eq!(bus.log, vec![('r', COUNT_LSB), ('r', COUNT_MSB)]);
    }

    #[test]
    fn word_spans_four_data_registers() {
        let mut bus = MockBus::new();
        bus.write_word_at(CPU_WDATA1, 0x1234_5678);
        assert_eq!(bus.regs[CPU_WDATA1 as usize], 0x78);
        assert_eq!(bus.regs[CPU_WDATA2 as usize], 0x56);
        assert_eq!(bus.regs[CPU_WDATA3 as usize], 0x34);
        assert_eq!(bus.regs[CPU_WDATA4 as usize], 0x12);
        assert_eq!(bus.read_word_at(CPU_WDATA1), 0x1234_5678);
    }

    #[test]
    fn halfword_write_order() {
        let mut bus = MockBus::new();
        bus.write_halfword_at(RAM_ADDR1, 0xBEEF);
        assert_eq!(bus.log, vec![('w', RAM_ADDR1), ('w', RAM_ADDR2)]);
        assert_eq!(bus.regs[RAM_ADDR1 as usize], 0xEF);
        assert_eq!(bus.regs[RAM_ADDR2 as usize], 0xBE);
    }
}
