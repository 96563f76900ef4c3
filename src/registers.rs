pub mod alu;

use crate::constants::*;
use crate::types::Address;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Block {
    Counter,
    Cpu,
    Ram,
}

impl Block {
    pub fn of(addr: Address) -> Option<Block> {
        match addr {
            COUNT_LSB..=COUNT_MSB => Some(Block::Counter),
            CPU_BASE..=CPU_ENABLES => Some(Block::Cpu),
            RAM_BASE..=RAM_CADDR4 => Some(Block::Ram),
            _ => None,
        }
    }
}

/// Every named register, in address order.
pub const REGISTER_MAP: &[(&str, Address)] = &[
    ("COUNT_LSB", COUNT_LSB),
    ("COUNT_MSB", COUNT_MSB),
    ("CPU_WDATA1", CPU_WDATA1),
    ("CPU_WDATA2", CPU_WDATA2),
    ("CPU_WDATA3", CPU_WDATA3),
    ("CPU_WDATA4", CPU_WDATA4),
    ("CPU_RDATA1", CPU_RDATA1),
    ("CPU_RDATA2", CPU_RDATA2),
    ("CPU_RDATA3", CPU_RDATA3),
    ("CPU_RDATA4", CPU_RDATA4),
    ("CPU_RADDR12", CPU_RADDR12),
    ("CPU_RADDR3", CPU_RADDR3),
    ("CPU_WADDR", CPU_WADDR),
    ("CPU_FUNCT", CPU_FUNCT),
    ("CPU_FLAGS", CPU_FLAGS),
    ("CPU_ENABLES", CPU_ENABLES),
    ("RAM_WDATA1", RAM_WDATA1),
    ("RAM_WDATA2", RAM_WDATA2),
    ("RAM_WDATA3", RAM_WDATA3),
    ("RAM_WDATA4", RAM_WDATA4),
    ("RAM_RDATA1", RAM_RDATA1),
    ("RAM_RDATA2", RAM_RDATA2),
    ("RAM_RDATA3", RAM_RDATA3),
    ("RAM_RDATA4", RAM_RDATA4),
    ("RAM_ADDR1", RAM_ADDR1),
    ("RAM_ADDR2", RAM_ADDR2),
    ("RAM_CDATA1", RAM_CDATA1),
    ("RAM_CDATA2", RAM_CDATA2),
    ("RAM_CDATA3", RAM_CDATA3),
    ("RAM_CDATA4", RAM_CDATA4),
    ("RAM_CADDR1", RAM_CADDR1),
    ("RAM_CADDR2", RAM_CADDR2),
    ("RAM_CADDR3", RAM_CADDR3),
    ("RAM_CADDR4", RAM_CADDR4),
];

pub fn lookup(name: &str) -> Option<Address> {
    REGISTER_MAP
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, addr)| *addr)
}

pub fn name_of(addr: Address) -> Option<&'static str> {
    REGISTER_MAP
        .iter()
        .find(|(_, a)| *a == addr)
        .map(|(name, _)| *name)
}

#[test]
fn map_is_dense_and_ordered() {
    assert_eq!(REGISTER_MAP.len(), 2 + 14 + 18);
    for (i, (_, addr)) in REGISTER_MAP.iter().enumerate() {
        assert_eq!(*addr as usize, i);
    }
}

#[test]
fn lookup_by_name() {
    assert_eq!(lookup("CPU_FUNCT"), Some(13));
    assert_eq!(lookup("RAM_CADDR4"), Some(33));
    assert_eq!(lookup("cpu_funct"), None);
}

#[test]
fn name_by_address() {
    assert_eq!(name_of(CPU_RDATA1), Some("CPU_RDATA1"));
    assert_eq!(name_of(RAM_BASE), Some("RAM_WDATA1"));
    assert_eq!(name_of(34), None);
}

#[test]
fn blocks_partition_the_map() {
    assert_eq!(Block::of(COUNT_MSB), Some(Block::Counter));
    assert_eq!(Block::of(CPU_WDATA1), Some(Block::Cpu));
    assert_eq!(Block::of(CPU_ENABLES), Some(Block::Cpu));
    assert_eq!(Block::of(RAM_BASE), Some(Block::Ram));
    assert_eq!(Block::of(RAM_CADDR4), Some(Block::Ram));
    assert_eq!(Block::of(RAM_CADDR4 + 1), None);
    let ram = REGISTER_MAP
        .iter()
        .filter(|(_, a)| Block::of(*a) == Some(Block::Ram))
        .count();
    assert_eq!(ram, 18);
}
