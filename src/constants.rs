// Register offsets and bit encodings of the FPGA CPU design.
// The values are fixed by the bitstream and must not change.

// ALU operations
pub const ALU_OP_NULL: u8 = 0;
pub const ALU_OP_ADD: u8 = 1;
pub const ALU_OP_SUB: u8 = 2;
pub const ALU_OP_NOT: u8 = 3;
pub const ALU_OP_AND: u8 = 4;
pub const ALU_OP_OR: u8 = 5;
pub const ALU_OP_XOR: u8 = 6;
pub const ALU_OP_TST: u8 = 7;
pub const ALU_OP_NEG: u8 = 8;
pub const ALU_OP_ADC: u8 = 9;
pub const ALU_OP_SBC: u8 = 10;
pub const ALU_OP_SHL: u8 = 11;
pub const ALU_OP_SHR: u8 = 12;
// Unassigned code, makes the ALU raise its error flag.
pub const ALU_OP_ERR: u8 = 255;

// ALU flags
pub const ALU_FLAG_NONE: u8 = 0;
pub const ALU_FLAG_CARRY: u8 = 1;
pub const ALU_FLAG_SIGN: u8 = 2;
pub const ALU_FLAG_ZERO: u8 = 4;
pub const ALU_FLAG_ERROR: u8 = 8;
pub const ALU_FLAG_BUSER: u8 = 16;

// Control enables
pub const CTRL_NONE: u8 = 0;
pub const CTRL_START: u8 = 1;
pub const CTRL_EN_WRITE: u8 = 2;
pub const CTRL_EN_READ: u8 = 4;
pub const CTRL_EN_FLAGS: u8 = 8;
pub const CTRL_OP2_1: u8 = 16;
pub const CTRL_MEM_WRITE: u8 = 32;
pub const CTRL_MEM_READ: u8 = 64;

// Counter registers
pub const COUNT_LSB: u8 = 0;
pub const COUNT_MSB: u8 = COUNT_LSB + 1;

// CPU control registers
pub const CPU_BASE: u8 = COUNT_LSB + 2;
pub const CPU_WDATA1: u8 = CPU_BASE;
pub const CPU_WDATA2: u8 = CPU_BASE + 1;
pub const CPU_WDATA3: u8 = CPU_BASE + 2;
pub const CPU_WDATA4: u8 = CPU_BASE + 3;
pub const CPU_RDATA1: u8 = CPU_BASE + 4;
pub const CPU_RDATA2: u8 = CPU_BASE + 5;
pub const CPU_RDATA3: u8 = CPU_BASE + 6;
pub const CPU_RDATA4: u8 = CPU_BASE + 7;
pub const CPU_RADDR12: u8 = CPU_BASE + 8;
pub const CPU_RADDR3: u8 = CPU_BASE + 9;
pub const CPU_WADDR: u8 = CPU_BASE + 10;
pub const CPU_FUNCT: u8 = CPU_BASE + 11;
pub const CPU_FLAGS: u8 = CPU_BASE + 12;
pub const CPU_ENABLES: u8 = CPU_BASE + 13;

// RAM control registers
pub const RAM_BASE: u8 = CPU_BASE + 14;
pub const RAM_WDATA1: u8 = RAM_BASE;
pub const RAM_WDATA2: u8 = RAM_BASE + 1;
pub const RAM_WDATA3: u8 = RAM_BASE + 2;
pub const RAM_WDATA4: u8 = RAM_BASE + 3;
pub const RAM_RDATA1: u8 = RAM_BASE + 4;
pub const RAM_RDATA2: u8 = RAM_BASE + 5;
pub const RAM_RDATA3: u8 = RAM_BASE + 6;
pub const RAM_RDATA4: u8 = RAM_BASE + 7;
pub const RAM_ADDR1: u8 = RAM_BASE + 8;
pub const RAM_ADDR2: u8 = RAM_BASE + 9;
pub const RAM_CDATA1: u8 = RAM_BASE + 10;
pub const RAM_CDATA2: u8 = RAM_BASE + 11;
pub const RAM_CDATA3: u8 = RAM_BASE + 12;
pub const RAM_CDATA4: u8 = RAM_BASE + 13;
pub const RAM_CADDR1: u8 = RAM_BASE + 14;
pub const RAM_CADDR2: u8 = RAM_BASE + 15;
pub const RAM_CADDR3: u8 = RAM_BASE + 16;
pub const RAM_CADDR4: u8 = RAM_BASE + 17;

// Default board wiring
pub const DATA_LSB: u8 = 0;
pub const DATA_MSB: u8 = 7;
pub const ADDR_LSB: u8 = 8;
pub const ADDR_MSB: u8 = 14;
pub const REG_WRITE: u8 = 15;
pub const REG_READ: u8 = 16;
pub const SLOW_CLOCK: u8 = 17;

pub const DATA_WIDTH: u8 = 8;

#[test]
fn alu_op_values() {
    let ops = [
        ALU_OP_NULL, ALU_OP_ADD, ALU_OP_SUB, ALU_OP_NOT, ALU_OP_AND, ALU_OP_OR, ALU_OP_XOR,
        ALU_OP_TST, ALU_OP_NEG, ALU_OP_ADC, ALU_OP_SBC, ALU_OP_SHL, ALU_OP_SHR,
    ];
    for (code, op) in ops.iter().enumerate() {
        assert_eq!(*op as usize, code);
    }
    assert_eq!(ALU_OP_ADD, 1);
    assert_eq!(ALU_OP_ERR, 255);
}

#[test]
fn flag_and_enable_bits() {
    assert_eq!(ALU_FLAG_NONE, 0);
    assert_eq!(ALU_FLAG_CARRY, 1);
    assert_eq!(ALU_FLAG_SIGN, 2);
    assert_eq!(ALU_FLAG_ZERO, 4);
    assert_eq!(ALU_FLAG_ERROR, 8);
    assert_eq!(ALU_FLAG_BUSER, 16);

    assert_eq!(CTRL_NONE, 0);
    assert_eq!(CTRL_START, 1);
    assert_eq!(CTRL_EN_WRITE, 2);
    assert_eq!(CTRL_EN_READ, 4);
    assert_eq!(CTRL_EN_FLAGS, 8);
    assert_eq!(CTRL_OP2_1, 16);
    assert_eq!(CTRL_MEM_WRITE, 32);
    assert_eq!(CTRL_MEM_READ, 64);
}

#[test]
fn counter_and_cpu_block() {
    assert_eq!(COUNT_LSB, 0);
    assert_eq!(COUNT_MSB, 1);
    assert_eq!(CPU_BASE, 2);
    assert_eq!(CPU_WDATA1, 2);
    assert_eq!(CPU_WDATA4, 5);
    assert_eq!(CPU_RDATA1, 6);
    assert_eq!(CPU_RDATA4, 9);
    assert_eq!(CPU_RADDR12, 10);
    assert_eq!(CPU_RADDR3, 11);
    assert_eq!(CPU_WADDR, 12);
    assert_eq!(CPU_FUNCT, 13);
    assert_eq!(CPU_FLAGS, 14);
    assert_eq!(CPU_ENABLES, 15);
}

#[test]
fn ram_block() {
    assert_eq!(RAM_BASE, 16);
    assert_eq!(RAM_WDATA1, 16);
    assert_eq!(RAM_RDATA1, 20);
    assert_eq!(RAM_ADDR1, 24);
    assert_eq!(RAM_ADDR2, 25);
    assert_eq!(RAM_CDATA1, 26);
    assert_eq!(RAM_CDATA4, 29);
    assert_eq!(RAM_CADDR1, 30);
    assert_eq!(RAM_CADDR4, 33);
    assert_eq!(RAM_CADDR4, CPU_BASE + 14 + 17);
}
