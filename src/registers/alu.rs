use bitflags::bitflags;

use crate::constants::*;

/// Function codes accepted by the `CPU_FUNCT` register.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AluOp {
    Null,
    Add,
    Sub,
    Not,
    And,
    Or,
    Xor,
    Tst,
    Neg,
    Adc,
    Sbc,
    Shl,
    Shr,
    /// Any unassigned code. The ALU answers it with `AluFlags::ERROR`.
    Err,
}

impl AluOp {
    pub fn as_bits(self) -> u8 {
        match self {
            AluOp::Null => ALU_OP_NULL,
            AluOp::Add => ALU_OP_ADD,
            AluOp::Sub => ALU_OP_SUB,
            AluOp::Not => ALU_OP_NOT,
            AluOp::And => ALU_OP_AND,
            AluOp::Or => ALU_OP_OR,
            AluOp::Xor => ALU_OP_XOR,
            AluOp::Tst => ALU_OP_TST,
            AluOp::Neg => ALU_OP_NEG,
            AluOp::Adc => ALU_OP_ADC,
            AluOp::Sbc => ALU_OP_SBC,
            AluOp::Shl => ALU_OP_SHL,
            AluOp::Shr => ALU_OP_SHR,
            AluOp::Err => ALU_OP_ERR,
        }
    }

    pub fn from_bits(bits: u8) -> AluOp {
        match bits {
            ALU_OP_NULL => AluOp::Null,
            ALU_OP_ADD => AluOp::Add,
            ALU_OP_SUB => AluOp::Sub,
            ALU_OP_NOT => AluOp::Not,
            ALU_OP_AND => AluOp::And,
            ALU_OP_OR => AluOp::Or,
            ALU_OP_XOR => AluOp::Xor,
            ALU_OP_TST => AluOp::Tst,
            ALU_OP_NEG => AluOp::Neg,
            ALU_OP_ADC => AluOp::Adc,
            ALU_OP_SBC => AluOp::Sbc,
            ALU_OP_SHL => AluOp::Shl,
            ALU_OP_SHR => AluOp::Shr,
            _ => AluOp::Err,
        }
    }
}

bitflags! {
    /// Contents of the `CPU_FLAGS` register.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct AluFlags: u8 {
        const CARRY = ALU_FLAG_CARRY;
        const SIGN = ALU_FLAG_SIGN;
        const ZERO = ALU_FLAG_ZERO;
        const ERROR = ALU_FLAG_ERROR;
        const BUSER = ALU_FLAG_BUSER;
    }
}

bitflags! {
    /// Contents of the `CPU_ENABLES` register.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct Control: u8 {
        const START = CTRL_START;
        const EN_WRITE = CTRL_EN_WRITE;
        const EN_READ = CTRL_EN_READ;
        const EN_FLAGS = CTRL_EN_FLAGS;
        const OP2_1 = CTRL_OP2_1;
        const MEM_WRITE = CTRL_MEM_WRITE;
        const MEM_READ = CTRL_MEM_READ;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn op_codes_round_trip() {
        for bits in ALU_OP_NULL..=ALU_OP_SHR {
            assert_eq!(AluOp::from_bits(bits).as_bits(), bits);
        }
        assert_eq!(AluOp::Add.as_bits(), 1);
    }

    #[test]
    fn unassigned_codes_are_err() {
        assert_eq!(AluOp::from_bits(13), AluOp::Err);
        assert_eq!(AluOp::from_bits(200), AluOp::Err);
        assert_eq!(AluOp::Err.as_bits(), 255);
    }

    #[test]
    fn none_sentinels_are_empty() {
        assert_eq!(AluFlags::from_bits_truncate(ALU_FLAG_NONE), AluFlags::empty());
        assert_eq!(Control::from_bits_truncate(CTRL_NONE), Control::empty());
    }

    #[test]
    fn flags_decode_register_value() {
        let flags = AluFlags::from_bits_truncate(ALU_FLAG_CARRY | ALU_FLAG_ZERO);
        assert!(flags.contains(AluFlags::CARRY));
        assert!(flags.contains(AluFlags::ZERO));
        assert!(!flags.contains(AluFlags::ERROR));
        assert_eq!(AluFlags::all().bits(), 0x1F);
    }

    #[test]
    fn control_bits_pack() {
        let ctrl = Control::START | Control::MEM_READ;
        assert_eq!(ctrl.bits(), 65);
        assert_eq!(Control::MEM_READ.bits(), 64);
        assert_eq!(Control::all().bits(), 0x7F);
    }
}
