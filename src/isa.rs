//! The opcode table: the canonical mapping from mnemonic to encoding, shared by the
//! assembler and the interpreter. This is the central invariant of the whole toolchain —
//! both sides must agree on it bit-for-bit.

/// Describes how a mnemonic is encoded.
///
/// `data` and `SET` use sentinel opcode values that never appear in object code: `data`
/// (-1) emits its operand as a raw 32-bit word, and `SET` (-2) is a pure assembly-time
/// directive that emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub opcode: i8,
    pub takes_operand: bool,
}

pub const DATA_OPCODE: i8 = -1;
pub const SET_OPCODE: i8 = -2;

const fn op(opcode: i8, takes_operand: bool) -> OpcodeInfo {
    OpcodeInfo { opcode, takes_operand }
}

/// The authoritative mnemonic -> opcode table. Mnemonics are case-sensitive.
pub const OPCODE_TABLE: &[(&str, OpcodeInfo)] = &[
    ("data", op(DATA_OPCODE, true)),
    ("ldc", op(0, true)),
    ("adc", op(1, true)),
    ("ldl", op(2, true)),
    ("stl", op(3, true)),
    ("ldnl", op(4, true)),
    ("stnl", op(5, true)),
    ("add", op(6, false)),
    ("sub", op(7, false)),
    ("shl", op(8, false)),
    ("shr", op(9, false)),
    ("adj", op(10, true)),
    ("a2sp", op(11, false)),
    ("sp2a", op(12, false)),
    ("call", op(13, true)),
    ("return", op(14, false)),
    ("brz", op(15, true)),
    ("brlz", op(16, true)),
    ("br", op(17, true)),
    ("HALT", op(18, false)),
    ("SET", op(SET_OPCODE, true)),
];

/// Look up a mnemonic's descriptor. `None` if the mnemonic is unknown.
pub fn lookup(mnemonic: &str) -> Option<OpcodeInfo> {
    OPCODE_TABLE
        .iter()
        .find(|(name, _)| *name == mnemonic)
        .map(|(_, info)| *info)
}

/// Mnemonics whose operand is a PC-relative branch target rather than an absolute value.
pub fn is_branch(mnemonic: &str) -> bool {
    matches!(mnemonic, "br" | "brz" | "brlz" | "call")
}

/// Minimum value representable in the signed 24-bit operand field.
pub const OPERAND_MIN: i32 = -(1 << 23);
/// Maximum value representable in the signed 24-bit operand field.
pub const OPERAND_MAX: i32 = (1 << 23) - 1;
