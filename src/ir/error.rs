use std::{error, fmt};

/// Errors raised while building the instruction stream of a single function
/// body. Every one is fatal: parsing the enclosing function stops at the
/// first `Err` returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The operand decoder ran past the end of the current record.
    MissingOperand,
    /// The dispatcher received a function-block record code it doesn't know.
    UnsupportedOpcode(u64),
    /// `DECLAREBLOCKS` was zero, greater than 65535, or issued twice.
    BadBlockCount(u64),
    /// A GEP step tried to index through a type that isn't a pointer,
    /// struct, or array.
    GepBadType,
    /// A GEP step into a struct used a non-constant or out-of-range index.
    GepBadIndex,
    /// A call/invoke callee did not resolve to a function, temporary, or
    /// register-frame value after walking alias chains.
    BadCallee,
    /// A call/invoke callee's type is not a function type.
    NonFunctionCall,
    /// A call/invoke used the must-tail calling-convention bit.
    MustTailUnsupported,
    /// A by-value call argument attribute was applied to a non-pointer type.
    ByvalNonPointer,
    /// A switch case value did not come from a constant.
    SwitchNonConstantCase,
    /// A switch case's type does not match the switch condition's type.
    SwitchTypeMismatch,
    /// `ALLOCA` was not given the expected four operands.
    AllocaArgCount,
    /// An alias chain exceeded the resolution bound without reaching a
    /// concrete value.
    AliasChainTooLong,
    /// An `extractval`/`insertval` index walked into a type that isn't a
    /// struct or array.
    AggregateIndexBadType,
    /// An `extractval`/`insertval` struct index was out of range.
    AggregateIndexOutOfRange,
    /// A type-table or value-table lookup used an id outside the table.
    BadId,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperand => write!(f, "read past end of record operands"),
            Self::UnsupportedOpcode(op) => write!(f, "unsupported function-body opcode {op}"),
            Self::BadBlockCount(n) => write!(f, "invalid basic block count {n}"),
            Self::GepBadType => write!(f, "gep: cannot index through this type"),
            Self::GepBadIndex => write!(f, "gep: bad index into struct"),
            Self::BadCallee => write!(f, "call: unsupported callee value"),
            Self::NonFunctionCall => write!(f, "call: callee type is not a function type"),
            Self::MustTailUnsupported => write!(f, "call: must-tail calls are not supported"),
            Self::ByvalNonPointer => write!(f, "call: by-value argument is not a pointer"),
            Self::SwitchNonConstantCase => write!(f, "switch: case value is not a constant"),
            Self::SwitchTypeMismatch => write!(f, "switch: case type does not match condition"),
            Self::AllocaArgCount => write!(f, "alloca: expected exactly 4 operands"),
            Self::AliasChainTooLong => write!(f, "alias chain exceeded resolution bound"),
            Self::AggregateIndexBadType => write!(f, "index: cannot index through this type"),
            Self::AggregateIndexOutOfRange => write!(f, "index: struct index out of range"),
            Self::BadId => write!(f, "reference to an id outside the owning table"),
        }
    }
}

impl error::Error for ParseError {}
