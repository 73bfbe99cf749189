/// Binary operator alphabet. The bitcode-level `BinOpcode` (see
/// `schema::enums::BinOpcode`) only has 13 of these; `Rol`/`Ror` are
/// synthesized-only (never parsed from input, only produced by later
/// optimization passes) but must be representable here so the printer and
/// classifier have a total domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    UDiv,
    SDiv,
    URem,
    SRem,
    Shl,
    LShr,
    AShr,
    And,
    Or,
    Xor,
    Rol,
    Ror,
}

impl BinOp {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::UDiv => "udiv",
            Self::SDiv => "sdiv",
            Self::URem => "urem",
            Self::SRem => "srem",
            Self::Shl => "shl",
            Self::LShr => "lshr",
            Self::AShr => "ashr",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Rol => "rol",
            Self::Ror => "ror",
        }
    }
}

impl From<crate::schema::enums::BinOpcode> for BinOp {
    fn from(op: crate::schema::enums::BinOpcode) -> Self {
        use crate::schema::enums::BinOpcode as Bc;
        match op {
            Bc::Add => Self::Add,
            Bc::Sub => Self::Sub,
            Bc::Mul => Self::Mul,
            Bc::Udiv => Self::UDiv,
            Bc::Sdiv => Self::SDiv,
            Bc::Urem => Self::URem,
            Bc::Srem => Self::SRem,
            Bc::Shl => Self::Shl,
            Bc::Lshr => Self::LShr,
            Bc::Ashr => Self::AShr,
            Bc::And => Self::And,
            Bc::Or => Self::Or,
            Bc::Xor => Self::Xor,
        }
    }
}

/// Cast operator alphabet, trimmed to the 12 casts actually reachable at
/// this layer: `schema::enums::CastOpcode` additionally defines `Addrspace`
/// (12), but address-space casts are lowered to plain bitcasts upstream of
/// this builder and never reach it as a distinct opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOp {
    Trunc,
    ZExt,
    SExt,
    FpToUi,
    FpToSi,
    UiToFp,
    SiToFp,
    FpTrunc,
    FpExt,
    PtrToInt,
    IntToPtr,
    Bitcast,
}

impl CastOp {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Trunc => "trunc",
            Self::ZExt => "zext",
            Self::SExt => "sext",
            Self::FpToUi => "fptoui",
            Self::FpToSi => "fptosi",
            Self::UiToFp => "uitofp",
            Self::SiToFp => "sitofp",
            Self::FpTrunc => "fptrunc",
            Self::FpExt => "fpext",
            Self::PtrToInt => "ptrtoint",
            Self::IntToPtr => "inttoptr",
            Self::Bitcast => "bitcast",
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Some(match code {
            0 => Self::Trunc,
            1 => Self::ZExt,
            2 => Self::SExt,
            3 => Self::FpToUi,
            4 => Self::FpToSi,
            5 => Self::UiToFp,
            6 => Self::SiToFp,
            7 => Self::FpTrunc,
            8 => Self::FpExt,
            9 => Self::PtrToInt,
            10 => Self::IntToPtr,
            11 => Self::Bitcast,
            _ => return None,
        })
    }
}

/// The full integer + float comparison predicate alphabet (26 values,
/// matching LLVM's `CmpInst::Predicate` numbering used on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    FcmpFalse,
    FcmpOeq,
    FcmpOgt,
    FcmpOge,
    FcmpOlt,
    FcmpOle,
    FcmpOne,
    FcmpOrd,
    FcmpUno,
    FcmpUeq,
    FcmpUgt,
    FcmpUge,
    FcmpUlt,
    FcmpUle,
    FcmpUne,
    FcmpTrue,
    IcmpEq,
    IcmpNe,
    IcmpUgt,
    IcmpUge,
    IcmpUlt,
    IcmpUle,
    IcmpSgt,
    IcmpSge,
    IcmpSlt,
    IcmpSle,
}

impl Predicate {
    /// Wire encoding matches LLVM's `FCmpInst`/`ICmpInst` predicate enum
    /// values as emitted in `CMP2` records.
    pub fn from_code(code: u64) -> Option<Self> {
        Some(match code {
            0 => Self::FcmpFalse,
            1 => Self::FcmpOeq,
            2 => Self::FcmpOgt,
            3 => Self::FcmpOge,
            4 => Self::FcmpOlt,
            5 => Self::FcmpOle,
            6 => Self::FcmpOne,
            7 => Self::FcmpOrd,
            8 => Self::FcmpUno,
            9 => Self::FcmpUeq,
            10 => Self::FcmpUgt,
            11 => Self::FcmpUge,
            12 => Self::FcmpUlt,
            13 => Self::FcmpUle,
            14 => Self::FcmpUne,
            15 => Self::FcmpTrue,
            32 => Self::IcmpEq,
            33 => Self::IcmpNe,
            34 => Self::IcmpUgt,
            35 => Self::IcmpUge,
            36 => Self::IcmpUlt,
            37 => Self::IcmpUle,
            38 => Self::IcmpSgt,
            39 => Self::IcmpSge,
            40 => Self::IcmpSlt,
            41 => Self::IcmpSle,
            _ => return None,
        })
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::FcmpFalse => "fcmp_false",
            Self::FcmpOeq => "fcmp_oeq",
            Self::FcmpOgt => "fcmp_ogt",
            Self::FcmpOge => "fcmp_oge",
            Self::FcmpOlt => "fcmp_olt",
            Self::FcmpOle => "fcmp_ole",
            Self::FcmpOne => "fcmp_one",
            Self::FcmpOrd => "fcmp_ord",
            Self::FcmpUno => "fcmp_uno",
            Self::FcmpUeq => "fcmp_ueq",
            Self::FcmpUgt => "fcmp_ugt",
            Self::FcmpUge => "fcmp_uge",
            Self::FcmpUlt => "fcmp_ult",
            Self::FcmpUle => "fcmp_ule",
            Self::FcmpUne => "fcmp_une",
            Self::FcmpTrue => "fcmp_true",
            Self::IcmpEq => "icmp_eq",
            Self::IcmpNe => "icmp_ne",
            Self::IcmpUgt => "icmp_ugt",
            Self::IcmpUge => "icmp_uge",
            Self::IcmpUlt => "icmp_ult",
            Self::IcmpUle => "icmp_ule",
            Self::IcmpSgt => "icmp_sgt",
            Self::IcmpSge => "icmp_sge",
            Self::IcmpSlt => "icmp_slt",
            Self::IcmpSle => "icmp_sle",
        }
    }
}
