use super::block::BlockId;
use super::ops::{BinOp, CastOp, Predicate};
use super::types::TypeId;
use super::value::{ValueId, Vtp};

/// One index step of a GEP: the container type being indexed and the value
/// selecting within it.
#[derive(Debug, Clone, Copy)]
pub struct GepIndex {
    pub value: Vtp,
    pub container_type: TypeId,
}

#[derive(Debug, Clone, Copy)]
pub struct PhiNode {
    pub predecessor: BlockId,
    pub value: Vtp,
}

#[derive(Debug, Clone, Copy)]
pub struct CallArg {
    pub value: Vtp,
    /// Nonzero when this argument carries the by-value attribute: the
    /// number of bytes the callee receives a copy of.
    pub copy_size: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct SwitchCase {
    pub masked_value: u64,
    pub target: BlockId,
}

#[derive(Debug, Clone, Copy)]
pub struct LandingPadClause {
    pub clause: u32,
    pub is_catch: bool,
}

/// The result slot(s) an instruction binds. Most instructions bind exactly
/// one value (or none, for void-returning classes); a handful synthesized
/// by later passes bind a tuple.
#[derive(Debug, Clone, Copy, Default)]
pub enum InstrResult {
    #[default]
    None,
    Single(ValueId),
}

/// One instruction. Each class owns its variable-length payload as a `Vec`
/// instead of the trailing flexible array the format's C heritage uses —
/// Rust has no flexible array members, so this is the natural encoding of
/// the same "one allocation describes the whole record" idea.
#[derive(Debug, Clone)]
pub enum Instr {
    Unreachable,
    Ret { value: Option<Vtp>, result: InstrResult },
    BinOp { op: BinOp, lhs: Vtp, rhs: Vtp, result: InstrResult },
    Cast { op: CastOp, value: Vtp, result: InstrResult },
    Load { ptr: Vtp, cast: Option<CastOp>, result: InstrResult },
    Store { ptr: Vtp, value: Vtp },
    Gep { base: Vtp, indices: Vec<GepIndex>, result: InstrResult },
    Cmp2 { op: Predicate, lhs: Vtp, rhs: Vtp, result: InstrResult },
    Br { condition: Option<Vtp>, true_branch: BlockId, false_branch: BlockId },
    Phi { nodes: Vec<PhiNode>, result: InstrResult },
    Call {
        is_invoke: bool,
        callee: Vtp,
        args: Vec<CallArg>,
        normal_dest: Option<BlockId>,
        unwind_dest: Option<BlockId>,
        result: InstrResult,
    },
    Switch { value: Vtp, default_block: BlockId, cases: Vec<SwitchCase> },
    Alloca { num_items: Vtp, size: u64, alignment: u32, result: InstrResult },
    Select { predicate: Vtp, true_value: Vtp, false_value: Vtp, result: InstrResult },
    VaArg { value: Vtp, result: InstrResult },
    ExtractVal { value: Vtp, indices: Vec<u32>, result: InstrResult },
    InsertVal { src: Vtp, replacement: Vtp, indices: Vec<u32>, result: InstrResult },
    LandingPad { type_id: TypeId, is_cleanup: bool, clauses: Vec<LandingPadClause>, result: InstrResult },
    /// Reserves up to 8 value slots in the source format but only ever
    /// fills one at parse time; later lowering passes may grow this list,
    /// bounded at 8.
    Resume { values: Vec<Vtp> },

    // Synthesized-only: never produced by the parser, only by later
    // optimization/lowering passes. Kept here so the printer and classifier
    // have a total domain over every instruction class.
    CmpBranch { op: Predicate, lhs: Vtp, rhs: Vtp, true_branch: BlockId, false_branch: BlockId },
    CmpSelect { op: Predicate, lhs: Vtp, rhs: Vtp, true_value: Vtp, false_value: Vtp, result: InstrResult },
    Lea { base: Vtp, immediate_offset: i32, value_offset: Option<Vtp>, value_offset_multiply: u32, result: InstrResult },
    Move { value: Vtp, result: InstrResult },
    StackCopy { value: Vtp, size: u32, result: InstrResult },
    StackShrink { size: u32 },
    Mla { arg1: Vtp, arg2: Vtp, arg3: Vtp, result: InstrResult },
}

impl Instr {
    /// The value this instruction binds, if any. Tuple-returning classes
    /// aren't modeled here (none of this builder's instruction classes
    /// produce one), so this is always `None` or a single id.
    pub fn result(&self) -> Option<ValueId> {
        let r = match self {
            Instr::Ret { result, .. }
            | Instr::BinOp { result, .. }
            | Instr::Cast { result, .. }
            | Instr::Load { result, .. }
            | Instr::Gep { result, .. }
            | Instr::Cmp2 { result, .. }
            | Instr::Phi { result, .. }
            | Instr::Call { result, .. }
            | Instr::Alloca { result, .. }
            | Instr::Select { result, .. }
            | Instr::VaArg { result, .. }
            | Instr::ExtractVal { result, .. }
            | Instr::InsertVal { result, .. }
            | Instr::LandingPad { result, .. }
            | Instr::CmpSelect { result, .. }
            | Instr::Lea { result, .. }
            | Instr::Move { result, .. }
            | Instr::StackCopy { result, .. } => *result,
            _ => InstrResult::None,
        };
        match r {
            InstrResult::Single(id) => Some(id),
            InstrResult::None => None,
        }
    }

    /// Whether this instruction class ends a basic block.
    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            Instr::Ret { .. }
                | Instr::Br { .. }
                | Instr::Switch { .. }
                | Instr::Call { is_invoke: true, .. }
                | Instr::Unreachable
                | Instr::Resume { .. }
        )
    }

    /// Block ids this instruction can transfer control to. Empty for every
    /// non-terminator and for the terminators that never leave the function
    /// (`ret`, `unreachable`, `resume`). Used to wire the function's edge
    /// list once a terminator has been appended to its block.
    pub fn successors(&self) -> Vec<BlockId> {
        match self {
            Instr::Br { condition, true_branch, false_branch } => {
                if condition.is_some() {
                    vec![*true_branch, *false_branch]
                } else {
                    vec![*true_branch]
                }
            }
            Instr::Switch { default_block, cases, .. } => {
                let mut targets = vec![*default_block];
                targets.extend(cases.iter().map(|c| c.target));
                targets.sort_unstable();
                targets.dedup();
                targets
            }
            Instr::Call { is_invoke: true, normal_dest, unwind_dest, .. } => {
                [*normal_dest, *unwind_dest].into_iter().flatten().collect()
            }
            Instr::CmpBranch { true_branch, false_branch, .. } => vec![*true_branch, *false_branch],
            _ => Vec::new(),
        }
    }
}
