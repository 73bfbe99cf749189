use super::instr::Instr;

/// Index of a basic block within its owning function's block list.
pub type BlockId = u32;

/// A control-flow edge between two blocks of the same function, owned by the
/// function and referenced by index from each endpoint's adjacency list
/// rather than by pointer — this keeps the structure a plain, `Clone`-able
/// graph of indices instead of a cyclic pointer structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: BlockId,
    pub to: BlockId,
}

#[derive(Debug, Clone, Default)]
pub struct BasicBlock {
    pub id: BlockId,
    pub name: Option<String>,
    pub instructions: Vec<Instr>,
    pub incoming_edges: Vec<usize>,
    pub outgoing_edges: Vec<usize>,
}

impl BasicBlock {
    pub fn new(id: BlockId) -> Self {
        Self { id, ..Default::default() }
    }
}
