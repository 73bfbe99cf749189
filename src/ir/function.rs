use super::attrs::AttributeSets;
use super::block::{BasicBlock, BlockId, Edge};
use super::error::ParseError;
use super::instr::Instr;
use super::types::TypeTable;
use super::value::{ValueId, ValueTable};

/// Upper bound the block-graph builder enforces on a `DECLAREBLOCKS` record:
/// more basic blocks than this in one function is rejected rather than
/// pre-allocated.
pub const MAX_BLOCK_COUNT: u64 = 65_535;

/// Reinterpret a record's decoded `u64` operand words as the abstract
/// signed argument stream the per-opcode parsers are specified against.
/// Bitcode's own fields are never negative in their raw encoding — sign is
/// recovered downstream by [`super::parse::ArgCursor::take_signed`] for the
/// handful of operands (PHI incoming deltas) that need it — so this is a
/// bit-pattern reinterpretation, not a numeric conversion.
pub fn record_to_args(record: &crate::bitcode::Record) -> Vec<i64> {
    record.fields().iter().map(|&f| f as i64).collect()
}

/// One parsed function body: its declared block count, the blocks
/// themselves, the edges between them, and the value table it shares with
/// whatever module-level constants and globals were already numbered before
/// this function's temporaries started being appended.
#[derive(Debug, Clone, Default)]
pub struct Function {
    pub name: String,
    pub blocks: Vec<BasicBlock>,
    pub edges: Vec<Edge>,
}

impl Function {
    pub fn new(name: String, num_blocks: u32) -> Self {
        let blocks = (0..num_blocks).map(BasicBlock::new).collect();
        Self { name, blocks, edges: Vec::new() }
    }

    /// Build a function from a `DECLAREBLOCKS` record's block count, the way
    /// the block graph builder (C3) does it: zero blocks and more than
    /// [`MAX_BLOCK_COUNT`] are both rejected before anything is allocated.
    pub fn from_declared_block_count(name: String, num_blocks: u64) -> Result<Self, ParseError> {
        if num_blocks == 0 || num_blocks > MAX_BLOCK_COUNT {
            return Err(ParseError::BadBlockCount(num_blocks));
        }
        Ok(Self::new(name, num_blocks as u32))
    }

    pub fn add_edge(&mut self, from: BlockId, to: BlockId) {
        let idx = self.edges.len();
        self.edges.push(Edge { from, to });
        self.blocks[from as usize].outgoing_edges.push(idx);
        self.blocks[to as usize].incoming_edges.push(idx);
    }
}

/// Parsing state threaded through a single function block's records: the
/// function under construction, the value/type tables it shares with the
/// rest of the module, and a cursor tracking which block is currently being
/// filled in.
///
/// The "current block" cursor only ever advances when a terminator is
/// parsed — the same rule the format itself uses: non-terminating
/// instructions (calls, allocas, loads, landingpads, ...) never move it,
/// only `ret`/`br`/`switch`/`invoke`/`unreachable`/`resume` do.
pub struct FunctionContext<'a> {
    pub function: Function,
    pub types: &'a mut TypeTable,
    pub values: &'a mut ValueTable,
    pub attrs: &'a AttributeSets,
    pub current_block: BlockId,
    first_value_in_function: ValueId,
}

impl<'a> FunctionContext<'a> {
    pub fn new(
        function: Function,
        types: &'a mut TypeTable,
        values: &'a mut ValueTable,
        attrs: &'a AttributeSets,
    ) -> Self {
        let first_value_in_function = values.next_value();
        Self { function, types, values, attrs, current_block: 0, first_value_in_function }
    }

    pub fn first_value_in_function(&self) -> ValueId {
        self.first_value_in_function
    }

    /// Resolve a relative (backward-only) value reference: `delta` counts
    /// back from the value about to be numbered next. Used for operands
    /// whose type is supplied by context rather than carried in the operand
    /// itself, which per §4.1 can never be forward references.
    pub fn relative_value_id(&self, delta: u64) -> Result<ValueId, ParseError> {
        let next = u64::from(self.values.next_value());
        next.checked_sub(delta).map(|v| v as ValueId).ok_or(ParseError::BadId)
    }

    pub fn current_block_mut(&mut self) -> &mut BasicBlock {
        &mut self.function.blocks[self.current_block as usize]
    }

    /// Advance the current-block cursor. Only called after appending a
    /// terminating instruction.
    pub fn advance_block(&mut self) {
        self.current_block += 1;
    }

    /// Append an already-parsed instruction to the block the cursor is
    /// currently pointing at (C2's `append`), wire edges for every block a
    /// terminator can transfer control to (C3/C6's edge list), then advance
    /// the cursor past it if it was in fact a terminator. Mirrors the
    /// original's "materialize in the block pointed to by the current-block
    /// cursor, then advance on terminators only" sequencing.
    pub fn append_instr(&mut self, instr: Instr) {
        let from = self.current_block;
        let is_terminator = instr.is_terminator();
        let successors = instr.successors();
        self.function.blocks[from as usize].instructions.push(instr);
        for to in successors {
            self.function.add_edge(from, to);
        }
        if is_terminator {
            self.advance_block();
        }
    }
}
