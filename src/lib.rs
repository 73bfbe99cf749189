//! Bitstream reader and SSA function-body IR builder for a VMIR-style
//! bitcode virtual machine.

/// Bitcode definitions
pub mod bitcode;
mod bits;
/// Bitstream definitions
pub mod bitstream;
/// Bitstream reader
pub mod read;
/// Bitstream visitor
pub mod visitor;

/// Definitions from `LLVMBitCodes.h`
pub mod schema {
    /// IDs of blocks and records inside the blocks
    pub mod blocks;
    /// Flags and values found in records
    pub mod enums;
}

/// The function-body IR builder: types, values, basic blocks, instructions
/// and the per-opcode parsers that turn a function block's records into a
/// control-flow graph.
pub mod ir;

pub use self::bitcode::Bitcode;
pub use self::bits::Cursor;
pub use self::read::BitStreamReader;
pub use self::visitor::BitStreamVisitor;
