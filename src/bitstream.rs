use num_enum::TryFromPrimitive;

/// A single field inside an abbreviation definition; everything except the
/// trailing array/blob payload is one of these.
#[derive(Debug, Clone, Copy)]
pub enum ScalarOperand {
    /// A literal value, not actually encoded in the record.
    Literal(u64),
    /// A fixed-width field.
    Fixed(u8),
    /// A VBR-encoded value with the provided chunk width.
    Vbr(u8),
    /// A char6-encoded ASCII character.
    Char6,
}

/// The optional trailing payload of an abbreviation: an array (preceded by a
/// vbr6 length) or a blob (preceded by a vbr6 length, then 32-bit aligned).
#[derive(Debug, Clone, Copy)]
pub enum PayloadOperand {
    Array(ScalarOperand),
    Blob,
}

#[derive(Debug, Clone, Copy)]
pub enum Operand {
    Scalar(ScalarOperand),
    Payload(PayloadOperand),
}

impl Operand {
    /// The llvm::BitCodeAbbrevOp::Encoding value this case represents.
    /// Must match <http://llvm.org/docs/BitCodeFormat.html#define-abbrev-encoding>
    pub fn encoded_kind(&self) -> u8 {
        match self {
            Operand::Scalar(ScalarOperand::Literal(_)) => 0,
            Operand::Scalar(ScalarOperand::Fixed(_)) => 1,
            Operand::Scalar(ScalarOperand::Vbr(_)) => 2,
            Operand::Payload(PayloadOperand::Array(_)) => 3,
            Operand::Scalar(ScalarOperand::Char6) => 4,
            Operand::Payload(PayloadOperand::Blob) => 5,
        }
    }
}

/// An `Abbreviation` represents the encoding definition for a user-defined
/// record. An `Abbreviation` is the primary form of compression available in
/// a bitstream file.
#[derive(Debug, Clone)]
pub struct Abbreviation {
    /// Index of this abbreviation among those defined in the same scope.
    pub id: u32,
    /// Scalar fields, in order, excluding the trailing payload.
    pub fields: Vec<ScalarOperand>,
    /// The trailing array or blob, if this abbreviation has one.
    pub payload: Option<PayloadOperand>,
}

/// A `BlockInfoCode` enumerates the bits that occur in the metadata for
/// a block or record. Of these bits, only `SetBid` is required. If
/// a name is given to a block or record with `BlockName` or
/// `SetRecordName`, debugging tools like `llvm-bcanalyzer` can be used to
/// introspect the structure of blocks and records in the bitstream file.
#[repr(u8)]
#[derive(Debug, Clone, Copy, TryFromPrimitive)]
pub enum BlockInfoCode {
    /// Indicates which block ID is being described.
    SetBid = 1,
    /// An optional element that records which bytes of the record are the
    /// name of the block.
    BlockName = 2,
    /// An optional element that records the record ID number and the bytes
    /// for the name of the corresponding record.
    SetRecordName = 3,
}

/// Abbreviation IDs reserved by the bitstream format itself; everything from
/// `FIRST_APPLICATION_ID` up is defined by whoever produced the stream.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum BuiltinAbbreviationId {
    EndBlock = 0,
    EnterSubBlock = 1,
    DefineAbbreviation = 2,
    UnabbreviatedRecord = 3,
}

impl BuiltinAbbreviationId {
    pub const FIRST_APPLICATION_ID: u32 = 4;
}

/// A `BlockId` is a fixed-width field that occurs at the start of all blocks.
///
/// Bitstream reserves the first 8 block IDs for its own bookkeeping.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub struct BlockId(u32);

impl BlockId {
    pub const BLOCK_INFO: Self = Self(0);
    pub const FIRST_APPLICATION_ID: Self = Self(8);

    #[inline]
    pub fn id(&self) -> u32 {
        self.0
    }
}
