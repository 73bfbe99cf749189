//! Per-opcode parsers turning one function-block record's fields into an
//! [`Instr`]. Grounded one-to-one on the `parse_*` family of a VMIR-style
//! bitcode-to-IR translator: each function here corresponds to exactly one
//! `parse_*` there, same operand order, same quirks preserved.

use crate::schema::blocks::FunctionCode;
use crate::schema::enums::{BinOpcode, CallConv};

use super::block::BlockId;
use super::error::ParseError;
use super::function::FunctionContext;
use super::instr::{CallArg, GepIndex, Instr, InstrResult, LandingPadClause, PhiNode, SwitchCase};
use super::ops::{BinOp, CastOp, Predicate};
use super::types::{Type, TypeId};
use super::value::{ConstValue, ValueClass, Vtp};

/// Cursor over one record's raw operand words. Mirrors `instr_get_*` in the
/// original parser: every read advances past exactly one encoded word,
/// values are taken in the exact order they were emitted.
pub struct ArgCursor<'a> {
    args: &'a [u64],
    pos: usize,
}

impl<'a> ArgCursor<'a> {
    pub fn new(args: &'a [u64]) -> Self {
        Self { args, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.args.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.args.len()
    }

    pub fn peek(&self) -> Option<u64> {
        self.args.get(self.pos).copied()
    }

    pub fn take_uint(&mut self) -> Result<u64, ParseError> {
        let v = *self.args.get(self.pos).ok_or(ParseError::MissingOperand)?;
        self.pos += 1;
        Ok(v)
    }

    pub fn take_u32(&mut self) -> Result<u32, ParseError> {
        Ok(self.take_uint()? as u32)
    }

    /// Sign-rotated decode: bit 0 carries the sign, the remaining bits carry
    /// the magnitude. Used for PHI incoming-value deltas, which may need to
    /// reach forward as well as backward.
    pub fn take_signed(&mut self) -> Result<i64, ParseError> {
        let v = self.take_uint()?;
        let shifted = (v >> 1) as i64;
        Ok(if v & 1 == 0 {
            shifted
        } else if v != 1 {
            -shifted
        } else {
            i64::MIN
        })
    }

    /// Skip `n` leading operand words without interpreting them.
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.args.len());
    }

    /// Consume a relative value reference whose type is supplied by the
    /// caller (e.g. a binop's RHS, typed the same as its already-read LHS).
    /// Always backward: per §4.1 a forward reference with no explicit type
    /// carried alongside it can't occur here, so no placeholder slot is
    /// materialized — only [`Self::take_vtp`] does that.
    pub fn take_value(&mut self, ctx: &mut FunctionContext, type_id: TypeId) -> Result<Vtp, ParseError> {
        let delta = self.take_uint()?;
        let id = ctx.relative_value_id(delta)?;
        Ok((type_id, id))
    }

    /// Consume a value-typed-reference: a relative delta that resolves
    /// either backward (the type comes from the already-defined slot it
    /// names — one word consumed) or forward (an explicit type word
    /// follows and a new `undef` placeholder is materialized — two words
    /// consumed). The forward/backward split itself is the wraparound
    /// trick the original decoder relies on: `next_value - delta` computed
    /// in wrapping 32-bit arithmetic lands below `next_value` exactly when
    /// the reference is backward, and at or above it (having wrapped)
    /// exactly when it's forward.
    pub fn take_vtp(&mut self, ctx: &mut FunctionContext) -> Result<Vtp, ParseError> {
        let delta = self.take_uint()? as u32;
        let next_value = ctx.values.next_value();
        let val = next_value.wrapping_sub(delta);
        if val < next_value {
            let type_id = ctx.values.get(val)?.type_id;
            Ok((type_id, val))
        } else {
            let type_id = self.take_u32()?;
            ctx.values.ensure_slot(val, type_id);
            Ok((type_id, val))
        }
    }

    pub fn take_block(&mut self) -> Result<BlockId, ParseError> {
        self.take_u32()
    }
}

fn new_result(ctx: &mut FunctionContext, type_id: TypeId) -> InstrResult {
    InstrResult::Single(ctx.values.alloc_instr_ret(type_id))
}

fn binop_from_code(code: u64) -> Result<BinOp, ParseError> {
    BinOpcode::try_from(code as u8)
        .map(BinOp::from)
        .map_err(|_| ParseError::UnsupportedOpcode(code))
}

pub fn parse_binop(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let lhs = args.take_vtp(ctx)?;
    let rhs = args.take_value(ctx, lhs.0)?;
    let opcode = args.take_uint()?;
    let op = binop_from_code(opcode)?;
    let result = new_result(ctx, lhs.0);
    Ok(Instr::BinOp { op, lhs, rhs, result })
}

pub fn parse_cast(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let value = args.take_vtp(ctx)?;
    let dest_type = args.take_u32()?;
    let opcode = args.take_uint()?;
    let op = CastOp::from_code(opcode).ok_or(ParseError::UnsupportedOpcode(opcode))?;
    let result = new_result(ctx, dest_type);
    Ok(Instr::Cast { op, value, result })
}

pub fn parse_cmp2(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let lhs = args.take_vtp(ctx)?;
    let rhs = args.take_value(ctx, lhs.0)?;
    let pred_code = args.take_uint()?;
    let op = Predicate::from_code(pred_code).ok_or(ParseError::UnsupportedOpcode(pred_code))?;
    let bool_type = ctx.types.find_or_make(Type::Int(1));
    let result = new_result(ctx, bool_type);
    Ok(Instr::Cmp2 { op, lhs, rhs, result })
}

pub fn parse_ret(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    if args.is_empty() {
        return Ok(Instr::Ret { value: None, result: InstrResult::None });
    }
    let value = args.take_vtp(ctx)?;
    Ok(Instr::Ret { value: Some(value), result: InstrResult::None })
}

pub fn parse_br(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let true_branch = args.take_block()?;
    if args.is_empty() {
        return Ok(Instr::Br { condition: None, true_branch, false_branch: true_branch });
    }
    let false_branch = args.take_block()?;
    let bool_type = ctx.types.find_or_make(Type::Int(1));
    let condition = args.take_value(ctx, bool_type)?;
    Ok(Instr::Br { condition: Some(condition), true_branch, false_branch })
}

pub fn parse_switch(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let operand_type = args.take_u32()?;
    let width = ctx.types.bitwidth(operand_type).unwrap_or(64);
    let value = args.take_value(ctx, operand_type)?;
    let default_block = args.take_block()?;
    let num_cases = args.take_uint()?;
    let mask: u64 = match width {
        0 => 0,
        1..=63 => (1u64 << width) - 1,
        _ => !1u64,
    };
    let mut cases = Vec::with_capacity(num_cases as usize);
    for _ in 0..num_cases {
        // Case values are already-resolved constants and so are encoded as
        // plain absolute value ids, not relative deltas like every other
        // operand here.
        let case_value_id = args.take_u32()?;
        let target = args.take_block()?;
        let case_value = ctx.values.get(case_value_id)?;
        if case_value.type_id != operand_type {
            return Err(ParseError::SwitchTypeMismatch);
        }
        let masked = (ctx.values.get_const64(case_value_id)? as u64) & mask;
        cases.push(SwitchCase { masked_value: masked, target });
    }
    cases.sort_by_key(|c| c.masked_value);
    Ok(Instr::Switch { value, default_block, cases })
}

pub fn parse_unreachable() -> Instr {
    Instr::Unreachable
}

pub fn parse_resume(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let value = args.take_vtp(ctx)?;
    Ok(Instr::Resume { values: vec![value] })
}

pub fn parse_phi(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let type_id = args.take_u32()?;
    let mut nodes = Vec::new();
    while args.remaining() >= 2 {
        let delta = args.take_signed()?;
        let predecessor = args.take_block()?;
        let next = i64::from(ctx.values.next_value());
        let id = (next - delta) as u32;
        ctx.values.ensure_slot(id, type_id);
        nodes.push(PhiNode { predecessor, value: (type_id, id) });
    }
    nodes.sort_by_key(|n| n.predecessor);
    nodes.dedup_by_key(|n| n.predecessor);
    let result = new_result(ctx, type_id);
    Ok(Instr::Phi { nodes, result })
}

/// Decode an LLVM-style packed alignment field: `0` means "no alignment
/// specified, use `default`", a nonzero `v` means `1 << (v - 1)`.
fn decode_alignment(raw: u64, default: u32) -> u32 {
    let field = (raw & 0x1f) as u32;
    if field == 0 { default } else { 1u32 << (field.min(31) - 1) }
}

pub fn parse_alloca(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    if args.remaining() != 4 {
        return Err(ParseError::AllocaArgCount);
    }
    // `rtype` is overloaded by the explicit-type flag below: with the flag
    // set it names the allocated type directly; without it (the legacy
    // encoding) it already names the pointer-to-allocated-type the result
    // should reuse verbatim.
    let rtype = args.take_u32()?;
    let size_type = args.take_u32()?;
    // The count operand is encoded as a plain absolute value id rather than
    // the relative delta every other operand uses here.
    let num_items_id = args.take_u32()?;
    let num_items: Vtp = (size_type, num_items_id);
    let flags = args.take_uint()?;
    let alignment = decode_alignment(flags, 4);
    const EXPLICIT_TYPE: u64 = 1 << 6;
    let (result_type, size) = if flags & EXPLICIT_TYPE != 0 {
        (ctx.types.make_pointer(rtype, 1), ctx.types.sizeof(rtype)?)
    } else {
        let pointee = ctx.types.get_pointee(rtype)?;
        (rtype, ctx.types.sizeof(pointee)?)
    };
    let result = new_result(ctx, result_type);
    Ok(Instr::Alloca { num_items, size, alignment, result })
}

/// `LOAD` and `LOADATOMIC` are dispatched to this same parser unchanged —
/// the atomic ordering/synchscope words trailing the record are never read,
/// only used (via the 3-vs-2-remaining-words check below) to tell whether a
/// result type was encoded explicitly.
pub fn parse_load(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let ptr = args.take_vtp(ctx)?;
    let result_type = if args.remaining() == 3 {
        args.take_u32()?
    } else {
        ctx.types.get_pointee(ptr.0)?
    };
    let result = new_result(ctx, result_type);
    Ok(Instr::Load { ptr, cast: None, result })
}

/// `old` distinguishes the legacy `STORE_OLD`/`STOREATOMIC_OLD` encoding
/// (stored value typed by the pointer's pointee, same as any other
/// context-typed operand) from the current one (stored value is a full
/// `vtp`). Neither variant reads the trailing alignment/volatile/ordering
/// words — they're present in the record but never consumed.
pub fn parse_store(ctx: &mut FunctionContext, args: &mut ArgCursor, old: bool) -> Result<Instr, ParseError> {
    let ptr = args.take_vtp(ctx)?;
    let value = if old {
        let pointee = ctx.types.get_pointee(ptr.0)?;
        args.take_value(ctx, pointee)?
    } else {
        args.take_vtp(ctx)?
    };
    Ok(Instr::Store { ptr, value })
}

pub fn parse_gep(ctx: &mut FunctionContext, args: &mut ArgCursor, current: bool) -> Result<Instr, ParseError> {
    if current {
        args.skip(2); // pointee type + inrange flag, both unused
    }
    let base = args.take_vtp(ctx)?;

    let mut cur_type = base.0;
    let mut indices = Vec::new();
    while !args.is_empty() {
        let idx_value = args.take_vtp(ctx)?;
        let container_type = cur_type;
        cur_type = match ctx.types.get(container_type)?.clone() {
            Type::Pointer { pointee, .. } => pointee,
            Type::Array { element, .. } => element,
            Type::Struct { elements, .. } => {
                let idx = ctx
                    .values
                    .get_const32(idx_value.1)
                    .map_err(|_| ParseError::GepBadIndex)? as usize;
                *elements.get(idx).ok_or(ParseError::GepBadIndex)?
            }
            _ => return Err(ParseError::GepBadType),
        };
        indices.push(GepIndex { value: idx_value, container_type });
    }
    let result_pointer = ctx.types.make_pointer(cur_type, 1);
    let result = new_result(ctx, result_pointer);
    Ok(Instr::Gep { base, indices, result })
}

/// The legacy non-vector `SELECT` opcode has no handler in the original
/// parser at all (it falls into the default "can't handle" case), so only
/// `VSELECT` routes here.
pub fn parse_select(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let true_value = args.take_vtp(ctx)?;
    let false_value = args.take_value(ctx, true_value.0)?;
    let predicate = args.take_vtp(ctx)?;
    let result = new_result(ctx, true_value.0);
    Ok(Instr::Select { predicate, true_value, false_value, result })
}

pub fn parse_vaarg(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let valist_type = args.take_u32()?;
    let value = args.take_value(ctx, valist_type)?;
    let result_type = args.take_u32()?;
    let result = new_result(ctx, result_type);
    Ok(Instr::VaArg { value, result })
}

pub fn parse_extractval(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let value = args.take_vtp(ctx)?;
    let mut cur_type = value.0;
    let mut indices = Vec::new();
    while !args.is_empty() {
        let idx = args.take_u32()?;
        cur_type = match ctx.types.get(cur_type)?.clone() {
            Type::Struct { elements, .. } => {
                *elements.get(idx as usize).ok_or(ParseError::AggregateIndexOutOfRange)?
            }
            Type::Array { element, .. } => element,
            _ => return Err(ParseError::AggregateIndexBadType),
        };
        indices.push(idx);
    }
    let result = new_result(ctx, cur_type);
    Ok(Instr::ExtractVal { value, indices, result })
}

pub fn parse_insertval(ctx: &mut FunctionContext, args: &mut ArgCursor) -> Result<Instr, ParseError> {
    let src = args.take_vtp(ctx)?;
    let replacement = args.take_vtp(ctx)?;
    let mut indices = Vec::new();
    while !args.is_empty() {
        indices.push(args.take_u32()?);
    }
    let result = new_result(ctx, src.0);
    Ok(Instr::InsertVal { src, replacement, indices, result })
}

pub fn parse_landingpad(ctx: &mut FunctionContext, args: &mut ArgCursor, old: bool) -> Result<Instr, ParseError> {
    let type_id = args.take_u32()?;
    if old {
        // Personality function, only present on the first landingpad in a
        // function; it's a full vtp read, not a fixed-width skip.
        let _personality = args.take_vtp(ctx)?;
    }
    let is_cleanup = args.take_uint()? != 0;
    let num_clauses = args.take_uint()?;
    let mut clauses = Vec::with_capacity(num_clauses as usize);
    for _ in 0..num_clauses {
        let clause = args.take_u32()?;
        let is_catch = args.take_uint()? != 0;
        clauses.push(LandingPadClause { clause, is_catch });
    }
    let result = new_result(ctx, type_id);
    Ok(Instr::LandingPad { type_id, is_cleanup, clauses, result })
}

const CALLCONV_EXPLICIT_FN_TYPE_INVOKE: u64 = 0x2000;
const CALLCONV_EXPLICIT_FN_TYPE_CALL: u64 = 0x8000;
const CALLCONV_MUST_TAIL: u64 = 1 << 14;

/// Shared by `CALL` and `INVOKE`: both records carry an attribute-set index,
/// a calling-convention word with the same flag bits, an optional explicit
/// function type word (discarded — the callee's own `vtp` already carries
/// its type), a callee and an argument list; invoke additionally carries the
/// two successor blocks ahead of the explicit-type word. Returns `None` for
/// the handful of intrinsics this builder drops entirely.
///
/// Order matters past callee resolution: the dropped-intrinsic check runs
/// first, then must-tail, then the callee's value class is gated to
/// `Function`/`Temporary`/`RegFrame` — a dropped intrinsic never reaches
/// either of the later checks, and a must-tail call is rejected before its
/// callee's class is even considered.
pub fn parse_call(ctx: &mut FunctionContext, args: &mut ArgCursor, is_invoke: bool) -> Result<Option<Instr>, ParseError> {
    let raw_attrs = args.take_uint()?;
    let cc_word = args.take_uint()?;

    let (normal_dest, unwind_dest) = if is_invoke {
        let normal_dest = args.take_block()?;
        let unwind_dest = args.take_block()?;
        if cc_word & CALLCONV_EXPLICIT_FN_TYPE_INVOKE != 0 {
            args.skip(1);
        }
        (Some(normal_dest), Some(unwind_dest))
    } else {
        if cc_word & CALLCONV_EXPLICIT_FN_TYPE_CALL != 0 {
            args.skip(1);
        }
        (None, None)
    };

    let _: Result<CallConv, String> = CallConv::from_flags(cc_word);

    let callee = args.take_vtp(ctx)?;
    let (callee_id, callee_value) = ctx.values.resolve_alias(callee.1)?;
    let callee = (callee.0, callee_id);

    if let ValueClass::Function { name } = &callee_value.class {
        if is_dropped_intrinsic(name) {
            return Ok(None);
        }
    }

    if cc_word & CALLCONV_MUST_TAIL != 0 {
        return Err(ParseError::MustTailUnsupported);
    }

    if !matches!(callee_value.class, ValueClass::Function { .. } | ValueClass::Temporary | ValueClass::RegFrame) {
        return Err(ParseError::BadCallee);
    }

    let (return_type, params) = match ctx.types.get(callee_value.type_id)? {
        Type::Function { return_type, params, .. } => (*return_type, params.clone()),
        Type::Pointer { pointee, .. } => match ctx.types.get(*pointee)? {
            Type::Function { return_type, params, .. } => (*return_type, params.clone()),
            _ => return Err(ParseError::NonFunctionCall),
        },
        _ => return Err(ParseError::NonFunctionCall),
    };

    let attr_set = ctx.attrs.get_for_raw(raw_attrs);
    let mut call_args = Vec::new();
    let mut index = 0usize;
    while !args.is_empty() {
        let value = if index < params.len() {
            args.take_value(ctx, params[index])?
        } else {
            // Vararg: type not known ahead of time, encoded as a full vtp.
            args.take_vtp(ctx)?
        };
        let mut copy_size = 0u64;
        if let Some(set) = attr_set {
            let wants_byval = set.entries.iter().any(|e| {
                e.index == i32::try_from(index + 1).unwrap_or(i32::MAX)
                    && e.has(crate::schema::enums::AttrKind::ByVal)
            });
            if wants_byval {
                let pointee = ctx.types.get_pointee(value.0).map_err(|_| ParseError::ByvalNonPointer)?;
                copy_size = ctx.types.sizeof(pointee)?;
            }
        }
        call_args.push(CallArg { value, copy_size });
        index += 1;
    }

    let result = if return_type == ctx.types.find_or_make(Type::Void) {
        InstrResult::None
    } else {
        new_result(ctx, return_type)
    };

    Ok(Some(Instr::Call { is_invoke, callee, args: call_args, normal_dest, unwind_dest, result }))
}

/// Four intrinsics are dropped entirely: they produce no instruction and
/// don't consume a value-numbering slot.
pub fn is_dropped_intrinsic(name: &str) -> bool {
    matches!(name, "llvm.lifetime.start" | "llvm.lifetime.end" | "llvm.prefetch" | "llvm.va_end")
}

/// Entry point: dispatch one function-block record to its parser. Mirrors
/// the big opcode switch that walks every `FUNC_CODE_INST_*` constant.
/// Returns `None` for records that don't produce an instruction (dropped
/// intrinsics, metadata-only records).
pub fn parse_record(ctx: &mut FunctionContext, code: u64, fields: &[u64]) -> Result<Option<Instr>, ParseError> {
    let mut args = ArgCursor::new(fields);
    let function_code =
        FunctionCode::try_from(code as u8).map_err(|_| ParseError::UnsupportedOpcode(code))?;

    // Call/invoke are the only parsers that can legitimately produce no
    // instruction (a dropped intrinsic), so they're threaded through before
    // the rest of the table, which always yields one.
    match function_code {
        FunctionCode::Call => return parse_call(ctx, &mut args, false),
        FunctionCode::Invoke => return parse_call(ctx, &mut args, true),
        _ => {}
    }

    let instr = match function_code {
        FunctionCode::BinOp => parse_binop(ctx, &mut args)?,
        FunctionCode::Cast => parse_cast(ctx, &mut args)?,
        FunctionCode::Cmp2 => parse_cmp2(ctx, &mut args)?,
        FunctionCode::Ret => parse_ret(ctx, &mut args)?,
        FunctionCode::Br => parse_br(ctx, &mut args)?,
        FunctionCode::Switch => parse_switch(ctx, &mut args)?,
        FunctionCode::Unreachable => parse_unreachable(),
        FunctionCode::Resume => parse_resume(ctx, &mut args)?,
        FunctionCode::Phi => parse_phi(ctx, &mut args)?,
        FunctionCode::Alloca => parse_alloca(ctx, &mut args)?,
        FunctionCode::Load | FunctionCode::LoadAtomic => parse_load(ctx, &mut args)?,
        FunctionCode::Store | FunctionCode::StoreAtomic => parse_store(ctx, &mut args, false)?,
        FunctionCode::StoreOld | FunctionCode::StoreAtomicOld => parse_store(ctx, &mut args, true)?,
        FunctionCode::Gep => parse_gep(ctx, &mut args, true)?,
        FunctionCode::GepOld | FunctionCode::InboundsGepOld => parse_gep(ctx, &mut args, false)?,
        FunctionCode::Vselect => parse_select(ctx, &mut args)?,
        FunctionCode::SelectOld => return Err(ParseError::UnsupportedOpcode(code)),
        FunctionCode::VaArg => parse_vaarg(ctx, &mut args)?,
        FunctionCode::ExtractVal => parse_extractval(ctx, &mut args)?,
        FunctionCode::InsertVal => parse_insertval(ctx, &mut args)?,
        FunctionCode::LandingPad => parse_landingpad(ctx, &mut args, false)?,
        FunctionCode::LandingPadOld => parse_landingpad(ctx, &mut args, true)?,
        _ => return Err(ParseError::UnsupportedOpcode(code)),
    };

    Ok(Some(instr))
}

/// Dispatch one function-block record and, unlike [`parse_record`], fully
/// materialize it: append the result to the block the cursor currently
/// names, wire any terminator's successor edges, and advance the cursor past
/// it. This is the entry point a module-level driver calls once per record;
/// `parse_record` stays a pure `(code, fields) -> Instr` step underneath it
/// so the per-opcode parsers can be unit-tested without a block to append
/// into.
pub fn parse_and_append(ctx: &mut FunctionContext, code: u64, fields: &[u64]) -> Result<(), ParseError> {
    if let Some(instr) = parse_record(ctx, code, fields)? {
        ctx.append_instr(instr);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::attrs::AttributeSets;
    use crate::ir::function::Function;
    use crate::ir::types::TypeTable;
    use crate::ir::value::ValueTable;

    fn harness() -> (TypeTable, ValueTable, AttributeSets) {
        (TypeTable::new(), ValueTable::new(), AttributeSets::new())
    }

    #[test]
    fn binop_add_consumes_lhs_rhs_opcode() {
        let (mut types, mut values, attrs) = harness();
        let i32_ty = types.find_or_make(Type::Int(32));
        values.push(super::super::value::Value { class: ValueClass::Temporary, type_id: i32_ty });
        values.push(super::super::value::Value { class: ValueClass::Temporary, type_id: i32_ty });
        let func = Function::new("f".into(), 1);
        let mut ctx = FunctionContext::new(func, &mut types, &mut values, &attrs);
        // lhs vtp delta=2 (backward, to value 0), rhs delta=1 (to value 1), opcode=Add(0)
        let instr = parse_record(&mut ctx, FunctionCode::BinOp as u64, &[2, 1, 0]).unwrap().unwrap();
        match instr {
            Instr::BinOp { op, lhs, rhs, .. } => {
                assert_eq!(op, BinOp::Add);
                assert_eq!(lhs, (i32_ty, 0));
                assert_eq!(rhs, (i32_ty, 1));
            }
            other => panic!("unexpected instr {other:?}"),
        }
    }

    #[test]
    fn switch_masks_and_sorts_without_dedup() {
        let (mut types, mut values, attrs) = harness();
        let i8_ty = types.find_or_make(Type::Int(8));
        // id 0: the switched-on value; id 1, 2: case constants (switch case
        // values are plain absolute value ids, not relative deltas).
        values.push(super::super::value::Value {
            class: ValueClass::Constant(ConstValue::Int(5)),
            type_id: i8_ty,
        });
        values.push(super::super::value::Value {
            class: ValueClass::Constant(ConstValue::Int(0x1FF)),
            type_id: i8_ty,
        });
        values.push(super::super::value::Value {
            class: ValueClass::Constant(ConstValue::Int(3)),
            type_id: i8_ty,
        });
        let func = Function::new("f".into(), 4);
        let mut ctx = FunctionContext::new(func, &mut types, &mut values, &attrs);
        // value delta=3 (back to id 0), default=0, num_cases=2, then
        // (case id=1 -> 0x1FF masked to 0xFF, target=1), (case id=2 -> 3, target=2)
        let instr = parse_record(
            &mut ctx,
            FunctionCode::Switch as u64,
            &[i8_ty as u64, 3, 0, 2, 1, 1, 2, 2],
        )
        .unwrap()
        .unwrap();
        match instr {
            Instr::Switch { cases, .. } => {
                assert_eq!(cases.len(), 2);
                assert_eq!(cases[0].masked_value, 3);
                assert_eq!(cases[1].masked_value, 0xFF);
            }
            other => panic!("unexpected instr {other:?}"),
        }
    }

    #[test]
    fn phi_dedups_duplicate_predecessors_keeping_first() {
        let (mut types, mut values, attrs) = harness();
        let i32_ty = types.find_or_make(Type::Int(32));
        let func = Function::new("f".into(), 3);
        let mut ctx = FunctionContext::new(func, &mut types, &mut values, &attrs);
        // two incoming pairs both naming predecessor block 1, different values
        let instr = parse_record(
            &mut ctx,
            FunctionCode::Phi as u64,
            &[i32_ty as u64, 2, 1, 4, 1],
        )
        .unwrap()
        .unwrap();
        match instr {
            Instr::Phi { nodes, .. } => {
                assert_eq!(nodes.len(), 1);
                assert_eq!(nodes[0].predecessor, 1);
            }
            other => panic!("unexpected instr {other:?}"),
        }
    }

    #[test]
    fn call_rejects_non_function_callee_class() {
        let (mut types, mut values, attrs) = harness();
        let i32_ty = types.find_or_make(Type::Int(32));
        let fn_ty = types.push(Type::Function { return_type: i32_ty, params: Vec::new(), vararg: false });
        let fn_ptr_ty = types.make_pointer(fn_ty, 0);
        // A global carrying a function-pointer type is not a valid callee:
        // only Function/Temporary/RegFrame values are.
        values.push(super::super::value::Value { class: ValueClass::Global, type_id: fn_ptr_ty });
        let func = Function::new("f".into(), 1);
        let mut ctx = FunctionContext::new(func, &mut types, &mut values, &attrs);
        // attr_set=0, cc=0, callee vtp delta=1 (backward to id 0)
        let result = parse_record(&mut ctx, FunctionCode::Call as u64, &[0, 0, 1]);
        assert!(matches!(result, Err(ParseError::BadCallee)));
    }

    #[test]
    fn must_tail_bit_on_dropped_intrinsic_is_ignored() {
        let (mut types, mut values, attrs) = harness();
        let i32_ty = types.find_or_make(Type::Int(32));
        let fn_ty = types.push(Type::Function { return_type: i32_ty, params: Vec::new(), vararg: false });
        values.push(super::super::value::Value {
            class: ValueClass::Function { name: "llvm.lifetime.start".into() },
            type_id: fn_ty,
        });
        let func = Function::new("f".into(), 1);
        let mut ctx = FunctionContext::new(func, &mut types, &mut values, &attrs);
        // attr_set=0, cc=must-tail bit set, callee vtp delta=1 (backward to id 0)
        let result = parse_record(&mut ctx, FunctionCode::Call as u64, &[0, CALLCONV_MUST_TAIL, 1]).unwrap();
        assert!(result.is_none(), "dropped intrinsic must not surface a must-tail error");
    }
}
