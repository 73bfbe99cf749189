use super::error::ParseError;
use super::types::TypeId;

/// Index into a [`ValueTable`]. Shared by constants, globals, functions,
/// arguments and instruction results — one flat numbering space.
pub type ValueId = u32;

/// A value-typed-reference: the type an operand is being used at, paired
/// with the value id it names. The type is carried alongside the id because
/// a forward reference's value slot doesn't know its own type until this
/// pair supplies it.
pub type Vtp = (TypeId, ValueId);

/// Bound on alias-chain resolution. The original parser walks call/invoke
/// callee aliases without a limit; this crate treats a chain longer than
/// this as malformed input rather than looping forever on it.
pub const MAX_ALIAS_CHAIN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstValue {
    Int(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueClass {
    Constant(ConstValue),
    Function { name: String },
    Global,
    Temporary,
    RegFrame,
    Alias { target: ValueId },
    Undef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub class: ValueClass,
    pub type_id: TypeId,
}

/// Table of every value known while parsing one function: constants and
/// globals populated by the module-level driver, then temporaries appended
/// as instructions are parsed.
///
/// `next_value` is the monotonic value-numbering counter (`next_value` in
/// §3 of the data model) and is kept separate from the backing array's
/// length: a forward reference (`ir::parse::ArgCursor::take_vtp`) can
/// pre-grow the array past `next_value` to materialize an
/// [`ValueClass::Undef`] placeholder for a slot that will only be *defined*
/// — i.e. have `next_value` actually reach it — later. When the real
/// defining instruction is parsed, [`ValueTable::alloc_instr_ret`] claims
/// exactly `next_value` and overwrites whatever placeholder (if any)
/// already occupies that slot, then advances the counter. Conflating the
/// counter with the array length would hand the defining instruction the
/// wrong id whenever an earlier forward reference had already grown the
/// array past it.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    values: Vec<Option<Value>>,
    next_value: ValueId,
}

impl ValueTable {
    pub fn new() -> Self {
        Self { values: Vec::new(), next_value: 0 }
    }

    /// Size of the backing array, which may run ahead of [`Self::next_value`]
    /// when a forward reference has pre-allocated placeholders.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The next id that will be assigned by [`Self::push`]/
    /// [`Self::alloc_instr_ret`] — the value-numbering counter itself.
    pub fn next_value(&self) -> ValueId {
        self.next_value
    }

    fn ensure_len(&mut self, idx: usize) {
        if idx >= self.values.len() {
            self.values.resize(idx + 1, None);
        }
    }

    /// Define the next value: claims `next_value`, overwriting any
    /// forward-declared placeholder already sitting in that slot, and
    /// advances the counter. Used both for module-level constants/globals
    /// (which never have forward references pointing at them ahead of time)
    /// and, via [`Self::alloc_instr_ret`], for instruction results.
    pub fn push(&mut self, value: Value) -> ValueId {
        let id = self.next_value;
        self.ensure_len(id as usize);
        self.values[id as usize] = Some(value);
        self.next_value += 1;
        id
    }

    /// Ensure `id` names a slot, materializing an undefined placeholder if
    /// none exists yet. Used for forward references, where the referencing
    /// operand supplies the type; never advances [`Self::next_value`] — the
    /// slot isn't *defined* until its owning instruction is actually parsed.
    pub fn ensure_slot(&mut self, id: ValueId, type_id: TypeId) {
        let idx = id as usize;
        self.ensure_len(idx);
        if self.values[idx].is_none() {
            self.values[idx] = Some(Value { class: ValueClass::Undef, type_id });
        } else if let Some(v) = &mut self.values[idx] {
            v.type_id = type_id;
        }
    }

    pub fn get(&self, id: ValueId) -> Result<&Value, ParseError> {
        self.values
            .get(id as usize)
            .and_then(|v| v.as_ref())
            .ok_or(ParseError::BadId)
    }

    pub fn get_const64(&self, id: ValueId) -> Result<i64, ParseError> {
        match &self.get(id)?.class {
            ValueClass::Constant(ConstValue::Int(v)) => Ok(*v),
            _ => Err(ParseError::SwitchNonConstantCase),
        }
    }

    pub fn get_const32(&self, id: ValueId) -> Result<i32, ParseError> {
        self.get_const64(id).map(|v| v as i32)
    }

    /// Resolve a value through its alias chain, bounded (see
    /// [`MAX_ALIAS_CHAIN`]). Returns the first non-alias value reached.
    pub fn resolve_alias(&self, mut id: ValueId) -> Result<(ValueId, &Value), ParseError> {
        for _ in 0..MAX_ALIAS_CHAIN {
            let value = self.get(id)?;
            match &value.class {
                ValueClass::Alias { target } => id = *target,
                _ => return Ok((id, value)),
            }
        }
        Err(ParseError::AliasChainTooLong)
    }

    /// Allocate a new temporary for an instruction's result and bind its
    /// type. Returns the freshly assigned id.
    pub fn alloc_instr_ret(&mut self, type_id: TypeId) -> ValueId {
        self.push(Value { class: ValueClass::Temporary, type_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_reference_materializes_undef() {
        let mut t = ValueTable::new();
        t.ensure_slot(3, 7);
        assert_eq!(t.get(3).unwrap().class, ValueClass::Undef);
        assert_eq!(t.get(3).unwrap().type_id, 7);
        assert!(t.get(0).is_err());
    }

    #[test]
    fn alias_chain_resolves_to_final_target() {
        let mut t = ValueTable::new();
        let f = t.push(Value { class: ValueClass::Function { name: "f".into() }, type_id: 0 });
        let a1 = t.push(Value { class: ValueClass::Alias { target: f }, type_id: 0 });
        let a2 = t.push(Value { class: ValueClass::Alias { target: a1 }, type_id: 0 });
        let (id, v) = t.resolve_alias(a2).unwrap();
        assert_eq!(id, f);
        assert!(matches!(v.class, ValueClass::Function { .. }));
    }

    #[test]
    fn alias_cycle_is_bounded() {
        let mut t = ValueTable::new();
        let a = t.push(Value { class: ValueClass::Alias { target: 1 }, type_id: 0 });
        t.push(Value { class: ValueClass::Alias { target: a }, type_id: 0 });
        assert_eq!(t.resolve_alias(a), Err(ParseError::AliasChainTooLong));
    }
}
