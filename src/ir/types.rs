use super::error::ParseError;

/// Index into a [`TypeTable`].
pub type TypeId = u32;

/// One entry in the type table. Mirrors the handful of type kinds a function
/// body actually needs to reason about (no metadata/token/vector types: those
/// never appear as the declared type of a value this builder materializes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Void,
    Int(u32),
    Float,
    Double,
    Pointer { pointee: TypeId, addrspace: u32 },
    Array { element: TypeId, count: u64 },
    Struct { elements: Vec<TypeId>, is_packed: bool },
    Function { return_type: TypeId, params: Vec<TypeId>, vararg: bool },
}

/// Arena of [`Type`]s referenced by id. Populated ahead of time by whatever
/// reads the module's `TYPE_BLOCK`; the function-body builder only ever
/// reads from it, with one exception: GEP and alloca both intern pointer
/// types they need but may not already exist.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: Vec<Type>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Append a type, returning its freshly assigned id.
    pub fn push(&mut self, ty: Type) -> TypeId {
        let id = self.types.len() as TypeId;
        self.types.push(ty);
        id
    }

    pub fn get(&self, id: TypeId) -> Result<&Type, ParseError> {
        self.types.get(id as usize).ok_or(ParseError::BadId)
    }

    /// The pointee of a pointer type. Panics on a non-pointer id: callers
    /// only reach for this once a prior check (or the format itself) already
    /// guarantees the type is a pointer.
    pub fn get_pointee(&self, id: TypeId) -> Result<TypeId, ParseError> {
        match self.get(id)? {
            Type::Pointer { pointee, .. } => Ok(*pointee),
            _ => Err(ParseError::GepBadType),
        }
    }

    /// Interns (or returns the existing id for) `pointer(elem, addrspace)`.
    pub fn make_pointer(&mut self, pointee: TypeId, addrspace: u32) -> TypeId {
        if let Some(id) = self.types.iter().position(|t| {
            matches!(t, Type::Pointer { pointee: p, addrspace: a } if *p == pointee && *a == addrspace)
        }) {
            return id as TypeId;
        }
        self.push(Type::Pointer { pointee, addrspace })
    }

    /// A size model for this VM's execution, not a real target ABI: pointers
    /// are 8 bytes, ints round up to whole bytes, aggregates sum/multiply
    /// their members.
    pub fn sizeof(&self, id: TypeId) -> Result<u64, ParseError> {
        Ok(match self.get(id)? {
            Type::Void => 0,
            Type::Int(bits) => u64::from(bits.div_ceil(8)),
            Type::Float => 4,
            Type::Double => 8,
            Type::Pointer { .. } => 8,
            Type::Array { element, count } => self.sizeof(*element)? * count,
            Type::Struct { elements, .. } => {
                let mut total = 0u64;
                for e in elements {
                    total += self.sizeof(*e)?;
                }
                total
            }
            Type::Function { .. } => 8,
        })
    }

    /// Bit width, defined only for the scalar kinds the switch-mask and
    /// alloca-alignment logic ever ask about.
    pub fn bitwidth(&self, id: TypeId) -> Result<u32, ParseError> {
        Ok(match self.get(id)? {
            Type::Int(bits) => *bits,
            Type::Float => 32,
            Type::Double => 64,
            Type::Pointer { .. } => 64,
            _ => return Err(ParseError::BadId),
        })
    }

    /// Find the first type matching a structural shape, interning it if
    /// none exists yet. Used for the implicit `i1` condition/result type
    /// that `cmp2`, `br`, and `vselect` need but that may not be declared
    /// anywhere in the module's own type table.
    pub fn find_or_make(&mut self, ty: Type) -> TypeId {
        if let Some(id) = self.types.iter().position(|t| *t == ty) {
            return id as TypeId;
        }
        self.push(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_pointer_types() {
        let mut t = TypeTable::new();
        let i32_ty = t.push(Type::Int(32));
        let p1 = t.make_pointer(i32_ty, 0);
        let p2 = t.make_pointer(i32_ty, 0);
        assert_eq!(p1, p2);
        let p3 = t.make_pointer(i32_ty, 1);
        assert_ne!(p1, p3);
    }

    #[test]
    fn sizeof_struct_sums_members() {
        let mut t = TypeTable::new();
        let i32_ty = t.push(Type::Int(32));
        let i64_ty = t.push(Type::Int(64));
        let s = t.push(Type::Struct { elements: vec![i32_ty, i64_ty], is_packed: false });
        assert_eq!(t.sizeof(s).unwrap(), 4 + 8);
    }

    #[test]
    fn bitwidth_width_64_for_pointer() {
        let mut t = TypeTable::new();
        let i8_ty = t.push(Type::Int(8));
        let p = t.make_pointer(i8_ty, 0);
        assert_eq!(t.bitwidth(p).unwrap(), 64);
    }
}
