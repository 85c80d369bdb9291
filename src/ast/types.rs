/// Type Kind
/// The closed set of primitive kinds a contract can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Uint,
    Int,
    Bool,
    Address,
}

/// Data Type
/// Type descriptor carried by declarations, parameters and return types.
///
/// Immutable after construction; every type-bearing node owns exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataType {
    pub kind: TypeKind,
}

impl DataType {
    pub fn new(kind: TypeKind) -> Self {
        DataType { kind }
    }

    /// Returns the C++ primitive name for this type.
    ///
    /// Addresses are emitted as 64-bit unsigned integers.
    pub fn cpp_name(&self) -> &'static str {
        match self.kind {
            TypeKind::Uint => "uint32_t",
            TypeKind::Int => "int32_t",
            TypeKind::Bool => "bool",
            TypeKind::Address => "uint64_t",
        }
    }
}
