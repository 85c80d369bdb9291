use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::ast::types::TypeKind;

lazy_static! {
    /// Type tags accepted by the construction API.
    static ref TYPE_TAGS: HashMap<&'static str, TypeKind> = {
        let mut tags = HashMap::new();
        tags.insert("uint", TypeKind::Uint);
        tags.insert("int", TypeKind::Int);
        tags.insert("bool", TypeKind::Bool);
        tags.insert("address", TypeKind::Address);
        tags
    };
}

/// Resolves a type tag to its kind.
///
/// Any unrecognised tag resolves to the unsigned 32-bit type; the
/// construction API never rejects a tag.
pub fn type_kind_for_tag(tag: &str) -> TypeKind {
    TYPE_TAGS.get(tag).copied().unwrap_or(TypeKind::Uint)
}
