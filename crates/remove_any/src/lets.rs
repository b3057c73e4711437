//! Local variable declarations.

use ts_oracle::{NodeId, TypeOracle};

use crate::unify::{compute_types_from_list, filter_unusable_types};
use crate::usage::all_types_of_refs;
use crate::{apply_computed_type, is_implicit_any, ComputedType, RevertableOperation};

fn let_computed_type<O: TypeOracle>(oracle: &O, declaration: NodeId) -> ComputedType {
    if !is_implicit_any(oracle, declaration) {
        return ComputedType::NoAny;
    }
    let witnesses = all_types_of_refs(oracle, declaration);
    match compute_types_from_list(oracle, &filter_unusable_types(oracle, witnesses)) {
        Some(text) => ComputedType::TypeFound(text),
        None => ComputedType::NoTypeFound,
    }
}

/// Infer and write a type for an implicit-any `let` declaration from the
/// values that flow into it.
pub fn remove_any_in_let<O: TypeOracle>(
    oracle: &mut O,
    declaration: NodeId,
) -> RevertableOperation {
    let computed = let_computed_type(oracle, declaration);
    apply_computed_type(oracle, declaration, computed)
}
