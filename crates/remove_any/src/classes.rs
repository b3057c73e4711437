//! Constructor and method parameters.

use ts_oracle::{NodeId, TypeOracle};

use crate::destructure::compute_destructured_types;
use crate::unify::{compute_types_from_list, filter_unusable_types};
use crate::usage::all_types_of_refs;
use crate::{apply_computed_type, is_implicit_any, ComputedType, RevertableOperation};

fn parameter_computed_type<O: TypeOracle>(oracle: &O, param: NodeId) -> ComputedType {
    if let Some(shape) = compute_destructured_types(oracle, param) {
        return ComputedType::TypeFound(shape);
    }
    if !is_implicit_any(oracle, param) {
        return ComputedType::NoAny;
    }
    // Constructors and methods are reached through an instance, so the
    // evidence comes from how the parameter itself is used, not from
    // call sites of a bare name.
    let witnesses = all_types_of_refs(oracle, param);
    match compute_types_from_list(oracle, &filter_unusable_types(oracle, witnesses)) {
        Some(text) => ComputedType::TypeFound(text),
        None => ComputedType::NoTypeFound,
    }
}

/// Infer and write types for every implicit-any parameter of a class
/// constructor.
pub fn remove_any_in_constructor<O: TypeOracle>(
    oracle: &mut O,
    constructor: NodeId,
) -> RevertableOperation {
    oracle
        .parameters(constructor)
        .into_iter()
        .map(|param| {
            let computed = parameter_computed_type(oracle, param);
            apply_computed_type(oracle, param, computed)
        })
        .collect()
}

/// Method parameters follow the constructor policy unchanged.
pub fn remove_any_in_method<O: TypeOracle>(oracle: &mut O, method: NodeId) -> RevertableOperation {
    remove_any_in_constructor(oracle, method)
}
