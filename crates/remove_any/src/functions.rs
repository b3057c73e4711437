//! Named function parameters.

use ts_oracle::{NodeId, TypeOracle};

use crate::destructure::compute_destructured_types;
use crate::unify::{compute_types_from_list, filter_unusable_types};
use crate::usage::{all_types_of_refs, find_types_from_call_site};
use crate::{apply_computed_type, is_implicit_any, ComputedType, RevertableOperation};

fn parameter_computed_type<O: TypeOracle>(
    oracle: &O,
    function: NodeId,
    param: NodeId,
    ordinal: usize,
) -> ComputedType {
    if let Some(shape) = compute_destructured_types(oracle, param) {
        return ComputedType::TypeFound(shape);
    }
    if !is_implicit_any(oracle, param) {
        return ComputedType::NoAny;
    }

    let callsites = find_types_from_call_site(oracle, function, ordinal);
    if let Some(text) = compute_types_from_list(oracle, &filter_unusable_types(oracle, callsites))
    {
        return ComputedType::TypeFound(text);
    }

    let witnesses = all_types_of_refs(oracle, param);
    match compute_types_from_list(oracle, &filter_unusable_types(oracle, witnesses)) {
        Some(text) => ComputedType::TypeFound(text),
        None => ComputedType::NoTypeFound,
    }
}

/// Infer and write types for every implicit-any parameter of a named
/// function declaration. Call-site arguments are the primary evidence;
/// the parameter's own usage is the fallback.
pub fn remove_any_in_function<O: TypeOracle>(
    oracle: &mut O,
    function: NodeId,
) -> RevertableOperation {
    oracle
        .parameters(function)
        .into_iter()
        .enumerate()
        .map(|(ordinal, param)| {
            let computed = parameter_computed_type(oracle, function, param, ordinal);
            apply_computed_type(oracle, param, computed)
        })
        .collect()
}
