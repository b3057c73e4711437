//! Object-shape synthesis for destructured parameters.

use smol_str::SmolStr;
use ts_oracle::{NodeId, TypeOracle};

use crate::unify::{compute_types_from_list, filter_unusable_types};
use crate::usage::all_types_of_refs;

/// Infer a shape annotation for a destructured object parameter.
///
/// Only fires when the parameter is unannotated and at least one property
/// of its object type resolved to `any`. Each any-typed binding element
/// is then inferred independently from its own usage; the elements that
/// resolve are joined into an object-shape text (`{name: type,...}`).
/// `None` when nothing resolves — the caller falls back to the
/// parameter-level strategies.
pub fn compute_destructured_types<O: TypeOracle>(oracle: &O, param: NodeId) -> Option<SmolStr> {
    if oracle.has_explicit_annotation(param) {
        return None;
    }
    let param_ty = oracle.resolved_type(param);
    let has_any_property = oracle
        .object_properties(param_ty)
        .into_iter()
        .any(|property| oracle.is_any_type(oracle.property_type(property, param)));
    if !has_any_property {
        return None;
    }

    let mut pairs = Vec::new();
    for element in oracle.binding_elements(param) {
        if !oracle.is_any_type(oracle.resolved_type(element.node)) {
            continue;
        }
        let witnesses = all_types_of_refs(oracle, element.node);
        if let Some(text) =
            compute_types_from_list(oracle, &filter_unusable_types(oracle, witnesses))
        {
            pairs.push(format!("{}: {}", element.name, text));
        }
    }

    if pairs.is_empty() {
        None
    } else {
        Some(format!("{{{}}}", pairs.join(",")).into())
    }
}
