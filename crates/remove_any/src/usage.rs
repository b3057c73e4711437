//! Reference-walking evidence collection.
//!
//! Every strategy here is read-only against the oracle and produces raw
//! candidate lists: reference order preserved, duplicates retained,
//! unresolvable sources contributing absent entries. Filtering and
//! unification happen afterwards in [`crate::unify`].

use ts_oracle::{CalleeShape, NodeId, TypeId, TypeOracle};

/// Candidate types for the parameter at `ordinal` of a referencable
/// declaration (a named function, or the variable an arrow initializes),
/// observed at the declaration's call sites.
pub fn find_types_from_call_site<O: TypeOracle>(
    oracle: &O,
    declaration: NodeId,
    ordinal: usize,
) -> Vec<Option<TypeId>> {
    let mut witnesses = Vec::new();
    for reference in oracle.find_all_references(declaration) {
        let Some(parent) = oracle.parent(reference) else {
            continue;
        };
        let Some(call) = oracle.call_expression(parent) else {
            continue;
        };

        if call.callee == reference {
            // Direct invocation: the argument sitting in the parameter's
            // position is the evidence. A call that omits the argument
            // contributes an absent witness.
            witnesses.push(
                call.arguments
                    .get(ordinal)
                    .map(|&argument| oracle.resolved_type(argument)),
            );
            continue;
        }

        match call.callee_shape {
            CalleeShape::Identifier => {
                // The declaration is passed as a value to `helper(...)`:
                // read the helper's signatures at the parameter ordinal.
                let callee_ty = oracle.resolved_type(call.callee);
                for signature in oracle.call_signatures(callee_ty) {
                    witnesses.push(oracle.signature_parameter_type(
                        signature,
                        ordinal,
                        call.callee,
                    ));
                }
            }
            CalleeShape::PropertyAccess => {
                // `ns.each(items, f)`: locate the reference among the
                // arguments, resolve the position-matched parameter of the
                // wrapper's signature, then our parameter's type through
                // that callback type's own signatures.
                let Some(position) = call.arguments.iter().position(|&arg| arg == reference)
                else {
                    continue;
                };
                let callee_ty = oracle.resolved_type(call.callee);
                for signature in oracle.call_signatures(callee_ty) {
                    let Some(callback) =
                        oracle.signature_parameter_type(signature, position, call.callee)
                    else {
                        continue;
                    };
                    for inner in oracle.call_signatures(callback) {
                        witnesses.push(oracle.signature_parameter_type(
                            inner,
                            ordinal,
                            call.callee,
                        ));
                    }
                }
            }
            // Member chains deeper than one hop are never followed: a
            // wrong guess is worse than leaving the site unresolved.
            CalleeShape::Other => {}
        }
    }
    witnesses
}

/// Candidate types contributed by one reference occurrence of a value:
/// the declared types of a variable statement it initializes, or the
/// parameter types of a call it is passed to.
pub fn find_type_from_ref_usage<O: TypeOracle>(
    oracle: &O,
    reference: NodeId,
) -> Vec<Option<TypeId>> {
    let Some(parent) = oracle.parent(reference) else {
        return Vec::new();
    };

    if let Some(declarations) = oracle.variable_group(parent) {
        // `const a = x;` — what the statement declares witnesses what `x`
        // must be.
        return declarations
            .into_iter()
            .map(|declaration| Some(oracle.resolved_type(declaration)))
            .collect();
    }

    let Some(call) = oracle.call_expression(parent) else {
        return Vec::new();
    };
    let Some(position) = call.arguments.iter().position(|&arg| arg == reference) else {
        return Vec::new();
    };
    match call.callee_shape {
        CalleeShape::Identifier | CalleeShape::PropertyAccess => {
            let callee_ty = oracle.resolved_type(call.callee);
            oracle
                .call_signatures(callee_ty)
                .into_iter()
                .map(|signature| {
                    oracle.signature_parameter_type(signature, position, call.callee)
                })
                .collect()
        }
        CalleeShape::Other => Vec::new(),
    }
}

/// Every usage witness reachable from the declaration's references.
pub fn all_types_of_refs<O: TypeOracle>(oracle: &O, node: NodeId) -> Vec<Option<TypeId>> {
    oracle
        .find_all_references(node)
        .into_iter()
        .flat_map(|reference| find_type_from_ref_usage(oracle, reference))
        .collect()
}
