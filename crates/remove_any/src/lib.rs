//! Usage-driven elimination of implicit `any` declarations.
//!
//! For every declaration site whose static type silently resolved to
//! `any`, the rewriter collects type evidence from the site's observed
//! usage — call-site arguments, assigned values, destructured property
//! reads — unifies the evidence into a single printable type, and writes
//! it back as an explicit annotation. Sites with no usable evidence are
//! left alone and counted; every write is undoable through the returned
//! [`RevertableOperation`].
//!
//! The crate never touches source text or a checker itself: all analysis
//! and mutation goes through a [`TypeOracle`].

mod arrows;
mod classes;
mod destructure;
mod functions;
mod lets;
mod revert;
mod unify;
mod usage;

#[cfg(test)]
mod pbt;

pub use arrows::remove_any_in_arrow;
pub use classes::{remove_any_in_constructor, remove_any_in_method};
pub use destructure::compute_destructured_types;
pub use functions::remove_any_in_function;
pub use lets::remove_any_in_let;
pub use revert::RevertableOperation;
pub use unify::{compute_types_from_list, filter_unusable_types};
pub use usage::{all_types_of_refs, find_type_from_ref_usage, find_types_from_call_site};

use smol_str::SmolStr;
use ts_oracle::{NodeId, TypeOracle};

/// Decision for one declaration site.
///
/// Closed on purpose: every consumer matches all three variants, so a
/// decision nobody handles cannot be introduced without the compiler
/// flagging each match site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputedType {
    /// Evidence unified into a printable type to write.
    TypeFound(SmolStr),
    /// The site was never an implicit `any`; nothing to do.
    NoAny,
    /// The site is an implicit `any` but no usable evidence exists.
    NoTypeFound,
}

/// One declaration the rewriter knows how to process, as classified by
/// the driver walking the file. Shapes outside these four kinds are not
/// candidates and never reach the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Function(NodeId),
    Constructor(NodeId),
    Method(NodeId),
    Arrow(NodeId),
    Let(NodeId),
}

/// A site qualifies only when nothing was written by the author and the
/// checker still resolved it to `any`.
pub fn is_implicit_any<O: TypeOracle>(oracle: &O, node: NodeId) -> bool {
    oracle.is_any_type(oracle.resolved_type(node)) && !oracle.has_explicit_annotation(node)
}

/// Turn a per-site decision into an applied (or skipped) edit.
///
/// A rejected write is downgraded to the unresolved outcome for that one
/// site; it never aborts the rest of the file.
pub(crate) fn apply_computed_type<O: TypeOracle>(
    oracle: &mut O,
    node: NodeId,
    computed: ComputedType,
) -> RevertableOperation {
    match computed {
        ComputedType::TypeFound(text) => match revert::set_type_on_node(oracle, node, &text) {
            Ok(op) => op,
            Err(err) => {
                log::warn!(
                    "could not write inferred type `{text}`: {err}; \
                     leaving the site as-is (please report this to the remove_any maintainers)"
                );
                RevertableOperation::unresolved_any()
            }
        },
        ComputedType::NoTypeFound => RevertableOperation::unresolved_any(),
        ComputedType::NoAny => RevertableOperation::noop(),
    }
}

/// Process a whole file's worth of declarations, folding the per-site
/// operations into one operation whose counters aggregate the run and
/// whose revert undoes every edit.
pub fn remove_any<O: TypeOracle>(
    oracle: &mut O,
    declarations: &[Declaration],
) -> RevertableOperation {
    declarations
        .iter()
        .map(|declaration| match *declaration {
            Declaration::Function(node) => remove_any_in_function(oracle, node),
            Declaration::Constructor(node) => remove_any_in_constructor(oracle, node),
            Declaration::Method(node) => remove_any_in_method(oracle, node),
            Declaration::Arrow(node) => remove_any_in_arrow(oracle, node),
            Declaration::Let(node) => remove_any_in_let(oracle, node),
        })
        .collect()
}
