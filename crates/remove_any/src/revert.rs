//! Composable, undoable edit accounting.
//!
//! Undo state is an explicit command sequence — one command per written
//! annotation, carrying the site and whatever annotation text it had
//! before — rather than captured closures. Commands replay in order
//! against the oracle; order across sites does not matter because every
//! command targets a distinct site.

use smol_str::SmolStr;
use ts_oracle::{MutationError, NodeId, TypeOracle};

/// A unit of applied (or skipped) change, composable across sites and
/// files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RevertableOperation {
    /// Edits actually written.
    pub count_changes_done: usize,
    /// Implicit-any sites that remain unresolved.
    pub count_of_anys: usize,
    undo: Vec<UndoCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UndoCommand {
    node: NodeId,
    /// Prior annotation text, or its absence. Written sites are always
    /// implicit-any, so this is absent in practice; carrying it keeps the
    /// undo deterministic even for an oracle that reports otherwise.
    previous: Option<SmolStr>,
}

impl RevertableOperation {
    /// The identity element of [`concat`]: nothing changed, nothing left
    /// unresolved, nothing to undo.
    ///
    /// [`concat`]: RevertableOperation::concat
    pub fn noop() -> Self {
        Self::default()
    }

    /// A site left as implicit-any.
    pub fn unresolved_any() -> Self {
        Self {
            count_of_anys: 1,
            ..Self::default()
        }
    }

    /// Combine two operations: counters sum, undo sequences concatenate.
    pub fn concat(mut self, other: Self) -> Self {
        self.count_changes_done += other.count_changes_done;
        self.count_of_anys += other.count_of_anys;
        self.undo.extend(other.undo);
        self
    }

    /// Undo every edit this operation performed, restoring each written
    /// site to its prior annotation state. Consumes the operation — an
    /// undo replayed twice is meaningless, so a second call does not
    /// compile.
    pub fn revert<O: TypeOracle>(self, oracle: &mut O) {
        for command in self.undo {
            match command.previous {
                Some(text) => {
                    if let Err(err) = oracle.write_type_annotation(command.node, &text) {
                        log::error!("could not restore annotation `{text}`: {err}");
                    }
                }
                None => oracle.remove_type_annotation(command.node),
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_counts(count_changes_done: usize, count_of_anys: usize) -> Self {
        Self {
            count_changes_done,
            count_of_anys,
            ..Self::default()
        }
    }
}

impl FromIterator<RevertableOperation> for RevertableOperation {
    fn from_iter<I: IntoIterator<Item = RevertableOperation>>(iter: I) -> Self {
        iter.into_iter().fold(Self::noop(), Self::concat)
    }
}

/// Write `text` as the declared type of `node`, producing the operation
/// that counts the edit and knows how to undo it.
pub(crate) fn set_type_on_node<O: TypeOracle>(
    oracle: &mut O,
    node: NodeId,
    text: &str,
) -> Result<RevertableOperation, MutationError> {
    let previous = oracle.write_type_annotation(node, text)?;
    Ok(RevertableOperation {
        count_changes_done: 1,
        count_of_anys: 0,
        undo: vec![UndoCommand { node, previous }],
    })
}

#[cfg(test)]
mod tests {
    use ts_oracle::fixture::{FixtureOracle, ParamSpec};

    use super::*;

    #[test]
    fn noop_is_the_identity() {
        let op = RevertableOperation::from_counts(1, 2);
        assert_eq!(RevertableOperation::noop().concat(op.clone()), op);
        assert_eq!(op.clone().concat(RevertableOperation::noop()), op);
    }

    #[test]
    fn concat_sums_counters() {
        let combined = RevertableOperation::from_counts(1, 0)
            .concat(RevertableOperation::from_counts(0, 1))
            .concat(RevertableOperation::unresolved_any());
        assert_eq!(combined.count_changes_done, 1);
        assert_eq!(combined.count_of_anys, 2);
    }

    #[test]
    fn revert_strips_the_written_annotation() {
        let mut fx = FixtureOracle::new();
        let f = fx.function("f", &[ParamSpec::Untyped("x")]);
        let param = fx.parameter(f, 0);
        let before = fx.render();

        let op = set_type_on_node(&mut fx, param, "number").unwrap();
        assert_eq!(op.count_changes_done, 1);
        assert_ne!(fx.render(), before);

        op.revert(&mut fx);
        assert_eq!(fx.render(), before);
    }
}
