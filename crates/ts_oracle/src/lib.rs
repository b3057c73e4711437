//! Static-analysis capability surface consumed by the `remove_any` rewriter.
//!
//! The rewriter never loads, parses or type-checks source text itself.
//! Everything it needs — the static type of a node, the references to a
//! symbol, the call signatures of a callable type, writing a type
//! annotation back into the tree — it asks of a [`TypeOracle`]. A
//! production embed plugs a real checker in behind the trait; tests use
//! the in-memory [`fixture`] model.

pub mod fixture;

use derive_more::Debug;
use smol_str::SmolStr;
use thiserror::Error;

/// Handle to a syntax node owned by the oracle's source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[debug("NodeId({_0:?})")]
pub struct NodeId(u32);

impl From<u32> for NodeId {
    #[inline]
    fn from(value: u32) -> Self {
        NodeId(value)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(value: NodeId) -> Self {
        value.0
    }
}

/// Handle to a resolved static type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[debug("TypeId({_0:?})")]
pub struct TypeId(u32);

impl From<u32> for TypeId {
    #[inline]
    fn from(value: u32) -> Self {
        TypeId(value)
    }
}

impl From<TypeId> for u32 {
    #[inline]
    fn from(value: TypeId) -> Self {
        value.0
    }
}

/// Handle to one call signature of a callable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[debug("SignatureId({_0:?})")]
pub struct SignatureId(u32);

impl From<u32> for SignatureId {
    #[inline]
    fn from(value: u32) -> Self {
        SignatureId(value)
    }
}

impl From<SignatureId> for u32 {
    #[inline]
    fn from(value: SignatureId) -> Self {
        value.0
    }
}

/// Handle to one property of an object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[debug("PropertyId({_0:?})")]
pub struct PropertyId(u32);

impl From<u32> for PropertyId {
    #[inline]
    fn from(value: u32) -> Self {
        PropertyId(value)
    }
}

impl From<PropertyId> for u32 {
    #[inline]
    fn from(value: PropertyId) -> Self {
        value.0
    }
}

/// The callee of a call expression, classified by how far evidence
/// collection is willing to follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalleeShape {
    /// A plain identifier: `f(...)`.
    Identifier,
    /// Exactly one property-access hop: `ns.f(...)`.
    PropertyAccess,
    /// Deeper member chains, computed callees, call results. Never
    /// followed for evidence.
    Other,
}

/// Shape of a call expression as seen from one of its reference nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallShape {
    pub callee: NodeId,
    pub callee_shape: CalleeShape,
    /// Arguments in source order.
    pub arguments: Vec<NodeId>,
}

/// One element of a destructured object binding pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingElement {
    pub node: NodeId,
    pub name: SmolStr,
}

/// Failure to write a type annotation into the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("node does not accept a type annotation")]
    UnsupportedNode,

    #[error("type text `{0}` was rejected by the source tree")]
    RejectedText(SmolStr),
}

/// The consumed static-analysis capability.
///
/// Queries take `&self` and may be repeated freely. Mutations take
/// `&mut self`: a write can shift source positions relevant to other
/// nodes' reference lookups, so callers must not hold evidence computed
/// before a write. The rewriter observes this by finishing one site's
/// full decide-then-write cycle before looking at the next.
pub trait TypeOracle {
    /// The resolved static type of a node.
    fn resolved_type(&self, node: NodeId) -> TypeId;

    /// Whether the node carries a written type annotation.
    fn has_explicit_annotation(&self, node: NodeId) -> bool;

    fn is_any_type(&self, ty: TypeId) -> bool;
    fn is_never_type(&self, ty: TypeId) -> bool;
    fn is_number_type(&self, ty: TypeId) -> bool;
    fn is_number_literal(&self, ty: TypeId) -> bool;
    fn is_string_type(&self, ty: TypeId) -> bool;
    fn is_string_literal(&self, ty: TypeId) -> bool;
    fn is_boolean_type(&self, ty: TypeId) -> bool;
    fn is_boolean_literal(&self, ty: TypeId) -> bool;

    /// The type's printable text, exactly as it would be written in an
    /// annotation.
    fn print_type(&self, ty: TypeId) -> SmolStr;

    /// All reference occurrences of a declaration, in source order.
    fn find_all_references(&self, node: NodeId) -> Vec<NodeId>;

    /// Call signatures of a callable type. Empty for non-callables.
    fn call_signatures(&self, ty: TypeId) -> Vec<SignatureId>;

    /// The declared type of the signature's parameter at `ordinal`,
    /// resolved at the location of `at`. `None` when the signature has no
    /// such parameter.
    fn signature_parameter_type(
        &self,
        signature: SignatureId,
        ordinal: usize,
        at: NodeId,
    ) -> Option<TypeId>;

    /// Properties of an object type. Empty for non-object types.
    fn object_properties(&self, ty: TypeId) -> Vec<PropertyId>;

    /// The type of a property, resolved at the location of `at`.
    fn property_type(&self, property: PropertyId, at: NodeId) -> TypeId;

    /// The node's syntactic parent, if any.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// The parameter declarations of a function-like node, in order.
    fn parameters(&self, callable: NodeId) -> Vec<NodeId>;

    /// If `node` is a call expression, its callee/argument shape.
    fn call_expression(&self, node: NodeId) -> Option<CallShape>;

    /// If `node` is a variable declaration, every declaration of its
    /// enclosing statement (including `node` itself), in order.
    fn variable_group(&self, node: NodeId) -> Option<Vec<NodeId>>;

    /// Elements of the node's destructured object binding pattern. Empty
    /// when the node is not a destructuring parameter.
    fn binding_elements(&self, param: NodeId) -> Vec<BindingElement>;

    /// Write `text` as the node's type annotation. Returns the previous
    /// annotation text, if one was present, so the caller can regenerate
    /// the exact undo step.
    fn write_type_annotation(
        &mut self,
        node: NodeId,
        text: &str,
    ) -> Result<Option<SmolStr>, MutationError>;

    /// Strip the node's type annotation, restoring it to an unannotated
    /// declaration.
    fn remove_type_annotation(&mut self, node: NodeId);
}
