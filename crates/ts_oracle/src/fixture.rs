//! In-memory semantic model implementing [`TypeOracle`] for tests.
//!
//! Source loading is out of scope for this workspace, so test scenarios
//! build their "file" programmatically: declarations, expressions and
//! reference occurrences are allocated into arenas, and the model answers
//! the same queries a real checker-backed oracle would. [`render`] prints
//! a deterministic source listing so tests can compare whole-file bytes
//! before and after a run.
//!
//! [`render`]: FixtureOracle::render

use la_arena::{Arena, Idx, RawIdx};
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::{format_smolstr, SmolStr};

use crate::{
    BindingElement, CallShape, CalleeShape, MutationError, NodeId, PropertyId, SignatureId,
    TypeId, TypeOracle,
};

#[derive(Debug, Clone)]
enum TypeData {
    Any,
    Never,
    Number,
    String,
    Boolean,
    NumberLiteral(SmolStr),
    /// Stored unquoted; prints double-quoted.
    StringLiteral(SmolStr),
    BooleanLiteral(bool),
    /// A user-declared type (interface, class, alias). Prints verbatim.
    Named(SmolStr),
    Array(TypeId),
    /// Prints as an `import("...")`-qualified expression.
    Imported { module: SmolStr, name: SmolStr },
    Object(Vec<PropertyId>),
    Callable(Vec<SignatureId>),
}

#[derive(Debug, Clone)]
struct SignatureData {
    params: Vec<TypeId>,
}

#[derive(Debug, Clone)]
struct PropertyData {
    name: SmolStr,
    ty: TypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VarKeyword {
    Let,
    Const,
}

impl VarKeyword {
    fn text(self) -> &'static str {
        match self {
            VarKeyword::Let => "let",
            VarKeyword::Const => "const",
        }
    }
}

#[derive(Debug, Clone)]
enum NodeData {
    Function {
        name: SmolStr,
        params: Vec<NodeId>,
    },
    Constructor {
        class: SmolStr,
        params: Vec<NodeId>,
    },
    Method {
        class: SmolStr,
        name: SmolStr,
        params: Vec<NodeId>,
    },
    Arrow {
        params: Vec<NodeId>,
    },
    Parameter {
        name: SmolStr,
        ty: TypeId,
        annotation: Option<SmolStr>,
        /// Binding elements when the parameter is a destructuring pattern.
        pattern: Vec<NodeId>,
    },
    BindingElem {
        name: SmolStr,
        ty: TypeId,
    },
    VariableDecl {
        name: SmolStr,
        keyword: VarKeyword,
        ty: TypeId,
        annotation: Option<SmolStr>,
        initializer: Option<NodeId>,
    },
    Call {
        callee: NodeId,
        args: Vec<NodeId>,
    },
    /// A plain identifier expression. `target` is set when the identifier
    /// is a reference occurrence of a tracked declaration.
    Identifier {
        text: SmolStr,
        ty: TypeId,
        target: Option<NodeId>,
    },
    /// A single property-access expression (`ns.f`), used as a callee.
    PropertyAccess {
        text: SmolStr,
        ty: TypeId,
    },
    /// A deeper member chain or computed expression. Calls through it are
    /// never followed for evidence.
    OpaqueExpr {
        text: SmolStr,
        ty: TypeId,
    },
}

/// Specification of one parameter when building a function-like node.
#[derive(Debug, Clone, Copy)]
pub enum ParamSpec<'a> {
    /// No annotation; the parameter resolves to `any`.
    Untyped(&'a str),
    /// `name`, annotation text, resolved type.
    Typed(&'a str, &'a str, TypeId),
    /// A destructured object pattern: `(element name, element type)` pairs
    /// plus the parameter's own object type.
    Destructured(&'a [(&'a str, TypeId)], TypeId),
}

/// Arena-backed scripted oracle.
pub struct FixtureOracle {
    nodes: Arena<NodeData>,
    types: Arena<TypeData>,
    signatures: Arena<SignatureData>,
    properties: Arena<PropertyData>,
    parents: FxHashMap<NodeId, NodeId>,
    references: FxHashMap<NodeId, Vec<NodeId>>,
    /// Variable declaration -> all declarations of its statement.
    var_groups: FxHashMap<NodeId, Vec<NodeId>>,
    statements: Vec<NodeId>,
    /// Nodes whose annotation writes are rejected with a `MutationError`.
    rejected: FxHashSet<NodeId>,
    any: TypeId,
    never: TypeId,
    number: TypeId,
    string: TypeId,
    boolean: TypeId,
}

fn node_id(idx: Idx<NodeData>) -> NodeId {
    u32::from(idx.into_raw()).into()
}

fn type_id(idx: Idx<TypeData>) -> TypeId {
    u32::from(idx.into_raw()).into()
}

impl FixtureOracle {
    pub fn new() -> Self {
        let mut types = Arena::new();
        let any = type_id(types.alloc(TypeData::Any));
        let never = type_id(types.alloc(TypeData::Never));
        let number = type_id(types.alloc(TypeData::Number));
        let string = type_id(types.alloc(TypeData::String));
        let boolean = type_id(types.alloc(TypeData::Boolean));
        Self {
            nodes: Arena::new(),
            types,
            signatures: Arena::new(),
            properties: Arena::new(),
            parents: FxHashMap::default(),
            references: FxHashMap::default(),
            var_groups: FxHashMap::default(),
            statements: Vec::new(),
            rejected: FxHashSet::default(),
            any,
            never,
            number,
            string,
            boolean,
        }
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[Idx::from_raw(RawIdx::from(u32::from(id)))]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[Idx::from_raw(RawIdx::from(u32::from(id)))]
    }

    fn ty(&self, id: TypeId) -> &TypeData {
        &self.types[Idx::from_raw(RawIdx::from(u32::from(id)))]
    }

    fn alloc_node(&mut self, data: NodeData) -> NodeId {
        node_id(self.nodes.alloc(data))
    }

    fn alloc_type(&mut self, data: TypeData) -> TypeId {
        type_id(self.types.alloc(data))
    }

    // ==========================================================================
    // Type builders
    // ==========================================================================

    pub fn ty_any(&self) -> TypeId {
        self.any
    }

    pub fn ty_never(&self) -> TypeId {
        self.never
    }

    pub fn ty_number(&self) -> TypeId {
        self.number
    }

    pub fn ty_string(&self) -> TypeId {
        self.string
    }

    pub fn ty_boolean(&self) -> TypeId {
        self.boolean
    }

    pub fn ty_number_literal(&mut self, text: &str) -> TypeId {
        self.alloc_type(TypeData::NumberLiteral(text.into()))
    }

    pub fn ty_string_literal(&mut self, value: &str) -> TypeId {
        self.alloc_type(TypeData::StringLiteral(value.into()))
    }

    pub fn ty_boolean_literal(&mut self, value: bool) -> TypeId {
        self.alloc_type(TypeData::BooleanLiteral(value))
    }

    pub fn ty_named(&mut self, name: &str) -> TypeId {
        self.alloc_type(TypeData::Named(name.into()))
    }

    pub fn ty_array(&mut self, elem: TypeId) -> TypeId {
        self.alloc_type(TypeData::Array(elem))
    }

    pub fn ty_imported(&mut self, module: &str, name: &str) -> TypeId {
        self.alloc_type(TypeData::Imported {
            module: module.into(),
            name: name.into(),
        })
    }

    pub fn ty_object(&mut self, props: &[(&str, TypeId)]) -> TypeId {
        let ids = props
            .iter()
            .map(|(name, ty)| {
                let idx = self.properties.alloc(PropertyData {
                    name: SmolStr::from(*name),
                    ty: *ty,
                });
                PropertyId::from(u32::from(idx.into_raw()))
            })
            .collect();
        self.alloc_type(TypeData::Object(ids))
    }

    /// A callable type with a single signature.
    pub fn ty_function(&mut self, params: &[TypeId]) -> TypeId {
        self.ty_callable(&[params])
    }

    pub fn ty_callable(&mut self, signatures: &[&[TypeId]]) -> TypeId {
        let ids = signatures
            .iter()
            .map(|params| {
                let idx = self.signatures.alloc(SignatureData {
                    params: params.to_vec(),
                });
                SignatureId::from(u32::from(idx.into_raw()))
            })
            .collect();
        self.alloc_type(TypeData::Callable(ids))
    }

    // ==========================================================================
    // Declaration builders
    // ==========================================================================

    fn alloc_params(&mut self, specs: &[ParamSpec<'_>]) -> Vec<NodeId> {
        let any = self.any;
        specs
            .iter()
            .map(|spec| match *spec {
                ParamSpec::Untyped(name) => self.alloc_node(NodeData::Parameter {
                    name: name.into(),
                    ty: any,
                    annotation: None,
                    pattern: Vec::new(),
                }),
                ParamSpec::Typed(name, annotation, ty) => self.alloc_node(NodeData::Parameter {
                    name: name.into(),
                    ty,
                    annotation: Some(annotation.into()),
                    pattern: Vec::new(),
                }),
                ParamSpec::Destructured(elements, object_ty) => {
                    let elems: Vec<NodeId> = elements
                        .iter()
                        .map(|(name, ty)| {
                            self.alloc_node(NodeData::BindingElem {
                                name: SmolStr::from(*name),
                                ty: *ty,
                            })
                        })
                        .collect();
                    let param = self.alloc_node(NodeData::Parameter {
                        name: SmolStr::default(),
                        ty: object_ty,
                        annotation: None,
                        pattern: elems.clone(),
                    });
                    for elem in elems {
                        self.parents.insert(elem, param);
                    }
                    param
                }
            })
            .collect()
    }

    fn adopt_params(&mut self, callable: NodeId, params: &[NodeId]) {
        for &param in params {
            self.parents.insert(param, callable);
        }
    }

    pub fn function(&mut self, name: &str, params: &[ParamSpec<'_>]) -> NodeId {
        let params = self.alloc_params(params);
        let node = self.alloc_node(NodeData::Function {
            name: name.into(),
            params: params.clone(),
        });
        self.adopt_params(node, &params);
        self.statements.push(node);
        node
    }

    pub fn class_constructor(&mut self, class: &str, params: &[ParamSpec<'_>]) -> NodeId {
        let params = self.alloc_params(params);
        let node = self.alloc_node(NodeData::Constructor {
            class: class.into(),
            params: params.clone(),
        });
        self.adopt_params(node, &params);
        self.statements.push(node);
        node
    }

    pub fn class_method(&mut self, class: &str, name: &str, params: &[ParamSpec<'_>]) -> NodeId {
        let params = self.alloc_params(params);
        let node = self.alloc_node(NodeData::Method {
            class: class.into(),
            name: name.into(),
            params: params.clone(),
        });
        self.adopt_params(node, &params);
        self.statements.push(node);
        node
    }

    /// `const name = (params) => {};` — returns `(variable, arrow)`.
    pub fn arrow_variable(&mut self, name: &str, params: &[ParamSpec<'_>]) -> (NodeId, NodeId) {
        let any = self.any;
        let params = self.alloc_params(params);
        let arrow = self.alloc_node(NodeData::Arrow {
            params: params.clone(),
        });
        self.adopt_params(arrow, &params);
        let variable = self.alloc_node(NodeData::VariableDecl {
            name: name.into(),
            keyword: VarKeyword::Const,
            ty: any,
            annotation: None,
            initializer: Some(arrow),
        });
        self.parents.insert(arrow, variable);
        self.var_groups.insert(variable, vec![variable]);
        self.statements.push(variable);
        (variable, arrow)
    }

    /// An arrow function used as a bare expression statement, not the
    /// initializer of a variable.
    pub fn bare_arrow(&mut self, params: &[ParamSpec<'_>]) -> NodeId {
        let params = self.alloc_params(params);
        let arrow = self.alloc_node(NodeData::Arrow {
            params: params.clone(),
        });
        self.adopt_params(arrow, &params);
        self.statements.push(arrow);
        arrow
    }

    /// `let name;` — an unannotated declaration resolving to `any`.
    pub fn let_decl(&mut self, name: &str) -> NodeId {
        let any = self.any;
        let node = self.alloc_node(NodeData::VariableDecl {
            name: name.into(),
            keyword: VarKeyword::Let,
            ty: any,
            annotation: None,
            initializer: None,
        });
        self.var_groups.insert(node, vec![node]);
        self.statements.push(node);
        node
    }

    /// `let name: annotation;`
    pub fn let_decl_annotated(&mut self, name: &str, annotation: &str, ty: TypeId) -> NodeId {
        let node = self.alloc_node(NodeData::VariableDecl {
            name: name.into(),
            keyword: VarKeyword::Let,
            ty,
            annotation: Some(annotation.into()),
            initializer: None,
        });
        self.var_groups.insert(node, vec![node]);
        self.statements.push(node);
        node
    }

    pub fn parameter(&self, callable: NodeId, index: usize) -> NodeId {
        self.parameters(callable)[index]
    }

    // ==========================================================================
    // Expression and usage builders
    // ==========================================================================

    /// A plain expression with a known static type (a literal, a typed
    /// identifier, ...). Usable as a call argument or callee.
    pub fn expr(&mut self, text: &str, ty: TypeId) -> NodeId {
        self.alloc_node(NodeData::Identifier {
            text: text.into(),
            ty,
            target: None,
        })
    }

    /// A single property-access expression (`ns.f`) with a known type.
    pub fn property_callee(&mut self, text: &str, ty: TypeId) -> NodeId {
        self.alloc_node(NodeData::PropertyAccess {
            text: text.into(),
            ty,
        })
    }

    /// A member chain deeper than one hop. Evidence collection refuses to
    /// follow calls through it.
    pub fn opaque_callee(&mut self, text: &str, ty: TypeId) -> NodeId {
        self.alloc_node(NodeData::OpaqueExpr {
            text: text.into(),
            ty,
        })
    }

    /// A reference occurrence of `target`, registered so that
    /// `find_all_references(target)` reports it (in creation order).
    pub fn reference(&mut self, target: NodeId) -> NodeId {
        let any = self.any;
        let text = self.declaration_name(target);
        let node = self.alloc_node(NodeData::Identifier {
            text,
            ty: any,
            target: Some(target),
        });
        self.references.entry(target).or_default().push(node);
        node
    }

    /// A direct invocation of `target`: the callee is a fresh reference
    /// occurrence of the declaration.
    pub fn call(&mut self, target: NodeId, args: &[NodeId]) -> NodeId {
        let callee = self.reference(target);
        self.call_with_callee(callee, args)
    }

    /// A call expression with an explicit callee node.
    pub fn call_with_callee(&mut self, callee: NodeId, args: &[NodeId]) -> NodeId {
        let node = self.alloc_node(NodeData::Call {
            callee,
            args: args.to_vec(),
        });
        self.parents.insert(callee, node);
        for &arg in args {
            self.parents.insert(arg, node);
        }
        self.statements.push(node);
        node
    }

    /// `const a = source, b, ...;` — a variable statement whose first
    /// declaration is initialized with a reference to `source`. Each entry
    /// is `(name, Some((annotation, type)))` or `(name, None)` for an
    /// unannotated `any` declaration. Returns the declarations in order.
    pub fn assign_to_variables(
        &mut self,
        source: NodeId,
        decls: &[(&str, Option<(&str, TypeId)>)],
    ) -> Vec<NodeId> {
        let any = self.any;
        let init = self.reference(source);
        let nodes: Vec<NodeId> = decls
            .iter()
            .enumerate()
            .map(|(i, (name, typed))| {
                let (annotation, ty) = match typed {
                    Some((annotation, ty)) => (Some(SmolStr::from(*annotation)), *ty),
                    None => (None, any),
                };
                self.alloc_node(NodeData::VariableDecl {
                    name: SmolStr::from(*name),
                    keyword: VarKeyword::Const,
                    ty,
                    annotation,
                    initializer: (i == 0).then_some(init),
                })
            })
            .collect();
        self.parents.insert(init, nodes[0]);
        for &node in &nodes {
            self.var_groups.insert(node, nodes.clone());
        }
        self.statements.push(nodes[0]);
        nodes
    }

    /// Make annotation writes on `node` fail, simulating a structurally
    /// incompatible mutation.
    pub fn reject_annotations_on(&mut self, node: NodeId) {
        self.rejected.insert(node);
    }

    fn declaration_name(&self, node: NodeId) -> SmolStr {
        match self.node(node) {
            NodeData::Function { name, .. } => name.clone(),
            NodeData::Method { name, .. } => name.clone(),
            NodeData::Constructor { class, .. } => class.clone(),
            NodeData::Parameter { name, .. } => name.clone(),
            NodeData::BindingElem { name, .. } => name.clone(),
            NodeData::VariableDecl { name, .. } => name.clone(),
            NodeData::Identifier { text, .. }
            | NodeData::PropertyAccess { text, .. }
            | NodeData::OpaqueExpr { text, .. } => text.clone(),
            NodeData::Arrow { .. } | NodeData::Call { .. } => SmolStr::default(),
        }
    }

    // ==========================================================================
    // Rendering
    // ==========================================================================

    /// Print the whole fixture as a deterministic source listing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for &stmt in &self.statements {
            out.push_str(&self.render_statement(stmt));
            out.push('\n');
        }
        out
    }

    fn render_statement(&self, node: NodeId) -> String {
        match self.node(node) {
            NodeData::Function { name, params } => {
                format!("function {name}({}) {{}}", self.render_params(params))
            }
            NodeData::Constructor { class, params } => {
                format!(
                    "class {class} {{ constructor({}) {{}} }}",
                    self.render_params(params)
                )
            }
            NodeData::Method {
                class,
                name,
                params,
            } => {
                format!(
                    "class {class} {{ {name}({}) {{}} }}",
                    self.render_params(params)
                )
            }
            NodeData::Arrow { params } => {
                format!("(({}) => {{}});", self.render_params(params))
            }
            NodeData::VariableDecl { keyword, .. } => {
                let group = self
                    .var_groups
                    .get(&node)
                    .cloned()
                    .unwrap_or_else(|| vec![node]);
                let decls: Vec<String> = group
                    .iter()
                    .map(|decl| self.render_variable(*decl))
                    .collect();
                format!("{} {};", keyword.text(), decls.join(", "))
            }
            NodeData::Call { callee, args } => {
                let args: Vec<String> = args.iter().map(|arg| self.expr_text(*arg)).collect();
                format!("{}({});", self.expr_text(*callee), args.join(", "))
            }
            // Not statements; nothing sensible to print.
            NodeData::Parameter { .. }
            | NodeData::BindingElem { .. }
            | NodeData::Identifier { .. }
            | NodeData::PropertyAccess { .. }
            | NodeData::OpaqueExpr { .. } => String::new(),
        }
    }

    fn render_variable(&self, node: NodeId) -> String {
        let NodeData::VariableDecl {
            name,
            annotation,
            initializer,
            ..
        } = self.node(node)
        else {
            return String::new();
        };
        let mut out = name.to_string();
        if let Some(annotation) = annotation {
            out.push_str(": ");
            out.push_str(annotation);
        }
        if let Some(init) = initializer {
            out.push_str(" = ");
            out.push_str(&self.expr_text(*init));
        }
        out
    }

    fn render_params(&self, params: &[NodeId]) -> String {
        let rendered: Vec<String> = params
            .iter()
            .map(|&param| {
                let NodeData::Parameter {
                    name,
                    annotation,
                    pattern,
                    ..
                } = self.node(param)
                else {
                    return String::new();
                };
                let head = if pattern.is_empty() {
                    name.to_string()
                } else {
                    let names: Vec<SmolStr> = pattern
                        .iter()
                        .map(|elem| self.declaration_name(*elem))
                        .collect();
                    format!("{{ {} }}", names.join(", "))
                };
                match annotation {
                    Some(annotation) => format!("{head}: {annotation}"),
                    None => head,
                }
            })
            .collect();
        rendered.join(", ")
    }

    fn expr_text(&self, node: NodeId) -> String {
        match self.node(node) {
            NodeData::Identifier { text, .. }
            | NodeData::PropertyAccess { text, .. }
            | NodeData::OpaqueExpr { text, .. } => text.to_string(),
            NodeData::Arrow { params } => format!("({}) => {{}}", self.render_params(params)),
            NodeData::Call { callee, args } => {
                let args: Vec<String> = args.iter().map(|arg| self.expr_text(*arg)).collect();
                format!("{}({})", self.expr_text(*callee), args.join(", "))
            }
            _ => self.declaration_name(node).to_string(),
        }
    }
}

impl Default for FixtureOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeOracle for FixtureOracle {
    fn resolved_type(&self, node: NodeId) -> TypeId {
        match self.node(node) {
            NodeData::Parameter { ty, .. }
            | NodeData::BindingElem { ty, .. }
            | NodeData::VariableDecl { ty, .. }
            | NodeData::PropertyAccess { ty, .. }
            | NodeData::OpaqueExpr { ty, .. } => *ty,
            NodeData::Identifier { ty, target, .. } => match target {
                Some(target) => self.resolved_type(*target),
                None => *ty,
            },
            NodeData::Function { .. }
            | NodeData::Constructor { .. }
            | NodeData::Method { .. }
            | NodeData::Arrow { .. }
            | NodeData::Call { .. } => self.any,
        }
    }

    fn has_explicit_annotation(&self, node: NodeId) -> bool {
        match self.node(node) {
            NodeData::Parameter { annotation, .. }
            | NodeData::VariableDecl { annotation, .. } => annotation.is_some(),
            _ => false,
        }
    }

    fn is_any_type(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::Any)
    }

    fn is_never_type(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::Never)
    }

    fn is_number_type(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::Number)
    }

    fn is_number_literal(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::NumberLiteral(_))
    }

    fn is_string_type(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::String)
    }

    fn is_string_literal(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::StringLiteral(_))
    }

    fn is_boolean_type(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::Boolean)
    }

    fn is_boolean_literal(&self, ty: TypeId) -> bool {
        matches!(self.ty(ty), TypeData::BooleanLiteral(_))
    }

    fn print_type(&self, ty: TypeId) -> SmolStr {
        match self.ty(ty) {
            TypeData::Any => SmolStr::new_static("any"),
            TypeData::Never => SmolStr::new_static("never"),
            TypeData::Number => SmolStr::new_static("number"),
            TypeData::String => SmolStr::new_static("string"),
            TypeData::Boolean => SmolStr::new_static("boolean"),
            TypeData::NumberLiteral(text) => text.clone(),
            TypeData::StringLiteral(value) => format_smolstr!("\"{value}\""),
            TypeData::BooleanLiteral(value) => {
                if *value {
                    SmolStr::new_static("true")
                } else {
                    SmolStr::new_static("false")
                }
            }
            TypeData::Named(name) => name.clone(),
            TypeData::Array(elem) => format_smolstr!("{}[]", self.print_type(*elem)),
            TypeData::Imported { module, name } => {
                format_smolstr!("import(\"{module}\").{name}")
            }
            TypeData::Object(props) => {
                let fields: Vec<String> = props
                    .iter()
                    .map(|prop| {
                        let data = &self.properties
                            [Idx::from_raw(RawIdx::from(u32::from(*prop)))];
                        format!("{}: {}", data.name, self.print_type(data.ty))
                    })
                    .collect();
                format_smolstr!("{{ {}; }}", fields.join("; "))
            }
            TypeData::Callable(sigs) => {
                let params = sigs.first().map_or(String::new(), |sig| {
                    let data =
                        &self.signatures[Idx::from_raw(RawIdx::from(u32::from(*sig)))];
                    data.params
                        .iter()
                        .enumerate()
                        .map(|(i, ty)| format!("arg{i}: {}", self.print_type(*ty)))
                        .collect::<Vec<_>>()
                        .join(", ")
                });
                format_smolstr!("({params}) => void")
            }
        }
    }

    fn find_all_references(&self, node: NodeId) -> Vec<NodeId> {
        self.references.get(&node).cloned().unwrap_or_default()
    }

    fn call_signatures(&self, ty: TypeId) -> Vec<SignatureId> {
        match self.ty(ty) {
            TypeData::Callable(sigs) => sigs.clone(),
            _ => Vec::new(),
        }
    }

    fn signature_parameter_type(
        &self,
        signature: SignatureId,
        ordinal: usize,
        _at: NodeId,
    ) -> Option<TypeId> {
        let data = &self.signatures[Idx::from_raw(RawIdx::from(u32::from(signature)))];
        data.params.get(ordinal).copied()
    }

    fn object_properties(&self, ty: TypeId) -> Vec<PropertyId> {
        match self.ty(ty) {
            TypeData::Object(props) => props.clone(),
            _ => Vec::new(),
        }
    }

    fn property_type(&self, property: PropertyId, _at: NodeId) -> TypeId {
        self.properties[Idx::from_raw(RawIdx::from(u32::from(property)))].ty
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    fn parameters(&self, callable: NodeId) -> Vec<NodeId> {
        match self.node(callable) {
            NodeData::Function { params, .. }
            | NodeData::Constructor { params, .. }
            | NodeData::Method { params, .. }
            | NodeData::Arrow { params, .. } => params.clone(),
            _ => Vec::new(),
        }
    }

    fn call_expression(&self, node: NodeId) -> Option<CallShape> {
        let NodeData::Call { callee, args } = self.node(node) else {
            return None;
        };
        let callee_shape = match self.node(*callee) {
            NodeData::Identifier { .. } => CalleeShape::Identifier,
            NodeData::PropertyAccess { .. } => CalleeShape::PropertyAccess,
            _ => CalleeShape::Other,
        };
        Some(CallShape {
            callee: *callee,
            callee_shape,
            arguments: args.clone(),
        })
    }

    fn variable_group(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !matches!(self.node(node), NodeData::VariableDecl { .. }) {
            return None;
        }
        Some(
            self.var_groups
                .get(&node)
                .cloned()
                .unwrap_or_else(|| vec![node]),
        )
    }

    fn binding_elements(&self, param: NodeId) -> Vec<BindingElement> {
        let NodeData::Parameter { pattern, .. } = self.node(param) else {
            return Vec::new();
        };
        pattern
            .iter()
            .map(|&elem| BindingElement {
                node: elem,
                name: self.declaration_name(elem),
            })
            .collect()
    }

    fn write_type_annotation(
        &mut self,
        node: NodeId,
        text: &str,
    ) -> Result<Option<SmolStr>, MutationError> {
        if self.rejected.contains(&node) {
            return Err(MutationError::RejectedText(text.into()));
        }
        let text = SmolStr::from(text);
        match self.node_mut(node) {
            NodeData::Parameter { annotation, .. }
            | NodeData::VariableDecl { annotation, .. } => Ok(annotation.replace(text)),
            _ => Err(MutationError::UnsupportedNode),
        }
    }

    fn remove_type_annotation(&mut self, node: NodeId) {
        match self.node_mut(node) {
            NodeData::Parameter { annotation, .. }
            | NodeData::VariableDecl { annotation, .. } => *annotation = None,
            _ => {}
        }
    }
}
