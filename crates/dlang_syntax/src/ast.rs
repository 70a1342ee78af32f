//! Abstract Syntax Tree definitions for D.
//!
//! The tree is a single node type ([`Node`]) discriminated by [`NodeKind`]. Every node exclusively owns its children,
//! so a failed parse simply drops whatever was built so far.
//!
//! Child roles per kind are fixed at construction: nodes are only created through the per-kind constructors below,
//! which take exactly the children (and payload/name) that kind documents. Nodes are immutable once built.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// 1-based line/column cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, col: 1 };

    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

// ============================================================================
// Node kinds
// ============================================================================

/// Discriminant of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Root
    Program,

    // Declarations
    VarDecl,
    VarDef,

    // Statements
    Assign,
    If,
    IfShort,
    While,
    ForRange,
    ForIter,
    LoopInf,
    Exit,
    Return,
    Print,
    Body,

    // Binary operators
    Or,
    And,
    Xor,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Neq,
    Add,
    Sub,
    Mul,
    Div,

    // Unary operators
    UPlus,
    UMinus,
    Not,
    Is,

    // Postfix / reference expressions
    Ident,
    Index,
    Call,
    DotField,
    DotInt,

    // Literals
    IntLit,
    RealLit,
    StrLit,
    BoolLit,
    NoneLit,
    ArrayLit,
    TupleLit,
    TupleElem,
    FuncLit,
    ParamList,

    // Type indicators (right operand of `is`)
    TypeInt,
    TypeReal,
    TypeBool,
    TypeString,
    TypeNone,
    TypeArray,
    TypeTuple,
    TypeFunc,
}

impl NodeKind {
    /// Name used by the AST printer (`[Name]`).
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::VarDecl => "VarDecl",
            NodeKind::VarDef => "VarDef",
            NodeKind::Assign => "Assign",
            NodeKind::If => "If",
            NodeKind::IfShort => "IfShort",
            NodeKind::While => "While",
            NodeKind::ForRange => "ForRange",
            NodeKind::ForIter => "ForIter",
            NodeKind::LoopInf => "LoopInf",
            NodeKind::Exit => "Exit",
            NodeKind::Return => "Return",
            NodeKind::Print => "Print",
            NodeKind::Body => "Body",
            NodeKind::Or => "Or",
            NodeKind::And => "And",
            NodeKind::Xor => "Xor",
            NodeKind::Lt => "Lt",
            NodeKind::Le => "Le",
            NodeKind::Gt => "Gt",
            NodeKind::Ge => "Ge",
            NodeKind::Eq => "Eq",
            NodeKind::Neq => "Neq",
            NodeKind::Add => "Add",
            NodeKind::Sub => "Sub",
            NodeKind::Mul => "Mul",
            NodeKind::Div => "Div",
            NodeKind::UPlus => "UPlus",
            NodeKind::UMinus => "UMinus",
            NodeKind::Not => "Not",
            NodeKind::Is => "Is",
            NodeKind::Ident => "Ident",
            NodeKind::Index => "Index",
            NodeKind::Call => "Call",
            NodeKind::DotField => "DotField",
            NodeKind::DotInt => "DotInt",
            NodeKind::IntLit => "IntLit",
            NodeKind::RealLit => "RealLit",
            NodeKind::StrLit => "StrLit",
            NodeKind::BoolLit => "BoolLit",
            NodeKind::NoneLit => "NoneLit",
            NodeKind::ArrayLit => "ArrayLit",
            NodeKind::TupleLit => "TupleLit",
            NodeKind::TupleElem => "TupleElem",
            NodeKind::FuncLit => "FuncLit",
            NodeKind::ParamList => "ParamList",
            NodeKind::TypeInt => "TypeInt",
            NodeKind::TypeReal => "TypeReal",
            NodeKind::TypeBool => "TypeBool",
            NodeKind::TypeString => "TypeString",
            NodeKind::TypeNone => "TypeNone",
            NodeKind::TypeArray => "TypeArray",
            NodeKind::TypeTuple => "TypeTuple",
            NodeKind::TypeFunc => "TypeFunc",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operators, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Xor,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Neq,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn kind(self) -> NodeKind {
        match self {
            BinaryOp::Or => NodeKind::Or,
            BinaryOp::And => NodeKind::And,
            BinaryOp::Xor => NodeKind::Xor,
            BinaryOp::Lt => NodeKind::Lt,
            BinaryOp::Le => NodeKind::Le,
            BinaryOp::Gt => NodeKind::Gt,
            BinaryOp::Ge => NodeKind::Ge,
            BinaryOp::Eq => NodeKind::Eq,
            BinaryOp::Neq => NodeKind::Neq,
            BinaryOp::Add => NodeKind::Add,
            BinaryOp::Sub => NodeKind::Sub,
            BinaryOp::Mul => NodeKind::Mul,
            BinaryOp::Div => NodeKind::Div,
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
}

impl UnaryOp {
    pub fn kind(self) -> NodeKind {
        match self {
            UnaryOp::Plus => NodeKind::UPlus,
            UnaryOp::Minus => NodeKind::UMinus,
            UnaryOp::Not => NodeKind::Not,
        }
    }
}

/// Type indicators accepted on the right of `is`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeIndicator {
    Int,
    Real,
    Bool,
    String,
    None,
    Array,
    Tuple,
    Func,
}

impl TypeIndicator {
    pub fn kind(self) -> NodeKind {
        match self {
            TypeIndicator::Int => NodeKind::TypeInt,
            TypeIndicator::Real => NodeKind::TypeReal,
            TypeIndicator::Bool => NodeKind::TypeBool,
            TypeIndicator::String => NodeKind::TypeString,
            TypeIndicator::None => NodeKind::TypeNone,
            TypeIndicator::Array => NodeKind::TypeArray,
            TypeIndicator::Tuple => NodeKind::TypeTuple,
            TypeIndicator::Func => NodeKind::TypeFunc,
        }
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Inline value carried by literal and identifier nodes.
///
/// The variant is fully determined by the node kind: `IntLit`, `BoolLit` (0/1) and `DotInt` carry `Int`, `RealLit`
/// carries `Real`, `StrLit` and `Ident` carry `Text`, everything else is `Absent`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Absent,
    Int(i64),
    Real(f64),
    Text(String),
}

impl Payload {
    pub fn is_absent(&self) -> bool {
        matches!(self, Payload::Absent)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Payload::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Payload::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A single AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    line: usize,
    children: Vec<Node>,
    payload: Payload,
    name: Option<String>,
}

// Left-nested chains (`a + b + c + ...`, `x[1][2]...`) grow the tree without bound, so dropping must not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl Node {
    fn new(kind: NodeKind, line: usize, children: Vec<Node>) -> Self {
        Self {
            kind,
            line,
            children,
            payload: Payload::Absent,
            name: None,
        }
    }

    fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name.filter(|n| !n.is_empty());
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Structural label (variable, iterator, tuple element or field name); `None` when absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    // ---- declarations / statements ---------------------------------------

    pub fn program(line: usize, statements: Vec<Node>) -> Self {
        Self::new(NodeKind::Program, line, statements)
    }

    /// `var` with one or more [`Node::var_def`] bindings.
    pub fn var_decl(line: usize, defs: Vec<Node>) -> Self {
        Self::new(NodeKind::VarDecl, line, defs)
    }

    pub fn var_def(line: usize, name: String, init: Option<Node>) -> Self {
        Self::new(NodeKind::VarDef, line, init.into_iter().collect()).with_name(Some(name))
    }

    pub fn assign(line: usize, target: Node, value: Node) -> Self {
        Self::new(NodeKind::Assign, line, vec![target, value])
    }

    pub fn if_stmt(line: usize, cond: Node, then_body: Node, else_body: Option<Node>) -> Self {
        let mut children = vec![cond, then_body];
        children.extend(else_body);
        Self::new(NodeKind::If, line, children)
    }

    pub fn if_short(line: usize, cond: Node, stmt: Node) -> Self {
        Self::new(NodeKind::IfShort, line, vec![cond, stmt])
    }

    pub fn while_loop(line: usize, cond: Node, body: Node) -> Self {
        Self::new(NodeKind::While, line, vec![cond, body])
    }

    pub fn for_range(line: usize, iterator: Option<String>, from: Node, to: Node, body: Node) -> Self {
        Self::new(NodeKind::ForRange, line, vec![from, to, body]).with_name(iterator)
    }

    pub fn for_iter(line: usize, iterator: Option<String>, collection: Node, body: Node) -> Self {
        Self::new(NodeKind::ForIter, line, vec![collection, body]).with_name(iterator)
    }

    pub fn loop_inf(line: usize, body: Node) -> Self {
        Self::new(NodeKind::LoopInf, line, vec![body])
    }

    pub fn exit(line: usize) -> Self {
        Self::new(NodeKind::Exit, line, Vec::new())
    }

    pub fn return_stmt(line: usize, value: Option<Node>) -> Self {
        Self::new(NodeKind::Return, line, value.into_iter().collect())
    }

    pub fn print(line: usize, values: Vec<Node>) -> Self {
        Self::new(NodeKind::Print, line, values)
    }

    pub fn body(line: usize, statements: Vec<Node>) -> Self {
        Self::new(NodeKind::Body, line, statements)
    }

    // ---- expressions -----------------------------------------------------

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        let line = left.line;
        Self::new(op.kind(), line, vec![left, right])
    }

    pub fn unary(line: usize, op: UnaryOp, operand: Node) -> Self {
        Self::new(op.kind(), line, vec![operand])
    }

    pub fn is_type(operand: Node, indicator: Node) -> Self {
        let line = operand.line;
        Self::new(NodeKind::Is, line, vec![operand, indicator])
    }

    pub fn type_indicator(line: usize, indicator: TypeIndicator) -> Self {
        Self::new(indicator.kind(), line, Vec::new())
    }

    pub fn ident(line: usize, name: String) -> Self {
        Self::new(NodeKind::Ident, line, Vec::new()).with_payload(Payload::Text(name))
    }

    pub fn index(base: Node, index: Node) -> Self {
        let line = base.line;
        Self::new(NodeKind::Index, line, vec![base, index])
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        let line = callee.line;
        let mut children = Vec::with_capacity(args.len() + 1);
        children.push(callee);
        children.extend(args);
        Self::new(NodeKind::Call, line, children)
    }

    pub fn dot_field(base: Node, field: String) -> Self {
        let line = base.line;
        Self::new(NodeKind::DotField, line, vec![base]).with_name(Some(field))
    }

    /// Positional tuple access `base.N` (`N` is 1-based as written).
    pub fn dot_int(base: Node, index: i64) -> Self {
        let line = base.line;
        Self::new(NodeKind::DotInt, line, vec![base]).with_payload(Payload::Int(index))
    }

    // ---- literals --------------------------------------------------------

    pub fn int_lit(line: usize, value: i64) -> Self {
        Self::new(NodeKind::IntLit, line, Vec::new()).with_payload(Payload::Int(value))
    }

    pub fn real_lit(line: usize, value: f64) -> Self {
        Self::new(NodeKind::RealLit, line, Vec::new()).with_payload(Payload::Real(value))
    }

    pub fn str_lit(line: usize, value: String) -> Self {
        Self::new(NodeKind::StrLit, line, Vec::new()).with_payload(Payload::Text(value))
    }

    pub fn bool_lit(line: usize, value: bool) -> Self {
        Self::new(NodeKind::BoolLit, line, Vec::new()).with_payload(Payload::Int(i64::from(value)))
    }

    pub fn none_lit(line: usize) -> Self {
        Self::new(NodeKind::NoneLit, line, Vec::new())
    }

    pub fn array_lit(line: usize, elements: Vec<Node>) -> Self {
        Self::new(NodeKind::ArrayLit, line, elements)
    }

    /// Tuple literal; `elements` are [`Node::tuple_elem`] nodes.
    pub fn tuple_lit(line: usize, elements: Vec<Node>) -> Self {
        Self::new(NodeKind::TupleLit, line, elements)
    }

    pub fn tuple_elem(line: usize, name: Option<String>, value: Node) -> Self {
        Self::new(NodeKind::TupleElem, line, vec![value]).with_name(name)
    }

    pub fn func_lit(line: usize, params: Node, body: Node) -> Self {
        Self::new(NodeKind::FuncLit, line, vec![params, body])
    }

    /// Parameter list; `params` are [`Node::ident`] nodes.
    pub fn param_list(line: usize, params: Vec<Node>) -> Self {
        Self::new(NodeKind::ParamList, line, params)
    }
}
