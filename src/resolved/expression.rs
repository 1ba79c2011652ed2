use super::ids::{ConstructorId, VariableId};
use super::position::Span;
use super::ty::StaticType;

/// What the resolver bound a simple name to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// The name denotes a variable declaration.
    Variable(VariableId),
    /// The name denotes a property accessor. `Some` when the accessor is
    /// synthesized for a backing variable, `None` for a computed getter.
    Accessor(Option<VariableId>),
    /// The name denotes a constructor tear-off.
    Constructor(ConstructorId),
    /// Functions, types, import prefixes. Never a constant dependency.
    Other,
}

/// One expression of the resolved tree.
///
/// `kind` carries the shape, `ty` the static type the resolver computed.
/// Nodes are immutable once the resolver hands them over; evaluation works on
/// `EvalExpr` copies instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExprKind,
    pub ty: StaticType,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Integer {
        value: i64,
    },
    Double {
        value: f64,
    },
    Boolean {
        value: bool,
    },
    String {
        value: String,
    },
    Null,
    /// A simple name plus whatever the resolver bound it to. An unresolved
    /// name carries `None` and never produces a dependency.
    Name {
        name: String,
        binding: Option<Binding>,
    },
    /// `label: value` in an argument list. The label names a parameter, not a
    /// value.
    NamedArgument {
        label: String,
        value: Box<Expression>,
    },
    Unary {
        operator: String,
        operand: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
    Conditional {
        condition: Box<Expression>,
        when_true: Box<Expression>,
        when_false: Box<Expression>,
    },
    /// `C(...)` or `const C(...)`; `constructor` is the declaration the call
    /// site resolved to.
    Construction {
        constructor: Option<ConstructorId>,
        is_const: bool,
        arguments: Vec<Expression>,
    },
    ListLiteral {
        is_const: bool,
        elements: Vec<Expression>,
    },
    SetLiteral {
        is_const: bool,
        elements: Vec<Expression>,
    },
    MapLiteral {
        is_const: bool,
        entries: Vec<MapEntry>,
    },
    /// Multi-way selection over constant-comparable case labels.
    Switch {
        scrutinee: Box<Expression>,
        cases: Vec<SwitchCase>,
        default: Option<Box<Expression>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub key: Expression,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub label: Expression,
    pub value: Expression,
}
