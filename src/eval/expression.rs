use crate::resolved::expression::{Binding, ExprKind, Expression};
use crate::resolved::ids::ConstructorId;
use crate::resolved::position::Span;
use crate::resolved::ty::StaticType;

use super::value::ConstValue;

/// Evaluation-side expression node.
///
/// A one-way copy of a resolved `Expression`: same shape, same bindings, same
/// static types, plus a slot for the provisional value the evaluator
/// computes. A copy shares no node with its source, so mutating it is never
/// observable through the resolved tree or through any other copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalExpr {
    pub kind: EvalExprKind,
    pub ty: StaticType,
    pub span: Span,
    pub value: Option<ConstValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalExprKind {
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
    Name {
        name: String,
        binding: Option<Binding>,
    },
    NamedArgument {
        label: String,
        value: Box<EvalExpr>,
    },
    Unary {
        operator: String,
        operand: Box<EvalExpr>,
    },
    Binary {
        left: Box<EvalExpr>,
        operator: String,
        right: Box<EvalExpr>,
    },
    Conditional {
        condition: Box<EvalExpr>,
        when_true: Box<EvalExpr>,
        when_false: Box<EvalExpr>,
    },
    Construction {
        constructor: Option<ConstructorId>,
        is_const: bool,
        arguments: Vec<EvalExpr>,
    },
    ListLiteral {
        is_const: bool,
        elements: Vec<EvalExpr>,
    },
    SetLiteral {
        is_const: bool,
        elements: Vec<EvalExpr>,
    },
    MapLiteral {
        is_const: bool,
        entries: Vec<EvalMapEntry>,
    },
    Switch {
        scrutinee: Box<EvalExpr>,
        cases: Vec<EvalSwitchCase>,
        default: Option<Box<EvalExpr>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalMapEntry {
    pub key: EvalExpr,
    pub value: EvalExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalSwitchCase {
    pub label: EvalExpr,
    pub value: EvalExpr,
}

impl EvalExpr {
    /// Copy a resolved expression into an evaluation tree, carrying every
    /// binding and static type forward. The value slots start empty.
    pub fn from_resolved(source: &Expression) -> Self {
        let kind = match &source.kind {
            ExprKind::Integer { value } => EvalExprKind::Integer { value: *value },
            ExprKind::Double { value } => EvalExprKind::Double { value: *value },
            ExprKind::Boolean { value } => EvalExprKind::Boolean { value: *value },
            ExprKind::String { value } => EvalExprKind::String {
                value: value.clone(),
            },
            ExprKind::Null => EvalExprKind::Null,
            ExprKind::Name { name, binding } => EvalExprKind::Name {
                name: name.clone(),
                binding: *binding,
            },
            ExprKind::NamedArgument { label, value } => EvalExprKind::NamedArgument {
                label: label.clone(),
                value: Box::new(Self::from_resolved(value)),
            },
            ExprKind::Unary { operator, operand } => EvalExprKind::Unary {
                operator: operator.clone(),
                operand: Box::new(Self::from_resolved(operand)),
            },
            ExprKind::Binary {
                left,
                operator,
                right,
            } => EvalExprKind::Binary {
                left: Box::new(Self::from_resolved(left)),
                operator: operator.clone(),
                right: Box::new(Self::from_resolved(right)),
            },
            ExprKind::Conditional {
                condition,
                when_true,
                when_false,
            } => EvalExprKind::Conditional {
                condition: Box::new(Self::from_resolved(condition)),
                when_true: Box::new(Self::from_resolved(when_true)),
                when_false: Box::new(Self::from_resolved(when_false)),
            },
            ExprKind::Construction {
                constructor,
                is_const,
                arguments,
            } => EvalExprKind::Construction {
                constructor: *constructor,
                is_const: *is_const,
                arguments: arguments.iter().map(Self::from_resolved).collect(),
            },
            ExprKind::ListLiteral { is_const, elements } => EvalExprKind::ListLiteral {
                is_const: *is_const,
                elements: elements.iter().map(Self::from_resolved).collect(),
            },
            ExprKind::SetLiteral { is_const, elements } => EvalExprKind::SetLiteral {
                is_const: *is_const,
                elements: elements.iter().map(Self::from_resolved).collect(),
            },
            ExprKind::MapLiteral { is_const, entries } => EvalExprKind::MapLiteral {
                is_const: *is_const,
                entries: entries
                    .iter()
                    .map(|entry| EvalMapEntry {
                        key: Self::from_resolved(&entry.key),
                        value: Self::from_resolved(&entry.value),
                    })
                    .collect(),
            },
            ExprKind::Switch {
                scrutinee,
                cases,
                default,
            } => EvalExprKind::Switch {
                scrutinee: Box::new(Self::from_resolved(scrutinee)),
                cases: cases
                    .iter()
                    .map(|case| EvalSwitchCase {
                        label: Self::from_resolved(&case.label),
                        value: Self::from_resolved(&case.value),
                    })
                    .collect(),
                default: default
                    .as_ref()
                    .map(|expression| Box::new(Self::from_resolved(expression))),
            },
        };
        EvalExpr {
            kind,
            ty: source.ty.clone(),
            span: source.span,
            value: None,
        }
    }
}
