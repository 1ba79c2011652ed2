#![allow(dead_code)]

//! Shared fixture builders: integration tests play the role of the external
//! resolver, handing the analyzer already-bound trees.

use opal_constants::resolved::declaration::{
    ClassDecl, ConstructorDecl, Declaration, Member, ParameterDecl, ResolvedUnit, VariableDecl,
};
use opal_constants::resolved::expression::{Binding, ExprKind, Expression};
use opal_constants::resolved::ids::{ConstructorId, ParameterId, VariableId};
use opal_constants::resolved::position::{Position, Span};
use opal_constants::resolved::ty::StaticType;

pub fn unit(declarations: Vec<Declaration>) -> ResolvedUnit {
    ResolvedUnit {
        name: "lib/main.opal".to_string(),
        directives: Vec::new(),
        declarations,
    }
}

pub fn span_at(line: usize, column: usize) -> Span {
    Span::new(Position::new(line, column), Position::new(line, column + 1))
}

pub fn expr(kind: ExprKind, ty: &str) -> Expression {
    Expression {
        kind,
        ty: StaticType::named(ty),
        span: Span::default(),
    }
}

pub fn int(value: i64) -> Expression {
    expr(ExprKind::Integer { value }, "int")
}

pub fn var_ref(id: u32, name: &str) -> Expression {
    expr(
        ExprKind::Name {
            name: name.to_string(),
            binding: Some(Binding::Variable(VariableId::new(id))),
        },
        "int",
    )
}

pub fn binary(left: Expression, operator: &str, right: Expression) -> Expression {
    expr(
        ExprKind::Binary {
            left: Box::new(left),
            operator: operator.to_string(),
            right: Box::new(right),
        },
        "int",
    )
}

pub fn const_var(id: u32, name: &str, initializer: Expression) -> VariableDecl {
    const_var_at(id, name, initializer, Span::default())
}

pub fn const_var_at(id: u32, name: &str, initializer: Expression, span: Span) -> VariableDecl {
    VariableDecl {
        id: VariableId::new(id),
        name: name.to_string(),
        is_const: true,
        is_final: false,
        is_static: false,
        annotations: Vec::new(),
        initializer: Some(initializer),
        span,
    }
}

pub fn const_constructor(id: u32) -> ConstructorDecl {
    ConstructorDecl {
        id: ConstructorId::new(id),
        name: String::new(),
        is_const: true,
        annotations: Vec::new(),
        parameters: Vec::new(),
        initializers: Vec::new(),
        span: Span::default(),
    }
}

pub fn defaulted_parameter(id: u32, name: &str, default_value: Expression) -> ParameterDecl {
    ParameterDecl {
        id: ParameterId::new(id),
        name: name.to_string(),
        annotations: Vec::new(),
        default_value: Some(default_value),
        span: Span::default(),
    }
}

pub fn class_with(name: &str, members: Vec<Member>) -> ClassDecl {
    ClassDecl {
        name: name.to_string(),
        annotations: Vec::new(),
        members,
        span: Span::default(),
    }
}

pub fn construction(constructor: u32, is_const: bool, arguments: Vec<Expression>) -> Expression {
    expr(
        ExprKind::Construction {
            constructor: Some(ConstructorId::new(constructor)),
            is_const,
            arguments,
        },
        "C",
    )
}
