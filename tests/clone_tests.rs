mod common;

use common::*;
use opal_constants::eval::{ConstValue, EvalExpr, EvalExprKind};
use opal_constants::resolved::expression::{Binding, ExprKind};
use opal_constants::resolved::ids::{ConstructorId, VariableId};

fn sample_expression() -> opal_constants::resolved::expression::Expression {
    expr(
        ExprKind::ListLiteral {
            is_const: true,
            elements: vec![
                var_ref(7, "a"),
                construction(3, true, vec![int(1)]),
            ],
        },
        "List",
    )
}

#[test]
fn clones_carry_bindings_and_types_forward() {
    let source = sample_expression();
    let clone = EvalExpr::from_resolved(&source);
    assert_eq!(clone.ty, source.ty);
    assert_eq!(clone.span, source.span);
    match &clone.kind {
        EvalExprKind::ListLiteral { is_const, elements } => {
            assert!(*is_const);
            match &elements[0].kind {
                EvalExprKind::Name { binding, .. } => {
                    assert_eq!(*binding, Some(Binding::Variable(VariableId::new(7))));
                }
                other => panic!("expected a name, got {:?}", other),
            }
            match &elements[1].kind {
                EvalExprKind::Construction {
                    constructor,
                    is_const,
                    arguments,
                } => {
                    assert_eq!(*constructor, Some(ConstructorId::new(3)));
                    assert!(*is_const);
                    assert_eq!(arguments.len(), 1);
                }
                other => panic!("expected a construction, got {:?}", other),
            }
        }
        other => panic!("expected a list literal, got {:?}", other),
    }
}

#[test]
fn clone_value_slots_start_empty() {
    let source = sample_expression();
    let clone = EvalExpr::from_resolved(&source);
    assert!(clone.value.is_none());
    match &clone.kind {
        EvalExprKind::ListLiteral { elements, .. } => {
            assert!(elements.iter().all(|element| element.value.is_none()));
        }
        other => panic!("expected a list literal, got {:?}", other),
    }
}

#[test]
fn clones_are_mutually_independent() {
    let source = sample_expression();
    let mut first = EvalExpr::from_resolved(&source);
    let second = EvalExpr::from_resolved(&source);
    assert_eq!(first, second);

    first.value = Some(ConstValue::List(Vec::new()));
    if let EvalExprKind::ListLiteral { elements, .. } = &mut first.kind {
        elements[0].value = Some(ConstValue::Integer(42));
    }

    // The sibling copy and the resolved source are unaffected.
    assert!(second.value.is_none());
    if let EvalExprKind::ListLiteral { elements, .. } = &second.kind {
        assert!(elements[0].value.is_none());
    }
    assert_eq!(source, sample_expression());
    assert_ne!(first, second);
}
