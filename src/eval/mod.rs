//! The evaluator-facing half of the analyzer: mutable copies of constant
//! expressions and the interface the external folding engine implements.
//!
//! Nothing in this crate computes values. The evaluator receives owned
//! clones, fills their value slots, and reports outcomes back through
//! [`Evaluator`].

pub mod expression;
pub mod value;

pub use expression::{EvalExpr, EvalExprKind, EvalMapEntry, EvalSwitchCase};
pub use value::ConstValue;

use crate::constants::{CycleGroup, ScheduledConstant};
use crate::resolved::declaration::AnnotationBinding;
use crate::resolved::ids::{ConstructorId, ParameterId, VariableId};
use crate::resolved::position::Span;

/// Cloned payload of a constant constructor: the full initializer list plus
/// the parameter shape an invocation is applied against.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalConstructor {
    pub name: String,
    pub parameters: Vec<EvalParameter>,
    pub initializers: Vec<EvalInitializer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalParameter {
    pub id: ParameterId,
    pub name: String,
    pub has_default: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalInitializer {
    Field {
        field: Option<VariableId>,
        name: String,
        value: EvalExpr,
    },
    Redirect {
        target: Option<ConstructorId>,
        arguments: Vec<EvalExpr>,
    },
    Super {
        target: Option<ConstructorId>,
        arguments: Vec<EvalExpr>,
    },
}

/// Cloned payload of a metadata annotation: an implicit constant
/// construction (or constant variable reference) plus its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalAnnotation {
    pub binding: Option<AnnotationBinding>,
    pub name: String,
    pub arguments: Vec<EvalExpr>,
    pub span: Span,
}

/// The per-target payload handed to the evaluator. Everything inside is an
/// owned copy; the resolved tree stays untouched.
///
/// The `Option` payloads are `None` only when the declaration carries no
/// expression at all (e.g. `const x;` after an upstream resolver error);
/// evaluators report that as their own failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantWork {
    VariableInitializer(Option<EvalExpr>),
    ParameterDefault(Option<EvalExpr>),
    Annotation(EvalAnnotation),
    Constructor(EvalConstructor),
}

/// What one evaluation attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    Value(ConstValue),
    /// The target sat inside a dependency cycle; no value exists.
    PoisonedByCycle,
    /// A dependency failed upstream and the poison propagates.
    PoisonedUpstream,
}

/// The external constant-folding engine.
///
/// The scheduler exposes a correct partial order; an evaluator that processes
/// targets in that order sees every dependency before every consumer. Hosts
/// that evaluate independent partitions concurrently must guarantee
/// at-most-once evaluation per target identity themselves.
pub trait Evaluator {
    /// Called exactly once per non-cyclic target, dependencies strictly
    /// first. The work payload is mutable so provisional values can be
    /// attached to its nodes.
    fn evaluate(&mut self, constant: &mut ScheduledConstant) -> EvalOutcome;

    /// Called exactly once per cyclic group, before any `evaluate` call.
    fn report_cycle(&mut self, group: &CycleGroup);
}
