//! Compile-time constant dependency analysis for resolved Opal units.
//!
//! Discovery finds every constant-requiring position, extraction reports the
//! constants each one reads, and the scheduler turns the resulting graph into
//! an evaluation order plus circular-reference diagnostics. The actual
//! folding lives behind `eval::Evaluator`.

pub mod discover;
pub mod error;
pub mod extract;
pub mod graph;
pub mod target;

pub use discover::discover_targets;
pub use error::StructuralError;
pub use extract::extract_dependencies;
pub use graph::{DependencyGraph, Schedule};
pub use target::{EvaluationTarget, TargetNode, TargetRecord, TargetRegistry};

use log::debug;
use rayon::prelude::*;

use crate::diagnostics::{CIRCULAR_CONSTANT, Diagnostic};
use crate::eval::{
    ConstantWork, EvalAnnotation, EvalConstructor, EvalExpr, EvalInitializer, EvalOutcome,
    EvalParameter, Evaluator,
};
use crate::resolved::declaration::{Initializer, ResolvedUnit};
use crate::resolved::position::Span;

/// One entry of the evaluation order: a target plus the cloned expressions
/// the evaluator folds.
#[derive(Debug, Clone)]
pub struct ScheduledConstant {
    pub target: EvaluationTarget,
    pub name: String,
    pub span: Span,
    pub work: ConstantWork,
    /// Filled in by [`ConstantAnalysis::drive`]; `None` until then.
    pub outcome: Option<EvalOutcome>,
}

/// A reference to one member of a cyclic group.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantRef {
    pub target: EvaluationTarget,
    pub name: String,
    pub span: Span,
}

/// One maximal circular-reference group with its user-facing diagnostic.
#[derive(Debug, Clone)]
pub struct CycleGroup {
    pub members: Vec<ConstantRef>,
    pub diagnostic: Diagnostic,
}

/// Result of analyzing one unit. All cycles in the unit are reported
/// together; nothing retries inside this core.
#[derive(Debug)]
pub struct ConstantAnalysis {
    /// Non-cyclic targets, dependencies strictly before consumers.
    pub eval_order: Vec<ScheduledConstant>,
    /// Every cyclic group found in the unit.
    pub cycles: Vec<CycleGroup>,
}

impl ConstantAnalysis {
    /// Feed a finished analysis to the evaluator: one `report_cycle` per
    /// group, then one `evaluate` per ordered target. Every discovered target
    /// receives exactly one attempt.
    pub fn drive<E: Evaluator>(&mut self, evaluator: &mut E) {
        for group in &self.cycles {
            evaluator.report_cycle(group);
        }
        for constant in &mut self.eval_order {
            let outcome = evaluator.evaluate(constant);
            constant.outcome = Some(outcome);
        }
    }
}

/// Analyze one resolved unit end to end.
///
/// Fails only on a malformed tree (a resolver contract violation); circular
/// constants are data in the result, not errors.
pub fn analyze_constants(unit: &ResolvedUnit) -> Result<ConstantAnalysis, StructuralError> {
    let registry = discover_targets(unit)?;
    debug!(
        "{}: discovered {} constant targets",
        unit.name,
        registry.len()
    );

    let mut graph = DependencyGraph::new(registry.len());
    for (consumer, record) in registry.iter().enumerate() {
        for dependency in extract_dependencies(record, &registry) {
            if let Some(dependency_slot) = registry.index_of(dependency) {
                graph.add_edge(consumer, dependency_slot);
            }
        }
    }

    let schedule = graph.schedule();
    debug!(
        "{}: scheduled {} constants, {} cycles",
        unit.name,
        schedule.order.len(),
        schedule.cycles.len()
    );

    let eval_order = schedule
        .order
        .iter()
        .map(|&slot| {
            let record = registry.get(slot);
            ScheduledConstant {
                target: record.target,
                name: record.name.clone(),
                span: record.span,
                work: clone_work(record),
                outcome: None,
            }
        })
        .collect();

    let cycles = schedule
        .cycles
        .iter()
        .map(|group| {
            let members: Vec<ConstantRef> = group
                .iter()
                .map(|&slot| {
                    let record = registry.get(slot);
                    ConstantRef {
                        target: record.target,
                        name: record.name.clone(),
                        span: record.span,
                    }
                })
                .collect();
            let diagnostic = cycle_diagnostic(&unit.name, &members);
            CycleGroup {
                members,
                diagnostic,
            }
        })
        .collect();

    Ok(ConstantAnalysis { eval_order, cycles })
}

/// Analyze several units in parallel. Each walk owns its output exclusively;
/// nothing is shared between units.
pub fn analyze_units(units: &[ResolvedUnit]) -> Vec<Result<ConstantAnalysis, StructuralError>> {
    units.par_iter().map(analyze_constants).collect()
}

/// Hand a target's constant expressions to the evaluation side, as owned
/// copies. This is the only place resolved nodes cross over.
fn clone_work(record: &TargetRecord<'_>) -> ConstantWork {
    match record.node {
        TargetNode::Variable(variable) => ConstantWork::VariableInitializer(
            variable.initializer.as_ref().map(EvalExpr::from_resolved),
        ),
        TargetNode::Parameter(parameter) => ConstantWork::ParameterDefault(
            parameter.default_value.as_ref().map(EvalExpr::from_resolved),
        ),
        TargetNode::Annotation(annotation) => ConstantWork::Annotation(EvalAnnotation {
            binding: annotation.binding,
            name: annotation.name.clone(),
            arguments: annotation
                .arguments
                .iter()
                .map(EvalExpr::from_resolved)
                .collect(),
            span: annotation.span,
        }),
        TargetNode::Constructor(constructor) => ConstantWork::Constructor(EvalConstructor {
            name: record.name.clone(),
            parameters: constructor
                .parameters
                .iter()
                .map(|parameter| EvalParameter {
                    id: parameter.id,
                    name: parameter.name.clone(),
                    has_default: parameter.default_value.is_some(),
                })
                .collect(),
            initializers: constructor
                .initializers
                .iter()
                .map(clone_initializer)
                .collect(),
        }),
    }
}

fn clone_initializer(initializer: &Initializer) -> EvalInitializer {
    match initializer {
        Initializer::Field {
            field, name, value, ..
        } => EvalInitializer::Field {
            field: *field,
            name: name.clone(),
            value: EvalExpr::from_resolved(value),
        },
        Initializer::Redirect {
            target, arguments, ..
        } => EvalInitializer::Redirect {
            target: *target,
            arguments: arguments.iter().map(EvalExpr::from_resolved).collect(),
        },
        Initializer::Super {
            target, arguments, ..
        } => EvalInitializer::Super {
            target: *target,
            arguments: arguments.iter().map(EvalExpr::from_resolved).collect(),
        },
    }
}

fn cycle_diagnostic(unit: &str, members: &[ConstantRef]) -> Diagnostic {
    let names = members
        .iter()
        .map(|member| member.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let span = members
        .first()
        .map(|member| member.span)
        .unwrap_or_default();
    Diagnostic::make_error(
        &CIRCULAR_CONSTANT,
        format!(
            "Constants cannot depend on themselves; this group is mutually recursive: {}.",
            names
        ),
        unit,
        span,
    )
    .with_hint("Break the cycle by giving one of these constants a value that does not read the others.")
}
