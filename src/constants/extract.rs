//! Dependency extraction: a per-target driver plus a reference finder over
//! single expressions. Read-only; nothing here evaluates.

use log::trace;

use crate::resolved::declaration::{AnnotationBinding, Initializer};
use crate::resolved::expression::{Binding, ExprKind, Expression};
use crate::resolved::ids::VariableId;

use super::target::{EvaluationTarget, TargetNode, TargetRecord, TargetRegistry};

/// Report every discovered target this one reads, deduplicated and in walk
/// order. Unresolved references and references to non-constant declarations
/// stay out of the set; diagnosing those belongs to the resolver.
pub fn extract_dependencies(
    record: &TargetRecord<'_>,
    registry: &TargetRegistry<'_>,
) -> Vec<EvaluationTarget> {
    let mut finder = ReferenceFinder {
        registry,
        found: Vec::new(),
    };
    match record.node {
        TargetNode::Variable(variable) => {
            if let Some(initializer) = &variable.initializer {
                finder.visit(initializer);
            }
        }
        TargetNode::Parameter(parameter) => {
            if let Some(default_value) = &parameter.default_value {
                finder.visit(default_value);
            }
        }
        TargetNode::Annotation(annotation) => {
            match annotation.binding {
                Some(AnnotationBinding::Constructor(constructor)) => {
                    finder.add(EvaluationTarget::ConstConstructor(constructor));
                }
                Some(AnnotationBinding::Variable(variable)) => {
                    finder.add(EvaluationTarget::ConstVariable(variable));
                }
                None => {}
            }
            for argument in &annotation.arguments {
                finder.visit(argument);
            }
        }
        TargetNode::Constructor(constructor) => {
            // Defaults must be ready before any invocation can be applied.
            for parameter in &constructor.parameters {
                if parameter.default_value.is_some() {
                    finder.add(EvaluationTarget::DefaultParameterValue(parameter.id));
                }
            }
            for initializer in &constructor.initializers {
                match initializer {
                    Initializer::Field { value, .. } => finder.visit(value),
                    // Redirecting and super invocations are unconditionally
                    // part of the value under construction, marker or not.
                    Initializer::Redirect {
                        target, arguments, ..
                    }
                    | Initializer::Super {
                        target, arguments, ..
                    } => {
                        if let Some(target) = target {
                            finder.add(EvaluationTarget::ConstConstructor(*target));
                        }
                        for argument in arguments {
                            finder.visit(argument);
                        }
                    }
                }
            }
        }
    }
    trace!(
        "{} reads {} other constant(s)",
        record.name,
        finder.found.len()
    );
    finder.found
}

struct ReferenceFinder<'r, 'a> {
    registry: &'r TargetRegistry<'a>,
    found: Vec<EvaluationTarget>,
}

impl ReferenceFinder<'_, '_> {
    /// Record a dependency if it names a discovered target.
    fn add(&mut self, target: EvaluationTarget) {
        if self.registry.contains(target) && !self.found.contains(&target) {
            self.found.push(target);
        }
    }

    fn add_variable(&mut self, variable: VariableId) {
        self.add(EvaluationTarget::ConstVariable(variable));
    }

    fn visit(&mut self, expression: &Expression) {
        match &expression.kind {
            ExprKind::Integer { .. }
            | ExprKind::Double { .. }
            | ExprKind::Boolean { .. }
            | ExprKind::String { .. }
            | ExprKind::Null => {}
            ExprKind::Name { binding, .. } => match binding {
                Some(Binding::Variable(variable)) => self.add_variable(*variable),
                // A property accessor stands for its backing variable.
                Some(Binding::Accessor(Some(variable))) => self.add_variable(*variable),
                Some(Binding::Accessor(None))
                | Some(Binding::Constructor(_))
                | Some(Binding::Other)
                | None => {}
            },
            // The label names a parameter, not a value.
            ExprKind::NamedArgument { label: _, value } => self.visit(value),
            ExprKind::Unary { operand, .. } => self.visit(operand),
            ExprKind::Binary { left, right, .. } => {
                self.visit(left);
                self.visit(right);
            }
            ExprKind::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                self.visit(condition);
                self.visit(when_true);
                self.visit(when_false);
            }
            ExprKind::Construction {
                constructor,
                is_const,
                arguments,
            } => {
                if *is_const {
                    if let Some(constructor) = constructor {
                        self.add(EvaluationTarget::ConstConstructor(*constructor));
                    }
                }
                // Argument values can hide constant reads either way.
                for argument in arguments {
                    self.visit(argument);
                }
            }
            ExprKind::ListLiteral { is_const, elements } => {
                // A runtime list builds its elements lazily; nothing in it is
                // needed at constant-evaluation time.
                if *is_const {
                    for element in elements {
                        self.visit(element);
                    }
                }
            }
            ExprKind::SetLiteral { elements, .. } => {
                // Element values feed the uniqueness check even when the
                // literal itself is runtime-built.
                for element in elements {
                    self.visit(element);
                }
            }
            ExprKind::MapLiteral { is_const, entries } => {
                for entry in entries {
                    self.visit(&entry.key);
                    if *is_const {
                        self.visit(&entry.value);
                    }
                }
            }
            ExprKind::Switch {
                scrutinee,
                cases,
                default,
            } => {
                self.visit(scrutinee);
                for case in cases {
                    // Labels must be constant-comparable no matter what
                    // surrounds them.
                    self.visit(&case.label);
                    self.visit(&case.value);
                }
                if let Some(default) = default {
                    self.visit(default);
                }
            }
        }
    }
}
