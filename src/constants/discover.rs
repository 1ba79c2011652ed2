//! Target discovery: one recursive descent over a resolved unit collects
//! every constant-requiring position, in discovery order and without
//! duplicates.

use crate::resolved::declaration::{
    Annotation, ClassDecl, ConstructorDecl, Declaration, Directive, EnumDecl, FunctionDecl, Member,
    ParameterDecl, ResolvedUnit, Statement, VariableDecl,
};

use super::error::StructuralError;
use super::target::{EvaluationTarget, TargetNode, TargetRecord, TargetRegistry};

/// Walk one resolved unit and build its target registry.
///
/// Fails only when the tree is malformed relative to the resolver's contract
/// (an unresolved annotation outside a non-evaluable context).
pub fn discover_targets(unit: &ResolvedUnit) -> Result<TargetRegistry<'_>, StructuralError> {
    let mut discoverer = Discoverer {
        registry: TargetRegistry::new(),
    };
    for directive in &unit.directives {
        discoverer.visit_directive(directive)?;
    }
    for declaration in &unit.declarations {
        discoverer.visit_declaration(declaration)?;
    }
    Ok(discoverer.registry)
}

struct Discoverer<'a> {
    registry: TargetRegistry<'a>,
}

impl<'a> Discoverer<'a> {
    fn visit_directive(&mut self, directive: &'a Directive) -> Result<(), StructuralError> {
        match directive {
            Directive::Import { annotations, .. } => {
                for annotation in annotations {
                    self.add_annotation(annotation, "import")?;
                }
                Ok(())
            }
            // Fragment markers cannot host evaluable metadata; skipped, not
            // asserted away.
            Directive::PartOf { .. } => Ok(()),
        }
    }

    fn visit_declaration(&mut self, declaration: &'a Declaration) -> Result<(), StructuralError> {
        match declaration {
            Declaration::Class(class) => self.visit_class(class),
            Declaration::Enum(enum_decl) => self.visit_enum(enum_decl),
            Declaration::Variable(variable) => self.visit_variable(variable, None, false),
            Declaration::Function(function) => self.visit_function(function, None),
        }
    }

    fn visit_class(&mut self, class: &'a ClassDecl) -> Result<(), StructuralError> {
        for annotation in &class.annotations {
            self.add_annotation(annotation, &class.name)?;
        }
        // Scoped to this body: threaded down as a parameter, never stored, so
        // sibling and nested declarations cannot observe it.
        let treat_final_as_const = has_const_constructor(&class.members);
        for member in &class.members {
            self.visit_member(member, &class.name, treat_final_as_const)?;
        }
        Ok(())
    }

    fn visit_enum(&mut self, enum_decl: &'a EnumDecl) -> Result<(), StructuralError> {
        for annotation in &enum_decl.annotations {
            self.add_annotation(annotation, &enum_decl.name)?;
        }
        // Enum constants are constant variables no matter how the resolver
        // flagged them; each initializer is the synthesized construction.
        for constant in &enum_decl.constants {
            for annotation in &constant.annotations {
                self.add_annotation(annotation, &constant.name)?;
            }
            self.add_variable(constant, Some(&enum_decl.name));
        }
        let treat_final_as_const = has_const_constructor(&enum_decl.members);
        for member in &enum_decl.members {
            self.visit_member(member, &enum_decl.name, treat_final_as_const)?;
        }
        Ok(())
    }

    fn visit_member(
        &mut self,
        member: &'a Member,
        class_name: &str,
        treat_final_as_const: bool,
    ) -> Result<(), StructuralError> {
        match member {
            Member::Field(field) => self.visit_variable(field, Some(class_name), treat_final_as_const),
            Member::Constructor(constructor) => self.visit_constructor(constructor, class_name),
            Member::Method(method) => self.visit_function(method, Some(class_name)),
        }
    }

    fn visit_variable(
        &mut self,
        variable: &'a VariableDecl,
        qualifier: Option<&str>,
        treat_final_as_const: bool,
    ) -> Result<(), StructuralError> {
        for annotation in &variable.annotations {
            self.add_annotation(annotation, &variable.name)?;
        }
        let implicit = treat_final_as_const
            && variable.is_final
            && !variable.is_static
            && variable.initializer.is_some();
        if variable.is_const || implicit {
            self.add_variable(variable, qualifier);
        }
        Ok(())
    }

    fn visit_constructor(
        &mut self,
        constructor: &'a ConstructorDecl,
        class_name: &str,
    ) -> Result<(), StructuralError> {
        for annotation in &constructor.annotations {
            self.add_annotation(annotation, class_name)?;
        }
        let display = if constructor.name.is_empty() {
            class_name.to_string()
        } else {
            format!("{}.{}", class_name, constructor.name)
        };
        if constructor.is_const {
            self.registry.add(TargetRecord {
                target: EvaluationTarget::ConstConstructor(constructor.id),
                name: display.clone(),
                span: constructor.span,
                node: TargetNode::Constructor(constructor),
            });
        }
        for parameter in &constructor.parameters {
            self.visit_parameter(parameter, &display)?;
        }
        Ok(())
    }

    fn visit_function(
        &mut self,
        function: &'a FunctionDecl,
        qualifier: Option<&str>,
    ) -> Result<(), StructuralError> {
        for annotation in &function.annotations {
            self.add_annotation(annotation, &function.name)?;
        }
        let display = match qualifier {
            Some(owner) => format!("{}.{}", owner, function.name),
            None => function.name.clone(),
        };
        for parameter in &function.parameters {
            self.visit_parameter(parameter, &display)?;
        }
        for statement in &function.body {
            self.visit_statement(statement)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self, statement: &'a Statement) -> Result<(), StructuralError> {
        match statement {
            // Locals only qualify when explicitly constant; the implicit
            // final-field rule never applies outside a class body.
            Statement::Variable(variable) => self.visit_variable(variable, None, false),
            Statement::Function(function) => self.visit_function(function, None),
            Statement::Expression(_) => Ok(()),
        }
    }

    fn visit_parameter(
        &mut self,
        parameter: &'a ParameterDecl,
        owner: &str,
    ) -> Result<(), StructuralError> {
        for annotation in &parameter.annotations {
            self.add_annotation(annotation, &parameter.name)?;
        }
        if parameter.default_value.is_some() {
            self.registry.add(TargetRecord {
                target: EvaluationTarget::DefaultParameterValue(parameter.id),
                name: format!("{}.{}", owner, parameter.name),
                span: parameter.span,
                node: TargetNode::Parameter(parameter),
            });
        }
        Ok(())
    }

    fn add_variable(&mut self, variable: &'a VariableDecl, qualifier: Option<&str>) {
        let name = match qualifier {
            Some(owner) => format!("{}.{}", owner, variable.name),
            None => variable.name.clone(),
        };
        self.registry.add(TargetRecord {
            target: EvaluationTarget::ConstVariable(variable.id),
            name,
            span: variable.span,
            node: TargetNode::Variable(variable),
        });
    }

    fn add_annotation(
        &mut self,
        annotation: &'a Annotation,
        attached_to: &str,
    ) -> Result<(), StructuralError> {
        if annotation.binding.is_none() {
            return Err(StructuralError::new(
                format!(
                    "annotation '@{}' on '{}' has no resolved binding",
                    annotation.name, attached_to
                ),
                annotation.span,
            ));
        }
        self.registry.add(TargetRecord {
            target: EvaluationTarget::Annotation(annotation.id),
            name: format!("@{}", annotation.name),
            span: annotation.span,
            node: TargetNode::Annotation(annotation),
        });
        Ok(())
    }
}

fn has_const_constructor(members: &[Member]) -> bool {
    members
        .iter()
        .any(|member| matches!(member, Member::Constructor(constructor) if constructor.is_const))
}
