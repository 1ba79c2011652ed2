use std::fmt;

/// Static type the resolver attached to an expression or declaration.
///
/// The analyzer never interprets types; it carries them so the evaluator sees
/// the same facts the resolver computed (the element type of a list literal,
/// the class a construction produces).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticType {
    pub name: String,
    pub arguments: Vec<StaticType>,
}

impl StaticType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<StaticType>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl fmt::Display for StaticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (index, argument) in self.arguments.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", argument)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
