use std::fmt;

use serde::{Deserialize, Serialize};

use super::pattern::ComplexPattern;

/// A reaction rule: reactant patterns, product patterns, and the names of
/// the rate parameters governing it
///
/// Rules here are declarative records of the mechanism; expansion into
/// concrete reactions is the network compiler's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    name: String,
    reactants: Vec<ComplexPattern>,
    products: Vec<ComplexPattern>,
    forward: String,
    reverse: Option<String>,
}

impl Rule {
    pub(crate) fn new(
        name: String,
        reactants: Vec<ComplexPattern>,
        products: Vec<ComplexPattern>,
        forward: String,
        reverse: Option<String>,
    ) -> Self {
        Rule {
            name,
            reactants,
            products,
            forward,
            reverse,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reactants(&self) -> &[ComplexPattern] {
        &self.reactants
    }

    pub fn products(&self) -> &[ComplexPattern] {
        &self.products
    }

    /// Name of the forward rate parameter.
    pub fn forward(&self) -> &str {
        &self.forward
    }

    /// Name of the reverse rate parameter, for reversible rules.
    pub fn reverse(&self) -> Option<&str> {
        self.reverse.as_deref()
    }

    pub fn is_reversible(&self) -> bool {
        self.reverse.is_some()
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, side: &[ComplexPattern]) -> fmt::Result {
    if side.is_empty() {
        return write!(f, "None");
    }
    for (i, pattern) in side.iter().enumerate() {
        if i > 0 {
            write!(f, " + ")?;
        }
        write!(f, "{}", pattern)?;
    }
    Ok(())
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        write_side(f, &self.reactants)?;
        if self.is_reversible() {
            write!(f, " <> ")?;
        } else {
            write!(f, " >> ")?;
        }
        write_side(f, &self.products)?;
        match &self.reverse {
            Some(reverse) => write!(f, " ({}, {})", self.forward, reverse),
            None => write!(f, " ({})", self.forward),
        }
    }
}
