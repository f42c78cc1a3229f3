//! Rule-based model definitions
//!
//! A [Model] is a declarative assembly: monomer types, named rate
//! parameters in declaration order, reaction rules over structural
//! patterns, and initial abundances. Models are built with
//! [ModelBuilder](builder::ModelBuilder) and handed to a network compiler
//! for expansion into species and equations.

pub mod builder;
pub mod monomer;
pub mod pattern;
pub mod rule;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use builder::ModelBuilder;
pub use monomer::{Monomer, Site};
pub use pattern::{ComplexPattern, MonomerPattern, SiteValue};
pub use rule::Rule;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown monomer '{0}'")]
    UnknownMonomer(String),
    #[error("Unknown site '{site}' on monomer '{monomer}'")]
    UnknownSite { monomer: String, site: String },
    #[error("Site '{site}' on monomer '{monomer}' was given more than once")]
    DuplicateSite { monomer: String, site: String },
    #[error("Site '{site}' on monomer '{monomer}' is not specified")]
    MissingSite { monomer: String, site: String },
    #[error("'{state}' is not a declared state of site '{site}' on monomer '{monomer}'")]
    UnknownState {
        monomer: String,
        site: String,
        state: String,
    },
    #[error("Site '{site}' on monomer '{monomer}' requires one of its declared states")]
    StateRequired { monomer: String, site: String },
    #[error("Bond {label} must connect exactly two sites, found {count}")]
    InvalidBond { label: u32, count: usize },
    #[error("Malformed pattern '{0}'")]
    MalformedPattern(String),
    #[error("Duplicate monomer '{0}'")]
    DuplicateMonomer(String),
    #[error("Duplicate parameter '{0}'")]
    DuplicateParameter(String),
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("Duplicate rule '{0}'")]
    DuplicateRule(String),
    #[error("Rule '{rule}' references undeclared parameter '{parameter}'")]
    UnknownRateParameter { rule: String, parameter: String },
}

/// A named rate constant or abundance with its numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    value: f64,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Parameter {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// An initial condition: a species pattern seeded with the value of a named
/// parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initial {
    pattern: ComplexPattern,
    parameter: String,
}

impl Initial {
    pub fn pattern(&self) -> &ComplexPattern {
        &self.pattern
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub(crate) fn new(pattern: ComplexPattern, parameter: String) -> Self {
        Initial { pattern, parameter }
    }
}

/// A complete rule-based model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    name: String,
    monomers: Vec<Monomer>,
    parameters: Vec<Parameter>,
    rules: Vec<Rule>,
    initials: Vec<Initial>,
}

impl Model {
    pub(crate) fn new(
        name: String,
        monomers: Vec<Monomer>,
        parameters: Vec<Parameter>,
        rules: Vec<Rule>,
        initials: Vec<Initial>,
    ) -> Self {
        Model {
            name,
            monomers,
            parameters,
            rules,
            initials,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }

    /// Parameters in declaration order. The order is meaningful: projected
    /// parameter tables preserve it.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn initials(&self) -> &[Initial] {
        &self.initials
    }

    pub fn monomer(&self, name: &str) -> Option<&Monomer> {
        self.monomers.iter().find(|m| m.name() == name)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Override the value of an existing parameter, keeping its position in
    /// the declaration order.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(parameter) => {
                parameter.value = value;
                Ok(())
            }
            None => Err(ModelError::UnknownParameter(name.to_string())),
        }
    }

    /// Parse a structural description against this model's monomers.
    pub fn pattern(&self, text: &str) -> Result<ComplexPattern, ModelError> {
        ComplexPattern::parse(text, &self.monomers)
    }
}
