//! Expanded reaction networks
//!
//! A [ReactionNetwork] is the output of rule expansion: an ordered species
//! list, one symbolic rate equation per species written over anonymous
//! species symbols (`s0`, `s1`, ...) and rate parameter names, plus the
//! parameters and initials carried over from the model. Expansion itself is
//! delegated to a [NetworkCompiler]; the bundled implementation in
//! [crate::catalog] replays pre-expanded tables for the shipped models.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{ComplexPattern, Initial, Model, ModelError, Monomer, Parameter};
use crate::symbolic::{Expr, ExprError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("No expansion is available for model '{0}'")]
    UnknownModel(String),
    #[error(
        "Expansion of '{model}' lists {species} species but {equations} equations"
    )]
    MisalignedExpansion {
        model: String,
        species: usize,
        equations: usize,
    },
    #[error("Equation for s{index} of '{model}' failed to parse: {source}")]
    MalformedEquation {
        model: String,
        index: usize,
        source: ExprError,
    },
    #[error("Equation for s{index} of '{model}' references undeclared rate '{symbol}'")]
    UnknownRateSymbol {
        model: String,
        index: usize,
        symbol: String,
    },
    #[error("Equation for s{index} of '{model}' references species '{symbol}' outside the expansion")]
    SpeciesOutOfRange {
        model: String,
        index: usize,
        symbol: String,
    },
    #[error("Initial condition species '{pattern}' is not part of the expansion of '{model}'")]
    InitialNotInNetwork { model: String, pattern: String },
    #[error("Invalid species pattern in expansion: {0}")]
    Species(#[from] ModelError),
}

/// Produces the expanded network for a model.
pub trait NetworkCompiler {
    fn compile(&self, model: &Model) -> Result<ReactionNetwork, NetworkError>;
}

/// An expanded reaction network with index-aligned species and equations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionNetwork {
    model: String,
    monomers: Vec<Monomer>,
    species: Vec<ComplexPattern>,
    odes: Vec<Expr>,
    parameters: Vec<Parameter>,
    initials: Vec<Initial>,
}

impl ReactionNetwork {
    /// Assemble a network from expansion tables: structural species
    /// descriptions and equation strings, both in index order.
    ///
    /// Every pattern is parsed against the model's monomers and every
    /// equation symbol is resolved: `s<i>` must reference a listed species
    /// and anything else must be a declared parameter. Parameters and
    /// initial conditions are taken from the model as it stands, so value
    /// overrides applied to the model are reflected here.
    pub fn from_expansion(
        model: &Model,
        species: &[&str],
        odes: &[&str],
    ) -> Result<ReactionNetwork, NetworkError> {
        if species.len() != odes.len() {
            return Err(NetworkError::MisalignedExpansion {
                model: model.name().to_string(),
                species: species.len(),
                equations: odes.len(),
            });
        }

        let patterns: Vec<ComplexPattern> = species
            .iter()
            .map(|text| model.pattern(text))
            .collect::<Result<_, _>>()?;

        let mut equations = Vec::with_capacity(odes.len());
        for (index, text) in odes.iter().enumerate() {
            let expr = Expr::parse(text).map_err(|source| NetworkError::MalformedEquation {
                model: model.name().to_string(),
                index,
                source,
            })?;
            for symbol in expr.symbols() {
                match species_index(symbol) {
                    Some(i) if i < species.len() => {}
                    Some(_) => {
                        return Err(NetworkError::SpeciesOutOfRange {
                            model: model.name().to_string(),
                            index,
                            symbol: symbol.to_string(),
                        })
                    }
                    None => {
                        if model.parameter(symbol).is_none() {
                            return Err(NetworkError::UnknownRateSymbol {
                                model: model.name().to_string(),
                                index,
                                symbol: symbol.to_string(),
                            });
                        }
                    }
                }
            }
            equations.push(expr);
        }

        for initial in model.initials() {
            if !patterns.contains(initial.pattern()) {
                return Err(NetworkError::InitialNotInNetwork {
                    model: model.name().to_string(),
                    pattern: initial.pattern().to_string(),
                });
            }
        }

        debug!(
            model = model.name(),
            species = patterns.len(),
            "assembled reaction network"
        );
        Ok(ReactionNetwork {
            model: model.name().to_string(),
            monomers: model.monomers().to_vec(),
            species: patterns,
            odes: equations,
            parameters: model.parameters().to_vec(),
            initials: model.initials().to_vec(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }

    /// Species in compiler index order; index `i` corresponds to symbol
    /// `s<i>` in the equations.
    pub fn species(&self) -> &[ComplexPattern] {
        &self.species
    }

    /// Right-hand sides, index-aligned with [species](Self::species).
    pub fn odes(&self) -> &[Expr] {
        &self.odes
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    pub fn initials(&self) -> &[Initial] {
        &self.initials
    }

    pub fn species_index(&self, pattern: &ComplexPattern) -> Option<usize> {
        self.species.iter().position(|s| s == pattern)
    }

    /// Parse a structural description against this network's monomers.
    pub fn pattern(&self, text: &str) -> Result<ComplexPattern, ModelError> {
        ComplexPattern::parse(text, &self.monomers)
    }
}

/// Recognize an anonymous species symbol: `s` followed by only digits.
pub(crate) fn species_index(symbol: &str) -> Option<usize> {
    let digits = symbol.strip_prefix('s')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
