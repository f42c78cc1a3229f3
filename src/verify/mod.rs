//! Verification engine
//!
//! Reconciles a compiler-generated reaction network with a hand-transcribed
//! reference ODE system. The pipeline is a handful of table-building passes:
//! match anonymous species to canonical names ([match_species]), merge the
//! species and parameter name maps into one substitution table
//! ([substitution_table]), rewrite every equation into the reference
//! vocabulary and key it by canonical name ([OdeSystem::build]), then
//! compare both directions against the reference ([OdeSystem::diff]).
//! Rate constants are checked separately by projecting them, in declaration
//! order, through the parameter name map ([project_parameters]).

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{Model, ModelError};
use crate::network::{NetworkCompiler, NetworkError, ReactionNetwork};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    #[error("Invalid species description '{description}': {source}")]
    BadDescription {
        description: String,
        source: ModelError,
    },
    #[error("Species s{index} ('{description}') has no canonical name")]
    UnmappedSpecies { index: usize, description: String },
    #[error("Canonical name '{name}' is assigned to more than one species")]
    DuplicateName { name: String },
}

/// Match generated species against a structural name map.
///
/// Returns `index -> canonical name` for every species whose normalized
/// structural description equals one of the map keys. Species without an
/// entry are simply absent from the result; they only become an error if a
/// later stage needs their name. Map keys must describe pairwise distinct
/// species; if two keys normalize to the same structure, the
/// lexicographically first key wins.
pub fn match_species(
    network: &ReactionNetwork,
    species_names: &HashMap<String, String>,
) -> Result<BTreeMap<usize, String>, VerifyError> {
    let mut keys: Vec<(&String, &String)> = species_names.iter().collect();
    keys.sort();

    let mut by_structure = HashMap::with_capacity(keys.len());
    for (description, name) in keys {
        let pattern =
            network
                .pattern(description)
                .map_err(|source| VerifyError::BadDescription {
                    description: description.clone(),
                    source,
                })?;
        by_structure.entry(pattern).or_insert(name);
    }

    let mut index_map = BTreeMap::new();
    for (index, species) in network.species().iter().enumerate() {
        if let Some(name) = by_structure.get(species) {
            debug!(index, name = name.as_str(), "matched species");
            index_map.insert(index, (*name).clone());
        }
    }
    Ok(index_map)
}

/// Merge the parameter name map with an index map from [match_species] into
/// a single whole-symbol substitution table: `s<i>` for each matched index,
/// plus every parameter rename.
pub fn substitution_table(
    index_map: &BTreeMap<usize, String>,
    parameter_names: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut table: HashMap<String, String> = parameter_names.clone();
    for (index, name) in index_map {
        table.insert(format!("s{}", index), name.clone());
    }
    table
}

/// A reaction network's dynamics keyed by canonical species name
///
/// This is the generated side of a comparison: every equation rewritten
/// into the reference vocabulary and rendered in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdeSystem {
    model: String,
    equations: BTreeMap<String, String>,
}

impl OdeSystem {
    /// Rewrite a network's equations into the reference vocabulary.
    ///
    /// Every species must have a canonical name: an unmatched species
    /// signals an incomplete or stale name map and aborts the build rather
    /// than silently dropping the equation.
    pub fn build(
        network: &ReactionNetwork,
        species_names: &HashMap<String, String>,
        parameter_names: &HashMap<String, String>,
    ) -> Result<OdeSystem, VerifyError> {
        let index_map = match_species(network, species_names)?;
        let table = substitution_table(&index_map, parameter_names);

        let mut equations = BTreeMap::new();
        for (index, ode) in network.odes().iter().enumerate() {
            let name = index_map
                .get(&index)
                .ok_or_else(|| VerifyError::UnmappedSpecies {
                    index,
                    description: network.species()[index].to_string(),
                })?;
            let rewritten = ode.rename(&table).to_string();
            if equations.insert(name.clone(), rewritten).is_some() {
                return Err(VerifyError::DuplicateName { name: name.clone() });
            }
        }
        debug!(
            model = network.model(),
            equations = equations.len(),
            "built canonical equation system"
        );
        Ok(OdeSystem {
            model: network.model().to_string(),
            equations,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn equations(&self) -> &BTreeMap<String, String> {
        &self.equations
    }

    pub fn equation(&self, species: &str) -> Option<&str> {
        self.equations.get(species).map(String::as_str)
    }

    /// Two-directional comparison against a reference equation system.
    ///
    /// Every generated species must appear in the reference with a
    /// character-identical equation, and vice versa; the returned report
    /// names each offending species together with both renderings.
    pub fn diff(&self, reference: &HashMap<String, String>) -> Discrepancies {
        let mut discrepancies = Discrepancies::default();
        for (species, generated) in &self.equations {
            match reference.get(species) {
                None => discrepancies.unexpected.push(species.clone()),
                Some(expected) if expected != generated => {
                    discrepancies.different.push(Mismatch {
                        species: species.clone(),
                        generated: generated.clone(),
                        reference: expected.clone(),
                    })
                }
                Some(_) => {}
            }
        }
        let mut missing: Vec<&String> = reference
            .keys()
            .filter(|species| !self.equations.contains_key(*species))
            .collect();
        missing.sort();
        discrepancies.missing = missing.into_iter().cloned().collect();
        discrepancies
    }

    /// True when [diff](Self::diff) finds nothing.
    pub fn matches(&self, reference: &HashMap<String, String>) -> bool {
        self.diff(reference).is_empty()
    }
}

/// One species whose generated and reference equations disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub species: String,
    pub generated: String,
    pub reference: String,
}

/// Report of a two-directional equation comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discrepancies {
    missing: Vec<String>,
    unexpected: Vec<String>,
    different: Vec<Mismatch>,
}

impl Discrepancies {
    /// Species present in the reference but absent from the generated
    /// system.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Species present in the generated system but absent from the
    /// reference.
    pub fn unexpected(&self) -> &[String] {
        &self.unexpected
    }

    pub fn different(&self) -> &[Mismatch] {
        &self.different
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.different.is_empty()
    }
}

impl fmt::Display for Discrepancies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "all equations match the reference");
        }
        if !self.missing.is_empty() {
            writeln!(f, "missing from generated system: {}", self.missing.join(", "))?;
        }
        if !self.unexpected.is_empty() {
            writeln!(f, "not in reference: {}", self.unexpected.join(", "))?;
        }
        for mismatch in &self.different {
            writeln!(f, "{}:", mismatch.species)?;
            writeln!(f, "  generated: {}", mismatch.generated)?;
            writeln!(f, "  reference: {}", mismatch.reference)?;
        }
        Ok(())
    }
}

/// Project rate constants through the parameter name map.
///
/// Produces `(canonical name, value)` pairs restricted to mapped
/// parameters, preserving the model's declaration order. Literature tables
/// list constants in a fixed order, so the comparison at the call site is
/// an ordered-sequence equality with exact numeric values.
pub fn project_parameters(
    model: &Model,
    parameter_names: &HashMap<String, String>,
) -> Vec<(String, f64)> {
    model
        .parameters()
        .iter()
        .filter_map(|p| {
            parameter_names
                .get(p.name())
                .map(|canonical| (canonical.clone(), p.value()))
        })
        .collect()
}

/// Everything needed to verify one model against its literature source.
#[derive(Debug, Clone)]
pub struct ValidationCase {
    pub model: Model,
    pub species_names: HashMap<String, String>,
    pub parameter_names: HashMap<String, String>,
    pub reference_odes: HashMap<String, String>,
    pub reference_parameters: Option<Vec<(String, f64)>>,
}

/// Outcome of validating one model.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    model: String,
    passed: bool,
    report: String,
}

impl ValidationOutcome {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn report(&self) -> &str {
        &self.report
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{} {}", status, self.model)?;
        if !self.passed {
            write!(f, "\n{}", self.report)?;
        }
        Ok(())
    }
}

/// Validate one model: expand it, rewrite the equations, and compare both
/// the equation system and (when given) the projected parameter table.
pub fn validate_model<C: NetworkCompiler>(compiler: &C, case: &ValidationCase) -> ValidationOutcome {
    let name = case.model.name().to_string();
    match run_case(compiler, case) {
        Ok(report) if report.is_empty() => {
            info!(model = name.as_str(), "validation passed");
            ValidationOutcome {
                model: name,
                passed: true,
                report,
            }
        }
        Ok(report) => {
            warn!(model = name.as_str(), "validation failed");
            ValidationOutcome {
                model: name,
                passed: false,
                report,
            }
        }
        Err(error) => {
            warn!(model = name.as_str(), %error, "validation aborted");
            ValidationOutcome {
                model: name,
                passed: false,
                report: error,
            }
        }
    }
}

fn run_case<C: NetworkCompiler>(compiler: &C, case: &ValidationCase) -> Result<String, String> {
    let network = compiler
        .compile(&case.model)
        .map_err(|e: NetworkError| e.to_string())?;
    let system = OdeSystem::build(&network, &case.species_names, &case.parameter_names)
        .map_err(|e| e.to_string())?;

    let mut report = String::new();
    let discrepancies = system.diff(&case.reference_odes);
    if !discrepancies.is_empty() {
        report.push_str(&discrepancies.to_string());
    }
    if let Some(expected) = &case.reference_parameters {
        let projected = project_parameters(&case.model, &case.parameter_names);
        if projected != *expected {
            report.push_str(&format!(
                "parameter table mismatch:\n  projected: {:?}\n  reference: {:?}\n",
                projected, expected
            ));
        }
    }
    Ok(report)
}

/// Validate a batch of models. Each case is independent, so the batch runs
/// in parallel across models.
pub fn validate_all<C>(compiler: &C, cases: &[ValidationCase]) -> Vec<ValidationOutcome>
where
    C: NetworkCompiler + Sync,
{
    cases
        .par_iter()
        .map(|case| validate_model(compiler, case))
        .collect()
}
