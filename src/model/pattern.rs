//! Structural species descriptions
//!
//! A species is written the way the network compiler prints it:
//! `Bid(bf=None, state=T)` for a lone subunit, with ` % ` joining the
//! subunits of a complex and matching integer labels marking the two ends
//! of each bond, as in `Bcl2(bf=1) % Bid(bf=1, state=T)`. Parsing validates
//! the text against the declared monomers and produces a normalized value:
//! sites are reordered to declaration order and bond labels are renumbered
//! in order of first appearance, so two descriptions that differ only in
//! their choice of bond labels compare equal.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::monomer::Monomer;
use super::ModelError;

/// Occupancy of a single site within a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteValue {
    /// A free binding site, rendered as `None`
    Unbound,
    /// One end of a bond, rendered as the bond label
    Bond(u32),
    /// An internal state, rendered bare
    State(String),
}

impl fmt::Display for SiteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteValue::Unbound => write!(f, "None"),
            SiteValue::Bond(label) => write!(f, "{}", label),
            SiteValue::State(state) => write!(f, "{}", state),
        }
    }
}

/// One subunit of a species, with every declared site specified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonomerPattern {
    monomer: String,
    sites: Vec<(String, SiteValue)>,
}

impl MonomerPattern {
    pub fn monomer(&self) -> &str {
        &self.monomer
    }

    pub fn sites(&self) -> &[(String, SiteValue)] {
        &self.sites
    }

    pub fn site_value(&self, site: &str) -> Option<&SiteValue> {
        self.sites
            .iter()
            .find(|(name, _)| name == site)
            .map(|(_, value)| value)
    }
}

impl fmt::Display for MonomerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.monomer)?;
        for (i, (site, value)) in self.sites.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", site, value)?;
        }
        write!(f, ")")
    }
}

/// A full structural species description: one or more bonded subunits
///
/// Equality and hashing are structural over the normalized form, which makes
/// the rendered string a faithful identity: two patterns are equal exactly
/// when their canonical strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexPattern {
    monomers: Vec<MonomerPattern>,
}

impl ComplexPattern {
    /// Parse a structural description against a monomer catalog.
    ///
    /// Every site of every referenced monomer must be specified, states must
    /// come from the declared alphabet, and each bond label must appear on
    /// exactly two sites.
    pub fn parse(input: &str, monomers: &[Monomer]) -> Result<ComplexPattern, ModelError> {
        let mut parts = Vec::new();
        for chunk in input.split('%') {
            parts.push(parse_monomer_pattern(chunk.trim(), monomers)?);
        }
        let mut pattern = ComplexPattern { monomers: parts };
        pattern.check_bonds()?;
        pattern.normalize_bonds();
        Ok(pattern)
    }

    pub fn monomers(&self) -> &[MonomerPattern] {
        &self.monomers
    }

    /// The canonical rendered form, identical to what [Display](fmt::Display)
    /// produces.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    fn check_bonds(&self) -> Result<(), ModelError> {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for mp in &self.monomers {
            for (_, value) in &mp.sites {
                if let SiteValue::Bond(label) = value {
                    *counts.entry(*label).or_insert(0) += 1;
                }
            }
        }
        for (label, count) in counts {
            if count != 2 {
                return Err(ModelError::InvalidBond { label, count });
            }
        }
        Ok(())
    }

    /// Renumber bond labels 1, 2, ... in order of first appearance, walking
    /// monomers left to right and sites in declaration order.
    fn normalize_bonds(&mut self) {
        let mut relabel: HashMap<u32, u32> = HashMap::new();
        let mut next = 1;
        for mp in &mut self.monomers {
            for (_, value) in &mut mp.sites {
                if let SiteValue::Bond(label) = value {
                    let new = *relabel.entry(*label).or_insert_with(|| {
                        let assigned = next;
                        next += 1;
                        assigned
                    });
                    *label = new;
                }
            }
        }
    }
}

impl fmt::Display for ComplexPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mp) in self.monomers.iter().enumerate() {
            if i > 0 {
                write!(f, " % ")?;
            }
            write!(f, "{}", mp)?;
        }
        Ok(())
    }
}

impl From<MonomerPattern> for ComplexPattern {
    fn from(mp: MonomerPattern) -> Self {
        ComplexPattern { monomers: vec![mp] }
    }
}

fn parse_monomer_pattern(text: &str, monomers: &[Monomer]) -> Result<MonomerPattern, ModelError> {
    let malformed = || ModelError::MalformedPattern(text.to_string());
    let open = text.find('(').ok_or_else(malformed)?;
    if !text.ends_with(')') {
        return Err(malformed());
    }
    let name = text[..open].trim();
    if name.is_empty() || !is_identifier(name) {
        return Err(malformed());
    }
    let monomer = monomers
        .iter()
        .find(|m| m.name() == name)
        .ok_or_else(|| ModelError::UnknownMonomer(name.to_string()))?;

    let body = &text[open + 1..text.len() - 1];
    let mut given: Vec<(String, SiteValue)> = Vec::new();
    if !body.trim().is_empty() {
        for item in body.split(',') {
            let (site, value) = item.split_once('=').ok_or_else(malformed)?;
            let site = site.trim();
            let value = value.trim();
            if !is_identifier(site) || value.is_empty() {
                return Err(malformed());
            }
            if given.iter().any(|(s, _)| s == site) {
                return Err(ModelError::DuplicateSite {
                    monomer: name.to_string(),
                    site: site.to_string(),
                });
            }
            given.push((site.to_string(), parse_site_value(value, text)?));
        }
    }

    // Validate against the declaration and put sites into declared order
    let mut ordered = Vec::with_capacity(monomer.sites().len());
    for site in monomer.sites() {
        let value = given
            .iter()
            .find(|(s, _)| s == site.name())
            .map(|(_, v)| v.clone())
            .ok_or_else(|| ModelError::MissingSite {
                monomer: name.to_string(),
                site: site.name().to_string(),
            })?;
        if site.is_state_site() {
            match &value {
                SiteValue::State(state) => {
                    if !site.states().iter().any(|s| s == state) {
                        return Err(ModelError::UnknownState {
                            monomer: name.to_string(),
                            site: site.name().to_string(),
                            state: state.clone(),
                        });
                    }
                }
                _ => {
                    return Err(ModelError::StateRequired {
                        monomer: name.to_string(),
                        site: site.name().to_string(),
                    })
                }
            }
        } else if let SiteValue::State(state) = &value {
            return Err(ModelError::UnknownState {
                monomer: name.to_string(),
                site: site.name().to_string(),
                state: state.clone(),
            });
        }
        ordered.push((site.name().to_string(), value));
    }
    for (site, _) in &given {
        if monomer.site(site).is_none() {
            return Err(ModelError::UnknownSite {
                monomer: name.to_string(),
                site: site.clone(),
            });
        }
    }

    Ok(MonomerPattern {
        monomer: name.to_string(),
        sites: ordered,
    })
}

fn parse_site_value(text: &str, context: &str) -> Result<SiteValue, ModelError> {
    if text == "None" {
        Ok(SiteValue::Unbound)
    } else if text.chars().all(|c| c.is_ascii_digit()) {
        text.parse::<u32>()
            .map(SiteValue::Bond)
            .map_err(|_| ModelError::MalformedPattern(context.to_string()))
    } else if is_identifier(text) {
        Ok(SiteValue::State(text.to_string()))
    } else {
        Err(ModelError::MalformedPattern(context.to_string()))
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
