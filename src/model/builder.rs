//! Incremental model construction
//!
//! Model variants are assembled by chaining declarative steps; later
//! variants call the same building functions as their predecessors and then
//! override individual rate constants. The rule templates mirror the common
//! mechanisms of the Bcl-2 family literature (binding, one-step catalysis,
//! displacement, pore assembly, equilibration, synthesis, degradation) and
//! derive rule and parameter names from short condition codes such as
//! `BidT` or `BaxA`, so that `bind("BidT", ..., "Bcl2", ...)` yields the
//! parameters `bind_BidT_Bcl2_kf` and `bind_BidT_Bcl2_kr`.

use super::monomer::Monomer;
use super::pattern::ComplexPattern;
use super::rule::Rule;
use super::{Initial, Model, ModelError, Parameter};

#[derive(Debug, Clone)]
struct PendingRule {
    name: String,
    reactants: Vec<String>,
    products: Vec<String>,
    forward: String,
    reverse: Option<String>,
}

/// Builder for [Model]
///
/// All steps are recorded in call order and validated together by
/// [build](ModelBuilder::build): pattern strings are parsed against the
/// declared monomers, rule rate names are resolved against the declared
/// parameters, and duplicates are rejected.
///
/// # Examples
/// ```
/// use mompsol::model::{ModelBuilder, Monomer};
///
/// let model = ModelBuilder::new("toy")
///     .monomer(Monomer::new("Bid")
///         .binding_site("bf")
///         .state_site("state", &["U", "T"]))
///     .monomer(Monomer::new("Bcl2").binding_site("bf"))
///     .bind(
///         "BidT", "Bid(bf=None, state=T)",
///         "Bcl2", "Bcl2(bf=None)",
///         "Bcl2(bf=1) % Bid(bf=1, state=T)",
///         1e-4, 1e-3,
///     )
///     .build()
///     .unwrap();
/// assert_eq!(model.rules().len(), 1);
/// assert_eq!(model.parameters()[0].name(), "bind_BidT_Bcl2_kf");
/// ```
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    name: String,
    monomers: Vec<Monomer>,
    parameters: Vec<Parameter>,
    rules: Vec<PendingRule>,
    initials: Vec<(String, String)>,
    overrides: Vec<(String, f64)>,
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        ModelBuilder {
            name: name.into(),
            monomers: Vec::new(),
            parameters: Vec::new(),
            rules: Vec::new(),
            initials: Vec::new(),
            overrides: Vec::new(),
        }
    }

    pub fn monomer(mut self, monomer: Monomer) -> Self {
        self.monomers.push(monomer);
        self
    }

    /// Declare a parameter. Declaration order is preserved in the built
    /// model.
    pub fn parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters.push(Parameter::new(name, value));
        self
    }

    /// Replace the value of a parameter declared earlier in the chain,
    /// keeping its declaration position.
    pub fn override_parameter(mut self, name: &str, value: f64) -> Self {
        self.overrides.push((name.to_string(), value));
        self
    }

    /// Seed a species with the value of a named parameter.
    pub fn initial(mut self, pattern: &str, parameter: &str) -> Self {
        self.initials
            .push((pattern.to_string(), parameter.to_string()));
        self
    }

    /// Add a one-way rule referencing an already-declared rate parameter.
    pub fn rule(
        mut self,
        name: &str,
        reactants: &[&str],
        products: &[&str],
        forward: &str,
    ) -> Self {
        self.rules.push(PendingRule {
            name: name.to_string(),
            reactants: reactants.iter().map(|s| s.to_string()).collect(),
            products: products.iter().map(|s| s.to_string()).collect(),
            forward: forward.to_string(),
            reverse: None,
        });
        self
    }

    fn template_rule(
        &mut self,
        name: String,
        reactants: Vec<String>,
        products: Vec<String>,
        forward: (String, f64),
        reverse: Option<(String, f64)>,
    ) {
        self.parameters.push(Parameter::new(&forward.0, forward.1));
        let reverse_name = reverse.map(|(rname, rvalue)| {
            self.parameters.push(Parameter::new(&rname, rvalue));
            rname
        });
        self.rules.push(PendingRule {
            name,
            reactants,
            products,
            forward: forward.0,
            reverse: reverse_name,
        });
    }

    /// Reversible binding of two species into a complex.
    ///
    /// Declares `bind_{A}_{B}_kf` and `bind_{A}_{B}_kr`.
    #[allow(clippy::too_many_arguments)]
    pub fn bind(
        mut self,
        a_code: &str,
        a: &str,
        b_code: &str,
        b: &str,
        complex: &str,
        kf: f64,
        kr: f64,
    ) -> Self {
        let name = format!("bind_{}_{}", a_code, b_code);
        self.template_rule(
            name.clone(),
            vec![a.to_string(), b.to_string()],
            vec![complex.to_string()],
            (format!("{}_kf", name), kf),
            Some((format!("{}_kr", name), kr)),
        );
        self
    }

    /// One-step catalytic conversion with a separate spontaneous reverse
    /// reaction.
    ///
    /// Declares `one_step_{Cat}_{Sub}_to_{Cat}_{Prod}_kf` for the catalyzed
    /// step and `reverse_{Prod}_to_{Sub}_k` for the reversion.
    #[allow(clippy::too_many_arguments)]
    pub fn catalyze_one_step(
        mut self,
        cat_code: &str,
        cat: &str,
        sub_code: &str,
        sub: &str,
        prod_code: &str,
        prod: &str,
        kf: f64,
        kr: f64,
    ) -> Self {
        let forward = format!("one_step_{}_{}_to_{}_{}", cat_code, sub_code, cat_code, prod_code);
        self.template_rule(
            forward.clone(),
            vec![cat.to_string(), sub.to_string()],
            vec![cat.to_string(), prod.to_string()],
            (format!("{}_kf", forward), kf),
            None,
        );
        let reverse = format!("reverse_{}_to_{}", prod_code, sub_code);
        self.template_rule(
            reverse.clone(),
            vec![prod.to_string()],
            vec![sub.to_string()],
            (format!("{}_k", reverse), kr),
            None,
        );
        self
    }

    /// One-way displacement of a bound partner: `X + Y:Z >> X:Z + Y`.
    ///
    /// Declares `displace_{X}_{YZ}_to_{XZ}_{Y}_k`.
    #[allow(clippy::too_many_arguments)]
    pub fn displace(
        mut self,
        x_code: &str,
        x: &str,
        target_code: &str,
        target: &str,
        result_code: &str,
        result: &str,
        released_code: &str,
        released: &str,
        k: f64,
    ) -> Self {
        let name = format!(
            "displace_{}_{}_to_{}_{}",
            x_code, target_code, result_code, released_code
        );
        self.template_rule(
            name.clone(),
            vec![x.to_string(), target.to_string()],
            vec![result.to_string(), released.to_string()],
            (format!("{}_k", name), k),
            None,
        );
        self
    }

    /// Reversible displacement; declares `_kf` and `_kr` parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn displace_reversibly(
        mut self,
        x_code: &str,
        x: &str,
        target_code: &str,
        target: &str,
        result_code: &str,
        result: &str,
        released_code: &str,
        released: &str,
        kf: f64,
        kr: f64,
    ) -> Self {
        let name = format!(
            "displace_{}_{}_to_{}_{}",
            x_code, target_code, result_code, released_code
        );
        self.template_rule(
            name.clone(),
            vec![x.to_string(), target.to_string()],
            vec![result.to_string(), released.to_string()],
            (format!("{}_kf", name), kf),
            Some((format!("{}_kr", name), kr)),
        );
        self
    }

    /// Cooperative self-assembly of `size` subunits into a pore.
    ///
    /// Declares `spontaneous_pore_{Sub}_to_{Pore}_kf` and `_kr`.
    #[allow(clippy::too_many_arguments)]
    pub fn spontaneous_pore(
        mut self,
        sub_code: &str,
        sub: &str,
        pore_code: &str,
        pore: &str,
        size: usize,
        kf: f64,
        kr: f64,
    ) -> Self {
        let name = format!("spontaneous_pore_{}_to_{}", sub_code, pore_code);
        self.template_rule(
            name.clone(),
            vec![sub.to_string(); size],
            vec![pore.to_string()],
            (format!("{}_kf", name), kf),
            Some((format!("{}_kr", name), kr)),
        );
        self
    }

    /// Reversible dimerization; declares `dimerize_{X}_kf` and `_kr`.
    pub fn dimerize(
        mut self,
        code: &str,
        sub: &str,
        dimer: &str,
        kf: f64,
        kr: f64,
    ) -> Self {
        let name = format!("dimerize_{}", code);
        self.template_rule(
            name.clone(),
            vec![sub.to_string(); 2],
            vec![dimer.to_string()],
            (format!("{}_kf", name), kf),
            Some((format!("{}_kr", name), kr)),
        );
        self
    }

    /// Reversible exchange between two forms, e.g. cytosolic and
    /// mitochondrial. Declares `equilibrate_{A}_to_{B}_kf` and `_kr`.
    pub fn equilibrate(
        mut self,
        a_code: &str,
        a: &str,
        b_code: &str,
        b: &str,
        kf: f64,
        kr: f64,
    ) -> Self {
        let name = format!("equilibrate_{}_to_{}", a_code, b_code);
        self.template_rule(
            name.clone(),
            vec![a.to_string()],
            vec![b.to_string()],
            (format!("{}_kf", name), kf),
            Some((format!("{}_kr", name), kr)),
        );
        self
    }

    /// Constant-rate synthesis of a species, modeled as catalysis by the
    /// unit-abundance `__source` pseudo-species. Declares `synthesize_{X}_k`,
    /// and on first use sets up `__source` with its `__source_0` seed.
    pub fn synthesize(mut self, code: &str, product: &str, k: f64) -> Self {
        let name = format!("synthesize_{}", code);
        self.template_rule(
            name.clone(),
            vec!["__source()".to_string()],
            vec!["__source()".to_string(), product.to_string()],
            (format!("{}_k", name), k),
            None,
        );
        if !self.monomers.iter().any(|m| m.name() == "__source") {
            self.monomers.push(Monomer::new("__source"));
            self.parameters.push(Parameter::new("__source_0", 1.0));
            self.initials
                .push(("__source()".to_string(), "__source_0".to_string()));
        }
        self
    }

    /// First-order degradation of a species, routing its mass into the
    /// `__sink` accumulator. Declares `degrade_{X}_k`.
    pub fn degrade(mut self, code: &str, target: &str, k: f64) -> Self {
        let name = format!("degrade_{}", code);
        self.template_rule(
            name.clone(),
            vec![target.to_string()],
            vec!["__sink()".to_string()],
            (format!("{}_k", name), k),
            None,
        );
        if !self.monomers.iter().any(|m| m.name() == "__sink") {
            self.monomers.push(Monomer::new("__sink"));
        }
        self
    }

    /// Validate the recorded steps and assemble the model.
    pub fn build(mut self) -> Result<Model, ModelError> {
        for (i, monomer) in self.monomers.iter().enumerate() {
            if self.monomers[..i].iter().any(|m| m.name() == monomer.name()) {
                return Err(ModelError::DuplicateMonomer(monomer.name().to_string()));
            }
        }
        for (i, parameter) in self.parameters.iter().enumerate() {
            if self.parameters[..i]
                .iter()
                .any(|p| p.name() == parameter.name())
            {
                return Err(ModelError::DuplicateParameter(parameter.name().to_string()));
            }
        }
        for (name, value) in std::mem::take(&mut self.overrides) {
            match self.parameters.iter_mut().find(|p| p.name() == name) {
                Some(parameter) => *parameter = Parameter::new(name, value),
                None => return Err(ModelError::UnknownParameter(name)),
            }
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for pending in &self.rules {
            if rules.iter().any(|r: &Rule| r.name() == pending.name) {
                return Err(ModelError::DuplicateRule(pending.name.clone()));
            }
            let mut rate_names = vec![&pending.forward];
            rate_names.extend(pending.reverse.as_ref());
            for rate in rate_names {
                if !self.parameters.iter().any(|p| p.name() == *rate) {
                    return Err(ModelError::UnknownRateParameter {
                        rule: pending.name.clone(),
                        parameter: rate.to_string(),
                    });
                }
            }
            let parse_side = |side: &[String]| -> Result<Vec<ComplexPattern>, ModelError> {
                side.iter()
                    .map(|text| ComplexPattern::parse(text, &self.monomers))
                    .collect()
            };
            rules.push(Rule::new(
                pending.name.clone(),
                parse_side(&pending.reactants)?,
                parse_side(&pending.products)?,
                pending.forward.clone(),
                pending.reverse.clone(),
            ));
        }

        let mut initials = Vec::with_capacity(self.initials.len());
        for (pattern, parameter) in &self.initials {
            if !self.parameters.iter().any(|p| p.name() == *parameter) {
                return Err(ModelError::UnknownParameter(parameter.clone()));
            }
            initials.push(Initial::new(
                ComplexPattern::parse(pattern, &self.monomers)?,
                parameter.clone(),
            ));
        }

        Ok(Model::new(
            self.name,
            self.monomers,
            self.parameters,
            rules,
            initials,
        ))
    }
}
