//! Numerical integration of reaction networks
//!
//! Compiles a [ReactionNetwork]'s symbolic right-hand sides into flat
//! mass-action polynomials with the current rate constants folded in, then
//! integrates them with a BDF solver. Output is a [Trajectories] table,
//! one column per species, optionally labeled through the same structural
//! name maps the verification layer uses.

mod closure;

use std::collections::HashMap;

use diffsol::{
    error::DiffsolError, error::OdeSolverError, ode_solver::method::OdeSolverMethod, Bdf,
    NewtonNonlinearSolver, OdeBuilder, OdeSolverStopReason,
};
use nalgebra::DVector;
use ndarray::Array2;
use thiserror::Error;
use tracing::debug;

use crate::model::ModelError;
use crate::network::{species_index, ReactionNetwork};
use crate::verify::{match_species, VerifyError};

use closure::NetworkProblem;

type V = DVector<f64>;
type M = nalgebra::DMatrix<f64>;

const RTOL: f64 = 1e-4;
const ATOL: f64 = 1e-4;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("At least one output time is required")]
    NoTimes,
    #[error("Output times must be strictly increasing")]
    UnorderedTimes,
    #[error("Invalid species pattern: {0}")]
    Pattern(#[from] ModelError),
    #[error("Species '{0}' is not part of the network")]
    UnknownInitial(String),
    #[error("Symbol '{symbol}' is neither a species nor a parameter")]
    UnresolvedSymbol { symbol: String },
    #[error("Species name map error: {0}")]
    Name(#[from] VerifyError),
    #[error("The ODE solver step size went to zero; a rate constant may be diverging")]
    StepSizeTooSmall,
    #[error("ODE solver stopped for an unexpected reason: {0}")]
    UnexpectedStop(String),
    #[error("ODE solver failure: {0}")]
    Solver(#[from] DiffsolError),
}

struct CompiledTerm {
    coeff: f64,
    factors: Vec<(usize, u32)>,
}

struct CompiledOde {
    terms: Vec<CompiledTerm>,
}

/// A network's right-hand sides lowered to numeric mass-action terms.
pub(crate) struct CompiledNetwork {
    odes: Vec<CompiledOde>,
}

impl CompiledNetwork {
    /// Fold the network's current parameter values into flat per-species
    /// term lists. Species symbols become state indices; everything else
    /// must resolve to a parameter.
    fn compile(network: &ReactionNetwork) -> Result<CompiledNetwork, SimulatorError> {
        let nstates = network.species().len();
        let mut odes = Vec::with_capacity(nstates);
        for expr in network.odes() {
            let mut terms = Vec::with_capacity(expr.terms().len());
            for term in expr.terms() {
                let mut coeff = term.coeff().as_f64();
                let mut factors = Vec::new();
                for (name, exp) in term.factors() {
                    match species_index(name) {
                        Some(index) if index < nstates => factors.push((index, *exp)),
                        _ => {
                            let parameter = network.parameter(name).ok_or_else(|| {
                                SimulatorError::UnresolvedSymbol {
                                    symbol: name.clone(),
                                }
                            })?;
                            coeff *= parameter.value().powi(*exp as i32);
                        }
                    }
                }
                terms.push(CompiledTerm { coeff, factors });
            }
            odes.push(CompiledOde { terms });
        }
        Ok(CompiledNetwork { odes })
    }

    fn rhs_inplace(&self, x: &V, dx: &mut V) {
        for (i, ode) in self.odes.iter().enumerate() {
            let mut rate = 0.0;
            for term in &ode.terms {
                let mut value = term.coeff;
                for &(j, exp) in &term.factors {
                    value *= x[j].powi(exp as i32);
                }
                rate += value;
            }
            dx[i] = rate;
        }
    }

    /// y = J(x) v, with the Jacobian of each term taken analytically.
    fn jac_mul_inplace(&self, x: &V, v: &V, y: &mut V) {
        for (i, ode) in self.odes.iter().enumerate() {
            let mut acc = 0.0;
            for term in &ode.terms {
                for (k, &(j, exp)) in term.factors.iter().enumerate() {
                    let mut derivative = term.coeff * exp as f64 * x[j].powi(exp as i32 - 1);
                    for (l, &(m, e)) in term.factors.iter().enumerate() {
                        if l != k {
                            derivative *= x[m].powi(e as i32);
                        }
                    }
                    acc += derivative * v[j];
                }
            }
            y[i] = acc;
        }
    }
}

/// Concentration time courses, one row per output time and one column per
/// species.
#[derive(Debug, Clone)]
pub struct Trajectories {
    times: Vec<f64>,
    names: Vec<String>,
    data: Array2<f64>,
}

impl Trajectories {
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Column labels: canonical names where the name map provided one,
    /// `s<i>` otherwise.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn column(&self, name: &str) -> Option<ndarray::ArrayView1<'_, f64>> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(self.data.column(index))
    }

    /// Write the table as CSV with a `time` column followed by one column
    /// per species.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        let mut header = vec!["time".to_string()];
        header.extend(self.names.iter().cloned());
        writer.write_record(&header)?;
        for (row, time) in self.times.iter().enumerate() {
            let mut record = vec![time.to_string()];
            record.extend(self.data.row(row).iter().map(|value| value.to_string()));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Integrate a network over the given output times.
///
/// The first output time is the initial time. Initial concentrations come
/// from the network's own seeded species unless `initials` is given, in
/// which case it replaces them outright: every unlisted species starts at
/// zero. `names` labels the output columns through a structural name map.
pub fn simulate(
    network: &ReactionNetwork,
    names: Option<&HashMap<String, String>>,
    initials: Option<&[(&str, f64)]>,
    times: &[f64],
) -> Result<Trajectories, SimulatorError> {
    if times.is_empty() {
        return Err(SimulatorError::NoTimes);
    }
    if times.windows(2).any(|w| w[1] <= w[0]) {
        return Err(SimulatorError::UnorderedTimes);
    }

    let nstates = network.species().len();
    let compiled = CompiledNetwork::compile(network)?;

    let mut x0 = V::zeros(nstates);
    match initials {
        Some(overrides) => {
            for (text, value) in overrides {
                let pattern = network.pattern(text)?;
                let index = network
                    .species_index(&pattern)
                    .ok_or_else(|| SimulatorError::UnknownInitial(text.to_string()))?;
                x0[index] = *value;
            }
        }
        None => {
            for initial in network.initials() {
                let index = network
                    .species_index(initial.pattern())
                    .ok_or_else(|| SimulatorError::UnknownInitial(initial.pattern().to_string()))?;
                let parameter = network.parameter(initial.parameter()).ok_or_else(|| {
                    SimulatorError::UnresolvedSymbol {
                        symbol: initial.parameter().to_string(),
                    }
                })?;
                x0[index] = parameter.value();
            }
        }
    }

    let column_names: Vec<String> = match names {
        Some(map) => {
            let index_map = match_species(network, map)?;
            (0..nstates)
                .map(|i| {
                    index_map
                        .get(&i)
                        .cloned()
                        .unwrap_or_else(|| format!("s{}", i))
                })
                .collect()
        }
        None => (0..nstates).map(|i| format!("s{}", i)).collect(),
    };

    debug!(
        model = network.model(),
        states = nstates,
        points = times.len(),
        "integrating network"
    );

    let problem = OdeBuilder::<M>::new()
        .atol(vec![ATOL; nstates])
        .rtol(RTOL)
        .t0(times[0])
        .h0(1e-3)
        .build_from_eqn(NetworkProblem::new(compiled, x0))?;
    let mut solver: Bdf<'_, NetworkProblem, NewtonNonlinearSolver<M, diffsol::NalgebraLU<f64>>> =
        problem.bdf::<diffsol::NalgebraLU<f64>>()?;

    let mut data = Array2::zeros((times.len(), nstates));
    for (column, value) in solver.state().y.iter().enumerate() {
        data[[0, column]] = *value;
    }
    for (row, &time) in times.iter().enumerate().skip(1) {
        match solver.set_stop_time(time) {
            Ok(_) => loop {
                match solver.step() {
                    Ok(OdeSolverStopReason::InternalTimestep) => continue,
                    Ok(OdeSolverStopReason::TstopReached) => break,
                    Ok(reason) => {
                        return Err(SimulatorError::UnexpectedStop(format!("{:?}", reason)))
                    }
                    Err(DiffsolError::OdeSolverError(OdeSolverError::StepSizeTooSmall {
                        ..
                    })) => return Err(SimulatorError::StepSizeTooSmall),
                    Err(err) => return Err(err.into()),
                }
            },
            Err(DiffsolError::OdeSolverError(OdeSolverError::StopTimeAtCurrentTime)) => {}
            Err(err) => return Err(err.into()),
        }
        for (column, value) in solver.state().y.iter().enumerate() {
            data[[row, column]] = *value;
        }
    }

    Ok(Trajectories {
        times: times.to_vec(),
        names: column_names,
        data,
    })
}
