use thiserror::Error;

use crate::model::ModelError;
use crate::network::NetworkError;
use crate::simulator::SimulatorError;
use crate::symbolic::ExprError;
use crate::verify::VerifyError;

/// Umbrella error for the crate, for callers that do not care which
/// stage of the pipeline failed.
#[derive(Error, Debug)]
pub enum MompsolError {
    #[error("Error in the model definition: {0}")]
    ModelError(#[from] ModelError),
    #[error("Error in a symbolic expression: {0}")]
    ExprError(#[from] ExprError),
    #[error("Error expanding the reaction network: {0}")]
    NetworkError(#[from] NetworkError),
    #[error("Error naming the network species: {0}")]
    VerifyError(#[from] VerifyError),
    #[error("Error simulating the network: {0}")]
    SimulatorError(#[from] SimulatorError),
}
