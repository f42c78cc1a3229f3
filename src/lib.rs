pub mod catalog;
pub mod error;
pub mod model;
pub mod network;
pub mod simulator;
pub mod symbolic;
pub mod verify;

pub use crate::catalog::BundledNetworks;
pub use crate::model::{Model, ModelBuilder, Monomer};
pub use crate::network::{NetworkCompiler, ReactionNetwork};
pub use crate::simulator::{simulate, Trajectories};
pub use crate::symbolic::Expr;
pub use crate::verify::{
    match_species, project_parameters, validate_all, validate_model, OdeSystem, ValidationCase,
    ValidationOutcome,
};
pub use error::MompsolError;
pub use std::collections::HashMap;

pub mod prelude {
    pub mod model {
        pub use crate::model::{
            ComplexPattern, Model, ModelBuilder, ModelError, Monomer, MonomerPattern, Site,
            SiteValue,
        };
    }
    pub mod network {
        pub use crate::network::{NetworkCompiler, NetworkError, ReactionNetwork};
    }
    pub mod verify {
        pub use crate::verify::{
            match_species, project_parameters, substitution_table, validate_all, validate_model,
            Discrepancies, Mismatch, OdeSystem, ValidationCase, ValidationOutcome, VerifyError,
        };
    }
    pub mod models {
        pub use crate::catalog::momp_monomers;
        pub use crate::catalog::patterns;
        pub use crate::catalog::BundledNetworks;
        pub use crate::catalog::{
            chen2007_biophys_j, chen2007_febs_direct, chen2007_febs_indirect, cui2008_direct,
            cui2008_direct1, cui2008_direct2, howells2011,
        };
    }

    pub use crate::simulator::{simulate, SimulatorError, Trajectories};
    pub use crate::symbolic::{Expr, ExprError};
    pub use crate::MompsolError;
}
