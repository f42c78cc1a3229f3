//! Bundled models of mitochondrial outer membrane permeabilization
//!
//! Seven rule-based renderings of published Bcl-2 family ODE models: the
//! Chen et al. 2007 Biophys. J. direct model, the indirect and direct
//! variants from Chen et al. 2007 FEBS Lett., three nested variants from
//! Cui et al. 2008 PLoS ONE, and the Howells et al. 2011 J. Theor. Biol.
//! extension with Bad phosphorylation. All share the monomer set returned
//! by [momp_monomers] and are assembled with the rule templates on
//! [ModelBuilder](crate::model::ModelBuilder); the reaction networks they
//! expand to ship with the crate and are served by [BundledNetworks].

mod expansion;
mod shen;

pub use expansion::BundledNetworks;
pub use shen::{
    chen2007_biophys_j, chen2007_febs_direct, chen2007_febs_indirect, cui2008_direct,
    cui2008_direct1, cui2008_direct2, howells2011,
};

use crate::model::Monomer;

/// Canonical descriptions of the species that appear across the bundled
/// models, in the vocabulary of [momp_monomers].
pub mod patterns {
    /// Truncated (active) Bid.
    pub const BID_T: &str = "Bid(bf=None, state=T)";
    /// Cytosolic, inactive Bax.
    pub const BAX_C: &str = "Bax(bf=None, s1=None, s2=None, state=C)";
    /// Activated Bax, not yet oligomerized.
    pub const BAX_A: &str = "Bax(bf=None, s1=None, s2=None, state=A)";
    /// Free Bcl-2.
    pub const BCL2: &str = "Bcl2(bf=None)";
    /// Mitochondrial, unphosphorylated Bad.
    pub const BAD_M_U: &str = "Bad(bf=None, state=M, serine=U)";
    /// Cytosolic, unphosphorylated Bad.
    pub const BAD_C_U: &str = "Bad(bf=None, state=C, serine=U)";
    /// Cytosolic, phosphorylated Bad.
    pub const BAD_C_P: &str = "Bad(bf=None, state=C, serine=P)";
    /// Phosphorylated Bad sequestered by 14-3-3.
    pub const BAD_C_B: &str = "Bad(bf=None, state=C, serine=B)";
    /// Bid sequestered by Bcl-2.
    pub const BID_T_BCL2: &str = "Bcl2(bf=1) % Bid(bf=1, state=T)";
    /// Activated Bax sequestered by Bcl-2.
    pub const BAX_A_BCL2: &str = "Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)";
    /// Mitochondrial Bad sequestered by Bcl-2.
    pub const BAD_M_BCL2: &str = "Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)";
    /// Bax homodimer, joined head to tail through s1 and s2.
    pub const BAX2: &str =
        "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=2, s2=1, state=A)";
    /// Cyclic Bax tetramer, the pore species of the Chen and Howells
    /// models.
    pub const BAX4: &str = "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=3, s2=1, state=A) % Bax(bf=None, s1=4, s2=3, state=A) % Bax(bf=None, s1=2, s2=4, state=A)";
}

/// The monomer set shared by every bundled model.
///
/// CytoC and Smac are declared for parity with the wider MOMP literature
/// even though the Shen-group models never produce species containing
/// them.
pub fn momp_monomers() -> Vec<Monomer> {
    vec![
        Monomer::new("Bid")
            .binding_site("bf")
            .state_site("state", &["U", "T", "M"]),
        Monomer::new("Bax")
            .binding_site("bf")
            .binding_site("s1")
            .binding_site("s2")
            .state_site("state", &["C", "M", "A"]),
        Monomer::new("Bcl2").binding_site("bf"),
        Monomer::new("Bad")
            .binding_site("bf")
            .state_site("state", &["C", "M"])
            .state_site("serine", &["U", "P", "B"]),
        Monomer::new("CytoC")
            .binding_site("bf")
            .state_site("state", &["M", "C", "A"]),
        Monomer::new("Smac")
            .binding_site("bf")
            .state_site("state", &["M", "C", "A"]),
    ]
}
