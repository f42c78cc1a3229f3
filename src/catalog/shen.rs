//! The Shen-group model lineage and its Howells extension
//!
//! Each constructor assembles one published model. Variants within a
//! family reuse their predecessor's chain and then extend it with further
//! template calls or override individual rate constants, so the models
//! stay diffable against each other the way the papers present them.
//! Concentrations and rates keep the units of the source papers
//! (Chen-family and Howells in uM, Cui in nM).

use crate::model::{Model, ModelBuilder, ModelError};

use super::momp_monomers;
use super::patterns::{
    BAD_C_B, BAD_C_P, BAD_C_U, BAD_M_BCL2, BAD_M_U, BAX2, BAX4, BAX_A, BAX_A_BCL2, BAX_C, BCL2,
    BID_T, BID_T_BCL2,
};

fn momp_builder(name: &str) -> ModelBuilder {
    momp_monomers()
        .into_iter()
        .fold(ModelBuilder::new(name), ModelBuilder::monomer)
}

fn chen2007_biophys_j_core(name: &str) -> ModelBuilder {
    momp_builder(name)
        .parameter("Bcl2_0", 1e-1)
        .parameter("Bax_0", 2e-1)
        .initial(BAX_C, "Bax_0")
        .initial(BCL2, "Bcl2_0")
        .catalyze_one_step("BidT", BID_T, "BaxC", BAX_C, "BaxA", BAX_A, 0.5, 0.1)
        .bind("BidT", BID_T, "Bcl2", BCL2, BID_T_BCL2, 3.0, 4e-2)
        .bind("BaxA", BAX_A, "Bcl2", BCL2, BAX_A_BCL2, 2.0, 1e-3)
        .displace(
            "BaxA", BAX_A, "BidTBcl2", BID_T_BCL2, "BaxABcl2", BAX_A_BCL2, "BidT", BID_T, 2.0,
        )
        .spontaneous_pore("BaxA", BAX_A, "Bax4", BAX4, 4, 8.0, 0.0)
}

/// Chen et al. 2007, Biophys. J. 92:4304-4315. Direct activation of Bax by
/// tBid, mutual sequestration by Bcl-2, and cooperative assembly of the
/// Bax tetramer.
pub fn chen2007_biophys_j() -> Result<Model, ModelError> {
    chen2007_biophys_j_core("chen2007BiophysJ")
        .parameter("Bid_0", 1.0)
        .initial(BID_T, "Bid_0")
        .build()
}

/// Chen et al. 2007, FEBS Lett. 581:5143-5150, indirect variant: Bax is
/// constitutively active and tBid acts purely by occupying Bcl-2.
pub fn chen2007_febs_indirect() -> Result<Model, ModelError> {
    momp_builder("chen2007FEBS_indirect")
        .parameter("Bcl2_0", 30.0)
        .parameter("Bax_0", 60.0)
        .initial(BAX_A, "Bax_0")
        .initial(BCL2, "Bcl2_0")
        .bind("BidT", BID_T, "Bcl2", BCL2, BID_T_BCL2, 1e-4, 1e-3)
        .bind("BaxA", BAX_A, "Bcl2", BCL2, BAX_A_BCL2, 1e-4, 1e-3)
        .spontaneous_pore("BaxA", BAX_A, "Bax4", BAX4, 4, 4e-3, 1e-3)
        .parameter("Bid_0", 1.0)
        .initial(BID_T, "Bid_0")
        .build()
}

/// Chen et al. 2007, FEBS Lett., direct variant: tBid activates Bax while
/// Bad neutralizes Bcl-2.
pub fn chen2007_febs_direct() -> Result<Model, ModelError> {
    momp_builder("chen2007FEBS_direct")
        .parameter("Bcl2_0", 30.0)
        .parameter("Bax_0", 60.0)
        .initial(BAX_C, "Bax_0")
        .initial(BCL2, "Bcl2_0")
        .catalyze_one_step("BidT", BID_T, "BaxC", BAX_C, "BaxA", BAX_A, 1e-3, 1e-3)
        .bind("BidT", BID_T, "Bcl2", BCL2, BID_T_BCL2, 1e-4, 1e-3)
        .bind("BadM", BAD_M_U, "Bcl2", BCL2, BAD_M_BCL2, 1e-4, 1e-3)
        .spontaneous_pore("BaxA", BAX_A, "Bax4", BAX4, 4, 4e-3, 1e-3)
        .parameter("Bid_0", 1.0)
        .initial(BID_T, "Bid_0")
        .parameter("Bad_0", 1.0)
        .initial(BAD_M_U, "Bad_0")
        .build()
}

fn cui2008_direct_core(name: &str) -> ModelBuilder {
    momp_builder(name)
        .parameter("Bcl2_0", 30.0)
        .parameter("Bax_0", 60.0)
        .initial(BAX_C, "Bax_0")
        .initial(BCL2, "Bcl2_0")
        .catalyze_one_step("BidT", BID_T, "BaxC", BAX_C, "BaxA", BAX_A, 0.0005, 0.001)
        .bind("BidT", BID_T, "Bcl2", BCL2, BID_T_BCL2, 0.001, 0.001)
        .bind("BadM", BAD_M_U, "Bcl2", BCL2, BAD_M_BCL2, 0.0001, 0.001)
        .displace_reversibly(
            "BadM", BAD_M_U, "BidTBcl2", BID_T_BCL2, "BadMBcl2", BAD_M_BCL2, "BidT", BID_T,
            0.0001, 0.001,
        )
        .dimerize("Bax", BAX_A, BAX2, 0.0004, 0.02)
        .synthesize("BaxC", BAX_C, 0.06)
        .degrade("BaxC", BAX_C, 0.001)
        .degrade("BaxA", BAX_A, 0.001)
        .synthesize("BidT", BID_T, 0.001)
        .degrade("BidT", BID_T, 0.001)
        .synthesize("Bcl2", BCL2, 0.03)
        .degrade("Bcl2", BCL2, 0.001)
        .degrade("BidTBcl2", BID_T_BCL2, 0.005)
        .synthesize("BadMU", BAD_M_U, 0.001)
        .degrade("BadMU", BAD_M_U, 0.001)
        .degrade("BadBcl2", BAD_M_BCL2, 0.005)
        .degrade("BaxBax", BAX2, 0.0005)
}

/// Cui et al. 2008, PLoS ONE 3:e1469, base direct model: turnover of every
/// player plus Bad displacing tBid from Bcl-2 and Bax dimerization as the
/// permeabilization readout.
pub fn cui2008_direct() -> Result<Model, ModelError> {
    cui2008_direct_core("cui2008_direct").build()
}

fn cui2008_direct1_core(name: &str) -> ModelBuilder {
    cui2008_direct_core(name)
        .bind("BaxA", BAX_A, "Bcl2", BCL2, BAX_A_BCL2, 0.005, 0.001)
        .displace_reversibly(
            "BaxA", BAX_A, "BidTBcl2", BID_T_BCL2, "BaxABcl2", BAX_A_BCL2, "BidT", BID_T,
            0.005, 0.001,
        )
        .displace_reversibly(
            "BadM", BAD_M_U, "BaxABcl2", BAX_A_BCL2, "BadMBcl2", BAD_M_BCL2, "BaxA", BAX_A,
            0.0001, 0.005,
        )
        .degrade("BaxBcl2", BAX_A_BCL2, 0.005)
}

/// Cui variant 1: the base model plus sequestration of activated Bax by
/// Bcl-2 and the accompanying displacement reactions.
pub fn cui2008_direct1() -> Result<Model, ModelError> {
    cui2008_direct1_core("cui2008_direct1").build()
}

/// Cui variant 2: variant 1 plus autoactivation, in which activated Bax
/// recruits cytosolic Bax directly into the dimer.
pub fn cui2008_direct2() -> Result<Model, ModelError> {
    cui2008_direct1_core("cui2008_direct2")
        .parameter("Bax_autoactivation_dimerization_k", 0.0002)
        .rule(
            "Bax_autoactivation_dimerization",
            &[BAX_A, BAX_C],
            &[BAX2],
            "Bax_autoactivation_dimerization_k",
        )
        .build()
}

/// Howells et al. 2011, J. Theor. Biol. 271:114-123: the Chen Biophys. J.
/// model with retuned constants plus a Bad compartment cycle covering
/// translocation, Bcl-2 binding, phosphorylation, and sequestration by
/// 14-3-3.
pub fn howells2011() -> Result<Model, ModelError> {
    chen2007_biophys_j_core("howells2011")
        .override_parameter("bind_BidT_Bcl2_kr", 2e-3)
        .override_parameter("bind_BaxA_Bcl2_kr", 2e-3)
        .override_parameter("spontaneous_pore_BaxA_to_Bax4_kf", 8000.0)
        .override_parameter("spontaneous_pore_BaxA_to_Bax4_kr", 5e-5)
        .parameter("Bad_0", 0.025)
        .initial(BAD_M_U, "Bad_0")
        .equilibrate("BadCU", BAD_C_U, "BadMU", BAD_M_U, 1e-2, 2e-3)
        .bind("BadM", BAD_M_U, "Bcl2", BCL2, BAD_M_BCL2, 15.0, 2e-3)
        .displace(
            "BadM", BAD_M_U, "BidTBcl2", BID_T_BCL2, "BadMBcl2", BAD_M_BCL2, "BidT", BID_T, 5.0,
        )
        .parameter("phosphorylate_Bad_k1", 1e-3)
        .parameter("phosphorylate_Bad_k2", 1e-4)
        .rule(
            "phosphorylate_BadCU_to_BadCP",
            &[BAD_C_U],
            &[BAD_C_P],
            "phosphorylate_Bad_k1",
        )
        .rule(
            "phosphorylate_BadMU_to_BadCP",
            &[BAD_M_U],
            &[BAD_C_P],
            "phosphorylate_Bad_k1",
        )
        .rule(
            "phosphorylate_BadMUBcl2_to_BadCP",
            &[BAD_M_BCL2],
            &[BAD_C_P, BCL2],
            "phosphorylate_Bad_k2",
        )
        .parameter("sequester_BadCP_to_BadC1433_k", 1e-3)
        .rule(
            "sequester_BadCP_to_BadC1433",
            &[BAD_C_P],
            &[BAD_C_B],
            "sequester_BadCP_to_BadC1433_k",
        )
        .parameter("release_BadC1433_to_BadCU_k", 8.7e-4)
        .rule(
            "release_BadC1433_to_BadCU",
            &[BAD_C_B],
            &[BAD_C_U],
            "release_BadC1433_to_BadCU_k",
        )
        .parameter("Bid_0", 1.0)
        .initial(BID_T, "Bid_0")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biophys_j_declares_rates_in_publication_order() {
        let model = chen2007_biophys_j().unwrap();
        let rates: Vec<&str> = model
            .parameters()
            .iter()
            .map(|p| p.name())
            .filter(|n| !n.ends_with("_0"))
            .collect();
        assert_eq!(
            rates,
            vec![
                "one_step_BidT_BaxC_to_BidT_BaxA_kf",
                "reverse_BaxA_to_BaxC_k",
                "bind_BidT_Bcl2_kf",
                "bind_BidT_Bcl2_kr",
                "bind_BaxA_Bcl2_kf",
                "bind_BaxA_Bcl2_kr",
                "displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k",
                "spontaneous_pore_BaxA_to_Bax4_kf",
                "spontaneous_pore_BaxA_to_Bax4_kr",
            ]
        );
        assert_eq!(model.rules().len(), 6);
    }

    #[test]
    fn howells_overrides_the_chen_constants() {
        let chen = chen2007_biophys_j().unwrap();
        let howells = howells2011().unwrap();
        assert_eq!(
            chen.parameter("spontaneous_pore_BaxA_to_Bax4_kf")
                .unwrap()
                .value(),
            8.0
        );
        assert_eq!(
            howells
                .parameter("spontaneous_pore_BaxA_to_Bax4_kf")
                .unwrap()
                .value(),
            8000.0
        );
        assert_eq!(howells.parameter("bind_BidT_Bcl2_kr").unwrap().value(), 2e-3);
        // The override keeps the declaration slot of the original constant
        let chen_names: Vec<&str> = chen.parameters().iter().map(|p| p.name()).collect();
        let howells_names: Vec<&str> = howells.parameters().iter().map(|p| p.name()).collect();
        assert_eq!(howells_names[..chen_names.len() - 1], chen_names[..chen_names.len() - 1]);
    }

    #[test]
    fn cui_variants_nest() {
        let base = cui2008_direct().unwrap();
        let v1 = cui2008_direct1().unwrap();
        let v2 = cui2008_direct2().unwrap();
        assert_eq!(base.rules().len(), 18);
        assert_eq!(v1.rules().len(), 22);
        assert_eq!(v2.rules().len(), 23);
        for rule in base.rules() {
            assert!(v1.rules().iter().any(|r| r.name() == rule.name()));
        }
        assert!(v2.monomer("__source").is_some());
        assert!(v2.monomer("__sink").is_some());
        assert_eq!(
            v2.parameter("Bax_autoactivation_dimerization_k")
                .unwrap()
                .value(),
            0.0002
        );
    }

    #[test]
    fn febs_variants_seed_different_bax_forms() {
        let indirect = chen2007_febs_indirect().unwrap();
        let direct = chen2007_febs_direct().unwrap();
        let seeded = |model: &Model| -> Vec<String> {
            model
                .initials()
                .iter()
                .map(|i| i.pattern().to_string())
                .collect()
        };
        assert!(seeded(&indirect).contains(&BAX_A.to_string()));
        assert!(!seeded(&indirect).contains(&BAX_C.to_string()));
        assert!(seeded(&direct).contains(&BAX_C.to_string()));
        assert!(seeded(&direct).contains(&BAD_M_U.to_string()));
    }
}
