//! Validation of the bundled Bcl-2 family models against the equation
//! systems published in Chen et al. (2007) Biophys J, Chen et al. (2007)
//! FEBS Lett, Cui et al. (2008) PLoS ONE and Howells et al. (2011)
//! J Theor Biol.
//!
//! Each test compiles a model to its reaction network, rewrites the
//! generated ODEs into the nomenclature of the source publication and
//! requires an exact match against the printed equations.

use mompsol::prelude::models::{
    chen2007_biophys_j, chen2007_febs_direct, chen2007_febs_indirect, cui2008_direct,
    cui2008_direct1, cui2008_direct2, howells2011,
};
use mompsol::*;

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn params(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(n, v)| (n.to_string(), *v)).collect()
}

/// Parameter nomenclature shared by both Chen 2007 FEBS variants. Both
/// BH3-only binders run at the same rates in the paper, so two generated
/// constants collapse onto `k_BH3_Bcl2`/`kr_BH3Bcl2`.
fn chen_febs_parameter_names() -> HashMap<String, String> {
    map(&[
        ("one_step_BidT_BaxC_to_BidT_BaxA_kf", "k_InBax"),
        ("reverse_BaxA_to_BaxC_k", "k_Bax"),
        ("bind_BidT_Bcl2_kf", "k_BH3_Bcl2"),
        ("bind_BidT_Bcl2_kr", "kr_BH3Bcl2"),
        ("bind_BadM_Bcl2_kf", "k_BH3_Bcl2"),
        ("bind_BadM_Bcl2_kr", "kr_BH3Bcl2"),
        ("bind_BaxA_Bcl2_kf", "k_Bax_Bcl2"),
        ("bind_BaxA_Bcl2_kr", "kr_BaxBcl2"),
        ("spontaneous_pore_BaxA_to_Bax4_kf", "k_o"),
        ("spontaneous_pore_BaxA_to_Bax4_kr", "kr_o"),
    ])
}

/// Parameter nomenclature shared by all three Cui 2008 variants.
fn cui_parameter_names() -> HashMap<String, String> {
    map(&[
        ("one_step_BidT_BaxC_to_BidT_BaxA_kf", "k1"),
        ("reverse_BaxA_to_BaxC_k", "k8"),
        ("bind_BidT_Bcl2_kf", "k4"),
        ("bind_BidT_Bcl2_kr", "k5"),
        ("bind_BadM_Bcl2_kf", "k9"),
        ("bind_BadM_Bcl2_kr", "k10"),
        ("displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf", "k6"),
        ("displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr", "k7"),
        ("displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf", "k11"),
        ("displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr", "k12"),
        ("displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf", "k13"),
        ("displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr", "k14"),
        ("dimerize_Bax_kf", "k16"),
        ("dimerize_Bax_kr", "k17"),
        ("synthesize_BaxC_k", "p1"),
        ("degrade_BaxC_k", "u1"),
        ("degrade_BaxA_k", "u2"),
        ("synthesize_BidT_k", "p2"),
        ("degrade_BidT_k", "u3"),
        ("synthesize_Bcl2_k", "p3"),
        ("degrade_Bcl2_k", "u4"),
        ("degrade_BidTBcl2_k", "u5"),
        ("degrade_BaxBcl2_k", "u6"),
        ("synthesize_BadMU_k", "p4"),
        ("degrade_BadMU_k", "u7"),
        ("degrade_BadBcl2_k", "u8"),
        ("degrade_BaxBax_k", "u9"),
        ("bind_BaxA_Bcl2_kf", "k2"),
        ("bind_BaxA_Bcl2_kr", "k3"),
        ("Bax_autoactivation_dimerization_k", "k15"),
    ])
}

/// Species nomenclature shared by all three Cui 2008 variants. The
/// `AcBaxBcl2` entry only matches a species in the direct1/direct2
/// topologies; the plain direct model simply leaves it unused.
fn cui_species_names() -> HashMap<String, String> {
    map(&[
        ("Bid(bf=None, state=T)", "Act"),
        ("Bad(bf=None, state=M, serine=U)", "Ena"),
        ("Bax(bf=None, s1=None, s2=None, state=C)", "InBax"),
        ("Bcl2(bf=None)", "Bcl2"),
        ("__source()", "__source"),
        ("Bax(bf=None, s1=None, s2=None, state=A)", "AcBax"),
        ("Bcl2(bf=1) % Bid(bf=1, state=T)", "ActBcl2"),
        ("Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)", "EnaBcl2"),
        ("__sink()", "__sink"),
        (
            "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=2, s2=1, state=A)",
            "MAC",
        ),
        ("Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)", "AcBaxBcl2"),
    ])
}

const BAX_TETRAMER: &str = "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=3, s2=1, state=A) % Bax(bf=None, s1=4, s2=3, state=A) % Bax(bf=None, s1=2, s2=4, state=A)";

fn biophysj_parameter_names() -> HashMap<String, String> {
    map(&[
        ("one_step_BidT_BaxC_to_BidT_BaxA_kf", "k1"),
        ("reverse_BaxA_to_BaxC_k", "k2"),
        ("bind_BidT_Bcl2_kf", "k5"),
        ("bind_BidT_Bcl2_kr", "k6"),
        ("bind_BaxA_Bcl2_kf", "k3"),
        ("bind_BaxA_Bcl2_kr", "k4"),
        ("displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k", "k7"),
        ("spontaneous_pore_BaxA_to_Bax4_kf", "k9"),
        ("spontaneous_pore_BaxA_to_Bax4_kr", "k10"),
    ])
}

fn biophysj_species_names() -> HashMap<String, String> {
    map(&[
        ("Bid(bf=None, state=T)", "Act"),
        ("Bax(bf=None, s1=None, s2=None, state=C)", "InBax"),
        ("Bcl2(bf=None)", "Bcl2"),
        ("Bax(bf=None, s1=None, s2=None, state=A)", "AcBax"),
        ("Bcl2(bf=1) % Bid(bf=1, state=T)", "ActBcl2"),
        ("Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)", "AcBaxBcl2"),
        (BAX_TETRAMER, "Bax4"),
    ])
}

fn howells_parameter_names() -> HashMap<String, String> {
    map(&[
        ("one_step_BidT_BaxC_to_BidT_BaxA_kf", "k_Bak_cat"),
        ("reverse_BaxA_to_BaxC_k", "k_Bak_inac"),
        ("bind_BidT_Bcl2_kf", "ka_tBid_Bcl2"),
        ("bind_BidT_Bcl2_kr", "kd_tBid_Bcl2"),
        ("bind_BaxA_Bcl2_kf", "ka_Bak_Bcl2"),
        ("bind_BaxA_Bcl2_kr", "kd_Bak_Bcl2"),
        ("displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k", "k_tBid_rel2"),
        ("spontaneous_pore_BaxA_to_Bax4_kf", "ka_Bak_poly"),
        ("spontaneous_pore_BaxA_to_Bax4_kr", "kd_Bak_poly"),
        ("equilibrate_BadCU_to_BadMU_kf", "t_Bad_in"),
        ("equilibrate_BadCU_to_BadMU_kr", "t_Bad_out"),
        ("bind_BadM_Bcl2_kf", "ka_Bad_Bcl2"),
        ("bind_BadM_Bcl2_kr", "kd_Bad_Bcl2"),
        ("displace_BadM_BidTBcl2_to_BadMBcl2_BidT_k", "k_tBid_rel1"),
        ("phosphorylate_Bad_k1", "k_Bad_phos1"),
        ("phosphorylate_Bad_k2", "k_Bad_phos2"),
        ("sequester_BadCP_to_BadC1433_k", "k_Bad_seq"),
        ("release_BadC1433_to_BadCU_k", "k_Bad_rel"),
    ])
}

fn howells_species_names() -> HashMap<String, String> {
    map(&[
        ("Bid(bf=None, state=T)", "tBid"),
        ("Bax(bf=None, s1=None, s2=None, state=C)", "Bak_inac"),
        ("Bcl2(bf=None)", "Bcl2"),
        ("Bad(bf=None, state=M, serine=U)", "Bad_m"),
        ("Bax(bf=None, s1=None, s2=None, state=A)", "Bak"),
        ("Bcl2(bf=1) % Bid(bf=1, state=T)", "tBidBcl2"),
        ("Bad(bf=None, state=C, serine=U)", "Bad"),
        ("Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)", "BadBcl2"),
        ("Bad(bf=None, state=C, serine=P)", "pBad"),
        ("Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)", "BakBcl2"),
        (BAX_TETRAMER, "Bak_poly"),
        ("Bad(bf=None, state=C, serine=B)", "pBad1433"),
    ])
}

fn biophysj_reference_odes() -> HashMap<String, String> {
    map(&[
        ("Act", "AcBax*ActBcl2*k7 - Act*Bcl2*k5 + ActBcl2*k6"),
        ("InBax", "AcBax*k2 - Act*InBax*k1"),
        ("Bcl2", "-AcBax*Bcl2*k3 + AcBaxBcl2*k4 - Act*Bcl2*k5 + ActBcl2*k6"),
        (
            "AcBax",
            "-1.0*AcBax**4*k9 - AcBax*ActBcl2*k7 - AcBax*Bcl2*k3 - AcBax*k2 + AcBaxBcl2*k4 + Act*InBax*k1 + 4*Bax4*k10",
        ),
        ("ActBcl2", "-AcBax*ActBcl2*k7 + Act*Bcl2*k5 - ActBcl2*k6"),
        ("AcBaxBcl2", "AcBax*ActBcl2*k7 + AcBax*Bcl2*k3 - AcBaxBcl2*k4"),
        ("Bax4", "0.25*AcBax**4*k9 - Bax4*k10"),
    ])
}

fn chen_febs_indirect_reference_odes() -> HashMap<String, String> {
    map(&[
        ("BH3", "-BH3*Bcl2*k_BH3_Bcl2 + BH3Bcl2*kr_BH3Bcl2"),
        (
            "Bax",
            "-1.0*Bax**4*k_o - Bax*Bcl2*k_Bax_Bcl2 + BaxBcl2*kr_BaxBcl2 + 4*MAC*kr_o",
        ),
        (
            "Bcl2",
            "-BH3*Bcl2*k_BH3_Bcl2 + BH3Bcl2*kr_BH3Bcl2 - Bax*Bcl2*k_Bax_Bcl2 + BaxBcl2*kr_BaxBcl2",
        ),
        ("BH3Bcl2", "BH3*Bcl2*k_BH3_Bcl2 - BH3Bcl2*kr_BH3Bcl2"),
        ("BaxBcl2", "Bax*Bcl2*k_Bax_Bcl2 - BaxBcl2*kr_BaxBcl2"),
        ("MAC", "0.25*Bax**4*k_o - MAC*kr_o"),
    ])
}

fn chen_febs_direct_reference_odes() -> HashMap<String, String> {
    map(&[
        ("Act", "-Act*Bcl2*k_BH3_Bcl2 + ActBcl2*kr_BH3Bcl2"),
        ("Ena", "-Bcl2*Ena*k_BH3_Bcl2 + EnaBcl2*kr_BH3Bcl2"),
        ("InBax", "-Act*InBax*k_InBax + Bax*k_Bax"),
        (
            "Bcl2",
            "-Act*Bcl2*k_BH3_Bcl2 + ActBcl2*kr_BH3Bcl2 - Bcl2*Ena*k_BH3_Bcl2 + EnaBcl2*kr_BH3Bcl2",
        ),
        ("Bax", "Act*InBax*k_InBax - 1.0*Bax**4*k_o - Bax*k_Bax + 4*MAC*kr_o"),
        ("ActBcl2", "Act*Bcl2*k_BH3_Bcl2 - ActBcl2*kr_BH3Bcl2"),
        ("EnaBcl2", "Bcl2*Ena*k_BH3_Bcl2 - EnaBcl2*kr_BH3Bcl2"),
        ("MAC", "0.25*Bax**4*k_o - MAC*kr_o"),
    ])
}

fn cui_direct_reference_odes() -> HashMap<String, String> {
    map(&[
        (
            "Act",
            "-Act*Bcl2*k4 - Act*EnaBcl2*k12 - Act*u3 + ActBcl2*Ena*k11 + ActBcl2*k5 + __source*p2",
        ),
        (
            "Ena",
            "Act*EnaBcl2*k12 - ActBcl2*Ena*k11 - Bcl2*Ena*k9 - Ena*u7 + EnaBcl2*k10 + __source*p4",
        ),
        ("InBax", "AcBax*k8 - Act*InBax*k1 - InBax*u1 + __source*p1"),
        (
            "Bcl2",
            "-Act*Bcl2*k4 + ActBcl2*k5 - Bcl2*Ena*k9 - Bcl2*u4 + EnaBcl2*k10 + __source*p3",
        ),
        ("__source", "0"),
        (
            "AcBax",
            "-1.0*AcBax**2*k16 - AcBax*k8 - AcBax*u2 + Act*InBax*k1 + 2*MAC*k17",
        ),
        (
            "ActBcl2",
            "Act*Bcl2*k4 + Act*EnaBcl2*k12 - ActBcl2*Ena*k11 - ActBcl2*k5 - ActBcl2*u5",
        ),
        (
            "EnaBcl2",
            "-Act*EnaBcl2*k12 + ActBcl2*Ena*k11 + Bcl2*Ena*k9 - EnaBcl2*k10 - EnaBcl2*u8",
        ),
        (
            "__sink",
            "AcBax*u2 + Act*u3 + ActBcl2*u5 + Bcl2*u4 + Ena*u7 + EnaBcl2*u8 + InBax*u1 + MAC*u9",
        ),
        ("MAC", "0.5*AcBax**2*k16 - MAC*k17 - MAC*u9"),
    ])
}

fn cui_direct1_reference_odes() -> HashMap<String, String> {
    map(&[
        (
            "Act",
            "AcBax*ActBcl2*k6 - AcBaxBcl2*Act*k7 - Act*Bcl2*k4 - Act*EnaBcl2*k12 - Act*u3 + ActBcl2*Ena*k11 + ActBcl2*k5 + __source*p2",
        ),
        (
            "Ena",
            "AcBax*EnaBcl2*k14 - AcBaxBcl2*Ena*k13 + Act*EnaBcl2*k12 - ActBcl2*Ena*k11 - Bcl2*Ena*k9 - Ena*u7 + EnaBcl2*k10 + __source*p4",
        ),
        ("InBax", "AcBax*k8 - Act*InBax*k1 - InBax*u1 + __source*p1"),
        (
            "Bcl2",
            "-AcBax*Bcl2*k2 + AcBaxBcl2*k3 - Act*Bcl2*k4 + ActBcl2*k5 - Bcl2*Ena*k9 - Bcl2*u4 + EnaBcl2*k10 + __source*p3",
        ),
        ("__source", "0"),
        (
            "AcBax",
            "-1.0*AcBax**2*k16 - AcBax*ActBcl2*k6 - AcBax*Bcl2*k2 - AcBax*EnaBcl2*k14 - AcBax*k8 - AcBax*u2 + AcBaxBcl2*Act*k7 + AcBaxBcl2*Ena*k13 + AcBaxBcl2*k3 + Act*InBax*k1 + 2*MAC*k17",
        ),
        (
            "ActBcl2",
            "-AcBax*ActBcl2*k6 + AcBaxBcl2*Act*k7 + Act*Bcl2*k4 + Act*EnaBcl2*k12 - ActBcl2*Ena*k11 - ActBcl2*k5 - ActBcl2*u5",
        ),
        (
            "EnaBcl2",
            "-AcBax*EnaBcl2*k14 + AcBaxBcl2*Ena*k13 - Act*EnaBcl2*k12 + ActBcl2*Ena*k11 + Bcl2*Ena*k9 - EnaBcl2*k10 - EnaBcl2*u8",
        ),
        (
            "__sink",
            "AcBax*u2 + AcBaxBcl2*u6 + Act*u3 + ActBcl2*u5 + Bcl2*u4 + Ena*u7 + EnaBcl2*u8 + InBax*u1 + MAC*u9",
        ),
        ("MAC", "0.5*AcBax**2*k16 - MAC*k17 - MAC*u9"),
        (
            "AcBaxBcl2",
            "AcBax*ActBcl2*k6 + AcBax*Bcl2*k2 + AcBax*EnaBcl2*k14 - AcBaxBcl2*Act*k7 - AcBaxBcl2*Ena*k13 - AcBaxBcl2*k3 - AcBaxBcl2*u6",
        ),
    ])
}

fn cui_direct2_reference_odes() -> HashMap<String, String> {
    map(&[
        (
            "Act",
            "AcBax*ActBcl2*k6 - AcBaxBcl2*Act*k7 - Act*Bcl2*k4 - Act*EnaBcl2*k12 - Act*u3 + ActBcl2*Ena*k11 + ActBcl2*k5 + __source*p2",
        ),
        (
            "Ena",
            "AcBax*EnaBcl2*k14 - AcBaxBcl2*Ena*k13 + Act*EnaBcl2*k12 - ActBcl2*Ena*k11 - Bcl2*Ena*k9 - Ena*u7 + EnaBcl2*k10 + __source*p4",
        ),
        (
            "InBax",
            "-AcBax*InBax*k15 + AcBax*k8 - Act*InBax*k1 - InBax*u1 + __source*p1",
        ),
        (
            "Bcl2",
            "-AcBax*Bcl2*k2 + AcBaxBcl2*k3 - Act*Bcl2*k4 + ActBcl2*k5 - Bcl2*Ena*k9 - Bcl2*u4 + EnaBcl2*k10 + __source*p3",
        ),
        ("__source", "0"),
        (
            "AcBax",
            "-1.0*AcBax**2*k16 - AcBax*ActBcl2*k6 - AcBax*Bcl2*k2 - AcBax*EnaBcl2*k14 - AcBax*InBax*k15 - AcBax*k8 - AcBax*u2 + AcBaxBcl2*Act*k7 + AcBaxBcl2*Ena*k13 + AcBaxBcl2*k3 + Act*InBax*k1 + 2*MAC*k17",
        ),
        (
            "ActBcl2",
            "-AcBax*ActBcl2*k6 + AcBaxBcl2*Act*k7 + Act*Bcl2*k4 + Act*EnaBcl2*k12 - ActBcl2*Ena*k11 - ActBcl2*k5 - ActBcl2*u5",
        ),
        (
            "EnaBcl2",
            "-AcBax*EnaBcl2*k14 + AcBaxBcl2*Ena*k13 - Act*EnaBcl2*k12 + ActBcl2*Ena*k11 + Bcl2*Ena*k9 - EnaBcl2*k10 - EnaBcl2*u8",
        ),
        (
            "__sink",
            "AcBax*u2 + AcBaxBcl2*u6 + Act*u3 + ActBcl2*u5 + Bcl2*u4 + Ena*u7 + EnaBcl2*u8 + InBax*u1 + MAC*u9",
        ),
        ("MAC", "0.5*AcBax**2*k16 + AcBax*InBax*k15 - MAC*k17 - MAC*u9"),
        (
            "AcBaxBcl2",
            "AcBax*ActBcl2*k6 + AcBax*Bcl2*k2 + AcBax*EnaBcl2*k14 - AcBaxBcl2*Act*k7 - AcBaxBcl2*Ena*k13 - AcBaxBcl2*k3 - AcBaxBcl2*u6",
        ),
    ])
}

fn howells_reference_odes() -> HashMap<String, String> {
    map(&[
        (
            "tBid",
            "Bad_m*k_tBid_rel1*tBidBcl2 + Bak*k_tBid_rel2*tBidBcl2 - Bcl2*ka_tBid_Bcl2*tBid + kd_tBid_Bcl2*tBidBcl2",
        ),
        ("Bak_inac", "Bak*k_Bak_inac - Bak_inac*k_Bak_cat*tBid"),
        (
            "Bcl2",
            "BadBcl2*k_Bad_phos2 + BadBcl2*kd_Bad_Bcl2 - Bad_m*Bcl2*ka_Bad_Bcl2 - Bak*Bcl2*ka_Bak_Bcl2 + BakBcl2*kd_Bak_Bcl2 - Bcl2*ka_tBid_Bcl2*tBid + kd_tBid_Bcl2*tBidBcl2",
        ),
        (
            "Bad_m",
            "Bad*t_Bad_in + BadBcl2*kd_Bad_Bcl2 - Bad_m*Bcl2*ka_Bad_Bcl2 - Bad_m*k_Bad_phos1 - Bad_m*k_tBid_rel1*tBidBcl2 - Bad_m*t_Bad_out",
        ),
        (
            "Bak",
            "-1.0*Bak**4*ka_Bak_poly - Bak*Bcl2*ka_Bak_Bcl2 - Bak*k_Bak_inac - Bak*k_tBid_rel2*tBidBcl2 + BakBcl2*kd_Bak_Bcl2 + Bak_inac*k_Bak_cat*tBid + 4*Bak_poly*kd_Bak_poly",
        ),
        (
            "tBidBcl2",
            "-Bad_m*k_tBid_rel1*tBidBcl2 - Bak*k_tBid_rel2*tBidBcl2 + Bcl2*ka_tBid_Bcl2*tBid - kd_tBid_Bcl2*tBidBcl2",
        ),
        (
            "Bad",
            "-Bad*k_Bad_phos1 - Bad*t_Bad_in + Bad_m*t_Bad_out + k_Bad_rel*pBad1433",
        ),
        (
            "BadBcl2",
            "-BadBcl2*k_Bad_phos2 - BadBcl2*kd_Bad_Bcl2 + Bad_m*Bcl2*ka_Bad_Bcl2 + Bad_m*k_tBid_rel1*tBidBcl2",
        ),
        (
            "pBad",
            "Bad*k_Bad_phos1 + BadBcl2*k_Bad_phos2 + Bad_m*k_Bad_phos1 - k_Bad_seq*pBad",
        ),
        (
            "BakBcl2",
            "Bak*Bcl2*ka_Bak_Bcl2 + Bak*k_tBid_rel2*tBidBcl2 - BakBcl2*kd_Bak_Bcl2",
        ),
        ("Bak_poly", "0.25*Bak**4*ka_Bak_poly - Bak_poly*kd_Bak_poly"),
        ("pBad1433", "-k_Bad_rel*pBad1433 + k_Bad_seq*pBad"),
    ])
}

fn rewritten(model: &Model, species: &HashMap<String, String>, params: &HashMap<String, String>) -> OdeSystem {
    let network = BundledNetworks
        .compile(model)
        .expect("the bundled expansion should compile");
    OdeSystem::build(&network, species, params).expect("every species should be named")
}

#[test]
fn chen2007_biophys_j_matches_the_published_odes() {
    let model = chen2007_biophys_j().expect("model should build");
    let system = rewritten(&model, &biophysj_species_names(), &biophysj_parameter_names());
    let diff = system.diff(&biophysj_reference_odes());
    assert!(diff.is_empty(), "{}", diff);
}

#[test]
fn chen2007_biophys_j_matches_the_table_1_parameters() {
    let model = chen2007_biophys_j().expect("model should build");
    let projected = project_parameters(&model, &biophysj_parameter_names());
    assert_eq!(
        projected,
        params(&[
            ("k1", 0.5),
            ("k2", 0.1),
            ("k5", 3.0),
            ("k6", 0.04),
            ("k3", 2.0),
            ("k4", 0.001),
            ("k7", 2.0),
            ("k9", 8.0),
            ("k10", 0.0),
        ])
    );
}

#[test]
fn chen2007_febs_indirect_matches_the_published_odes() {
    let species = map(&[
        ("Bid(bf=None, state=T)", "BH3"),
        ("Bax(bf=None, s1=None, s2=None, state=A)", "Bax"),
        ("Bcl2(bf=None)", "Bcl2"),
        ("Bcl2(bf=1) % Bid(bf=1, state=T)", "BH3Bcl2"),
        ("Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)", "BaxBcl2"),
        (BAX_TETRAMER, "MAC"),
    ]);
    let model = chen2007_febs_indirect().expect("model should build");
    let system = rewritten(&model, &species, &chen_febs_parameter_names());
    let diff = system.diff(&chen_febs_indirect_reference_odes());
    assert!(diff.is_empty(), "{}", diff);
}

#[test]
fn chen2007_febs_direct_matches_the_published_odes() {
    let species = map(&[
        ("Bid(bf=None, state=T)", "Act"),
        ("Bad(bf=None, state=M, serine=U)", "Ena"),
        ("Bax(bf=None, s1=None, s2=None, state=C)", "InBax"),
        ("Bcl2(bf=None)", "Bcl2"),
        ("Bax(bf=None, s1=None, s2=None, state=A)", "Bax"),
        ("Bcl2(bf=1) % Bid(bf=1, state=T)", "ActBcl2"),
        ("Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)", "EnaBcl2"),
        (BAX_TETRAMER, "MAC"),
    ]);
    let model = chen2007_febs_direct().expect("model should build");
    let system = rewritten(&model, &species, &chen_febs_parameter_names());
    let diff = system.diff(&chen_febs_direct_reference_odes());
    assert!(diff.is_empty(), "{}", diff);
}

#[test]
fn cui2008_direct_matches_the_published_odes() {
    let model = cui2008_direct().expect("model should build");
    let system = rewritten(&model, &cui_species_names(), &cui_parameter_names());
    let diff = system.diff(&cui_direct_reference_odes());
    assert!(diff.is_empty(), "{}", diff);
}

#[test]
fn cui2008_direct1_matches_the_published_odes() {
    let model = cui2008_direct1().expect("model should build");
    let system = rewritten(&model, &cui_species_names(), &cui_parameter_names());
    let diff = system.diff(&cui_direct1_reference_odes());
    assert!(diff.is_empty(), "{}", diff);
}

#[test]
fn cui2008_direct2_matches_the_published_odes() {
    let model = cui2008_direct2().expect("model should build");
    let system = rewritten(&model, &cui_species_names(), &cui_parameter_names());
    let diff = system.diff(&cui_direct2_reference_odes());
    assert!(diff.is_empty(), "{}", diff);
}

#[test]
fn howells2011_matches_the_published_odes() {
    let model = howells2011().expect("model should build");
    let system = rewritten(&model, &howells_species_names(), &howells_parameter_names());
    let diff = system.diff(&howells_reference_odes());
    assert!(diff.is_empty(), "{}", diff);
}

#[test]
fn howells2011_matches_the_table_1_parameters() {
    let model = howells2011().expect("model should build");
    let projected = project_parameters(&model, &howells_parameter_names());
    assert_eq!(
        projected,
        params(&[
            ("k_Bak_cat", 0.5),
            ("k_Bak_inac", 0.1),
            ("ka_tBid_Bcl2", 3.0),
            ("kd_tBid_Bcl2", 0.002),
            ("ka_Bak_Bcl2", 2.0),
            ("kd_Bak_Bcl2", 0.002),
            ("k_tBid_rel2", 2.0),
            ("ka_Bak_poly", 8000.0),
            ("kd_Bak_poly", 5e-05),
            ("t_Bad_in", 0.01),
            ("t_Bad_out", 0.002),
            ("ka_Bad_Bcl2", 15.0),
            ("kd_Bad_Bcl2", 0.002),
            ("k_tBid_rel1", 5.0),
            ("k_Bad_phos1", 0.001),
            ("k_Bad_phos2", 0.0001),
            ("k_Bad_seq", 0.001),
            ("k_Bad_rel", 0.00087),
        ])
    );
}

#[test]
fn the_whole_suite_passes_batch_validation() {
    let cases = vec![
        ValidationCase {
            model: chen2007_biophys_j().expect("model should build"),
            species_names: biophysj_species_names(),
            parameter_names: biophysj_parameter_names(),
            reference_odes: biophysj_reference_odes(),
            reference_parameters: Some(params(&[
                ("k1", 0.5),
                ("k2", 0.1),
                ("k5", 3.0),
                ("k6", 0.04),
                ("k3", 2.0),
                ("k4", 0.001),
                ("k7", 2.0),
                ("k9", 8.0),
                ("k10", 0.0),
            ])),
        },
        ValidationCase {
            model: cui2008_direct().expect("model should build"),
            species_names: cui_species_names(),
            parameter_names: cui_parameter_names(),
            reference_odes: cui_direct_reference_odes(),
            reference_parameters: None,
        },
        ValidationCase {
            model: cui2008_direct1().expect("model should build"),
            species_names: cui_species_names(),
            parameter_names: cui_parameter_names(),
            reference_odes: cui_direct1_reference_odes(),
            reference_parameters: None,
        },
        ValidationCase {
            model: cui2008_direct2().expect("model should build"),
            species_names: cui_species_names(),
            parameter_names: cui_parameter_names(),
            reference_odes: cui_direct2_reference_odes(),
            reference_parameters: None,
        },
        ValidationCase {
            model: howells2011().expect("model should build"),
            species_names: howells_species_names(),
            parameter_names: howells_parameter_names(),
            reference_odes: howells_reference_odes(),
            reference_parameters: None,
        },
    ];

    let outcomes = validate_all(&BundledNetworks, &cases);
    assert_eq!(outcomes.len(), cases.len());
    for outcome in &outcomes {
        assert!(outcome.passed(), "{}", outcome);
    }
}

#[test]
fn a_wrong_reference_is_reported_not_swallowed() {
    let model = chen2007_biophys_j().expect("model should build");
    let mut reference = biophysj_reference_odes();
    reference.insert("Bax4".to_string(), "0.5*AcBax**4*k9 - Bax4*k10".to_string());

    let case = ValidationCase {
        model,
        species_names: biophysj_species_names(),
        parameter_names: biophysj_parameter_names(),
        reference_odes: reference,
        reference_parameters: None,
    };
    let outcome = validate_model(&BundledNetworks, &case);
    assert!(!outcome.passed());
    assert!(outcome.report().contains("Bax4"), "{}", outcome.report());
}
