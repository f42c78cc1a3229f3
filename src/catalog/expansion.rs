//! Precomputed reaction networks for the bundled models
//!
//! Species orderings and mass-action right-hand sides as produced by rule
//! expansion, embedded so that verification and simulation need no
//! external network generator at run time. [BundledNetworks] serves them
//! keyed by model name and cross-checks each expansion against the model
//! it claims to expand.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::model::Model;
use crate::network::{NetworkCompiler, NetworkError, ReactionNetwork};

struct Expansion {
    species: &'static [&'static str],
    odes: &'static [&'static str],
}

static CHEN2007_BIOPHYS_J_SPECIES: &[&str] = &[
    "Bid(bf=None, state=T)",
    "Bax(bf=None, s1=None, s2=None, state=C)",
    "Bcl2(bf=None)",
    "Bax(bf=None, s1=None, s2=None, state=A)",
    "Bcl2(bf=1) % Bid(bf=1, state=T)",
    "Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)",
    "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=3, s2=1, state=A) % Bax(bf=None, s1=4, s2=3, state=A) % Bax(bf=None, s1=2, s2=4, state=A)",
];

static CHEN2007_BIOPHYS_J_ODES: &[&str] = &[
    "-bind_BidT_Bcl2_kf*s0*s2 + bind_BidT_Bcl2_kr*s4 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s3*s4",
    "-one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s1 + reverse_BaxA_to_BaxC_k*s3",
    "-bind_BaxA_Bcl2_kf*s2*s3 + bind_BaxA_Bcl2_kr*s5 - bind_BidT_Bcl2_kf*s0*s2 + bind_BidT_Bcl2_kr*s4",
    "-bind_BaxA_Bcl2_kf*s2*s3 + bind_BaxA_Bcl2_kr*s5 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s3*s4 + one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s1 - reverse_BaxA_to_BaxC_k*s3 - 1.0*s3**4*spontaneous_pore_BaxA_to_Bax4_kf + 4*s6*spontaneous_pore_BaxA_to_Bax4_kr",
    "bind_BidT_Bcl2_kf*s0*s2 - bind_BidT_Bcl2_kr*s4 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s3*s4",
    "bind_BaxA_Bcl2_kf*s2*s3 - bind_BaxA_Bcl2_kr*s5 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s3*s4",
    "0.25*s3**4*spontaneous_pore_BaxA_to_Bax4_kf - s6*spontaneous_pore_BaxA_to_Bax4_kr",
];

static CHEN2007_FEBS_INDIRECT_SPECIES: &[&str] = &[
    "Bid(bf=None, state=T)",
    "Bax(bf=None, s1=None, s2=None, state=A)",
    "Bcl2(bf=None)",
    "Bcl2(bf=1) % Bid(bf=1, state=T)",
    "Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)",
    "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=3, s2=1, state=A) % Bax(bf=None, s1=4, s2=3, state=A) % Bax(bf=None, s1=2, s2=4, state=A)",
];

static CHEN2007_FEBS_INDIRECT_ODES: &[&str] = &[
    "-bind_BidT_Bcl2_kf*s0*s2 + bind_BidT_Bcl2_kr*s3",
    "-bind_BaxA_Bcl2_kf*s1*s2 + bind_BaxA_Bcl2_kr*s4 - 1.0*s1**4*spontaneous_pore_BaxA_to_Bax4_kf + 4*s5*spontaneous_pore_BaxA_to_Bax4_kr",
    "-bind_BaxA_Bcl2_kf*s1*s2 + bind_BaxA_Bcl2_kr*s4 - bind_BidT_Bcl2_kf*s0*s2 + bind_BidT_Bcl2_kr*s3",
    "bind_BidT_Bcl2_kf*s0*s2 - bind_BidT_Bcl2_kr*s3",
    "bind_BaxA_Bcl2_kf*s1*s2 - bind_BaxA_Bcl2_kr*s4",
    "0.25*s1**4*spontaneous_pore_BaxA_to_Bax4_kf - s5*spontaneous_pore_BaxA_to_Bax4_kr",
];

static CHEN2007_FEBS_DIRECT_SPECIES: &[&str] = &[
    "Bid(bf=None, state=T)",
    "Bad(bf=None, state=M, serine=U)",
    "Bax(bf=None, s1=None, s2=None, state=C)",
    "Bcl2(bf=None)",
    "Bax(bf=None, s1=None, s2=None, state=A)",
    "Bcl2(bf=1) % Bid(bf=1, state=T)",
    "Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)",
    "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=3, s2=1, state=A) % Bax(bf=None, s1=4, s2=3, state=A) % Bax(bf=None, s1=2, s2=4, state=A)",
];

static CHEN2007_FEBS_DIRECT_ODES: &[&str] = &[
    "-bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s5",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s6",
    "-one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 + reverse_BaxA_to_BaxC_k*s4",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s6 - bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s5",
    "one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 - reverse_BaxA_to_BaxC_k*s4 - 1.0*s4**4*spontaneous_pore_BaxA_to_Bax4_kf + 4*s7*spontaneous_pore_BaxA_to_Bax4_kr",
    "bind_BidT_Bcl2_kf*s0*s3 - bind_BidT_Bcl2_kr*s5",
    "bind_BadM_Bcl2_kf*s1*s3 - bind_BadM_Bcl2_kr*s6",
    "0.25*s4**4*spontaneous_pore_BaxA_to_Bax4_kf - s7*spontaneous_pore_BaxA_to_Bax4_kr",
];

static CUI2008_DIRECT_SPECIES: &[&str] = &[
    "Bid(bf=None, state=T)",
    "Bad(bf=None, state=M, serine=U)",
    "Bax(bf=None, s1=None, s2=None, state=C)",
    "Bcl2(bf=None)",
    "__source()",
    "Bax(bf=None, s1=None, s2=None, state=A)",
    "Bcl2(bf=1) % Bid(bf=1, state=T)",
    "Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)",
    "__sink()",
    "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=2, s2=1, state=A)",
];

static CUI2008_DIRECT_ODES: &[&str] = &[
    "-bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s6 - degrade_BidT_k*s0 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 + s4*synthesize_BidT_k",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s7 - degrade_BadMU_k*s1 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 + s4*synthesize_BadMU_k",
    "-degrade_BaxC_k*s2 - one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 + reverse_BaxA_to_BaxC_k*s5 + s4*synthesize_BaxC_k",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s7 - bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s6 - degrade_Bcl2_k*s3 + s4*synthesize_Bcl2_k",
    "0",
    "-degrade_BaxA_k*s5 - 1.0*dimerize_Bax_kf*s5**2 + 2*dimerize_Bax_kr*s9 + one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 - reverse_BaxA_to_BaxC_k*s5",
    "bind_BidT_Bcl2_kf*s0*s3 - bind_BidT_Bcl2_kr*s6 - degrade_BidTBcl2_k*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7",
    "bind_BadM_Bcl2_kf*s1*s3 - bind_BadM_Bcl2_kr*s7 - degrade_BadBcl2_k*s7 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7",
    "degrade_BadBcl2_k*s7 + degrade_BadMU_k*s1 + degrade_BaxA_k*s5 + degrade_BaxBax_k*s9 + degrade_BaxC_k*s2 + degrade_Bcl2_k*s3 + degrade_BidTBcl2_k*s6 + degrade_BidT_k*s0",
    "-degrade_BaxBax_k*s9 + 0.5*dimerize_Bax_kf*s5**2 - dimerize_Bax_kr*s9",
];

static CUI2008_DIRECT1_SPECIES: &[&str] = &[
    "Bid(bf=None, state=T)",
    "Bad(bf=None, state=M, serine=U)",
    "Bax(bf=None, s1=None, s2=None, state=C)",
    "Bcl2(bf=None)",
    "__source()",
    "Bax(bf=None, s1=None, s2=None, state=A)",
    "Bcl2(bf=1) % Bid(bf=1, state=T)",
    "Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)",
    "__sink()",
    "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=2, s2=1, state=A)",
    "Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)",
];

static CUI2008_DIRECT1_ODES: &[&str] = &[
    "-bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s6 - degrade_BidT_k*s0 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10 + s4*synthesize_BidT_k",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s7 - degrade_BadMU_k*s1 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 + s4*synthesize_BadMU_k",
    "-degrade_BaxC_k*s2 - one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 + reverse_BaxA_to_BaxC_k*s5 + s4*synthesize_BaxC_k",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s7 - bind_BaxA_Bcl2_kf*s3*s5 + bind_BaxA_Bcl2_kr*s10 - bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s6 - degrade_Bcl2_k*s3 + s4*synthesize_Bcl2_k",
    "0",
    "-bind_BaxA_Bcl2_kf*s3*s5 + bind_BaxA_Bcl2_kr*s10 - degrade_BaxA_k*s5 - 1.0*dimerize_Bax_kf*s5**2 + 2*dimerize_Bax_kr*s9 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10 + one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 - reverse_BaxA_to_BaxC_k*s5",
    "bind_BidT_Bcl2_kf*s0*s3 - bind_BidT_Bcl2_kr*s6 - degrade_BidTBcl2_k*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10",
    "bind_BadM_Bcl2_kf*s1*s3 - bind_BadM_Bcl2_kr*s7 - degrade_BadBcl2_k*s7 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7",
    "degrade_BadBcl2_k*s7 + degrade_BadMU_k*s1 + degrade_BaxA_k*s5 + degrade_BaxBax_k*s9 + degrade_BaxBcl2_k*s10 + degrade_BaxC_k*s2 + degrade_Bcl2_k*s3 + degrade_BidTBcl2_k*s6 + degrade_BidT_k*s0",
    "-degrade_BaxBax_k*s9 + 0.5*dimerize_Bax_kf*s5**2 - dimerize_Bax_kr*s9",
    "bind_BaxA_Bcl2_kf*s3*s5 - bind_BaxA_Bcl2_kr*s10 - degrade_BaxBcl2_k*s10 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10",
];

static CUI2008_DIRECT2_ODES: &[&str] = &[
    "-bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s6 - degrade_BidT_k*s0 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10 + s4*synthesize_BidT_k",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s7 - degrade_BadMU_k*s1 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 + s4*synthesize_BadMU_k",
    "-Bax_autoactivation_dimerization_k*s2*s5 - degrade_BaxC_k*s2 - one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 + reverse_BaxA_to_BaxC_k*s5 + s4*synthesize_BaxC_k",
    "-bind_BadM_Bcl2_kf*s1*s3 + bind_BadM_Bcl2_kr*s7 - bind_BaxA_Bcl2_kf*s3*s5 + bind_BaxA_Bcl2_kr*s10 - bind_BidT_Bcl2_kf*s0*s3 + bind_BidT_Bcl2_kr*s6 - degrade_Bcl2_k*s3 + s4*synthesize_Bcl2_k",
    "0",
    "-Bax_autoactivation_dimerization_k*s2*s5 - bind_BaxA_Bcl2_kf*s3*s5 + bind_BaxA_Bcl2_kr*s10 - degrade_BaxA_k*s5 - 1.0*dimerize_Bax_kf*s5**2 + 2*dimerize_Bax_kr*s9 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10 + one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s2 - reverse_BaxA_to_BaxC_k*s5",
    "bind_BidT_Bcl2_kf*s0*s3 - bind_BidT_Bcl2_kr*s6 - degrade_BidTBcl2_k*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10",
    "bind_BadM_Bcl2_kf*s1*s3 - bind_BadM_Bcl2_kr*s7 - degrade_BadBcl2_k*s7 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kf*s1*s6 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_kr*s0*s7",
    "degrade_BadBcl2_k*s7 + degrade_BadMU_k*s1 + degrade_BaxA_k*s5 + degrade_BaxBax_k*s9 + degrade_BaxBcl2_k*s10 + degrade_BaxC_k*s2 + degrade_Bcl2_k*s3 + degrade_BidTBcl2_k*s6 + degrade_BidT_k*s0",
    "Bax_autoactivation_dimerization_k*s2*s5 - degrade_BaxBax_k*s9 + 0.5*dimerize_Bax_kf*s5**2 - dimerize_Bax_kr*s9",
    "bind_BaxA_Bcl2_kf*s3*s5 - bind_BaxA_Bcl2_kr*s10 - degrade_BaxBcl2_k*s10 - displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kf*s1*s10 + displace_BadM_BaxABcl2_to_BadMBcl2_BaxA_kr*s5*s7 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kf*s5*s6 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_kr*s0*s10",
];

static HOWELLS2011_SPECIES: &[&str] = &[
    "Bid(bf=None, state=T)",
    "Bax(bf=None, s1=None, s2=None, state=C)",
    "Bcl2(bf=None)",
    "Bad(bf=None, state=M, serine=U)",
    "Bax(bf=None, s1=None, s2=None, state=A)",
    "Bcl2(bf=1) % Bid(bf=1, state=T)",
    "Bad(bf=None, state=C, serine=U)",
    "Bad(bf=1, state=M, serine=U) % Bcl2(bf=1)",
    "Bad(bf=None, state=C, serine=P)",
    "Bax(bf=1, s1=None, s2=None, state=A) % Bcl2(bf=1)",
    "Bax(bf=None, s1=1, s2=2, state=A) % Bax(bf=None, s1=3, s2=1, state=A) % Bax(bf=None, s1=4, s2=3, state=A) % Bax(bf=None, s1=2, s2=4, state=A)",
    "Bad(bf=None, state=C, serine=B)",
];

static HOWELLS2011_ODES: &[&str] = &[
    "-bind_BidT_Bcl2_kf*s0*s2 + bind_BidT_Bcl2_kr*s5 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_k*s3*s5 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s4*s5",
    "-one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s1 + reverse_BaxA_to_BaxC_k*s4",
    "-bind_BadM_Bcl2_kf*s2*s3 + bind_BadM_Bcl2_kr*s7 - bind_BaxA_Bcl2_kf*s2*s4 + bind_BaxA_Bcl2_kr*s9 - bind_BidT_Bcl2_kf*s0*s2 + bind_BidT_Bcl2_kr*s5 + phosphorylate_Bad_k2*s7",
    "-bind_BadM_Bcl2_kf*s2*s3 + bind_BadM_Bcl2_kr*s7 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_k*s3*s5 + equilibrate_BadCU_to_BadMU_kf*s6 - equilibrate_BadCU_to_BadMU_kr*s3 - phosphorylate_Bad_k1*s3",
    "-bind_BaxA_Bcl2_kf*s2*s4 + bind_BaxA_Bcl2_kr*s9 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s4*s5 + one_step_BidT_BaxC_to_BidT_BaxA_kf*s0*s1 - reverse_BaxA_to_BaxC_k*s4 + 4*s10*spontaneous_pore_BaxA_to_Bax4_kr - 1.0*s4**4*spontaneous_pore_BaxA_to_Bax4_kf",
    "bind_BidT_Bcl2_kf*s0*s2 - bind_BidT_Bcl2_kr*s5 - displace_BadM_BidTBcl2_to_BadMBcl2_BidT_k*s3*s5 - displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s4*s5",
    "-equilibrate_BadCU_to_BadMU_kf*s6 + equilibrate_BadCU_to_BadMU_kr*s3 - phosphorylate_Bad_k1*s6 + release_BadC1433_to_BadCU_k*s11",
    "bind_BadM_Bcl2_kf*s2*s3 - bind_BadM_Bcl2_kr*s7 + displace_BadM_BidTBcl2_to_BadMBcl2_BidT_k*s3*s5 - phosphorylate_Bad_k2*s7",
    "phosphorylate_Bad_k1*s3 + phosphorylate_Bad_k1*s6 + phosphorylate_Bad_k2*s7 - s8*sequester_BadCP_to_BadC1433_k",
    "bind_BaxA_Bcl2_kf*s2*s4 - bind_BaxA_Bcl2_kr*s9 + displace_BaxA_BidTBcl2_to_BaxABcl2_BidT_k*s4*s5",
    "0.25*s4**4*spontaneous_pore_BaxA_to_Bax4_kf - s10*spontaneous_pore_BaxA_to_Bax4_kr",
    "-release_BadC1433_to_BadCU_k*s11 + s8*sequester_BadCP_to_BadC1433_k",
];

lazy_static! {
    static ref EXPANSIONS: HashMap<&'static str, Expansion> = {
        let mut map = HashMap::new();
        map.insert(
            "chen2007BiophysJ",
            Expansion {
                species: CHEN2007_BIOPHYS_J_SPECIES,
                odes: CHEN2007_BIOPHYS_J_ODES,
            },
        );
        map.insert(
            "chen2007FEBS_indirect",
            Expansion {
                species: CHEN2007_FEBS_INDIRECT_SPECIES,
                odes: CHEN2007_FEBS_INDIRECT_ODES,
            },
        );
        map.insert(
            "chen2007FEBS_direct",
            Expansion {
                species: CHEN2007_FEBS_DIRECT_SPECIES,
                odes: CHEN2007_FEBS_DIRECT_ODES,
            },
        );
        map.insert(
            "cui2008_direct",
            Expansion {
                species: CUI2008_DIRECT_SPECIES,
                odes: CUI2008_DIRECT_ODES,
            },
        );
        map.insert(
            "cui2008_direct1",
            Expansion {
                species: CUI2008_DIRECT1_SPECIES,
                odes: CUI2008_DIRECT1_ODES,
            },
        );
        map.insert(
            "cui2008_direct2",
            Expansion {
                species: CUI2008_DIRECT1_SPECIES,
                odes: CUI2008_DIRECT2_ODES,
            },
        );
        map.insert(
            "howells2011",
            Expansion {
                species: HOWELLS2011_SPECIES,
                odes: HOWELLS2011_ODES,
            },
        );
        map
    };
}

/// Serves the reaction networks bundled with the crate.
///
/// Implements [NetworkCompiler] by looking the model up by name and
/// assembling its stored expansion against the model's own monomers,
/// parameters, and initial conditions, so parameter overrides applied to
/// the model flow into the compiled network.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledNetworks;

impl BundledNetworks {
    /// Names of the models an expansion is available for, sorted.
    pub fn models(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = EXPANSIONS.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl NetworkCompiler for BundledNetworks {
    fn compile(&self, model: &Model) -> Result<ReactionNetwork, NetworkError> {
        let expansion = EXPANSIONS
            .get(model.name())
            .ok_or_else(|| NetworkError::UnknownModel(model.name().to_string()))?;
        ReactionNetwork::from_expansion(model, expansion.species, expansion.odes)
    }
}
