//! Reusable parameter sets and pre-allocated states.
//!
//! Each `*_state` builder registers every input the corresponding model
//! reads (current and iterated, iterated equal to current), allocates every
//! source field, and optionally the two diagnostic fields.

use plankton_core::Parameters;

use crate::MockState;

/// Uniform per-node concentrations for state fixtures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Concentrations {
    pub phytoplankton: f64,
    pub zooplankton: f64,
    pub nutrient: f64,
    pub detritus: f64,
    pub chlorophyll: f64,
    pub ammonium: f64,
}

impl Default for Concentrations {
    fn default() -> Self {
        Self {
            phytoplankton: 0.5,
            zooplankton: 0.2,
            nutrient: 8.0,
            detritus: 0.3,
            chlorophyll: 0.01,
            ammonium: 0.4,
        }
    }
}

/// The textbook Lotka-Volterra set used in the worked example.
pub fn predator_prey_parameters() -> Parameters {
    [("alpha", 1.0), ("beta", 0.1), ("gamma", 1.0), ("delta", 0.1)]
        .into_iter()
        .collect()
}

/// A plausible mid-latitude PZND parameter set.
pub fn pznd_parameters() -> Parameters {
    [
        ("alpha", 0.015),
        ("beta", 0.75),
        ("gamma", 0.5),
        ("g", 1.0),
        ("k_N", 0.5),
        ("k", 0.5),
        ("v", 1.4),
        ("mu_P", 0.1),
        ("mu_Z", 0.2),
        ("mu_D", 0.05),
        ("p_P", 0.75),
    ]
    .into_iter()
    .collect()
}

/// A six-component parameter set after Popova et al. (2006).
pub fn six_component_parameters() -> Parameters {
    [
        ("alpha_c", 2.0),
        ("beta_p", 0.75),
        ("beta_d", 0.5),
        ("delta", 0.7),
        ("gamma", 0.5),
        ("zeta", 0.0128),
        ("epsilon", 0.75),
        ("psi", 2.9),
        ("g", 1.0),
        ("k_N", 0.5),
        ("k_A", 0.5),
        ("k_p", 0.2),
        ("k_z", 3.0),
        ("v", 1.0),
        ("mu_P", 0.05),
        ("mu_Z", 0.2),
        ("mu_D", 0.05),
        ("p_P", 0.75),
        ("theta_m", 0.05),
        ("lambda_bio", 0.05),
        ("lambda_A", 0.1),
        ("photic_zone_limit", 100.0),
    ]
    .into_iter()
    .collect()
}

fn set_pair(state: &mut MockState, name: &str, values: Vec<f64>) {
    state.set_scalar(&format!("Iterated{name}"), values.clone());
    state.set_scalar(name, values);
}

fn add_diagnostics(state: &mut MockState, node_count: usize) {
    state.add_output("PrimaryProduction", node_count);
    state.add_output("PhytoplanktonGrazing", node_count);
}

fn coordinates(depths: &[f64]) -> Vec<f64> {
    depths.iter().flat_map(|&d| [0.0, 0.0, -d]).collect()
}

/// Predator-prey state with per-node phytoplankton and zooplankton.
///
/// # Panics
///
/// Panics if `p` and `z` differ in length.
pub fn predator_prey_state(p: &[f64], z: &[f64]) -> MockState {
    assert_eq!(p.len(), z.len(), "phytoplankton and zooplankton lengths differ");
    let mut state = MockState::new();
    set_pair(&mut state, "Phytoplankton", p.to_vec());
    set_pair(&mut state, "Zooplankton", z.to_vec());
    state.add_output("PhytoplanktonSource", p.len());
    state.add_output("ZooplanktonSource", p.len());
    state
}

/// PZND state, one node per entry of `depths` (metres, positive down).
pub fn pznd_state(depths: &[f64], c: &Concentrations, par: f64, diagnostics: bool) -> MockState {
    let n = depths.len();
    let mut state = MockState::new();
    set_pair(&mut state, "Phytoplankton", vec![c.phytoplankton; n]);
    set_pair(&mut state, "Zooplankton", vec![c.zooplankton; n]);
    set_pair(&mut state, "Nutrient", vec![c.nutrient; n]);
    set_pair(&mut state, "Detritus", vec![c.detritus; n]);
    state.set_scalar("_PAR", vec![par; n]);
    state.set_scalar("NutrientAbsorption", vec![0.0; n]);
    state.set_vector("Coordinate", 3, coordinates(depths));
    for source in [
        "PhytoplanktonSource",
        "ZooplanktonSource",
        "NutrientSource",
        "DetritusSource",
    ] {
        state.add_output(source, n);
    }
    if diagnostics {
        add_diagnostics(&mut state, n);
    }
    state
}

/// Six-component state, one node per entry of `depths`.
pub fn six_component_state(
    depths: &[f64],
    c: &Concentrations,
    par: f64,
    diagnostics: bool,
) -> MockState {
    let n = depths.len();
    let mut state = pznd_state(depths, c, par, diagnostics);
    set_pair(&mut state, "Chlorophyll", vec![c.chlorophyll; n]);
    set_pair(&mut state, "Ammonium", vec![c.ammonium; n]);
    state.add_output("ChlorophyllSource", n);
    state.add_output("AmmoniumSource", n);
    state
}
