//! Four-compartment phytoplankton-zooplankton-nutrient-detritus model.
//!
//! Phytoplankton take up nutrient under light and nutrient limitation,
//! zooplankton graze on phytoplankton and detritus (Holling type III with
//! a shared denominator), both die into detritus, and detritus
//! remineralises back to nutrient.

use plankton_core::{FieldState, ModelError, ParameterSpec, Parameters};
use plankton_model::{BiologyModel, EvalContext, ParameterValidator};

use crate::fields::*;
use crate::kinetics::{holling_type3, light_limited_growth, michaelis_menten};
use crate::LOG_TARGET;

const NAME: &str = "PZND";

/// Half-saturation of the quadratic phytoplankton mortality.
const PHYTOPLANKTON_MORTALITY_HALF_SATURATION: f64 = 0.2;
/// Half-saturation of the cubic zooplankton mortality.
const ZOOPLANKTON_MORTALITY_HALF_SATURATION: f64 = 3.0;

/// Required parameter keys.
pub const PARAMETERS: &[ParameterSpec; 11] = &[
    ParameterSpec::new("alpha", "alpha is this initial slope of the P-I curve."),
    ParameterSpec::new("beta", "beta is the assimilation efficiency of zooplankton."),
    ParameterSpec::new("gamma", "gamma is the zooplankton excretion parameter."),
    ParameterSpec::new("g", "g is the zooplankton maximum growth rate."),
    ParameterSpec::new("k_N", "k_N is the half-saturation constant for nutrient."),
    ParameterSpec::new("k", "k is the zooplankton grazing parameter."),
    ParameterSpec::new("mu_P", "mu_P is the phytoplankton mortality rate."),
    ParameterSpec::new("mu_Z", "mu_Z is the zooplankton mortality rate."),
    ParameterSpec::new("mu_D", "mu_D is the detritus remineralisation rate."),
    ParameterSpec::new(
        "p_P",
        "p_P is the relative grazing preference of zooplankton for phytoplankton.",
    ),
    ParameterSpec::new("v", "v is the maximum phytoplankton growth rate."),
];

const VALIDATOR: ParameterValidator<11> = ParameterValidator::new(NAME, PARAMETERS);

const READS: &[&str] = &[
    PHYTOPLANKTON,
    ZOOPLANKTON,
    NUTRIENT,
    DETRITUS,
    PAR,
    ITERATED_PHYTOPLANKTON,
    ITERATED_ZOOPLANKTON,
    ITERATED_NUTRIENT,
    ITERATED_DETRITUS,
    NUTRIENT_ABSORPTION,
];

const WRITES: &[&str] = &[
    PHYTOPLANKTON_SOURCE,
    ZOOPLANKTON_SOURCE,
    NUTRIENT_SOURCE,
    DETRITUS_SOURCE,
];

/// Validated PZND coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PzndParameters {
    /// Initial slope of the P-I curve.
    pub alpha: f64,
    /// Zooplankton assimilation efficiency.
    pub beta: f64,
    /// Fraction of assimilated food kept as zooplankton biomass.
    pub gamma: f64,
    /// Maximum zooplankton grazing rate.
    pub g: f64,
    /// Nutrient half-saturation.
    pub k_n: f64,
    /// Grazing half-saturation.
    pub k: f64,
    /// Maximum phytoplankton growth rate.
    pub v: f64,
    /// Phytoplankton mortality rate.
    pub mu_p: f64,
    /// Zooplankton mortality rate.
    pub mu_z: f64,
    /// Detritus remineralisation rate.
    pub mu_d: f64,
    /// Grazing preference for phytoplankton; detritus gets `1 - p_P`.
    pub p_p: f64,
}

impl PzndParameters {
    /// Validate `params` and extract the coefficients.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingParameter`] listing every absent key.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ModelError> {
        let [alpha, beta, gamma, g, k_n, k, mu_p, mu_z, mu_d, p_p, v] =
            VALIDATOR.require(params)?;
        Ok(Self {
            alpha,
            beta,
            gamma,
            g,
            k_n,
            k,
            v,
            mu_p,
            mu_z,
            mu_d,
            p_p,
        })
    }
}

/// Working values at one node: clamped midpoints and clamped irradiance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PzndNode {
    /// Phytoplankton.
    pub p: f64,
    /// Zooplankton.
    pub z: f64,
    /// Nutrient.
    pub n: f64,
    /// Detritus.
    pub d: f64,
    /// Irradiance.
    pub i: f64,
}

/// Source terms and intermediate fluxes at one node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PzndRates {
    /// Realised phytoplankton growth (primary production).
    pub growth: f64,
    /// Grazing on phytoplankton.
    pub grazing_p: f64,
    /// Grazing on detritus.
    pub grazing_d: f64,
    /// Phytoplankton source.
    pub p_source: f64,
    /// Zooplankton source.
    pub z_source: f64,
    /// Nutrient source.
    pub n_source: f64,
    /// Detritus source.
    pub d_source: f64,
}

/// The PZND model bound to its coefficients.
#[derive(Clone, Debug)]
pub struct Pznd {
    config: PzndParameters,
}

impl Pznd {
    /// Bind already-validated coefficients.
    pub fn new(config: PzndParameters) -> Self {
        Self { config }
    }

    /// Validate `params` and bind them.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ModelError> {
        PzndParameters::from_parameters(params).map(Self::new)
    }

    /// The bound coefficients.
    pub fn config(&self) -> &PzndParameters {
        &self.config
    }

    /// Source terms at one node.
    pub fn rates(&self, node: PzndNode) -> PzndRates {
        let c = &self.config;
        let PzndNode { p, z, n, d, i } = node;

        let j = light_limited_growth(c.v, c.alpha, i);
        let q = michaelis_menten(n, c.k_n);
        let r_p = j * p * q;

        let (g_p, g_d) = holling_type3(c.g, c.k * c.k, c.p_p, p, d, z);

        let de_p = c.mu_p * p * p / (p + PHYTOPLANKTON_MORTALITY_HALF_SATURATION);
        let de_z = c.mu_z * z * z * z / (z + ZOOPLANKTON_MORTALITY_HALF_SATURATION);
        let de_d = c.mu_d * d;

        PzndRates {
            growth: r_p,
            grazing_p: g_p,
            grazing_d: g_d,
            p_source: r_p - g_p - de_p,
            z_source: c.gamma * c.beta * (g_p + g_d) - de_z,
            n_source: -r_p + de_d + (1.0 - c.gamma) * c.beta * (g_p + g_d),
            d_source: -de_d + de_p + de_z + (1.0 - c.beta) * g_p - c.beta * g_d,
        }
    }
}

impl BiologyModel for Pznd {
    fn name(&self) -> &str {
        NAME
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    fn reads(&self) -> &'static [&'static str] {
        READS
    }

    fn vector_reads(&self) -> &'static [&'static str] {
        &[COORDINATE]
    }

    fn writes(&self) -> &'static [&'static str] {
        WRITES
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        DIAGNOSTICS
    }

    fn evaluate(&self, state: &mut dyn FieldState) -> Result<(), ModelError> {
        let mut ctx = EvalContext::new(state, NAME, PHYTOPLANKTON)?;
        ctx.check_reads(READS)?;
        // Positions are part of the field contract even though this model
        // has no depth dependence.
        ctx.vector(COORDINATE, 1)?;
        ctx.prepare_outputs(WRITES, DIAGNOSTICS)?;

        let p = ctx.clamped_midpoints(PHYTOPLANKTON, ITERATED_PHYTOPLANKTON)?;
        let z = ctx.clamped_midpoints(ZOOPLANKTON, ITERATED_ZOOPLANKTON)?;
        let n = ctx.clamped_midpoints(NUTRIENT, ITERATED_NUTRIENT)?;
        let d = ctx.clamped_midpoints(DETRITUS, ITERATED_DETRITUS)?;
        let i = ctx.clamped(PAR)?;

        let rates: Vec<PzndRates> = (0..ctx.node_count())
            .map(|k| {
                self.rates(PzndNode {
                    p: p[k],
                    z: z[k],
                    n: n[k],
                    d: d[k],
                    i: i[k],
                })
            })
            .collect();

        ctx.fill_output(PHYTOPLANKTON_SOURCE, |k| rates[k].p_source)?;
        ctx.fill_output(ZOOPLANKTON_SOURCE, |k| rates[k].z_source)?;
        ctx.fill_output(NUTRIENT_SOURCE, |k| rates[k].n_source)?;
        ctx.fill_output(DETRITUS_SOURCE, |k| rates[k].d_source)?;
        ctx.fill_diagnostic(PRIMARY_PRODUCTION, |k| rates[k].growth)?;
        ctx.fill_diagnostic(PHYTOPLANKTON_GRAZING, |k| rates[k].grazing_p)?;

        log::debug!(target: LOG_TARGET, "{NAME}: evaluated {} nodes", ctx.node_count());
        Ok(())
    }
}

/// PZND source terms for every node of `state`.
///
/// # Errors
///
/// [`ModelError::MissingParameter`] if any required key is absent; field
/// errors if the state lacks a declared field.
pub fn pznd(state: &mut dyn FieldState, parameters: &Parameters) -> Result<(), ModelError> {
    Pznd::from_parameters(parameters)?.evaluate(state)
}
