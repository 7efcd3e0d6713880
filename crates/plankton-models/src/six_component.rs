//! Six-compartment P-C-Z-N-A-D model after Popova et al. (2006),
//! "Mechanisms controlling primary and new production in a global
//! ecosystem model", Ocean Science 2, 249-266.
//!
//! Extends PZND with chlorophyll (a variable Chl:C ratio drives the P-I
//! slope) and ammonium (preferred over nitrate, which is inhibited by it).
//! Nitrification of ammonium runs only below the photic zone, with a
//! linear transition of [`PHOTIC_TRANSITION_LENGTH`] under its base.

use plankton_core::{FieldState, ModelError, ParameterSpec, Parameters};
use plankton_model::{BiologyModel, EvalContext, ParameterValidator};

use crate::fields::*;
use crate::kinetics::{holling_type3, light_limited_growth, michaelis_menten, photic_zone};
use crate::LOG_TARGET;

const NAME: &str = "PCZNDA";

/// Depth over which nitrification ramps up below the photic zone limit.
pub const PHOTIC_TRANSITION_LENGTH: f64 = 20.0;

/// Below this, phytoplankton or chlorophyll is treated as absent and the
/// Chl:C ratio falls back to `zeta`.
const THETA_FLOOR: f64 = 1e-7;

/// Required parameter keys.
pub const PARAMETERS: &[ParameterSpec; 22] = &[
    ParameterSpec::new(
        "alpha_c",
        "alpha is the chlorophyll-specific inital slope of P-I curve.",
    ),
    ParameterSpec::new(
        "beta_p",
        "beta is the assimilation efficiency of zooplankton for plankton.",
    ),
    ParameterSpec::new(
        "beta_d",
        "beta is the assimilation efficiency of zooplankton for detritus.",
    ),
    ParameterSpec::new("delta", "delta is the zooplankton excretion parameter."),
    ParameterSpec::new("gamma", "gamma is the zooplankton excretion parameter."),
    ParameterSpec::new(
        "epsilon",
        "epsilon is the grazing parameter relating the rate of prey item to prey density.",
    ),
    ParameterSpec::new("g", "g is the zooplankton maximum growth rate."),
    ParameterSpec::new("k_A", "k_A is the half-saturation constant for ammonium."),
    ParameterSpec::new(
        "k_p",
        "k_p is the half-saturation of the quadratic phytoplankton mortality.",
    ),
    ParameterSpec::new(
        "k_z",
        "k_z is the half-saturation of the cubic zooplankton mortality.",
    ),
    ParameterSpec::new("k_N", "k_N is the half-saturation constant for nutrient."),
    ParameterSpec::new("mu_P", "mu_P is the phytoplankton mortality rate."),
    ParameterSpec::new("mu_Z", "mu_Z is the zooplankton mortality rate."),
    ParameterSpec::new("mu_D", "mu_D is the detritus remineralisation rate."),
    ParameterSpec::new(
        "psi",
        "psi is the strength of ammonium inibition of nitrate uptake.",
    ),
    ParameterSpec::new(
        "p_P",
        "p_P is the relative grazing preference of zooplankton for phytoplankton.",
    ),
    ParameterSpec::new("v", "v is the maximum phytoplankton growth rate."),
    ParameterSpec::new("theta_m", "theta_m is the maximum Chlorophyll to C ratio."),
    ParameterSpec::new(
        "zeta",
        "zeta is the conversion factor from gC to mmolN on C:N ratio of 6.5.",
    ),
    ParameterSpec::new(
        "lambda_bio",
        "lambda_bio is rate which plankton turn to detritus below photic zone.",
    ),
    ParameterSpec::new("lambda_A", "lambda_A nitrification rate below photic zone."),
    ParameterSpec::new(
        "photic_zone_limit",
        "photic_zone_limit defines the depth of the base of the photic zone.",
    ),
];

const VALIDATOR: ParameterValidator<22> = ParameterValidator::new(NAME, PARAMETERS);

const READS: &[&str] = &[
    PHYTOPLANKTON,
    CHLOROPHYLL,
    ZOOPLANKTON,
    NUTRIENT,
    AMMONIUM,
    DETRITUS,
    PAR,
    ITERATED_PHYTOPLANKTON,
    ITERATED_CHLOROPHYLL,
    ITERATED_ZOOPLANKTON,
    ITERATED_NUTRIENT,
    ITERATED_AMMONIUM,
    ITERATED_DETRITUS,
    NUTRIENT_ABSORPTION,
];

const WRITES: &[&str] = &[
    PHYTOPLANKTON_SOURCE,
    CHLOROPHYLL_SOURCE,
    ZOOPLANKTON_SOURCE,
    NUTRIENT_SOURCE,
    AMMONIUM_SOURCE,
    DETRITUS_SOURCE,
];

/// Validated six-component coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SixComponentParameters {
    /// Chlorophyll-specific initial slope of the P-I curve.
    pub alpha_c: f64,
    /// Assimilation efficiency on phytoplankton.
    pub beta_p: f64,
    /// Assimilation efficiency on detritus.
    pub beta_d: f64,
    /// Fraction of assimilated food kept as zooplankton biomass.
    pub delta: f64,
    /// Fraction of zooplankton mortality routed to detritus.
    pub gamma: f64,
    /// gC to mmolN conversion.
    pub zeta: f64,
    /// Grazing half-saturation.
    pub epsilon: f64,
    /// Ammonium inhibition of nitrate uptake.
    pub psi: f64,
    /// Maximum grazing rate.
    pub g: f64,
    /// Nitrate half-saturation.
    pub k_n: f64,
    /// Ammonium half-saturation.
    pub k_a: f64,
    /// Phytoplankton mortality half-saturation.
    pub k_p: f64,
    /// Zooplankton mortality half-saturation.
    pub k_z: f64,
    /// Maximum phytoplankton growth rate.
    pub v: f64,
    /// Phytoplankton mortality rate.
    pub mu_p: f64,
    /// Zooplankton mortality rate.
    pub mu_z: f64,
    /// Detritus remineralisation rate.
    pub mu_d: f64,
    /// Grazing preference for phytoplankton.
    pub p_p: f64,
    /// Maximum Chl:C ratio.
    pub theta_m: f64,
    /// Linear plankton loss to detritus.
    pub lambda_bio: f64,
    /// Nitrification rate below the photic zone.
    pub lambda_a: f64,
    /// Depth of the base of the photic zone.
    pub photic_zone_limit: f64,
}

impl SixComponentParameters {
    /// Validate `params` and extract the coefficients.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingParameter`] listing every absent key.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ModelError> {
        let [
            alpha_c,
            beta_p,
            beta_d,
            delta,
            gamma,
            epsilon,
            g,
            k_a,
            k_p,
            k_z,
            k_n,
            mu_p,
            mu_z,
            mu_d,
            psi,
            p_p,
            v,
            theta_m,
            zeta,
            lambda_bio,
            lambda_a,
            photic_zone_limit,
        ] = VALIDATOR.require(params)?;
        Ok(Self {
            alpha_c,
            beta_p,
            beta_d,
            delta,
            gamma,
            zeta,
            epsilon,
            psi,
            g,
            k_n,
            k_a,
            k_p,
            k_z,
            v,
            mu_p,
            mu_z,
            mu_d,
            p_p,
            theta_m,
            lambda_bio,
            lambda_a,
            photic_zone_limit,
        })
    }
}

/// Working values at one node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SixComponentNode {
    /// Phytoplankton.
    pub p: f64,
    /// Chlorophyll.
    pub c: f64,
    /// Zooplankton.
    pub z: f64,
    /// Nitrate.
    pub n: f64,
    /// Ammonium.
    pub a: f64,
    /// Detritus.
    pub d: f64,
    /// Irradiance.
    pub i: f64,
    /// Depth, positive.
    pub depth: f64,
}

/// Source terms and intermediate fluxes at one node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SixComponentRates {
    /// Chl:C ratio used at this node.
    pub theta: f64,
    /// Primary production.
    pub primary_production: f64,
    /// Grazing on phytoplankton.
    pub grazing_p: f64,
    /// Grazing on detritus.
    pub grazing_d: f64,
    /// Nitrification.
    pub nitrification: f64,
    /// Phytoplankton source.
    pub p_source: f64,
    /// Chlorophyll source.
    pub c_source: f64,
    /// Zooplankton source.
    pub z_source: f64,
    /// Nitrate source.
    pub n_source: f64,
    /// Ammonium source.
    pub a_source: f64,
    /// Detritus source.
    pub d_source: f64,
}

/// The six-component model bound to its coefficients.
#[derive(Clone, Debug)]
pub struct SixComponent {
    config: SixComponentParameters,
}

impl SixComponent {
    /// Bind already-validated coefficients.
    pub fn new(config: SixComponentParameters) -> Self {
        Self { config }
    }

    /// Validate `params` and bind them.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ModelError> {
        SixComponentParameters::from_parameters(params).map(Self::new)
    }

    /// The bound coefficients.
    pub fn config(&self) -> &SixComponentParameters {
        &self.config
    }

    /// Source terms at one node.
    pub fn rates(&self, node: SixComponentNode) -> SixComponentRates {
        let k = &self.config;
        let SixComponentNode {
            p,
            c,
            z,
            n,
            a,
            d,
            i,
            depth,
        } = node;

        let theta = if p < THETA_FLOOR || c < THETA_FLOOR {
            k.zeta
        } else {
            c / p * k.zeta
        };
        let alpha = k.alpha_c * theta;

        let j = light_limited_growth(k.v, alpha, i);
        let q_n = n * (-k.psi * a).exp() / (k.k_n + n);
        let q_a = michaelis_menten(a, k.k_a);
        let uptake = q_n + q_a;

        // Chlorophyll synthesis scaling.
        let r_p = (k.theta_m / theta) * uptake * k.v / (k.v * k.v + alpha * alpha * i * i).sqrt();
        let x_p = j * uptake * p;

        let (g_p, g_d) = holling_type3(k.g, k.epsilon, k.p_p, p, d, z);
        let assimilated = k.beta_p * g_p + k.beta_d * g_d;

        let de_p = k.mu_p * p * p / (p + k.k_p) + k.lambda_bio * p;
        let de_z = k.mu_z * z * z * z / (z + k.k_z) + k.lambda_bio * z;
        let de_d = k.mu_d * d + k.lambda_bio * p + k.lambda_bio * z;
        let de_a = k.lambda_a
            * a
            * (1.0 - photic_zone(depth, k.photic_zone_limit, PHOTIC_TRANSITION_LENGTH));

        SixComponentRates {
            theta,
            primary_production: x_p,
            grazing_p: g_p,
            grazing_d: g_d,
            nitrification: de_a,
            p_source: x_p - g_p - de_p,
            c_source: (r_p * x_p + (-g_p - de_p)) * theta / k.zeta,
            z_source: k.delta * assimilated - de_z,
            n_source: -j * p * q_n + de_a,
            a_source: -j * p * q_a + de_d + (1.0 - k.delta) * assimilated + (1.0 - k.gamma) * de_z
                - de_a,
            d_source: -de_d + de_p + k.gamma * de_z + (1.0 - k.beta_p) * g_p - k.beta_d * g_d,
        }
    }
}

impl BiologyModel for SixComponent {
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
        let depth = ctx.depths(COORDINATE)?;
        ctx.prepare_outputs(WRITES, DIAGNOSTICS)?;

        let p = ctx.clamped_midpoints(PHYTOPLANKTON, ITERATED_PHYTOPLANKTON)?;
        let c = ctx.clamped_midpoints(CHLOROPHYLL, ITERATED_CHLOROPHYLL)?;
        let z = ctx.clamped_midpoints(ZOOPLANKTON, ITERATED_ZOOPLANKTON)?;
        let n = ctx.clamped_midpoints(NUTRIENT, ITERATED_NUTRIENT)?;
        let a = ctx.clamped_midpoints(AMMONIUM, ITERATED_AMMONIUM)?;
        let d = ctx.clamped_midpoints(DETRITUS, ITERATED_DETRITUS)?;
        let i = ctx.clamped(PAR)?;

        let rates: Vec<SixComponentRates> = (0..ctx.node_count())
            .map(|k| {
                self.rates(SixComponentNode {
                    p: p[k],
                    c: c[k],
                    z: z[k],
                    n: n[k],
                    a: a[k],
                    d: d[k],
                    i: i[k],
                    depth: depth[k],
                })
            })
            .collect();

        ctx.fill_output(PHYTOPLANKTON_SOURCE, |k| rates[k].p_source)?;
        ctx.fill_output(CHLOROPHYLL_SOURCE, |k| rates[k].c_source)?;
        ctx.fill_output(ZOOPLANKTON_SOURCE, |k| rates[k].z_source)?;
        ctx.fill_output(NUTRIENT_SOURCE, |k| rates[k].n_source)?;
        ctx.fill_output(AMMONIUM_SOURCE, |k| rates[k].a_source)?;
        ctx.fill_output(DETRITUS_SOURCE, |k| rates[k].d_source)?;
        ctx.fill_diagnostic(PRIMARY_PRODUCTION, |k| rates[k].primary_production)?;
        ctx.fill_diagnostic(PHYTOPLANKTON_GRAZING, |k| rates[k].grazing_p)?;

        log::debug!(target: LOG_TARGET, "{NAME}: evaluated {} nodes", ctx.node_count());
        Ok(())
    }
}

/// Six-component source terms for every node of `state`.
///
/// # Errors
///
/// [`ModelError::MissingParameter`] if any required key (including `k_p`)
/// is absent; field errors if the state lacks a declared field or
/// `Coordinate` has fewer than three components.
pub fn six_component(state: &mut dyn FieldState, parameters: &Parameters) -> Result<(), ModelError> {
    SixComponent::from_parameters(parameters)?.evaluate(state)
}
