//! Rate laws shared by the NPZD models.

/// Light-limited growth rate (Smith 1936):
/// `v·alpha·I / sqrt(v² + alpha²·I²)`.
///
/// Zero in the dark, slope `alpha` at low light, saturating towards `v`.
pub fn light_limited_growth(v: f64, alpha: f64, irradiance: f64) -> f64 {
    v * alpha * irradiance / (v * v + alpha * alpha * irradiance * irradiance).sqrt()
}

/// Michaelis-Menten limitation `x / (k + x)`.
pub fn michaelis_menten(x: f64, half_saturation: f64) -> f64 {
    x / (half_saturation + x)
}

/// Holling type III grazing on phytoplankton and detritus with a shared
/// denominator `k_sq + p_P·P² + p_D·D²`, returning `(G_P, G_D)`.
pub fn holling_type3(
    g: f64,
    k_sq: f64,
    p_p: f64,
    phytoplankton: f64,
    detritus: f64,
    zooplankton: f64,
) -> (f64, f64) {
    let p_d = 1.0 - p_p;
    let p2 = phytoplankton * phytoplankton;
    let d2 = detritus * detritus;
    let denominator = k_sq + p_p * p2 + p_d * d2;
    (
        g * p_p * p2 * zooplankton / denominator,
        g * p_d * d2 * zooplankton / denominator,
    )
}

/// Fraction of a node inside the photic zone.
///
/// 1.0 above `limit`, ramping linearly to 0.0 over the next
/// `transition_length`, 0.0 below that. `depth` is taken as `abs(depth)`.
pub fn photic_zone(depth: f64, limit: f64, transition_length: f64) -> f64 {
    let depth = depth.abs();
    if depth < limit {
        1.0
    } else if depth < limit + transition_length {
        1.0 - (depth - limit) / transition_length
    } else {
        0.0
    }
}
