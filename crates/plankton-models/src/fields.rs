//! Field names shared with the host solver.
//!
//! Names are case-sensitive. Every current field has an `Iterated…`
//! counterpart holding the solver's estimate for the end of the timestep.

/// Phytoplankton concentration.
pub const PHYTOPLANKTON: &str = "Phytoplankton";
/// Zooplankton concentration.
pub const ZOOPLANKTON: &str = "Zooplankton";
/// Nitrate (nutrient) concentration.
pub const NUTRIENT: &str = "Nutrient";
/// Detritus concentration.
pub const DETRITUS: &str = "Detritus";
/// Chlorophyll concentration.
pub const CHLOROPHYLL: &str = "Chlorophyll";
/// Ammonium concentration.
pub const AMMONIUM: &str = "Ammonium";
/// Photosynthetically active radiation. Current value only, never midpointed.
pub const PAR: &str = "_PAR";
/// Nutrient absorption. Must be present for the NPZD models; never written.
pub const NUTRIENT_ABSORPTION: &str = "NutrientAbsorption";
/// Node positions (vector field); depth is `abs` of the third component.
pub const COORDINATE: &str = "Coordinate";

/// End-of-step estimate of [`PHYTOPLANKTON`].
pub const ITERATED_PHYTOPLANKTON: &str = "IteratedPhytoplankton";
/// End-of-step estimate of [`ZOOPLANKTON`].
pub const ITERATED_ZOOPLANKTON: &str = "IteratedZooplankton";
/// End-of-step estimate of [`NUTRIENT`].
pub const ITERATED_NUTRIENT: &str = "IteratedNutrient";
/// End-of-step estimate of [`DETRITUS`].
pub const ITERATED_DETRITUS: &str = "IteratedDetritus";
/// End-of-step estimate of [`CHLOROPHYLL`].
pub const ITERATED_CHLOROPHYLL: &str = "IteratedChlorophyll";
/// End-of-step estimate of [`AMMONIUM`].
pub const ITERATED_AMMONIUM: &str = "IteratedAmmonium";

/// Rate of change of phytoplankton.
pub const PHYTOPLANKTON_SOURCE: &str = "PhytoplanktonSource";
/// Rate of change of zooplankton.
pub const ZOOPLANKTON_SOURCE: &str = "ZooplanktonSource";
/// Rate of change of nutrient.
pub const NUTRIENT_SOURCE: &str = "NutrientSource";
/// Rate of change of detritus.
pub const DETRITUS_SOURCE: &str = "DetritusSource";
/// Rate of change of chlorophyll.
pub const CHLOROPHYLL_SOURCE: &str = "ChlorophyllSource";
/// Rate of change of ammonium.
pub const AMMONIUM_SOURCE: &str = "AmmoniumSource";

/// Optional diagnostic: primary production.
pub const PRIMARY_PRODUCTION: &str = "PrimaryProduction";
/// Optional diagnostic: zooplankton grazing on phytoplankton.
pub const PHYTOPLANKTON_GRAZING: &str = "PhytoplanktonGrazing";

/// The two optional diagnostics, in write order.
pub const DIAGNOSTICS: &[&str] = &[PRIMARY_PRODUCTION, PHYTOPLANKTON_GRAZING];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterated_names_prefix_current_names() {
        for (current, iterated) in [
            (PHYTOPLANKTON, ITERATED_PHYTOPLANKTON),
            (ZOOPLANKTON, ITERATED_ZOOPLANKTON),
            (NUTRIENT, ITERATED_NUTRIENT),
            (DETRITUS, ITERATED_DETRITUS),
            (CHLOROPHYLL, ITERATED_CHLOROPHYLL),
            (AMMONIUM, ITERATED_AMMONIUM),
        ] {
            assert_eq!(iterated, format!("Iterated{current}"));
        }
    }

    #[test]
    fn source_names_suffix_current_names() {
        for (current, source) in [
            (PHYTOPLANKTON, PHYTOPLANKTON_SOURCE),
            (ZOOPLANKTON, ZOOPLANKTON_SOURCE),
            (NUTRIENT, NUTRIENT_SOURCE),
            (DETRITUS, DETRITUS_SOURCE),
            (CHLOROPHYLL, CHLOROPHYLL_SOURCE),
            (AMMONIUM, AMMONIUM_SOURCE),
        ] {
            assert_eq!(source, format!("{current}Source"));
        }
    }
}
