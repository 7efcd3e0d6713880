//! Clear-sky short-wave radiation at the sea surface.
//!
//! Astronomical estimate after Rosati & Miyakoda (1988) as used in MOM and
//! GOTM: top-of-atmosphere flux from the solar zenith angle, a fixed
//! atmospheric transmission for the direct beam, half of the scattered
//! remainder as diffuse flux, then Reed (1977) cloud correction and the
//! Payne (1972) sea-surface albedo.
//!
//! Only the day of year and the integer hour of the timestamp are used.
//! Timestamps are read as UTC; the hour angle is shifted by longitude.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Timelike, Utc};
use plankton_core::IrradianceError;

/// Solar constant, W/m².
pub const SOLAR_CONSTANT: f64 = 1350.0;

/// Atmospheric transmission coefficient.
const TAU: f64 = 0.7;

/// Water vapour and ozone absorption.
const AOZONE: f64 = 0.09;

/// Obliquity of the ecliptic, degrees.
const ECLIPTIC_OBLIQUITY: f64 = 23.439;

const DAYS_PER_YEAR: f64 = 365.0;

/// Payne (1972) albedo at each tabulated zenith angle.
const ALBEDO: [f64; 20] = [
    0.719, 0.656, 0.603, 0.480, 0.385, 0.300, 0.250, 0.193, 0.164, 0.131, 0.103, 0.084, 0.071,
    0.061, 0.054, 0.039, 0.036, 0.032, 0.031, 0.030,
];

/// Zenith angle breakpoints, degrees, descending.
const ZENITH: [f64; 20] = [
    90.0, 88.0, 86.0, 84.0, 82.0, 80.0, 78.0, 76.0, 74.0, 70.0, 66.0, 62.0, 58.0, 54.0, 50.0,
    40.0, 30.0, 20.0, 10.0, 0.0,
];

/// Width of each breakpoint interval.
const ZENITH_STEP: [f64; 19] = [
    2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 10.0, 10.0, 10.0, 10.0,
    10.0,
];

/// Solar declination in radians for a 1-based day of year.
///
/// Truncated Fourier series in the fractional year.
pub fn solar_declination(day: u32) -> f64 {
    let th0 = 2.0 * PI * f64::from(day) / DAYS_PER_YEAR;
    let th02 = 2.0 * th0;
    let th03 = 3.0 * th0;
    0.006918 - 0.399912 * th0.cos() + 0.070257 * th0.sin() - 0.006758 * th02.cos()
        + 0.000907 * th02.sin()
        - 0.002697 * th03.cos()
        + 0.001480 * th03.sin()
}

/// Cosine of the solar zenith angle, floored at zero when the sun is
/// below the horizon.
pub fn cos_zenith(day: u32, hour: u32, longitude_deg: f64, latitude_deg: f64) -> f64 {
    let declination = solar_declination(day);
    let latitude = latitude_deg.to_radians();
    let hour_angle = ((f64::from(hour) - 12.0) * 15.0).to_radians() + longitude_deg.to_radians();
    let coszen = latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * hour_angle.cos();
    coszen.max(0.0)
}

/// Sea-surface albedo for a zenith angle in degrees (Payne 1972).
///
/// Linear interpolation between tabulated breakpoints; angles outside
/// `[0, 90]` use the end intervals.
pub fn albedo(zenith_deg: f64) -> f64 {
    let index = if zenith_deg >= 74.0 {
        0.5 * (90.0 - zenith_deg)
    } else if zenith_deg >= 50.0 {
        0.23 * (74.0 - zenith_deg) + 8.0
    } else {
        0.10 * (50.0 - zenith_deg) + 14.0
    };
    // Overhead sun lands on the last breakpoint, which has no interval.
    let j = (index.max(0.0) as usize).min(ZENITH_STEP.len() - 1);
    let dzen = (ZENITH[j] - zenith_deg) / ZENITH_STEP[j];
    ALBEDO[j] + dzen * (ALBEDO[j + 1] - ALBEDO[j])
}

/// Solar noon altitude in degrees, from the simple declination
/// `obliquity * sin(2π(day - 81)/365)`.
fn noon_altitude_deg(day: u32, latitude_deg: f64) -> f64 {
    let dec = ECLIPTIC_OBLIQUITY.to_radians()
        * ((f64::from(day) - 81.0) / DAYS_PER_YEAR * 2.0 * PI).sin();
    let latitude = latitude_deg.to_radians();
    let sunbet = latitude.sin() * dec.sin() + latitude.cos() * dec.cos();
    sunbet.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Short-wave flux in W/m² at the sea surface.
///
/// `cloud` is the cloud fraction in `[0, 1]`. The result is never larger
/// than the clear-sky total and is zero at night.
pub fn short_wave_radiation<T: Datelike + Timelike>(
    timestamp: &T,
    longitude_deg: f64,
    latitude_deg: f64,
    cloud: f64,
) -> f64 {
    let day = timestamp.ordinal();
    let coszen = cos_zenith(day, timestamp.hour(), longitude_deg, latitude_deg);

    let attenuation = if coszen > 0.0 {
        TAU.powf(1.0 / coszen)
    } else {
        0.0
    };
    let qzer = coszen * SOLAR_CONSTANT;
    let qdir = qzer * attenuation;
    let qdiff = ((1.0 - AOZONE) * qzer - qdir) * 0.5;
    let qtot = qdir + qdiff;

    let sol_noon_alt = noon_altitude_deg(day, latitude_deg);
    let zenith = coszen.acos().to_degrees();

    let qshort = qtot * (1.0 - 0.62 * cloud + 0.0019 * sol_noon_alt) * (1.0 - albedo(zenith));
    qshort.min(qtot)
}

/// [`short_wave_radiation`] for an RFC 3339 timestamp such as
/// `2024-03-20T12:00:00Z`. Offsets are converted to UTC first.
///
/// # Errors
///
/// [`IrradianceError::MalformedTimestamp`] if `timestamp` does not parse.
pub fn short_wave_radiation_rfc3339(
    timestamp: &str,
    longitude_deg: f64,
    latitude_deg: f64,
    cloud: f64,
) -> Result<f64, IrradianceError> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|e| {
        IrradianceError::MalformedTimestamp {
            input: timestamp.to_string(),
            reason: e.to_string(),
        }
    })?;
    let utc = parsed.with_timezone(&Utc);
    Ok(short_wave_radiation(&utc, longitude_deg, latitude_deg, cloud))
}
