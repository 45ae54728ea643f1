//! Planck and cliche scales.
//!
//! Every quantity is a closed-form expression in the fundamental constants and, where needed,
//! the present-day Hubble constant `h0` in km s^-1 Mpc^-1. No input validation is performed on
//! `h0`: zero, negative or non-finite values simply propagate as IEEE infinities and NaNs.

use std::f64::consts::{LN_10, PI};

use crate::errors::ScaleError;
use crate::physical_constants::{
    radiation_constant, BOLTZMANN_K_IN_SI, HBAR_IN_SI, KM_IN_SI, LIGHT_SPEED_IN_SI, MPC_IN_SI,
    NEWTON_G_IN_SI,
};

/// Planck length l_P = sqrt(hbar G / c^3) (in m).
pub fn planck_length() -> f64 {
    (HBAR_IN_SI * NEWTON_G_IN_SI / LIGHT_SPEED_IN_SI.powi(3)).sqrt()
}

/// Planck time t_P = l_P / c (in s).
pub fn planck_time() -> f64 {
    planck_length() / LIGHT_SPEED_IN_SI
}

/// Planck temperature T_P = sqrt(hbar c^5 / (G k^2)) (in K).
pub fn planck_temperature() -> f64 {
    (HBAR_IN_SI * LIGHT_SPEED_IN_SI.powi(5) / (NEWTON_G_IN_SI * BOLTZMANN_K_IN_SI.powi(2))).sqrt()
}

/// Converts the Hubble constant from km s^-1 Mpc^-1 to s^-1.
pub fn hubble_si(h0: f64) -> f64 {
    h0 * KM_IN_SI / MPC_IN_SI
}

/// Cliche length l_R = c / H0, i.e. the Hubble radius (in m).
pub fn cliche_length(h0: f64) -> f64 {
    LIGHT_SPEED_IN_SI / hubble_si(h0)
}

/// Semiclassical de Sitter entropy S_dS = 3 pi c^3 / (G hbar Lambda) with Lambda = 3 H0^2 / c^2,
/// which reduces to pi c^5 / (G hbar H0^2). Roughly 1e122 for realistic cosmologies.
pub fn de_sitter_entropy(h0: f64) -> f64 {
    PI * LIGHT_SPEED_IN_SI.powi(5) / (NEWTON_G_IN_SI * HBAR_IN_SI * hubble_si(h0).powi(2))
}

/// log10 of the cliche time tau_R = exp(S_dS) t_P (in s).
///
/// tau_R itself overflows any floating point type, so only its logarithm is available:
/// log10(tau_R) = log10(t_P) + S_dS / ln(10).
pub fn cliche_time_log10_seconds(h0: f64) -> f64 {
    planck_time().log10() + de_sitter_entropy(h0) / LN_10
}

/// Temperature at which a region of size `length` (in m) filled with black body radiation
/// collapses into a black hole: T_BH(L) = [3 c^4 / (8 pi G a L^2)]^(1/4) (in K).
pub fn collapse_temperature(length: f64) -> Result<f64, ScaleError> {
    if !(length > 0.) {
        return Err(ScaleError::NonPositiveLength(length));
    }
    let t4 = 3. * LIGHT_SPEED_IN_SI.powi(4)
        / (8. * PI * NEWTON_G_IN_SI * radiation_constant() * length.powi(2));
    Ok(t4.powf(0.25))
}

/// Local "absolute hot": the collapse temperature at the Planck length.
pub fn cliche_hot_temperature() -> f64 {
    // l_P is a strictly positive constant
    collapse_temperature(planck_length()).unwrap_or(f64::NAN)
}

/// Cosmic "absolute hot": the collapse temperature at the Hubble radius.
pub fn cliche_very_hot_temperature(h0: f64) -> Result<f64, ScaleError> {
    collapse_temperature(cliche_length(h0))
}

/// All reference scales for a single value of the Hubble constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub h0: f64,
    pub planck_length: f64,
    pub planck_time: f64,
    pub planck_temperature: f64,
    pub cliche_length: f64,
    pub de_sitter_entropy: f64,
    pub cliche_hot_temperature: f64,
    pub cliche_very_hot_temperature: f64,
}

impl Scales {
    /// Computes every scale for `h0` (in km s^-1 Mpc^-1).
    ///
    /// Never fails: quantities that cannot be evaluated for the given `h0` are reported as NaN.
    pub fn compute(h0: f64) -> Self {
        if !h0.is_finite() || h0 <= 0. {
            log::warn!("Unphysical Hubble constant H0 = {h0} km/s/Mpc, derived scales may be inf or NaN");
        }

        let cliche_very_hot_temperature = cliche_very_hot_temperature(h0).unwrap_or_else(|err| {
            log::warn!("Cannot evaluate cliche-very-hot temperature: {err}");
            f64::NAN
        });

        let scales = Self {
            h0,
            planck_length: planck_length(),
            planck_time: planck_time(),
            planck_temperature: planck_temperature(),
            cliche_length: cliche_length(h0),
            de_sitter_entropy: de_sitter_entropy(h0),
            cliche_hot_temperature: cliche_hot_temperature(),
            cliche_very_hot_temperature,
        };
        log::debug!("Computed scales: {:?}", scales);
        scales
    }
}

impl Default for Scales {
    fn default() -> Self {
        Self::compute(crate::physical_constants::DEFAULT_HUBBLE_KM_S_MPC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_planck_scales() {
        assert_approx_eq!(f64, planck_length(), 1.616255e-35, epsilon = 1e-41);
        assert_approx_eq!(f64, planck_time(), 5.391246e-44, epsilon = 1e-50);
        assert_approx_eq!(f64, planck_temperature(), 1.416784e32, epsilon = 1e26);
        // Both definitions of the Planck time agree
        let t_p = (HBAR_IN_SI * NEWTON_G_IN_SI / LIGHT_SPEED_IN_SI.powi(5)).sqrt();
        assert_approx_eq!(f64, planck_time(), t_p, epsilon = 1e-56);
    }

    #[test]
    fn test_cliche_length() {
        assert_approx_eq!(f64, hubble_si(70.), 2.2685455e-18, epsilon = 1e-25);
        assert_approx_eq!(f64, cliche_length(70.), 1.3215184e26, epsilon = 1e19);
        assert_approx_eq!(f64, cliche_length(140.), 0.5 * cliche_length(70.), ulps = 2);
    }

    #[test]
    fn test_cliche_length_zero_hubble() {
        assert_eq!(cliche_length(0.), f64::INFINITY);
        assert!(cliche_length(-70.) < 0.);
        assert!(cliche_length(f64::NAN).is_nan());
    }

    #[test]
    fn test_de_sitter_entropy() {
        let s_ds = de_sitter_entropy(70.);
        assert!(s_ds > 1e122 && s_ds < 1e123);
        assert_approx_eq!(f64, s_ds, 2.1002767e122, epsilon = 1e115);
        let log10_tau = cliche_time_log10_seconds(70.);
        assert!(log10_tau.is_finite());
        assert_approx_eq!(f64, log10_tau, s_ds / LN_10, epsilon = 1e108);
    }

    #[test]
    fn test_collapse_temperature() {
        assert_eq!(
            collapse_temperature(0.),
            Err(ScaleError::NonPositiveLength(0.))
        );
        assert!(collapse_temperature(-1.).is_err());
        assert!(collapse_temperature(f64::NAN).is_err());
        assert_eq!(collapse_temperature(f64::INFINITY), Ok(0.));

        // T_BH scales as L^(-1/2)
        let t_1 = collapse_temperature(1.).unwrap();
        let t_4 = collapse_temperature(4.).unwrap();
        assert_approx_eq!(f64, t_1, 2. * t_4, epsilon = 1e3);
    }

    #[test]
    fn test_cliche_temperatures() {
        assert_approx_eq!(f64, cliche_hot_temperature(), 9.2463839e31, epsilon = 1e25);
        let very_hot = cliche_very_hot_temperature(70.).unwrap();
        assert_approx_eq!(f64, very_hot, 32.336295, epsilon = 1e-5);
        assert!(cliche_hot_temperature() > very_hot);
        assert!(cliche_very_hot_temperature(-70.).is_err());
    }

    #[test]
    fn test_scales_compute() {
        let scales = Scales::default();
        assert_eq!(scales.h0, 70.);
        assert_eq!(scales.cliche_length, cliche_length(70.));
        assert_eq!(scales.planck_length, Scales::compute(1.).planck_length);

        let scales = Scales::compute(-70.);
        assert!(scales.cliche_length < 0.);
        assert!(scales.cliche_very_hot_temperature.is_nan());

        let scales = Scales::compute(0.);
        assert!(scales.cliche_length.is_infinite());
        assert_eq!(scales.cliche_very_hot_temperature, 0.);
    }
}
