/*! @brief Speed of light in vacuum c (in m s^-1). */
pub const LIGHT_SPEED_IN_SI: f64 = 2.99792458e8;

/// @brief Newton gravity constant G (in m^3 kg^-1 s^-2).
pub const NEWTON_G_IN_SI: f64 = 6.67430e-11;

/// @brief Reduced Planck constant hbar (in J s).
pub const HBAR_IN_SI: f64 = 1.054571817e-34;

/// @brief Boltzmann constant k (in J K^-1).
pub const BOLTZMANN_K_IN_SI: f64 = 1.380649e-23;

/// @brief Kilometre (in m).
pub const KM_IN_SI: f64 = 1000.;

/// @brief Megaparsec (in m).
pub const MPC_IN_SI: f64 = 3.085677581e22;

/// @brief Default Hubble constant (in km s^-1 Mpc^-1).
pub const DEFAULT_HUBBLE_KM_S_MPC: f64 = 70.;

/// @brief Radiation constant a = pi^2 k^4 / (15 hbar^3 c^3) (in J m^-3 K^-4).
pub fn radiation_constant() -> f64 {
    std::f64::consts::PI.powi(2) * BOLTZMANN_K_IN_SI.powi(4)
        / (15. * HBAR_IN_SI.powi(3) * LIGHT_SPEED_IN_SI.powi(3))
}
