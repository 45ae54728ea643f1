//! Order-of-magnitude Planck and cliche scales.
//!
//! The Planck length and time follow from the fundamental constants alone, the cliche scales
//! (Hubble radius, de Sitter entropy, collapse temperatures) additionally depend on the
//! present-day Hubble constant H0 in km s^-1 Mpc^-1.

pub use errors::ScaleError;
pub use report::{Report, CLICHE_TIME_SYMBOLIC};
pub use scales::{
    cliche_hot_temperature, cliche_length, cliche_time_log10_seconds,
    cliche_very_hot_temperature, collapse_temperature, de_sitter_entropy, hubble_si,
    planck_length, planck_temperature, planck_time, Scales,
};

mod errors;
pub mod physical_constants;
mod report;
mod scales;
