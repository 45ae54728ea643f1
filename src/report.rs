//! Human readable console report of the [`Scales`].

use std::fmt::Display;

use crate::scales::Scales;

/// Textual stand-in for tau_R, which overflows any floating point representation.
pub const CLICHE_TIME_SYMBOLIC: &str = "exp(S_dS) * t_P";

/// Formats [`Scales`] as a plain text report.
pub struct Report<'a> {
    scales: &'a Scales,
}

impl<'a> Report<'a> {
    pub fn new(scales: &'a Scales) -> Self {
        Self { scales }
    }
}

impl<'a> Display for Report<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scales = self.scales;

        writeln!(f, "=== Cliche Constants (order-of-magnitude) ===")?;
        writeln!(f)?;

        writeln!(f, "Input:")?;
        writeln!(f, "  H0            ~ {:.2} km/s/Mpc", scales.h0)?;
        writeln!(f)?;

        writeln!(f, "Planck scale:")?;
        writeln!(f, "  l_P (length)  ~ {:.3e} m", scales.planck_length)?;
        writeln!(f, "  t_P (time)    ~ {:.3e} s", scales.planck_time)?;
        writeln!(f)?;

        writeln!(f, "Cliche scale:")?;
        writeln!(
            f,
            "  l_R (length)  ~ {:.3e} m   (Cliche Length: c / H0)",
            scales.cliche_length
        )?;
        writeln!(f, "  tau_R (time)  ~ {}   (symbolic)", CLICHE_TIME_SYMBOLIC)?;
        writeln!(f)?;

        writeln!(f, "Temperature scales:")?;
        writeln!(f, "  T_P                 ~ {:.3e} K", scales.planck_temperature)?;
        writeln!(
            f,
            "  T_cliche-hot        ~ {:.3e} K   (local absolute hot)",
            scales.cliche_hot_temperature
        )?;
        writeln!(
            f,
            "  T_cliche-very-hot   ~ {:.3e} K   (cosmic absolute hot)",
            scales.cliche_very_hot_temperature
        )?;
        writeln!(f)?;

        writeln!(f, "Notes:")?;
        writeln!(f, "  - S_dS is the de Sitter entropy, often quoted as ~1e122.")?;
        writeln!(
            f,
            "  - For this H0, S_dS ~ {:.3e} (dimensionless).",
            scales.de_sitter_entropy
        )?;
        writeln!(f, "  - tau_R is printed symbolically because exp(1e122) is far beyond")?;
        write!(f, "    any reasonable numerical representation.")
    }
}
