use clap::Parser;
use std::{
    error::Error,
    ffi::OsString,
    io::{self, Write},
};

use cliche_scales::{physical_constants::DEFAULT_HUBBLE_KM_S_MPC, Report, Scales};

#[derive(Parser, Debug)]
#[clap(version, about = "Compute Planck and Cliche scales for a given H0.")]
pub struct Cli {
    /// Hubble constant in km/s/Mpc
    #[clap(
        long = "H0",
        value_name = "H0",
        default_value_t = DEFAULT_HUBBLE_KM_S_MPC,
        allow_hyphen_values = true
    )]
    pub h0: f64,
}

impl Cli {
    /// Parses the command line, also accepting the single dash spelling `-H0`.
    fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(args.into_iter().map(|arg| normalize_arg(arg.into())))
    }
}

/// Rewrites `-H0` and `-H0=<value>` to their double dash form.
fn normalize_arg(arg: OsString) -> OsString {
    let single_dash = matches!(arg.to_str(), Some(s) if s == "-H0" || s.starts_with("-H0="));
    if !single_dash {
        return arg;
    }
    let mut long = OsString::from("-");
    long.push(arg);
    long
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // parse command line parameters
    let args = Cli::parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());
    log::debug!("Parsed command line: {:?}", args);

    let scales = Scales::compute(args.h0);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", Report::new(&scales))?;
    stdout.flush()?;

    Ok(())
}
