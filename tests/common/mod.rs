use std::process::{Command, Output};

/// Runs the compiled binary with the given arguments and logging silenced.
pub fn run_cliche_scales(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cliche-scales"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to launch cliche-scales")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Report is not valid UTF-8")
}
