use std::io::Write;

use demo::{err::DispatchError, options::DemoOptions};

pub mod demo;
pub mod handler;
pub mod probe;
pub mod subject;
pub mod transcript;
pub mod visit;

/// Runs the demonstration and writes its transcript to `w`.
pub fn run<W: Write>(options: &DemoOptions, w: W) -> Result<(), DispatchError> {
    let transcript = demo::run(options);
    transcript.write_to(w)?;
    Ok(())
}

pub fn run_args<W: Write>(args: &[String], w: W) -> Result<(), DispatchError> {
    let options = demo::options::parse_from_args(args)?;
    run(&options, w)
}
