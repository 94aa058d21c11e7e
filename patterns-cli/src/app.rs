//! Top-level run path: args to config, logging, demo dispatch

use crate::cli::Args;
use crate::config::{Config, DemoConfig};
use crate::demos;
use crate::error::CliError;
use crate::logging;
use patterns_log::{Logger, TracingLogger};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::rc::Rc;

/// Resolve config, install the subscriber, then run the chosen demo
///
/// Library prompts go to stdout.
pub fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(&config)?;
    execute(config, io::stdout())
}

/// Run the demo named by `config`, writing library prompts to `output`
pub fn execute<W: Write>(config: Config, output: W) -> Result<(), CliError> {
    match config.demo {
        DemoConfig::Vehicles => {
            let _span = tracing::info_span!("vehicles").entered();
            demos::run_vehicles(&TracingLogger)
        }
        DemoConfig::Library { input } => {
            let _span = tracing::info_span!("library").entered();
            let log: Rc<dyn Logger> = Rc::new(TracingLogger);
            match input {
                Some(path) => {
                    tracing::debug!("Reading commands from {}", path.display());
                    let reader = BufReader::new(File::open(&path)?);
                    demos::run_library(reader, output, log)
                }
                None => demos::run_library(io::stdin().lock(), output, log),
            }
        }
    }
}
