mod handlers;
pub mod parse;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub use parse::Cli;

use crate::core::error::ChartError;

pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| ChartError::Logger(e.to_string()))?;

    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot_file(&a),
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
