// #![forbid(unsafe_code)]
// #![deny(warnings)]

#[macro_use]
extern crate log;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use xcallure::configuration::command_line::{LogLevel, Opt};
use xcallure::{AllureResultsWriter, Reader, Settings, XcodeResultsReader};

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialize logging {}", e);
        exit(1);
    }

    let mut settings = match Settings::from(options.config) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration {}", e);
            exit(1);
        }
    };
    if let Some(output) = options.output {
        settings.output = output;
    }
    debug!("Initiated configuration {:#?}", settings);

    let mut writer = AllureResultsWriter::new(settings.output.clone());
    let reader = XcodeResultsReader::default();
    for directory in &options.directories {
        info!("Reading results from {}", directory.display());
        reader.read_results(&settings, &mut writer, directory);
    }
    info!("Results written to {}", writer.output().display());
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
