use clap::Parser;
use schemtile::cli::{Args, ConvertConfig};
use schemtile::convert;
use schemtile_logger::{
    log, set_min_severity,
    LogSeverity::{Debug, Fatal, Info},
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if args.verbose {
        set_min_severity(Debug);
    }

    log("schemtile init".to_string(), Info);
    let config = ConvertConfig::from(args);
    match convert::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log(e.to_string(), Fatal);
            ExitCode::FAILURE
        }
    }
}
