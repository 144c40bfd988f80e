mod logging;
mod output;
mod report;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use report::{DictPrint, Report};
use std::path::PathBuf;
use tracing::info;
use tsm_core::{Aggressiveness, MinimizerConfig};
use tsm_minimizer::Minimizer;

#[derive(Parser, Debug)]
#[command(name = "tasmota-minimizer")]
#[command(version, about = "Minimizes Tasmota scripts", long_about = None)]
struct Cli {
    /// Input script
    #[arg(required_unless_present = "info")]
    file: Option<PathBuf>,

    /// Output file (default: input name with a timestamp appended)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Aggressiveness of minimization [0-5]
    #[arg(short, long = "aggressivity", value_parser = clap::value_parser!(u8).range(0..=5))]
    aggressivity: Option<u8>,

    /// Print the rename dictionary: 1 = after statistics, 2 = dictionary only
    #[arg(short, long = "dictprint", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    dictprint: u8,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print tool information and exit
    #[arg(short, long)]
    info: bool,

    /// Increase logging verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.info {
        print!("{}", report::tool_info());
        return Ok(());
    }
    run(&cli)
}

fn load_config(cli: &Cli) -> Result<MinimizerConfig> {
    let mut config = match &cli.config {
        Some(path) => MinimizerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MinimizerConfig::default(),
    };
    if let Some(level) = cli.aggressivity {
        config.aggressiveness = Aggressiveness::new(level)?;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli.file.as_deref().context("no input file given")?;
    let config = load_config(cli)?;

    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| output::timestamped_path(input, Local::now().naive_local()));

    let result = Minimizer::new(config.clone()).minimize(&source)?;
    std::fs::write(&output, result.output())
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(input = %input.display(), output = %output.display(), level = %config.aggressiveness, "wrote minimized script");

    let report = Report {
        input,
        output: &output,
        result: &result,
    };
    print!("{}", report.render(DictPrint::from(cli.dictprint), &config.limits));
    Ok(())
}

#[cfg(test)]
mod tests;
