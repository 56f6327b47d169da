//! Term deposit calculator CLI
//!
//! Command-line front end for computing the final balance of a term deposit

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use term_deposit_rs::{
    BalanceCalculator, CalculatorConfig, DepositCalculation, PaymentFrequency, SafeTimeProvider,
    TimeSource, YearMonth,
};

#[derive(Parser, Debug)]
#[command(name = "term-deposit", version, about = "Term deposit final balance calculator")]
struct Cli {
    /// start deposit amount
    #[arg(long, allow_hyphen_values = true)]
    principal: Option<f64>,

    /// annual interest rate in percent, e.g. 1.1
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// maturity month as YYYY-MM
    #[arg(long, conflicts_with = "years")]
    end_month: Option<YearMonth>,

    /// term length in years instead of an end month
    #[arg(long, allow_hyphen_values = true)]
    years: Option<f64>,

    /// monthly, quarterly, yearly or atMaturity
    #[arg(long)]
    frequency: Option<PaymentFrequency>,

    /// JSON file with default inputs
    #[arg(long)]
    config: Option<PathBuf>,

    /// print the full calculation as JSON
    #[arg(long)]
    json: bool,

    /// list the accepted payment frequencies and exit
    #[arg(long)]
    list_frequencies: bool,
}

impl Cli {
    /// command line values take precedence over the config file
    fn merged_config(&self) -> anyhow::Result<CalculatorConfig> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => CalculatorConfig::default(),
        };

        if let Some(principal) = self.principal {
            config.principal = principal;
        }
        if let Some(rate) = self.rate {
            config.annual_rate_percent = rate;
        }
        if let Some(end_month) = self.end_month {
            config.end_month = Some(end_month);
            config.term_years = None;
        }
        if let Some(years) = self.years {
            config.term_years = Some(years);
            config.end_month = None;
        }
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }

        Ok(config)
    }
}

/// the line the form shows under the inputs
fn balance_line(calculation: &DepositCalculation) -> String {
    format!("Final Balance: ${}", calculation.final_balance_string())
}

fn run(cli: &Cli, time: &SafeTimeProvider, out: &mut impl Write) -> anyhow::Result<()> {
    if cli.list_frequencies {
        for frequency in PaymentFrequency::ALL {
            writeln!(out, "{:<12} {}", frequency.tag(), frequency.label())?;
        }
        return Ok(());
    }

    let config = cli.merged_config()?;
    log::debug!("running with {:?}", config);

    let inputs = config.to_inputs(time)?;
    let calculation = BalanceCalculator::calculate(&inputs, time)?;

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&calculation)?)?;
    } else {
        writeln!(out, "{}", balance_line(&calculation))?;
    }

    Ok(())
}

/// run and report, returning the process exit code
fn execute(
    cli: &Cli,
    time: &SafeTimeProvider,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match run(cli, time, out) {
        Ok(()) => 0,
        Err(e) => {
            // nothing more to report if stderr itself is gone
            let _ = writeln!(err, "{:#}", e);
            1
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let time = SafeTimeProvider::new(TimeSource::System);
    let code = execute(&cli, &time, &mut std::io::stdout(), &mut std::io::stderr());
    std::process::exit(code);
}
