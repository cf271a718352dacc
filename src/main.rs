//! Vault Forecast CLI
//!
//! Command-line interface for running vault yield forecasts

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;

use vault_forecast::export::{parse_start_date, to_json, write_series_csv};
use vault_forecast::request::load_requests;
use vault_forecast::{CompoundingFrequency, ForecastInput, ForecastResult, ScenarioRunner, VaultComparison};

#[derive(Parser)]
#[command(name = "vault-forecast")]
#[command(about = "Compound-yield forecasts for BTC yield vaults")]
#[command(version)]
struct Cli {
    /// Output format (csv is only available for `forecast`)
    #[arg(short, long, global = true, value_enum, env = "VAULT_FORECAST_FORMAT", default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast a single vault position
    Forecast {
        /// Principal in base asset units (e.g. BTC)
        #[arg(short, long)]
        amount: f64,

        /// Horizon in days
        #[arg(short, long, allow_hyphen_values = true)]
        days: i64,

        /// Annual yield as a decimal (0.078 = 7.8%)
        #[arg(long, allow_hyphen_values = true)]
        apy: f64,

        /// Compounding frequency: daily, weekly, monthly or yearly
        #[arg(long, default_value = "daily")]
        frequency: CompoundingFrequency,

        /// Number of chart points (one per day when omitted)
        #[arg(long)]
        data_points: Option<u32>,

        /// Label CSV rows with calendar dates from this day (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
    },
    /// Compare a daily-compounded vault position against holding
    Compare {
        #[arg(short, long)]
        amount: f64,

        #[arg(short, long, allow_hyphen_values = true)]
        days: i64,

        #[arg(long, allow_hyphen_values = true)]
        apy: f64,
    },
    /// Forecast the same position across several APYs
    Sweep {
        #[arg(short, long)]
        amount: f64,

        #[arg(short, long, allow_hyphen_values = true)]
        days: i64,

        /// Comma-separated APYs, e.g. 0.03,0.05,0.078
        #[arg(long, value_delimiter = ',', required = true)]
        apy: Vec<f64>,

        #[arg(long, default_value = "daily")]
        frequency: CompoundingFrequency,
    },
    /// Run every request in a JSON file (an array or a single object)
    Batch {
        path: PathBuf,
    },
}

impl Cli {
    /// Reject output formats the chosen command cannot produce
    fn check_format(&self) -> Result<()> {
        if self.format == OutputFormat::Csv && !matches!(self.command, Commands::Forecast { .. }) {
            bail!("--format csv is only supported by the forecast command");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    cli.check_format()?;
    match cli.command {
        Commands::Forecast { amount, days, apy, frequency, data_points, start_date } => {
            let start_date = start_date
                .as_deref()
                .map(parse_start_date)
                .transpose()
                .context("Invalid --start-date")?;
            let runner = ScenarioRunner::new().with_data_points(data_points);
            let result = runner.run(&ForecastInput::with_frequency(amount, days, apy, frequency));

            match cli.format {
                OutputFormat::Table => print_forecast(&result, frequency),
                OutputFormat::Json => println!("{}", to_json(&result)?),
                OutputFormat::Csv => write_series_csv(io::stdout().lock(), &result.time_series, start_date)
                    .context("Failed to write CSV")?,
            }
        }
        Commands::Compare { amount, days, apy } => {
            let comparison = ScenarioRunner::new().compare(amount, days, apy);
            match cli.format {
                OutputFormat::Json => println!("{}", to_json(&comparison)?),
                OutputFormat::Table | OutputFormat::Csv => print_comparison(&comparison),
            }
        }
        Commands::Sweep { amount, days, apy, frequency } => {
            let runner = ScenarioRunner::new().with_frequency(frequency);
            let results = runner.apy_sweep(amount, days, &apy);
            match cli.format {
                OutputFormat::Json => println!("{}", to_json(&results)?),
                OutputFormat::Table | OutputFormat::Csv => print_sweep(&apy, &results),
            }
        }
        Commands::Batch { path } => {
            let requests = load_requests(&path)
                .with_context(|| format!("Failed to load requests from {}", path.display()))?;
            let runner = ScenarioRunner::new();
            let results = runner.run_requests(&requests);

            if cli.format == OutputFormat::Json {
                let comparisons: Vec<Option<VaultComparison>> = requests
                    .iter()
                    .map(|r| r.compare_hodl.then(|| runner.compare(r.initial_amount, r.days, r.apy)))
                    .collect();
                let output: Vec<serde_json::Value> = results
                    .iter()
                    .zip(&comparisons)
                    .map(|(result, comparison)| {
                        serde_json::json!({ "forecast": result, "comparison": comparison })
                    })
                    .collect();
                println!("{}", to_json(&output)?);
            } else {
                for (request, result) in requests.iter().zip(&results) {
                    print_forecast(result, request.compounding_frequency);
                    if request.compare_hodl {
                        print_comparison(&runner.compare(request.initial_amount, request.days, request.apy));
                    }
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn print_forecast(result: &ForecastResult, frequency: CompoundingFrequency) {
    if result.degenerate {
        println!("No forecast: amount, days and APY must be positive (amount {:.8})", result.initial_amount);
        return;
    }

    let days = result.time_series.last().map(|p| p.day).unwrap_or(0);
    println!("Forecast ({} days, {} compounding):", days, frequency);
    println!("  Initial Amount:  {:.8}", result.initial_amount);
    println!("  Final Balance:   {:.8}", result.final_balance);
    println!("  Total Gain:      {:.8} ({:.4}%)", result.total_gain, result.summary.total_gain_percentage);
    println!("  Daily Gain:      {:.8}", result.summary.daily_gain);
    println!("  30-Day Gain:     {:.8}", result.summary.monthly_gain);
    println!("  365-Day Gain:    {:.8}", result.summary.yearly_gain);

    println!("\n{:>6} {:>16} {:>16}", "Day", "Balance", "Gain");
    println!("{}", "-".repeat(40));
    for point in result.time_series.iter().take(12) {
        println!("{:>6} {:>16.8} {:>16.8}", point.day, point.balance, point.gain);
    }
    if result.time_series.len() > 12 {
        let last = &result.time_series[result.time_series.len() - 1];
        println!("   ... ({} more points)", result.time_series.len() - 13);
        println!("{:>6} {:>16.8} {:>16.8}", last.day, last.balance, last.gain);
    }
}

fn print_comparison(comparison: &VaultComparison) {
    println!("Vault vs HODL:");
    println!("  Vault Balance:   {:.8}", comparison.vault.final_balance);
    println!("  HODL Balance:    {:.8}", comparison.hodl.final_balance);
    println!("  Advantage:       {:.8} ({:.4}%)", comparison.advantage, comparison.advantage_percentage);
}

fn print_sweep(apys: &[f64], results: &[ForecastResult]) {
    println!("{:>8} {:>16} {:>16} {:>10}", "APY", "Final Balance", "Total Gain", "Gain %");
    println!("{}", "-".repeat(54));
    for (apy, result) in apys.iter().zip(results) {
        println!(
            "{:>7.3}% {:>16.8} {:>16.8} {:>9.4}%",
            apy * 100.0,
            result.final_balance,
            result.total_gain,
            result.summary.total_gain_percentage
        );
    }
}
