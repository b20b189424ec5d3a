//! CLI definition and dispatch.

use chrono::{Days, NaiveDate};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_history_adapter::CsvHistoryAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::catalog;
use crate::domain::config::EngineConfig;
use crate::domain::engine::{self, Analysis};
use crate::domain::error::StockcastError;
use crate::domain::forecast::ConfidenceLabel;
use crate::domain::instrument::Instrument;
use crate::domain::synthetic::{self, DEFAULT_HISTORY_DAYS};
use crate::ports::history_port::HistoryPort;

#[derive(Parser, Debug)]
#[command(name = "stockcast", about = "Technical signal engine and price forecaster")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a symbol: indicators, signals, forecasts, recommendation
    Analyze {
        /// Catalog symbol, e.g. RELIANCE
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// RNG seed; overrides the config file
        #[arg(long)]
        seed: Option<u64>,
        /// Directory of <SYMBOL>.csv files to use instead of synthetic history
        #[arg(long)]
        history_dir: Option<PathBuf>,
        /// Synthetic history length; overrides the config file
        #[arg(long)]
        days: Option<usize>,
    },
    /// List the built-in instrument catalog
    List,
    /// Print a synthetic price history as date,close CSV
    History {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_DAYS)]
        days: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Re-analyze a symbol across simulated market ticks
    Simulate {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long, default_value_t = 5)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            symbol,
            config,
            seed,
            history_dir,
            days,
        } => run_analyze(&symbol, config.as_ref(), seed, history_dir.as_ref(), days),
        Command::List => run_list(),
        Command::History { symbol, days, seed } => run_history(&symbol, days, seed),
        Command::Simulate {
            symbol,
            rounds,
            seed,
        } => run_simulate(&symbol, rounds, seed),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = StockcastError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn resolve_engine_config(config_path: Option<&PathBuf>) -> Result<EngineConfig, ExitCode> {
    let path = match config_path {
        Some(p) => p,
        None => return Ok(EngineConfig::default()),
    };

    eprintln!("Loading config from {}", path.display());
    let adapter = load_config(path)?;
    EngineConfig::from_port(&adapter).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

/// CLI seed beats config seed; with neither, pick one and report it so the
/// run can be replayed.
pub fn resolve_seed(cli_seed: Option<u64>, config_seed: Option<u64>) -> u64 {
    cli_seed.or(config_seed).unwrap_or_else(rand::random)
}

fn lookup_instrument(symbol: &str) -> Result<Instrument, StockcastError> {
    catalog::find(symbol).ok_or_else(|| StockcastError::UnknownSymbol {
        symbol: symbol.to_string(),
    })
}

fn run_analyze(
    symbol: &str,
    config_path: Option<&PathBuf>,
    cli_seed: Option<u64>,
    history_dir: Option<&PathBuf>,
    days_override: Option<usize>,
) -> ExitCode {
    // Stage 1: Resolve configuration
    let config = match resolve_engine_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let seed = resolve_seed(cli_seed, config.seed);
    let mut rng = StdRng::seed_from_u64(seed);
    eprintln!("Using seed {}", seed);

    let history_days = days_override.unwrap_or(config.history_days);

    // Stage 2: Look up the instrument
    let instrument = match lookup_instrument(symbol) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Load supplied history, if any
    let supplied: Option<Vec<f64>> = match history_dir {
        Some(dir) => {
            let adapter = CsvHistoryAdapter::new(dir.clone());
            match adapter.fetch_history(&instrument.symbol) {
                Ok(prices) if prices.is_empty() => {
                    eprintln!(
                        "warning: no usable rows for {}, synthesizing history",
                        instrument.symbol
                    );
                    None
                }
                Ok(prices) => {
                    eprintln!(
                        "Loaded {} points from {}",
                        prices.len(),
                        dir.join(format!("{}.csv", instrument.symbol)).display()
                    );
                    Some(prices)
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
        None => None,
    };

    // Stage 4: Run the analysis
    let analysis = match engine::analyze_with_history_len(
        &instrument,
        supplied.as_deref(),
        &config.horizons,
        history_days,
        &mut rng,
    ) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 5: Print the report
    print_analysis(&analysis, &instrument);
    ExitCode::SUCCESS
}

fn print_analysis(analysis: &Analysis, instrument: &Instrument) {
    println!(
        "=== {} - {} ({}) ===",
        analysis.symbol, instrument.name, instrument.sector
    );
    println!("Price:       {:.2}", analysis.price);
    println!(
        "History:     {} points{}",
        analysis.history_len,
        if analysis.synthetic_history {
            " (synthetic)"
        } else {
            ""
        }
    );

    let ind = &analysis.indicators;
    println!("\nIndicators:");
    println!("  SMA(20):     {}", fmt_opt(ind.sma));
    println!("  EMA(20):     {}", fmt_opt(ind.ema));
    println!("  RSI(14):     {}", fmt_opt(ind.rsi));
    println!("  MACD(12,26): {}", fmt_opt(ind.macd.as_ref().map(|m| m.macd)));
    match &ind.bollinger {
        Some(bands) => println!(
            "  Bollinger:   {:.2} / {:.2} / {:.2}",
            bands.lower, bands.middle, bands.upper
        ),
        None => println!("  Bollinger:   n/a"),
    }

    println!("\nSupport/Resistance:");
    for level in &ind.levels.resistance {
        println!(
            "  R: {:>10.2}  ({}, {:+.2}%)",
            level.price, level.strength, level.distance_pct
        );
    }
    for level in &ind.levels.support {
        println!(
            "  S: {:>10.2}  ({}, {:+.2}%)",
            level.price, level.strength, level.distance_pct
        );
    }

    println!("\nSignals:");
    println!("  Trend:       {:+.2}", analysis.signals.trend);
    println!("  Momentum:    {:+.2}", analysis.signals.momentum);
    println!("  Volatility:  {:+.2}", analysis.signals.volatility);
    println!("  Combined:    {:+.3}", analysis.combined_signal);

    if !analysis.predictions.is_empty() {
        println!("\nForecasts:");
        for prediction in &analysis.predictions {
            println!(
                "  {:>3}d:  {:>10.2}  ({:+.2}%)  {} confidence",
                prediction.days, prediction.price, prediction.change_pct, prediction.confidence
            );
        }
    }

    let rec = &analysis.recommendation;
    println!("\nRecommendation:");
    println!("  Action:      {} ({}% confidence)", rec.action, rec.confidence_pct);
    println!("  Target:      {:.2}", rec.target_price);
    println!("  Stop loss:   {:.2}", rec.stop_loss);
    println!("  Risk:        {}", rec.risk);
    println!("  Reasoning:   {}", rec.reasoning.join(", "));
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

fn run_list() -> ExitCode {
    let instruments = catalog::instruments();
    for instrument in &instruments {
        println!(
            "{:<10} {:<26} {:<14} {:>10.2}",
            instrument.symbol,
            instrument.name,
            instrument.sector.to_string(),
            instrument.price
        );
    }
    eprintln!("{} instruments", instruments.len());
    ExitCode::SUCCESS
}

fn run_history(symbol: &str, days: usize, cli_seed: Option<u64>) -> ExitCode {
    let instrument = match lookup_instrument(symbol) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let seed = resolve_seed(cli_seed, None);
    let mut rng = StdRng::seed_from_u64(seed);
    eprintln!("Using seed {}", seed);

    let series = match synthetic::generate_history(&instrument, days, &mut rng) {
        Ok(s) => s,
        Err(e) => {
            let err = StockcastError::InvalidHistory {
                symbol: instrument.symbol.clone(),
                source: e,
            };
            eprintln!("error: {err}");
            return (&err).into();
        }
    };

    // Dates are a deterministic ramp; the walk carries no real calendar.
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    println!("date,close");
    for (i, price) in series.as_slice().iter().enumerate() {
        let date = start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(start);
        println!("{},{:.2}", date, price);
    }
    ExitCode::SUCCESS
}

fn run_simulate(symbol: &str, rounds: u32, cli_seed: Option<u64>) -> ExitCode {
    let mut instrument = match lookup_instrument(symbol) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let seed = resolve_seed(cli_seed, None);
    let mut rng = StdRng::seed_from_u64(seed);
    eprintln!("Using seed {}", seed);
    eprintln!(
        "Simulating {} rounds for {} ({})",
        rounds, instrument.symbol, instrument.sector
    );

    let horizons = EngineConfig::default().horizons;

    println!(
        "{:>5}  {:>10}  {:>8}  {:<11}  {:>10}",
        "round", "price", "signal", "action", "next day"
    );
    for round in 1..=rounds {
        let analysis = match engine::analyze(&instrument, None, &horizons, &mut rng) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let next_day = analysis
            .predictions
            .first()
            .map(|p| format!("{:.2}", p.price))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{:>5}  {:>10.2}  {:>+8.3}  {:<11}  {:>10}",
            round,
            analysis.price,
            analysis.combined_signal,
            analysis.recommendation.action.to_string(),
            next_day
        );

        // The tick mutates only the caller's instrument; each round's
        // analysis starts from the fresh snapshot.
        instrument.apply_tick(&mut rng);
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let config = match EngineConfig::from_port(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nResolved engine configuration:");
    match config.seed {
        Some(seed) => eprintln!("  seed:          {}", seed),
        None => eprintln!("  seed:          (picked at run time)"),
    }
    eprintln!("  history_days:  {}", config.history_days);
    eprintln!("  horizons:");
    for horizon in &config.horizons {
        eprintln!(
            "    {:>3} days  (confidence {:.2}, {})",
            horizon.days,
            horizon.confidence,
            ConfidenceLabel::from_confidence(horizon.confidence)
        );
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
