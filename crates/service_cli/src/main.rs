//! uqtf - Command line access to the UQ test function library
//!
//! # Commands
//!
//! - `uqtf list [--tag TAG]` - List registered test functions
//! - `uqtf info <FUNCTION>` - Describe a function and its input
//! - `uqtf sample <FUNCTION> -n N` - Draw an input sample as CSV
//! - `uqtf evaluate <FUNCTION> -n N` - Sample, evaluate and write CSV
//! - `uqtf dist <FAMILY> --params P1,P2 <pdf|cdf|icdf> VALUES..` - Query a distribution
//! - `uqtf meta -d D [-n N]` - Draw random test functions from the metafunction
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires `uqtf_functions` and
//! `uqtf_core` to the terminal. Configuration is read from `uqtf.toml`,
//! `UQTF_*` environment variables and flags, in increasing priority.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::dist::DistOp;
use commands::sample::SampleArgs;
use config::{build_config, CliArgs};

/// UQ test function library CLI
#[derive(Parser)]
#[command(name = "uqtf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./uqtf.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Decimal places in numeric output
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments selecting a function and a sample from its input
#[derive(Args)]
struct SampleOpts {
    /// Test function name (case-insensitive)
    function: String,

    /// Number of realisations
    #[arg(short = 'n', long = "size", allow_hyphen_values = true)]
    size: Option<String>,

    /// Seed for the input's random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Input selection (e.g. Moon2010)
    #[arg(short, long)]
    input: Option<String>,

    /// Dimension for variable-dimension functions
    #[arg(short, long)]
    dimension: Option<usize>,
}

impl SampleOpts {
    fn to_args(&self) -> SampleArgs {
        SampleArgs {
            function: self.function.clone(),
            dimension: self.dimension,
            input: self.input.clone(),
            size: self.size.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List registered test functions
    List {
        /// Only show functions carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Describe a test function and its probabilistic input
    Info {
        /// Test function name (case-insensitive)
        function: String,

        /// Dimension for variable-dimension functions
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Input selection
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Draw a sample from a test function's input and write it as CSV
    Sample(SampleOpts),

    /// Sample, evaluate, and write inputs with the output column as CSV
    Evaluate {
        #[command(flatten)]
        opts: SampleOpts,

        /// Split rows across worker threads regardless of sample size
        #[arg(short, long)]
        parallel: bool,
    },

    /// Draw random test functions from the default metafunction
    Meta {
        /// Input dimension of each realization
        #[arg(short, long)]
        dimension: usize,

        /// Marginal pool entry (0-6), or 7 to mix all; random when omitted
        #[arg(short, long)]
        input_id: Option<usize>,

        /// Number of realizations
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,

        /// Seed for the metafunction's generator
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Evaluate pdf, cdf or icdf of a distribution
    Dist {
        /// Distribution family (e.g. exponential, trunc-normal)
        family: String,

        /// Ordered distribution parameters, comma separated
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        params: Vec<f64>,

        /// Function to evaluate
        #[arg(value_enum)]
        op: DistOp,

        /// Values (or probabilities for icdf)
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seed = match &cli.command {
        Commands::Sample(opts) | Commands::Evaluate { opts, .. } => opts.seed,
        Commands::Meta { seed, .. } => *seed,
        _ => None,
    };
    let cli_args = CliArgs {
        config_file: cli.config.clone(),
        log_level: if cli.verbose {
            Some("debug".to_string())
        } else {
            cli.log_level.clone()
        },
        seed,
        output_precision: cli.precision,
    };
    let config = build_config(&cli_args, |key| std::env::var(key).ok())?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?config, "configuration loaded");
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { tag } => commands::list::run(tag.as_deref(), &mut out),
        Commands::Info {
            function,
            dimension,
            input,
        } => commands::info::run(&function, dimension, input.as_deref(), &mut out),
        Commands::Sample(opts) => commands::sample::run(&opts.to_args(), &config, &mut out),
        Commands::Evaluate { opts, parallel } => {
            commands::evaluate::run(&opts.to_args(), parallel, &config, &mut out)
        }
        Commands::Meta {
            dimension,
            input_id,
            count,
            ..
        } => commands::meta::run(dimension, input_id, count, config.seed, &mut out),
        Commands::Dist {
            family,
            params,
            op,
            values,
        } => commands::dist::run(
            &family,
            &params,
            op,
            &values,
            config.output_precision,
            &mut out,
        ),
    }
}
