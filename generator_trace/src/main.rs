mod config;
mod file_io;
mod report;
mod run;

use clap::{Parser, Subcommand};
use congen::{Family, RawInputs};
use num_bigint::BigInt;
use std::path::PathBuf;

use config::RunSpec;

#[derive(Parser)]
#[command(name = "gentrace")]
#[command(about = "Step-by-step traces for congruential random number generators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Linear congruential generator, a = 1 + 4K, m = 2^P
    Lcg {
        /// Starting state X0 (0 <= X0 < 2^P)
        #[arg(value_name = "SEED", allow_hyphen_values = true)]
        seed: BigInt,

        /// Multiplier constant K (a = 1 + 4K)
        #[arg(value_name = "K", allow_hyphen_values = true)]
        k: BigInt,

        /// Additive increment c
        #[arg(value_name = "INCREMENT", allow_hyphen_values = true)]
        increment: BigInt,

        /// Modulus exponent P (m = 2^P, P >= 2)
        #[arg(value_name = "PRECISION")]
        precision: u32,

        /// Number of steps to generate
        #[arg(long, default_value_t = 10)]
        steps: u32,

        /// Decimal digits of the uniform values
        #[arg(long, default_value_t = 4)]
        decimals: u32,

        /// Write the trace as comma-separated text to this path
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Write a JSON report (parameters, verdict, rows) to this path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
    },

    /// Multiplicative congruential generator, a = 8K + 3, m = 2^P
    Mcg {
        /// Starting state X0 (0 <= X0 < 2^P)
        #[arg(value_name = "SEED", allow_hyphen_values = true)]
        seed: BigInt,

        /// Multiplier constant K (a = 8K + 3)
        #[arg(value_name = "K", allow_hyphen_values = true)]
        k: BigInt,

        /// Modulus exponent P (m = 2^P, P >= 2)
        #[arg(value_name = "PRECISION")]
        precision: u32,

        /// Number of steps to generate
        #[arg(long, default_value_t = 10)]
        steps: u32,

        /// Decimal digits of the uniform values
        #[arg(long, default_value_t = 4)]
        decimals: u32,

        /// Write the trace as comma-separated text to this path
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Write a JSON report (parameters, verdict, rows) to this path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
    },

    /// Run a generator described by a TOML file
    File {
        /// Run description (seed/k/increment as decimal strings)
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lcg {
            seed,
            k,
            increment,
            precision,
            steps,
            decimals,
            csv,
            json,
        } => run::run(RunSpec {
            family: Family::Lcg,
            raw: RawInputs {
                seed,
                k,
                increment: Some(increment),
                precision,
            },
            steps,
            decimals,
            csv,
            json,
        }),

        Commands::Mcg {
            seed,
            k,
            precision,
            steps,
            decimals,
            csv,
            json,
        } => run::run(RunSpec {
            family: Family::Mcg,
            raw: RawInputs {
                seed,
                k,
                increment: None,
                precision,
            },
            steps,
            decimals,
            csv,
            json,
        }),

        Commands::File { config } => {
            let spec = RunSpec::from_file(&config)?;
            run::run(spec)
        }
    }
}
