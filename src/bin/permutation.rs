use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use deques::core::{read_tokens, sample_permutation};

/// Prints `k` tokens read from standard input, chosen uniformly at random.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct CliArgument {
    /// How many tokens to print
    k: usize,
    /// Seed for a reproducible selection
    #[clap(long, env = "PERMUTATION_SEED")]
    seed: Option<u64>,
}

fn run(args: &CliArgument) -> deques::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => {
            debug!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let tokens = read_tokens(io::stdin().lock())?;
    let permutation = sample_permutation(&tokens, args.k, &mut rng)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for token in &permutation {
        writeln!(out, "{}", token)?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    deques::init();
    let args = CliArgument::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("permutation: {}", err);
            ExitCode::FAILURE
        }
    }
}
