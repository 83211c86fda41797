use std::path::PathBuf;

use anyhow::{Result, bail};
use arxmlgen_gen::suite::{Suite, run_suite};
use arxmlgen_gen::{Branching, FixtureSpec, rng_from_seed, write_fixture};
use arxmlgen_model::IndentStyle;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use itertools::Itertools;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Generate randomized ARXML test fixture files of varying size, nesting
/// depth, and whitespace style, for feeding an ARXML-processing tool under
/// test.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the built-in fixture suites
    ///
    /// Each suite writes its files under `<root>/cases/<dir>/` and creates
    /// an empty `<root>/results/<dir>/` alongside for the tool under test.
    Suite {
        /// Names of the suites to generate (default: all built-in suites)
        names: Vec<String>,

        /// Directory to place the cases/ and results/ trees under
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// RNG seed for reproducible output (default: seed from entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a single fixture file
    Single {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum container nesting depth
        #[arg(long)]
        depth: usize,

        /// Minimum children per nesting level
        #[arg(long, default_value_t = 2)]
        min_children: usize,

        /// Maximum children per nesting level (inclusive)
        #[arg(long, default_value_t = 5)]
        max_children: usize,

        /// Whitespace style: none, mixed, or normal
        #[arg(long, default_value_t = IndentStyle::Normal)]
        style: IndentStyle,

        /// RNG seed for reproducible output (default: seed from entropy)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging on stderr. Default to warn, allowlist
    // our crates at the requested verbosity.
    const CRATES: &[&str] = &["arxmlgen", "arxmlgen_gen", "arxmlgen_model"];
    let level = cli.verbose.tracing_level_filter();
    let allowlist = CRATES.iter().map(|c| format!("{c}={level}")).join(",");
    let filter = EnvFilter::new(format!("warn,{allowlist}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Suite { names, root, seed } => {
            let suites = if names.is_empty() {
                Suite::builtin()
            } else {
                names
                    .iter()
                    .map(|name| {
                        Suite::by_name(name).ok_or_else(|| {
                            let known = Suite::builtin()
                                .iter()
                                .map(Suite::name)
                                .join(", ");
                            anyhow::anyhow!(
                                "unknown suite {name:?} (known suites: {known})"
                            )
                        })
                    })
                    .collect::<Result<Vec<_>>>()?
            };

            let mut rng = rng_from_seed(seed);
            for suite in &suites {
                println!("Generating suite: {}", suite.name());
                run_suite(suite, &root, &mut rng)?;
            }
            println!("Fixture generation completed");
            Ok(())
        }
        Commands::Single {
            output,
            depth,
            min_children,
            max_children,
            style,
            seed,
        } => {
            if min_children > max_children {
                bail!(
                    "--min-children ({min_children}) must not exceed \
                     --max-children ({max_children})"
                );
            }
            let spec = FixtureSpec {
                max_depth: depth,
                branching: Branching::new(min_children, max_children),
                style,
            };
            let mut rng = rng_from_seed(seed);
            println!("Generating file: {}", output.display());
            write_fixture(&output, &spec, &mut rng)?;
            Ok(())
        }
    }
}
