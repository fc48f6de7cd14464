mod datasets;

use clap::{Args, Parser, Subcommand};
use datasets::Dataset;
use motif_search_rs::distance::{minimum_distance_trials, total_distance};
use motif_search_rs::error::MotifError;
use motif_search_rs::gibbs::{gibbs_sampler, GibbsOptions};
use motif_search_rs::profile::{
    build_frequency_profile, build_probability_profile, consensus_sequence, window_probabilities,
    Normalization,
};
use motif_search_rs::report;
use motif_search_rs::search::{randomized_motif_search, SearchOptions, SeedBound};
use motif_search_rs::sequence::{generate_random_motif, validate_sequence, RandomSource};
use motif_search_rs::types::Motif;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Motif error: {0}")]
    Motif(#[from] MotifError),

    #[error("Missing motif source: pass --dataset or both --rows and --cols")]
    MissingMotifSource,
}

#[derive(Parser)]
#[command(
    name = "motif-search",
    about = "Generates DNA motifs, builds profile matrices and searches for the most probable motif instances",
    long_about = "A tool for experimenting with classical motif finding: random sequence generation, \
                  mismatch distances, frequency and probability profiles, consensus sequences, \
                  randomized motif search and a Gibbs-style refinement loop.",
    version,
    after_help = "Example usage:\n    \
                  motif-search distance --count 5 --length 8\n    \
                  motif-search profile --dataset motif1\n    \
                  motif-search --seed 42 search --dataset motif4 -k 4\n    \
                  motif-search --seed 42 gibbs --dataset motif2 -k 3 --corrected-bound",
    color = clap::ColorChoice::Always
)]
struct Cli {
    /// Seed for the random number generator; a fresh system source is used when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Where the motif comes from: a built-in dataset or a random matrix
#[derive(Args, Debug)]
struct MotifSource {
    /// Built-in demo motif
    #[arg(long, value_enum)]
    dataset: Option<Dataset>,

    /// Number of random sequences to generate when no dataset is given
    #[arg(long)]
    rows: Option<usize>,

    /// Length of the random sequences to generate when no dataset is given
    #[arg(long)]
    cols: Option<usize>,
}

/// Options shared by the profile-based commands
#[derive(Args, Debug)]
struct ProfileOptions {
    /// Normalize every profile column by its own total instead of column 0's
    #[arg(long)]
    per_column: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[command(flatten)]
    source: MotifSource,

    #[command(flatten)]
    profile: ProfileOptions,

    /// Window (k-mer) length
    #[arg(short, long)]
    k: usize,

    /// Bound random seed offsets by the column count instead of the row count
    #[arg(long)]
    corrected_bound: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimum distances between random probes and random sequences
    Distance {
        /// Number of sequences to analyze
        #[arg(long)]
        count: usize,

        /// Length of every sequence and probe
        #[arg(long)]
        length: usize,
    },
    /// Generate a random motif matrix
    Generate {
        #[arg(long)]
        rows: usize,

        #[arg(long)]
        cols: usize,
    },
    /// Frequency profile, consensus and probability profile of a motif
    Profile {
        #[command(flatten)]
        source: MotifSource,

        #[command(flatten)]
        profile: ProfileOptions,
    },
    /// Probability of every k-length window of a sequence under a motif's profile
    Windows {
        #[command(flatten)]
        source: MotifSource,

        #[command(flatten)]
        profile: ProfileOptions,

        /// Sequence to scan
        #[arg(long)]
        sequence: String,

        /// Window length
        #[arg(short, long)]
        k: usize,
    },
    /// Randomized motif search
    Search(SearchArgs),
    /// Gibbs-style refinement of a randomly seeded motif
    Gibbs {
        #[command(flatten)]
        search: SearchArgs,

        /// Number of hold-out iterations
        #[arg(long, default_value = "100")]
        iterations: usize,
    },
}

impl ProfileOptions {
    fn normalization(&self) -> Normalization {
        if self.per_column {
            Normalization::PerColumn
        } else {
            Normalization::FirstColumn
        }
    }
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            seed_bound: if self.corrected_bound {
                SeedBound::ColumnCount
            } else {
                SeedBound::RowCount
            },
            normalization: self.profile.normalization(),
        }
    }
}

fn load_motif(source: &MotifSource, rng: &mut dyn RandomSource) -> Result<Motif, CliError> {
    match (source.dataset, source.rows, source.cols) {
        (Some(dataset), _, _) => Ok(dataset.rows().iter().map(|s| s.to_string()).collect()),
        (None, Some(rows), Some(cols)) => Ok(generate_random_motif(rows, cols, rng)?),
        _ => Err(CliError::MissingMotifSource),
    }
}

fn run(command: Command, rng: &mut dyn RandomSource) -> Result<(), CliError> {
    match command {
        Command::Distance { count, length } => {
            let trials = minimum_distance_trials(count, length, rng)?;
            println!("{}", report::distance_frame(&trials)?);
            println!("Sum of minimum distances: {}", total_distance(&trials));
        }
        Command::Generate { rows, cols } => {
            let motif = generate_random_motif(rows, cols, rng)?;
            println!("{}", report::motif_frame(&motif)?);
        }
        Command::Profile { source, profile } => {
            let motif = load_motif(&source, rng)?;
            let freq = build_frequency_profile(&motif)?;
            let probs = build_probability_profile(&freq, profile.normalization())?;

            println!("{}", report::motif_frame(&motif)?);
            println!("Frequency profile:\n{}", report::frequency_frame(&freq)?);
            println!("Consensus: {}", consensus_sequence(&freq));
            println!("Probability profile:\n{}", report::probability_frame(&probs)?);
        }
        Command::Windows {
            source,
            profile,
            sequence,
            k,
        } => {
            let sequence = sequence.to_uppercase();
            validate_sequence(&sequence)?;

            let motif = load_motif(&source, rng)?;
            let freq = build_frequency_profile(&motif)?;
            let probs = build_probability_profile(&freq, profile.normalization())?;
            let scores = window_probabilities(&sequence, &probs, k)?;

            println!("{}", report::window_frame(&scores)?);
        }
        Command::Search(args) => {
            let motif = load_motif(&args.source, rng)?;
            let result = randomized_motif_search(&motif, args.k, args.options(), rng)?;

            println!("{}", report::search_frame(&result)?);
            println!(
                "Seed probability profile:\n{}",
                report::probability_frame(&result.profile)?
            );
        }
        Command::Gibbs { search, iterations } => {
            let motif = load_motif(&search.source, rng)?;
            let options = GibbsOptions {
                iterations,
                search: search.options(),
            };
            let result = gibbs_sampler(&motif, search.k, options, rng)?;

            println!("{}", report::motif_frame(&result.motif)?);
            println!(
                "Score {} (iteration {} of {}), offsets {:?}",
                result.score, result.best_iteration, result.iterations, result.offsets
            );
        }
    }

    Ok(())
}

fn main() -> Result<(), CliError> {
    let start_time = std::time::Instant::now();

    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let mut rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            log::info!("Using seeded random source ({})", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    if let Err(e) = run(cli.command, rng.as_mut()) {
        log::error!("{}", e);
        return Err(e);
    }

    log::info!(
        "Total execution time: {:.4} seconds",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
