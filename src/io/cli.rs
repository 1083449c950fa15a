//! Command-line interface for rendering backgrounds for a batch of seeds

use crate::generator::{NoiseMode, PatternGenerator};
use crate::io::configuration::{DEFAULT_LOG_FILTER, DEFAULT_OUTPUT_DIR, VERBOSE_LOG_FILTER};
use crate::io::error::{PatternError, Result, file_system_error};
use crate::io::image::output_path;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seedpattern")]
#[command(
    author,
    version,
    about = "Generate deterministic abstract backgrounds from seed strings"
)]
/// Command-line arguments for the pattern generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seed strings to render, for example repository names
    #[arg(value_name = "SEED")]
    pub seeds: Vec<String>,

    /// File with one seed per line; blank lines are ignored
    #[arg(short = 'f', long, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Directory that receives the PNG files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Print `seed<TAB>data-uri` lines instead of writing files
    #[arg(short, long)]
    pub data_uri: bool,

    /// Skip the grain pass so output depends on the seed alone
    #[arg(long, conflicts_with = "noise_seed")]
    pub no_noise: bool,

    /// Seed the grain pass for reproducible output
    #[arg(long, value_name = "N")]
    pub noise_seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render seeds even if their output file exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Noise mode selected by the flags
    pub const fn noise_mode(&self) -> NoiseMode {
        if self.no_noise {
            NoiseMode::Disabled
        } else if let Some(seed) = self.noise_seed {
            NoiseMode::Seeded(seed)
        } else {
            NoiseMode::Entropy
        }
    }

    /// Log filter implied by `--verbose`, unless `RUST_LOG` overrides it
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// Install a stderr `tracing` subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Installing twice is a
/// no-op, so tests may call this freely.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(%error, "keeping the installed tracing subscriber");
    }
}

/// Orchestrates rendering a batch of seeds with progress tracking
pub struct PatternProcessor {
    cli: Cli,
    generator: PatternGenerator,
    progress_manager: Option<ProgressManager>,
    claimed_outputs: HashMap<PathBuf, String>,
}

impl PatternProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let generator = PatternGenerator::default().with_noise(cli.noise_mode());

        Self {
            cli,
            generator,
            progress_manager,
            claimed_outputs: HashMap::new(),
        }
    }

    /// Generator configured from the CLI flags
    pub const fn generator(&self) -> PatternGenerator {
        self.generator
    }

    /// Render every seed according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the seed file cannot be read, two seeds resolve to
    /// the same output file, or a pattern cannot be encoded or written
    pub fn process(&mut self) -> Result<()> {
        let seeds = self.collect_seeds()?;
        self.claimed_outputs.clear();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for seed in &seeds {
            self.process_seed(seed)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Seeds from the command line followed by the seed file, first occurrence kept
    ///
    /// # Errors
    ///
    /// Returns an error if the seed file cannot be read
    pub fn collect_seeds(&self) -> Result<Vec<String>> {
        let mut seeds = self.cli.seeds.clone();

        if let Some(ref path) = self.cli.seed_file {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| file_system_error(path, "read seed file", e))?;
            seeds.extend(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string),
            );
        }

        let mut seen = HashSet::new();
        seeds.retain(|seed| seen.insert(seed.clone()));
        Ok(seeds)
    }

    fn process_seed(&mut self, seed: &str) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_seed(seed);
        }

        if self.cli.data_uri {
            let uri = self.generator.generate(seed)?;
            // Data URIs are the program output in this mode
            #[allow(clippy::print_stdout)]
            {
                println!("{seed}\t{uri}");
            }
            if let Some(ref pm) = self.progress_manager {
                pm.complete_seed();
            }
            return Ok(());
        }

        let path = self.output_path(seed);
        self.claim_output(&path, seed)?;
        if self.cli.skip_existing() && path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {seed} (output exists)");
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.skip_seed();
            }
            return Ok(());
        }

        let pattern = self.generator.render(seed);
        pattern.save(&path)?;
        tracing::info!(seed, style = %pattern.style(), path = %path.display(), "wrote pattern");

        if let Some(ref pm) = self.progress_manager {
            pm.complete_seed();
        }

        Ok(())
    }

    /// Reserve `path` for `seed` for the rest of this run
    fn claim_output(&mut self, path: &Path, seed: &str) -> Result<()> {
        match self.claimed_outputs.entry(path.to_path_buf()) {
            Entry::Occupied(first) if first.get() != seed => Err(PatternError::OutputCollision {
                path: path.to_path_buf(),
                first_seed: first.get().clone(),
                second_seed: seed.to_string(),
            }),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(seed.to_string());
                Ok(())
            }
        }
    }

    /// Where the pattern for `seed` is written
    pub fn output_path(&self, seed: &str) -> PathBuf {
        output_path(Path::new(&self.cli.output_dir), seed)
    }
}
