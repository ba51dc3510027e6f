//! Command-line interface for batch processing sample files

use crate::algorithm::executor::{IterationStatus, RetryPolicy, SolverConfig, WaveSolver};
use crate::io::configuration::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED,
    DEFAULT_TILE_SIZE, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::PixelSample;
use crate::io::progress::ProgressManager;
use crate::io::text::TextSample;
use crate::spatial::Grid;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate tile patterns from small examples using wave function collapse"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Input sample file (.txt or .png) or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output grid width in cells (defaults to height if only it is given)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output grid height in cells (defaults to width if only it is given)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Attempts before giving up on a sample
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Retry forever instead of failing after the attempt cap
    #[arg(short, long)]
    pub unbounded: bool,

    /// Edge length in pixels of one tile in image samples
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
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

    /// Retry policy selected by the flags
    pub const fn retry_policy(&self) -> RetryPolicy {
        if self.unbounded {
            RetryPolicy::Unbounded
        } else {
            RetryPolicy::Bounded(self.attempts)
        }
    }

    /// Solver configuration from dimensions, seed, and retry flags
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            rows: self.height.or(self.width).unwrap_or(DEFAULT_OUTPUT_HEIGHT),
            cols: self.width.or(self.height).unwrap_or(DEFAULT_OUTPUT_WIDTH),
            seed: self.seed,
            retry: self.retry_policy(),
        }
    }
}

/// A loaded sample in either supported format
enum Sample {
    Text(TextSample),
    Pixels(PixelSample),
}

impl Sample {
    fn load(path: &Path, tile_size: usize) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("txt") => Ok(Self::Text(TextSample::from_path(path)?)),
            Some("png") => Ok(Self::Pixels(PixelSample::from_path(path, tile_size)?)),
            _ => Err(invalid_parameter(
                "target",
                &path.display(),
                &"samples must be .txt or .png files",
            )),
        }
    }

    fn solver(&self, config: SolverConfig) -> Result<WaveSolver> {
        match self {
            Self::Text(sample) => WaveSolver::new(
                sample.grid(),
                sample.tile_count(),
                sample.histogram().clone(),
                config,
            ),
            Self::Pixels(sample) => WaveSolver::new(
                sample.grid(),
                sample.tile_count(),
                sample.histogram().clone(),
                config,
            ),
        }
    }

    fn export(&self, generated: &Grid<usize>, path: &Path) -> Result<()> {
        match self {
            Self::Text(sample) => sample.export(generated, path),
            Self::Pixels(sample) => sample.export(generated, path),
        }
    }
}

fn is_sample_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("txt" | "png")
    )
}

/// Appends the result suffix to a sample's file stem, keeping its extension
fn output_path_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let extension = input.extension().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{extension}"))
}

/// Orchestrates batch processing of sample files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate a pattern for every sample the target names
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a sample file or directory, or
    /// if any sample fails to load, solve, or export.
    pub fn process(&mut self) -> Result<()> {
        let samples = self.gather_samples()?;
        if samples.is_empty() {
            return Ok(());
        }

        if let Some(ref mut progress) = self.progress {
            progress.initialize(samples.len());
        }
        for (index, path) in samples.iter().enumerate() {
            self.process_sample(path, index)?;
        }
        if let Some(ref progress) = self.progress {
            progress.finish();
        }
        Ok(())
    }

    fn gather_samples(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if !is_sample_file(&self.cli.target) {
                return Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a .txt or .png sample",
                ));
            }
            let mut found = vec![self.cli.target.clone()];
            found.retain(|path| self.wants(path));
            return Ok(found);
        }

        if !self.cli.target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a sample file or directory",
            ));
        }

        let mut found = Vec::new();
        for entry in std::fs::read_dir(&self.cli.target)? {
            let path = entry?.path();
            if is_sample_file(&path) && self.wants(path.as_path()) {
                found.push(path);
            }
        }
        found.sort();
        Ok(found)
    }

    fn wants(&self, input: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path_for(input).exists() {
            return true;
        }
        // Allow print for user feedback for progress messages
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!("Skipping: {} (output exists)", input.display());
        }
        false
    }

    fn process_sample(&mut self, input: &Path, index: usize) -> Result<()> {
        let config = self.cli.solver_config();
        if let Some(ref mut progress) = self.progress {
            progress.start_file(index, input, config.rows * config.cols);
        }

        let sample = Sample::load(input, self.cli.tile_size)?;
        let mut solver = sample.solver(config)?;
        let generated = self.drive(&mut solver, index)?;
        sample.export(&generated, &output_path_for(input))?;

        if let Some(ref mut progress) = self.progress {
            progress.complete_file(index);
        }
        Ok(())
    }

    /// Step the solver to completion, updating progress between collapses
    fn drive(&mut self, solver: &mut WaveSolver, index: usize) -> Result<Grid<usize>> {
        loop {
            let report = solver.execute_iteration()?;
            if let Some(ref mut progress) = self.progress {
                progress.update_solving(index, report.collapsed, report.attempt);
            }
            if report.status == IterationStatus::Complete {
                return solver.generate();
            }
        }
    }
}
