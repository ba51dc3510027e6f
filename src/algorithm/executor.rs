use crate::algorithm::bitset::TileDomain;
use crate::algorithm::model::CompatibilityModel;
use crate::algorithm::propagation::{Contradiction, propagate};
use crate::algorithm::scheduler::EntropyQueue;
use crate::analysis::weights::{Histogram, entropy};
use crate::io::configuration::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED,
    MAX_GRID_DIMENSION,
};
use crate::io::error::{GenerationError, computation_error, invalid_parameter};
use crate::spatial::Grid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What to do when an attempt ends in a contradiction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Fail the whole generation after this many contradicted attempts
    Bounded(usize),
    /// Restart until an attempt succeeds, however long that takes
    Unbounded,
}

/// Output dimensions, seed, and retry policy for one generation
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Output grid height in cells
    pub rows: usize,
    /// Output grid width in cells
    pub cols: usize,
    /// Seed for the generation's single random stream
    pub seed: u64,
    /// Restart behaviour on contradiction
    pub retry: RetryPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_OUTPUT_HEIGHT,
            cols: DEFAULT_OUTPUT_WIDTH,
            seed: DEFAULT_SEED,
            retry: RetryPolicy::Bounded(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// Seeded random selector for reproducible stochastic choices
///
/// One instance drives all sampling across every attempt of a generation;
/// it is never reseeded mid-run, so a seed fully determines the outcome.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generic weighted random selection
    ///
    /// Returns an index into the weights array using the cumulative
    /// distribution; degenerate all-zero weights fall back to index 0.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len() - 1
    }
}

/// Outcome of a single solver step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationStatus {
    /// A cell was collapsed and its consequences propagated
    InProgress,
    /// A contradiction discarded the attempt; a fresh one has begun
    Restarted,
    /// Every cell is permanently set
    Complete,
}

/// Progress snapshot returned by each solver step
#[derive(Clone, Copy, Debug)]
pub struct StepReport {
    /// Outcome of this step
    pub status: IterationStatus,
    /// Cells permanently set so far in the current attempt
    pub collapsed: usize,
    /// Total cells in the output grid
    pub total: usize,
    /// Current attempt number, starting at 1
    pub attempt: usize,
}

/// Wave function collapse solver over one output grid
///
/// Holds the immutable compatibility model and histogram for the whole
/// generation, plus the attempt-scoped wave, generated grid, and scheduler,
/// which are rebuilt from scratch after every contradiction. The solver is
/// driven one collapse at a time so callers can report progress between
/// steps; [`WaveSolver::generate`] drives it to completion.
pub struct WaveSolver {
    model: CompatibilityModel,
    histogram: Histogram,
    tile_count: usize,
    rows: usize,
    cols: usize,
    retry: RetryPolicy,
    selector: RandomSelector,
    wave: Grid<TileDomain>,
    generated: Grid<Option<usize>>,
    queue: EntropyQueue,
    attempt: usize,
    collapsed: usize,
}

impl WaveSolver {
    /// Create a solver from a sample grid and its derived statistics
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sample is empty or the tile count is zero
    /// - The histogram does not cover exactly `tile_count` tiles
    /// - An output dimension is zero or exceeds the safety cap
    pub fn new(
        sample: &Grid<usize>,
        tile_count: usize,
        histogram: Histogram,
        config: SolverConfig,
    ) -> crate::io::error::Result<Self> {
        if sample.is_empty() {
            return Err(GenerationError::InvalidSourceData {
                reason: "sample grid has no cells".to_string(),
            });
        }
        if tile_count == 0 {
            return Err(GenerationError::InvalidSourceData {
                reason: "sample contains no tiles".to_string(),
            });
        }
        if histogram.tile_count() != tile_count {
            return Err(invalid_parameter(
                "histogram",
                &histogram.tile_count(),
                &format!("must cover exactly {tile_count} tiles"),
            ));
        }
        for (name, value) in [("rows", config.rows), ("cols", config.cols)] {
            if value == 0 {
                return Err(invalid_parameter(name, &value, &"must be at least 1"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("exceeds maximum grid dimension {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let model = CompatibilityModel::from_sample(sample, tile_count);
        let selector = RandomSelector::new(config.seed);

        let mut solver = Self {
            model,
            histogram,
            tile_count,
            rows: config.rows,
            cols: config.cols,
            retry: config.retry,
            selector,
            wave: Grid::new(config.rows, config.cols, TileDomain::all(tile_count)),
            generated: Grid::new(config.rows, config.cols, None),
            queue: EntropyQueue::new(),
            attempt: 1,
            collapsed: 0,
        };
        solver.seed_queue();
        Ok(solver)
    }

    /// Current attempt number, starting at 1
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// Cells permanently set so far in the current attempt
    pub const fn collapsed_cells(&self) -> usize {
        self.collapsed
    }

    /// Total cells in the output grid
    pub const fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Access the current wave of per-cell domains
    pub const fn wave(&self) -> &Grid<TileDomain> {
        &self.wave
    }

    /// Execute a single solver step: pop, sample, commit, propagate
    ///
    /// A contradiction inside the step restarts the attempt and reports
    /// [`IterationStatus::Restarted`] rather than failing, unless a bounded
    /// retry policy has run out.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AttemptsExhausted`] when a contradiction
    /// ends the last attempt a bounded policy allows.
    pub fn execute_iteration(&mut self) -> crate::io::error::Result<StepReport> {
        let Some(position) = self.next_position() else {
            return Ok(self.report(IterationStatus::Complete));
        };

        let Some(domain) = self.wave.get(position).cloned() else {
            return Err(computation_error(
                "execute_iteration",
                &format!("scheduled position {position:?} is outside the wave"),
            ));
        };

        if domain.is_empty() {
            return self.restart_after(Contradiction { position });
        }

        let tile = self.sample_tile(&domain);
        if let Some(cell) = self.wave.get_mut(position) {
            cell.collapse_to(tile);
        }
        self.generated.set(position, Some(tile));
        self.collapsed += 1;

        match propagate(
            &self.model,
            &self.histogram,
            &self.generated,
            &mut self.wave,
            &mut self.queue,
            position,
        ) {
            Ok(()) => Ok(self.report(IterationStatus::InProgress)),
            Err(contradiction) => self.restart_after(contradiction),
        }
    }

    /// Drive the solver until every cell is permanently set
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AttemptsExhausted`] if a bounded retry
    /// policy runs out before any attempt completes.
    pub fn generate(&mut self) -> crate::io::error::Result<Grid<usize>> {
        loop {
            let report = self.execute_iteration()?;
            if report.status == IterationStatus::Complete {
                return self.finished_grid();
            }
        }
    }

    /// Pop scheduled positions until one not yet permanently set turns up
    fn next_position(&mut self) -> Option<[i32; 2]> {
        while let Some(position) = self.queue.pop_min() {
            if self.generated.get(position).copied().flatten().is_none() {
                return Some(position);
            }
        }
        None
    }

    /// Sample one tile from a domain, weighted by the global histogram
    fn sample_tile(&mut self, domain: &TileDomain) -> usize {
        let viable = domain.to_vec();
        let weights: Vec<f64> = viable
            .iter()
            .map(|&tile| self.histogram.probability(tile))
            .collect();
        let choice = self.selector.weighted_choice(&weights);
        viable.get(choice).copied().unwrap_or(0)
    }

    /// Discard the attempt state and begin the next attempt
    fn restart_after(
        &mut self,
        contradiction: Contradiction,
    ) -> crate::io::error::Result<StepReport> {
        if let RetryPolicy::Bounded(cap) = self.retry
            && self.attempt >= cap
        {
            return Err(GenerationError::AttemptsExhausted {
                attempts: self.attempt,
                position: contradiction.position,
            });
        }

        self.attempt += 1;
        self.collapsed = 0;
        self.wave = Grid::new(self.rows, self.cols, TileDomain::all(self.tile_count));
        self.generated = Grid::new(self.rows, self.cols, None);
        self.queue = EntropyQueue::new();
        self.seed_queue();

        Ok(self.report(IterationStatus::Restarted))
    }

    /// Schedule every cell at the entropy of the full domain
    fn seed_queue(&mut self) {
        let full = TileDomain::all(self.tile_count);
        let h = entropy(&self.histogram, &full);
        for position in self.wave.positions() {
            self.queue.update(position, h);
        }
    }

    /// Extract the completed output grid
    fn finished_grid(&self) -> crate::io::error::Result<Grid<usize>> {
        let mut output = Grid::new(self.rows, self.cols, 0usize);
        for position in self.generated.positions() {
            match self.generated.get(position).copied().flatten() {
                Some(tile) => output.set(position, tile),
                None => {
                    return Err(computation_error(
                        "finished_grid",
                        &format!("cell {position:?} left unset after completion"),
                    ));
                }
            }
        }
        Ok(output)
    }

    const fn report(&self, status: IterationStatus) -> StepReport {
        StepReport {
            status,
            collapsed: self.collapsed,
            total: self.total_cells(),
            attempt: self.attempt,
        }
    }
}

/// One-shot generation from a sample grid
///
/// Convenience wrapper that builds a [`WaveSolver`] and drives it to
/// completion under the given configuration.
///
/// # Errors
///
/// Returns an error if solver construction fails or a bounded retry policy
/// exhausts its attempts.
pub fn generate(
    sample: &Grid<usize>,
    tile_count: usize,
    histogram: Histogram,
    config: SolverConfig,
) -> crate::io::error::Result<Grid<usize>> {
    WaveSolver::new(sample, tile_count, histogram, config)?.generate()
}
