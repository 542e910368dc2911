//! Parallel IDA* solver
//!
//! `find_solution` runs several threshold ladders on scoped threads. Each
//! ladder submits its root-move tasks to a rayon pool built for that call.

use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;
use std::any::Any;
use std::panic;
use std::sync::Arc;
use std::thread;

use crate::board::{Board, BoardModel};
use crate::cache::{CacheKey, SolutionCache};
use crate::error::SolverResult;
use crate::eval::heuristic;

use super::limits::SolverConfig;
use super::shared::{RunState, SearchControl};
use super::supervisor::Supervisor;
use super::types::{Progress, SearchResult, SearchStats, TerminationReason};

/// Finds a shortest jump sequence that leaves `target` pegs.
///
/// `pause`, `resume` and `stop` may be called from other threads while
/// `find_solution` runs (share the solver through an `Arc`).
pub struct Solver<B: BoardModel = Board> {
    root: B,
    target: u32,
    config: SolverConfig,
    cache: Arc<SolutionCache>,
    control: SearchControl,
}

impl<B: BoardModel> Solver<B> {
    pub fn new(board: B, target: u32) -> Self {
        Self {
            root: board,
            target,
            config: SolverConfig::default(),
            cache: Arc::new(SolutionCache::new()),
            control: SearchControl::new(),
        }
    }

    /// Solver for the classic goal of a single remaining peg
    pub fn with_defaults(board: B) -> Self {
        Self::new(board, 1)
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Share a solution cache with other solvers
    pub fn with_cache(mut self, cache: Arc<SolutionCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn board(&self) -> &B {
        &self.root
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<SolutionCache> {
        &self.cache
    }

    /// Park every running task at its next probe
    pub fn pause(&self) {
        info!("search paused");
        self.control.pause();
    }

    pub fn resume(&self) {
        info!("search resumed");
        self.control.resume();
    }

    /// Abort the running search. Also resumes a paused one.
    pub fn stop(&self) {
        info!("stop requested");
        self.control.request_stop();
    }

    pub fn is_paused(&self) -> bool {
        self.control.is_paused()
    }

    pub fn has_timed_out(&self) -> bool {
        self.control.has_timed_out()
    }

    fn cache_key(&self) -> CacheKey {
        CacheKey::new(self.root.topology(), self.target, self.root.fingerprint())
    }

    /// Search without progress reporting
    pub fn solve(&self) -> SolverResult<SearchResult> {
        self.find_solution(|_| {})
    }

    /// Search for a solution, reporting progress through `progress`.
    ///
    /// `progress` is called from supervisor threads with one
    /// [`Progress::Iteration`] per threshold, then once with
    /// [`Progress::Finished`] before returning.
    ///
    /// # Panics
    /// Re-raises the panic of a supervisor, e.g. when the board rejects a
    /// move it generated or fails to undo one.
    pub fn find_solution<F>(&self, progress: F) -> SolverResult<SearchResult>
    where
        F: Fn(Progress) + Sync,
    {
        self.config.validate()?;

        let key = self.cache_key();
        if let Some(path) = self.cache.get(&key) {
            info!("solution found in cache ({} moves)", path.len());
            progress(Progress::Finished);
            return Ok(SearchResult::new(path, TerminationReason::Cached, SearchStats::default()));
        }

        self.control.reset();
        let run = RunState::new(self.config.time_limit(), self.target);

        let pegs = self.root.peg_count();
        if pegs <= self.target {
            info!("board already has {pegs} pegs (target {})", self.target);
            self.cache.insert(key, Vec::new());
            progress(Progress::Finished);
            let stats = SearchStats {
                elapsed: run.elapsed(),
                ..SearchStats::default()
            };
            return Ok(SearchResult::new(Vec::new(), TerminationReason::Solved, stats));
        }

        let base_heuristic = heuristic(&self.root);
        let max_depth = pegs - 1;
        let supervisors = self.config.supervisor_count();
        let workers = self.config.worker_count();
        let root_moves = self.root.legal_moves();

        info!(
            "starting search: {} board, {pegs} pegs, target {}, h0 {base_heuristic}, \
             {supervisors} supervisors, {workers} workers",
            self.root.topology(),
            self.target
        );

        let pool = if workers > 1 {
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("hiq-worker-{i}"))
                    .build()?,
            )
        } else {
            None
        };

        let progress = &progress;
        let panicked = thread::scope(|scope| -> SolverResult<Option<Box<dyn Any + Send>>> {
            let mut handles = Vec::with_capacity(supervisors);
            for index in 0..supervisors {
                let supervisor = Supervisor {
                    index,
                    step: supervisors as u32,
                    root: &self.root,
                    root_moves: &root_moves,
                    max_depth,
                    control: &self.control,
                    run: &run,
                    pool: pool.as_ref(),
                };
                let spawned = thread::Builder::new()
                    .name(format!("hiq-supervisor-{index}"))
                    .spawn_scoped(scope, move || supervisor.run(base_heuristic, progress));
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(err) => {
                        // Wind down the ladders already running before bailing out.
                        self.control.request_stop();
                        return Err(err.into());
                    }
                }
            }

            let mut panicked = None;
            for (index, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(outcome) => debug!("supervisor {index} finished: {outcome:?}"),
                    Err(payload) => {
                        warn!("supervisor {index} panicked; stopping the search");
                        self.control.request_stop();
                        if panicked.is_none() {
                            panicked = Some(payload);
                        }
                    }
                }
            }
            Ok(panicked)
        })?;

        // A broken board invariant is fatal; surface it to the caller.
        if let Some(payload) = panicked {
            panic::resume_unwind(payload);
        }

        let stats = SearchStats {
            nodes: run.nodes(),
            iterations: run.iterations(),
            elapsed: run.elapsed(),
            supervisors,
        };

        let result = if let Some(path) = run.take_solution() {
            info!(
                "solution found: {} moves, {} nodes in {:.3}s",
                path.len(),
                stats.nodes,
                stats.elapsed.as_secs_f64()
            );
            self.cache.insert(key, path.clone());
            SearchResult::new(path, TerminationReason::Solved, stats)
        } else if self.control.has_timed_out() {
            info!("search timed out after {:.3}s", stats.elapsed.as_secs_f64());
            SearchResult::unsolved(TerminationReason::TimeLimit, stats)
        } else if self.control.is_stopped() {
            info!("search interrupted by user");
            SearchResult::unsolved(TerminationReason::UserStop, stats)
        } else {
            info!("no solution found ({} nodes)", stats.nodes);
            SearchResult::unsolved(TerminationReason::NoSolution, stats)
        };

        progress(Progress::Finished);
        Ok(result)
    }
}

