//! Shared state for the parallel solver
//!
//! [`SearchControl`] outlives a single search and carries the user-facing
//! flags (stop, pause, timed out). [`RunState`] is created per
//! `find_solution` call and holds the bound, the committed path and counters.

use crate::types::Move;
use log::debug;
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::types::UNBOUNDED;

/// Cooperative control flags shared by every task of a solver
#[derive(Debug, Default)]
pub struct SearchControl {
    stop: AtomicBool,
    paused: AtomicBool,
    timed_out: AtomicBool,
    pause_lock: Mutex<()>,
    resumed: Condvar,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear stop and timeout before a new search. Pause is left as is.
    pub fn reset(&self) {
        self.stop.store(false, Ordering::Release);
        self.timed_out.store(false, Ordering::Release);
    }

    /// Request stop and wake any parked task
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
        self.resume();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        // Taking the lock orders this notify after any waiter's flag check.
        let _guard = self.pause_lock.lock();
        self.resumed.notify_all();
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    pub fn mark_timed_out(&self) {
        self.timed_out.store(true, Ordering::Release);
    }

    #[inline]
    pub fn has_timed_out(&self) -> bool {
        self.timed_out.load(Ordering::Acquire)
    }

    /// Park the calling thread while paused, until resumed or stopped
    pub fn wait_while_paused(&self) {
        if !self.is_paused() {
            return;
        }
        let mut guard = self.pause_lock.lock();
        while self.is_paused() && !self.is_stopped() {
            self.resumed.wait(&mut guard);
        }
    }
}

/// State of one `find_solution` call
#[derive(Debug)]
pub struct RunState {
    start: Instant,
    time_limit: Duration,
    target: u32,
    /// Shortest solution depth seen so far; only ever lowered
    best_depth: AtomicU32,
    found: AtomicBool,
    solution: Mutex<Option<Vec<Move>>>,
    nodes: AtomicU64,
    iterations: AtomicU64,
}

impl RunState {
    pub fn new(time_limit: Duration, target: u32) -> Self {
        Self {
            start: Instant::now(),
            time_limit,
            target,
            best_depth: AtomicU32::new(UNBOUNDED),
            found: AtomicBool::new(false),
            solution: Mutex::new(None),
            nodes: AtomicU64::new(0),
            iterations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the wall-clock budget is spent; the first caller to notice
    /// marks the control as timed out.
    pub fn budget_exhausted(&self, control: &SearchControl) -> bool {
        if self.elapsed() > self.time_limit {
            control.mark_timed_out();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn best_depth(&self) -> u32 {
        self.best_depth.load(Ordering::Acquire)
    }

    /// Lower the best depth to `depth` if it is strictly smaller.
    ///
    /// Returns `true` if this call lowered it.
    pub fn lower_best_depth(&self, depth: u32) -> bool {
        let mut current = self.best_depth.load(Ordering::Acquire);
        while depth < current {
            match self.best_depth.compare_exchange_weak(
                current,
                depth,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
        false
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Commit a complete path.
    ///
    /// Accepted only when not stopped, not longer than the best depth, and
    /// strictly shorter than an already committed path.
    pub fn commit(&self, path: Vec<Move>, control: &SearchControl) -> bool {
        let mut solution = self.solution.lock();
        if control.is_stopped() {
            return false;
        }
        let depth = path.len() as u32;
        if depth > self.best_depth() {
            return false;
        }
        if solution.as_ref().is_some_and(|current| current.len() <= path.len()) {
            return false;
        }
        debug!("committed solution of depth {depth}");
        *solution = Some(path);
        self.found.store(true, Ordering::Release);
        true
    }

    pub fn take_solution(&self) -> Option<Vec<Move>> {
        self.solution.lock().take()
    }

    pub fn add_nodes(&self, nodes: u64) {
        self.nodes.fetch_add(nodes, Ordering::Relaxed);
    }

    pub fn nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub fn add_iteration(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }
}
