//! Lightweight wall clock timers for the solver phases.

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Stopwatch {
    start: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(t0) = self.start.take() {
            self.elapsed += t0.elapsed();
        }
    }

    // bank the running time but stay active
    fn suspend(&mut self) {
        if let Some(t0) = self.start {
            self.elapsed += t0.elapsed();
        }
    }

    fn resume(&mut self) {
        if self.start.is_some() {
            self.start = Some(Instant::now());
        }
    }
}

/// Named timers that may be nested.  Timing of a key accumulates over
/// repeated `start_as_current` / `stop_current` pairs until it is reset.
#[derive(Debug, Default)]
pub(crate) struct Timers {
    stack: Vec<&'static str>,
    watches: HashMap<&'static str, Stopwatch>,
}

impl Timers {
    pub fn reset_timer(&mut self, key: &'static str) {
        self.watches.insert(key, Stopwatch::default());
    }

    pub fn start_as_current(&mut self, key: &'static str) {
        self.watches.entry(key).or_default().start();
        self.stack.push(key);
    }

    pub fn stop_current(&mut self) {
        if let Some(key) = self.stack.pop() {
            if let Some(w) = self.watches.get_mut(key) {
                w.stop();
            }
        }
    }

    /// Pause every running timer.  Used by `notimeit!`
    pub fn suspend(&mut self) {
        self.watches.values_mut().for_each(Stopwatch::suspend);
    }

    /// Restart every paused timer.  Used by `notimeit!`
    pub fn resume(&mut self) {
        self.watches.values_mut().for_each(Stopwatch::resume);
    }

    /// accumulated time of `key`, zero if never started
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.watches.get(key).map_or(Duration::ZERO, |w| w.elapsed)
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {
        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {
        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;
