//! Selector search controller

use std::time::Instant;

use rayon::prelude::*;

use super::search;
use crate::grammar::Grammar;
use crate::hash::{HashAlgorithm, Hasher, Target};
use crate::types::{MatchRecord, SearchConfig, SearchOutcome, SearchProgress, SearchReport, SearchStatus};

/// Drives one grammar against one target
pub struct SelectorSearch<H = HashAlgorithm> {
    grammar: Grammar,
    target: Target,
    config: SearchConfig,
    hasher: H,
}

impl SelectorSearch<HashAlgorithm> {
    /// Create a search hashing with `config.algorithm`
    pub fn new(grammar: Grammar, target: Target, config: SearchConfig) -> Self {
        let hasher = config.algorithm;
        Self {
            grammar,
            target,
            config,
            hasher,
        }
    }
}

impl<H: Hasher> SelectorSearch<H> {
    /// Replace the hasher
    pub fn with_hasher<H2: Hasher>(self, hasher: H2) -> SelectorSearch<H2> {
        SelectorSearch {
            grammar: self.grammar,
            target: self.target,
            config: self.config,
            hasher,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run using the configured mode, without progress reporting
    pub fn run(&self) -> SearchReport {
        if self.config.parallel {
            self.run_parallel()
        } else {
            self.run_with_progress(|_| {})
        }
    }

    /// Sequential scan, calling `on_progress` every `progress_interval`
    /// candidates and once more when done
    pub fn run_with_progress<F>(&self, mut on_progress: F) -> SearchReport
    where
        F: FnMut(&SearchProgress),
    {
        let start = Instant::now();
        let total = self.grammar.candidate_count();
        let interval = self.config.progress_interval.max(1);
        self.log_start(total, "sequential");

        let mut tried = 0u64;
        let candidates = self.grammar.candidates().inspect(|_| {
            tried += 1;
            if tried % interval == 0 {
                on_progress(&SearchProgress {
                    tried,
                    total,
                    status: SearchStatus::Searching,
                });
            }
        });
        let found = search(candidates, &self.hasher, &self.target);

        on_progress(&SearchProgress {
            tried,
            total,
            status: SearchStatus::Done,
        });
        self.finish(found, tried, total, start)
    }

    /// Shard the slot space across the rayon pool.
    ///
    /// Returns the same match as the sequential scan: the first one in
    /// enumeration order.
    pub fn run_parallel(&self) -> SearchReport {
        let start = Instant::now();
        let total = self.grammar.candidate_count();
        self.log_start(total, "parallel");

        let generator = self.grammar.candidates();
        let found = (0..generator.slot_count())
            .into_par_iter()
            .find_map_first(|slot| {
                let candidate = generator.candidate_at(slot)?;
                let digest = self.hasher.digest(candidate.as_bytes());
                self.target.matches(&digest).then(|| {
                    MatchRecord::new(candidate, &digest, &self.target, generator.position_of(slot))
                })
            });

        // Work stealing may hash past the winner; report the sequential count.
        let tried = found.as_ref().map_or(total, |record| record.position + 1);
        self.finish(found, tried, total, start)
    }

    fn log_start(&self, total: u64, mode: &str) {
        tracing::info!(
            selector = %self.target,
            algorithm = %self.config.algorithm,
            candidates = total,
            mode,
            "Starting selector search"
        );
    }

    fn finish(&self, found: Option<MatchRecord>, tried: u64, total: u64, start: Instant) -> SearchReport {
        let elapsed = start.elapsed();
        let outcome = match found {
            Some(record) => {
                tracing::info!(
                    selector = %self.target,
                    candidate = %record.candidate,
                    position = record.position,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Match found"
                );
                SearchOutcome::Found(record)
            }
            None => {
                tracing::info!(
                    selector = %self.target,
                    candidates = tried,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Search exhausted without a match"
                );
                SearchOutcome::NotFound {
                    candidates_tried: tried,
                }
            }
        };

        SearchReport {
            algorithm: self.config.algorithm,
            target: self.target.clone(),
            outcome,
            candidates_tried: tried,
            candidate_count: total,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}
