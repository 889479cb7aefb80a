//! Core types and structures for selector-forge

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::error::{ForgeError, Result};
use crate::hash::{Digest, HashAlgorithm, Target};

/// Environment variable selecting the hash algorithm
pub const ENV_ALGORITHM: &str = "SELECTOR_FORGE_ALGORITHM";
/// Environment variable enabling the parallel search
pub const ENV_PARALLEL: &str = "SELECTOR_FORGE_PARALLEL";
/// Environment variable naming a default grammar file
pub const ENV_GRAMMAR: &str = "SELECTOR_FORGE_GRAMMAR";

/// A candidate whose digest prefix equals the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub candidate: String,
    /// Full digest, `0x`-prefixed lowercase hex
    pub digest: String,
    pub target: Target,
    /// 0-based position of the candidate in enumeration order
    pub position: u64,
    pub found_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(candidate: String, digest: &Digest, target: &Target, position: u64) -> Self {
        Self {
            candidate,
            digest: digest.to_string(),
            target: target.clone(),
            position,
            found_at: Utc::now(),
        }
    }
}

/// Terminal outcome of a single-target search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(MatchRecord),
    /// Every candidate was hashed and none matched
    NotFound { candidates_tried: u64 },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn match_record(&self) -> Option<&MatchRecord> {
        match self {
            SearchOutcome::Found(record) => Some(record),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

/// Search state: a run starts `Searching` and ends `Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Searching,
    Done,
}

/// Progress info passed to search callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    pub tried: u64,
    pub total: u64,
    pub status: SearchStatus,
}

impl SearchProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.tried as f64 / self.total as f64) * 100.0
        }
    }
}

/// Summary of a completed search run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub algorithm: HashAlgorithm,
    pub target: Target,
    pub outcome: SearchOutcome,
    /// Candidates hashed, including the match
    pub candidates_tried: u64,
    /// Size of the full candidate space
    pub candidate_count: u64,
    pub elapsed_ms: u64,
}

/// Configuration for a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub algorithm: HashAlgorithm,
    /// Shard the candidate space across threads
    pub parallel: bool,
    /// Report progress every N candidates
    pub progress_interval: u64,
    /// Grammar file used when none is given explicitly
    pub grammar_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Keccak256,
            parallel: false,
            progress_interval: 1000,
            grammar_path: None,
        }
    }
}

impl SearchConfig {
    /// Defaults overridden by `SELECTOR_FORGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(algorithm) = std::env::var(ENV_ALGORITHM) {
            config.algorithm = algorithm.parse()?;
        }

        if let Ok(parallel) = std::env::var(ENV_PARALLEL) {
            config.parallel = parse_flag(&parallel).ok_or_else(|| {
                ForgeError::config(format!("{} must be true or false, got '{}'", ENV_PARALLEL, parallel))
            })?;
        }

        if let Ok(path) = std::env::var(ENV_GRAMMAR) {
            if !path.trim().is_empty() {
                config.grammar_path = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
