//! Selector Forge - grammar-driven pre-image search for short hash prefixes
//!
//! Composes candidate strings from token sets, hashes each one and stops at
//! the first whose digest starts with the target fingerprint. The default use
//! is recovering Solidity function signatures from 4-byte selectors.

pub mod error;
pub mod grammar;
pub mod hash;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use error::{ForgeError, Result};
pub use grammar::{CandidateGenerator, Grammar, TokenSet};
pub use hash::{matches, Digest, HashAlgorithm, Hasher, Target};
pub use search::{match_all, search, SelectorSearch};
pub use types::{
    MatchRecord, SearchConfig, SearchOutcome, SearchProgress, SearchReport, SearchStatus,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
