//! Candidate grammar - token sets composed into signature candidates
//!
//! A grammar is an ordered list of name roles (e.g. verb, noun, suffix), a flat
//! list of argument structures, and optional literal signatures tried last.

mod generator;
pub mod words;

pub use generator::CandidateGenerator;
pub use words::{find_preset, preset_names, Preset, PRESETS};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::config_error;
use crate::error::{ForgeError, Result};

/// Role name used for the structure list in errors
pub const STRUCTURE_ROLE: &str = "structure";
/// Role name used when the role list itself is empty
pub const ROLES_ROLE: &str = "roles";
/// Role name used when every assembled name is empty
pub const NAME_ROLE: &str = "name";

/// A named, ordered list of interchangeable fragments.
///
/// The empty string is a valid token: it contributes zero characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub role: String,
    pub tokens: Vec<String>,
}

impl TokenSet {
    pub fn new<S: Into<String>>(role: impl Into<String>, tokens: impl IntoIterator<Item = S>) -> Self {
        Self {
            role: role.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of empty-string tokens in this set
    pub fn empty_tokens(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_empty()).count()
    }
}

/// On-disk grammar layout, validated into a [`Grammar`]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GrammarFile {
    roles: Vec<TokenSet>,
    structures: Vec<String>,
    #[serde(default)]
    literals: Vec<String>,
}

/// Validated candidate grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grammar {
    roles: Vec<TokenSet>,
    structures: Vec<String>,
    literals: Vec<String>,
}

impl Grammar {
    /// Create a grammar from ordered name roles and a structure list
    pub fn new<S: Into<String>>(
        roles: Vec<TokenSet>,
        structures: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        Self::build(roles, structures.into_iter().map(Into::into).collect(), Vec::new())
    }

    /// Validate roles, structures and literals together
    fn build(roles: Vec<TokenSet>, structures: Vec<String>, literals: Vec<String>) -> Result<Self> {
        let grammar = Self {
            roles,
            structures,
            literals: Vec::new(),
        }
        .with_literals(literals);
        grammar.validate()?;
        Ok(grammar)
    }

    /// The conventional verb + noun + suffix layout
    pub fn standard<S: Into<String>>(
        verbs: impl IntoIterator<Item = S>,
        nouns: impl IntoIterator<Item = S>,
        suffixes: impl IntoIterator<Item = S>,
        structures: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        Self::new(
            vec![
                TokenSet::new("verb", verbs),
                TokenSet::new("noun", nouns),
                TokenSet::new("suffix", suffixes),
            ],
            structures,
        )
    }

    /// Add literal signatures, tried verbatim after the product.
    ///
    /// Empty literals are dropped.
    pub fn with_literals<S: Into<String>>(mut self, literals: impl IntoIterator<Item = S>) -> Self {
        self.literals.extend(
            literals
                .into_iter()
                .map(Into::into)
                .filter(|l: &String| !l.is_empty()),
        );
        self
    }

    /// Build a grammar from a built-in preset
    pub fn preset(name: &str) -> Result<Self> {
        let preset = find_preset(name).ok_or_else(|| {
            config_error!(
                "unknown preset '{}' (available: {})",
                name,
                preset_names().join(", ")
            )
        })?;
        Self::from_preset(preset)
    }

    pub fn from_preset(preset: &Preset) -> Result<Self> {
        let roles = preset
            .roles
            .iter()
            .map(|(role, tokens)| TokenSet::new(*role, tokens.iter().copied()))
            .collect();
        Self::build(
            roles,
            preset.structures.iter().map(|s| s.to_string()).collect(),
            preset.literals.iter().map(|l| l.to_string()).collect(),
        )
    }

    /// Parse a grammar from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let file: GrammarFile = serde_json::from_str(content)
            .map_err(|e| ForgeError::parse(e.to_string(), Some(content.to_string())))?;
        Self::build(file.roles, file.structures, file.literals)
    }

    /// Load a grammar from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;
        let grammar = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            roles = grammar.roles.len(),
            structures = grammar.structures.len(),
            literals = grammar.literals.len(),
            "Loaded grammar"
        );
        Ok(grammar)
    }

    fn validate(&self) -> Result<()> {
        if self.roles.is_empty() {
            return Err(ForgeError::empty_configuration(ROLES_ROLE));
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            if !seen.insert(role.role.as_str()) {
                return Err(config_error!("duplicate role '{}'", role.role));
            }
            if role.is_empty() {
                return Err(ForgeError::empty_configuration(role.role.clone()));
            }
        }

        if self.structures.is_empty() {
            return Err(ForgeError::empty_configuration(STRUCTURE_ROLE));
        }
        if self.structures.iter().any(|s| s.is_empty()) {
            return Err(config_error!("structures must not contain empty entries"));
        }

        // The slot space must be addressable by a u64 index.
        self.roles
            .iter()
            .try_fold(self.structures.len() as u64, |acc, role| acc.checked_mul(role.len() as u64))
            .ok_or_else(|| config_error!("search space does not fit in 64 bits"))?;

        if self.candidate_count() == 0 {
            return Err(ForgeError::empty_configuration(NAME_ROLE));
        }

        Ok(())
    }

    pub fn roles(&self) -> &[TokenSet] {
        &self.roles
    }

    pub fn structures(&self) -> &[String] {
        &self.structures
    }

    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Number of (role-combination, structure) slots in the product
    pub fn product_slots(&self) -> u64 {
        self.name_slots() * self.structures.len() as u64
    }

    /// Number of name-role combinations
    pub fn name_slots(&self) -> u64 {
        self.roles.iter().map(|r| r.len() as u64).product()
    }

    /// Number of name-role combinations whose concatenation is empty
    pub fn empty_name_slots(&self) -> u64 {
        self.roles.iter().map(|r| r.empty_tokens() as u64).product()
    }

    /// Exact number of candidates the generator yields
    pub fn candidate_count(&self) -> u64 {
        (self.name_slots() - self.empty_name_slots()) * self.structures.len() as u64
            + self.literals.len() as u64
    }

    /// Fresh candidate sequence from the start
    pub fn candidates(&self) -> CandidateGenerator<'_> {
        CandidateGenerator::new(self)
    }
}
