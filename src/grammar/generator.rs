//! Candidate generator - lazy odometer over a grammar

use super::Grammar;

/// Lazy generator over every candidate of a [`Grammar`].
///
/// Candidates are addressed by slot: the mixed-radix product of the name
/// roles and the structure list (structure varies fastest), followed by one
/// slot per literal. Slots whose assembled name is empty yield nothing.
#[derive(Debug, Clone)]
pub struct CandidateGenerator<'g> {
    grammar: &'g Grammar,
    /// Name-index stride of each role (product of the lengths after it)
    strides: Vec<u64>,
    product_slots: u64,
    total: u64,
    current_index: u64,
}

impl<'g> CandidateGenerator<'g> {
    /// Create a generator positioned at the first slot
    pub fn new(grammar: &'g Grammar) -> Self {
        let roles = grammar.roles();
        let mut strides = vec![1u64; roles.len()];
        for i in (0..roles.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * roles[i + 1].len() as u64;
        }

        let product_slots = grammar.product_slots();
        Self {
            grammar,
            strides,
            product_slots,
            total: product_slots + grammar.literals().len() as u64,
            current_index: 0,
        }
    }

    /// Total number of slots (including empty-name slots)
    pub fn slot_count(&self) -> u64 {
        self.total
    }

    /// Exact number of candidates yielded by a full pass
    pub fn candidate_count(&self) -> u64 {
        self.grammar.candidate_count()
    }

    /// Get current slot index
    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    /// Move to a slot index
    pub fn set_index(&mut self, index: u64) {
        self.current_index = index.min(self.total);
    }

    /// Rewind to the first slot
    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Candidate at a specific slot, `None` for empty names or out of range
    pub fn candidate_at(&self, index: u64) -> Option<String> {
        if index >= self.total {
            return None;
        }

        if index >= self.product_slots {
            let literal = (index - self.product_slots) as usize;
            return self.grammar.literals().get(literal).cloned();
        }

        let structures = self.grammar.structures();
        let structure = &structures[(index % structures.len() as u64) as usize];
        let name_index = index / structures.len() as u64;

        let name_len: usize = self.fragments(name_index).map(str::len).sum();
        if name_len == 0 {
            return None;
        }

        let mut candidate = String::with_capacity(name_len + structure.len());
        let mut first = true;
        for fragment in self.fragments(name_index) {
            if first && !fragment.is_empty() {
                let mut chars = fragment.chars();
                if let Some(c) = chars.next() {
                    candidate.extend(c.to_lowercase());
                    candidate.push_str(chars.as_str());
                }
                first = false;
            } else {
                candidate.push_str(fragment);
            }
        }
        candidate.push_str(structure);

        Some(candidate)
    }

    /// Enumeration position of the candidate at `slot`.
    ///
    /// Only meaningful for slots that yield a candidate.
    pub fn position_of(&self, slot: u64) -> u64 {
        let structures = self.grammar.structures().len() as u64;
        if slot >= self.product_slots {
            let produced = self.product_slots - self.grammar.empty_name_slots() * structures;
            return produced + (slot - self.product_slots);
        }
        slot - self.empty_names_before(slot / structures) * structures
    }

    /// Count of empty names with a name index below `name_index`
    fn empty_names_before(&self, name_index: u64) -> u64 {
        let roles = self.grammar.roles();
        let mut count = 0;
        for (i, (role, stride)) in roles.iter().zip(&self.strides).enumerate() {
            let digit = ((name_index / stride) % role.len() as u64) as usize;
            let empties_after: u64 = roles[i + 1..].iter().map(|r| r.empty_tokens() as u64).product();
            let empties_below = role.tokens[..digit].iter().filter(|t| t.is_empty()).count() as u64;
            count += empties_below * empties_after;
            if !role.tokens[digit].is_empty() {
                break;
            }
        }
        count
    }

    /// Fragments chosen by each role for a name index, in role order
    fn fragments(&self, name_index: u64) -> impl Iterator<Item = &'g str> + '_ {
        let grammar: &'g Grammar = self.grammar;
        grammar
            .roles()
            .iter()
            .zip(self.strides.iter())
            .map(move |(role, &stride)| {
                role.tokens[((name_index / stride) % role.len() as u64) as usize].as_str()
            })
    }

    /// Generate next batch of candidates
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        self.by_ref().take(count).collect()
    }

    /// Check if generator is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.total
    }

    /// Get progress percentage
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.current_index as f64 / self.total as f64) * 100.0
        }
    }

    /// Remaining slots
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.current_index)
    }
}

impl Iterator for CandidateGenerator<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_index < self.total {
            let index = self.current_index;
            self.current_index += 1;
            if let Some(candidate) = self.candidate_at(index) {
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining()).ok())
    }
}
