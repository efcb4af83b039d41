//! Outgoing header planning.
//!
//! # Design
//! The engine accepts outgoing headers as native linked lists, one list per
//! option. Accumulating native nodes throughout a request's setup would tie
//! buffer ownership to the engine early, so the plan keeps plain strings
//! keyed by a closed set of categories and materializes them into the
//! engine's list form only at submission time, in `executor::perform`.
//!
//! A plan belongs to one executor instance and lives as long as it does;
//! it is not cleared between the option flush and teardown.

use std::collections::BTreeMap;

/// The engine option a header list is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeaderCategory {
    /// Headers sent with the request itself.
    Request,
}

/// Ordered header lines, grouped by target category.
#[derive(Debug, Default)]
pub struct HeaderPlan {
    lines: BTreeMap<HeaderCategory, Vec<String>>,
}

impl HeaderPlan {
    /// Append one header line (already serialized as `"Key: Value"`) to
    /// the list for `category`, preserving append order.
    pub fn append(&mut self, category: HeaderCategory, line: impl Into<String>) {
        self.lines.entry(category).or_default().push(line.into());
    }

    /// Iterate every non-empty category with its lines, in a stable order.
    /// Categories that never received a line do not appear at all, so an
    /// untouched plan flushes nothing to the engine.
    pub fn categories(&self) -> impl Iterator<Item = (HeaderCategory, &[String])> + '_ {
        self.lines.iter().map(|(category, lines)| (*category, lines.as_slice()))
    }
}
