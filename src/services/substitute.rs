use crate::domain::models::ReplacementTable;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub text: String,
    /// Hits per table entry, in table order.
    pub occurrences: Vec<usize>,
}

/// Literal, case-sensitive, non-overlapping replacement of each entry in turn.
///
/// Each pass runs over the output of the previous one, so a value that contains
/// a later entry's search literal will be rewritten by that later entry. Text
/// inserted by a pass is never rescanned by the same pass.
pub fn substitute(template: &str, table: &ReplacementTable) -> Substituted {
    let mut text = template.to_string();
    let mut occurrences = Vec::with_capacity(table.entries.len());

    for entry in &table.entries {
        let hits = text.matches(entry.search).count();
        if hits == 0 {
            warn!(search = entry.search, "search literal not found in template");
        } else {
            text = text.replace(entry.search, &entry.value);
        }
        debug!(search = entry.search, hits, "replacement applied");
        occurrences.push(hits);
    }

    Substituted { text, occurrences }
}
