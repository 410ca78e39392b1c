use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One creative work associated with the subject, as returned by the
/// knowledge-graph query.
#[derive(Debug, Clone, Serialize)]
pub struct WorkRecord {
    pub qid: String,
    pub label: String,
    pub earliest_publication: NaiveDate,
    /// External catalog link token; absent for works never catalogued.
    /// A record without a token is kept in the data but draws no marks.
    pub link_token: Option<String>,
    pub claim_count: u64,
}

impl WorkRecord {
    /// Text shown next to the head mark, e.g. "Cléo from 5 to 7 (1962)".
    pub fn label_text(&self) -> String {
        format!("{} ({})", self.label, self.earliest_publication.year())
    }

    pub fn has_link(&self) -> bool {
        self.link_token.is_some()
    }
}
