use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LifeEventKind {
    Birth,
    Death,
}

impl LifeEventKind {
    pub fn le_as_str(&self) -> &'static str {
        match self {
            LifeEventKind::Birth => "birth",
            LifeEventKind::Death => "death",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LifeEvent {
    pub kind: LifeEventKind,
    pub date: NaiveDate,
}

impl LifeEvent {
    pub fn new(kind: LifeEventKind, date: NaiveDate) -> Self {
        Self { kind, date }
    }

    /// Text shown next to the mark, e.g. "birth (1928)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.kind.le_as_str(), self.date.year())
    }
}
