use super::life_event::{LifeEvent, LifeEventKind};
use super::subject::Subject;
use super::work::WorkRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Birth and, for deceased subjects, death. Absence of a death date is the
/// canonical "living" signal; no separate flag is stored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LifeSpan {
    pub birth: NaiveDate,
    pub death: Option<NaiveDate>,
}

impl LifeSpan {
    pub fn deceased(&self) -> bool {
        self.death.is_some()
    }

    /// End of the temporal domain: the death date, or "today" for a living
    /// subject (the rendered width is dynamic across days).
    pub fn end(&self, today: NaiveDate) -> NaiveDate {
        self.death.unwrap_or(today)
    }

    pub fn events(&self) -> Vec<LifeEvent> {
        let mut out = vec![LifeEvent::new(LifeEventKind::Birth, self.birth)];
        if let Some(d) = self.death {
            out.push(LifeEvent::new(LifeEventKind::Death, d));
        }
        out
    }
}

/// Normalized result of one timeline query. Built fresh per invocation,
/// never cached or mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineResult {
    pub subject: Subject,
    /// None when the endpoint returned no rows for the subject.
    pub life: Option<LifeSpan>,
    /// Ordered by claim count descending, at most 4 entries.
    pub works: Vec<WorkRecord>,
}

impl TimelineResult {
    pub fn empty(subject: Subject) -> Self {
        Self {
            subject,
            life: None,
            works: Vec::new(),
        }
    }

    /// An empty result renders nothing beyond the background canvas; the
    /// renderer must never build a scale without a domain.
    pub fn is_empty(&self) -> bool {
        self.life.is_none()
    }
}
