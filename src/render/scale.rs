//! Linear time-to-pixel mapping.

use chrono::{Datelike, Duration, NaiveDate};

/// Left and right pixel bounds of the drawable range (50px margin on each
/// side of the 800px canvas).
pub const RANGE_START: f64 = 50.0;
pub const RANGE_END: f64 = 750.0;

/// Maps calendar dates in [start, end] linearly onto [RANGE_START, RANGE_END].
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Map a date to its x coordinate. Dates at the domain start map to
    /// RANGE_START, at the domain end to RANGE_END. A degenerate domain
    /// (start == end) maps everything to the left edge.
    pub fn map(&self, date: NaiveDate) -> f64 {
        let span = (self.end - self.start).num_days();
        if span == 0 {
            return RANGE_START;
        }

        let offset = (date - self.start).num_days();
        RANGE_START + (offset as f64 / span as f64) * (RANGE_END - RANGE_START)
    }

    /// Evenly spaced axis ticks across the domain, endpoints included,
    /// labeled with the year at each position.
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        if count < 2 {
            return vec![Tick {
                x: RANGE_START,
                label: self.start.year().to_string(),
            }];
        }

        let span_days = (self.end - self.start).num_days();
        let mut out = Vec::with_capacity(count);

        for i in 0..count {
            let frac = i as f64 / (count - 1) as f64;
            let days = (span_days as f64 * frac).round() as i64;
            let date = self.start + Duration::days(days);

            out.push(Tick {
                x: RANGE_START + frac * (RANGE_END - RANGE_START),
                label: date.year().to_string(),
            });
        }

        out
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}
