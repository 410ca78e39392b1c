//! HTTP client for the knowledge-graph endpoint.
//! One blocking GET per invocation; no retries, no local recovery.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Subject, TimelineResult};
use crate::query::response::{SparqlResponse, decode, normalize};
use crate::query::sparql::{ACCEPT_SPARQL_JSON, timeline_query};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub struct QueryClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl QueryClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(cfg.user_agent.clone())
            .build()?;

        Ok(Self {
            endpoint: cfg.endpoint.clone(),
            http,
        })
    }

    /// Fetch and normalize the timeline data for one subject.
    /// Network failure or a non-2xx status propagates as an error; there is
    /// no retry and no fallback.
    pub fn fetch(&self, subject: &Subject) -> AppResult<TimelineResult> {
        let query = timeline_query(subject);

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("query", query.as_str())])
            .header("Accept", ACCEPT_SPARQL_JSON)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::EndpointStatus(status.as_u16()));
        }

        let response: SparqlResponse = resp.json()?;
        normalize(subject, response)
    }
}

/// Read a saved `application/sparql-results+json` document instead of
/// querying the endpoint. Used by `--input` for offline runs and tests.
pub fn load_saved(subject: &Subject, path: &Path) -> AppResult<TimelineResult> {
    let body = fs::read_to_string(path)?;
    decode(subject, &body)
}

/// Resolve timeline data from either a saved response or the live endpoint.
pub fn load(subject: &Subject, input: Option<&str>, cfg: &Config) -> AppResult<TimelineResult> {
    match input {
        Some(file) => load_saved(subject, Path::new(file)),
        None => QueryClient::new(cfg)?.fetch(subject),
    }
}
