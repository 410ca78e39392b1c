//! Decoding of `application/sparql-results+json` responses into the
//! normalized timeline model.

use crate::errors::{AppError, AppResult};
use crate::models::{LifeSpan, Subject, TimelineResult, WorkRecord};
use crate::query::sparql::MAX_WORKS;
use crate::ui::messages::warning;
use crate::utils::date::parse_wikidata_date;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<SparqlBinding>,
}

/// One result row. Every field is optional on the wire; which ones are
/// actually required is decided during normalization, not during decode.
#[derive(Debug, Deserialize)]
pub struct SparqlBinding {
    pub dob: Option<SparqlValue>,
    pub dod: Option<SparqlValue>,
    pub work: Option<SparqlValue>,
    #[serde(rename = "workLabel")]
    pub work_label: Option<SparqlValue>,
    pub qid: Option<SparqlValue>,
    pub acmi_link: Option<SparqlValue>,
    pub claim_count: Option<SparqlValue>,
    #[serde(rename = "earliestPublication")]
    pub earliest_publication: Option<SparqlValue>,
}

/// Named value object; the payload always sits in `.value`.
#[derive(Debug, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

/// Decode a raw JSON document and normalize it in one step.
pub fn decode(subject: &Subject, json: &str) -> AppResult<TimelineResult> {
    let response: SparqlResponse = serde_json::from_str(json)?;
    normalize(subject, response)
}

/// Normalize a decoded response into a TimelineResult.
///
/// - empty bindings → empty result (valid, renders only the background)
/// - life span comes from the first row; a missing dob is malformed
/// - rows without a work URI carry only life data and are not work rows
/// - work rows missing the label or a parseable publication date are
///   skipped with a warning instead of failing the whole render
pub fn normalize(subject: &Subject, response: SparqlResponse) -> AppResult<TimelineResult> {
    let bindings = response.results.bindings;

    if bindings.is_empty() {
        return Ok(TimelineResult::empty(subject.clone()));
    }

    let first = &bindings[0];
    let dob = first
        .dob
        .as_ref()
        .ok_or_else(|| AppError::MalformedResponse("binding without dob".to_string()))?;

    let birth = parse_wikidata_date(&dob.value)?;
    let death = match &first.dod {
        Some(v) => Some(parse_wikidata_date(&v.value)?),
        None => None,
    };

    let mut works = Vec::new();
    for binding in &bindings {
        if binding.work.is_none() {
            // life-only row (subject without catalogued works)
            continue;
        }
        match work_from_binding(binding) {
            Some(w) => works.push(w),
            None => warning(format!(
                "Skipping incomplete work row for {} ({})",
                subject,
                binding
                    .work_label
                    .as_ref()
                    .map(|v| v.value.as_str())
                    .unwrap_or("unlabeled")
            )),
        }
    }

    // The endpoint already groups, orders and caps, but do not trust it:
    // ordering and the cap are part of the contract.
    works.sort_by(|a, b| b.claim_count.cmp(&a.claim_count));
    works.truncate(MAX_WORKS);

    Ok(TimelineResult {
        subject: subject.clone(),
        life: Some(LifeSpan { birth, death }),
        works,
    })
}

/// Map one row onto a WorkRecord, or None when a required field is missing
/// or unparseable. The link token stays optional: a work without one is
/// real data, it just draws no marks.
fn work_from_binding(binding: &SparqlBinding) -> Option<WorkRecord> {
    let work = binding.work.as_ref()?;
    let label = binding.work_label.as_ref()?.value.clone();
    let published = binding.earliest_publication.as_ref()?;
    let earliest_publication = parse_wikidata_date(&published.value).ok()?;

    let qid = match &binding.qid {
        Some(v) if !v.value.is_empty() => v.value.clone(),
        _ => qid_from_uri(&work.value)?,
    };

    let claim_count = binding
        .claim_count
        .as_ref()
        .and_then(|v| v.value.parse::<u64>().ok())
        .unwrap_or(0);

    Some(WorkRecord {
        qid,
        label,
        earliest_publication,
        link_token: binding.acmi_link.as_ref().map(|v| v.value.clone()),
        claim_count,
    })
}

/// Entity URIs look like "http://www.wikidata.org/entity/Q3273030".
fn qid_from_uri(uri: &str) -> Option<String> {
    let tail = uri.rsplit('/').next()?;
    if tail.is_empty() {
        None
    } else {
        Some(tail.to_string())
    }
}
