#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bt() -> Command {
    cargo_bin_cmd!("biotimeline")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a SPARQL JSON fixture to the temp dir and return its path
pub fn write_fixture(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, json).expect("write fixture");
    p
}

/// Deceased subject with two catalogued works; rows arrive in ascending
/// claim-count order on purpose, normalization must re-sort them.
pub const DECEASED_JSON: &str = r#"{
  "head": { "vars": ["dob", "dod", "work", "workLabel", "qid", "acmi_link", "claim_count", "earliestPublication"] },
  "results": {
    "bindings": [
      {
        "dob": { "type": "literal", "value": "+1928-05-30T00:00:00Z" },
        "dod": { "type": "literal", "value": "+2019-03-29T00:00:00Z" },
        "work": { "type": "uri", "value": "http://www.wikidata.org/entity/Q1339195" },
        "workLabel": { "type": "literal", "value": "Vagabond" },
        "qid": { "type": "literal", "value": "Q1339195" },
        "acmi_link": { "type": "literal", "value": "works/77512--vagabond" },
        "claim_count": { "type": "literal", "value": "44" },
        "earliestPublication": { "type": "literal", "value": "+1985-09-04T00:00:00Z" }
      },
      {
        "dob": { "type": "literal", "value": "+1928-05-30T00:00:00Z" },
        "dod": { "type": "literal", "value": "+2019-03-29T00:00:00Z" },
        "work": { "type": "uri", "value": "http://www.wikidata.org/entity/Q606293" },
        "workLabel": { "type": "literal", "value": "Cléo from 5 to 7" },
        "qid": { "type": "literal", "value": "Q606293" },
        "acmi_link": { "type": "literal", "value": "works/108013--cleo-from-5-to-7" },
        "claim_count": { "type": "literal", "value": "57" },
        "earliestPublication": { "type": "literal", "value": "+1962-04-11T00:00:00Z" }
      }
    ]
  }
}"#;

/// Living subject: one complete work, one row without a publication date
/// (must be skipped), one row without a catalog link (kept, no marks).
pub const LIVING_JSON: &str = r#"{
  "head": { "vars": ["dob", "dod", "work", "workLabel", "qid", "acmi_link", "claim_count", "earliestPublication"] },
  "results": {
    "bindings": [
      {
        "dob": { "type": "literal", "value": "+1947-03-25T00:00:00Z" },
        "work": { "type": "uri", "value": "http://www.wikidata.org/entity/Q270510" },
        "workLabel": { "type": "literal", "value": "Animal Kingdom" },
        "qid": { "type": "literal", "value": "Q270510" },
        "acmi_link": { "type": "literal", "value": "works/65729--animal-kingdom" },
        "claim_count": { "type": "literal", "value": "30" },
        "earliestPublication": { "type": "literal", "value": "+1990-01-01T00:00:00Z" }
      },
      {
        "dob": { "type": "literal", "value": "+1947-03-25T00:00:00Z" },
        "work": { "type": "uri", "value": "http://www.wikidata.org/entity/Q999001" },
        "workLabel": { "type": "literal", "value": "Undated Work" },
        "qid": { "type": "literal", "value": "Q999001" },
        "acmi_link": { "type": "literal", "value": "works/1--undated" },
        "claim_count": { "type": "literal", "value": "12" }
      },
      {
        "dob": { "type": "literal", "value": "+1947-03-25T00:00:00Z" },
        "work": { "type": "uri", "value": "http://www.wikidata.org/entity/Q999002" },
        "workLabel": { "type": "literal", "value": "Uncatalogued Work" },
        "qid": { "type": "literal", "value": "Q999002" },
        "claim_count": { "type": "literal", "value": "8" },
        "earliestPublication": { "type": "literal", "value": "+2001-06-15T00:00:00Z" }
      }
    ]
  }
}"#;

/// No rows at all: valid, renders only the background canvas.
pub const EMPTY_JSON: &str = r#"{
  "head": { "vars": ["dob", "dod", "work", "workLabel", "qid", "acmi_link", "claim_count", "earliestPublication"] },
  "results": { "bindings": [] }
}"#;
