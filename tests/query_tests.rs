mod common;
use common::{DECEASED_JSON, EMPTY_JSON, LIVING_JSON};

use biotimeline::models::Subject;
use biotimeline::query::response::decode;
use biotimeline::query::{MAX_WORKS, timeline_query};
use biotimeline::utils::date::parse_wikidata_date;
use chrono::NaiveDate;

fn subject() -> Subject {
    Subject::new("Q241897")
}

#[test]
fn test_query_construction_is_idempotent() {
    let a = timeline_query(&subject());
    let b = timeline_query(&subject());
    assert_eq!(a, b);
}

#[test]
fn test_query_embeds_subject_and_cap() {
    let q = timeline_query(&subject());
    assert!(q.contains("wd:Q241897"));
    assert!(q.contains(&format!("limit {}", MAX_WORKS)));
}

#[test]
fn test_query_requests_expected_properties() {
    let q = timeline_query(&subject());
    // birth, death, publication date and catalog link
    assert!(q.contains("wdt:P569"));
    assert!(q.contains("wdt:P570"));
    assert!(q.contains("wdt:P577"));
    assert!(q.contains("wdt:P7003"));
}

#[test]
fn test_decode_deceased_subject() {
    let result = decode(&subject(), DECEASED_JSON).expect("decode");

    let life = result.life.expect("life span");
    assert_eq!(life.birth, NaiveDate::from_ymd_opt(1928, 5, 30).unwrap());
    assert_eq!(life.death, NaiveDate::from_ymd_opt(2019, 3, 29));
    assert!(life.deceased());
}

#[test]
fn test_decode_orders_works_by_claim_count() {
    let result = decode(&subject(), DECEASED_JSON).expect("decode");

    // fixture rows arrive in ascending order; normalization must flip them
    assert_eq!(result.works.len(), 2);
    assert_eq!(result.works[0].label, "Cléo from 5 to 7");
    assert_eq!(result.works[0].claim_count, 57);
    assert!(result.works[0].claim_count >= result.works[1].claim_count);
}

#[test]
fn test_decode_caps_works() {
    // build a response with more complete rows than the cap allows
    let mut rows = Vec::new();
    for i in 0..(MAX_WORKS + 3) {
        rows.push(format!(
            r#"{{
              "dob": {{ "type": "literal", "value": "+1928-05-30T00:00:00Z" }},
              "work": {{ "type": "uri", "value": "http://www.wikidata.org/entity/Q{i}" }},
              "workLabel": {{ "type": "literal", "value": "Work {i}" }},
              "qid": {{ "type": "literal", "value": "Q{i}" }},
              "acmi_link": {{ "type": "literal", "value": "works/{i}" }},
              "claim_count": {{ "type": "literal", "value": "{count}" }},
              "earliestPublication": {{ "type": "literal", "value": "+1990-01-01T00:00:00Z" }}
            }}"#,
            i = i,
            count = 100 - i
        ));
    }
    let json = format!(
        r#"{{ "results": {{ "bindings": [{}] }} }}"#,
        rows.join(",")
    );

    let result = decode(&subject(), &json).expect("decode");
    assert_eq!(result.works.len(), MAX_WORKS);
    // the cap keeps the most significant rows
    assert_eq!(result.works[0].claim_count, 100);
}

#[test]
fn test_decode_skips_rows_without_publication_date() {
    let result = decode(&subject(), LIVING_JSON).expect("decode");

    let labels: Vec<&str> = result.works.iter().map(|w| w.label.as_str()).collect();
    assert!(!labels.contains(&"Undated Work"));
    assert_eq!(result.works.len(), 2);
}

#[test]
fn test_decode_keeps_rows_without_link_token() {
    let result = decode(&subject(), LIVING_JSON).expect("decode");

    let uncatalogued = result
        .works
        .iter()
        .find(|w| w.label == "Uncatalogued Work")
        .expect("kept in the data");
    assert!(!uncatalogued.has_link());
    assert!(uncatalogued.link_token.is_none());
}

#[test]
fn test_decode_living_subject() {
    let result = decode(&subject(), LIVING_JSON).expect("decode");

    let life = result.life.expect("life span");
    assert!(!life.deceased());

    let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    assert_eq!(life.end(today), today);
}

#[test]
fn test_decode_empty_bindings() {
    let result = decode(&subject(), EMPTY_JSON).expect("decode");
    assert!(result.is_empty());
    assert!(result.works.is_empty());
}

#[test]
fn test_decode_missing_dob_is_malformed() {
    let json = r#"{
      "results": { "bindings": [
        { "work": { "type": "uri", "value": "http://www.wikidata.org/entity/Q1" } }
      ] }
    }"#;
    assert!(decode(&subject(), json).is_err());
}

#[test]
fn test_decode_undecodable_body_is_error() {
    assert!(decode(&subject(), "not json at all").is_err());
}

#[test]
fn test_decode_qid_falls_back_to_work_uri() {
    let json = r#"{
      "results": { "bindings": [
        {
          "dob": { "type": "literal", "value": "+1928-05-30T00:00:00Z" },
          "work": { "type": "uri", "value": "http://www.wikidata.org/entity/Q4321" },
          "workLabel": { "type": "literal", "value": "Some Work" },
          "acmi_link": { "type": "literal", "value": "works/4321" },
          "claim_count": { "type": "literal", "value": "5" },
          "earliestPublication": { "type": "literal", "value": "+1970-01-01T00:00:00Z" }
        }
      ] }
    }"#;

    let result = decode(&subject(), json).expect("decode");
    assert_eq!(result.works[0].qid, "Q4321");
}

#[test]
fn test_parse_wikidata_date_with_sign() {
    assert_eq!(
        parse_wikidata_date("+1947-03-25T00:00:00Z").unwrap(),
        NaiveDate::from_ymd_opt(1947, 3, 25).unwrap()
    );
}

#[test]
fn test_parse_wikidata_date_without_sign() {
    assert_eq!(
        parse_wikidata_date("1962-04-11T00:00:00Z").unwrap(),
        NaiveDate::from_ymd_opt(1962, 4, 11).unwrap()
    );
}

#[test]
fn test_parse_wikidata_date_rejects_garbage() {
    assert!(parse_wikidata_date("last tuesday").is_err());
    assert!(parse_wikidata_date("").is_err());
}
