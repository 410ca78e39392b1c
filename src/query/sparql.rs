//! SPARQL query construction.
//! The query is a pure function of the subject identifier: same subject,
//! same query string.

use crate::models::Subject;

/// Content type requested from the endpoint.
pub const ACCEPT_SPARQL_JSON: &str = "application/sparql-results+json";

/// Fixed cap on the number of works per subject.
pub const MAX_WORKS: usize = 4;

/// Build the timeline query for one subject.
///
/// Requested per subject: date of birth (required), date of death
/// (optional), and the most significant associated works (acted in or
/// directed), each with its label, catalog link if any, and earliest
/// publication date. Significance = count of distinct claims about the
/// work, descending.
pub fn timeline_query(subject: &Subject) -> String {
    format!(
        "select ?dob ?dod ?work ?workLabel ?qid \
         (sample(?acmi_link) as ?acmi_link) \
         (count(distinct ?claim) as ?claim_count) \
         ((min(?publication)) as ?earliestPublication) where {{
            values ?creator {{wd:{subject}}}
            values ?role {{wdt:P161 wdt:P57}}
            ?creator wdt:P569 ?dob .
            optional {{ ?creator wdt:P570 ?dod }} .
            optional {{
                ?work ?role ?creator .
                ?work ?p ?claim .
                ?work wdt:P577 ?publication .
                ?work wdt:P7003 ?acmi_link .
            }} .
            bind(strafter(str(?work), str(wd:)) AS ?qid) .
            service wikibase:label {{ bd:serviceParam wikibase:language \"[AUTO_LANGUAGE],en\". }}
        }}
        group by ?dob ?dod ?work ?workLabel ?earliestPublication ?qid
        order by desc(?claim_count)
        limit {limit}",
        subject = subject.as_str(),
        limit = MAX_WORKS
    )
}
