// ABOUTME: Record validator producing per-field error reports for candidate products.
// ABOUTME: Every field is checked independently so callers get the complete report in one pass.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::product::{Methodology, ValidatedProduct};

/// Maximum number of developers on a single product.
pub const MAX_DEVELOPERS: usize = 5;

/// Per-field validation report. One message slot per product field plus a
/// top-level `mainMsg`; an empty string means the slot is valid. Serializes
/// with the wire field names so the route layer can return it verbatim as
/// a 400 body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub main_msg: String,
    pub name: String,
    pub owner_name: String,
    pub developers: String,
    pub start_date: String,
    pub scrum_master_name: String,
    pub methodology: String,
    pub location: String,
}

impl ValidationReport {
    /// Report used when the candidate itself is missing or not an object.
    /// No per-field detail is computed in that case.
    pub fn empty_candidate() -> Self {
        Self {
            main_msg: "Product cannot be empty.".to_string(),
            ..Self::default()
        }
    }

    /// True when no slot carries a message.
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// A candidate string field is valid when it is actually a string and
/// non-empty after trimming.
fn valid_string(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, or a full RFC 3339 timestamp.
fn parse_start_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Validate a candidate product arriving as arbitrary JSON.
///
/// A null or non-object candidate fails immediately with the empty-candidate
/// report. Otherwise every field is evaluated; the returned report has a
/// message in exactly the slots that failed. On success the sanitized
/// `ValidatedProduct` is returned — unknown candidate fields are dropped.
///
/// Pure and deterministic; safe to call repeatedly.
pub fn validate(candidate: &Value) -> Result<ValidatedProduct, ValidationReport> {
    let Some(fields) = candidate.as_object() else {
        return Err(ValidationReport::empty_candidate());
    };

    let mut report = ValidationReport::default();

    let name = valid_string(fields.get("name"));
    if name.is_none() {
        report.name = "Invalid product name".to_string();
    }

    let owner_name = valid_string(fields.get("ownerName"));
    if owner_name.is_none() {
        report.owner_name = "Invalid product owner name".to_string();
    }

    let mut developers = Vec::new();
    match fields.get("developers").and_then(Value::as_array) {
        Some(entries) => {
            if entries.len() > MAX_DEVELOPERS {
                report.developers = format!("Too many developers. Max:{MAX_DEVELOPERS}");
            }
            for entry in entries {
                match valid_string(Some(entry)) {
                    Some(dev) => developers.push(dev.to_string()),
                    None => {
                        // First offending entry wins and ends the scan.
                        report.developers =
                            "At least 1 of developer names is invalid".to_string();
                        break;
                    }
                }
            }
        }
        None => {
            report.developers = "Developers needs to be an array".to_string();
        }
    }

    let start_date = fields
        .get("startDate")
        .and_then(Value::as_str)
        .filter(|s| parse_start_date(s).is_some());
    if start_date.is_none() {
        report.start_date = "Invalid start date".to_string();
    }

    let scrum_master_name = valid_string(fields.get("scrumMasterName"));
    if scrum_master_name.is_none() {
        report.scrum_master_name = "Invalid scrum master name".to_string();
    }

    let methodology = valid_string(fields.get("methodology")).and_then(Methodology::parse);
    if methodology.is_none() {
        report.methodology = "Invalid methodology".to_string();
    }

    let location = valid_string(fields.get("location"));
    if location.is_none() {
        report.location = "Invalid location".to_string();
    }

    match (
        name,
        owner_name,
        start_date,
        scrum_master_name,
        methodology,
        location,
    ) {
        (
            Some(name),
            Some(owner_name),
            Some(start_date),
            Some(scrum_master_name),
            Some(methodology),
            Some(location),
        ) if report.is_clean() => Ok(ValidatedProduct {
            id: fields.get("id").and_then(Value::as_u64),
            name: name.to_string(),
            owner_name: owner_name.to_string(),
            developers,
            start_date: start_date.to_string(),
            scrum_master_name: scrum_master_name.to_string(),
            methodology,
            location: location.to_string(),
        }),
        _ => Err(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_candidate() -> Value {
        json!({
            "name": "Catalog Manager",
            "ownerName": "John Doe",
            "developers": ["Bob", "Dog"],
            "startDate": "2000/01/01",
            "scrumMasterName": "John Doe 2",
            "methodology": "agile",
            "location": "https://example.com/acme/catalog"
        })
    }

    #[test]
    fn accepts_valid_candidate() {
        let valid = validate(&valid_candidate()).unwrap();

        assert_eq!(valid.id, None);
        assert_eq!(valid.name, "Catalog Manager");
        assert_eq!(valid.owner_name, "John Doe");
        assert_eq!(valid.developers, vec!["Bob", "Dog"]);
        assert_eq!(valid.start_date, "2000/01/01");
        assert_eq!(valid.scrum_master_name, "John Doe 2");
        assert_eq!(valid.methodology, Methodology::Agile);
    }

    #[test]
    fn null_candidate_fails_with_main_message_only() {
        let report = validate(&Value::Null).unwrap_err();

        assert_eq!(report.main_msg, "Product cannot be empty.");
        assert_eq!(report.name, "");
        assert_eq!(report.developers, "");
    }

    #[test]
    fn non_object_candidate_fails_with_main_message_only() {
        let report = validate(&json!("not a product")).unwrap_err();
        assert_eq!(report.main_msg, "Product cannot be empty.");
    }

    #[test]
    fn empty_name_flags_only_the_name_slot() {
        // Worked example: blank name, everything else valid.
        let mut candidate = valid_candidate();
        candidate["name"] = json!("");

        let report = validate(&candidate).unwrap_err();

        assert_eq!(report.name, "Invalid product name");
        assert_eq!(report.main_msg, "");
        assert_eq!(report.owner_name, "");
        assert_eq!(report.developers, "");
        assert_eq!(report.start_date, "");
        assert_eq!(report.scrum_master_name, "");
        assert_eq!(report.methodology, "");
        assert_eq!(report.location, "");
    }

    #[test]
    fn missing_fields_flag_every_corresponding_slot() {
        let report = validate(&json!({})).unwrap_err();

        assert_eq!(report.main_msg, "");
        assert_eq!(report.name, "Invalid product name");
        assert_eq!(report.owner_name, "Invalid product owner name");
        assert_eq!(report.developers, "Developers needs to be an array");
        assert_eq!(report.start_date, "Invalid start date");
        assert_eq!(report.scrum_master_name, "Invalid scrum master name");
        assert_eq!(report.methodology, "Invalid methodology");
        assert_eq!(report.location, "Invalid location");
    }

    #[test]
    fn whitespace_only_strings_are_invalid() {
        let mut candidate = valid_candidate();
        candidate["ownerName"] = json!("   ");
        candidate["scrumMasterName"] = json!("\t");

        let report = validate(&candidate).unwrap_err();
        assert_eq!(report.owner_name, "Invalid product owner name");
        assert_eq!(report.scrum_master_name, "Invalid scrum master name");
        assert_eq!(report.name, "");
    }

    #[test]
    fn wrong_typed_fields_are_invalid_not_coerced() {
        let mut candidate = valid_candidate();
        candidate["name"] = json!(42);
        candidate["methodology"] = json!(["agile"]);

        let report = validate(&candidate).unwrap_err();
        assert_eq!(report.name, "Invalid product name");
        assert_eq!(report.methodology, "Invalid methodology");
    }

    #[test]
    fn six_developers_is_too_many() {
        // Worked example: report slot carries the maximum.
        let mut candidate = valid_candidate();
        candidate["developers"] = json!(["a", "b", "c", "d", "e", "f"]);

        let report = validate(&candidate).unwrap_err();
        assert_eq!(report.developers, "Too many developers. Max:5");
    }

    #[test]
    fn five_developers_is_fine() {
        let mut candidate = valid_candidate();
        candidate["developers"] = json!(["a", "b", "c", "d", "e"]);

        let valid = validate(&candidate).unwrap();
        assert_eq!(valid.developers.len(), 5);
    }

    #[test]
    fn non_array_developers_is_flagged_not_coerced() {
        let mut candidate = valid_candidate();
        candidate["developers"] = json!("Bob");

        let report = validate(&candidate).unwrap_err();
        assert_eq!(report.developers, "Developers needs to be an array");
    }

    #[test]
    fn invalid_developer_entry_overrides_length_message() {
        // Six entries with a blank one: the element scan's message wins.
        let mut candidate = valid_candidate();
        candidate["developers"] = json!(["a", "", "c", "d", "e", "f"]);

        let report = validate(&candidate).unwrap_err();
        assert_eq!(report.developers, "At least 1 of developer names is invalid");
    }

    #[test]
    fn non_string_developer_entry_is_invalid() {
        let mut candidate = valid_candidate();
        candidate["developers"] = json!(["a", 3]);

        let report = validate(&candidate).unwrap_err();
        assert_eq!(report.developers, "At least 1 of developer names is invalid");
    }

    #[test]
    fn start_date_accepts_both_date_formats() {
        for date in ["2000/01/01", "2023-01-31"] {
            let mut candidate = valid_candidate();
            candidate["startDate"] = json!(date);
            assert!(validate(&candidate).is_ok(), "should accept {date}");
        }
    }

    #[test]
    fn garbage_start_date_is_invalid() {
        for date in ["", "soon", "2023-13-45", "31/01/2023"] {
            let mut candidate = valid_candidate();
            candidate["startDate"] = json!(date);
            let report = validate(&candidate).unwrap_err();
            assert_eq!(report.start_date, "Invalid start date", "for {date:?}");
        }
    }

    #[test]
    fn methodology_must_be_agile_or_waterfall() {
        let mut candidate = valid_candidate();
        candidate["methodology"] = json!("scrumfall");

        let report = validate(&candidate).unwrap_err();
        assert_eq!(report.methodology, "Invalid methodology");

        candidate["methodology"] = json!("waterfall");
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let mut candidate = valid_candidate();
        candidate["favouriteColour"] = json!("teal");

        // Validation succeeds and the sanitized output carries only the
        // known fields; nothing to assert beyond success here since
        // ValidatedProduct cannot represent extras.
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn supplied_id_is_carried_through() {
        let mut candidate = valid_candidate();
        candidate["id"] = json!(17);

        let valid = validate(&candidate).unwrap();
        assert_eq!(valid.id, Some(17));
    }

    #[test]
    fn report_serializes_with_wire_names() {
        let mut candidate = valid_candidate();
        candidate["name"] = json!("");

        let report = validate(&candidate).unwrap_err();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mainMsg"], "");
        assert_eq!(json["name"], "Invalid product name");
        assert_eq!(json["ownerName"], "");
        assert_eq!(json["startDate"], "");
        assert_eq!(json["scrumMasterName"], "");
    }
}
