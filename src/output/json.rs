use crate::errors::IntegrityError;
use crate::report::IntegrityReport;

/// Pretty-printed JSON rendering of the report.
pub fn render_json(report: &IntegrityReport) -> Result<String, IntegrityError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use chrono::Utc;

    #[test]
    fn json_carries_the_report_sections() {
        let session = Session::new("json-test");
        let report = IntegrityReport::build(&session, Utc::now());
        let json = render_json(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["project_name"], "json-test");
        assert_eq!(value["risk_assessment"]["risk_level"], "UNKNOWN");
        assert!(value["hypotheses"].as_array().unwrap().is_empty());
        assert!(value["claims"].as_array().unwrap().is_empty());
        assert!(value["risk_log"].as_array().unwrap().is_empty());
        assert!(!value["recommendations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn empty_session_omits_verification_score() {
        let session = Session::new("json-test");
        let report = IntegrityReport::build(&session, Utc::now());
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert!(value["risk_assessment"].get("verification_score").is_none());
    }
}
