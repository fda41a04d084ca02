//! User and summary record types for MindSpace.
//!
//! A `SummaryRecord` is the four-field structured object the model derives
//! from a full conversation. Records are appended to a user's summary
//! collection and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The structured summary derived from a conversation.
///
/// Wire format uses camelCase keys (`summary`, `keyInsights`, `currentMood`,
/// `gentleSuggestion`) -- exactly these four, nothing else. Extra keys from
/// the model are dropped on deserialization; a missing key fails the parse,
/// so a partially-formed record can never exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    /// Narrative summary of the conversation, in second person.
    pub summary: String,
    /// Key insights extracted from what the user shared.
    pub key_insights: String,
    /// The user's inferred current mood.
    pub current_mood: String,
    /// A gentle suggested next step.
    pub gentle_suggestion: String,
}

/// A summary record as persisted, with its storage identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSummary {
    pub id: Uuid,
    pub user_id: String,
    #[serde(flatten)]
    pub record: SummaryRecord,
    pub created_at: DateTime<Utc>,
}

/// A user as seen by this service.
///
/// Users are owned by the upstream account system; this service only looks
/// them up by id and appends to their summary collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub nickname: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record_serializes_exactly_four_camel_case_keys() {
        let record = SummaryRecord {
            summary: "You talked through a stressful week.".to_string(),
            key_insights: "Work pressure is the main source of stress.".to_string(),
            current_mood: "anxious but hopeful".to_string(),
            gentle_suggestion: "Take one evening fully offline.".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["summary", "keyInsights", "currentMood", "gentleSuggestion"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn test_summary_record_roundtrip() {
        let json = r#"{
            "summary": "You seemed to be feeling overwhelmed.",
            "keyInsights": "You are juggling exams and family expectations.",
            "currentMood": "tired",
            "gentleSuggestion": "Try a short walk before studying tonight."
        }"#;
        let record: SummaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.current_mood, "tired");
        let back = serde_json::to_string(&record).unwrap();
        let reparsed: SummaryRecord = serde_json::from_str(&back).unwrap();
        assert_eq!(record, reparsed);
    }

    #[test]
    fn test_summary_record_missing_key_fails() {
        let json = r#"{"summary":"a","keyInsights":"b","currentMood":"c"}"#;
        assert!(serde_json::from_str::<SummaryRecord>(json).is_err());
    }

    #[test]
    fn test_summary_record_extra_keys_ignored() {
        let json = r#"{
            "summary": "a",
            "keyInsights": "b",
            "currentMood": "c",
            "gentleSuggestion": "d",
            "confidence": 0.9
        }"#;
        let record: SummaryRecord = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_stored_summary_flattens_record() {
        let stored = StoredSummary {
            id: Uuid::now_v7(),
            user_id: "u1".to_string(),
            record: SummaryRecord {
                summary: "a".to_string(),
                key_insights: "b".to_string(),
                current_mood: "c".to_string(),
                gentle_suggestion: "d".to_string(),
            },
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["keyInsights"], "b");
        assert_eq!(value["user_id"], "u1");
    }
}
