//! Wire types for the admin backend
//!
//! Field names follow the backend's JSON exactly (the configuration record
//! uses SCREAMING_CASE keys). Missing fields fall back to defaults so a
//! sparse record still renders.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `null` reads as the type's default, same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Credentials
// ─────────────────────────────────────────────────────────────────────────────

/// Username/password pair sent with every authenticated request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Password stays out of logs and panics
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration record
// ─────────────────────────────────────────────────────────────────────────────

/// One question/answer pair. Order in the list is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Both fields blank after trimming (a draft nobody has filled in)
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty() && self.answer.trim().is_empty()
    }

    /// Both fields have content after trimming
    pub fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

/// The singleton configuration record owned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// true = calls are answered by the AI assistant (Pam)
    #[serde(rename = "FORWARD_TO_PAM", default)]
    pub forward_to_pam: bool,

    #[serde(rename = "FALLBACK_NUMBER", default)]
    pub fallback_number: String,

    /// Read-only: the number customers dial
    #[serde(rename = "CUSTOMER_FACING_NUMBER", default)]
    pub customer_facing_number: String,

    /// Read-only: the assistant's own line
    #[serde(rename = "PAM_PHONE_NUMBER", default)]
    pub pam_phone_number: String,

    #[serde(rename = "FAQ", default)]
    pub faq: Vec<FaqEntry>,
}

/// Partial update for `PATCH /config`. Only fields that are set are sent;
/// the backend merges them and answers with the full record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigPatch {
    #[serde(rename = "FORWARD_TO_PAM", skip_serializing_if = "Option::is_none")]
    pub forward_to_pam: Option<bool>,

    #[serde(rename = "FALLBACK_NUMBER", skip_serializing_if = "Option::is_none")]
    pub fallback_number: Option<String>,

    /// FAQ is one field whose value is the whole ordered list
    #[serde(rename = "FAQ", skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqEntry>>,
}

impl ConfigPatch {
    pub fn forwarding(enabled: bool) -> Self {
        Self {
            forward_to_pam: Some(enabled),
            ..Self::default()
        }
    }

    pub fn fallback_number(number: impl Into<String>) -> Self {
        Self {
            fallback_number: Some(number.into()),
            ..Self::default()
        }
    }

    pub fn faq(entries: Vec<FaqEntry>) -> Self {
        Self {
            faq: Some(entries),
            ..Self::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Call records
// ─────────────────────────────────────────────────────────────────────────────

/// Caller sentiment as classified by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    Positive,
    /// Anything else ("Negative", "Neutral", "Unknown", ...)
    Other(String),
}

impl Sentiment {
    pub fn label(&self) -> &str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Other(s) if s.is_empty() => "Unknown",
            Sentiment::Other(s) => s,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Other(String::new())
    }
}

impl From<String> for Sentiment {
    fn from(value: String) -> Self {
        if value == "Positive" {
            Sentiment::Positive
        } else {
            Sentiment::Other(value)
        }
    }
}

impl From<Sentiment> for String {
    fn from(value: Sentiment) -> Self {
        match value {
            Sentiment::Positive => "Positive".to_string(),
            Sentiment::Other(s) => s,
        }
    }
}

/// Speaker of a transcript turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Agent,
    User,
    Other(String),
}

impl Role {
    /// Display label; everyone who is not the agent is the customer
    pub fn label(&self) -> &'static str {
        match self {
            Role::Agent => "Agent",
            _ => "Customer",
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "agent" => Role::Agent,
            "user" => Role::User,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Agent => "agent".to_string(),
            Role::User => "user".to_string(),
            Role::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallCost {
    /// Total cost in cents
    #[serde(default, deserialize_with = "null_as_default")]
    pub combined_cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallAnalysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub call_summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_sentiment: Sentiment,
}

/// A completed call. Immutable once the backend has it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub call_id: String,
    /// Epoch milliseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_timestamp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub call_cost: CallCost,
    #[serde(default, deserialize_with = "null_as_default")]
    pub call_analysis: CallAnalysis,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recording_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transcript_object: Vec<TranscriptTurn>,
}

impl Call {
    /// Start time in the local timezone
    pub fn started_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.start_timestamp).single()
    }

    /// Duration rounded to the nearest second
    pub fn duration_secs(&self) -> u64 {
        (self.duration_ms + 500) / 1000
    }

    /// Cost in dollars
    pub fn cost_dollars(&self) -> f64 {
        self.call_cost.combined_cost / 100.0
    }

    pub fn is_positive(&self) -> bool {
        self.call_analysis.user_sentiment == Sentiment::Positive
    }
}

/// Sort direction for `POST /calls`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

/// Body of `POST /calls`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallsQuery {
    pub limit: usize,
    pub sort_order: SortOrder,
    /// `call_id` of the last call already shown; omitted for the first page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_key: Option<String>,
}

impl CallsQuery {
    /// Newest-first page of `limit` calls, resuming after `cursor`
    pub fn newest_first(limit: usize, cursor: Option<String>) -> Self {
        Self {
            limit,
            sort_order: SortOrder::Descending,
            pagination_key: cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials::new("owner", "hunter2");
        let shown = format!("{:?}", creds);
        assert!(shown.contains("owner"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn configuration_parses_backend_keys() {
        let config: Configuration = serde_json::from_value(json!({
            "FORWARD_TO_PAM": true,
            "FALLBACK_NUMBER": "+15550001111",
            "CUSTOMER_FACING_NUMBER": "+15550002222",
            "PAM_PHONE_NUMBER": "+15550003333",
            "FAQ": [{"question": "Open Sundays?", "answer": "Yes, 10 to 4."}]
        }))
        .unwrap();

        assert!(config.forward_to_pam);
        assert_eq!(config.fallback_number, "+15550001111");
        assert_eq!(config.faq.len(), 1);
        assert_eq!(config.faq[0].answer, "Yes, 10 to 4.");
    }

    #[test]
    fn configuration_tolerates_missing_fields() {
        let config: Configuration = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn patch_serializes_only_set_field() {
        let body = serde_json::to_value(ConfigPatch::forwarding(false)).unwrap();
        assert_eq!(body, json!({"FORWARD_TO_PAM": false}));

        let body = serde_json::to_value(ConfigPatch::fallback_number("+1555")).unwrap();
        assert_eq!(body, json!({"FALLBACK_NUMBER": "+1555"}));
    }

    #[test]
    fn faq_patch_carries_whole_list() {
        let patch = ConfigPatch::faq(vec![
            FaqEntry::new("a", "1"),
            FaqEntry::new("b", "2"),
        ]);
        let body = serde_json::to_value(patch).unwrap();
        assert_eq!(
            body,
            json!({"FAQ": [
                {"question": "a", "answer": "1"},
                {"question": "b", "answer": "2"}
            ]})
        );
    }

    #[test]
    fn blank_and_complete_entries() {
        assert!(FaqEntry::new("  ", "\n").is_blank());
        assert!(!FaqEntry::new("q", "").is_blank());
        assert!(!FaqEntry::new("q", "").is_complete());
        assert!(FaqEntry::new("q", "a").is_complete());
    }

    #[test]
    fn call_parses_and_formats() {
        let call: Call = serde_json::from_value(json!({
            "call_id": "call_9",
            "start_timestamp": 1_700_000_000_000i64,
            "from_number": "+15550009999",
            "duration_ms": 61_499,
            "call_cost": {"combined_cost": 12.5},
            "call_analysis": {"call_summary": "Asked about hours", "user_sentiment": "Neutral"},
            "recording_url": "https://rec.example/9.wav",
            "transcript_object": [
                {"role": "agent", "content": "Hello"},
                {"role": "user", "content": "Hi"}
            ]
        }))
        .unwrap();

        assert_eq!(call.duration_secs(), 61);
        assert!((call.cost_dollars() - 0.125).abs() < f64::EPSILON);
        assert!(!call.is_positive());
        assert_eq!(
            call.call_analysis.user_sentiment,
            Sentiment::Other("Neutral".into())
        );
        assert_eq!(call.transcript_object[0].role.label(), "Agent");
        assert_eq!(call.transcript_object[1].role.label(), "Customer");
        assert!(call.started_at().is_some());
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let calls: Vec<Call> = serde_json::from_value(json!([{
            "call_id": "call_3",
            "start_timestamp": null,
            "from_number": null,
            "duration_ms": null,
            "call_cost": null,
            "call_analysis": {"call_summary": null, "user_sentiment": null},
            "recording_url": null,
            "transcript_object": [{"role": "agent", "content": null}]
        }]))
        .unwrap();

        let call = &calls[0];
        assert_eq!(call.call_id, "call_3");
        assert_eq!(call.from_number, "");
        assert_eq!(call.duration_ms, 0);
        assert_eq!(call.call_cost, CallCost::default());
        assert_eq!(call.call_analysis.call_summary, "");
        assert_eq!(call.call_analysis.user_sentiment.label(), "Unknown");
        assert_eq!(call.recording_url, "");
        assert_eq!(call.transcript_object[0].content, "");
    }

    #[test]
    fn null_analysis_block_reads_as_default() {
        let call: Call = serde_json::from_value(json!({
            "call_id": "call_4",
            "call_analysis": null,
            "transcript_object": null
        }))
        .unwrap();
        assert_eq!(call.call_analysis, CallAnalysis::default());
        assert!(call.transcript_object.is_empty());
    }

    #[test]
    fn calls_query_omits_cursor_on_first_page() {
        let first = serde_json::to_value(CallsQuery::newest_first(10, None)).unwrap();
        assert_eq!(first, json!({"limit": 10, "sort_order": "descending"}));

        let next =
            serde_json::to_value(CallsQuery::newest_first(10, Some("call_7".into()))).unwrap();
        assert_eq!(next["pagination_key"], "call_7");
    }
}
