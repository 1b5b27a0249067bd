//! Interaction kinds carried by a record

use serde::{Deserialize, Serialize};

/// Kind of a single interaction between two participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    /// Voice call
    Call,

    /// Text message
    Sms,

    /// Anything the type column does not identify
    Other,
}

impl InteractionType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Call => "call",
            InteractionType::Sms => "sms",
            InteractionType::Other => "other",
        }
    }

    /// Classify a raw type label from an export.
    ///
    /// Matching is by substring so that labels such as `"SMS sortant"` or
    /// `"Outgoing call"` resolve. Message markers are checked first because
    /// some exports label texts as `"voice sms"`.
    pub fn parse(raw: &str) -> Self {
        let label = raw.to_lowercase();
        const SMS_MARKERS: [&str; 4] = ["sms", "mms", "text", "message"];
        const CALL_MARKERS: [&str; 5] = ["call", "appel", "voice", "voix", "voip"];

        if SMS_MARKERS.iter().any(|m| label.contains(m)) {
            InteractionType::Sms
        } else if CALL_MARKERS.iter().any(|m| label.contains(m)) {
            InteractionType::Call
        } else {
            InteractionType::Other
        }
    }
}

impl std::fmt::Display for InteractionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
