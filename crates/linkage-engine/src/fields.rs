//! Field extraction from loosely-typed interaction rows
//!
//! Exports name the same column in many ways (`Numéro A`, `numero_a`,
//! `NUMERO-A`). Row keys and candidate aliases are both normalized before
//! comparison, and the first alias with a non-blank value wins.

use crate::config::FieldAliases;
use crate::time::parse_timestamp;
use chrono::NaiveDateTime;
use linkage_domain::InteractionType;
use serde_json::Value;

/// Canonical fields extracted from one accepted row
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRecord {
    /// Initiating participant
    pub caller: String,
    /// Receiving participant, never equal to `caller`
    pub callee: String,
    /// Interaction kind
    pub kind: InteractionType,
    /// Duration in seconds, if present and parsable
    pub duration: Option<f64>,
    /// Time of the interaction, if present and parsable
    pub timestamp: Option<NaiveDateTime>,
}

/// Normalize a column name for alias comparison
///
/// Lower-cases, folds Latin accents, and collapses every run of
/// non-alphanumeric characters into a single space with no leading or
/// trailing space.
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars().flat_map(char::to_lowercase).map(fold_accent) {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }
    out
}

fn fold_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// A row whose keys have been normalized once for repeated lookups
pub struct NormalizedRow<'a> {
    entries: Vec<(String, &'a Value)>,
}

impl<'a> NormalizedRow<'a> {
    /// Normalize a row; `None` if it is not a JSON object
    pub fn new(row: &'a Value) -> Option<Self> {
        let object = row.as_object()?;
        let entries = object
            .iter()
            .map(|(key, value)| (normalize_key(key), value))
            .collect();
        Some(Self { entries })
    }

    /// First non-blank value among `aliases`, in alias order
    pub fn get<S: AsRef<str>>(&self, aliases: &[S]) -> Option<String> {
        aliases.iter().find_map(|alias| {
            let wanted = normalize_key(alias.as_ref());
            if wanted.is_empty() {
                return None;
            }
            self.entries
                .iter()
                .filter(|(key, _)| *key == wanted)
                .find_map(|(_, value)| scalar_text(value))
        })
    }
}

/// Return the first non-blank value of `row` under any of `aliases`
///
/// Non-object rows, missing aliases and blank values all yield `None`.
///
/// # Examples
///
/// ```
/// use linkage_engine::fields::extract_field;
/// use serde_json::json;
///
/// let row = json!({ "Numéro A": " 0601020304 " });
/// assert_eq!(extract_field(&row, &["numero_a"]), Some("0601020304".to_string()));
/// assert_eq!(extract_field(&json!("not a row"), &["numero a"]), None);
/// ```
pub fn extract_field<S: AsRef<str>>(row: &Value, aliases: &[S]) -> Option<String> {
    NormalizedRow::new(row)?.get(aliases)
}

/// Render a scalar as trimmed text; blanks and containers are `None`
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64()?;
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Extract the canonical fields of one row
///
/// Returns `None` when the row is not an object, when either participant is
/// missing, or when caller and callee are the same id.
pub fn extract_record(row: &Value, aliases: &FieldAliases) -> Option<ExtractedRecord> {
    let row = NormalizedRow::new(row)?;
    let caller = row.get(&aliases.caller)?;
    let callee = row.get(&aliases.callee)?;
    if caller == callee {
        return None;
    }

    let kind = row
        .get(&aliases.interaction_type)
        .map(|label| InteractionType::parse(&label))
        .unwrap_or(InteractionType::Other);
    let duration = row.get(&aliases.duration).and_then(|d| parse_duration(&d));
    let timestamp = row.get(&aliases.timestamp).and_then(|t| parse_timestamp(&t));

    Some(ExtractedRecord {
        caller,
        callee,
        kind,
        duration,
        timestamp,
    })
}

/// Parse a duration in seconds
///
/// Accepts plain or decimal numbers (comma or dot), an optional trailing
/// unit such as `s` or `sec`, and clock forms `mm:ss` / `hh:mm:ss`.
/// Negative, non-finite or unparsable values are `None`.
pub fn parse_duration(raw: &str) -> Option<f64> {
    let raw = raw.trim();

    if raw.contains(':') {
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        if parts.len() > 3 {
            return None;
        }
        let mut seconds = 0.0;
        for part in parts {
            let value: f64 = part.replace(',', ".").parse().ok()?;
            if !value.is_finite() || value < 0.0 {
                return None;
            }
            seconds = seconds * 60.0 + value;
        }
        return Some(seconds);
    }

    let number = raw.trim_end_matches(|c: char| c.is_alphabetic()).trim();
    let seconds: f64 = number.replace(',', ".").parse().ok()?;
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds)
    } else {
        None
    }
}
