//! Configuration for the engine
//!
//! [`FilterConfig`] is the per-call snapshot of filter criteria supplied by
//! the host. [`EngineConfig`] holds the slower-moving knobs: column aliases,
//! scoring constants, and classification cutoffs.

use crate::time::{parse_range_end, parse_range_start};
use chrono::NaiveDateTime;
use linkage_domain::{ClassificationThresholds, InteractionType, LinkClass, StrengthConfig};
use serde::{Deserialize, Serialize};

/// Highest link degree the path finder reports
pub const MAX_DEGREE: u8 = 3;

/// Which interaction kinds survive the row filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionFilter {
    /// Every kind, including unrecognized ones
    #[default]
    All,
    /// Calls only
    Calls,
    /// Text messages only
    Sms,
}

impl InteractionFilter {
    /// Whether a record of `kind` passes
    pub fn accepts(&self, kind: InteractionType) -> bool {
        match self {
            InteractionFilter::All => true,
            InteractionFilter::Calls => kind == InteractionType::Call,
            InteractionFilter::Sms => kind == InteractionType::Sms,
        }
    }
}

/// Inclusive timestamp window; absent bounds impose no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    /// Earliest accepted timestamp (ISO-8601 date or date-time)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Latest accepted timestamp; a bare date covers the whole day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DateRange {
    /// Parse both bounds
    pub fn bounds(&self) -> Result<(Option<NaiveDateTime>, Option<NaiveDateTime>), String> {
        let start = match self.start.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                parse_range_start(raw).ok_or_else(|| format!("Invalid start date: {}", raw))?,
            ),
            None => None,
        };
        let end = match self.end.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                Some(parse_range_end(raw).ok_or_else(|| format!("Invalid end date: {}", raw))?)
            }
            None => None,
        };
        Ok((start, end))
    }
}

/// Inclusive duration window in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationRange {
    /// Shortest accepted duration
    pub min: f64,

    /// Longest accepted duration; absent means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Default for DurationRange {
    fn default() -> Self {
        Self { min: 0.0, max: None }
    }
}

impl DurationRange {
    /// Whether `seconds` falls inside the window
    pub fn contains(&self, seconds: f64) -> bool {
        seconds >= self.min && self.max.is_none_or(|max| seconds <= max)
    }
}

/// Snapshot of every active filter criterion
///
/// Supplied wholesale by the caller for one analysis; the engine never
/// mutates it. Nested tables sit last so the TOML form stays valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Interaction kinds to keep
    pub interaction_type: InteractionFilter,

    /// Participants of interest; advisory, not used for filtering
    pub individuals: Vec<String>,

    /// Nodes with fewer total interactions are dropped
    pub min_interactions: u64,

    /// If non-empty, keep only these participants and their direct contacts
    pub contact_whitelist: Vec<String>,

    /// Accepted link classes
    pub link_types: Vec<LinkClass>,

    /// Minimum strength for every classified edge
    pub min_strength_score: u8,

    /// When false, weak edges are dropped even if `link_types` allows them
    pub show_weak_links: bool,

    /// Accepted link degrees (1, 2, 3)
    pub connection_degrees: Vec<u8>,

    /// Minimum strength for derived (degree > 1) edges
    pub min_connection_strength: u8,

    /// When false, derived edges are left out of the edge set
    pub show_indirect_connections: bool,

    /// Depth cap of the path search, in hops
    pub max_path_length: usize,

    /// Accepted timestamp window
    pub date_range: DateRange,

    /// Accepted duration window
    pub duration_range: DurationRange,
}

impl Default for FilterConfig {
    /// Permissive defaults: everything passes
    fn default() -> Self {
        Self {
            interaction_type: InteractionFilter::All,
            individuals: Vec::new(),
            min_interactions: 0,
            contact_whitelist: Vec::new(),
            link_types: LinkClass::ALL.to_vec(),
            min_strength_score: 0,
            show_weak_links: true,
            connection_degrees: vec![1, 2, 3],
            min_connection_strength: 0,
            show_indirect_connections: true,
            max_path_length: usize::from(MAX_DEGREE),
            date_range: DateRange::default(),
            duration_range: DurationRange::default(),
        }
    }
}

impl FilterConfig {
    /// Direct contacts only preset
    pub fn direct_only() -> Self {
        Self {
            connection_degrees: vec![1],
            show_indirect_connections: false,
            max_path_length: 2,
            ..Self::default()
        }
    }

    /// Strong relationships only preset
    pub fn strong_only() -> Self {
        Self {
            link_types: vec![LinkClass::Primary],
            min_strength_score: 50,
            show_weak_links: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_path_length < 2 {
            return Err("max_path_length must be at least 2".to_string());
        }
        if self.min_strength_score > 100 {
            return Err("min_strength_score cannot exceed 100".to_string());
        }
        if self.min_connection_strength > 100 {
            return Err("min_connection_strength cannot exceed 100".to_string());
        }
        if let Some(bad) = self
            .connection_degrees
            .iter()
            .find(|d| **d == 0 || **d > MAX_DEGREE)
        {
            return Err(format!("Unsupported connection degree: {}", bad));
        }

        let range = &self.duration_range;
        if range.min.is_nan() || range.min < 0.0 {
            return Err("duration_range.min must be non-negative".to_string());
        }
        if let Some(max) = range.max {
            if max.is_nan() || max < range.min {
                return Err("duration_range.max cannot be below duration_range.min".to_string());
            }
        }

        if let (Some(start), Some(end)) = self.date_range.bounds()? {
            if start > end {
                return Err("date_range.start is after date_range.end".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// Ordered candidate column names for each canonical field
///
/// Matching is case, punctuation and accent insensitive, so `"numero a"`
/// also matches `Numéro A`, `numero_a` and `NUMERO-A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAliases {
    /// Initiating participant
    pub caller: Vec<String>,
    /// Receiving participant
    pub callee: Vec<String>,
    /// Interaction type label
    pub interaction_type: Vec<String>,
    /// Duration in seconds or `[hh:]mm:ss`
    pub duration: Vec<String>,
    /// Time of the interaction
    pub timestamp: Vec<String>,
}

fn owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|a| a.to_string()).collect()
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            caller: owned(&[
                "caller",
                "numero a",
                "appelant",
                "source",
                "from",
                "calling number",
                "a number",
                "msisdn a",
                "originator",
            ]),
            callee: owned(&[
                "callee",
                "numero b",
                "appele",
                "destinataire",
                "target",
                "to",
                "called number",
                "b number",
                "msisdn b",
                "recipient",
            ]),
            interaction_type: owned(&[
                "type",
                "interaction type",
                "call type",
                "type d appel",
                "type de communication",
                "event type",
                "nature",
            ]),
            duration: owned(&["duration", "duree", "duration s", "duration seconds", "seconds"]),
            timestamp: owned(&[
                "timestamp",
                "date",
                "datetime",
                "date heure",
                "date et heure",
                "start time",
                "time",
            ]),
        }
    }
}

impl FieldAliases {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.caller.is_empty() {
            return Err("caller aliases cannot be empty".to_string());
        }
        if self.callee.is_empty() {
            return Err("callee aliases cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Engine-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Column aliases used by the field extractor
    pub aliases: FieldAliases,

    /// Path strength constants
    pub strength: StrengthConfig,

    /// Link classification cutoffs
    pub classification: ClassificationThresholds,
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.aliases.validate()?;
        self.strength.validate()?;
        self.classification.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_are_valid() {
        assert!(FilterConfig::default().validate().is_ok());
        assert!(FilterConfig::direct_only().validate().is_ok());
        assert!(FilterConfig::strong_only().validate().is_ok());
    }

    #[test]
    fn test_invalid_path_length() {
        let config = FilterConfig {
            max_path_length: 1,
            ..FilterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_degree() {
        let config = FilterConfig {
            connection_degrees: vec![1, 4],
            ..FilterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_duration_range() {
        let config = FilterConfig {
            duration_range: DurationRange {
                min: 60.0,
                max: Some(30.0),
            },
            ..FilterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_date_range_validation() {
        let mut config = FilterConfig::default();
        config.date_range.start = Some("2024-02-01".to_string());
        config.date_range.end = Some("2024-01-01".to_string());
        assert!(config.validate().is_err());

        config.date_range.start = Some("not a date".to_string());
        config.date_range.end = None;
        assert!(config.validate().is_err());

        config.date_range.start = Some("2024-01-01".to_string());
        config.date_range.end = Some("2024-01-01".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interaction_filter() {
        assert!(InteractionFilter::All.accepts(InteractionType::Other));
        assert!(InteractionFilter::Calls.accepts(InteractionType::Call));
        assert!(!InteractionFilter::Calls.accepts(InteractionType::Sms));
        assert!(InteractionFilter::Sms.accepts(InteractionType::Sms));
        assert!(!InteractionFilter::Sms.accepts(InteractionType::Other));
    }

    #[test]
    fn test_duration_range_contains() {
        let open = DurationRange::default();
        assert!(open.contains(0.0));
        assert!(open.contains(86_400.0));

        let bounded = DurationRange {
            min: 10.0,
            max: Some(60.0),
        };
        assert!(bounded.contains(10.0));
        assert!(bounded.contains(60.0));
        assert!(!bounded.contains(9.9));
        assert!(!bounded.contains(60.1));
    }

    #[test]
    fn test_filter_toml_round_trip() {
        let mut config = FilterConfig::strong_only();
        config.contact_whitelist = vec!["0601020304".to_string()];
        config.date_range.start = Some("2024-01-01".to_string());
        config.duration_range.max = Some(600.0);

        let toml_str = config.to_toml().unwrap();
        let parsed = FilterConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_filter_toml() {
        let toml_str = r#"
            interaction_type = "calls"
            min_interactions = 5
            link_types = ["primary", "secondary"]

            [duration_range]
            max = 300
        "#;

        let config = FilterConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.interaction_type, InteractionFilter::Calls);
        assert_eq!(config.min_interactions, 5);
        assert_eq!(config.link_types, vec![LinkClass::Primary, LinkClass::Secondary]);
        assert_eq!(config.duration_range.min, 0.0);
        assert_eq!(config.duration_range.max, Some(300.0));
        assert!(config.show_indirect_connections);
        assert_eq!(config.connection_degrees, vec![1, 2, 3]);
    }

    #[test]
    fn test_engine_config_toml() {
        let toml_str = r#"
            [aliases]
            caller = ["msisdn"]
            callee = ["peer"]

            [classification]
            primary_above = 80
        "#;

        let config = EngineConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.aliases.caller, vec!["msisdn"]);
        assert_eq!(config.aliases.duration, FieldAliases::default().duration);
        assert_eq!(config.classification.primary_above, 80);
        assert_eq!(config.classification.weak_below, 33);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_rejects_empty_aliases() {
        let mut config = EngineConfig::default();
        config.aliases.caller.clear();
        assert!(config.validate().is_err());
    }
}
