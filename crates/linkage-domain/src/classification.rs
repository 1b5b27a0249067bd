//! Link quality classification

use serde::{Deserialize, Serialize};

/// Strength above which a link is primary
pub const PRIMARY_ABOVE: u8 = 66;

/// Strength below which a link is weak
pub const WEAK_BELOW: u8 = 33;

/// Quality tier of a link, derived from its 0-100 strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkClass {
    /// Strong relationship
    Primary,

    /// Moderate relationship
    Secondary,

    /// Tenuous relationship
    Weak,
}

impl LinkClass {
    /// All classes, strongest first
    pub const ALL: [LinkClass; 3] = [LinkClass::Primary, LinkClass::Secondary, LinkClass::Weak];

    /// Get the class name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkClass::Primary => "primary",
            LinkClass::Secondary => "secondary",
            LinkClass::Weak => "weak",
        }
    }

    /// Parse a class from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Some(LinkClass::Primary),
            "secondary" => Some(LinkClass::Secondary),
            "weak" => Some(LinkClass::Weak),
            _ => None,
        }
    }
}

impl std::str::FromStr for LinkClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid link class: {}", s))
    }
}

/// Cutoffs mapping a strength score onto a [`LinkClass`]
///
/// `strength > primary_above` is primary, `strength < weak_below` is weak,
/// everything in between (inclusive) is secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// Exclusive lower bound for primary links
    pub primary_above: u8,

    /// Exclusive upper bound for weak links
    pub weak_below: u8,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            primary_above: PRIMARY_ABOVE,
            weak_below: WEAK_BELOW,
        }
    }
}

impl ClassificationThresholds {
    /// Classify a strength score
    pub fn classify(&self, strength: u8) -> LinkClass {
        if strength > self.primary_above {
            LinkClass::Primary
        } else if strength < self.weak_below {
            LinkClass::Weak
        } else {
            LinkClass::Secondary
        }
    }

    /// Validate the cutoffs
    pub fn validate(&self) -> Result<(), String> {
        if self.primary_above > 100 {
            return Err("primary_above cannot exceed 100".to_string());
        }
        if self.weak_below > self.primary_above {
            return Err("weak_below cannot exceed primary_above".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoffs() {
        let thresholds = ClassificationThresholds::default();
        assert_eq!(thresholds.classify(100), LinkClass::Primary);
        assert_eq!(thresholds.classify(67), LinkClass::Primary);
        assert_eq!(thresholds.classify(66), LinkClass::Secondary);
        assert_eq!(thresholds.classify(33), LinkClass::Secondary);
        assert_eq!(thresholds.classify(32), LinkClass::Weak);
        assert_eq!(thresholds.classify(0), LinkClass::Weak);
    }

    #[test]
    fn test_invalid_cutoffs() {
        let thresholds = ClassificationThresholds {
            primary_above: 20,
            weak_below: 40,
        };
        assert!(thresholds.validate().is_err());
        assert!(ClassificationThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_parse_class() {
        assert_eq!(LinkClass::parse("Primary"), Some(LinkClass::Primary));
        assert_eq!(LinkClass::parse("WEAK"), Some(LinkClass::Weak));
        assert!(LinkClass::parse("strong").is_none());
        assert!("secondary".parse::<LinkClass>().is_ok());
    }
}
