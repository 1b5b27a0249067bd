//! Node module - one participant in the contact graph

use crate::InteractionType;
use serde::{Deserialize, Serialize};

/// Interaction count at or above which a participant is a primary contact
pub const PRIMARY_MIN_INTERACTIONS: u64 = 20;

/// Interaction count at or above which a participant is a secondary contact
pub const SECONDARY_MIN_INTERACTIONS: u64 = 10;

/// Interaction count at or below which a participant looks like a service number
pub const SERVICE_MAX_INTERACTIONS: u64 = 3;

/// Display tier of a participant
///
/// Derived from the participant's total interaction count:
/// - Primary: 20 or more interactions
/// - Secondary: 10 or more, or anything between the service and secondary cutoffs
/// - Service: 3 or fewer (short codes, voicemail, one-off numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactTier {
    /// Heavily connected participant
    Primary,

    /// Regular participant
    Secondary,

    /// Rarely seen participant
    Service,
}

impl ContactTier {
    /// Derive the tier from a total interaction count
    pub fn from_interactions(interactions: u64) -> Self {
        if interactions >= PRIMARY_MIN_INTERACTIONS {
            ContactTier::Primary
        } else if interactions >= SECONDARY_MIN_INTERACTIONS {
            ContactTier::Secondary
        } else if interactions <= SERVICE_MAX_INTERACTIONS {
            ContactTier::Service
        } else {
            ContactTier::Secondary
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactTier::Primary => "primary",
            ContactTier::Secondary => "secondary",
            ContactTier::Service => "service",
        }
    }
}

/// A participant in the contact graph
///
/// Created the first time its id appears in an accepted record and updated
/// on every later record that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Participant id, treated as opaque
    pub id: String,

    /// Total accepted interactions touching this participant
    pub interactions: u64,

    /// Interactions classified as calls
    pub calls: u64,

    /// Interactions classified as text messages
    pub sms: u64,

    /// Display weight derived from `interactions`
    pub size: f64,

    /// Display tier derived from `interactions`
    pub tier: ContactTier,
}

impl Node {
    /// Create a node with no interactions yet
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            interactions: 0,
            calls: 0,
            sms: 0,
            size: display_size(0),
            tier: ContactTier::from_interactions(0),
        }
    }

    /// Count one more interaction of the given kind
    pub fn record(&mut self, kind: InteractionType) {
        self.interactions += 1;
        match kind {
            InteractionType::Call => self.calls += 1,
            InteractionType::Sms => self.sms += 1,
            InteractionType::Other => {}
        }
        self.size = display_size(self.interactions);
        self.tier = ContactTier::from_interactions(self.interactions);
    }
}

/// Display size grows with the square root of activity and saturates at 40
fn display_size(interactions: u64) -> f64 {
    (8.0 + 4.0 * (interactions as f64).sqrt()).min(40.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_cutoffs() {
        assert_eq!(ContactTier::from_interactions(0), ContactTier::Service);
        assert_eq!(ContactTier::from_interactions(3), ContactTier::Service);
        assert_eq!(ContactTier::from_interactions(4), ContactTier::Secondary);
        assert_eq!(ContactTier::from_interactions(9), ContactTier::Secondary);
        assert_eq!(ContactTier::from_interactions(10), ContactTier::Secondary);
        assert_eq!(ContactTier::from_interactions(19), ContactTier::Secondary);
        assert_eq!(ContactTier::from_interactions(20), ContactTier::Primary);
    }

    #[test]
    fn test_record_updates_counts() {
        let mut node = Node::new("0601020304");
        node.record(InteractionType::Call);
        node.record(InteractionType::Sms);
        node.record(InteractionType::Other);

        assert_eq!(node.interactions, 3);
        assert_eq!(node.calls, 1);
        assert_eq!(node.sms, 1);
        assert_eq!(node.tier, ContactTier::Service);
    }

    #[test]
    fn test_size_saturates() {
        let mut node = Node::new("a");
        let initial = node.size;
        node.record(InteractionType::Call);
        assert!(node.size > initial);

        for _ in 0..1000 {
            node.record(InteractionType::Call);
        }
        assert_eq!(node.size, 40.0);
    }
}
