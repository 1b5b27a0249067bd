//! Row predicates and classified-edge filters

use crate::config::{DurationRange, FilterConfig, InteractionFilter};
use crate::error::EngineError;
use crate::fields::ExtractedRecord;
use crate::types::ClassifiedEdge;
use chrono::NaiveDateTime;
use linkage_domain::LinkClass;

/// Per-row predicates applied before graph construction
#[derive(Debug, Clone)]
pub struct RowFilter {
    kind: InteractionFilter,
    duration: DurationRange,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl RowFilter {
    /// Prepare the predicates, parsing the date bounds once
    pub fn from_config(filters: &FilterConfig) -> Result<Self, EngineError> {
        let (start, end) = filters
            .date_range
            .bounds()
            .map_err(EngineError::InvalidFilter)?;
        Ok(Self {
            kind: filters.interaction_type,
            duration: filters.duration_range.clone(),
            start,
            end,
        })
    }

    /// Whether a record passes type, duration and date predicates
    ///
    /// A missing duration counts as zero seconds. A missing timestamp passes
    /// the date predicate.
    pub fn accepts(&self, record: &ExtractedRecord) -> bool {
        if !self.kind.accepts(record.kind) {
            return false;
        }
        if !self.duration.contains(record.duration.unwrap_or(0.0)) {
            return false;
        }
        match record.timestamp {
            Some(ts) => {
                self.start.is_none_or(|start| ts >= start) && self.end.is_none_or(|end| ts <= end)
            }
            None => true,
        }
    }
}

/// Filters applied to classified edges
pub struct EdgeFilter<'a> {
    filters: &'a FilterConfig,
}

impl<'a> EdgeFilter<'a> {
    /// Borrow the filter criteria
    pub fn new(filters: &'a FilterConfig) -> Self {
        Self { filters }
    }

    /// Whether an edge passes every edge-level criterion
    ///
    /// `show_weak_links = false` drops weak edges even when `link_types`
    /// accepts them. Derived edges additionally need
    /// `show_indirect_connections` and `min_connection_strength`.
    pub fn accepts(&self, edge: &ClassifiedEdge) -> bool {
        let f = self.filters;

        if !f.connection_degrees.contains(&edge.degree) {
            return false;
        }
        if !f.link_types.contains(&edge.classification) {
            return false;
        }
        if edge.strength < f.min_strength_score {
            return false;
        }
        if !f.show_weak_links && edge.classification == LinkClass::Weak {
            return false;
        }
        if edge.is_derived()
            && (!f.show_indirect_connections || edge.strength < f.min_connection_strength)
        {
            return false;
        }
        true
    }
}
