//! Query builder for filtering maintenance tasks

use crate::models::{ItemType, TaskFilters, TrackType};
use uuid::Uuid;

/// Builder for constructing maintenance task queries with filters
#[derive(Debug, Clone)]
pub struct TaskQueryBuilder {
    filters: TaskFilters,
}

impl TaskQueryBuilder {
    /// Create a new query builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: TaskFilters::default(),
        }
    }

    /// Filter by owning aircraft
    #[must_use]
    pub const fn aircraft(mut self, aircraft_uuid: Uuid) -> Self {
        self.filters.aircraft_uuid = Some(aircraft_uuid);
        self
    }

    /// Filter by item type
    #[must_use]
    pub const fn item_type(mut self, item_type: ItemType) -> Self {
        self.filters.item_type = Some(item_type);
        self
    }

    /// Filter by track type
    #[must_use]
    pub const fn track_type(mut self, track_type: TrackType) -> Self {
        self.filters.track_type = Some(track_type);
        self
    }

    /// Filter by active flag
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.filters.active = Some(active);
        self
    }

    /// Add search query against title and reference number
    #[must_use]
    pub fn search(mut self, query: &str) -> Self {
        self.filters.search_query = Some(query.to_string());
        self
    }

    /// Set limit
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.filters.limit = Some(limit);
        self
    }

    /// Set offset for pagination
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.filters.offset = Some(offset);
        self
    }

    /// Build the final filters
    #[must_use]
    pub fn build(self) -> TaskFilters {
        self.filters
    }
}

impl Default for TaskQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
