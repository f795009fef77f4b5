//! Visibility Filter
//!
//! Which items the list shows, by completion status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::TodoItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityFilter {
    #[default]
    All,
    Completed,
    NotCompleted,
}

/// Unknown filter name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown visibility filter: {0}")]
pub struct ParseFilterError(pub String);

impl VisibilityFilter {
    /// All filters in display order
    pub const ALL: [VisibilityFilter; 3] = [
        VisibilityFilter::All,
        VisibilityFilter::Completed,
        VisibilityFilter::NotCompleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityFilter::All => "all",
            VisibilityFilter::Completed => "completed",
            VisibilityFilter::NotCompleted => "not-completed",
        }
    }

    /// Label shown next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityFilter::All => "All",
            VisibilityFilter::Completed => "Completed",
            VisibilityFilter::NotCompleted => "Not Completed",
        }
    }

    /// Whether `item` passes this filter
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            VisibilityFilter::All => true,
            VisibilityFilter::Completed => item.completed,
            VisibilityFilter::NotCompleted => !item.completed,
        }
    }
}

impl FromStr for VisibilityFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(VisibilityFilter::All),
            "completed" => Ok(VisibilityFilter::Completed),
            "not-completed" => Ok(VisibilityFilter::NotCompleted),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
