use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Outcome of fetching one list for a dashboard view.
///
/// Failure keeps its reason so the view can show it next to the (empty)
/// table instead of pretending the list is just empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ListState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

// Manual impl: the derive would require `T: Default`.
impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> ListState<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(rows) => ListState::Loaded(rows),
            Err(e) => ListState::Failed(e.message().to_string()),
        }
    }

    /// Rows to render. Empty while loading or after a failure.
    pub fn rows(&self) -> &[T] {
        match self {
            ListState::Loaded(rows) => rows,
            ListState::Loading | ListState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}
