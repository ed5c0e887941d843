use shared_ui::AlertTone;

use crate::routes::Route;

/// What an auth form shows after the backend answers, and where it goes next.
#[derive(Debug, Clone, PartialEq)]
pub struct FormOutcome {
    pub tone: AlertTone,
    pub message: String,
    /// Followed after [`crate::delay::REDIRECT_DELAY`]. `None` keeps the form open.
    pub redirect: Option<Route>,
}

impl FormOutcome {
    pub fn success(message: impl Into<String>, redirect: Route) -> Self {
        Self {
            tone: AlertTone::Success,
            message: message.into(),
            redirect: Some(redirect),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            tone: AlertTone::Error,
            message: message.into(),
            redirect: None,
        }
    }
}
