use thiserror::Error;

/// Failures raised while mutating the session-scoped dashboard state.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Task not found")] TaskNotFound,
    #[error("Goal not found")] GoalNotFound,
    #[error("Goal needs a title and a positive target")] InvalidGoal,
    #[error("Expense needs a category and a positive amount")] InvalidExpense,
}
impl DashboardError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TaskNotFound => "TSK-1001",
            Self::GoalNotFound => "GOL-1001",
            Self::InvalidGoal => "GOL-1002",
            Self::InvalidExpense => "EXP-1001",
        }
    }
    pub fn explain(&self) -> &'static str {
        match self {
            Self::TaskNotFound => "No task exists for the requested ID in the current session.",
            Self::GoalNotFound => "No goal exists for the requested ID in the current session.",
            Self::InvalidGoal => "New goals require a non-empty title and a target above zero.",
            Self::InvalidExpense => "New expenses require a category and an amount above zero.",
        }
    }
}

/// Failures raised by the remote daily-verse client. None of these ever
/// escape the provider; they are absorbed into the static fallback.
#[derive(Debug, Error)]
pub enum InspirationError {
    #[error("No generative AI credential is configured")] RemoteUnavailable,
    #[error("Daily verse request failed: {0}")] NetworkFailure(String),
    #[error("Daily verse reply was malformed: {0}")] MalformedResponse(String),
}
impl InspirationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::RemoteUnavailable => "AI-2001",
            Self::NetworkFailure(_) => "AI-2002",
            Self::MalformedResponse(_) => "AI-2003",
        }
    }
    pub fn explain(&self) -> &'static str {
        match self {
            Self::RemoteUnavailable => "The remote service is skipped until a credential is set.",
            Self::NetworkFailure(_) => "The transport failed or timed out before a reply arrived.",
            Self::MalformedResponse(_) => "The reply did not match the expected three-field verse.",
        }
    }
}
