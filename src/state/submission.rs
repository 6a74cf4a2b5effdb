//! Submission lifecycle: what the last generation request produced

use crate::agent::{AgentError, AgentResponse};

pub const DEFAULT_RESULT_MESSAGE: &str = "Document generated";
pub const DEFAULT_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Normalized view of what the agent reported on success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentResult {
    pub status: Option<String>,
    pub message: Option<String>,
    pub document_title: Option<String>,
    pub vendor_name: Option<String>,
}

/// Where the current submission stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        result: AgentResult,
        pdf_url: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    /// True once a request has finished, successfully or not
    pub fn has_outcome(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded { .. } | SubmissionState::Failed { .. }
        )
    }

    pub fn result(&self) -> Option<&AgentResult> {
        match self {
            SubmissionState::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn pdf_url(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded { pdf_url, .. } => pdf_url.as_deref(),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Result of one generation request, ready to be applied to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success {
        result: AgentResult,
        pdf_url: Option<String>,
    },
    Failure {
        message: String,
    },
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

impl GenerationOutcome {
    /// Interpret a reply from the agent
    pub fn from_response(response: &AgentResponse) -> Self {
        if !response.success {
            let message = non_blank(response.error.as_deref())
                .or_else(|| non_blank(response.response_message()))
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            return GenerationOutcome::Failure { message };
        }

        let result = AgentResult {
            status: non_blank(response.result_str("status")),
            message: Some(
                non_blank(response.result_str("message"))
                    .or_else(|| non_blank(response.response_message()))
                    .unwrap_or_else(|| DEFAULT_RESULT_MESSAGE.to_string()),
            ),
            document_title: non_blank(response.result_str("document_title")),
            vendor_name: non_blank(response.result_str("vendor_name")),
        };
        let pdf_url = non_blank(response.first_artifact_url());

        GenerationOutcome::Success { result, pdf_url }
    }

    /// Transport problems always surface as the generic network message
    pub fn from_error(_error: &AgentError) -> Self {
        GenerationOutcome::Failure {
            message: NETWORK_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn from_reply(reply: &Result<AgentResponse, AgentError>) -> Self {
        match reply {
            Ok(response) => Self::from_response(response),
            Err(error) => Self::from_error(error),
        }
    }

    pub fn into_state(self) -> SubmissionState {
        match self {
            GenerationOutcome::Success { result, pdf_url } => {
                SubmissionState::Succeeded { result, pdf_url }
            }
            GenerationOutcome::Failure { message } => SubmissionState::Failed { message },
        }
    }
}
