//! Trait abstraction for the agent client to enable mocking in tests

use super::client::AgentError;
use super::types::AgentResponse;
use async_trait::async_trait;

/// A remote procedure that turns a prompt into a generated document
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentClientTrait: Send + Sync {
    /// Ask the agent identified by `agent_id` to act on `prompt`
    async fn generate(&self, prompt: &str, agent_id: &str) -> Result<AgentResponse, AgentError>;
}
