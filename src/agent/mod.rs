//! Agent client module for document generation requests

mod client;
mod traits;
mod types;

pub use client::{AgentError, HttpAgentClient};
pub use traits::AgentClientTrait;
pub use types::AgentResponse;

#[cfg(test)]
pub use traits::MockAgentClientTrait;

/// Identifier of the vendor PDF generation profile
pub const AGENT_ID: &str = "6997ec8577b90295a058d617";

/// Display name of the agent behind [`AGENT_ID`]
pub const AGENT_NAME: &str = "Vendor PDF Generator Agent";
