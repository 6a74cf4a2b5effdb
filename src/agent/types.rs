//! Wire types exchanged with the generation agent

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body posted to the agent endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerateRequest<'a> {
    pub message: &'a str,
    pub agent_id: &'a str,
}

/// Top-level agent reply. Every part may be missing or oddly shaped;
/// anything that does not fit is read as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub response: Option<AgentResponseBody>,
    #[serde(default, deserialize_with = "lenient")]
    pub module_outputs: Option<ModuleOutputs>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentResponseBody {
    /// Free-form result object produced by the agent
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModuleOutputs {
    #[serde(default, deserialize_with = "lenient")]
    pub artifact_files: Option<Vec<ArtifactFile>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtifactFile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_url: Option<String>,
}

/// Decode `T` if the value has the right shape, otherwise `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

impl AgentResponse {
    /// String value stored under `response.result.<key>`, if any
    pub fn result_str(&self, key: &str) -> Option<&str> {
        self.response
            .as_ref()?
            .result
            .as_ref()?
            .get(key)?
            .as_str()
    }

    pub fn response_message(&self) -> Option<&str> {
        self.response.as_ref()?.message.as_deref()
    }

    /// URL of the first generated artifact
    pub fn first_artifact_url(&self) -> Option<&str> {
        self.module_outputs
            .as_ref()?
            .artifact_files
            .as_ref()?
            .first()?
            .file_url
            .as_deref()
    }
}
