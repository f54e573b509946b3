use serde::{Deserialize, Serialize};

/// One parameter accepted by an [`ApiMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ApiParameter {
    pub name: String,
    /// Wire type of the parameter, e.g. `uint32` or `string`.
    #[serde(rename = "type")]
    pub parameter_type: String,
    pub optional: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// One callable method of an [`ApiInterface`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ApiMethod {
    pub name: String,
    pub version: i32,
    #[serde(rename = "httpmethod")]
    pub http_method: String,
    #[serde(default)]
    pub parameters: Vec<ApiParameter>,
}

/// A named interface grouping of the Web API, e.g. `ISteamUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ApiInterface {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<ApiMethod>,
}
