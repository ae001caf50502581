use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub docs: String,
}
