use serde::{Deserialize, Serialize};

/// A named storage/backup target, as listed by the customer configs endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    #[serde(rename = "configUUID")]
    pub config_uuid: String,
    #[serde(rename = "configName")]
    pub config_name: String,
}

impl ConfigRecord {
    pub fn new(config_uuid: impl Into<String>, config_name: impl Into<String>) -> Self {
        Self {
            config_uuid: config_uuid.into(),
            config_name: config_name.into(),
        }
    }
}
