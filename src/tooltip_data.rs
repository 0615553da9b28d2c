// src/tooltip_data.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feature ids come from vector sources as either strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{}", n),
            FeatureId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::Text(value.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        FeatureId::Text(value)
    }
}

impl From<i64> for FeatureId {
    fn from(value: i64) -> Self {
        FeatureId::Number(value)
    }
}

/// Which feature's tooltip is requested. Equal only when both parts match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureIdentity {
    pub layer_id: String,
    pub feature_id: FeatureId,
}

impl FeatureIdentity {
    pub fn new(layer_id: impl Into<String>, feature_id: impl Into<FeatureId>) -> Self {
        Self {
            layer_id: layer_id.into(),
            feature_id: feature_id.into(),
        }
    }
}

impl fmt::Display for FeatureIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.layer_id, self.feature_id)
    }
}

/// One property descriptor as served by the properties endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTooltipProperty {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    // Markup from the field formatter, rendered as-is
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub filterable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturePropertiesResponse {
    #[serde(default)]
    pub properties: Vec<RawTooltipProperty>,
}

/// Filter a property's filter button asks the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub layer_id: String,
    pub field: String,
    pub value: String,
}

impl fmt::Display for PropertyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = \"{}\"", self.layer_id, self.field, self.value)
    }
}
