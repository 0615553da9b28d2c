// src/tooltip_config.rs
use crate::tooltip_data::{FeatureId, FeatureIdentity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub show_close_button: bool,
    pub show_filter_buttons: bool,
    pub properties_base: String,
    pub labels: TooltipLabels,
    pub features: Vec<FeatureEntry>,
}

/// Translatable strings shown by the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipLabels {
    pub loading: String,
    pub load_error_title: String,
    pub close_aria_label: String,
    pub filter_title: String,
    pub filter_aria_label: String,
}

/// A feature the demo host lets the user pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub label: String,
    pub layer_id: String,
    pub feature_id: FeatureId,
}

impl FeatureEntry {
    pub fn identity(&self) -> FeatureIdentity {
        FeatureIdentity::new(self.layer_id.clone(), self.feature_id.clone())
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_close_button: true,
            show_filter_buttons: true,
            properties_base: String::from("public/features"),
            labels: TooltipLabels::default(),
            features: Vec::new(),
        }
    }
}

impl Default for TooltipLabels {
    fn default() -> Self {
        Self {
            loading: String::from("loading content"),
            load_error_title: String::from("Unable to load tooltip content"),
            close_aria_label: String::from("Close tooltip"),
            filter_title: String::from("Filter on property"),
            filter_aria_label: String::from("Filter on property"),
        }
    }
}
