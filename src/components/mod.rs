// src/components/mod.rs
pub mod feature_tooltip;
