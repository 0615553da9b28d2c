// src/property_loader.rs
use crate::tooltip_data::{FeatureIdentity, FeaturePropertiesResponse, PropertyFilter};
use crate::tooltip_property::TooltipProperty;
use crate::utils::resource_url;
use gloo_net::http::Request;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thiserror::Error;
use yew::Callback;

/// The only way loading a tooltip can fail. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PropertyLoadError {
    pub message: String,
}

impl PropertyLoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type PropertyResult = Result<Vec<TooltipProperty>, PropertyLoadError>;

// Not Send: everything runs on the browser's event loop.
pub type PropertyFuture = Pin<Box<dyn Future<Output = PropertyResult>>>;

pub trait PropertyLoader {
    fn load_feature_properties(&self, identity: &FeatureIdentity) -> PropertyFuture;
}

/// Shared loader that can sit in component props. Compared by pointer.
#[derive(Clone)]
pub struct LoaderHandle(pub Rc<dyn PropertyLoader>);

impl LoaderHandle {
    pub fn new(loader: impl PropertyLoader + 'static) -> Self {
        Self(Rc::new(loader))
    }

    pub fn load(&self, identity: &FeatureIdentity) -> PropertyFuture {
        self.0.load_feature_properties(identity)
    }
}

impl PartialEq for LoaderHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

/// Loads `{base}/{layer_id}/{feature_id}.json` over HTTP.
#[derive(Clone)]
pub struct HttpPropertyLoader {
    base: String,
    on_filter: Option<Callback<PropertyFilter>>,
}

impl HttpPropertyLoader {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            on_filter: None,
        }
    }

    pub fn with_filter_callback(mut self, on_filter: Callback<PropertyFilter>) -> Self {
        self.on_filter = Some(on_filter);
        self
    }

    /// Layer and feature ids are percent-encoded so each stays one path segment.
    pub fn properties_path(&self, identity: &FeatureIdentity) -> String {
        format!(
            "{}/{}/{}.json",
            self.base.trim_end_matches('/'),
            urlencoding::encode(&identity.layer_id),
            urlencoding::encode(&identity.feature_id.to_string())
        )
    }
}

impl PropertyLoader for HttpPropertyLoader {
    fn load_feature_properties(&self, identity: &FeatureIdentity) -> PropertyFuture {
        let cache_bust = js_sys::Date::now() as u64;
        let url = format!("{}?v={}", resource_url(&self.properties_path(identity)), cache_bust);
        let layer_id = identity.layer_id.clone();
        let on_filter = self.on_filter.clone();

        Box::pin(async move {
            let resp = Request::get(&url).send().await.map_err(|e| {
                PropertyLoadError::new(format!("Failed to load feature properties: {:?}", e))
            })?;
            if !resp.ok() {
                return Err(PropertyLoadError::new(format!(
                    "Failed to load feature properties: HTTP {} {}",
                    resp.status(),
                    resp.status_text()
                )));
            }
            let text = resp.text().await.map_err(|e| {
                PropertyLoadError::new(format!("Failed to read response text: {:?}", e))
            })?;
            let response = parse_feature_properties(&text)?;

            Ok(response
                .properties
                .into_iter()
                .map(|raw| TooltipProperty::from_raw(&layer_id, raw, on_filter.as_ref()))
                .collect())
        })
    }
}

pub fn parse_feature_properties(json: &str) -> Result<FeaturePropertiesResponse, PropertyLoadError> {
    serde_json::from_str(json)
        .map_err(|e| PropertyLoadError::new(format!("Invalid feature properties: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverLoader;

    impl PropertyLoader for NeverLoader {
        fn load_feature_properties(&self, _identity: &FeatureIdentity) -> PropertyFuture {
            Box::pin(async { Err(PropertyLoadError::new("unused")) })
        }
    }

    #[test]
    fn test_error_displays_bare_message() {
        assert_eq!(PropertyLoadError::new("network error").to_string(), "network error");
    }

    #[test]
    fn test_properties_path() {
        let loader = HttpPropertyLoader::new("public/features/");
        assert_eq!(
            loader.properties_path(&FeatureIdentity::new("parks", 42i64)),
            "public/features/parks/42.json"
        );
        assert_eq!(
            loader.properties_path(&FeatureIdentity::new("parks", "a1")),
            "public/features/parks/a1.json"
        );
    }

    #[test]
    fn test_properties_path_encodes_segments() {
        let loader = HttpPropertyLoader::new("public/features");
        assert_eq!(
            loader.properties_path(&FeatureIdentity::new("roads", "main#st")),
            "public/features/roads/main%23st.json"
        );
        assert_eq!(
            loader.properties_path(&FeatureIdentity::new("roads", "a/../../tooltip")),
            "public/features/roads/a%2F..%2F..%2Ftooltip.json"
        );
        assert_eq!(
            loader.properties_path(&FeatureIdentity::new("bus stops", "q?x=1")),
            "public/features/bus%20stops/q%3Fx%3D1.json"
        );
    }

    #[test]
    fn test_parse_feature_properties() {
        let json = r#"{
            "properties": [
                {"name": "color", "value": "red", "filterable": true},
                {"name": "area", "html": "<b>12 km²</b>"}
            ]
        }"#;
        let response = parse_feature_properties(json).unwrap();
        assert_eq!(response.properties.len(), 2);
        assert_eq!(response.properties[0].name, "color");
        assert!(response.properties[0].filterable);
        assert_eq!(response.properties[1].html.as_deref(), Some("<b>12 km²</b>"));
    }

    #[test]
    fn test_parse_feature_properties_rejects_garbage() {
        let err = parse_feature_properties("not json").unwrap_err();
        assert!(err.message.starts_with("Invalid feature properties"));
    }

    #[test]
    fn test_loader_handle_equality_is_by_pointer() {
        let a = LoaderHandle::new(NeverLoader);
        let b = LoaderHandle::new(NeverLoader);
        assert!(a == a.clone());
        assert!(a != b);
    }
}
