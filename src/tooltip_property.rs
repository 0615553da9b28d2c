// src/tooltip_property.rs
use crate::tooltip_data::{PropertyFilter, RawTooltipProperty};
use yew::Callback;

/// One displayable attribute of a feature.
///
/// `html_value` is trusted output of a field formatter. The tooltip renders it
/// without escaping, so whoever builds a `TooltipProperty` is responsible for
/// the markup being safe. Plain-text values go through [`escape_html`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipProperty {
    name: String,
    html_value: String,
    filter_action: Option<Callback<()>>,
}

impl TooltipProperty {
    /// Converts a wire descriptor. Filterable descriptors get a filter action
    /// only when the host wants filters and there is a plain value to filter on.
    pub fn from_raw(
        layer_id: &str,
        raw: RawTooltipProperty,
        on_filter: Option<&Callback<PropertyFilter>>,
    ) -> Self {
        let html_value = match (&raw.html, &raw.value) {
            (Some(html), _) => html.clone(),
            (None, Some(value)) => escape_html(value),
            (None, None) => String::new(),
        };

        let filter_action = match (raw.filterable, on_filter, &raw.value) {
            (true, Some(on_filter), Some(value)) => {
                let filter = PropertyFilter {
                    layer_id: layer_id.to_string(),
                    field: raw.name.clone(),
                    value: value.clone(),
                };
                let on_filter = on_filter.clone();
                Some(Callback::from(move |_| on_filter.emit(filter.clone())))
            }
            _ => None,
        };

        Self {
            name: raw.name,
            html_value,
            filter_action,
        }
    }

    pub fn property_name(&self) -> &str {
        &self.name
    }

    pub fn html_display_value(&self) -> &str {
        &self.html_value
    }

    pub fn is_filterable(&self) -> bool {
        self.filter_action.is_some()
    }

    pub fn filter_action(&self) -> Option<Callback<()>> {
        self.filter_action.clone()
    }
}

#[cfg(test)]
impl TooltipProperty {
    pub fn new(name: impl Into<String>, html_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html_value: html_value.into(),
            filter_action: None,
        }
    }

    pub fn from_text(name: impl Into<String>, value: &str) -> Self {
        Self::new(name, escape_html(value))
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn raw(name: &str, value: Option<&str>, html: Option<&str>, filterable: bool) -> RawTooltipProperty {
        RawTooltipProperty {
            name: name.to_string(),
            value: value.map(str::to_string),
            html: html.map(str::to_string),
            filterable,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"x\"'"), "&quot;x&quot;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_formatter_markup_is_kept_verbatim() {
        let prop = TooltipProperty::from_raw(
            "l1",
            raw("link", Some("x"), Some("<a href=\"/x\">x</a>"), false),
            None,
        );
        assert_eq!(prop.html_display_value(), "<a href=\"/x\">x</a>");
    }

    #[test]
    fn test_plain_value_is_escaped() {
        let prop = TooltipProperty::from_raw("l1", raw("expr", Some("1 < 2"), None, false), None);
        assert_eq!(prop.property_name(), "expr");
        assert_eq!(prop.html_display_value(), "1 &lt; 2");
    }

    #[test]
    fn test_filterable_without_host_callback_has_no_action() {
        let prop = TooltipProperty::from_raw("l1", raw("color", Some("red"), None, true), None);
        assert!(!prop.is_filterable());
        assert!(prop.filter_action().is_none());
    }

    #[test]
    fn test_filter_action_emits_filter() {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let on_filter = {
            let applied = applied.clone();
            Callback::from(move |filter: PropertyFilter| applied.borrow_mut().push(filter))
        };

        let prop = TooltipProperty::from_raw(
            "parks",
            raw("color", Some("red"), None, true),
            Some(&on_filter),
        );
        assert!(prop.is_filterable());
        prop.filter_action().unwrap().emit(());

        assert_eq!(
            *applied.borrow(),
            vec![PropertyFilter {
                layer_id: "parks".to_string(),
                field: "color".to_string(),
                value: "red".to_string(),
            }]
        );
    }

    #[test]
    fn test_markup_only_descriptor_has_no_filter_action() {
        let applied = Rc::new(RefCell::new(Vec::<PropertyFilter>::new()));
        let on_filter = {
            let applied = applied.clone();
            Callback::from(move |filter: PropertyFilter| applied.borrow_mut().push(filter))
        };

        let prop = TooltipProperty::from_raw(
            "parks",
            raw("area", None, Some("<b>12 km²</b>"), true),
            Some(&on_filter),
        );
        assert!(!prop.is_filterable());
        assert!(prop.filter_action().is_none());
        assert_eq!(prop.html_display_value(), "<b>12 km²</b>");
        assert!(applied.borrow().is_empty());
    }

    #[test]
    fn test_not_filterable_descriptor_ignores_host_callback() {
        let on_filter = Callback::from(|_: PropertyFilter| {});
        let prop = TooltipProperty::from_raw("l1", raw("id", Some("7"), None, false), Some(&on_filter));
        assert!(!prop.is_filterable());
    }
}
