// src/components/feature_tooltip.rs
use crate::property_loader::{LoaderHandle, PropertyResult};
use crate::tooltip_config::TooltipLabels;
use crate::tooltip_data::FeatureIdentity;
use crate::tooltip_model::{FetchOutcome, LoadState, TooltipViewModel};
use crate::tooltip_property::TooltipProperty;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureTooltipProps {
    pub identity: FeatureIdentity,
    pub loader: LoaderHandle,
    pub close_tooltip: Callback<()>,
    #[prop_or(true)]
    pub show_close_button: bool,
    #[prop_or(true)]
    pub show_filter_buttons: bool,
    #[prop_or_default]
    pub labels: TooltipLabels,
}

pub enum FeatureTooltipMsg {
    PropertiesLoaded(FeatureIdentity, PropertyResult),
    Close,
    Filter(usize),
}

pub struct FeatureTooltip {
    model: TooltipViewModel,
}

impl FeatureTooltip {
    fn show(&mut self, ctx: &Context<Self>) -> bool {
        let Some(request) = self.model.on_show(&ctx.props().identity) else {
            return false;
        };

        log::debug!("Loading tooltip properties for {}", request);
        let future = ctx.props().loader.load(&request);
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = future.await;
            link.send_message(FeatureTooltipMsg::PropertiesLoaded(request, result));
        });
        true
    }
}

/// Whether anything other than the identity affects what is shown.
fn display_changed(old: &FeatureTooltipProps, new: &FeatureTooltipProps) -> bool {
    old.show_close_button != new.show_close_button
        || old.show_filter_buttons != new.show_filter_buttons
        || old.labels != new.labels
}

/// Callbacks a filter click fires, in order: close the tooltip, then filter.
/// Empty when the row is gone or has nothing to filter on.
fn filter_callbacks(
    properties: &[TooltipProperty],
    index: usize,
    close_tooltip: &Callback<()>,
) -> Vec<Callback<()>> {
    match properties.get(index).and_then(TooltipProperty::filter_action) {
        Some(action) => vec![close_tooltip.clone(), action],
        None => Vec::new(),
    }
}

impl Component for FeatureTooltip {
    type Message = FeatureTooltipMsg;
    type Properties = FeatureTooltipProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut tooltip = Self {
            model: TooltipViewModel::new(),
        };
        tooltip.show(ctx);
        tooltip
    }

    fn changed(&mut self, ctx: &Context<Self>, old: &Self::Properties) -> bool {
        let display_changed = display_changed(old, ctx.props());
        self.show(ctx) || display_changed
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FeatureTooltipMsg::PropertiesLoaded(request, result) => {
                if let Err(e) = &result {
                    log::warn!("Failed to load tooltip properties for {}: {}", request, e);
                }
                match self.model.on_fetched(&request, result) {
                    FetchOutcome::Applied => true,
                    outcome => {
                        log::debug!("Discarding tooltip properties for {} ({:?})", request, outcome);
                        false
                    }
                }
            }
            FeatureTooltipMsg::Close => {
                ctx.props().close_tooltip.emit(());
                false
            }
            FeatureTooltipMsg::Filter(index) => {
                let callbacks =
                    filter_callbacks(self.model.properties(), index, &ctx.props().close_tooltip);
                for callback in callbacks {
                    callback.emit(());
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let labels = &ctx.props().labels;
        match self.model.load_state() {
            LoadState::Loading => html! {
                <div class="feature-tooltip-loading">
                    <span class="spinner"></span>{" "}{labels.loading.clone()}
                </div>
            },
            LoadState::Failed(message) => html! {
                <div class="feature-tooltip-error" role="alert">
                    <p class="callout-title">{labels.load_error_title.clone()}</p>
                    <p>{message.clone()}</p>
                </div>
            },
            LoadState::Loaded(properties) => html! {
                <div class="feature-tooltip">
                    { self.render_close_button(ctx) }
                    <div class="feature-tooltip-properties">
                        { for properties.iter().enumerate().map(|(index, property)| {
                            self.render_property(ctx, index, property)
                        }) }
                    </div>
                </div>
            },
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.model.on_dispose();
    }
}

impl FeatureTooltip {
    fn render_property(&self, ctx: &Context<Self>, index: usize, property: &TooltipProperty) -> Html {
        // Formatter output is trusted markup and goes in unescaped.
        let value = Html::from_html_unchecked(AttrValue::from(
            property.html_display_value().to_string(),
        ));

        html! {
            <div class="feature-tooltip-row" key={index}>
                <div class="property-name"><strong>{property.property_name().to_string()}</strong></div>
                <div class="property-value"><span>{value}</span></div>
                { self.render_filter_button(ctx, index, property) }
            </div>
        }
    }

    fn render_filter_button(&self, ctx: &Context<Self>, index: usize, property: &TooltipProperty) -> Html {
        if !ctx.props().show_filter_buttons || !property.is_filterable() {
            return html! {};
        }
        let labels = &ctx.props().labels;
        let onclick = ctx.link().callback(move |_| FeatureTooltipMsg::Filter(index));

        html! {
            <button
                class="feature-tooltip-filter-button"
                title={labels.filter_title.clone()}
                aria-label={labels.filter_aria_label.clone()}
                {onclick}
            >
                {"⊕"}
            </button>
        }
    }

    fn render_close_button(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().show_close_button {
            return html! {};
        }
        let onclick = ctx.link().callback(|_| FeatureTooltipMsg::Close);

        html! {
            <div class="feature-tooltip-close">
                <button aria-label={ctx.props().labels.close_aria_label.clone()} {onclick}>
                    {"✕"}
                </button>
            </div>
        }
    }
}
