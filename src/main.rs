// src/main.rs
mod components;
mod property_loader;
mod tooltip_config;
mod tooltip_data;
mod tooltip_model;
mod tooltip_property;
mod utils;

use components::feature_tooltip::FeatureTooltip;
use gloo::events::EventListener;
use gloo_net::http::Request;
use property_loader::{HttpPropertyLoader, LoaderHandle};
use tooltip_config::TooltipConfig;
use tooltip_data::PropertyFilter;
use utils::resource_url;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

pub enum AppMsg {
    ConfigLoaded(TooltipConfig),
    ConfigLoadFailed(String),
    SelectFeature(usize),
    CloseTooltip,
    ApplyFilter(PropertyFilter),
    ClearFilters,
}

pub struct App {
    config: TooltipConfig,
    loader: LoaderHandle,
    selected: usize,
    tooltip_open: bool,
    filters: Vec<PropertyFilter>,
    loading: bool,
    _keydown: EventListener,
}

impl App {
    fn make_loader(ctx: &Context<Self>, config: &TooltipConfig) -> LoaderHandle {
        let on_filter = ctx.link().callback(AppMsg::ApplyFilter);
        LoaderHandle::new(
            HttpPropertyLoader::new(config.properties_base.clone()).with_filter_callback(on_filter),
        )
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            match load_config().await {
                Ok(config) => AppMsg::ConfigLoaded(config),
                Err(e) => AppMsg::ConfigLoadFailed(e),
            }
        });

        let keydown = {
            let link = ctx.link().clone();
            EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                    if keyboard_event.key() == "Escape" {
                        link.send_message(AppMsg::CloseTooltip);
                    }
                }
            })
        };

        let config = TooltipConfig::default();
        Self {
            loader: Self::make_loader(ctx, &config),
            config,
            selected: 0,
            tooltip_open: false,
            filters: Vec::new(),
            loading: true,
            _keydown: keydown,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ConfigLoaded(config) => {
                log::info!("Loaded tooltip config with {} features", config.features.len());
                self.loader = Self::make_loader(ctx, &config);
                self.tooltip_open = !config.features.is_empty();
                self.config = config;
                self.selected = 0;
                self.loading = false;
                true
            }
            AppMsg::ConfigLoadFailed(error) => {
                log::error!("Failed to load tooltip config: {}", error);
                self.loading = false;
                true
            }
            AppMsg::SelectFeature(index) => {
                if index < self.config.features.len() {
                    self.selected = index;
                    self.tooltip_open = true;
                    true
                } else {
                    false
                }
            }
            AppMsg::CloseTooltip => {
                let was_open = self.tooltip_open;
                self.tooltip_open = false;
                was_open
            }
            AppMsg::ApplyFilter(filter) => {
                log::info!("Applying filter {}", filter);
                if !self.filters.contains(&filter) {
                    self.filters.push(filter);
                }
                true
            }
            AppMsg::ClearFilters => {
                self.filters.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="app-container">
                    <main class="app-main">
                        <div class="loading">{"Loading map configuration..."}</div>
                    </main>
                </div>
            };
        }

        if self.config.features.is_empty() {
            return html! {
                <div class="app-container">
                    <main class="app-main">
                        <div class="error">{"No features configured. Add entries to public/tooltip.json"}</div>
                    </main>
                </div>
            };
        }

        let on_select = ctx.link().callback(AppMsg::SelectFeature);
        let close_tooltip = ctx.link().callback(|_| AppMsg::CloseTooltip);
        let clear_filters = ctx.link().callback(|_| AppMsg::ClearFilters);

        html! {
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Map feature tooltip"}</h1>
                </header>

                <main class="app-main">
                    <div class="feature-selector">
                        <label for="feature-select">{"Feature: "}</label>
                        <select
                            id="feature-select"
                            onchange={Callback::from(move |e: Event| {
                                let target = e.target_dyn_into::<web_sys::HtmlSelectElement>();
                                if let Some(select) = target {
                                    if let Ok(index) = select.value().parse::<usize>() {
                                        on_select.emit(index);
                                    }
                                }
                            })}
                        >
                            {for self.config.features.iter().enumerate().map(|(index, feature)| {
                                html! {
                                    <option value={index.to_string()} selected={self.selected == index}>
                                        {feature.label.clone()}
                                    </option>
                                }
                            })}
                        </select>
                    </div>

                    if self.tooltip_open {
                        <div class="map-tooltip">
                            <FeatureTooltip
                                identity={self.config.features[self.selected].identity()}
                                loader={self.loader.clone()}
                                close_tooltip={close_tooltip}
                                show_close_button={self.config.show_close_button}
                                show_filter_buttons={self.config.show_filter_buttons}
                                labels={self.config.labels.clone()}
                            />
                        </div>
                    }

                    if !self.filters.is_empty() {
                        <div class="active-filters">
                            <ul>
                                {for self.filters.iter().map(|filter| html! {
                                    <li>{filter.to_string()}</li>
                                })}
                            </ul>
                            <button onclick={clear_filters}>{"Clear filters"}</button>
                        </div>
                    }
                </main>
            </div>
        }
    }
}

async fn load_config() -> Result<TooltipConfig, String> {
    let url = resource_url("public/tooltip.json");
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {:?}", url, e))?;
    if !resp.ok() {
        return Err(format!("Config not found at {}", url));
    }
    resp.json::<TooltipConfig>()
        .await
        .map_err(|e| format!("Failed to parse {}: {:?}", url, e))
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
