use std::rc::Rc;

use dioxus::{prelude::*, signals::Signal};
use thiserror::Error;

use crate::{
    domain::{AppState, Datasets, FittedModels, ModelError, RecommendationEngine},
    infra::datasets::{load_datasets, DatasetError},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AboutPage, BuildingPlacementPage, HomePage, InfrastructurePage},
        shell::Shell,
        theme,
    },
    util::{
        assets,
        config::{AppConfig, ConfigError},
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/infrastructure")]
    Infrastructure {},
    #[route("/building-placement")]
    BuildingPlacement {},
    #[route("/about")]
    About {},
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("could not load datasets: {0}")]
    Data(#[from] DatasetError),
    #[error("could not fit models: {0}")]
    Model(#[from] ModelError),
}

/// Read-only data shared by every page: the three tables, the fitted
/// predictors and the config they came from.
#[derive(Clone)]
pub struct Workspace {
    pub datasets: Rc<Datasets>,
    pub engine: RecommendationEngine,
    pub config: Rc<AppConfig>,
}

impl PartialEq for Workspace {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.datasets, &other.datasets) && Rc::ptr_eq(&self.config, &other.config)
    }
}

pub fn load_workspace() -> Result<Workspace, StartupError> {
    let config = AppConfig::load()?;
    let datasets = load_datasets(config.data_dir.as_deref())?;
    let models = FittedModels::fit(&datasets.materials, &config.model_settings())?;
    Ok(Workspace {
        datasets: Rc::new(datasets),
        engine: RecommendationEngine::new(Rc::new(models)),
        config: Rc::new(config),
    })
}

#[component]
pub fn App() -> Element {
    let workspace = use_hook(|| {
        load_workspace().map_err(|err| {
            tracing::error!(%err, "startup failed");
            err.to_string()
        })
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        match workspace {
            Ok(workspace) => rsx! { Dashboard { workspace } },
            Err(message) => rsx! { StartupFailure { message } },
        }
    }
}

#[component]
fn Dashboard(workspace: Workspace) -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    use_context_provider(|| workspace.clone());

    rsx! {
        Router::<Route> {}
        Toast {}
    }
}

#[component]
fn StartupFailure(message: String) -> Element {
    rsx! {
        div { class: "{theme::PAGE} flex items-center justify-center px-6",
            div { class: "{theme::PANEL} max-w-xl p-6 space-y-3",
                h1 { class: "text-lg font-semibold text-rose-300", "The dashboard could not start" }
                p { class: "text-sm text-slate-300", "{message}" }
                p { class: "text-xs {theme::TEXT_MUTED}",
                    "Check the CSV files in the data directory or remove the config file to fall back to the bundled data."
                }
            }
        }
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!(%err, "failed to persist user state");
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Infrastructure() -> Element {
    rsx! { Shell { InfrastructurePage {} } }
}

#[component]
pub fn BuildingPlacement() -> Element {
    rsx! { Shell { BuildingPlacementPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
