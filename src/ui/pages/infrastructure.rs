use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, Route, Workspace},
    domain::{AppState, EnvironmentalRecord, InfraFilter, SelectedLocation},
    ui::{
        components::{
            land_use_map::LandUseMap,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn InfrastructurePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let workspace = use_context::<Workspace>();
    let nav = use_navigator();

    let mut lat_input = use_signal(String::new);
    let mut lon_input = use_signal(String::new);

    let filter = state.with(|st| st.infra_filter);
    let selection = state.with(|st| st.placement.selection());
    let points = workspace
        .datasets
        .points_matching(filter)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let visible = points.len();
    let center = workspace.config.map_center;

    let on_filter = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            let Some(chosen) = InfraFilter::options()
                .into_iter()
                .find(|option| option.label() == value)
            else {
                tracing::warn!(%value, "unknown infrastructure filter");
                return;
            };
            state.with_mut(|st| st.infra_filter = chosen);
            persist_user_state(&state);
        }
    };

    let on_pick = {
        let workspace = workspace.clone();
        move |location: SelectedLocation| {
            if pick_location(state, toasts, &workspace.datasets.environment, location) {
                nav.push(Route::BuildingPlacement {});
            }
        }
    };

    let on_manual = {
        let workspace = workspace.clone();
        move |_| match parse_location(&lat_input(), &lon_input()) {
            Ok(location) => {
                if pick_location(state, toasts, &workspace.datasets.environment, location) {
                    lat_input.set(String::new());
                    lon_input.set(String::new());
                    nav.push(Route::BuildingPlacement {});
                }
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6 space-y-4",
                div { class: "flex flex-wrap items-end justify-between gap-4",
                    div {
                        h2 { class: "text-2xl font-semibold text-slate-100", "Jaipur Infrastructure" }
                        p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                            "Click a facility or any spot on the map to select a building site."
                        }
                    }
                    div { class: "w-64",
                        label { class: "{theme::LABEL}", "Select infrastructure type to display" }
                        select {
                            class: "{theme::INPUT}",
                            onchange: on_filter,
                            for choice in InfraFilter::options() {
                                option {
                                    key: "{choice.label()}",
                                    value: "{choice.label()}",
                                    selected: choice == filter,
                                    "{choice.label()}"
                                }
                            }
                        }
                    }
                }
                p { class: "text-xs {theme::TEXT_MUTED}", "{visible} facilities shown" }
                LandUseMap { points, center, selection, on_pick }
                match selection {
                    Some(location) => rsx! {
                        p { class: "text-sm text-emerald-300", "Selected Location: {location}" }
                    },
                    None => rsx! {
                        p { class: "text-sm {theme::TEXT_MUTED}", "No location selected yet." }
                    },
                }
            }
            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "Enter coordinates" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-[1fr_1fr_auto] sm:items-end",
                    div {
                        label { class: "{theme::LABEL}", "Latitude" }
                        input {
                            class: "{theme::INPUT}",
                            placeholder: "26.9124",
                            value: lat_input(),
                            oninput: move |evt| lat_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Longitude" }
                        input {
                            class: "{theme::INPUT}",
                            placeholder: "75.7873",
                            value: lon_input(),
                            oninput: move |evt| lon_input.set(evt.value()),
                        }
                    }
                    button {
                        class: "{theme::BTN_PRIMARY}",
                        onclick: on_manual,
                        "Use location"
                    }
                }
            }
        }
    }
}

/// Records `location` as the current site and resolves its environment.
/// Returns false (after raising a toast) when nothing can be resolved.
fn pick_location(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    records: &[EnvironmentalRecord],
    location: SelectedLocation,
) -> bool {
    let outcome = state.with_mut(|st| {
        st.placement.select(location);
        st.placement.resolve(records).map(|resolved| resolved.index)
    });
    match outcome {
        Ok(index) => {
            tracing::info!(%location, record = index, "site selected");
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Selected Location: {location}"),
            );
            true
        }
        Err(err) => {
            push_toast(toasts, ToastKind::Error, err.to_string());
            false
        }
    }
}

pub(crate) fn parse_location(latitude: &str, longitude: &str) -> Result<SelectedLocation, String> {
    let latitude = parse_coordinate("Latitude", latitude, 90.0)?;
    let longitude = parse_coordinate("Longitude", longitude, 180.0)?;
    Ok(SelectedLocation::new(latitude, longitude))
}

fn parse_coordinate(name: &str, raw: &str, limit: f64) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{name} must be a number."))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("{name} must be between -{limit} and {limit}."));
    }
    Ok(value)
}
