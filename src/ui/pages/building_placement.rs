use dioxus::prelude::*;

use crate::{
    app::{Route, Workspace},
    domain::{
        metric_statuses, resolve, AppState, PlacementStage, SelectedLocation, RECOMMENDATION_LIMIT,
    },
    ui::{
        components::{
            kpi_card::MetricCard,
            materials_table::MaterialsTable,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const NO_SELECTION: &str = "Please select a location on the Infrastructure page.";

#[component]
pub fn BuildingPlacementPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let workspace = use_context::<Workspace>();
    let nav = use_navigator();

    let Some(location) = state.with(|st| st.placement.selection()) else {
        return rsx! {
            section { class: "{theme::PANEL} p-6 space-y-4",
                p { class: "text-sm text-amber-200", "{NO_SELECTION}" }
                button {
                    class: "{theme::BTN_SECONDARY}",
                    onclick: move |_| { nav.push(Route::Infrastructure {}); },
                    "🏢 Go to Infrastructure"
                }
            }
        };
    };

    rsx! {
        PlacementDetails { location, workspace }
    }
}

#[component]
fn PlacementDetails(location: SelectedLocation, workspace: Workspace) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Display only; the buttons resolve again through the flow.
    let resolved = match resolve(&location, &workspace.datasets.environment) {
        Ok(resolved) => resolved,
        Err(err) => {
            return rsx! {
                section { class: "{theme::PANEL} p-6",
                    p { class: "text-sm text-rose-300", "Cannot show environmental data: {err}" }
                }
            };
        }
    };
    let statuses = metric_statuses(resolved.record);
    let distance = format!("{:.4}", resolved.distance);
    let nearest = format!(
        "{:.4}, {:.4}",
        resolved.record.latitude, resolved.record.longitude
    );
    let result = state.with(|st| st.placement.result().clone());
    let stage = match state.with(|st| st.placement.stage()) {
        PlacementStage::EnvironmentResolved => "Environment resolved",
        PlacementStage::LocationSelected => "Location selected",
        PlacementStage::NoSelection => "No selection",
    };

    let on_predict = {
        let workspace = workspace.clone();
        move |_| {
            let outcome = state.with_mut(|st| {
                st.placement
                    .predict_cost(&workspace.datasets.environment, &workspace.engine)
            });
            if let Err(err) = outcome {
                push_toast(toasts, ToastKind::Error, format!("Cost prediction failed: {err}"));
            }
        }
    };

    let on_recommend = {
        let workspace = workspace.clone();
        move |_| {
            let outcome = state.with_mut(|st| {
                st.placement.recommend(
                    &workspace.datasets.environment,
                    &workspace.datasets.materials,
                    &workspace.engine,
                )
            });
            match outcome {
                Ok(materials) if materials.is_empty() => push_toast(
                    toasts,
                    ToastKind::Warning,
                    "No eco-friendly materials available.",
                ),
                Ok(_) => {}
                Err(err) => push_toast(
                    toasts,
                    ToastKind::Error,
                    format!("Recommendation failed: {err}"),
                ),
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6 space-y-2",
                div { class: "flex items-center justify-between gap-4",
                    h2 { class: "text-2xl font-semibold text-slate-100", "Building Placement" }
                    span { class: "rounded-full border border-emerald-500/40 px-3 py-2 text-xs text-emerald-200", "{stage}" }
                }
                p { class: "text-sm text-emerald-300", "Selected Location: {location}" }
                p { class: "text-xs {theme::TEXT_MUTED}",
                    "Nearest measurement point {nearest} (distance {distance}°)"
                }
            }
            section {
                h2 { class: "{theme::SECTION_TITLE}", "Environmental Data for Selected Location" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2 lg:grid-cols-5",
                    for status in statuses {
                        MetricCard { key: "{status.kind.title()}", status }
                    }
                }
            }
            section { class: "{theme::PANEL} p-6 space-y-6",
                div { class: "flex flex-wrap gap-3",
                    button {
                        class: "{theme::BTN_PRIMARY}",
                        onclick: on_predict,
                        "Predict Construction Cost"
                    }
                    button {
                        class: "{theme::BTN_SECONDARY}",
                        onclick: on_recommend,
                        "Recommend Eco-Friendly Materials"
                    }
                }
                if let Some(cost) = result.predicted_cost {
                    p { class: "text-lg font-semibold text-emerald-300",
                        {format!("Predicted Construction Cost: Rs. {cost:.2} Lacs")}
                    }
                }
                if let Some(materials) = result.recommended_materials {
                    div { class: "space-y-3",
                        h3 { class: "text-sm font-semibold text-slate-200",
                            "Recommended Eco-Friendly Materials (Top {RECOMMENDATION_LIMIT} with Lowest Cost in Lacs):"
                        }
                        MaterialsTable { materials }
                    }
                }
            }
        }
    }
}
