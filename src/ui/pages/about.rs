use dioxus::prelude::*;

use crate::{
    app::Workspace,
    domain::ATTRIBUTE_NAMES,
    ui::{components::kpi_card::KpiCard, pages::home::paragraphs, theme},
    util::assets,
};

#[component]
pub fn AboutPage() -> Element {
    let workspace = use_context::<Workspace>();
    let models = workspace.engine.models();
    let report = models.report.clone();

    let r_squared = report
        .cost_r_squared
        .map(|value| format!("{value:.3}"))
        .unwrap_or_else(|| "n/a".to_string());
    let accuracy = report
        .eco_accuracy
        .map(|value| format!("{:.0}%", value * 100.0))
        .unwrap_or_else(|| "n/a".to_string());
    let coefficients = ATTRIBUTE_NAMES
        .iter()
        .zip(models.cost.coefficients().iter())
        .map(|(name, weight)| (name.to_string(), format!("{weight:+.3}")))
        .collect::<Vec<_>>();
    let intercept = format!("{:.3}", models.cost.intercept());
    let trees = models.eco.tree_count().to_string();
    let seed = workspace.config.split_seed;

    let body = assets::about_text().map(|text| paragraphs(&text));

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6 space-y-4",
                h2 { class: "text-2xl font-semibold text-slate-100", "About JUPADP" }
                match body {
                    Ok(body) => rsx! {
                        for (idx, paragraph) in body.into_iter().enumerate() {
                            p { key: "{idx}", class: "text-sm leading-relaxed text-slate-300", "{paragraph}" }
                        }
                    },
                    Err(err) => rsx! {
                        p { class: "text-sm text-rose-300", "About text unavailable: {err}" }
                    },
                }
            }
            section {
                h2 { class: "{theme::SECTION_TITLE}", "Models" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                    KpiCard {
                        title: "Training rows".to_string(),
                        value: report.train_rows.to_string(),
                        description: Some(format!("Split seed {seed}")),
                    }
                    KpiCard {
                        title: "Held-out rows".to_string(),
                        value: report.test_rows.to_string(),
                        description: None,
                    }
                    KpiCard {
                        title: "Cost model R²".to_string(),
                        value: r_squared,
                        description: Some("Linear regression on held-out rows".to_string()),
                    }
                    KpiCard {
                        title: "Eco classifier accuracy".to_string(),
                        value: accuracy,
                        description: Some(format!("Random forest, {trees} trees")),
                    }
                }
            }
            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "Cost model coefficients" }
                dl { class: "mt-4 grid gap-2 text-sm sm:grid-cols-2",
                    div { class: "flex justify-between",
                        dt { class: "text-slate-400", "intercept" }
                        dd { class: "font-mono text-slate-200", "{intercept}" }
                    }
                    for (name, weight) in coefficients {
                        div { key: "{name}", class: "flex justify-between",
                            dt { class: "text-slate-400", "{name}" }
                            dd { class: "font-mono text-slate-200", "{weight}" }
                        }
                    }
                }
            }
        }
    }
}
