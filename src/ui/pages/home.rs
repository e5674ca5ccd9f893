use dioxus::prelude::*;

use crate::{
    app::{Route, Workspace},
    ui::{components::kpi_card::KpiCard, theme},
    util::assets,
};

#[component]
pub fn HomePage() -> Element {
    let workspace = use_context::<Workspace>();
    let nav = use_navigator();

    let datasets = &workspace.datasets;
    let eco_count = datasets.materials.iter().filter(|m| m.eco_friendly).count();
    let paragraphs = assets::home_text().map(|text| paragraphs(&text));

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6 space-y-4",
                h2 { class: "text-2xl font-semibold text-slate-100", "Welcome to JUPADP" }
                match paragraphs {
                    Ok(paragraphs) => rsx! {
                        for (idx, paragraph) in paragraphs.into_iter().enumerate() {
                            p { key: "{idx}", class: "text-sm leading-relaxed text-slate-300", "{paragraph}" }
                        }
                    },
                    Err(err) => rsx! {
                        p { class: "text-sm text-rose-300", "Welcome text unavailable: {err}" }
                    },
                }
                button {
                    class: "{theme::BTN_PRIMARY}",
                    onclick: move |_| { nav.push(Route::Infrastructure {}); },
                    "Open the infrastructure map"
                }
            }
            section {
                h2 { class: "{theme::SECTION_TITLE}", "Loaded data" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                    KpiCard {
                        title: "Mapped facilities".to_string(),
                        value: datasets.points.len().to_string(),
                        description: Some("Geospatial points across eight land-use types".to_string()),
                    }
                    KpiCard {
                        title: "Measurement points".to_string(),
                        value: datasets.environment.len().to_string(),
                        description: Some("Environmental records used for site lookup".to_string()),
                    }
                    KpiCard {
                        title: "Materials".to_string(),
                        value: datasets.materials.len().to_string(),
                        description: None,
                    }
                    KpiCard {
                        title: "Eco-friendly".to_string(),
                        value: eco_count.to_string(),
                        description: Some("Candidates for recommendation".to_string()),
                    }
                }
            }
        }
    }
}

/// Splits copy on blank lines, dropping empty blocks.
pub(crate) fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|block| block.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First line\ncontinues.\n\n\n\nSecond.\n";
        assert_eq!(paragraphs(text), vec!["First line continues.", "Second."]);
    }

    #[test]
    fn bundled_home_text_has_content() {
        let text = assets::home_text().unwrap();
        assert!(paragraphs(&text).len() >= 2);
    }
}
