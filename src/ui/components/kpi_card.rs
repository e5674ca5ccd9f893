use dioxus::prelude::*;

use crate::domain::MetricStatus;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL} p-4 shadow-sm",
            h3 { class: "{theme::LABEL}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold text-slate-300", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{desc}" }
            }
        }
    }
}

/// One environmental indicator: title, icon and bucket label.
#[component]
pub fn MetricCard(status: MetricStatus) -> Element {
    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme::tone_card(status.tone)}",
            span { class: "text-xs font-semibold uppercase tracking-wide", "{status.kind.title()}" }
            p { class: "mt-2 text-2xl font-semibold", "{status.icon} {status.label}" }
        }
    }
}
