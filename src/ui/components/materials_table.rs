use dioxus::prelude::*;

use crate::domain::Material;
use crate::ui::theme;

#[component]
pub fn MaterialsTable(materials: Vec<Material>) -> Element {
    let is_empty = materials.is_empty();
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Material" }
                        th { class: "px-4 py-3 font-medium", "CO2" }
                        th { class: "px-4 py-3 font-medium", "Recyclability" }
                        th { class: "px-4 py-3 font-medium", "Energy Eff." }
                        th { class: "px-4 py-3 font-medium", "Availability" }
                        th { class: "px-4 py-3 font-medium", "Durability" }
                        th { class: "px-4 py-3 font-medium", "Aesthetic" }
                        th { class: "px-4 py-3 font-medium text-right", "Cost (Lacs)" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for material in materials {
                        tr {
                            key: "{material.name}",
                            class: "hover:bg-slate-800/40",
                            td { class: "px-4 py-3 font-medium text-slate-200", "{material.name}" }
                            td { class: "px-4 py-3 text-slate-300", {format!("{:.1}", material.co2_emissions)} }
                            td { class: "px-4 py-3 text-slate-300", {format!("{:.2}", material.recyclability)} }
                            td { class: "px-4 py-3 text-slate-300", {format!("{:.2}", material.energy_efficiency)} }
                            td { class: "px-4 py-3 text-slate-300", {format!("{:.0}", material.availability)} }
                            td { class: "px-4 py-3 text-slate-300", {format!("{:.0}", material.durability)} }
                            td { class: "px-4 py-3 text-slate-300", {format!("{:.0}", material.aesthetic_value)} }
                            td { class: "px-4 py-3 text-right font-semibold text-emerald-300", {format!("{:.2}", material.cost)} }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "8",
                                "No eco-friendly materials in the materials table."
                            }
                        }
                    }
                }
            }
        }
    }
}
