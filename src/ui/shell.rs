use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_AUTHOR};

const TITLE: &str = "JUPADP : JAIPUR URBAN PLANNING AND DEVELOPMENT PLATFORM";

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "{theme::PAGE} flex flex-col",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl flex-col gap-4",
                    h1 { class: "text-xl font-semibold tracking-tight text-emerald-200", "{TITLE}" }
                    nav { class: "flex flex-wrap gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::Home {}), onclick: move |_| { nav.push(Route::Home {}); }, label: "🏠 Home" }
                        NavButton { active: matches!(current_route, Route::Infrastructure {}), onclick: move |_| { nav.push(Route::Infrastructure {}); }, label: "🏢 Infrastructure" }
                        NavButton { active: matches!(current_route, Route::BuildingPlacement {}), onclick: move |_| { nav.push(Route::BuildingPlacement {}); }, label: "🛠️ Building Placement" }
                        NavButton { active: matches!(current_route, Route::About {}), onclick: move |_| { nav.push(Route::About {}); }, label: "ℹ️ About" }
                    }
                }
            }
            main { class: "mx-auto w-full max-w-6xl flex-1 px-6 py-10",
                {children}
            }
            footer { class: "border-t border-slate-900/60 px-6 py-4",
                div { class: "mx-auto flex max-w-6xl justify-between text-xs {theme::TEXT_MUTED}",
                    span { "Created by: {APP_AUTHOR} 👩‍💻" }
                    span { "{version}" }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
