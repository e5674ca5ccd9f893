//! Shared class strings and map colours.

use crate::domain::{LandUse, Tone};

// ============================================
// LAYOUT
// ============================================

pub const PAGE: &str = "min-h-screen bg-slate-950 text-slate-100 font-sans";
pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";
pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const TEXT_MUTED: &str = "text-slate-500";
pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none";

// ============================================
// BUTTONS
// ============================================

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400";
pub const BTN_SECONDARY: &str = "rounded-lg border border-sky-500/40 px-4 py-2 text-sm font-semibold text-sky-200 hover:bg-sky-500/10";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "min-w-[8rem] rounded-lg px-4 py-2 text-sm font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40"
    } else {
        "min-w-[8rem] rounded-lg border border-transparent px-4 py-2 text-sm text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    }
}

// ============================================
// TABLES
// ============================================

pub const TABLE_CONTAINER: &str = "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";
pub const TABLE_HEADER: &str = "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500";
pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

// ============================================
// STATUS
// ============================================

pub fn tone_card(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        Tone::Neutral => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        Tone::Negative => "border-rose-500/40 bg-rose-500/10 text-rose-200",
    }
}

/// Marker fill per land-use category.
pub fn land_use_color(land_use: LandUse) -> &'static str {
    match land_use {
        LandUse::Park => "green",
        LandUse::Residential => "red",
        LandUse::Commercial => "blue",
        LandUse::School => "orange",
        LandUse::Library => "purple",
        LandUse::GovernmentOffice => "yellow",
        LandUse::Hospital => "pink",
        LandUse::Utility => "gray",
    }
}
