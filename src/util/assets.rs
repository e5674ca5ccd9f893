use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use thiserror::Error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("embedded asset {0} not found")]
    NotFound(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    NotUtf8(String),
}

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| stylesheet("main.css")).as_str()
}

pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| stylesheet("tailwind.css"))
        .as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            load_asset("favicon.svg")
                .map(|data| data_uri("favicon.svg", &data))
                .unwrap_or_default()
        })
        .as_str()
}

/// Welcome copy shown on the Home page.
pub fn home_text() -> Result<String, AssetError> {
    load_text("text/home.txt")
}

pub fn about_text() -> Result<String, AssetError> {
    load_text("text/about.txt")
}

/// Default copy of a CSV table shipped with the binary.
pub fn dataset(file: &str) -> Option<Cow<'static, [u8]>> {
    load_asset(&format!("data/{file}")).ok()
}

fn stylesheet(path: &str) -> String {
    load_text(path).unwrap_or_else(|err| {
        tracing::warn!(%err, "stylesheet unavailable");
        String::new()
    })
}

fn load_text(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).map_err(|_| AssetError::NotUtf8(path.to_string()))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::NotFound(canonical))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    trimmed
        .strip_prefix("assets/")
        .unwrap_or(trimmed)
        .to_string()
}

fn data_uri(path: &str, data: &[u8]) -> String {
    let mime = if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    };
    format!("data:{mime};base64,{}", encode_base64(data))
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);
        output.push(if chunk.len() > 1 {
            TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char
        } else {
            '='
        });
        output.push(if chunk.len() > 2 {
            TABLE[(b2 & 0b0011_1111) as usize] as char
        } else {
            '='
        });
    }

    output
}
