//! SVG land-use map. No tiles: markers are plotted on an equirectangular
//! projection fitted to the visible points.

use dioxus::prelude::*;

use crate::domain::{GeospatialPoint, LandUse, SelectedLocation};
use crate::ui::theme;

pub const MAP_WIDTH: f64 = 900.0;
pub const MAP_HEIGHT: f64 = 450.0;
const MARKER_RADIUS: f64 = 7.0;
/// Minimum span (degrees) so a single point still gets a usable view.
const MIN_SPAN: f64 = 0.02;
const PADDING: f64 = 0.1;

/// Maps between screen pixels and (lat, lon).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewport {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapViewport {
    /// Bounds of `points` with padding; falls back to `center` when empty.
    pub fn fit(points: &[GeospatialPoint], center: (f64, f64)) -> Self {
        let mut lat = (center.0, center.0);
        let mut lon = (center.1, center.1);
        if let Some(first) = points.first() {
            lat = (first.latitude, first.latitude);
            lon = (first.longitude, first.longitude);
            for point in points {
                lat = (lat.0.min(point.latitude), lat.1.max(point.latitude));
                lon = (lon.0.min(point.longitude), lon.1.max(point.longitude));
            }
        }

        let lat_span = (lat.1 - lat.0).max(MIN_SPAN);
        let lon_span = (lon.1 - lon.0).max(MIN_SPAN);
        let lat_mid = (lat.0 + lat.1) / 2.0;
        let lon_mid = (lon.0 + lon.1) / 2.0;
        let lat_half = lat_span * (0.5 + PADDING);
        let lon_half = lon_span * (0.5 + PADDING);

        Self {
            min_lat: lat_mid - lat_half,
            max_lat: lat_mid + lat_half,
            min_lon: lon_mid - lon_half,
            max_lon: lon_mid + lon_half,
        }
    }

    pub fn to_screen(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let x = (longitude - self.min_lon) / (self.max_lon - self.min_lon) * MAP_WIDTH;
        let y = (self.max_lat - latitude) / (self.max_lat - self.min_lat) * MAP_HEIGHT;
        (x, y)
    }

    pub fn to_geo(&self, x: f64, y: f64) -> SelectedLocation {
        let longitude = self.min_lon + x / MAP_WIDTH * (self.max_lon - self.min_lon);
        let latitude = self.max_lat - y / MAP_HEIGHT * (self.max_lat - self.min_lat);
        SelectedLocation::new(latitude, longitude)
    }
}

#[component]
pub fn LandUseMap(
    points: Vec<GeospatialPoint>,
    center: (f64, f64),
    selection: Option<SelectedLocation>,
    on_pick: EventHandler<SelectedLocation>,
) -> Element {
    let viewport = MapViewport::fit(&points, center);
    let pin = selection.map(|location| viewport.to_screen(location.latitude, location.longitude));

    rsx! {
        div { class: "space-y-3",
            div { class: "{theme::PANEL} overflow-hidden",
                svg {
                    width: "{MAP_WIDTH}",
                    height: "{MAP_HEIGHT}",
                    view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                    class: "cursor-crosshair",
                    rect {
                        x: "0",
                        y: "0",
                        width: "{MAP_WIDTH}",
                        height: "{MAP_HEIGHT}",
                        fill: "#0b1220",
                        onclick: move |evt: MouseEvent| {
                            let point = evt.element_coordinates();
                            on_pick.call(viewport.to_geo(point.x, point.y));
                        },
                    }
                    for point in points.iter().cloned() {
                        MapMarker { key: "{point.id}", point, viewport, on_pick }
                    }
                    if let Some((x, y)) = pin {
                        circle {
                            cx: "{x}",
                            cy: "{y}",
                            r: "{MARKER_RADIUS + 4.0}",
                            fill: "none",
                            stroke: "white",
                            stroke_width: "2",
                            pointer_events: "none",
                        }
                    }
                }
            }
            Legend {}
        }
    }
}

#[component]
fn MapMarker(
    point: GeospatialPoint,
    viewport: MapViewport,
    on_pick: EventHandler<SelectedLocation>,
) -> Element {
    let (x, y) = viewport.to_screen(point.latitude, point.longitude);
    let color = theme::land_use_color(point.land_use);
    let tooltip = format!(
        "{}\nLat: {}\nLon: {}",
        point.land_use, point.latitude, point.longitude
    );
    let location = SelectedLocation::new(point.latitude, point.longitude);

    rsx! {
        circle {
            cx: "{x}",
            cy: "{y}",
            r: "{MARKER_RADIUS}",
            fill: "{color}",
            fill_opacity: "0.6",
            stroke: "{color}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_pick.call(location);
            },
            title { "{tooltip}" }
        }
    }
}

#[component]
fn Legend() -> Element {
    rsx! {
        ul { class: "flex flex-wrap gap-4 text-xs text-slate-400",
            for land_use in LandUse::ALL {
                li { class: "flex items-center gap-2",
                    span {
                        class: "inline-block h-3 w-3 rounded-full",
                        style: "background-color: {theme::land_use_color(land_use)}",
                    }
                    "{land_use}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, latitude: f64, longitude: f64) -> GeospatialPoint {
        GeospatialPoint {
            id: id.to_string(),
            latitude,
            longitude,
            land_use: LandUse::Park,
        }
    }

    #[test]
    fn screen_and_geo_agree() {
        let viewport = MapViewport::fit(
            &[point("a", 26.85, 75.70), point("b", 26.98, 75.88)],
            (26.9124, 75.7873),
        );
        let (x, y) = viewport.to_screen(26.91, 75.79);
        let back = viewport.to_geo(x, y);
        assert!((back.latitude - 26.91).abs() < 1e-9);
        assert!((back.longitude - 75.79).abs() < 1e-9);
    }

    #[test]
    fn north_is_up() {
        let viewport = MapViewport::fit(
            &[point("a", 26.85, 75.70), point("b", 26.98, 75.88)],
            (0.0, 0.0),
        );
        let (_, north) = viewport.to_screen(26.98, 75.8);
        let (_, south) = viewport.to_screen(26.85, 75.8);
        assert!(north < south);
    }

    #[test]
    fn empty_map_centres_on_configured_point() {
        let viewport = MapViewport::fit(&[], (26.9124, 75.7873));
        let (x, y) = viewport.to_screen(26.9124, 75.7873);
        assert!((x - MAP_WIDTH / 2.0).abs() < 1e-6);
        assert!((y - MAP_HEIGHT / 2.0).abs() < 1e-6);
    }
}
