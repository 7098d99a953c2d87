//! Typed map layers, serialized in the JSON shape deck.gl's JSON converter reads.

use crate::types::{DonationRecord, Rgba};
use serde::Serialize;

pub const BOUNDARY_LINE_COLOR: Rgba = Rgba([100, 100, 100, 200]);
pub const POINT_FILL_COLOR: Rgba = Rgba([30, 100, 200, 160]);
/// Marker radius in metres.
pub const POINT_RADIUS: f64 = 50_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@@type")]
pub enum LayerSpec {
    #[serde(rename = "GeoJsonLayer")]
    Boundary(BoundaryLayer),
    #[serde(rename = "ScatterplotLayer")]
    Point(PointLayer),
}

/// State outlines drawn from a remote GeoJSON document the browser fetches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryLayer {
    pub id: String,
    pub data: String,
    pub stroked: bool,
    pub filled: bool,
    pub get_line_color: Rgba,
    pub get_line_width: f64,
    pub line_width_min_pixels: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLayer {
    pub id: String,
    pub data: Vec<PointDatum>,
    pub get_position: &'static str,
    pub get_fill_color: Rgba,
    pub get_radius: f64,
    pub pickable: bool,
}

impl PointLayer {
    /// The datum a hover or click on the `index`th marker resolves to.
    pub fn pick(&self, index: usize) -> Option<&PointDatum> {
        self.data.get(index)
    }
}

/// Per-marker data row carried by the point layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointDatum {
    pub city: String,
    pub lon: f64,
    pub lat: f64,
    pub donations: u64,
    pub total_amount: u64,
    pub tooltip: String,
}

impl PointDatum {
    pub fn position(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<&DonationRecord> for PointDatum {
    fn from(record: &DonationRecord) -> Self {
        Self {
            city: record.city().to_string(),
            lon: record.longitude(),
            lat: record.latitude(),
            donations: record.donation_count(),
            total_amount: record.total_amount(),
            tooltip: record.tooltip_text(),
        }
    }
}

/// Maps a picked datum to tooltip text through a `{field}` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipBinding {
    pub text: String,
}

impl TooltipBinding {
    pub fn tooltip_field() -> Self {
        Self {
            text: "{tooltip}".to_string(),
        }
    }

    pub fn resolve(&self, datum: &PointDatum) -> String {
        self.text
            .replace("{tooltip}", &datum.tooltip)
            .replace("{city}", &datum.city)
    }
}
