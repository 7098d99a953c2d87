//! Builds the map and table specifications handed to the browser.
//!
//! Everything here is a pure transform of the record slice: the viewport is a
//! constant and never derived from the data.

use crate::config::MapConfig;
use crate::format::currency;
use crate::layers::{
    BoundaryLayer, LayerSpec, PointDatum, PointLayer, TooltipBinding, BOUNDARY_LINE_COLOR,
    POINT_FILL_COLOR, POINT_RADIUS,
};
use crate::types::{DonationRecord, MapView, ViewportState};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const TABLE_COLUMNS: [&str; 3] = ["City", "Donations", "Total Amount"];

/// A complete deck.gl scene.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSpec {
    pub layers: Vec<LayerSpec>,
    pub initial_view_state: ViewportState,
    pub views: Vec<MapView>,
    /// `None` lets the renderer use its token-free default basemap.
    pub map_style: Option<String>,
    pub tooltip: TooltipBinding,
    #[serde(skip)]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableSpec {
    pub columns: [&'static str; 3],
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub city: String,
    pub donations: u64,
    pub total_amount: String,
}

// Keyed by display column names so the JSON mirrors the rendered table.
impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TABLE_COLUMNS.len()))?;
        map.serialize_entry(TABLE_COLUMNS[0], &self.city)?;
        map.serialize_entry(TABLE_COLUMNS[1], &self.donations)?;
        map.serialize_entry(TABLE_COLUMNS[2], &self.total_amount)?;
        map.end()
    }
}

pub fn build_boundary_layer(url: &str) -> LayerSpec {
    LayerSpec::Boundary(BoundaryLayer {
        id: "state-boundaries".to_string(),
        data: url.to_string(),
        stroked: true,
        filled: false,
        get_line_color: BOUNDARY_LINE_COLOR,
        get_line_width: 2.0,
        line_width_min_pixels: 1.0,
    })
}

pub fn build_point_layer(records: &[DonationRecord]) -> LayerSpec {
    LayerSpec::Point(PointLayer {
        id: "donations".to_string(),
        data: records.iter().map(PointDatum::from).collect(),
        get_position: "@@=[lon, lat]",
        get_fill_color: POINT_FILL_COLOR,
        get_radius: POINT_RADIUS,
        pickable: true,
    })
}

pub fn build_table_spec(records: &[DonationRecord]) -> TableSpec {
    let rows = records
        .iter()
        .map(|r| TableRow {
            city: r.city().to_string(),
            donations: r.donation_count(),
            total_amount: currency(r.total_amount()),
        })
        .collect();

    TableSpec {
        columns: TABLE_COLUMNS,
        rows,
    }
}

/// Boundary outlines under the donation markers, framed on Australia.
pub fn compose(records: &[DonationRecord], map: &MapConfig) -> MapSpec {
    let viewport = ViewportState::AUSTRALIA;
    MapSpec {
        layers: vec![
            build_boundary_layer(&map.boundary_url),
            build_point_layer(records),
        ],
        initial_view_state: viewport,
        views: vec![MapView::for_viewport(&viewport)],
        map_style: None,
        tooltip: TooltipBinding::tooltip_field(),
        height: map.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::format::ensure_currency;

    fn point_layer(spec: &LayerSpec) -> &PointLayer {
        match spec {
            LayerSpec::Point(layer) => layer,
            other => panic!("expected point layer, got {:?}", other),
        }
    }

    #[test]
    fn point_layer_maps_records_one_to_one() {
        let records = data::records().unwrap();
        let layer = build_point_layer(&records);
        let layer = point_layer(&layer);

        assert_eq!(layer.data.len(), records.len());
        assert!(layer.pickable);
        for (datum, record) in layer.data.iter().zip(&records) {
            assert_eq!(datum.position(), [record.longitude(), record.latitude()]);
            assert_eq!(datum.city, record.city());
        }
    }

    #[test]
    fn picking_a_point_resolves_its_tooltip() {
        let records = data::records().unwrap();
        let spec = compose(&records, &MapConfig::default());
        let layer = point_layer(&spec.layers[1]);

        for (i, record) in records.iter().enumerate() {
            let datum = layer.pick(i).unwrap();
            assert_eq!(spec.tooltip.resolve(datum), record.tooltip_text());
        }
        assert!(layer.pick(records.len()).is_none());
    }

    #[test]
    fn boundary_layer_is_unfilled_outline() {
        match build_boundary_layer("http://example.test/states.geojson") {
            LayerSpec::Boundary(b) => {
                assert!(b.stroked);
                assert!(!b.filled);
                assert_eq!(b.data, "http://example.test/states.geojson");
                assert_eq!(b.get_line_color, BOUNDARY_LINE_COLOR);
                assert_eq!(b.get_line_width, 2.0);
            }
            other => panic!("expected boundary layer, got {:?}", other),
        }
    }

    #[test]
    fn table_preserves_order_and_formats_amounts() {
        let records = data::records().unwrap();
        let table = build_table_spec(&records);

        assert_eq!(table.rows.len(), records.len());
        assert_eq!(table.columns, TABLE_COLUMNS);
        for (row, record) in table.rows.iter().zip(&records) {
            assert_eq!(row.city, record.city());
            assert_eq!(ensure_currency(&row.total_amount), row.total_amount);
        }
    }

    #[test]
    fn sydney_row_matches_display_shape() {
        let records = data::records().unwrap();
        let table = build_table_spec(&records);
        let json = serde_json::to_value(&table.rows[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"City": "Sydney", "Donations": 1250, "Total Amount": "$125,000"})
        );
    }

    #[test]
    fn viewport_is_constant_regardless_of_records() {
        let far_away =
            vec![DonationRecord::new("Reykjavik", 64.1466, -21.9426, 3, 300).unwrap()];
        let config = MapConfig::default();

        for records in [Vec::new(), far_away, data::records().unwrap()] {
            let spec = compose(&records, &config);
            let v = spec.initial_view_state;
            assert_eq!((v.latitude, v.longitude, v.zoom, v.pitch), (-28.0, 133.7751, 3.4, 0.0));
            assert_eq!(spec.views[0].min_zoom, 2.8);
            assert_eq!(spec.views[0].max_zoom, 10.0);
        }
    }

    #[test]
    fn compose_serializes_for_deck() {
        let records = data::records().unwrap();
        let json = serde_json::to_value(compose(&records, &MapConfig::default())).unwrap();
        assert_eq!(json["layers"][0]["@@type"], "GeoJsonLayer");
        assert_eq!(json["layers"][1]["@@type"], "ScatterplotLayer");
        assert_eq!(json["initialViewState"]["zoom"], 3.4);
        assert_eq!(json["tooltip"]["text"], "{tooltip}");
        assert!(json["mapStyle"].is_null());
        assert!(json.get("height").is_none());
    }
}
