use crate::error::RecordError;
use crate::format::{currency, group_thousands};
use geo::Point;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Donation statistics for one city.
///
/// Fields are private so a record can only be built through [`DonationRecord::new`],
/// which rejects unusable coordinates. The tooltip is derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationRecord {
    city: String,
    // x = longitude, y = latitude
    point: Point<f64>,
    donation_count: u64,
    total_amount: u64,
}

impl DonationRecord {
    pub fn new(
        city: impl Into<String>,
        latitude: f64,
        longitude: f64,
        donation_count: u64,
        total_amount: u64,
    ) -> Result<Self, RecordError> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(RecordError::EmptyCity);
        }
        // NaN fails the range check too
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(RecordError::InvalidLatitude { city, value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(RecordError::InvalidLongitude { city, value: longitude });
        }

        Ok(Self {
            city,
            point: Point::new(longitude, latitude),
            donation_count,
            total_amount,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    pub fn point(&self) -> Point<f64> {
        self.point
    }

    pub fn donation_count(&self) -> u64 {
        self.donation_count
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn tooltip_text(&self) -> String {
        format!(
            "{}\nDonations: {}\nTotal Amount: {}",
            self.city,
            group_thousands(self.donation_count),
            currency(self.total_amount)
        )
    }
}

impl Serialize for DonationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DonationRecord", 6)?;
        s.serialize_field("city", &self.city)?;
        s.serialize_field("lat", &self.latitude())?;
        s.serialize_field("lon", &self.longitude())?;
        s.serialize_field("donations", &self.donation_count)?;
        s.serialize_field("total_amount", &self.total_amount)?;
        s.serialize_field("tooltip", &self.tooltip_text())?;
        s.end()
    }
}

/// Initial camera position for the map.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ViewportState {
    /// Frames mainland Australia, sitting slightly south of the geographic centre.
    pub const AUSTRALIA: ViewportState = ViewportState {
        latitude: -28.0,
        longitude: 133.7751,
        zoom: 3.4,
        pitch: 0.0,
        min_zoom: 2.8,
        max_zoom: 10.0,
    };
}

/// The interactive map view wrapped around a viewport's zoom limits.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    #[serde(rename = "@@type")]
    pub kind: &'static str,
    pub controller: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl MapView {
    pub fn for_viewport(viewport: &ViewportState) -> Self {
        Self {
            kind: "MapView",
            controller: true,
            min_zoom: viewport.min_zoom,
            max_zoom: viewport.max_zoom,
        }
    }
}

/// RGBA colour as deck.gl expects it, `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Rgba(pub [u8; 4]);
