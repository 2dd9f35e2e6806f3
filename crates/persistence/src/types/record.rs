//! The funeral home directory record.

use serde::{Deserialize, Serialize};

/// One row of the `funeral_homes` table.
///
/// Only `internal_id` is guaranteed; every other attribute may be unknown.
/// Records are produced by an upstream entity-resolution pipeline and are
/// only ever read here.
///
/// # Examples
///
/// ```
/// use vigil_persistence::types::FuneralHomeRecord;
///
/// let record = FuneralHomeRecord::new(7)
///     .with_name("Springfield Memorial")
///     .with_city("Springfield");
///
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["internal_id"], 7);
/// assert!(json["website"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FuneralHomeRecord {
    /// Stable primary identifier.
    pub internal_id: i64,

    /// Dedup cluster this record was merged from.
    pub cluster_id: Option<String>,

    /// Business name.
    pub name: Option<String>,
    /// Street address.
    pub street: Option<String>,
    /// City or locality.
    pub city: Option<String>,
    /// State, province or region.
    pub region: Option<String>,
    /// Postal or ZIP code.
    pub postal_code: Option<String>,
    /// Country code or name as delivered upstream.
    pub country: Option<String>,

    /// Phone number as delivered upstream.
    pub phone: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,

    /// Serialized list of contributing data sources, passed through verbatim.
    pub sources: Option<String>,
    /// Serialized list of upstream source identifiers, passed through verbatim.
    pub source_ids: Option<String>,
    /// Number of upstream raw records merged into this one.
    pub cluster_size: Option<i64>,
}

impl FuneralHomeRecord {
    /// Creates a record with only its identifier set.
    pub fn new(internal_id: i64) -> Self {
        Self {
            internal_id,
            ..Default::default()
        }
    }

    /// Sets the cluster identifier.
    pub fn with_cluster_id(mut self, cluster_id: impl Into<String>) -> Self {
        self.cluster_id = Some(cluster_id.into());
        self
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the street.
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the postal code.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Sets both coordinates.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Sets the provenance blobs.
    pub fn with_sources(
        mut self,
        sources: impl Into<String>,
        source_ids: impl Into<String>,
    ) -> Self {
        self.sources = Some(sources.into());
        self.source_ids = Some(source_ids.into());
        self
    }

    /// Sets the cluster size.
    pub fn with_cluster_size(mut self, cluster_size: i64) -> Self {
        self.cluster_size = Some(cluster_size);
        self
    }
}

/// Number of records matching a set of filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCount {
    /// Matching row count.
    pub total: u64,
}
