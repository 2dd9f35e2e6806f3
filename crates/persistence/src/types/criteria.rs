//! Per-request filter values.

use serde::{Deserialize, Serialize};

/// Optional field filters for a listing or count request.
///
/// Values are kept exactly as supplied. A field counts as specified only when
/// it is present and non-empty; `Some("")` behaves like `None`, so a blank
/// form field never turns into a "match empty" predicate.
///
/// Matching rules live with the filter composer
/// ([`compose_filters`](crate::query::compose_filters)); this type performs no
/// normalization of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    name: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    phone: Option<String>,
}

fn specified(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FilterCriteria {
    /// Creates criteria that match every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters on a case-insensitive substring of the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters on a case-insensitive substring of the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Filters on a case-insensitive exact region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Filters on a case-insensitive substring of the postal code.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Filters on an exact, case-sensitive country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Filters on an exact, case-sensitive phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns the name filter, if specified.
    pub fn name(&self) -> Option<&str> {
        specified(&self.name)
    }

    /// Returns the city filter, if specified.
    pub fn city(&self) -> Option<&str> {
        specified(&self.city)
    }

    /// Returns the region filter, if specified.
    pub fn region(&self) -> Option<&str> {
        specified(&self.region)
    }

    /// Returns the postal code filter, if specified.
    pub fn postal_code(&self) -> Option<&str> {
        specified(&self.postal_code)
    }

    /// Returns the country filter, if specified.
    pub fn country(&self) -> Option<&str> {
        specified(&self.country)
    }

    /// Returns the phone filter, if specified.
    pub fn phone(&self) -> Option<&str> {
        specified(&self.phone)
    }

    /// Returns the number of specified filters.
    pub fn specified_count(&self) -> usize {
        [
            self.name(),
            self.city(),
            self.region(),
            self.postal_code(),
            self.country(),
            self.phone(),
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }

    /// Returns true if no filter is specified.
    pub fn is_empty(&self) -> bool {
        self.specified_count() == 0
    }
}
