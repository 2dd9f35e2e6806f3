//! Filter composition.

use crate::types::FilterCriteria;

use super::statement::{Column, Predicate, Statement};

/// Returns the predicates for every specified filter, in a fixed order.
///
/// | field | predicate |
/// |---|---|
/// | name, city, postal_code | case-insensitive substring, input trimmed |
/// | region | case-insensitive equality |
/// | country, phone | exact equality |
///
/// Substring needles are not escaped: `%` and `_` in the input keep their
/// `LIKE` meaning.
pub fn filter_predicates(criteria: &FilterCriteria) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    if let Some(name) = criteria.name() {
        predicates.push(contains(Column::Name, name));
    }
    if let Some(city) = criteria.city() {
        predicates.push(contains(Column::City, city));
    }
    if let Some(region) = criteria.region() {
        predicates.push(Predicate::EqualsIgnoreCase {
            column: Column::Region,
            value: region.to_string(),
        });
    }
    if let Some(postal_code) = criteria.postal_code() {
        predicates.push(contains(Column::PostalCode, postal_code));
    }
    if let Some(country) = criteria.country() {
        predicates.push(Predicate::Equals {
            column: Column::Country,
            value: country.to_string(),
        });
    }
    if let Some(phone) = criteria.phone() {
        predicates.push(Predicate::Equals {
            column: Column::Phone,
            value: phone.to_string(),
        });
    }

    predicates
}

fn contains(column: Column, raw: &str) -> Predicate {
    Predicate::ContainsIgnoreCase {
        column,
        needle: raw.trim().to_lowercase(),
    }
}

/// Returns `base` with the criteria's predicates AND-ed onto it.
///
/// `base` is left untouched, so the same criteria can be composed onto a
/// listing base and a count base and yield identical predicate lists. Empty
/// criteria return a copy of `base`.
pub fn compose_filters(base: &Statement, criteria: &FilterCriteria) -> Statement {
    filter_predicates(criteria)
        .into_iter()
        .fold(base.clone(), Statement::filter)
}
