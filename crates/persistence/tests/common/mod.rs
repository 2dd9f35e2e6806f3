//! Shared fixtures for persistence integration tests.

#![allow(dead_code)]

use vigil_persistence::types::FuneralHomeRecord;

/// A small directory covering every filter path.
///
/// | id | name | city | region | postal | country | cluster_size |
/// |----|------|------|--------|--------|---------|--------------|
/// | 1 | Oak Grove Chapel | Springfield | IL | 62701 | US | 2 |
/// | 2 | Riverside Memorial | Shelbyville | IL | 62565 | US | 1 |
/// | 3 | Spring Hill Funeral Home | Capital City | ON | K1A 0B1 | CA | 3 |
/// | 4 | Maple Leaf Funeral Services | Toronto | ON | M5V 2T6 | CA | 4 |
/// | 5 | Evergreen Mortuary | West Springfield | MA | 01089 | US | 5 |
/// | 6 | (null) | Springfield | MO | 65801 | us | (null) |
pub fn directory() -> Vec<FuneralHomeRecord> {
    vec![
        FuneralHomeRecord::new(1)
            .with_cluster_id("c-0001")
            .with_name("Oak Grove Chapel")
            .with_street("12 Elm St")
            .with_city("Springfield")
            .with_region("IL")
            .with_postal_code("62701")
            .with_country("US")
            .with_phone("217-555-0101")
            .with_website("https://oakgrove.example")
            .with_coordinates(39.7817, -89.6501)
            .with_sources("[\"nfda\", \"state_board\"]", "[\"N-1\", \"SB-9\"]")
            .with_cluster_size(2),
        FuneralHomeRecord::new(2)
            .with_name("Riverside Memorial")
            .with_city("Shelbyville")
            .with_region("IL")
            .with_postal_code("62565")
            .with_country("US")
            .with_phone("217-555-0102")
            .with_cluster_size(1),
        FuneralHomeRecord::new(3)
            .with_name("Spring Hill Funeral Home")
            .with_city("Capital City")
            .with_region("ON")
            .with_postal_code("K1A 0B1")
            .with_country("CA")
            .with_phone("613-555-0103")
            .with_cluster_size(3),
        FuneralHomeRecord::new(4)
            .with_name("Maple Leaf Funeral Services")
            .with_city("Toronto")
            .with_region("ON")
            .with_postal_code("M5V 2T6")
            .with_country("CA")
            .with_phone("416-555-0104")
            .with_cluster_size(4),
        FuneralHomeRecord::new(5)
            .with_name("Evergreen Mortuary")
            .with_city("West Springfield")
            .with_region("MA")
            .with_postal_code("01089")
            .with_country("US")
            .with_phone("413-555-0105")
            .with_cluster_size(5),
        FuneralHomeRecord::new(6)
            .with_city("Springfield")
            .with_region("MO")
            .with_postal_code("65801")
            .with_country("us"),
    ]
}

/// Returns the ids of the given records, in order.
pub fn ids(records: &[FuneralHomeRecord]) -> Vec<i64> {
    records.iter().map(|r| r.internal_id).collect()
}
