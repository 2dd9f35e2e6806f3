//! Backend-neutral statement model.

use crate::types::{PageRequest, SortColumn, SortOrder};

/// Name of the directory table.
pub const TABLE_NAME: &str = "funeral_homes";

/// A column of the `funeral_homes` table.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    InternalId,
    ClusterId,
    Name,
    Street,
    City,
    Region,
    PostalCode,
    Country,
    Phone,
    Website,
    Latitude,
    Longitude,
    Sources,
    SourceIds,
    ClusterSize,
}

impl Column {
    /// Every column, in table order. Row mapping relies on this order.
    pub const ALL: [Column; 15] = [
        Column::InternalId,
        Column::ClusterId,
        Column::Name,
        Column::Street,
        Column::City,
        Column::Region,
        Column::PostalCode,
        Column::Country,
        Column::Phone,
        Column::Website,
        Column::Latitude,
        Column::Longitude,
        Column::Sources,
        Column::SourceIds,
        Column::ClusterSize,
    ];

    /// Returns the SQL identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::InternalId => "internal_id",
            Column::ClusterId => "cluster_id",
            Column::Name => "name",
            Column::Street => "street",
            Column::City => "city",
            Column::Region => "region",
            Column::PostalCode => "postal_code",
            Column::Country => "country",
            Column::Phone => "phone",
            Column::Website => "website",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::Sources => "sources",
            Column::SourceIds => "source_ids",
            Column::ClusterSize => "cluster_size",
        }
    }
}

impl From<SortColumn> for Column {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::InternalId => Column::InternalId,
            SortColumn::Name => Column::Name,
            SortColumn::City => Column::City,
            SortColumn::Region => Column::Region,
            SortColumn::PostalCode => Column::PostalCode,
            SortColumn::ClusterSize => Column::ClusterSize,
        }
    }
}

/// A single filter condition.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// The lowercased column contains `needle` (already lowercased).
    ContainsIgnoreCase { column: Column, needle: String },
    /// The column equals `value` once both are lowercased.
    EqualsIgnoreCase { column: Column, value: String },
    /// The column equals `value` byte for byte.
    Equals { column: Column, value: String },
}

/// What a statement returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Every column of every matching row.
    AllColumns,
    /// A single count of matching rows.
    Count,
}

/// A query against the directory table.
///
/// Builder methods take `self` and return a new value, so a base statement
/// can be shared and extended without aliasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    projection: Projection,
    predicates: Vec<Predicate>,
    order: Option<SortOrder>,
    page: Option<PageRequest>,
}

impl Statement {
    /// `SELECT <all columns> FROM funeral_homes`.
    pub fn select_all() -> Self {
        Self::with_projection(Projection::AllColumns)
    }

    /// `SELECT COUNT(*) FROM funeral_homes`.
    pub fn count_all() -> Self {
        Self::with_projection(Projection::Count)
    }

    fn with_projection(projection: Projection) -> Self {
        Self {
            projection,
            predicates: Vec::new(),
            order: None,
            page: None,
        }
    }

    /// Adds a predicate, AND-ed with any already present.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Sets the ordering, replacing any previous one.
    pub fn order_by(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the limit/offset window.
    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    /// Returns the projection.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Returns the predicates in application order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns the ordering, if any.
    pub fn order(&self) -> Option<SortOrder> {
        self.order
    }

    /// Returns the page window, if any.
    pub fn page(&self) -> Option<PageRequest> {
        self.page
    }
}
