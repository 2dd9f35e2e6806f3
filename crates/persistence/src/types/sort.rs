//! Sort vocabulary for listings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A column a listing may be ordered by.
///
/// This is the complete set; there is no way to order by any other column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// `internal_id` (default).
    #[default]
    InternalId,
    /// `name`.
    Name,
    /// `city`.
    City,
    /// `region`.
    Region,
    /// `postal_code`.
    PostalCode,
    /// `cluster_size`.
    ClusterSize,
}

impl SortColumn {
    /// Every sortable column, in the order they are advertised.
    pub const ALL: [SortColumn; 6] = [
        SortColumn::InternalId,
        SortColumn::Name,
        SortColumn::City,
        SortColumn::Region,
        SortColumn::PostalCode,
        SortColumn::ClusterSize,
    ];

    /// Returns the column name used both on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::InternalId => "internal_id",
            SortColumn::Name => "name",
            SortColumn::City => "city",
            SortColumn::Region => "region",
            SortColumn::PostalCode => "postal_code",
            SortColumn::ClusterSize => "cluster_size",
        }
    }

    /// Returns the comma-separated list of accepted names.
    pub fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(SortColumn::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolves a caller-supplied column name.
    ///
    /// Matching is exact; `"Name"` is rejected.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidSortColumn {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a listing's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Parses `asc` or `desc`, ignoring case.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ValidationError::InvalidSortDirection {
                value: value.to_string(),
            }),
        }
    }

    /// Returns the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// A single-column ordering.
///
/// No secondary key is applied, so rows that tie on the column come back in
/// whatever order the storage engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOrder {
    /// Column to order by.
    pub column: SortColumn,
    /// Direction to order in.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Creates a sort order.
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Parses raw `sort_by` / `sort_dir` values.
    ///
    /// The column is checked first, so a request with both values wrong
    /// reports the column.
    pub fn parse(sort_by: &str, sort_dir: &str) -> Result<Self, ValidationError> {
        let column = SortColumn::parse(sort_by)?;
        let direction = SortDirection::parse(sort_dir)?;
        Ok(Self { column, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_column() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::parse(column.as_str()).unwrap(), column);
        }
    }

    #[test]
    fn test_parse_unknown_column() {
        let err = SortColumn::parse("foo").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSortColumn {
                value: "foo".to_string()
            }
        );
        assert!(err.to_string().ends_with(
            "internal_id, name, city, region, postal_code, cluster_size"
        ));
    }

    #[test]
    fn test_column_match_is_exact() {
        assert!(SortColumn::parse("Name").is_err());
        assert!(SortColumn::parse(" name").is_err());
        // Columns that exist but are not sortable.
        assert!(SortColumn::parse("country").is_err());
        assert!(SortColumn::parse("latitude").is_err());
    }

    #[test]
    fn test_direction_case_insensitive() {
        assert_eq!(SortDirection::parse("asc").unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::parse("DESC").unwrap(), SortDirection::Desc);
        assert_eq!(SortDirection::parse("Desc").unwrap(), SortDirection::Desc);
    }

    #[test]
    fn test_direction_rejects_other_values() {
        for value in ["sideways", "", "ascending", " asc"] {
            assert!(matches!(
                SortDirection::parse(value),
                Err(ValidationError::InvalidSortDirection { .. })
            ));
        }
    }

    #[test]
    fn test_sort_order_parse_reports_column_first() {
        let err = SortOrder::parse("foo", "sideways").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSortColumn { .. }));
    }

    #[test]
    fn test_defaults() {
        let order = SortOrder::default();
        assert_eq!(order.column, SortColumn::InternalId);
        assert_eq!(order.direction, SortDirection::Asc);
    }
}
