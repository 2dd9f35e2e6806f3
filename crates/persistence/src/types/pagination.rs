//! Limit/offset paging.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Smallest page a caller may request.
pub const MIN_LIMIT: u32 = 1;

/// Largest page a caller may request.
pub const MAX_LIMIT: u32 = 500;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 15;

/// A validated limit/offset window.
///
/// Out-of-range values are rejected rather than clamped, so a caller always
/// gets exactly the window it asked for or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    limit: u32,
    offset: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Creates a page request, checking the limit range.
    pub fn new(limit: u32, offset: u64) -> Result<Self, ValidationError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::InvalidLimit {
                value: i64::from(limit),
                min: MIN_LIMIT,
                max: MAX_LIMIT,
            });
        }
        Ok(Self { limit, offset })
    }

    /// Creates a page request from signed input, as parsed off a query string.
    pub fn from_signed(limit: i64, offset: i64) -> Result<Self, ValidationError> {
        let limit = u32::try_from(limit)
            .ok()
            .filter(|l| (MIN_LIMIT..=MAX_LIMIT).contains(l))
            .ok_or(ValidationError::InvalidLimit {
                value: limit,
                min: MIN_LIMIT,
                max: MAX_LIMIT,
            })?;
        let offset =
            u64::try_from(offset).map_err(|_| ValidationError::InvalidOffset { value: offset })?;
        Ok(Self { limit, offset })
    }

    /// Returns the page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the number of rows skipped.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}
