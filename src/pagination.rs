//! Page requests, sort parameters and the page envelope returned by listings.
//!
//! Page numbers are zero-based. The page envelope carries no total count: the
//! `last` flag is derived from the number of rows returned, so a page that
//! happens to be exactly full is reported as not last.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Rejected `sortBy` / `sortOrder` values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortParseError {
    #[error("Invalid sort field: {0}. Valid fields: id, name, specialtyId")]
    Field(String),
    #[error("Invalid sort direction: {0}. Valid directions: ASC, DESC")]
    Direction(String),
}

/// Fields a doctor listing may be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    SpecialtyId,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Id, SortField::Name, SortField::SpecialtyId];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::SpecialtyId => "specialtyId",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = SortParseError;

    /// Field names are matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SortParseError::Field(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("ASC"),
            SortDirection::Desc => f.write_str("DESC"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    /// Case-insensitive `asc` / `desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(SortParseError::Direction(s.to_string()))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses raw `sortBy` and `sortOrder` values. The field is checked first.
    pub fn parse(sort_by: &str, sort_order: &str) -> Result<Self, SortParseError> {
        let field = sort_by.parse::<SortField>()?;
        let direction = sort_order.parse::<SortDirection>()?;
        Ok(Self { field, direction })
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new(SortField::Id, SortDirection::Asc)
    }
}

/// Zero-based page request.
///
/// Values are signed; negative ones are rejected by the listing service, not
/// here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort: Sort,
}

impl PageRequest {
    pub fn new(page: i64, size: i64, sort: Sort) -> Self {
        Self { page, size, sort }
    }

    /// `page * size`, or `None` on overflow.
    pub fn offset(&self) -> Option<i64> {
        self.page.checked_mul(self.size)
    }
}

/// One page of results plus approximate page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> PageResponse<T> {
    pub fn new(content: Vec<T>, page_number: i64, page_size: i64) -> Self {
        let returned = i64::try_from(content.len()).unwrap_or(i64::MAX);
        Self {
            first: page_number == 0,
            last: returned < page_size,
            empty: content.is_empty(),
            content,
            page_number,
            page_size,
        }
    }

    pub fn map<U, F>(self, f: F) -> PageResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PageResponse {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
