use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_OFFSET: usize = 0;
pub const DEFAULT_LIMIT: usize = 25;

/// Raw `/products` query string. Kept as text so bad numbers can be reported
/// by name instead of through a generic extractor rejection.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub offset: usize,
    pub limit: usize,
    pub tag: Option<String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            tag: None,
        }
    }
}

impl TryFrom<ListParams> for QueryOptions {
    type Error = AppError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        Ok(Self {
            offset: parse_count("offset", params.offset.as_deref(), DEFAULT_OFFSET)?,
            limit: parse_count("limit", params.limit.as_deref(), DEFAULT_LIMIT)?,
            tag: params.tag.filter(|t| !t.is_empty()),
        })
    }
}

fn parse_count(name: &str, raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| AppError::BadRequest(format!("{name} must be a non-negative integer"))),
    }
}
