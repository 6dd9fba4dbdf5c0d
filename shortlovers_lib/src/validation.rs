use shortlovers_api::{SortDirection, TitleSortBy};

use crate::error::ShortloversError;

pub const MAX_LIMIT: i64 = 200;

pub const SORT_KEYS: &[&str] = &[
    "date_created",
    "view_count",
    "bookmark_count",
    "episode_count",
    "title",
];

/// Validate a sort key. A leading `-` sorts descending, otherwise ascending,
/// matching the API's own `sort` syntax.
pub fn validate_sort(input: &str) -> Result<(TitleSortBy, SortDirection), ShortloversError> {
    let trimmed = input.trim();
    let (direction, key) = match trimmed.strip_prefix('-') {
        Some(rest) => (SortDirection::Desc, rest),
        None => (SortDirection::Asc, trimmed),
    };
    let sort_by = key.to_lowercase().parse::<TitleSortBy>().map_err(|_| {
        ShortloversError::InvalidInput(format!(
            "unknown sort key '{}'. Valid keys: {} (prefix with '-' for descending)",
            input,
            SORT_KEYS.join(", ")
        ))
    })?;
    Ok((sort_by, direction))
}

/// Validate a result limit (must be 1..=200).
pub fn validate_limit(limit: i64) -> Result<i64, ShortloversError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ShortloversError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, ShortloversError> {
    if page < 1 {
        return Err(ShortloversError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate a group id (must be positive).
pub fn validate_group_id(id: i64) -> Result<i64, ShortloversError> {
    if id < 1 {
        return Err(ShortloversError::InvalidInput(format!(
            "group id must be positive, got {}",
            id
        )));
    }
    Ok(id)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
