//! List filtering for apartments.
//!
//! Query-string values arrive as raw strings. Blank values are ignored so a
//! search form can submit every input unconditionally.

use crate::apartment::{nul_message, parse_number, parse_whole_number};
use crate::error::CoreError;

/// Query parameter names.
pub const PARAM_SEARCH: &str = "search";
pub const PARAM_MIN_PRICE: &str = "minPrice";
pub const PARAM_MAX_PRICE: &str = "maxPrice";
pub const PARAM_ROOMS: &str = "rooms";

/// Constraints applied to the apartment list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApartmentFilter {
    /// Case-insensitive substring matched against unit name, unit number
    /// and project.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Exact room count.
    pub rooms: Option<i32>,
}

impl ApartmentFilter {
    /// Build a filter from raw query values, reporting every malformed one.
    pub fn parse(
        search: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        rooms: Option<&str>,
    ) -> Result<Self, CoreError> {
        let mut errors = Vec::new();

        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        if search.as_deref().is_some_and(|s| s.contains('\0')) {
            errors.push(nul_message(PARAM_SEARCH));
        }
        let min_price = parse_param(PARAM_MIN_PRICE, min_price, parse_number, &mut errors);
        let max_price = parse_param(PARAM_MAX_PRICE, max_price, parse_number, &mut errors);
        let rooms = parse_param(PARAM_ROOMS, rooms, parse_whole_number, &mut errors);

        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                errors.push(format!(
                    "{PARAM_MIN_PRICE} must not be greater than {PARAM_MAX_PRICE}."
                ));
            }
        }

        if errors.is_empty() {
            Ok(Self {
                search,
                min_price,
                max_price,
                rooms,
            })
        } else {
            Err(CoreError::Validation(errors))
        }
    }

    /// `ILIKE` pattern for the search term, with wildcards escaped so the
    /// term is always matched literally.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|term| format!("%{}%", escape_like(term)))
    }
}

fn parse_param<T>(
    name: &str,
    raw: Option<&str>,
    parse: fn(&str) -> Result<T, String>,
    errors: &mut Vec<String>,
) -> Option<T> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match parse(raw) {
        Ok(value) => Some(value),
        Err(reason) => {
            errors.push(format!("{name} {reason}."));
            None
        }
    }
}

/// Escape `\`, `%` and `_` for use inside a `LIKE` pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
