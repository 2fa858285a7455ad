//! Query parameter types for API handlers.

use serde::Deserialize;

/// Filters accepted by `GET /api/apartments`
/// (`?search=&minPrice=&maxPrice=&rooms=`).
///
/// Values stay raw strings here; they are parsed (and rejected with field
/// messages) by `ApartmentFilter::parse`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApartmentsParams {
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub rooms: Option<String>,
}
