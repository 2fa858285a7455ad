//! Apartment row model.

use estate_core::apartment::{ApartmentDraft, Location};
use estate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `apartments` table, serialized as the API representation.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: DbId,
    pub unit_name: String,
    pub unit_number: String,
    pub project: String,
    pub description: Option<String>,
    #[sqlx(json)]
    pub location: Location,
    pub price: f64,
    pub area: Option<f64>,
    pub rooms: Option<i32>,
    /// Media-host URLs in upload order.
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Apartment> for ApartmentDraft {
    fn from(row: &Apartment) -> Self {
        Self {
            unit_name: row.unit_name.clone(),
            unit_number: row.unit_number.clone(),
            project: row.project.clone(),
            description: row.description.clone(),
            location: row.location.clone(),
            price: row.price,
            area: row.area,
            rooms: row.rooms,
        }
    }
}
