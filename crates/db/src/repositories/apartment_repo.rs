//! Repository for the `apartments` table.
//!
//! Validation happens before anything reaches this layer; the table's CHECK
//! constraints only back it up.

use estate_core::apartment::ApartmentDraft;
use estate_core::filter::ApartmentFilter;
use estate_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::apartment::Apartment;

/// Column list for `apartments` queries.
const COLUMNS: &str = "\
    id, unit_name, unit_number, project, description, location, \
    price, area, rooms, images, created_at, updated_at";

/// Provides data access for apartments.
pub struct ApartmentRepo;

impl ApartmentRepo {
    /// List apartments matching `filter`, newest first.
    ///
    /// The search term matches any of `unit_name`, `unit_number` or `project`
    /// as a case-insensitive substring.
    pub async fn list(
        pool: &PgPool,
        filter: &ApartmentFilter,
    ) -> Result<Vec<Apartment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM apartments \
             WHERE ($1::TEXT IS NULL \
                    OR unit_name ILIKE $1 OR unit_number ILIKE $1 OR project ILIKE $1) \
               AND ($2::FLOAT8 IS NULL OR price >= $2) \
               AND ($3::FLOAT8 IS NULL OR price <= $3) \
               AND ($4::INT4 IS NULL OR rooms = $4) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Apartment>(&query)
            .bind(filter.search_pattern())
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.rooms)
            .fetch_all(pool)
            .await
    }

    /// Find an apartment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Apartment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apartments WHERE id = $1");
        sqlx::query_as::<_, Apartment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an apartment with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM apartments WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a new apartment with a freshly generated time-ordered ID.
    pub async fn create(
        pool: &PgPool,
        draft: &ApartmentDraft,
        images: &[String],
    ) -> Result<Apartment, sqlx::Error> {
        let query = format!(
            "INSERT INTO apartments \
                (id, unit_name, unit_number, project, description, location, \
                 price, area, rooms, images) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Apartment>(&query)
            .bind(DbId::now_v7())
            .bind(&draft.unit_name)
            .bind(&draft.unit_number)
            .bind(&draft.project)
            .bind(&draft.description)
            .bind(Json(&draft.location))
            .bind(draft.price)
            .bind(draft.area)
            .bind(draft.rooms)
            .bind(images)
            .fetch_one(pool)
            .await
    }

    /// Load an apartment and lock its row until `tx` ends.
    pub async fn find_by_id_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Apartment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apartments WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Apartment>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Overwrite every mutable column of an apartment.
    ///
    /// `updated_at` is refreshed by the table trigger. Returns `None` if the
    /// row no longer exists.
    pub async fn replace(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        draft: &ApartmentDraft,
        images: &[String],
    ) -> Result<Option<Apartment>, sqlx::Error> {
        let query = format!(
            "UPDATE apartments SET \
                 unit_name = $2, \
                 unit_number = $3, \
                 project = $4, \
                 description = $5, \
                 location = $6, \
                 price = $7, \
                 area = $8, \
                 rooms = $9, \
                 images = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Apartment>(&query)
            .bind(id)
            .bind(&draft.unit_name)
            .bind(&draft.unit_number)
            .bind(&draft.project)
            .bind(&draft.description)
            .bind(Json(&draft.location))
            .bind(draft.price)
            .bind(draft.area)
            .bind(draft.rooms)
            .bind(images)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Delete an apartment by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM apartments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all apartments.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM apartments")
            .fetch_one(pool)
            .await
    }
}
