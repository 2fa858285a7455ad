//! Apartment service.
//!
//! Coordinates identifier parsing, form validation, image uploads and the
//! repository. Held in [`AppState`](crate::state::AppState) as an
//! `Arc<ApartmentService>`.

use std::sync::Arc;

use estate_core::apartment::{
    parse_apartment_id, ApartmentDraft, ApartmentForm, ApartmentPatch, ENTITY,
};
use estate_core::error::CoreError;
use estate_core::filter::ApartmentFilter;
use estate_db::models::apartment::Apartment;
use estate_db::repositories::ApartmentRepo;
use estate_media::{upload_all, MediaUploader, UploadFile};
use sqlx::PgPool;

use crate::error::AppResult;

/// Apartment CRUD on top of the store and the media host.
///
/// Identifiers are parsed before anything else, so a malformed id never
/// reaches the database. Images are uploaded one at a time, in submission
/// order, and only after the submitted fields passed validation.
pub struct ApartmentService {
    pool: PgPool,
    uploader: Arc<dyn MediaUploader>,
}

impl ApartmentService {
    pub fn new(pool: PgPool, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { pool, uploader }
    }

    /// All apartments matching `filter`, newest first.
    pub async fn list(&self, filter: &ApartmentFilter) -> AppResult<Vec<Apartment>> {
        Ok(ApartmentRepo::list(&self.pool, filter).await?)
    }

    /// Fetch one apartment by its raw path identifier.
    pub async fn get(&self, raw_id: &str) -> AppResult<Apartment> {
        let id = parse_apartment_id(raw_id)?;
        let apartment = ApartmentRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(apartment)
    }

    /// Validate `form`, upload `files`, then insert the new apartment.
    ///
    /// Nothing is stored when validation or any upload fails.
    pub async fn create(&self, form: &ApartmentForm, files: &[UploadFile]) -> AppResult<Apartment> {
        let draft = ApartmentDraft::from_form(form)?;
        let images = upload_all(self.uploader.as_ref(), files).await?;

        let apartment = ApartmentRepo::create(&self.pool, &draft, &images).await?;
        tracing::info!(
            apartment_id = %apartment.id,
            images = apartment.images.len(),
            "Apartment created",
        );
        Ok(apartment)
    }

    /// Apply the supplied fields of `form` to an existing apartment.
    ///
    /// Fields absent from the form keep their stored values. When `files` is
    /// non-empty the uploaded URLs replace the stored image list; otherwise
    /// the stored list is kept. The merge and the write happen under a row
    /// lock, so concurrent updates to the same apartment never interleave.
    pub async fn update(
        &self,
        raw_id: &str,
        form: &ApartmentForm,
        files: &[UploadFile],
    ) -> AppResult<Apartment> {
        let id = parse_apartment_id(raw_id)?;
        let patch = ApartmentPatch::from_form(form)?;

        if !ApartmentRepo::exists(&self.pool, id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }

        let uploaded = if files.is_empty() {
            None
        } else {
            Some(upload_all(self.uploader.as_ref(), files).await?)
        };

        let mut tx = self.pool.begin().await?;
        let current = ApartmentRepo::find_by_id_for_update(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        let merged = ApartmentDraft::from(&current).apply(patch);
        merged.validate()?;

        let images = uploaded.as_deref().unwrap_or(current.images.as_slice());
        let apartment = ApartmentRepo::replace(&mut tx, id, &merged, images)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tx.commit().await?;

        tracing::info!(
            apartment_id = %id,
            fields = ?form.present_fields(),
            images_replaced = uploaded.is_some(),
            "Apartment updated",
        );
        Ok(apartment)
    }

    /// Permanently remove an apartment. Hosted images are left in place.
    pub async fn delete(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_apartment_id(raw_id)?;
        if !ApartmentRepo::delete(&self.pool, id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        tracing::info!(apartment_id = %id, "Apartment deleted");
        Ok(())
    }
}
