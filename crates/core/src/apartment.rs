//! Apartment identifiers, form coercion and field validation.
//!
//! Submissions arrive as multipart text fields: numbers as strings and the
//! nested `location` as a JSON-encoded string. [`ApartmentForm`] holds the raw
//! values as received, [`ApartmentDraft`] is a complete candidate record that
//! passed validation, and [`ApartmentPatch`] carries only the fields present
//! in an update request.
//!
//! Validation messages always name the JSON field (`unitName`, not
//! `unit_name`) so clients can map them back onto their form inputs.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in errors and log fields.
pub const ENTITY: &str = "Apartment";

// ---------------------------------------------------------------------------
// Form field names
// ---------------------------------------------------------------------------

pub const FIELD_UNIT_NAME: &str = "unitName";
pub const FIELD_UNIT_NUMBER: &str = "unitNumber";
pub const FIELD_PROJECT: &str = "project";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_AREA: &str = "area";
pub const FIELD_ROOMS: &str = "rooms";

/// Multipart field carrying image files (repeated once per file).
pub const FIELD_IMAGES: &str = "images";

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Parse a path identifier into an apartment id.
///
/// Anything that is not a syntactically valid UUID is rejected before the
/// store is consulted.
pub fn parse_apartment_id(raw: &str) -> Result<DbId, CoreError> {
    DbId::parse_str(raw).map_err(|_| CoreError::InvalidIdentifier {
        entity: ENTITY,
        id: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Nested address block of an apartment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Location {
    /// Trim both parts, turning blank values into `None`.
    fn normalized(self) -> Self {
        Self {
            address: self.address.and_then(|s| non_blank(&s)),
            city: self.city.and_then(|s| non_blank(&s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw form
// ---------------------------------------------------------------------------

/// Text fields of a submitted apartment form, exactly as received.
///
/// `None` means the field was not part of the submission at all, which is
/// what distinguishes "leave unchanged" from "clear" in a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApartmentForm {
    pub unit_name: Option<String>,
    pub unit_number: Option<String>,
    pub project: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub area: Option<String>,
    pub rooms: Option<String>,
}

impl ApartmentForm {
    /// Store a text field by its form name.
    ///
    /// Returns `false` (and stores nothing) for names that are not apartment
    /// fields. A repeated field keeps the last value.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        match self.slot(name) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    /// Build a form from a JSON object body.
    ///
    /// Strings are taken as-is, numbers and booleans in their JSON spelling,
    /// and `null` as a blank value. `location` may also be an object. Unknown
    /// keys are ignored.
    pub fn from_json(body: &serde_json::Value) -> Result<Self, CoreError> {
        let Some(fields) = body.as_object() else {
            return Err(CoreError::Validation(vec![
                "Request body must be a JSON object.".to_string(),
            ]));
        };

        let mut form = Self::default();
        let mut errors = Vec::new();
        for (name, value) in fields {
            let Some(slot) = form.slot(name) else {
                continue;
            };
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                serde_json::Value::Object(_) if name == FIELD_LOCATION => value.to_string(),
                _ => {
                    errors.push(format!("{name} must be a string or a number."));
                    continue;
                }
            };
            *slot = Some(text);
        }

        if errors.is_empty() {
            Ok(form)
        } else {
            Err(CoreError::Validation(errors))
        }
    }

    fn slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            FIELD_UNIT_NAME => Some(&mut self.unit_name),
            FIELD_UNIT_NUMBER => Some(&mut self.unit_number),
            FIELD_PROJECT => Some(&mut self.project),
            FIELD_DESCRIPTION => Some(&mut self.description),
            FIELD_LOCATION => Some(&mut self.location),
            FIELD_PRICE => Some(&mut self.price),
            FIELD_AREA => Some(&mut self.area),
            FIELD_ROOMS => Some(&mut self.rooms),
            _ => None,
        }
    }

    /// Names of the fields present in this submission.
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            (FIELD_UNIT_NAME, &self.unit_name),
            (FIELD_UNIT_NUMBER, &self.unit_number),
            (FIELD_PROJECT, &self.project),
            (FIELD_DESCRIPTION, &self.description),
            (FIELD_LOCATION, &self.location),
            (FIELD_PRICE, &self.price),
            (FIELD_AREA, &self.area),
            (FIELD_ROOMS, &self.rooms),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Patch (fields present in a request)
// ---------------------------------------------------------------------------

/// Coerced fields of a request; `None` means "not supplied".
///
/// For optional fields the inner `Option` distinguishes a new value from an
/// explicit clear (a supplied but blank value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApartmentPatch {
    pub unit_name: Option<String>,
    pub unit_number: Option<String>,
    pub project: Option<String>,
    pub description: Option<Option<String>>,
    pub location: Option<Location>,
    pub price: Option<f64>,
    pub area: Option<Option<f64>>,
    pub rooms: Option<Option<i32>>,
}

impl ApartmentPatch {
    /// Coerce an update form. Fields absent from the form stay `None`.
    pub fn from_form(form: &ApartmentForm) -> Result<Self, CoreError> {
        let (patch, mut errors) = coerce(form);
        errors.extend(patch.rule_violations());
        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(CoreError::Validation(errors))
        }
    }

    fn rule_violations(&self) -> Vec<String> {
        rule_violations(self.price, self.area.flatten(), self.rooms.flatten())
    }
}

// ---------------------------------------------------------------------------
// Draft (complete candidate record)
// ---------------------------------------------------------------------------

/// A complete apartment record minus the system-managed fields
/// (`id`, `images`, timestamps).
#[derive(Debug, Clone, PartialEq)]
pub struct ApartmentDraft {
    pub unit_name: String,
    pub unit_number: String,
    pub project: String,
    pub description: Option<String>,
    pub location: Location,
    pub price: f64,
    pub area: Option<f64>,
    pub rooms: Option<i32>,
}

impl ApartmentDraft {
    /// Coerce and validate a create form.
    ///
    /// All violations are collected; a field that is absent, blank or
    /// malformed is reported exactly once.
    pub fn from_form(form: &ApartmentForm) -> Result<Self, CoreError> {
        let (patch, mut errors) = coerce(form);

        for (field, raw) in [
            (FIELD_UNIT_NAME, &form.unit_name),
            (FIELD_UNIT_NUMBER, &form.unit_number),
            (FIELD_PROJECT, &form.project),
            (FIELD_PRICE, &form.price),
        ] {
            if raw.is_none() {
                errors.push(required_message(field));
            }
        }
        errors.extend(patch.rule_violations());

        match (patch.unit_name, patch.unit_number, patch.project, patch.price) {
            (Some(unit_name), Some(unit_number), Some(project), Some(price))
                if errors.is_empty() =>
            {
                Ok(Self {
                    unit_name,
                    unit_number,
                    project,
                    description: patch.description.flatten(),
                    location: patch.location.unwrap_or_default(),
                    price,
                    area: patch.area.flatten(),
                    rooms: patch.rooms.flatten(),
                })
            }
            _ => Err(CoreError::Validation(errors)),
        }
    }

    /// Apply the supplied fields of `patch`, leaving everything else intact.
    pub fn apply(mut self, patch: ApartmentPatch) -> Self {
        if let Some(unit_name) = patch.unit_name {
            self.unit_name = unit_name;
        }
        if let Some(unit_number) = patch.unit_number {
            self.unit_number = unit_number;
        }
        if let Some(project) = patch.project {
            self.project = project;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(area) = patch.area {
            self.area = area;
        }
        if let Some(rooms) = patch.rooms {
            self.rooms = rooms;
        }
        self
    }

    /// Run the full rule set against a complete record.
    ///
    /// Used after merging an update onto a stored record.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = Vec::new();
        for (field, value) in [
            (FIELD_UNIT_NAME, &self.unit_name),
            (FIELD_UNIT_NUMBER, &self.unit_number),
            (FIELD_PROJECT, &self.project),
        ] {
            if value.trim().is_empty() {
                errors.push(required_message(field));
            }
        }
        if !self.price.is_finite() {
            errors.push(number_message(FIELD_PRICE));
        }
        errors.extend(rule_violations(Some(self.price), self.area, self.rooms));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Coerce every supplied field, collecting one message per malformed field.
fn coerce(form: &ApartmentForm) -> (ApartmentPatch, Vec<String>) {
    let mut errors = Vec::new();

    let patch = ApartmentPatch {
        unit_name: required_text(FIELD_UNIT_NAME, form.unit_name.as_deref(), &mut errors),
        unit_number: required_text(FIELD_UNIT_NUMBER, form.unit_number.as_deref(), &mut errors),
        project: required_text(FIELD_PROJECT, form.project.as_deref(), &mut errors),
        description: form
            .description
            .as_deref()
            .and_then(|raw| text_without_nul(FIELD_DESCRIPTION, raw, &mut errors))
            .map(non_blank),
        location: form
            .location
            .as_deref()
            .and_then(|raw| location_field(raw, &mut errors)),
        price: form
            .price
            .as_deref()
            .and_then(|raw| match non_blank(raw) {
                None => {
                    errors.push(required_message(FIELD_PRICE));
                    None
                }
                Some(value) => record(FIELD_PRICE, parse_number(&value), &mut errors),
            }),
        area: form.area.as_deref().and_then(|raw| match non_blank(raw) {
            None => Some(None),
            Some(value) => record(FIELD_AREA, parse_number(&value), &mut errors).map(Some),
        }),
        rooms: form.rooms.as_deref().and_then(|raw| match non_blank(raw) {
            None => Some(None),
            Some(value) => record(FIELD_ROOMS, parse_whole_number(&value), &mut errors).map(Some),
        }),
    };

    (patch, errors)
}

fn required_text(field: &str, raw: Option<&str>, errors: &mut Vec<String>) -> Option<String> {
    let raw = text_without_nul(field, raw?, errors)?;
    let value = non_blank(raw);
    if value.is_none() {
        errors.push(required_message(field));
    }
    value
}

/// A blank `location` clears the address block; anything else must be a JSON
/// object with optional `address` and `city` strings.
fn location_field(raw: &str, errors: &mut Vec<String>) -> Option<Location> {
    if raw.trim().is_empty() {
        return Some(Location::default());
    }
    match serde_json::from_str::<Location>(raw) {
        Ok(location) => {
            let location = location.normalized();
            let parts = [location.address.as_deref(), location.city.as_deref()];
            if parts.into_iter().flatten().any(|part| part.contains('\0')) {
                errors.push(nul_message(FIELD_LOCATION));
                return None;
            }
            Some(location)
        }
        Err(_) => {
            errors.push(format!(
                "{FIELD_LOCATION} must be a JSON object with optional address and city strings."
            ));
            None
        }
    }
}

/// Postgres `TEXT` cannot hold NUL, so it is a client error, not a storage one.
fn text_without_nul<'a>(field: &str, raw: &'a str, errors: &mut Vec<String>) -> Option<&'a str> {
    if raw.contains('\0') {
        errors.push(nul_message(field));
        return None;
    }
    Some(raw)
}

pub(crate) fn nul_message(field: &str) -> String {
    format!("{field} must not contain NUL characters.")
}

fn record<T>(field: &str, parsed: Result<T, String>, errors: &mut Vec<String>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(reason) => {
            errors.push(format!("{field} {reason}."));
            None
        }
    }
}

/// Parse a finite decimal number.
pub(crate) fn parse_number(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err("must be a number".to_string()),
    }
}

/// Parse a whole number that fits an `i32` (`"2"` and `"2.0"` both pass).
pub(crate) fn parse_whole_number(raw: &str) -> Result<i32, String> {
    let n = parse_number(raw).map_err(|_| "must be a whole number".to_string())?;
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return Err("must be a whole number".to_string());
    }
    Ok(n as i32)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required_message(field: &str) -> String {
    format!("{field} is required.")
}

fn number_message(field: &str) -> String {
    format!("{field} must be a number.")
}

fn rule_violations(price: Option<f64>, area: Option<f64>, rooms: Option<i32>) -> Vec<String> {
    let mut errors = Vec::new();
    if price.is_some_and(|p| p <= 0.0) {
        errors.push(format!("{FIELD_PRICE} must be greater than 0."));
    }
    if area.is_some_and(|a| a <= 0.0) {
        errors.push(format!("{FIELD_AREA} must be greater than 0."));
    }
    if rooms.is_some_and(|r| r <= 0) {
        errors.push(format!("{FIELD_ROOMS} must be greater than 0."));
    }
    errors
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn form(fields: &[(&str, &str)]) -> ApartmentForm {
        let mut form = ApartmentForm::default();
        for (name, value) in fields {
            assert!(form.set_field(name, value.to_string()), "unknown field {name}");
        }
        form
    }

    fn lakeview_form() -> ApartmentForm {
        form(&[
            ("unitName", "A1"),
            ("unitNumber", "101"),
            ("project", "Lakeview"),
            ("price", "1200"),
            ("rooms", "2"),
        ])
    }

    fn messages(err: CoreError) -> Vec<String> {
        match err {
            CoreError::Validation(messages) => messages,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- identifiers --

    #[test]
    fn valid_uuid_parses() {
        let id = DbId::now_v7();
        assert_eq!(parse_apartment_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn malformed_ids_are_rejected() {
        for raw in ["", "123", "not-an-id", "507f1f77bcf86cd799439011"] {
            assert_matches!(
                parse_apartment_id(raw),
                Err(CoreError::InvalidIdentifier { entity: ENTITY, .. })
            );
        }
    }

    // -- form --

    #[test]
    fn unknown_form_fields_are_ignored() {
        let mut form = ApartmentForm::default();
        assert!(!form.set_field("owner", "x".into()));
        assert_eq!(form, ApartmentForm::default());
    }

    #[test]
    fn present_fields_lists_only_submitted_names() {
        let form = form(&[("price", "1500"), ("location", "{}")]);
        assert_eq!(form.present_fields(), vec!["location", "price"]);
    }

    // -- create --

    #[test]
    fn create_coerces_numbers_and_defaults() {
        let draft = ApartmentDraft::from_form(&lakeview_form()).unwrap();
        assert_eq!(draft.unit_name, "A1");
        assert_eq!(draft.unit_number, "101");
        assert_eq!(draft.project, "Lakeview");
        assert_eq!(draft.price, 1200.0);
        assert_eq!(draft.rooms, Some(2));
        assert_eq!(draft.area, None);
        assert_eq!(draft.description, None);
        assert_eq!(draft.location, Location::default());
    }

    #[test]
    fn create_parses_json_location() {
        let mut form = lakeview_form();
        form.set_field(
            "location",
            r#"{"address": " 12 Shore Rd ", "city": ""}"#.into(),
        );
        let draft = ApartmentDraft::from_form(&form).unwrap();
        assert_eq!(draft.location.address.as_deref(), Some("12 Shore Rd"));
        assert_eq!(draft.location.city, None);
    }

    #[test]
    fn create_treats_blank_optional_numbers_as_absent() {
        let mut form = lakeview_form();
        form.set_field("area", "".into());
        form.set_field("rooms", "  ".into());
        let draft = ApartmentDraft::from_form(&form).unwrap();
        assert_eq!(draft.area, None);
        assert_eq!(draft.rooms, None);
    }

    #[test]
    fn create_missing_unit_name_names_the_field() {
        let mut form = lakeview_form();
        form.unit_name = None;
        let errors = messages(ApartmentDraft::from_form(&form).unwrap_err());
        assert_eq!(errors, vec!["unitName is required."]);
    }

    #[test]
    fn create_collects_every_violation_once() {
        let form = form(&[
            ("unitName", "   "),
            ("price", "cheap"),
            ("area", "-4"),
            ("rooms", "2.5"),
            ("location", "downtown"),
        ]);
        let errors = messages(ApartmentDraft::from_form(&form).unwrap_err());
        assert_eq!(
            errors,
            vec![
                "unitName is required.",
                "location must be a JSON object with optional address and city strings.",
                "price must be a number.",
                "rooms must be a whole number.",
                "unitNumber is required.",
                "project is required.",
                "area must be greater than 0.",
            ]
        );
    }

    #[test]
    fn create_rejects_non_positive_price() {
        let mut form = lakeview_form();
        form.set_field("price", "0".into());
        let errors = messages(ApartmentDraft::from_form(&form).unwrap_err());
        assert_eq!(errors, vec!["price must be greater than 0."]);
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut form = lakeview_form();
        form.set_field("price", "NaN".into());
        form.set_field("area", "inf".into());
        let errors = messages(ApartmentDraft::from_form(&form).unwrap_err());
        assert_eq!(errors, vec!["price must be a number.", "area must be a number."]);
    }

    // -- update --

    #[test]
    fn patch_only_carries_supplied_fields() {
        let patch = ApartmentPatch::from_form(&form(&[("price", "1500")])).unwrap();
        assert_eq!(
            patch,
            ApartmentPatch {
                price: Some(1500.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn empty_form_yields_empty_patch() {
        let patch = ApartmentPatch::from_form(&ApartmentForm::default()).unwrap();
        assert_eq!(patch, ApartmentPatch::default());
    }

    #[test]
    fn patch_blank_required_field_is_rejected() {
        let errors =
            messages(ApartmentPatch::from_form(&form(&[("unitName", "")])).unwrap_err());
        assert_eq!(errors, vec!["unitName is required."]);
    }

    #[test]
    fn patch_blank_optional_fields_clear() {
        let patch = ApartmentPatch::from_form(&form(&[
            ("description", ""),
            ("area", ""),
            ("location", ""),
        ]))
        .unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.area, Some(None));
        assert_eq!(patch.location, Some(Location::default()));
        assert_eq!(patch.rooms, None);
    }

    #[test]
    fn apply_leaves_omitted_fields_untouched() {
        let mut original = ApartmentDraft::from_form(&lakeview_form()).unwrap();
        original.description = Some("Corner unit".into());

        let patch = ApartmentPatch::from_form(&form(&[("price", "1500")])).unwrap();
        let merged = original.clone().apply(patch);

        assert_eq!(merged.price, 1500.0);
        assert_eq!(merged.unit_name, original.unit_name);
        assert_eq!(merged.description, original.description);
        assert_eq!(merged.rooms, original.rooms);
    }

    #[test]
    fn apply_replaces_whole_location() {
        let mut original = ApartmentDraft::from_form(&lakeview_form()).unwrap();
        original.location = Location {
            address: Some("1 Main St".into()),
            city: Some("Springfield".into()),
        };
        let patch =
            ApartmentPatch::from_form(&form(&[("location", r#"{"city": "Shelbyville"}"#)]))
                .unwrap();
        let merged = original.apply(patch);
        assert_eq!(
            merged.location,
            Location {
                address: None,
                city: Some("Shelbyville".into()),
            }
        );
    }

    #[test]
    fn validate_catches_invalid_merged_record() {
        let mut draft = ApartmentDraft::from_form(&lakeview_form()).unwrap();
        draft.project = " ".into();
        draft.rooms = Some(0);
        let errors = messages(draft.validate().unwrap_err());
        assert_eq!(
            errors,
            vec!["project is required.", "rooms must be greater than 0."]
        );
    }

    #[test]
    fn nul_bytes_are_rejected_per_field() {
        let mut input = lakeview_form();
        input.unit_name = Some("A\01".into());
        input.description = Some("bad\0byte".into());
        let errors = messages(ApartmentDraft::from_form(&input).unwrap_err());
        assert_eq!(
            errors,
            vec![
                "unitName must not contain NUL characters.",
                "description must not contain NUL characters.",
            ]
        );
    }

    #[test]
    fn nul_escape_inside_location_is_rejected() {
        let errors = messages(
            ApartmentPatch::from_form(&form(&[("location", r#"{"city":"a\u0000b"}"#)]))
                .unwrap_err(),
        );
        assert_eq!(errors, vec!["location must not contain NUL characters."]);
    }

    #[test]
    fn json_body_maps_onto_form() {
        let body = serde_json::json!({
            "unitName": "A1",
            "unitNumber": 101,
            "project": "Lakeview",
            "price": 1200.5,
            "description": null,
            "location": {"address": "12 Shore Rd", "city": "Lakeside"},
            "featured": true,
        });
        let form = ApartmentForm::from_json(&body).unwrap();
        assert_eq!(form.unit_number.as_deref(), Some("101"));
        assert_eq!(form.price.as_deref(), Some("1200.5"));
        assert_eq!(form.description.as_deref(), Some(""));

        let draft = ApartmentDraft::from_form(&form).unwrap();
        assert_eq!(draft.price, 1200.5);
        assert_eq!(draft.description, None);
        assert_eq!(draft.location.city.as_deref(), Some("Lakeside"));
    }

    #[test]
    fn json_location_may_be_a_string() {
        let body = serde_json::json!({"location": r#"{"city":"Lakeside"}"#});
        let patch = ApartmentPatch::from_form(&ApartmentForm::from_json(&body).unwrap()).unwrap();
        assert_eq!(patch.location.unwrap().city.as_deref(), Some("Lakeside"));
    }

    #[test]
    fn json_body_rejects_structured_values_for_scalar_fields() {
        let body = serde_json::json!({"price": [1, 2], "rooms": {"n": 2}, "tags": [1]});
        let errors = messages(ApartmentForm::from_json(&body).unwrap_err());
        assert_eq!(
            errors,
            vec![
                "price must be a string or a number.",
                "rooms must be a string or a number.",
            ]
        );
    }

    #[test]
    fn json_body_must_be_an_object() {
        assert_matches!(
            ApartmentForm::from_json(&serde_json::json!([1, 2])),
            Err(CoreError::Validation(errors)) if errors.len() == 1
        );
    }

    #[test]
    fn whole_number_parsing() {
        assert_eq!(parse_whole_number("3"), Ok(3));
        assert_eq!(parse_whole_number("3.0"), Ok(3));
        assert!(parse_whole_number("3.5").is_err());
        assert!(parse_whole_number("99999999999").is_err());
    }
}
