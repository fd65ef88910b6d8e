// ── Pre-submit validation ──
//
// Cheap structural checks run before a create/update hits the wire,
// so obviously broken records fail locally with a field-level error.

use forecourt_api::types::{
    AssetCreateUpdate, StationCreateUpdate, UserCreateUpdate, WorkOrderCreateUpdate,
};

use crate::error::Error;

fn required(field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Minimal shape check, not RFC 5322: one `@` with text on both sides
/// and a dotted domain.
fn email(field: &'static str, value: &str) -> Result<(), Error> {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(Error::validation(field, "not a valid email address"));
    }
    Ok(())
}

pub fn work_order(record: &WorkOrderCreateUpdate) -> Result<(), Error> {
    required("title", &record.title)
}

pub fn user(record: &UserCreateUpdate) -> Result<(), Error> {
    required("first_name", &record.first_name)?;
    required("last_name", &record.last_name)?;
    required("email", &record.email)?;
    email("email", &record.email)
}

pub fn asset(record: &AssetCreateUpdate) -> Result<(), Error> {
    required("name", &record.name)
}

pub fn station(record: &StationCreateUpdate) -> Result<(), Error> {
    required("name", &record.name)
}
