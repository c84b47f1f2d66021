//! Object-storage bucket names and key conventions.
//!
//! Pure string functions, no storage SDK dependency. Images live at
//! `{public_base_url}/{bucket}/{key}` where `key` is a fresh UUID.

use uuid::Uuid;

pub const WORKOUT_PLAN_BUCKET: &str = "workout-plan";

pub const EDUCATION_RESOURCE_BUCKET: &str = "education-resource";

/// A new, never-before-used object key.
pub fn new_object_key() -> String {
    Uuid::new_v4().to_string()
}

pub fn public_url(public_base_url: &str, bucket: &str, key: &str) -> String {
    format!("{}/{bucket}/{key}", public_base_url.trim_end_matches('/'))
}

/// Extract the object key from a stored public URL by locating the
/// `"{bucket}/"` segment. Returns `None` if the segment is absent or
/// nothing follows it.
pub fn key_from_url<'a>(bucket: &str, url: &'a str) -> Option<&'a str> {
    let marker = format!("{bucket}/");
    let (_, rest) = url.split_once(&marker)?;
    // A later occurrence of the marker ends the key.
    let key = rest.split(&marker).next().unwrap_or(rest);
    if key.is_empty() { None } else { Some(key) }
}
