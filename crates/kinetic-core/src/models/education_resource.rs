use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::models::education_category::EducationCategory;
use crate::storage_keys;

/// An education post shown in the mobile app's learning section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub title_en: String,
    pub title_ms: String,
    pub content_en: String,
    pub content_ms: String,
    pub category_id: String,
    pub image_url: String,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(
        default,
        with = "crate::models::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<jiff::Timestamp>,
    #[serde(
        default,
        with = "crate::models::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_date: Option<jiff::Timestamp>,
    /// Resolved from the category lookup; never sent back to the server.
    #[serde(default, skip_serializing)]
    pub category_dto: Option<EducationCategory>,
    /// Likes are only counted, their shape is opaque to the admin client.
    #[serde(rename = "educationPostLikeDtos", default, skip_serializing)]
    pub likes: Vec<serde_json::Value>,
}

impl EducationResource {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category_dto.as_ref().map(|c| c.name.as_str())
    }
}

impl Entity for EducationResource {
    type Lookup = EducationCategory;

    const KIND: &'static str = "education resource";
    const BUCKET: &'static str = storage_keys::EDUCATION_RESOURCE_BUCKET;
    const RESOURCE: &'static str = "/education-post";

    fn id(&self) -> Option<&str> {
        self.post_id.as_deref()
    }

    fn image_url(&self) -> &str {
        &self.image_url
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title_en.as_str(), self.title_ms.as_str()];
        if let Some(name) = self.category_name() {
            fields.push(name);
        }
        fields
    }
}
