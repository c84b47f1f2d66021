use std::sync::Arc;

use kinetic_core::entity::{Entity, find_lookup};
use kinetic_core::image::ImageFile;
use kinetic_core::models::education_category::EducationCategory;
use kinetic_core::models::education_resource::EducationResource;
use kinetic_storage::error::StorageError;
use kinetic_storage::store::ObjectStore;

use super::{EntityForm, FieldErrors, FormMode, FormState, field, require_text};

/// Create/edit form of an education resource.
pub struct EducationResourceForm {
    state: FormState<EducationResource>,
    categories: Vec<EducationCategory>,
    pub title_en: String,
    pub title_ms: String,
    pub content_en: String,
    pub content_ms: String,
    pub category_id: Option<String>,
    /// Attribution written on create.
    pub created_by: String,
    /// Attribution written on edit. Starts empty.
    pub last_updated_by: String,
}

impl EducationResourceForm {
    pub fn new(categories: Vec<EducationCategory>) -> Self {
        Self {
            state: FormState::create(),
            categories,
            title_en: String::new(),
            title_ms: String::new(),
            content_en: String::new(),
            content_ms: String::new(),
            category_id: None,
            created_by: String::new(),
            last_updated_by: String::new(),
        }
    }

    /// An edit form seeded from `resource`, with its stored image
    /// downloaded into the image input.
    pub async fn edit(
        resource: Arc<EducationResource>,
        categories: Vec<EducationCategory>,
        storage: &dyn ObjectStore,
    ) -> Result<Self, StorageError> {
        let image = storage
            .download(EducationResource::BUCKET, resource.image_url())
            .await?;
        Ok(Self::from_existing(resource, categories, image))
    }

    pub fn from_existing(
        resource: Arc<EducationResource>,
        categories: Vec<EducationCategory>,
        image: ImageFile,
    ) -> Self {
        Self {
            categories,
            title_en: resource.title_en.clone(),
            title_ms: resource.title_ms.clone(),
            content_en: resource.content_en.clone(),
            content_ms: resource.content_ms.clone(),
            category_id: Some(resource.category_id.clone()),
            created_by: resource.created_by.clone(),
            last_updated_by: String::new(),
            state: FormState::edit(resource, image),
        }
    }

    pub fn category_options(&self) -> &[EducationCategory] {
        &self.categories
    }

    fn category(&self, id: &str) -> Option<EducationCategory> {
        find_lookup(&self.categories, id).cloned()
    }
}

impl EntityForm for EducationResourceForm {
    type Entity = EducationResource;

    fn state(&self) -> &FormState<EducationResource> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState<EducationResource> {
        &mut self.state
    }

    fn validate_fields(&self, errors: &mut FieldErrors) {
        require_text(errors, field::TITLE_EN, &self.title_en);
        require_text(errors, field::TITLE_MS, &self.title_ms);
        require_text(errors, field::CONTENT_EN, &self.content_en);
        require_text(errors, field::CONTENT_MS, &self.content_ms);
        match self.category_id.as_deref() {
            Some(id) if find_lookup(&self.categories, id).is_some() => {}
            Some(_) | None => {
                errors.insert(field::CATEGORY_ID, "Please select a category".to_string());
            }
        }
    }

    fn draft(&self) -> EducationResource {
        let original = self.state.original();
        let last_updated_by = match self.state.mode() {
            FormMode::Create => None,
            FormMode::Edit { .. } => Some(self.last_updated_by.trim().to_string()),
        };
        EducationResource {
            post_id: original.and_then(|r| r.post_id.clone()),
            title_en: self.title_en.trim().to_string(),
            title_ms: self.title_ms.trim().to_string(),
            content_en: self.content_en.trim().to_string(),
            content_ms: self.content_ms.trim().to_string(),
            category_id: self.category_id.clone().unwrap_or_default(),
            image_url: String::new(),
            created_by: self.created_by.trim().to_string(),
            last_updated_by,
            created_date: original.and_then(|r| r.created_date),
            last_updated_date: None,
            category_dto: None,
            likes: Vec::new(),
        }
    }

    /// Resolve the category from the lookup. A fresh resource has no likes.
    fn decorate(&self, mut saved: EducationResource) -> EducationResource {
        saved.category_dto = self.category(&saved.category_id);
        if matches!(self.state.mode(), FormMode::Create) {
            saved.likes.clear();
        }
        saved
    }
}
