use std::sync::Arc;

use kinetic_core::entity::Entity;
use kinetic_core::models::education_category::EducationCategory;
use kinetic_core::models::education_resource::EducationResource;
use kinetic_core::models::exercise::Exercise;
use kinetic_core::models::workout_plan::WorkoutPlan;
use kinetic_core::store::EntityStore;
use kinetic_storage::error::StorageError;

use crate::error::SyncError;
use crate::form::education_resource::EducationResourceForm;
use crate::form::workout_plan::WorkoutPlanForm;
use crate::sync::SyncWorkflow;

pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete? This action is destructive and irreversible.";

/// What a card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    /// Extra lines under the title, e.g. exercises or likes.
    pub details: Vec<String>,
}

/// Display of one entity with its edit and delete actions.
pub struct ItemCard<E: Entity> {
    entity: Arc<E>,
    store: EntityStore<E>,
}

impl<E: Entity> ItemCard<E> {
    pub fn new(entity: Arc<E>, store: EntityStore<E>) -> Self {
        Self { entity, store }
    }

    pub fn entity(&self) -> &Arc<E> {
        &self.entity
    }

    /// Delete the entity and its image, then drop it from the store.
    pub async fn delete(&self, workflow: &SyncWorkflow<E>) -> Result<bool, SyncError> {
        let deleted = workflow.delete(&self.entity).await?;
        if deleted && let Some(id) = self.entity.id() {
            self.store.remove_one(id);
        }
        Ok(deleted)
    }
}

impl ItemCard<WorkoutPlan> {
    pub async fn edit_form(
        &self,
        exercises: Vec<Exercise>,
        workflow: &SyncWorkflow<WorkoutPlan>,
    ) -> Result<WorkoutPlanForm, StorageError> {
        WorkoutPlanForm::edit(Arc::clone(&self.entity), exercises, workflow.storage()).await
    }

    pub fn summary(&self, exercises: &[Exercise]) -> CardSummary {
        let plan = &self.entity;
        let details = plan
            .exercises
            .iter()
            .map(|entry| {
                let name = exercises
                    .iter()
                    .find(|e| e.exercise_id == entry.exercise_id)
                    .map_or(entry.exercise_id.as_str(), |e| e.name.as_str());
                format!("{name}: {}", entry.target)
            })
            .collect();
        CardSummary {
            id: plan.plan_id.clone(),
            title: plan.title_en.clone(),
            subtitle: format!("{} · {} min", plan.difficulty, plan.estimated_time_minute),
            image_url: plan.image_url.clone(),
            details,
        }
    }
}

impl ItemCard<EducationResource> {
    pub async fn edit_form(
        &self,
        categories: Vec<EducationCategory>,
        workflow: &SyncWorkflow<EducationResource>,
    ) -> Result<EducationResourceForm, StorageError> {
        EducationResourceForm::edit(Arc::clone(&self.entity), categories, workflow.storage()).await
    }

    pub fn summary(&self) -> CardSummary {
        let resource = &self.entity;
        let mut details = Vec::new();
        if let Some(created) = resource.created_date {
            let date = created
                .to_zoned(jiff::tz::TimeZone::UTC)
                .strftime("%b %-d, %Y")
                .to_string();
            details.push(format!("Created {date} by {}", resource.created_by));
        }
        details.push(format!("{} likes", resource.like_count()));
        CardSummary {
            id: resource.post_id.clone(),
            title: resource.title_en.clone(),
            subtitle: resource
                .category_name()
                .unwrap_or(resource.category_id.as_str())
                .to_string(),
            image_url: resource.image_url.clone(),
            details,
        }
    }
}
