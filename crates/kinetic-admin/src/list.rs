use std::sync::Arc;

use kinetic_api::service::{EntityApi, LookupApi};
use kinetic_api::ApiError;
use kinetic_core::entity::{Entity, Lookup};
use kinetic_core::models::education_resource::EducationResource;
use kinetic_core::models::workout_plan::WorkoutPlan;
use kinetic_core::search;
use kinetic_core::store::EntityStore;

use crate::card::ItemCard;
use crate::form::education_resource::EducationResourceForm;
use crate::form::workout_plan::WorkoutPlanForm;

/// The list wrapper of one entity type.
///
/// Owns the canonical [`EntityStore`] and the reference lookup, both
/// fetched once by [`ListView::load`]. Forms and cards it hands out share
/// the same store.
pub struct ListView<E: Entity> {
    api: Arc<dyn EntityApi<E>>,
    lookup_api: Arc<dyn LookupApi<E::Lookup>>,
    store: EntityStore<E>,
    lookups: Vec<E::Lookup>,
    query: String,
    loaded: bool,
}

impl<E: Entity> ListView<E> {
    pub fn new(api: Arc<dyn EntityApi<E>>, lookup_api: Arc<dyn LookupApi<E::Lookup>>) -> Self {
        Self {
            api,
            lookup_api,
            store: EntityStore::new(),
            lookups: Vec::new(),
            query: String::new(),
            loaded: false,
        }
    }

    /// Fetch the collection and the lookup. Later calls are no-ops.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        if self.loaded {
            return Ok(());
        }
        let items = self.api.list().await?;
        let lookups = self.lookup_api.list_lookups().await?;
        tracing::debug!(
            kind = E::KIND,
            items = items.len(),
            lookups = lookups.len(),
            "list loaded"
        );
        self.store.replace(items);
        self.lookups = lookups;
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn store(&self) -> &EntityStore<E> {
        &self.store
    }

    pub fn lookups(&self) -> &[E::Lookup] {
        &self.lookups
    }

    pub fn lookup_name(&self, id: &str) -> Option<&str> {
        self.lookups.iter().find(|l| l.id() == id).map(|l| l.name())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The store filtered by the current query.
    pub fn visible(&self) -> Vec<Arc<E>> {
        search::filter(&self.store.list(), &self.query)
    }

    pub fn cards(&self) -> Vec<ItemCard<E>> {
        self.visible()
            .into_iter()
            .map(|entity| ItemCard::new(entity, self.store.clone()))
            .collect()
    }

    pub fn card(&self, id: &str) -> Option<ItemCard<E>> {
        self.store
            .get(id)
            .map(|entity| ItemCard::new(entity, self.store.clone()))
    }

    pub fn empty_message(&self) -> String {
        format!("Uh oh, your {} list is empty!", E::KIND)
    }
}

impl ListView<WorkoutPlan> {
    pub fn create_form(&self) -> WorkoutPlanForm {
        WorkoutPlanForm::new(self.lookups.clone())
    }
}

impl ListView<EducationResource> {
    pub fn create_form(&self) -> EducationResourceForm {
        EducationResourceForm::new(self.lookups.clone())
    }
}
