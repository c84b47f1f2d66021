//! Entity forms.
//!
//! A form holds the user's in-progress values, validates them without any
//! network call, and hands a [`Submission`] to the sync workflow. The result
//! is reconciled into the list's store and reported as a [`SubmitOutcome`].

pub mod education_resource;
pub mod image;
pub mod workout_plan;

use std::collections::BTreeMap;
use std::sync::Arc;

use kinetic_core::entity::Entity;
use kinetic_core::image::ImageFile;
use kinetic_core::store::WeakStore;

use crate::error::SyncError;
use crate::sync::SyncWorkflow;

use self::image::ImageField;

/// Field keys used in [`FieldErrors`].
pub mod field {
    pub const TITLE_EN: &str = "titleEn";
    pub const TITLE_MS: &str = "titleMs";
    pub const ESTIMATED_TIME_MINUTE: &str = "estimatedTimeMinute";
    pub const INTRODUCTION_EN: &str = "introductionEn";
    pub const INTRODUCTION_MS: &str = "introductionMs";
    pub const EXERCISE_LIST: &str = "exerciseList";
    pub const CONTENT_EN: &str = "contentEn";
    pub const CONTENT_MS: &str = "contentMs";
    pub const CATEGORY_ID: &str = "categoryId";
    pub const CREATED_BY: &str = "createdBy";
    pub const LAST_UPDATED_BY: &str = "lastUpdatedBy";
    pub const IMAGE_FILE: &str = "imageFile";
}

pub const REQUIRED: &str = "This field is required";

/// Validation messages keyed by field.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub(crate) fn require_text(errors: &mut FieldErrors, key: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(key, REQUIRED.to_string());
    }
}

pub enum FormMode<E> {
    Create,
    Edit { original: Arc<E> },
}

/// What happened to one press of the submit button.
#[derive(Debug)]
pub enum SubmitOutcome<E> {
    /// Saved; the store is updated and the form can close.
    Saved(E),
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// A submission from this form is still in flight.
    Busy,
    /// The workflow failed. The form keeps its values and shows the message.
    Failed(String),
}

/// State every entity form carries besides its own fields.
pub struct FormState<E> {
    mode: FormMode<E>,
    image: ImageField,
    submitting: bool,
    notification: Option<String>,
    errors: FieldErrors,
}

impl<E: Entity> FormState<E> {
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create, ImageField::default())
    }

    pub fn edit(original: Arc<E>, image: ImageFile) -> Self {
        let field = ImageField::seeded(original.image_url(), image);
        Self::with_mode(FormMode::Edit { original }, field)
    }

    fn with_mode(mode: FormMode<E>, image: ImageField) -> Self {
        Self {
            mode,
            image,
            submitting: false,
            notification: None,
            errors: FieldErrors::new(),
        }
    }

    pub fn mode(&self) -> &FormMode<E> {
        &self.mode
    }

    pub fn original(&self) -> Option<&Arc<E>> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit { original } => Some(original),
        }
    }

    pub fn image(&self) -> &ImageField {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut ImageField {
        &mut self.image
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

struct UpdateContext {
    original_url: String,
    replaced: bool,
}

/// A validated payload on its way through the sync workflow.
pub struct Submission<E> {
    draft: E,
    image: Option<ImageFile>,
    update: Option<UpdateContext>,
}

impl<E: Entity> Submission<E> {
    pub fn draft(&self) -> &E {
        &self.draft
    }

    pub fn is_update(&self) -> bool {
        self.update.is_some()
    }

    pub async fn run(self, workflow: &SyncWorkflow<E>) -> Result<E, SyncError> {
        match self.update {
            None => workflow.create(self.draft, self.image.as_ref()).await,
            Some(ctx) => {
                workflow
                    .update(self.draft, self.image.as_ref(), &ctx.original_url, ctx.replaced)
                    .await
            }
        }
    }
}

/// Shared submit flow of the entity forms.
pub trait EntityForm {
    type Entity: Entity;

    fn state(&self) -> &FormState<Self::Entity>;

    fn state_mut(&mut self) -> &mut FormState<Self::Entity>;

    /// Validate the entity-specific fields.
    fn validate_fields(&self, errors: &mut FieldErrors);

    /// Build the outgoing payload. The image URL is filled in by the workflow.
    fn draft(&self) -> Self::Entity;

    /// Adjust a saved entity before it enters the store.
    fn decorate(&self, saved: Self::Entity) -> Self::Entity {
        saved
    }

    fn is_edit(&self) -> bool {
        self.state().original().is_some()
    }

    fn select_image(&mut self, file: Option<ImageFile>) {
        self.state_mut().image_mut().select(file);
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        self.validate_fields(&mut errors);
        self.state().image().validate(&mut errors);
        errors
    }

    /// Validate and enter the loading state.
    ///
    /// Returns the outcome to report instead when the form is busy or
    /// invalid; in both cases nothing may be sent.
    fn begin_submit(&mut self) -> Result<Submission<Self::Entity>, SubmitOutcome<Self::Entity>> {
        if self.state().is_submitting() {
            return Err(SubmitOutcome::Busy);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.state_mut().errors = errors.clone();
            return Err(SubmitOutcome::Invalid(errors));
        }

        let state = self.state();
        let update = state.original().map(|original| UpdateContext {
            original_url: original.image_url().to_string(),
            replaced: state.image().preview().is_replacement(),
        });
        let submission = Submission {
            draft: self.draft(),
            image: state.image().file().cloned(),
            update,
        };

        let state = self.state_mut();
        state.errors.clear();
        state.notification = None;
        state.submitting = true;
        Ok(submission)
    }

    /// Leave the loading state and apply the workflow's result.
    fn finish_submit(
        &mut self,
        result: Result<Self::Entity, SyncError>,
        store: &WeakStore<Self::Entity>,
    ) -> SubmitOutcome<Self::Entity> {
        self.state_mut().submitting = false;
        let kind = <Self::Entity as Entity>::KIND;

        let saved = match result {
            Ok(saved) => self.decorate(saved),
            Err(e) => {
                tracing::warn!(kind, error = %e, "submission failed");
                let message = format!("Could not save {kind}: {e}");
                self.state_mut().notification = Some(message.clone());
                return SubmitOutcome::Failed(message);
            }
        };

        match store.upgrade() {
            Some(store) => match (self.state().mode(), saved.id()) {
                (FormMode::Create, _) => {
                    store.append(saved.clone());
                }
                (FormMode::Edit { .. }, Some(id)) => {
                    store.patch_one(id, saved.clone());
                }
                (FormMode::Edit { .. }, None) => {
                    tracing::warn!(kind, "updated entity came back without an id");
                }
            },
            None => tracing::debug!(kind, "list closed before the submission finished; result dropped"),
        }
        SubmitOutcome::Saved(saved)
    }
}

/// Validate, run the workflow and reconcile the store in one go.
///
/// A saved update whose replacement image failed to upload is still
/// `Saved`; the form's notification says so.
pub async fn submit<F: EntityForm>(
    form: &mut F,
    workflow: &SyncWorkflow<F::Entity>,
    store: &WeakStore<F::Entity>,
) -> SubmitOutcome<F::Entity> {
    let submission = match form.begin_submit() {
        Ok(submission) => submission,
        Err(outcome) => return outcome,
    };
    let uploads_before = workflow.upload_log().len();
    let result = submission.run(workflow).await;
    let outcome = form.finish_submit(result, store);

    if matches!(outcome, SubmitOutcome::Saved(_))
        && let Some(failure) = workflow.upload_log().entries().get(uploads_before)
    {
        form.state_mut().notification = Some(format!(
            "Saved, but the new image could not be uploaded ({}); the previous image was kept",
            failure.error
        ));
    }
    outcome
}
