use eyre::Result;
use kinetic_admin::card::DELETE_CONFIRMATION;
use kinetic_admin::form::workout_plan::{TargetMode, WorkoutPlanForm};
use kinetic_admin::form::{EntityForm, submit};
use kinetic_admin::list::ListView;
use kinetic_admin::sync::SyncWorkflow;
use kinetic_core::image::ImageFile;
use kinetic_core::models::exercise::ExerciseTarget;
use kinetic_core::models::workout_plan::WorkoutPlan;

use super::{Backend, confirm, report_cleanup, saved};
use crate::cli::{PlanArgs, PlanCommand};
use crate::render;

pub async fn run(backend: &Backend, action: PlanCommand) -> Result<()> {
    let mut list = ListView::<WorkoutPlan>::new(backend.rest.clone(), backend.rest.clone());
    let workflow = SyncWorkflow::<WorkoutPlan>::new(backend.rest.clone(), backend.storage.clone());
    list.load().await?;

    match action {
        PlanCommand::List { search } => {
            if let Some(query) = search {
                list.set_query(query);
            }
            let cards = list.cards();
            if cards.is_empty() {
                println!("{}", list.empty_message());
            }
            for card in cards {
                println!("{}", render::card(&card.summary(list.lookups())));
            }
        }
        PlanCommand::Create(args) => {
            let mut form = list.create_form();
            apply(&mut form, args).await?;
            let plan = saved(submit(&mut form, &workflow, &list.store().downgrade()).await)?;
            println!("Created workout plan {}", plan.plan_id.unwrap_or_default());
        }
        PlanCommand::Edit { id, fields } => {
            let card = list
                .card(&id)
                .ok_or_else(|| eyre::eyre!("no workout plan with id {id}"))?;
            let mut form = card.edit_form(list.lookups().to_vec(), &workflow).await?;
            apply(&mut form, fields).await?;
            let outcome = submit(&mut form, &workflow, &list.store().downgrade()).await;
            report_cleanup(&workflow).await;
            saved(outcome)?;
            println!("Updated workout plan {id}");
        }
        PlanCommand::Delete { id, yes } => {
            let card = list
                .card(&id)
                .ok_or_else(|| eyre::eyre!("no workout plan with id {id}"))?;
            if !yes && !confirm(DELETE_CONFIRMATION)? {
                println!("Cancelled.");
                return Ok(());
            }
            card.delete(&workflow).await?;
            report_cleanup(&workflow).await;
            println!("Deleted workout plan {id}");
        }
    }
    Ok(())
}

async fn apply(form: &mut WorkoutPlanForm, args: PlanArgs) -> Result<()> {
    if let Some(v) = args.title_en {
        form.title_en = v;
    }
    if let Some(v) = args.title_ms {
        form.title_ms = v;
    }
    if let Some(v) = args.intro_en {
        form.introduction_en = v;
    }
    if let Some(v) = args.intro_ms {
        form.introduction_ms = v;
    }
    if let Some(v) = args.minutes {
        form.estimated_time_minute = v;
    }
    if let Some(v) = args.difficulty {
        form.difficulty = v;
    }

    if !args.exercises.is_empty() {
        form.clear_exercises();
        for exercise in args.exercises {
            let row_id = form.add_exercise();
            let (mode, value) = match exercise.target {
                ExerciseTarget::Reps { count } => (TargetMode::Reps, count),
                ExerciseTarget::Timed { seconds } => (TargetMode::Timed, seconds),
            };
            form.set_target_mode(row_id, mode);
            if let Some(row) = form.row_mut(row_id) {
                row.exercise_id = Some(exercise.exercise_id);
                row.set_value(Some(value));
            }
        }
    }

    if let Some(path) = args.image {
        form.select_image(Some(ImageFile::read(&path).await?));
    }
    Ok(())
}
