use eyre::Result;
use kinetic_admin::card::DELETE_CONFIRMATION;
use kinetic_admin::form::education_resource::EducationResourceForm;
use kinetic_admin::form::{EntityForm, submit};
use kinetic_admin::list::ListView;
use kinetic_admin::sync::SyncWorkflow;
use kinetic_core::entity::Lookup;
use kinetic_core::image::ImageFile;
use kinetic_core::models::education_resource::EducationResource;

use super::{Backend, confirm, report_cleanup, saved};
use crate::cli::{ResourceArgs, ResourceCommand};
use crate::render;

pub async fn run(backend: &Backend, action: ResourceCommand) -> Result<()> {
    let mut list =
        ListView::<EducationResource>::new(backend.rest.clone(), backend.rest.clone());
    let workflow =
        SyncWorkflow::<EducationResource>::new(backend.rest.clone(), backend.storage.clone());
    list.load().await?;

    match action {
        ResourceCommand::List { search } => {
            if let Some(query) = search {
                list.set_query(query);
            }
            let cards = list.cards();
            if cards.is_empty() {
                println!("{}", list.empty_message());
            }
            for card in cards {
                println!("{}", render::card(&card.summary()));
            }
        }
        ResourceCommand::Create(args) => {
            let mut form = list.create_form();
            apply(&mut form, args).await?;
            let resource = saved(submit(&mut form, &workflow, &list.store().downgrade()).await)?;
            println!(
                "Created education resource {}",
                resource.post_id.unwrap_or_default()
            );
        }
        ResourceCommand::Edit { id, fields } => {
            let card = list
                .card(&id)
                .ok_or_else(|| eyre::eyre!("no education resource with id {id}"))?;
            let mut form = card.edit_form(list.lookups().to_vec(), &workflow).await?;
            apply(&mut form, fields).await?;
            let outcome = submit(&mut form, &workflow, &list.store().downgrade()).await;
            report_cleanup(&workflow).await;
            saved(outcome)?;
            println!("Updated education resource {id}");
        }
        ResourceCommand::Delete { id, yes } => {
            let card = list
                .card(&id)
                .ok_or_else(|| eyre::eyre!("no education resource with id {id}"))?;
            if !yes && !confirm(DELETE_CONFIRMATION)? {
                println!("Cancelled.");
                return Ok(());
            }
            card.delete(&workflow).await?;
            report_cleanup(&workflow).await;
            println!("Deleted education resource {id}");
        }
    }
    Ok(())
}

async fn apply(form: &mut EducationResourceForm, args: ResourceArgs) -> Result<()> {
    if let Some(v) = args.title_en {
        form.title_en = v;
    }
    if let Some(v) = args.title_ms {
        form.title_ms = v;
    }
    if let Some(v) = args.content_en {
        form.content_en = v;
    }
    if let Some(v) = args.content_ms {
        form.content_ms = v;
    }
    if let Some(v) = args.created_by {
        form.created_by = v;
    }
    if let Some(v) = args.updated_by {
        form.last_updated_by = v;
    }

    // Accept a category name as well as an id.
    if let Some(wanted) = args.category {
        let id = form
            .category_options()
            .iter()
            .find(|c| c.id() == wanted || c.name().eq_ignore_ascii_case(&wanted))
            .map_or(wanted.clone(), |c| c.id().to_string());
        form.category_id = Some(id);
    }

    if let Some(path) = args.image {
        form.select_image(Some(ImageFile::read(&path).await?));
    }
    Ok(())
}
