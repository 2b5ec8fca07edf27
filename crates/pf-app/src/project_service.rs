//! Project loading, saving, validation, and introspection.

use pf_project::ProjectError;
use pf_project::schema::{BatchDef, FeedstockDef, Project};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Summary of a batch definition for listing.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub id: String,
    pub name: String,
    pub feedstock: String,
    pub temperature_c: f64,
    pub sequence: String,
    pub has_recycle: bool,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a project from a YAML or JSON file, keyed on extension.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let result = if is_json(path) {
        pf_project::load_json(path)
    } else {
        pf_project::load_yaml(path)
    };

    result.map_err(|err| match err {
        ProjectError::Io(source) => AppError::ProjectFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Save a project to a YAML or JSON file, keyed on extension.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    let result = if is_json(path) {
        pf_project::save_json(path, project)
    } else {
        pf_project::save_yaml(path, project)
    };

    result.map_err(|err| match err {
        ProjectError::Io(source) => AppError::ProjectFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Validate a project beyond the schema checks: a runnable project needs
/// at least one batch.
pub fn validate_project(project: &Project) -> AppResult<()> {
    pf_project::validate_project(project)?;

    if project.batches.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one batch".to_string(),
        ));
    }

    Ok(())
}

/// Fetch a batch definition by id.
pub fn get_batch<'a>(project: &'a Project, batch_id: &str) -> AppResult<&'a BatchDef> {
    project
        .batches
        .iter()
        .find(|b| b.id == batch_id)
        .ok_or_else(|| AppError::BatchNotFound(batch_id.to_string()))
}

/// List all batches in the project with summaries.
pub fn list_batches(project: &Project) -> Vec<BatchSummary> {
    project
        .batches
        .iter()
        .map(|batch| BatchSummary {
            id: batch.id.clone(),
            name: batch.name.clone(),
            feedstock: describe_feedstock(&batch.feedstock),
            temperature_c: batch.reactor.temperature_c,
            sequence: batch.layout.sequence.clone(),
            has_recycle: batch.recycle.is_some(),
        })
        .collect()
}

fn describe_feedstock(feedstock: &FeedstockDef) -> String {
    match feedstock {
        FeedstockDef::Pure { polymer } => polymer.clone(),
        FeedstockDef::Mixed {
            hdpe_pct,
            ldpe_pct,
            pp_pct,
        } => format!("Mixed {}/{}/{}", hdpe_pct, ldpe_pct, pp_pct),
    }
}
