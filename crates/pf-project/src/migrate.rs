//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Project;
use pf_process::EquipmentSequence;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut project: Project) -> Result<Project, ProjectError> {
    while project.version < LATEST_VERSION {
        project = migrate_one_version(project)?;
    }
    Ok(project)
}

fn migrate_one_version(project: Project) -> Result<Project, ProjectError> {
    match project.version {
        0 => migrate_v0_to_v1(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files carried bare sequence codes ("S3") where version 1 uses
/// the canonical labels ("S3: Tar+Cat"). Unknown strings are left untouched
/// for validation to reject.
fn migrate_v0_to_v1(mut project: Project) -> Result<Project, ProjectError> {
    for batch in &mut project.batches {
        if let Ok(sequence) = batch.layout.sequence.parse::<EquipmentSequence>() {
            batch.layout.sequence = sequence.key().to_string();
        }
    }

    project.version = 1;
    Ok(project)
}
