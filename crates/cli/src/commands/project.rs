// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pk_core::identity::current_user_name;
use pk_core::{Access, NewProject, PlanningStore, Project};

use super::{print_output, Context};
use crate::cli::{OutputFormat, ProjectCommand};
use crate::display::format_project_line;
use crate::error::Result;
use crate::schema::ProjectJson;

pub fn run(ctx: &Context, cmd: ProjectCommand) -> Result<()> {
    match cmd {
        ProjectCommand::New {
            key,
            name,
            description,
            owner,
            output,
        } => {
            let owner = owner.or_else(|| Some(current_user_name()));
            let project = create(ctx, &key, &name, description, owner)?;
            print_output(output.output, &ProjectJson::from(&project), |p| {
                format!("Created project {}: {}\n", p.key, p.name)
            })
        }
        ProjectCommand::List { all, output } => {
            let projects = list(ctx, all)?;
            print_list(output.output, &projects)
        }
        ProjectCommand::Archive { key } => {
            let project = archive(ctx, &key)?;
            println!("Archived project {}", project.key);
            Ok(())
        }
    }
}

pub fn create(
    ctx: &Context,
    key: &str,
    name: &str,
    description: Option<String>,
    owner: Option<String>,
) -> Result<Project> {
    let req = NewProject {
        key: key.trim().to_uppercase(),
        name: name.to_string(),
        description,
        owner,
    };
    Ok(ctx.engine().create_project(Access::Allowed, &req)?)
}

/// Projects ordered by key; archived ones only when `include_archived`.
pub fn list(ctx: &Context, include_archived: bool) -> Result<Vec<Project>> {
    let mut projects: Vec<Project> = ctx
        .db
        .list_projects()?
        .into_iter()
        .filter(|p| include_archived || !p.is_archived)
        .collect();
    projects.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(projects)
}

pub fn archive(ctx: &Context, key: &str) -> Result<Project> {
    let engine = ctx.engine();
    let project = engine.project_by_key(&key.trim().to_uppercase())?;
    Ok(engine.archive_project(Access::Allowed, project.id)?)
}

fn print_list(format: OutputFormat, projects: &[Project]) -> Result<()> {
    let json: Vec<ProjectJson> = projects.iter().map(ProjectJson::from).collect();
    print_output(format, &json, |_| {
        if projects.is_empty() {
            return "No projects\n".to_string();
        }
        projects
            .iter()
            .map(|p| format_project_line(p) + "\n")
            .collect()
    })
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
