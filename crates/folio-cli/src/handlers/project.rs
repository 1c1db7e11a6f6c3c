use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;
use anyhow::{Context, Result};

pub fn handle(ctx: &ExecutionContext, id: &str, mode: ViewMode) -> Result<()> {
    let projects = ctx
        .block_on(ctx.site().projects())?
        .context("Could not load projects")?;

    let Some(project) = projects.iter().find(|p| p.id.matches(id)) else {
        anyhow::bail!("Project not found: {}", id);
    };

    ctx.render(presenters::present_project_detail(project), mode)
}
