use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;
use anyhow::{Context, Result};

pub fn handle(ctx: &ExecutionContext, mode: ViewMode) -> Result<()> {
    let entries = ctx
        .block_on(ctx.site().experience())?
        .context("Could not load experience")?;

    ctx.render(presenters::present_experience(&entries), mode)
}
