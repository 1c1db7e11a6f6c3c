use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;
use anyhow::{Context, Result};

pub fn handle(ctx: &ExecutionContext, mode: ViewMode) -> Result<()> {
    let summary = ctx
        .block_on(ctx.site().summary())?
        .context("Could not load profile")?;

    ctx.render(presenters::present_profile(&summary), mode)
}
