use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let reports = ctx.block_on(ctx.site().check())?;
    let failed = reports.iter().filter(|r| !r.ok).count();

    ctx.render(
        presenters::present_check(&ctx.location().to_string(), &reports),
        ViewMode::Standard,
    )?;

    if failed > 0 {
        anyhow::bail!("{} document(s) failed to load", failed);
    }

    Ok(())
}
