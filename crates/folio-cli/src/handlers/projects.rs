use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;
use anyhow::Result;
use folio_core::CatalogStore;
use folio_types::{CategoryFilter, Project, ProjectCategory};

pub fn handle(ctx: &ExecutionContext, category: &str, mode: ViewMode) -> Result<()> {
    let filter: CategoryFilter<ProjectCategory> = CategoryFilter::parse(category)?;

    let mut store = CatalogStore::<Project>::new();
    store.set_filter(filter);
    let loaded = store.apply(ctx.block_on(ctx.site().projects())?);

    ctx.render(presenters::present_project_list(&store), mode)?;

    let total = loaded?;
    tracing::info!(total, shown = store.filtered_len(), filter = %filter, "listed projects");
    Ok(())
}
