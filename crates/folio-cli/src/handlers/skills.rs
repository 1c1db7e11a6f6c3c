use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;
use anyhow::Result;
use folio_core::CatalogStore;
use folio_types::{CategoryFilter, Skill, SkillCategory};

pub fn handle(ctx: &ExecutionContext, category: &str, mode: ViewMode) -> Result<()> {
    let filter: CategoryFilter<SkillCategory> = CategoryFilter::parse(category)?;

    let mut store = CatalogStore::<Skill>::new();
    store.set_filter(filter);

    let (loaded, soft_skills) = match ctx.block_on(ctx.site().skills())? {
        Ok(set) => (store.apply(Ok(set.skills)), set.soft_skills),
        Err(err) => (store.apply(Err(err)), Vec::new()),
    };

    ctx.render(presenters::present_skill_list(&store, &soft_skills), mode)?;

    loaded?;
    Ok(())
}
