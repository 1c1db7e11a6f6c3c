use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::renderers::tui::Page;
use crate::presentation::ViewMode;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, None | Some(Commands::Browse { .. }));
    logging::init(cli.log_level, cli.log_file.as_deref(), interactive)?;

    let ctx = ExecutionContext::new(cli.content.as_deref(), cli.config.as_deref(), cli.format)?;

    let Some(command) = cli.command else {
        return handlers::browse::handle(&ctx, Page::Home);
    };

    match command {
        Commands::Browse { page } => handlers::browse::handle(&ctx, page.into()),

        Commands::Projects { category, mode } => {
            handlers::projects::handle(&ctx, &category, mode.into())
        }

        Commands::Project { id, mode } => handlers::project::handle(&ctx, &id, mode.into()),

        Commands::Skills { category, mode } => {
            handlers::skills::handle(&ctx, &category, mode.into())
        }

        Commands::Experience { mode } => handlers::experience::handle(&ctx, mode.into()),

        Commands::About => handlers::about::handle(&ctx, ViewMode::Standard),

        Commands::Contact {
            name,
            email,
            subject,
            message,
            endpoint,
        } => handlers::contact::handle(
            &ctx,
            folio_types::ContactMessage {
                name,
                email,
                subject,
                message,
            },
            endpoint.as_deref(),
        ),

        Commands::Check => handlers::check::handle(&ctx),
    }
}
