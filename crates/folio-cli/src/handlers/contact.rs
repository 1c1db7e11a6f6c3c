use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;
use anyhow::Result;
use folio_core::contact::validate;
use folio_runtime::ContactClient;
use folio_types::ContactMessage;

pub fn handle(ctx: &ExecutionContext, message: ContactMessage, endpoint: Option<&str>) -> Result<()> {
    let errors = validate(&message);
    if !errors.is_empty() {
        ctx.render(presenters::present_contact_invalid(&errors), ViewMode::Standard)?;
        anyhow::bail!("{} field(s) need attention", errors.len());
    }

    let endpoint = match ctx.contact_endpoint(endpoint) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            ctx.render(
                presenters::present_contact_failed(None, err.to_string()),
                ViewMode::Standard,
            )?;
            return Err(err);
        }
    };

    let client = ContactClient::new(endpoint)?;
    match ctx.block_on(client.submit(&message))? {
        Ok(()) => ctx.render(presenters::present_contact_sent(endpoint), ViewMode::Standard),
        Err(err) => {
            tracing::warn!(endpoint, error = %err, "contact submission failed");
            ctx.render(
                presenters::present_contact_failed(Some(endpoint), err.to_string()),
                ViewMode::Standard,
            )?;
            anyhow::bail!("Message was not sent");
        }
    }
}
