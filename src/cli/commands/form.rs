use anyhow::Result;

use super::generate::resolve_startup;
use crate::cli::GenerationArgs;
use crate::completion::ChatCompletionClient;
use crate::form::FormSession;

pub async fn run_form(generation: GenerationArgs) -> Result<()> {
    let resolved = resolve_startup(&generation)?;
    let client = ChatCompletionClient::new(resolved.client_settings())?;

    let mut session = FormSession::new(resolved, client);
    session.run().await
}
