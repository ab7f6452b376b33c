use anyhow::Result;
use tracing::info;

use wirewatch::analysis::PassthroughAnalyzer;
use wirewatch::environment::get_env_var_as_u16;
use wirewatch::logging::configure_logging;
use wirewatch::sources::{self, HEADLINE_LIMIT};
use wirewatch::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();

    let state = AppState {
        client: sources::create_http_client()?,
        sources: sources::sources(),
        analyzer: Box::new(PassthroughAnalyzer),
        limit: HEADLINE_LIMIT,
    };

    let port = get_env_var_as_u16("PORT", 8080);
    info!(
        "Serving {} headline sources on port {}",
        state.sources.len(),
        port
    );

    web::serve(state, port).await
}
