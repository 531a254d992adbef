use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use recipe_chat_api::application::http::server::http_server::{router, state};
use recipe_chat_api::application::logger::init_logger;
use recipe_chat_api::args::Args;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
