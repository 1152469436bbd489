#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Email relay API server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use postmark_relay::{
    domain::communication::mailer::MailRelay,
    infrastructure::{
        config::ContextProperties,
        email::postmark::{PostmarkConfig, PostmarkTransport},
        http::{HttpServer, HttpServerConfig},
    },
};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The Postmark configuration
    #[clap(flatten)]
    pub postmark: PostmarkConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = Arc::new(ContextProperties::from(&args.postmark));
    let transport = Arc::new(PostmarkTransport::new(&args.postmark));
    let mailer = MailRelay::new(config, transport);

    info!("starting email relay on port {}", args.server.port);

    HttpServer::new(mailer, args.server).await?.run().await
}
