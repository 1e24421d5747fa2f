use clap::{Parser, Subcommand};
use client::{
    config::Config,
    domain::{
        content::{entity::ContentItem, vertical::Vertical},
        shared::ids::ItemId,
    },
    infrastructure::{http::rest_gateway::RestGateway, notify::tracing_notifier::TracingNotifier},
    presentation::viewer::DetailViewer,
};
use std::sync::Arc;

/// Open an item's detail view and react to it from the terminal.
#[derive(Parser, Debug)]
#[command(name = "client", about = "Content platform client")]
struct Cli {
    /// Vertical the item belongs to (video, pic_tour, qafi, mondo_market).
    #[arg(long, default_value = "video")]
    vertical: Vertical,

    /// Item identifier.
    #[arg(long)]
    item: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the item's detail view.
    Show,
    /// Toggle the current user's like.
    Like,
    /// Post a comment.
    Comment {
        /// Comment text.
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,client=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let gateway = Arc::new(RestGateway::new(
        &config.api_base_url,
        config.api_token.clone(),
        config.request_timeout(),
        cli.vertical,
    )?);
    let viewer = DetailViewer::new(
        ContentItem::with_id(ItemId::new(cli.item)),
        gateway,
        Arc::new(TracingNotifier),
        Arc::new(config.session()),
        config.name_ellipsis_length,
    );

    viewer.open().await?;
    match cli.command {
        Command::Show => {}
        Command::Like => {
            let outcome = viewer.like().await?;
            tracing::info!(?outcome, "like toggled");
        }
        Command::Comment { text } => {
            let outcome = viewer.controller().submit_comment(&text).await?;
            tracing::info!(?outcome, "comment submitted");
        }
    }

    println!("{}", serde_json::to_string_pretty(&viewer.view())?);
    Ok(())
}
