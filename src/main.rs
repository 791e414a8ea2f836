use clap::{Parser, Subcommand};
use homepage::config::{load_dotenv, SiteConfig};
use homepage::{loaders, PageClient, Server};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "homepage", version, about = "Render or serve the homepage")]
struct Cli {
    /// Viewport width the page is rendered for
    #[arg(long, global = true)]
    width: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page once (default)
    Render {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the page and static assets
    Serve,
}

#[tokio::main]
async fn main() -> homepage::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    load_dotenv(std::path::Path::new("."));

    let cli = Cli::parse();
    let mut builder = SiteConfig::builder();
    if let Some(width) = cli.width {
        builder = builder.viewport_width(width);
    }
    let config = builder.build();

    match cli.command.unwrap_or(Command::Render { out: None }) {
        Command::Render { out } => {
            let client = PageClient::new();
            let page = loaders::render_page(&client, &config).await?;
            match out {
                Some(path) => tokio::fs::write(path, page).await?,
                None => println!("{}", page),
            }
            Ok(())
        }
        Command::Serve => Server::new(config).run().await,
    }
}
