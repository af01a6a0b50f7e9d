/// Podcastr - terminal podcast player
use anyhow::Context;
use clap::{Parser, Subcommand};
use podcastr_catalog::{CatalogClient, EpisodeQuery};
use podcastr_cli::{
    config::{AppConfig, LogSettings},
    session::{Input, Reply, Session, HELP},
    views::{self, Console, EpisodeListView, PlayerBarView},
};
use podcastr_core::{Episode, EpisodeId};
use podcastr_playback::PlaybackCoordinator;
use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    path::PathBuf,
    rc::Rc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "podcastr=info";

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Listen to the Podcastr episode catalog from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PODCASTR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest episodes
    Episodes {
        /// Number of episodes to fetch
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one episode
    Show {
        /// Episode slug
        id: String,
        /// Print the normalized episode as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch the latest episodes and start a listening session
    Listen {
        /// Number of episodes to fetch
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.log);

    let client = CatalogClient::new(config.catalog.client_config())
        .context("creating episodes API client")?;
    tracing::debug!(base_url = client.base_url(), "Using episodes API");

    match cli.command {
        Commands::Episodes { limit } => {
            let episodes = fetch_latest(&client, limit.unwrap_or(config.catalog.limit)).await?;
            println!("{}", EpisodeListView::new(episodes).render(None));
        }
        Commands::Show { id, json } => {
            let id = EpisodeId::parse(&id)?;
            let episode = client
                .get_episode(&id)
                .await
                .with_context(|| format!("fetching episode {}", id))?;

            if json {
                println!("{}", episode.to_json_pretty()?);
            } else {
                print!("{}", views::render_details(&episode));
            }
        }
        Commands::Listen { limit } => {
            let episodes = fetch_latest(&client, limit.unwrap_or(config.catalog.limit)).await?;
            let coordinator = PlaybackCoordinator::new(config.playback.clone());
            listen(Session::new(coordinator, episodes))?;
        }
    }

    Ok(())
}

fn init_tracing(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr so they never interleave with the views on stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn fetch_latest(client: &CatalogClient, limit: usize) -> anyhow::Result<Vec<Episode>> {
    client
        .list_episodes(&EpisodeQuery::latest(limit))
        .await
        .with_context(|| format!("fetching episodes from {}", client.base_url()))
}

/// Prompt loop; returns on `quit` or end of input
fn listen(mut session: Session) -> anyhow::Result<()> {
    let console: Console<io::Stdout> = Rc::new(RefCell::new(io::stdout()));
    let catalog = session.catalog().to_vec();
    views::attach(session.coordinator_mut(), catalog.clone(), &console);

    tracing::info!(episodes = catalog.len(), "Listening session started");
    println!("{}", EpisodeListView::new(catalog).render(None));
    println!("\n{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("podcastr> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = line
            .parse::<Input>()
            .and_then(|input| session.handle(input));

        match reply {
            Ok(Reply::Applied) => {}
            Ok(Reply::Status) => {
                println!("{}", PlayerBarView.render(&session.coordinator().snapshot()));
            }
            Ok(Reply::Help) => println!("{}", HELP),
            Ok(Reply::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    tracing::info!("Listening session ended");
    Ok(())
}
