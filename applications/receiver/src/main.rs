/// castdeck Receiver - plays album catalogs through a simulated sink
use castdeck_core::AlbumKey;
use castdeck_receiver::{loader, ReceiverConfig, Session, SessionEnd, StartRequest};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "castdeck-receiver")]
#[command(about = "castdeck media receiver playback session", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load catalogs and play an album until it ends or Ctrl-C
    Play {
        /// Configuration file path
        #[arg(short, long, env = "CASTDECK_CONFIG")]
        config: Option<PathBuf>,
        /// Album JSON file (repeatable, added to configured paths)
        #[arg(long = "catalog")]
        catalogs: Vec<PathBuf>,
        /// Band ID of the album to play
        #[arg(long, requires = "album")]
        band: Option<String>,
        /// Album ID of the album to play
        #[arg(long, requires = "band")]
        album: Option<String>,
        /// Track index to start from
        #[arg(short, long)]
        track: Option<usize>,
        /// Stop after the last track instead of wrapping around
        #[arg(long)]
        no_loop: bool,
    },
    /// Print the albums and tracks found in catalog files
    Inspect {
        /// Album JSON files
        #[arg(long = "catalog", required = true)]
        catalogs: Vec<PathBuf>,
        /// Encoding picked when a track offers several
        #[arg(long, default_value = castdeck_core::types::DEFAULT_PREFERRED_FORMAT)]
        format: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "castdeck_receiver=info,castdeck_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config,
            catalogs,
            band,
            album,
            track,
            no_loop,
        } => {
            let mut config = ReceiverConfig::load(config.as_deref())?;
            config.catalog.paths.extend(catalogs);
            if no_loop {
                config.playback.loop_enabled = false;
            }
            config.validate()?;

            let request = StartRequest {
                album: band.zip(album).map(|(b, a)| AlbumKey::new(b, a)),
                track,
            };
            play(&config, &request).await?;
        }
        Commands::Inspect { catalogs, format } => {
            inspect(&catalogs, &format)?;
        }
    }

    Ok(())
}

async fn play(config: &ReceiverConfig, request: &StartRequest) -> anyhow::Result<()> {
    if config.catalog.paths.is_empty() {
        anyhow::bail!("No catalog files given (use --catalog or [catalog] paths)");
    }

    let albums = loader::load_files(&config.catalog.paths, &config.catalog.preferred_format)?;
    tracing::info!("Loaded {} album(s)", albums.len());

    let mut session = Session::new(config);
    let first = session.register_all(albums);
    session.start(request, first.as_ref())?;

    let summary = session.run(shutdown_signal()).await?;
    match summary.end {
        SessionEnd::EndOfAlbum => tracing::info!("Reached end of album"),
        SessionEnd::Shutdown => tracing::info!("Stopped by user"),
    }

    Ok(())
}

fn inspect(paths: &[PathBuf], format: &str) -> anyhow::Result<()> {
    for album in loader::load_files(paths, format)? {
        println!(
            "{}  {} ({} of {} playable)",
            album.key(),
            album.description(),
            album.playable_count(),
            album.len()
        );
        for track in album.tracks() {
            println!(
                "  {:>3}. {}  {}",
                track.number().unwrap_or(0),
                track.title(),
                track.file().unwrap_or("-")
            );
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Ctrl-C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}
