use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use animalcount::{AppState, router};
use fluency_lexicon::Lexicon;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SIZE_WORDS: &str = "data/size_adjectives.csv";
const DEFAULT_ANIMALS: &str = "data/animals.csv";
const MAX_TRANSCRIPT_LEN: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("binding to {}:{}", config.host, config.port);
    info!(
        "using size-adjective list at {}",
        config.size_words_path.display()
    );
    info!("using animal list at {}", config.animals_path.display());

    let start = Instant::now();
    let lexicon = Arc::new(Lexicon::load(
        &config.size_words_path,
        &config.animals_path,
    )?);
    info!(
        "lexicon loaded in {} ms ({} size adjectives, {} animal names)",
        start.elapsed().as_millis(),
        lexicon.size_adjectives.len(),
        lexicon.animals.len()
    );

    let state = AppState {
        lexicon,
        max_transcript_len: MAX_TRANSCRIPT_LEN,
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("invalid listen address");
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    size_words_path: PathBuf,
    animals_path: PathBuf,
}

fn load_config() -> Config {
    let mut cli_size_words: Option<PathBuf> = None;
    let mut cli_animals: Option<PathBuf> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size-words" => {
                if let Some(path) = args.next() {
                    cli_size_words = Some(PathBuf::from(path));
                }
            }
            "--animals" => {
                if let Some(path) = args.next() {
                    cli_animals = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--size-words=") {
                    cli_size_words = Some(PathBuf::from(path));
                } else if let Some(path) = arg.strip_prefix("--animals=") {
                    cli_animals = Some(PathBuf::from(path));
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let size_words_path = cli_size_words
        .or_else(|| env::var("SIZE_WORDS_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SIZE_WORDS));
    let animals_path = cli_animals
        .or_else(|| env::var("ANIMALS_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ANIMALS));

    Config {
        host,
        port,
        size_words_path,
        animals_path,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
