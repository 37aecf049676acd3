//! Wiring & DI. Entry point: parse CLI, bootstrap adapters, inject into the client, run UI.
//! No business logic here; the round trip lives in UploadClient.

use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use nearlens::adapters::http::HttpUploadAdapter;
use nearlens::adapters::location::{ExifLocation, FixedLocation, UnavailableLocation};
use nearlens::adapters::mock::MockUploader;
use nearlens::adapters::ui::TerminalNotices;
use nearlens::adapters::ui::tui::{OneShotInput, TuiInputPort};
use nearlens::domain::{Coordinates, UploadRoute};
use nearlens::ports::{InputPort, LocationPort, NoticePort, UploadPort};
use nearlens::shared::config::AppConfig;
use nearlens::usecases::UploadClient;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Find nearby places from a photo and your location
#[derive(Parser)]
#[command(name = "nearlens", version)]
struct Cli {
    /// Base URL of the analysis service (overrides NEARLENS_API_BASE_URL)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Answer with canned places instead of calling the service
    #[arg(long, global = true, action)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Upload one photo and print nearby places
    Analyze {
        /// Photo to upload
        photo: PathBuf,
        #[command(flatten)]
        location: LocationArgs,
        /// Print the raw JSON reply instead of the rendered list
        #[arg(long, action)]
        json: bool,
    },
    /// Menu-driven session (default)
    Interactive {
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Check that the analysis service is reachable
    Status,
}

#[derive(Args, Default)]
struct LocationArgs {
    /// Latitude of your position
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,
    /// Longitude of your position
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,
    /// Read the position from the photo's GPS tags
    #[arg(long, action, conflicts_with_all = ["lat", "lon"])]
    exif: bool,
    /// Post to /upload (file only) instead of /api/upload
    #[arg(long, action)]
    quick: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cli = Cli::parse();
    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config not loaded, using defaults");
        AppConfig::default()
    });

    let base_url = cli
        .api_base_url
        .clone()
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|| cfg.api_base_url_or_default());

    // --- Upload adapter ---
    let uploader: Arc<dyn UploadPort> = if cli.offline {
        warn!("offline mode, using mock uploader");
        Arc::new(MockUploader::new().with_delay(300))
    } else {
        let timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());
        info!(url = %base_url, timeout_secs = timeout.as_secs(), "analysis service");
        Arc::new(HttpUploadAdapter::new(base_url.clone(), timeout)?)
    };

    let command = cli.command.unwrap_or(Command::Interactive {
        location: LocationArgs::default(),
    });

    match command {
        Command::Status => {
            let status = uploader
                .health()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{} ({})", status.message, status.status);
            if !status.is_running() {
                anyhow::bail!("service at {} is not running", base_url);
            }
            Ok(())
        }
        Command::Analyze {
            photo,
            location,
            json,
        } => {
            let client = build_client(&cfg, &location, uploader);
            let input: Arc<dyn InputPort> = Arc::new(OneShotInput::new(client, photo, json));
            input.run().await.map_err(|e| anyhow::anyhow!("{}", e))
        }
        Command::Interactive { location } => {
            nearlens::adapters::ui::init_ui();
            let client = build_client(&cfg, &location, uploader);
            let input: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(client));
            input.run().await.map_err(|e| anyhow::anyhow!("{}", e))
        }
    }
}

/// Pick the location provider: flags, then --exif, then config, else none.
fn build_client(
    cfg: &AppConfig,
    args: &LocationArgs,
    uploader: Arc<dyn UploadPort>,
) -> UploadClient {
    let location: Arc<dyn LocationPort> = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Arc::new(FixedLocation::new(Coordinates::new(lat, lon))),
        _ if args.exif => Arc::new(ExifLocation),
        _ => match cfg.default_location() {
            Some(coords) => {
                info!(coords = %coords, "using configured default location");
                Arc::new(FixedLocation::new(coords))
            }
            None => {
                warn!("no location source (use --lat/--lon, --exif, or NEARLENS_LATITUDE/LONGITUDE)");
                Arc::new(UnavailableLocation)
            }
        },
    };

    let route = if args.quick {
        UploadRoute::Quick
    } else {
        cfg.route_or_default()
    };
    info!(route = ?route, path = route.path(), "upload route");

    let notices: Arc<dyn NoticePort> = Arc::new(TerminalNotices);
    UploadClient::new(uploader, location, notices, route)
}
