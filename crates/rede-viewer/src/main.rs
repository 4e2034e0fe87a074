//! Entry point for the lab directory viewer.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use rede_directory::{DirectoryConfig, FileStore, LabId, RecordStore};
use rede_viewer::bridge::{BridgeEvent, LISTENER_SCRIPT};
use rede_viewer::components::App;
use rede_viewer::state::ViewerState;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Dataset used when no `--data` file is given.
const DEFAULT_LABS_JSON: &str = include_str!("../assets/labs.json");

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Everything the root component needs, loaded before launch.
#[derive(Clone, Default)]
struct Startup {
    store: RecordStore,
    config: DirectoryConfig,
    preferences: Option<PathBuf>,
}

static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "rede-viewer")]
#[command(about = "Lab directory with a synchronized list and map")]
struct Args {
    /// JSON file with the lab records (uses the bundled dataset if not provided)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preference file (defaults to the user config directory)
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting Rede lab directory");

    let config = match &args.config {
        Some(path) => DirectoryConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DirectoryConfig::default(),
    };

    let store = match &args.data {
        Some(path) => RecordStore::load(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => RecordStore::from_json_str(DEFAULT_LABS_JSON).context("parsing bundled dataset")?,
    };
    tracing::info!(labs = store.len(), "Dataset ready");

    STARTUP
        .set(Startup {
            store,
            config,
            preferences: args.preferences,
        })
        .ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Rede Fab Lab - Mapa dos Labs")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="stylesheet" href="{LEAFLET_CSS}">
                    <script src="{LEAFLET_JS}"></script>
                    <style>{STYLES_CSS}</style>
                    "#
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component: owns the state and the map bridge listener.
#[component]
fn RootApp() -> Element {
    let mut state = use_signal(|| {
        let startup = STARTUP.get().cloned().unwrap_or_default();
        let pref_store = match startup.preferences {
            Some(path) => FileStore::new(path),
            None => FileStore::default_location(),
        };
        tracing::debug!(path = %pref_store.path().display(), "Using preference file");
        ViewerState::new(startup.store, startup.config, Box::new(pref_store))
    });

    // Marker clicks and window resizes from the webview
    use_future(move || async move {
        let mut bridge = document::eval(LISTENER_SCRIPT);
        loop {
            match bridge.recv::<BridgeEvent>().await {
                Ok(BridgeEvent::MarkerClicked { lab }) => {
                    state.write().controller.click_marker(LabId(lab));
                }
                Ok(BridgeEvent::Resized { width }) => {
                    state.write().window_resized(width);
                }
                Err(e) => {
                    tracing::warn!("Map bridge closed: {e:?}");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        tracing::info!("Shutting down Rede lab directory");
    });

    rsx! {
        App { state }
    }
}
