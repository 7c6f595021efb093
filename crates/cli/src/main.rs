use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::Parser;
use sidebar_tui::{Branding, SidebarOptions};
use sidebar_util::{
    CONFIG_DIR_NAME, PREFERENCES_PATH_ENV, PreferenceStore, UserPreferences, default_preferences_path, expand_tilde,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_PATH_ENV: &str = "SIDEBAR_LOG_PATH";
const LOG_FILE_NAME: &str = "sidebar.log";

/// Collapsible, themeable navigation sidebar for the terminal.
#[derive(Debug, Parser)]
#[command(name = "sidebar", version, about)]
struct Args {
    /// Preferences file holding the persisted theme.
    #[arg(long, value_name = "PATH", env = PREFERENCES_PATH_ENV)]
    preferences: Option<String>,

    /// Keep preferences in memory only; nothing is written to disk.
    /// Takes precedence over `--preferences`.
    #[arg(long)]
    ephemeral: bool,

    /// Product name shown beside the logo.
    #[arg(long, value_name = "TEXT", default_value = "TensorFlow")]
    wordmark: String,

    /// Accessible name of the logo, used as the terminal title.
    #[arg(long, value_name = "TEXT")]
    logo_label: Option<String>,

    /// Glyph drawn inside the logo badge.
    #[arg(long, value_name = "TEXT")]
    logo_glyph: Option<String>,

    /// Start collapsed. Applies to this session only.
    #[arg(long)]
    collapsed: bool,

    /// Draw icons with plain ASCII characters.
    #[arg(long)]
    ascii_icons: bool,

    /// Log file; the terminal itself is taken by the UI.
    #[arg(long, value_name = "PATH", env = LOG_PATH_ENV)]
    log_file: Option<String>,
}

impl Args {
    fn sidebar_options(&self) -> SidebarOptions {
        let mut branding = Branding::new(self.wordmark.clone());
        if let Some(label) = &self.logo_label {
            branding.logo_label = label.clone();
        }
        if let Some(glyph) = &self.logo_glyph
            && !branding.set_logo_glyph(glyph)
        {
            warn!(glyph = %glyph, "logo glyph must be one column wide; keeping the default");
        }
        SidebarOptions {
            branding,
            start_collapsed: self.collapsed,
            ascii_icons: self.ascii_icons,
        }
    }

    fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => expand_tilde(path),
            None => dirs_next::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(CONFIG_DIR_NAME)
                .join(LOG_FILE_NAME),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_path());
    info!("starting sidebar");

    let store = open_store(&args);
    sidebar_tui::run(store, args.sidebar_options()).await
}

/// Sends `tracing` output to `log_path`, filtered by `RUST_LOG` (default
/// `info`). Logging is disabled when the file cannot be opened.
fn init_tracing(log_path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match open_log_file(log_path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(_) => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::sink).try_init();
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Picks the preference store. Falls back to an in-memory store when the file
/// location is unusable.
fn open_store(args: &Args) -> Arc<dyn PreferenceStore> {
    if args.ephemeral {
        info!("using in-memory preferences");
        return Arc::new(UserPreferences::ephemeral());
    }
    let path = args
        .preferences
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(default_preferences_path);

    match open_persistent_store(&path) {
        Ok(store) => {
            info!(path = %path.display(), "using preferences file");
            Arc::new(store)
        }
        Err(error) => {
            warn!(path = %path.display(), error = %format!("{error:#}"), "preferences unavailable; falling back to memory");
            Arc::new(UserPreferences::ephemeral())
        }
    }
}

fn open_persistent_store(path: &Path) -> Result<UserPreferences> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating config directory {}", parent.display()))?;
    }
    UserPreferences::open(path).with_context(|| format!("reading preferences {}", path.display()))
}
