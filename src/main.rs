use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;

use zulip_menu::accelerator::Accelerator;
use zulip_menu::config::{self, Config};
use zulip_menu::host::headless::HeadlessHost;
use zulip_menu::{Action, AppContext, MenuNode, Platform, async_runtime, build_menu};

#[derive(Debug, Parser)]
#[command(name = "zulip-menu", version, about = "Build and exercise the application menu")]
struct Cli {
    /// Path to the TOML config
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Build the menu for this platform instead of the configured one
    #[arg(long)]
    platform: Option<String>,

    /// Open external links with the system handler instead of printing them
    #[arg(long)]
    open_links: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the menu tree
    Tree,
    /// Print the menu tree as JSON
    Json,
    /// List the action names sent to the content layer
    Actions,
    /// Click a menu entry on the headless host
    Click {
        /// Label path, e.g. "View/Reload"
        path: Option<String>,
        /// Pick the entry by accelerator instead, e.g. "Ctrl+L"
        #[arg(long, conflicts_with = "path")]
        accelerator: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config_or_default(&cli.config)?;
    init_logging(&config)?;

    let platform = match &cli.platform {
        Some(name) => {
            Platform::from_str(name).with_context(|| format!("Unknown platform: {}", name))?
        }
        None => config.platform()?,
    };
    log::info!("Building menu for {}", platform);

    async_runtime::init()?;

    let cache_dir = config
        .cache
        .dir
        .clone()
        .unwrap_or_else(HeadlessHost::default_cache_dir);
    let Config {
        app,
        runtime,
        links,
        ..
    } = config;

    let host = Arc::new(HeadlessHost::new(runtime.into(), cache_dir, cli.open_links));
    let ctx = AppContext::new(host.clone(), platform, app, links);
    let menu = build_menu(&ctx);

    match cli.command {
        Commands::Tree => print!("{}", menu.render()),
        Commands::Json => {
            let json = serde_json::to_string_pretty(&menu).context("Failed to serialize menu")?;
            println!("{}", json);
        }
        Commands::Actions => {
            for action in Action::iter() {
                println!("{}", action);
            }
        }
        Commands::Click { path, accelerator } => {
            let leaf = match (path, accelerator) {
                (Some(path), _) => {
                    let segments: Vec<&str> = path.split('/').map(str::trim).collect();
                    match menu.find_by_path(&segments) {
                        Some(MenuNode::Leaf(leaf)) => leaf,
                        Some(_) => bail!("'{}' is not a clickable entry", path),
                        None => bail!("No menu entry at '{}'", path),
                    }
                }
                (None, Some(accel)) => {
                    let accel: Accelerator = accel.parse()?;
                    menu.find_by_accelerator(&accel)
                        .with_context(|| format!("No menu entry bound to {}", accel))?
                }
                (None, None) => bail!("Give a menu path or --accelerator"),
            };

            let focused = ctx.main_window();
            leaf.click(&ctx, focused.as_deref());
            host.wait_idle()?;
        }
    }

    Ok(())
}

/// Initialize logging system
///
/// Logs go to stderr, or are appended to the configured log file.
/// `RUST_LOG` overrides the configured level.
fn init_logging(config: &Config) -> Result<()> {
    use std::fs::OpenOptions;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level()?)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        });

    if let Some(path) = &config.logging.file {
        let target = Box::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?,
        );
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.init();
    Ok(())
}
