//! EconDashboard CLI
//!
//! Terminal front end for the economic indicator dashboard:
//! - Render the full dashboard
//! - Inspect a single indicator card
//! - Show the market snapshot, release calendar and theme palette
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use econdash::config::{generate_default_config, Config, LoggingConfig};
use econdash::render;
use econdash::view::{market_snapshot, upcoming_events, Action, CardState};
use econdash::{Dashboard, IndicatorKey};

#[derive(Parser)]
#[command(name = "econdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Economic indicator dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Render with the dark theme
    #[arg(long, global = true)]
    pub dark: bool,

    /// Toggle an indicator's watchlist membership before rendering
    #[arg(short, long = "watch", global = true)]
    pub watch: Vec<IndicatorKey>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load every indicator and print the dashboard
    Show,

    /// Load and print a single indicator card
    Indicator {
        /// cpi, unemployment, fedRate or gdp
        key: IndicatorKey,
    },

    /// Print the market snapshot strip
    Market,

    /// Print upcoming economic releases
    Events,

    /// Print the tooltip palette for the active theme
    Theme,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if cli.dark {
        config.dashboard.dark_mode = true;
    }

    init_logging(&config.logging);
    tracing::debug!("EconDashboard v{}", env!("CARGO_PKG_VERSION"));

    let dashboard = Dashboard::from_config(&config);
    for key in &cli.watch {
        dashboard.dispatch(Action::ToggleWatch(*key)).await;
    }

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {
            dashboard.load_all().await;
            let state = dashboard.state().await;

            if cli.format == OutputFormat::Json {
                let cards: Vec<_> = state
                    .cards()
                    .iter()
                    .map(|card| {
                        serde_json::json!({
                            "key": card.key(),
                            "title": card.title(),
                            "state": card.state().label(),
                            "watched": state.is_watched(card.key()),
                            "snapshot": card.snapshot(),
                            "error": card.error().map(|e| e.to_string()),
                        })
                    })
                    .collect();
                let body = serde_json::json!({
                    "theme": state.theme().label(),
                    "cards": cards,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print!(
                    "{}",
                    render::render_dashboard(&state, &market_snapshot(), &upcoming_events())
                );
            }
        }

        Commands::Indicator { key } => {
            let slot = dashboard
                .state()
                .await
                .cards()
                .iter()
                .position(|card| card.key() == key);

            match slot {
                Some(slot) => {
                    dashboard.load_slot(slot).await;
                }
                None => {
                    dashboard.select_indicator(0, key).await;
                }
            }

            let state = dashboard.state().await;
            let Some(card) = state.cards().iter().find(|card| card.key() == key) else {
                bail!("no card shows {}", key);
            };

            if cli.format == OutputFormat::Json {
                match card.state() {
                    CardState::Loaded(snapshot) => {
                        println!("{}", serde_json::to_string_pretty(snapshot)?)
                    }
                    CardState::Failed(err) => bail!("{}: {}", key, err),
                    CardState::Loading => bail!("{} did not finish loading", key),
                }
            } else {
                print!("{}", render::render_card(card, state.is_watched(key)));
                if let Some(err) = card.error() {
                    bail!("{}: {}", key, err);
                }
            }
        }

        Commands::Market => {
            print!("{}", render::render_market(&market_snapshot()));
        }

        Commands::Events => {
            print!("{}", render::render_events(&upcoming_events()));
        }

        Commands::Theme => {
            print!("{}", render::render_theme(&dashboard.state().await.theme()));
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("econdash={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_table() {
        let cli = Cli::try_parse_from(["econdash", "show"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_format_json_and_watch_keys() {
        let cli =
            Cli::try_parse_from(["econdash", "-f", "json", "-w", "fedRate", "market"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.watch, vec![IndicatorKey::FedRate]);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["econdash", "--format", "yaml", "show"]).is_err());
    }
}
