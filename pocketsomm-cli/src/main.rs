//! PocketSomm CLI - a personal sommelier in your terminal.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pocketsomm_client::{Client, Config, PrefLevel};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// PocketSomm - a personal sommelier for your terminal.
#[derive(Parser)]
#[command(name = "pocketsomm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend base URL; defaults to POCKETSOMM_API_URL, then localhost
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health,
    /// Inspect a user's taste profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Submit the taste survey
    Survey {
        #[command(subcommand)]
        action: SurveyAction,
    },
    /// Look up wines in the catalogue
    Wine {
        #[command(subcommand)]
        action: WineAction,
    },
    /// Manage favorite wines
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Record tastings
    Tasting {
        #[command(subcommand)]
        action: TastingAction,
    },
    /// Get recommendations from a restaurant menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the stored profile
    Show {
        /// User identifier
        #[arg(short, long)]
        user: String,
    },
    /// Show aggregate taste insights
    Insights {
        /// User identifier
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Subcommand)]
enum SurveyAction {
    /// Submit taste-survey answers
    Submit {
        /// User identifier
        #[arg(short, long)]
        user: String,
        /// Comma-separated style slugs, e.g. bold_red,crisp_white
        #[arg(long, value_delimiter = ',')]
        styles: Vec<String>,
        /// Tannin preference: low, medium or high
        #[arg(long, default_value = "medium", value_parser = commands::survey::parse_level)]
        tannin: PrefLevel,
        /// Acidity preference: low, medium or high
        #[arg(long, default_value = "medium", value_parser = commands::survey::parse_level)]
        acidity: PrefLevel,
        /// Oak preference: low, medium or high
        #[arg(long, default_value = "low", value_parser = commands::survey::parse_level)]
        oak: PrefLevel,
        /// Willingness to try unfamiliar wines: low, medium or high
        #[arg(long, default_value = "medium", value_parser = commands::survey::parse_level)]
        adventure: PrefLevel,
    },
}

#[derive(Subcommand)]
enum WineAction {
    /// Show a wine's catalogue entry with similar wines
    Show {
        /// Wine identifier
        wine_id: String,
    },
    /// Search the catalogue by free text
    Search {
        /// Search query
        query: String,
    },
    /// Resolve a wine profile from a name without saving anything
    Resolve {
        /// Wine name
        name: String,
    },
}

#[derive(Subcommand)]
enum FavoriteAction {
    /// Add a favorite by name in one backend call
    ByName {
        /// User identifier
        #[arg(short, long)]
        user: String,
        /// Wine name
        name: String,
    },
    /// Recognize a label photo and add the wine
    FromPhoto {
        /// User identifier
        #[arg(short, long)]
        user: String,
        /// Path to the photo
        photo: PathBuf,
        /// MIME type of the photo (default: image/jpeg)
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Resolve a name first, then save the resolved profile
    FromProfile {
        /// User identifier
        #[arg(short, long)]
        user: String,
        /// Wine name
        name: String,
    },
}

#[derive(Subcommand)]
enum TastingAction {
    /// Record a tasting
    Add {
        /// User identifier
        #[arg(short, long)]
        user: String,
        /// Wine identifier
        wine_id: String,
        /// Rating from 0 to 5
        #[arg(short, long)]
        rating: f64,
        /// Where or with what the wine was tasted
        #[arg(long)]
        context: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Upload a menu PDF and get wines matched to your taste
    Recommend {
        /// User identifier
        #[arg(short, long)]
        user: String,
        /// Path to the menu PDF
        pdf: PathBuf,
    },
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Respect RUST_LOG when set
    let filter = EnvFilter::try_new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
    )?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    // Version needs no backend; handle it before the client is built.
    if matches!(cli.command, Commands::Version) {
        return commands::version::run();
    }

    let config = match cli.base_url {
        Some(base_url) => Config::new(base_url),
        None => Config::from_env(),
    };
    let client = Client::new(config)?;

    match cli.command {
        Commands::Health => commands::health::run(&client).await,
        Commands::Profile { action } => match action {
            ProfileAction::Show { user } => commands::profile::show(&client, &user).await,
            ProfileAction::Insights { user } => commands::profile::insights(&client, &user).await,
        },
        Commands::Survey { action } => match action {
            SurveyAction::Submit {
                user,
                styles,
                tannin,
                acidity,
                oak,
                adventure,
            } => {
                commands::survey::submit(&client, &user, styles, tannin, acidity, oak, adventure)
                    .await
            }
        },
        Commands::Wine { action } => match action {
            WineAction::Show { wine_id } => commands::wine::show(&client, &wine_id).await,
            WineAction::Search { query } => commands::wine::search(&client, &query).await,
            WineAction::Resolve { name } => commands::wine::resolve(&client, &name).await,
        },
        Commands::Favorite { action } => match action {
            FavoriteAction::ByName { user, name } => {
                commands::favorite::by_name(&client, &user, &name).await
            }
            FavoriteAction::FromPhoto {
                user,
                photo,
                content_type,
            } => {
                commands::favorite::from_photo(&client, &user, &photo, content_type.as_deref())
                    .await
            }
            FavoriteAction::FromProfile { user, name } => {
                commands::favorite::from_profile(&client, &user, &name).await
            }
        },
        Commands::Tasting { action } => match action {
            TastingAction::Add {
                user,
                wine_id,
                rating,
                context,
                notes,
            } => {
                commands::tasting::add(
                    &client,
                    &user,
                    &wine_id,
                    rating,
                    context.as_deref(),
                    notes.as_deref(),
                )
                .await
            }
        },
        Commands::Menu { action } => match action {
            MenuAction::Recommend { user, pdf } => {
                commands::menu::recommend(&client, &user, &pdf).await
            }
        },
        Commands::Version => unreachable!("handled above"),
    }
}
