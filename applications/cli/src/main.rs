/// SoundSnacks - soundboard from the terminal
use clap::{Parser, Subcommand};
use snack_board::{grid_rows, tiles, EditSound, NewSound};
use snack_cli::render::Output;
use snack_cli::{player, render, AppState, PlayOutcome, SnacksConfig};
use snack_core::{CategoryId, SoundId};
use snack_playback::PlaybackState;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soundsnacks")]
#[command(about = "SoundSnacks soundboard", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./soundsnacks.toml if present)
    #[arg(short, long, env = "SNACKS_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default categories if they are missing
    Seed,
    /// Manage categories
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// Manage sounds
    #[command(subcommand)]
    Sounds(SoundCommand),
    /// Show the board grid
    Grid {
        /// Number of columns (overrides the configuration)
        #[arg(long)]
        columns: Option<usize>,
    },
    /// Play a sound to the end on the default output device
    Play {
        /// Sound ID
        id: String,
    },
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// List categories by name
    List,
    /// Create a category
    Add {
        name: String,
        /// Color as #RRGGBB
        color: String,
    },
    /// Rename or recolor a category
    Edit {
        id: String,
        name: String,
        /// Color as #RRGGBB
        color: String,
    },
    /// Delete a category (its sounds keep their category name)
    Delete { id: String },
}

#[derive(Subcommand)]
enum SoundCommand {
    /// List sounds in board order
    List,
    /// Import an MP3, WAV or M4A file
    Add {
        /// File to import; it is copied, not moved
        file: PathBuf,
        #[arg(short, long)]
        description: String,
        #[arg(short = 'g', long)]
        category: String,
    },
    /// Edit a sound's description, category or order
    Edit {
        id: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short = 'g', long)]
        category: Option<String>,
        #[arg(short, long)]
        order: Option<String>,
    },
    /// Delete a sound and its imported file
    Delete { id: String },
    /// Move a sound onto another sound's position
    Reorder {
        /// Sound being dragged
        dragged: String,
        /// Sound it is dropped on
        destination: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soundsnacks=info,snack_cli=info,snack_board=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = SnacksConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let state = AppState::open(config).await?;
    let out = Output { json: cli.json };

    match cli.command {
        Commands::Seed => {
            let categories = state.categories.list().await?;
            out.print(&categories, || render::categories_table(&categories))?;
        }
        Commands::Categories(command) => categories(&state, &out, command).await?,
        Commands::Sounds(command) => sounds(&state, &out, command).await?,
        Commands::Grid { columns } => {
            let columns = columns.unwrap_or(state.config.board.grid_columns);
            let sounds = state.sounds.list().await?;
            let categories = state.categories.list().await?;
            let rows = grid_rows(&tiles(&sounds, &categories, &PlaybackState::Idle), columns);
            out.print(&rows, || render::grid(&rows))?;
        }
        Commands::Play { id } => {
            let sound = state.require_sound(&id).await?;
            let library = state.library();
            tracing::info!(id = %sound.id, description = %sound.description, "playing");

            let outcome = tokio::task::spawn_blocking(move || {
                player::play_on_default_output(library, sound)
            })
            .await??;

            out.print(&outcome, || render::play_outcome(&outcome))?;

            // Playback failures are reported, not fatal
            if let PlayOutcome::Failed(message) = &outcome {
                tracing::warn!(%message, "playback did not complete");
            }
        }
    }

    Ok(())
}

async fn categories(state: &AppState, out: &Output, command: CategoryCommand) -> anyhow::Result<()> {
    match command {
        CategoryCommand::List => {
            let categories = state.categories.list().await?;
            out.print(&categories, || render::categories_table(&categories))?;
        }
        CategoryCommand::Add { name, color } => {
            let category = state.categories.create(&name, &color).await?;
            out.print(&category, || {
                render::categories_table(std::slice::from_ref(&category))
            })?;
        }
        CategoryCommand::Edit { id, name, color } => {
            let current = state.require_category(&id).await?;
            let category = state.categories.update(&current.id, &name, &color).await?;
            out.print(&category, || {
                render::categories_table(std::slice::from_ref(&category))
            })?;
        }
        CategoryCommand::Delete { id } => {
            state.categories.delete(&CategoryId::new(id)).await?;
        }
    }
    Ok(())
}

async fn sounds(state: &AppState, out: &Output, command: SoundCommand) -> anyhow::Result<()> {
    match command {
        SoundCommand::List => {
            let sounds = state.sounds.list().await?;
            out.print(&sounds, || render::sounds_table(&sounds))?;
        }
        SoundCommand::Add {
            file,
            description,
            category,
        } => {
            let sound = state
                .sounds
                .add(NewSound {
                    description,
                    category,
                    source: file,
                })
                .await?;
            out.print(&sound, || render::sounds_table(std::slice::from_ref(&sound)))?;
        }
        SoundCommand::Edit {
            id,
            description,
            category,
            order,
        } => {
            let current = state.require_sound(&id).await?;
            let sound = state
                .sounds
                .edit(
                    &current.id,
                    EditSound {
                        description: description.unwrap_or(current.description),
                        category: category.unwrap_or(current.category),
                        order: order.unwrap_or_else(|| current.order.to_string()),
                    },
                )
                .await?;
            out.print(&sound, || render::sounds_table(std::slice::from_ref(&sound)))?;
        }
        SoundCommand::Delete { id } => {
            if !state.sounds.delete(&SoundId::new(id.as_str())).await {
                tracing::warn!(id = %id, "sound was not deleted");
            }
        }
        SoundCommand::Reorder {
            dragged,
            destination,
        } => {
            let reordered = state
                .sounds
                .reorder(&SoundId::new(dragged), &SoundId::new(destination))
                .await;
            match reordered {
                Some(sounds) => out.print(&sounds, || render::sounds_table(&sounds))?,
                None => tracing::info!("nothing to reorder"),
            }
        }
    }
    Ok(())
}
