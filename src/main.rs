//! # emoji-styles CLI
//!
//! Command-line interface for inspecting installed emoji styles and
//! resolving emoji in text.
//!
//! ## Usage
//!
//! ```bash
//! # List known styles and whether they are installed
//! emoji-styles styles
//!
//! # Resolve emoji in a message to rich text
//! emoji-styles render --style twemoji --size 32 "hello 😀"
//!
//! # Just the asset path for one emoji
//! emoji-styles render --style noto --url "❤️"
//!
//! # Use a different data directory and extra styles
//! emoji-styles --base-dir /tmp/share --catalog extra.json styles --json
//! ```
//!
//! Set `RUST_LOG=debug` to see probe and cache activity.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use emoji_styles::{
    AssetResolver, EmojiError, ResolverConfig, StyleCatalog,
    resolve::{DEFAULT_SUB_DIR, SizeRequest},
};

/// emoji-styles - Emoji asset resolution utility
#[derive(Parser, Debug)]
#[command(name = "emoji-styles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory containing the emoji sets (defaults to $XDG_DATA_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Subdirectory of the data directory holding the styles
    #[arg(long, global = true, default_value = DEFAULT_SUB_DIR)]
    sub_dir: String,

    /// JSON file with additional style descriptions
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List known styles with their installation status
    Styles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace emoji in TEXT with asset references
    Render {
        /// Text to resolve
        text: String,

        /// Style key (see `styles`)
        #[arg(long, default_value = "system")]
        style: String,

        /// Font pixel size of the surrounding text
        #[arg(long, default_value = "32")]
        size: f32,

        /// Do not enlarge emoji relative to the text size
        #[arg(long)]
        no_grow: bool,

        /// Fixed raster size, overriding --size for raster styles
        #[arg(long, default_value = "0")]
        max_raster: u32,

        /// Print asset references instead of rich text
        #[arg(long)]
        url: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EmojiError> {
    let cli = Cli::parse();

    let base_dir = cli
        .base_dir
        .or_else(ResolverConfig::data_dir_from_env)
        .unwrap_or_else(|| PathBuf::from("."));
    let config = ResolverConfig::new(base_dir).with_sub_dir(&cli.sub_dir);

    let mut catalog = StyleCatalog::built_in();
    if let Some(path) = &cli.catalog {
        let json = std::fs::read_to_string(path)?;
        catalog.merge(StyleCatalog::from_json(&json)?);
    }

    let mut resolver = AssetResolver::new(config).with_catalog(catalog);

    match cli.command {
        Commands::Styles { json } => {
            let statuses = resolver.statuses(false);

            if json {
                let entries: Vec<serde_json::Value> = statuses
                    .iter()
                    .map(|(style, status)| {
                        serde_json::json!({
                            "style": style,
                            "status": status,
                            "code": status.code(),
                        })
                    })
                    .collect();
                println!("{}", to_json(&entries)?);
                return Ok(());
            }

            println!("Emoji styles in {}:", resolver.config().root().display());
            for (style, status) in &statuses {
                let version = style.versions().first().map(String::as_str).unwrap_or("-");
                println!("  {:<10} {:<20} {:<12} {}", style.key, style.name, version, status);
            }
        }

        Commands::Render {
            text,
            style,
            size,
            no_grow,
            max_raster,
            url,
            json,
        } => {
            let style = resolver.catalog().lookup(&style)?.clone();

            let mut request = SizeRequest::new(size).max_raster(max_raster);
            if no_grow {
                request = request.no_grow();
            }

            let result = if url {
                resolver.try_resolve_to_url(&text, &style, request)?
            } else {
                resolver.try_resolve_to_markup(&text, &style, request)?
            };

            if json {
                println!("{}", to_json(&result)?);
            } else {
                println!("{}", result.text);
                eprintln!(
                    "{} emoji, {} plain characters",
                    result.emoji_count, result.plain_count
                );
            }
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, EmojiError> {
    Ok(serde_json::to_string_pretty(value)?)
}
