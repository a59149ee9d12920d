//! Command-line caller for the contacts store.
//!
//! # Responsibility
//! - Drive each store operation from the shell.
//! - Print records as JSON and mutations as affected row counts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contacts_core::{
    default_log_level, encode_data_url, guess_mime, init_logging, ContactPatch, ContactStore,
    StoreConfig,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Manage contact records in a local SQLite store", long_about = None)]
#[command(version)]
struct Cli {
    /// Database file; defaults to $CONTACTS_DB_PATH or ./database.sqlite
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a placeholder contact
    Create,
    /// Show one contact
    Get { id: String },
    /// Show every contact
    List,
    /// Change some fields of a contact
    Update {
        id: String,
        #[command(flatten)]
        fields: UpdateFields,
    },
    /// Delete a contact
    Delete { id: String },
}

#[derive(clap::Args)]
struct UpdateFields {
    #[arg(long)]
    first: Option<String>,
    #[arg(long)]
    last: Option<String>,
    #[arg(long)]
    twitter: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    favorite: Option<bool>,
    /// Image file stored inline as a data URL
    #[arg(long, conflicts_with = "avatar")]
    avatar_file: Option<PathBuf>,
    /// Raw avatar payload; pass "" to clear
    #[arg(long)]
    avatar: Option<String>,
}

impl UpdateFields {
    fn into_patch(self) -> Result<ContactPatch> {
        let avatar = match (self.avatar_file, self.avatar) {
            (Some(path), _) => Some(read_avatar(&path)?),
            (None, raw) => raw,
        };

        Ok(ContactPatch {
            first: self.first,
            last: self.last,
            twitter: self.twitter,
            notes: self.notes,
            favorite: self.favorite,
            avatar,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let config = match cli.db {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::from_env(),
    };
    let store = ContactStore::open(&config)
        .with_context(|| format!("failed to open {}", config.db_path().display()))?;
    info!("event=cli_start module=cli status=ok");

    run(&store, cli.command)?;

    store.close().context("failed to close contact store")?;
    Ok(())
}

fn run(store: &ContactStore, command: Command) -> Result<()> {
    match command {
        Command::Create => {
            let contact = store.create_empty().context("create failed")?;
            println!("{}", serde_json::to_string_pretty(&contact)?);
        }
        Command::Get { id } => match store.get(&id).context("get failed")? {
            Some(contact) => println!("{}", serde_json::to_string_pretty(&contact)?),
            None => println!("contact {id} not found"),
        },
        Command::List => {
            let contacts = store.list().context("list failed")?;
            println!("{}", serde_json::to_string_pretty(&contacts)?);
        }
        Command::Update { id, fields } => {
            let patch = fields.into_patch()?;
            let outcome = store.update(&id, &patch).context("update failed")?;
            println!("rows_affected={}", outcome.rows_affected);
        }
        Command::Delete { id } => {
            let outcome = store.delete(&id).context("delete failed")?;
            println!("rows_affected={}", outcome.rows_affected);
        }
    }
    Ok(())
}

fn read_avatar(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read avatar {}", path.display()))?;
    Ok(encode_data_url(guess_mime(path), &bytes))
}
