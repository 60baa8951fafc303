//! Celestial Forge panel CLI
//!
//! Command-line counterpart of the chat-panel controls: track CP, browse random offers, buy and
//! refund perks, and export the sheet. Every invocation restores the saved session from the data
//! directory and saves it again after a mutation.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use forge_ledger::{render_sheet, CpPattern, LedgerEngine, PerkCatalog, DEFAULT_OFFER_SIZE};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::flags::SettingKey;
use crate::session::SessionStore;
use crate::settings::PanelSettings;

mod flags;
mod report;
mod session;
mod settings;

const DATA_DIR_NAME: &str = "celestial-forge";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Celestial Forge CP tracker and perk sheet", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Perk catalog JSON
    #[arg(long, global = true, env = "FORGE_PERKS_PATH", default_value = "perks.json")]
    perks: PathBuf,

    /// Directory holding the saved session and settings
    #[arg(long, global = true, env = "FORGE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current, earned and spent CP
    Status,

    /// Add CP to the current balance (counts as earned)
    #[command(name = "add-cp")]
    AddCp {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        amount: u64,
    },

    /// Correct the current balance without changing CP earned
    #[command(name = "set-cp")]
    SetCp {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Zero current and earned CP (the sheet is kept)
    #[command(name = "reset-cp")]
    ResetCp,

    /// Read a CP balance from text (argument, --file, or stdin)
    Parse(ParseArgs),

    /// Offer random domains
    Domains {
        /// Number of domains to offer
        #[arg(long, default_value_t = DEFAULT_OFFER_SIZE)]
        count: usize,
    },

    /// Offer random affordable perks from a domain
    Perks {
        domain: String,

        /// Number of perks to offer
        #[arg(long, default_value_t = DEFAULT_OFFER_SIZE)]
        count: usize,
    },

    /// Buy a perk
    Select { domain: String, perk: String },

    /// Remove a perk from the sheet and refund it
    Remove(RemoveArgs),

    /// Remove every perk and refund all spent CP
    Clear,

    /// List the perks on the sheet
    Sheet,

    /// Print the sheet export block
    Export,

    /// Show or change panel settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Manage the CP patterns used by `parse`
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
}

#[derive(Args)]
struct ParseArgs {
    /// Text to scan (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// File to scan
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct RemoveArgs {
    /// Perk name; the first matching entry is removed
    #[arg(required_unless_present = "index", conflicts_with = "index")]
    name: Option<String>,

    /// Entry number as shown by `forge sheet`
    #[arg(long)]
    index: Option<usize>,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print current settings
    Show,
    /// Change a toggle
    Set {
        #[arg(value_enum)]
        key: SettingKey,
        #[arg(
            value_parser = clap::builder::BoolishValueParser::new(),
            action = clap::ArgAction::Set
        )]
        value: bool,
    },
}

#[derive(Subcommand)]
enum PatternsAction {
    /// List patterns in the order they are tried
    List,
    /// Append a pattern (must have one capture group for the CP value)
    Add { pattern: String },
    /// Remove a pattern by its number in `patterns list`
    Remove { index: usize },
    /// Restore the default patterns
    Reset,
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let data_dir = resolve_data_dir(cli.data_dir)?;
    log::debug!("Using data dir {}", data_dir.display());

    match cli.command {
        Commands::Settings { action } => run_settings(action, &data_dir).await,
        Commands::Patterns { action } => run_patterns(action, &data_dir).await,
        command => run_ledger(command, &cli.perks, &data_dir).await,
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .context("Cannot determine a data directory; pass --data-dir or set FORGE_DATA_DIR")
}

fn needs_catalog(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Domains { .. } | Commands::Perks { .. } | Commands::Select { .. }
    )
}

async fn run_ledger(command: Commands, perks_path: &Path, data_dir: &Path) -> Result<()> {
    let catalog = if needs_catalog(&command) {
        PerkCatalog::load_first_available(&[perks_path.to_path_buf()])
    } else {
        PerkCatalog::empty()
    };
    let store = SessionStore::in_dir(data_dir);
    let mut engine = LedgerEngine::from_state(Arc::new(catalog), store.load().await);

    let mutated = match command {
        Commands::Status => {
            print_stdout(&report::render_status(engine.state()))?;
            false
        }
        Commands::AddCp { amount } => {
            let target = engine.current_cp().saturating_add(amount);
            let change = engine.observe_cp(target);
            print_stdout(&report::render_cp_update(&change))?;
            true
        }
        Commands::SetCp { value } => {
            let change = engine.set_cp(value);
            print_stdout(&format!(
                "CP manually set from {} to {}",
                change.previous, change.current
            ))?;
            true
        }
        Commands::ResetCp => {
            engine.reset_cp();
            print_stdout(&report::render_status(engine.state()))?;
            true
        }
        Commands::Parse(args) => {
            let text = read_parse_input(args)?;
            let settings = PanelSettings::load(data_dir).await;
            let change = if settings.tracks_cp() {
                engine.update_from_text(&settings.parser(), &text)
            } else {
                log::debug!("CP tracking is disabled; not scanning");
                None
            };
            match change {
                Some(change) => {
                    print_stdout(&format!("Found CP: {}", change.current))?;
                    true
                }
                None => {
                    print_stdout(report::NO_CP_FOUND)?;
                    false
                }
            }
        }
        Commands::Domains { count } => {
            if engine.catalog().is_empty() {
                print_stdout(report::NO_DOMAINS)?;
            } else {
                let domains: Vec<_> = engine
                    .list_domains(count)
                    .into_iter()
                    .filter_map(|name| {
                        let stats = engine.domain_stats(&name)?;
                        Some((name, stats))
                    })
                    .collect();
                print_stdout(&report::render_domains(&domains))?;
            }
            false
        }
        Commands::Perks { domain, count } => {
            let perks = engine.list_affordable_perks(&domain, count);
            print_stdout(&report::render_perk_offer(&perks))?;
            false
        }
        Commands::Select { domain, perk } => {
            let purchase = engine.select_perk(&domain, &perk)?;
            print_stdout(&format!(
                "Added perk \"{}\" for {} CP. Remaining CP: {}",
                purchase.perk.name, purchase.cost, purchase.remaining
            ))?;
            true
        }
        Commands::Remove(args) => {
            let refund = match (args.name, args.index) {
                (Some(name), _) => engine.remove_perk(&name)?,
                (None, Some(number)) => {
                    let len = engine.sheet().len();
                    if number == 0 || number > len {
                        anyhow::bail!("No sheet entry #{number} (sheet has {len} perks)");
                    }
                    engine.remove_perk_at(number - 1)?
                }
                (None, None) => anyhow::bail!("Pass a perk name or --index"),
            };
            print_stdout(&report::render_refund(&refund))?;
            true
        }
        Commands::Clear => {
            let refunded = engine.clear_sheet();
            print_stdout(&format!(
                "Sheet cleared. Refunded {refunded} CP. Current CP: {}",
                engine.current_cp()
            ))?;
            true
        }
        Commands::Sheet => {
            print_stdout(&report::render_sheet_entries(engine.state()))?;
            false
        }
        Commands::Export => {
            print_stdout(render_sheet(engine.state()).trim_end_matches('\n'))?;
            false
        }
        Commands::Settings { .. } | Commands::Patterns { .. } => {
            anyhow::bail!("settings commands do not touch the ledger")
        }
    };

    if mutated {
        store
            .save(engine.state())
            .await
            .with_context(|| format!("Failed to save session {}", store.path().display()))?;
    }
    Ok(())
}

fn read_parse_input(args: ParseArgs) -> Result<String> {
    if let Some(text) = args.text {
        return Ok(text);
    }
    if let Some(path) = args.file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

async fn run_settings(action: SettingsAction, data_dir: &Path) -> Result<()> {
    let mut settings = PanelSettings::load(data_dir).await;
    match action {
        SettingsAction::Show => print_stdout(&report::render_settings(&settings)),
        SettingsAction::Set { key, value } => {
            key.apply(&mut settings, value);
            settings.save(data_dir).await?;
            print_stdout(&format!("{}: {value}", key.as_str()))
        }
    }
}

async fn run_patterns(action: PatternsAction, data_dir: &Path) -> Result<()> {
    let mut settings = PanelSettings::load(data_dir).await;
    match action {
        PatternsAction::List => {
            return print_stdout(&report::render_patterns(&settings.cp_patterns));
        }
        PatternsAction::Add { pattern } => {
            CpPattern::new(&pattern)?;
            settings.cp_patterns.push(pattern);
            print_stdout(&format!("Added pattern #{}", settings.cp_patterns.len()))?;
        }
        PatternsAction::Remove { index } => {
            let len = settings.cp_patterns.len();
            if index == 0 || index > len {
                anyhow::bail!("No pattern #{index} (there are {len} patterns)");
            }
            let removed = settings.cp_patterns.remove(index - 1);
            print_stdout(&format!("Removed pattern: {removed}"))?;
        }
        PatternsAction::Reset => {
            settings.reset_patterns();
            print_stdout(&format!(
                "Restored {} default patterns",
                settings.cp_patterns.len()
            ))?;
        }
    }
    settings.save(data_dir).await
}
