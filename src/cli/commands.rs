//! CLI command implementations
//!
//! Each command is a one-shot operation over a file-backed store: load the
//! configuration, open the store, run, print, exit.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::WikiConfig;
use crate::history::Author;
use crate::observability::{Logger, Severity};
use crate::page::WikiName;
use crate::store::{JsonFileStore, NoopCache};
use crate::wiki::Wiki;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::read_content;

/// Entry point called from main.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch one parsed command.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Save {
            name,
            file,
            author,
            comment,
            address,
            config,
        } => save(&config, &name, file.as_deref(), author, comment, address),
        Command::View { name, config } => view(&config, &name),
        Command::Render { name, config } => render(&config, &name),
        Command::History { name, config } => history(&config, &name),
        Command::Diff {
            name,
            v1,
            v2,
            config,
        } => diff(&config, &name, &v1, &v2),
    }
}

fn open_wiki(config_path: &Path) -> CliResult<(Wiki, WikiConfig)> {
    let config = WikiConfig::load(config_path)?;
    let store = JsonFileStore::open(&config.data_path)?;
    let wiki = Wiki::new(Arc::new(store), Arc::new(NoopCache)).with_goto_path(&config.goto_path);
    Ok((wiki, config))
}

/// Create the store file; writes a default config first if none exists.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        WikiConfig::load(config_path)?
    } else {
        let config = WikiConfig::with_data_path("./quillwiki-data.json");
        let raw = serde_json::to_string_pretty(&config)
            .map_err(crate::config::ConfigError::Parse)?;
        fs::write(config_path, raw)?;
        config
    };
    JsonFileStore::create(&config.data_path)?;
    Logger::log(
        Severity::Info,
        "store_initialized",
        &[("data_path", &config.data_path)],
    );
    println!("Initialized store at {}", config.data_path);
    Ok(())
}

/// Save page content and append a history entry.
pub fn save(
    config_path: &Path,
    raw_name: &str,
    file: Option<&Path>,
    author: Option<String>,
    comment: String,
    address: String,
) -> CliResult<()> {
    let (wiki, _) = open_wiki(config_path)?;
    let name = parse_name(raw_name)?;
    let content = read_content(file)?;
    let id = wiki.save(&name, content, author.map(Author::new), address, comment)?;
    println!("Saved {} as entry {}", name, id);
    Ok(())
}

/// Print the page's stored (or synthesized) content.
pub fn view(config_path: &Path, raw_name: &str) -> CliResult<()> {
    let (wiki, _) = open_wiki(config_path)?;
    let name = parse_name(raw_name)?;
    let page = wiki.load(&name)?;
    print!("{}", page.content());
    if !page.content().ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Print the page's content after the transform chain.
pub fn render(config_path: &Path, raw_name: &str) -> CliResult<()> {
    let (wiki, _) = open_wiki(config_path)?;
    let name = parse_name(raw_name)?;
    println!("{}", wiki.render(&name)?);
    Ok(())
}

/// List history entries, newest first.
pub fn history(config_path: &Path, raw_name: &str) -> CliResult<()> {
    let (wiki, config) = open_wiki(config_path)?;
    let name = parse_name(raw_name)?;
    for entry in wiki.history(&name)?.iter().take(config.history_display) {
        println!(
            "{}  {}  {}  {}",
            entry.id(),
            entry.created().format("%Y-%m-%d %H:%M:%S"),
            entry.author_display(),
            entry.comment()
        );
    }
    Ok(())
}

/// Print an HTML diff table between two versions.
pub fn diff(config_path: &Path, raw_name: &str, v1: &str, v2: &str) -> CliResult<()> {
    let (wiki, _) = open_wiki(config_path)?;
    let name = parse_name(raw_name)?;
    print!("{}", wiki.diff(&name, v1, v2)?.to_html());
    Ok(())
}

fn parse_name(raw: &str) -> CliResult<WikiName> {
    // Canonicalize quietly: `Foo_Bar` addresses the same page as `FooBar`.
    let (name, _) = WikiName::canonicalize(raw).map_err(CliError::Name)?;
    Ok(name)
}
