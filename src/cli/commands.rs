//! Command dispatch

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::ToDisplayTree;
use crate::domain::{stratify, TreeItem};
use crate::payload::{IdSpec, TreePayload};

/// One flat on-disk record: a tree item plus its parent reference.
#[derive(Debug, Deserialize)]
pub struct FlatRecord {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub parent: Option<String>,
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Stratify { file }) => stratify_forest(file),
        Some(Commands::Payload {
            file,
            multiple,
            selected,
            expanded,
        }) => build_payload(file, *multiple, selected, expanded.as_deref()),
        Some(Commands::Show { file }) => show_forest(file),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Read flat records from `file` and stratify them into a forest.
pub fn read_forest(file: &Path) -> CliResult<Vec<TreeItem>> {
    let records = read_records(file)?;

    let mut items = Vec::with_capacity(records.len());
    for record in &records {
        let mut item = TreeItem::new(&record.id, &record.label)?;
        if !record.caption.is_empty() {
            item = item.with_caption(&record.caption);
        }
        item = item.with_disabled(record.disabled);
        items.push(item);
    }

    let parents: Vec<Option<&str>> = records.iter().map(|r| r.parent.as_deref()).collect();
    Ok(stratify(&items, &parents)?)
}

fn read_records(file: &Path) -> CliResult<Vec<FlatRecord>> {
    let content = fs::read_to_string(file).map_err(|source| CliError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    let records: Vec<FlatRecord> = serde_json::from_str(&content)?;
    debug!("read {} records from {}", records.len(), file.display());
    Ok(records)
}

#[instrument]
fn stratify_forest(file: &Path) -> CliResult<()> {
    let forest = read_forest(file)?;
    println!("{}", serde_json::to_string_pretty(&forest)?);
    Ok(())
}

#[instrument]
fn build_payload(
    file: &Path,
    multiple: bool,
    selected: &[String],
    expanded: Option<&[String]>,
) -> CliResult<()> {
    let forest = read_forest(file)?;

    let selected = if selected.is_empty() {
        None
    } else {
        Some(IdSpec::Many(selected.to_vec()))
    };
    let expanded = expanded.map(|ids| IdSpec::Many(ids.to_vec()));

    let payload = TreePayload::build(forest, multiple, selected, expanded)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[instrument]
fn show_forest(file: &Path) -> CliResult<()> {
    let forest = read_forest(file)?;
    for root in &forest {
        print!("{}", root.to_display_tree());
    }
    Ok(())
}
