// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_lens::config::{Command, CommandLineInput};
use notion_lens::{DatabaseQuery, NotionClient, NotionError, NotionErrorCode, NotionId};
use serde_json::Value;
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_lens.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries results, so log lines go to stderr
    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn parse_json_arg(name: &str, raw: Option<String>) -> anyhow::Result<Option<Value>> {
    raw.map(|text| {
        serde_json::from_str(&text).with_context(|| format!("--{} is not valid JSON", name))
    })
    .transpose()
}

fn resolve_id(input: &str) -> anyhow::Result<NotionId> {
    NotionId::parse(input).with_context(|| format!("Cannot read a Notion ID from '{}'", input))
}

/// Runs one subcommand, printing a summary line per object.
fn run(client: &NotionClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Page { id } => {
            let page = client.retrieve_page(resolve_id(&id)?.as_str())?;
            println!("{}", page);
        }
        Command::Database { id } => {
            let database = client.retrieve_database(resolve_id(&id)?.as_str())?;
            println!("{}", database);
            for name in database.properties.keys() {
                println!("  {}", name);
            }
        }
        Command::Block { id } => {
            let block = client.retrieve_block(resolve_id(&id)?.as_str())?;
            println!("{}", block);
        }
        Command::Query {
            id,
            page_size,
            filter,
            sorts,
        } => {
            let mut query = DatabaseQuery::default().with_page_size(page_size);
            if let Some(filter) = parse_json_arg("filter", filter)? {
                query = query.with_filter(filter);
            }
            if let Some(sorts) = parse_json_arg("sorts", sorts)? {
                query = query.with_sorts(sorts);
            }

            let mut rows = client.query_database(resolve_id(&id)?.as_str(), query)?;
            let mut count = 0usize;
            for row in rows.by_ref() {
                println!("{}", row?);
                count += 1;
            }
            eprintln!("{} rows in {} request(s)", count, rows.pages_fetched());
        }
        Command::Children { id, page_size } => {
            let mut children =
                client.retrieve_block_children(resolve_id(&id)?.as_str(), page_size)?;
            let mut count = 0usize;
            for block in children.by_ref() {
                let block = block?;
                println!("{} {}", block, block.plain_text());
                count += 1;
            }
            eprintln!("{} blocks in {} request(s)", count, children.pages_fetched());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let client =
        NotionClient::new(cli.token.as_deref()).context("Failed to create Notion client")?;

    run(&client, cli.command).map_err(|e| {
        let not_found = e
            .downcast_ref::<NotionError>()
            .and_then(NotionError::error_code)
            .is_some_and(NotionErrorCode::is_not_found);
        if not_found {
            e.context("Object not found, or not shared with this integration")
        } else {
            e
        }
    })
}
