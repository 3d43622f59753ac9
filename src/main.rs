// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use batch_groupby::backends::local::{LocalConditionFactory, LocalProcessorFactory};
use batch_groupby::config::{load_config, RuntimeBuilder};
use batch_groupby::message::{Batch, Part};
use batch_groupby::metrics::Stats;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Partition a batch of messages into condition-defined groups.
#[derive(Parser, Debug)]
#[command(name = "batch-groupby")]
#[command(version)]
struct Cli {
    /// Config file (.yaml, .yml, .json or .toml)
    #[arg(short, long, required_unless_present = "list")]
    config: Option<PathBuf>,

    /// List the available condition and processor types and exit
    #[arg(long)]
    list: bool,

    /// Log level used when RUST_LOG is not set; overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Print the counter snapshot to stderr when done
    #[arg(long)]
    stats: bool,

    /// Read each part as a JSON object `{"payload": "...", "metadata": {...}}`
    #[arg(long)]
    json_input: bool,

    /// Parts of the input batch; read one per stdin line when omitted
    parts: Vec<String>,
}

#[derive(Deserialize)]
struct InputPart {
    payload: String,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct OutputPart<'a> {
    payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<&'static str>,
    metadata: BTreeMap<&'a str, &'a str>,
}

impl<'a> From<&'a Part> for OutputPart<'a> {
    fn from(part: &'a Part) -> Self {
        let (payload, encoding) = match std::str::from_utf8(&part.payload) {
            Ok(text) => (text.to_string(), None),
            Err(_) => (STANDARD.encode(&part.payload), Some("base64")),
        };
        Self {
            payload,
            encoding,
            metadata: part
                .metadata
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_part(raw: &str, json: bool) -> Result<Part> {
    if !json {
        return Ok(Part::new(raw));
    }
    let input: InputPart =
        serde_json::from_str(raw).with_context(|| format!("invalid JSON part: {}", raw))?;
    Ok(input
        .metadata
        .into_iter()
        .fold(Part::new(input.payload), |part, (k, v)| part.with_metadata(k, v)))
}

fn read_batch(cli: &Cli) -> Result<Batch> {
    if !cli.parts.is_empty() {
        return cli.parts.iter().map(|p| parse_part(p, cli.json_input)).collect();
    }

    let stdin = io::stdin();
    let mut batch = Batch::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        batch.push(parse_part(&line, cli.json_input)?);
    }
    Ok(batch)
}

fn render(batch: &Batch) -> Result<String> {
    let parts: Vec<OutputPart> = batch.iter().map(OutputPart::from).collect();
    Ok(serde_json::to_string(&parts)?)
}

/// One line per kind: `conditions: static, text, ...`.
fn render_implementations() -> String {
    format!(
        "conditions: {}\nprocessors: {}",
        LocalConditionFactory::list_available_implementations().join(", "),
        LocalProcessorFactory::list_available_implementations().join(", ")
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        println!("{}", render_implementations());
        return Ok(());
    }

    let Some(config_path) = cli.config.as_deref() else {
        anyhow::bail!("--config is required");
    };
    let config = load_config(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    init_logging(cli.log_level.as_deref().unwrap_or(&config.logging.level));

    let stats = Stats::new();
    let engine = RuntimeBuilder::from_config(&config, &stats)?;
    tracing::info!(
        config = %config_path.display(),
        groups = engine.group_count(),
        "group_by engine ready"
    );

    let input = read_batch(&cli)?;
    let output = engine.partition(&input);

    if output.is_ack() {
        tracing::info!(input_parts = input.len(), "nothing to forward");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for batch in &output.batches {
        writeln!(out, "{}", render(batch)?)?;
    }

    if cli.stats {
        let mut err = io::stderr().lock();
        for (name, value) in stats.snapshot() {
            writeln!(err, "{} {}", name, value)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_and_binary_parts() {
        let batch = Batch::from_parts(vec![
            Part::new("hello").with_metadata("k", "v"),
            Part::new(vec![0xff, 0x00]),
        ]);

        assert_eq!(
            render(&batch).unwrap(),
            r#"[{"payload":"hello","metadata":{"k":"v"}},{"payload":"/wA=","encoding":"base64","metadata":{}}]"#
        );
    }

    #[test]
    fn test_parse_json_part() {
        let part = parse_part(r#"{"payload":"x","metadata":{"level":"error"}}"#, true).unwrap();
        assert_eq!(part.payload, b"x".to_vec());
        assert_eq!(part.get_metadata("level"), Some("error"));

        assert!(parse_part("not json", true).is_err());
        assert_eq!(parse_part("not json", false).unwrap(), Part::new("not json"));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "batch-groupby",
            "--config",
            "configs/group-by-foo.yaml",
            "--stats",
            "foo1",
            "bar1",
        ])
        .unwrap();

        assert!(cli.stats);
        assert_eq!(cli.parts, vec!["foo1", "bar1"]);
        assert!(cli.log_level.is_none());
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("configs/group-by-foo.yaml"))
        );
    }

    #[test]
    fn test_list_without_config() {
        let cli = Cli::try_parse_from(["batch-groupby", "--list"]).unwrap();
        assert!(cli.list);
        assert!(cli.config.is_none());

        assert!(Cli::try_parse_from(["batch-groupby", "part"]).is_err());
    }

    #[test]
    fn test_render_implementations() {
        let listing = render_implementations();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("conditions: static, text, metadata"));
        assert!(lines[1].starts_with("processors: noop, metadata"));
        assert!(lines[1].ends_with("group_by"));
    }
}
