// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dynamic value substitution for configured strings.
//!
//! Values may embed `${!function}` or `${!function:arg}` tokens which are resolved
//! against the batch being processed. Supported functions:
//!
//! * `hostname` - the `HOSTNAME` environment variable, or `unknown`
//! * `timestamp_unix`, `timestamp_unix_nano` - current time since the epoch
//! * `timestamp`, `timestamp_utc` - current local/UTC time, optional chrono format arg
//! * `echo:text` - the argument verbatim
//! * `count:name` - a process-wide counter per name, starting at 1
//! * `batch_size` - number of parts in the batch
//! * `content[:index]` - payload of a part (default 0)
//! * `metadata:key[,index]` - metadata value of a part (default 0)
//! * `json_field:path[,index]` - dotted path into a part's JSON payload
//!
//! Unknown functions are left in place.

use crate::message::Batch;
use chrono::{DateTime, Local, TimeZone, Utc};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::{Captures, Regex};
use std::collections::HashMap;

const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

static FUNCTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{!([a-z_]+)(?::([^}]*))?\}").expect("function variable pattern is valid")
});

static COUNTERS: Lazy<Mutex<HashMap<String, u64>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Whether `value` contains any function variable tokens.
pub fn contains_function_variables(value: &str) -> bool {
    FUNCTION_PATTERN.is_match(value)
}

/// Replace every recognised function variable in `value` using `batch` as context.
pub fn replace_function_variables(batch: &Batch, value: &str) -> String {
    FUNCTION_PATTERN
        .replace_all(value, |caps: &Captures| {
            let name = &caps[1];
            let arg = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            resolve(batch, name, arg).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// A configured string that may need resolving per invocation.
///
/// Detection happens once at construction so plain values skip the regex.
#[derive(Debug, Clone)]
pub struct InterpolatedString {
    raw: String,
    dynamic: bool,
}

impl InterpolatedString {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let dynamic = contains_function_variables(&raw);
        Self { raw, dynamic }
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn resolve(&self, batch: &Batch) -> String {
        if self.dynamic {
            replace_function_variables(batch, &self.raw)
        } else {
            self.raw.clone()
        }
    }
}

fn resolve(batch: &Batch, name: &str, arg: &str) -> Option<String> {
    let value = match name {
        "hostname" => std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string()),
        "timestamp_unix" => Utc::now().timestamp().to_string(),
        "timestamp_unix_nano" => Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default()
            .to_string(),
        "timestamp" => format_timestamp(Local::now(), arg),
        "timestamp_utc" => format_timestamp(Utc::now(), arg),
        "echo" => arg.to_string(),
        "count" => next_count(arg).to_string(),
        "batch_size" => batch.len().to_string(),
        "content" => {
            let index = parse_index(arg)?;
            part_at(batch, index)
                .map(|p| p.payload_lossy().into_owned())
                .unwrap_or_default()
        }
        "metadata" => {
            let (key, index) = split_arg(arg)?;
            part_at(batch, index)
                .and_then(|p| p.get_metadata(key))
                .unwrap_or_default()
                .to_string()
        }
        "json_field" => {
            let (path, index) = split_arg(arg)?;
            json_field(batch, path, index)
        }
        _ => return None,
    };
    Some(value)
}

/// Format `now` with a user supplied strftime pattern, falling back to the
/// default pattern when the supplied one is invalid.
fn format_timestamp<Tz>(now: DateTime<Tz>, arg: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    use std::fmt::Write;

    let pattern = if arg.is_empty() {
        DEFAULT_TIMESTAMP_FORMAT
    } else {
        arg
    };
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

fn next_count(name: &str) -> u64 {
    let mut counters = COUNTERS.lock();
    let count = counters.entry(name.to_string()).or_insert(0);
    *count += 1;
    *count
}

fn parse_index(arg: &str) -> Option<i64> {
    let arg = arg.trim();
    if arg.is_empty() {
        Some(0)
    } else {
        arg.parse().ok()
    }
}

/// Split `key[,index]` arguments; the index defaults to the first part.
fn split_arg(arg: &str) -> Option<(&str, i64)> {
    match arg.rsplit_once(',') {
        Some((key, index)) => Some((key, parse_index(index)?)),
        None => Some((arg, 0)),
    }
}

fn part_at(batch: &Batch, index: i64) -> Option<&crate::message::Part> {
    batch.resolve_index(index).and_then(|i| batch.get(i))
}

fn json_field(batch: &Batch, path: &str, index: i64) -> String {
    let Some(part) = part_at(batch, index) else {
        return "null".to_string();
    };
    let Ok(root) = serde_json::from_slice::<serde_json::Value>(&part.payload) else {
        return "null".to_string();
    };

    let mut current = &root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let next = match current {
            serde_json::Value::Object(map) => map.get(segment),
            serde_json::Value::Array(items) => {
                segment.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return "null".to_string(),
        }
    }

    match current {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
