use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::model::{FaqEntry, IntentEntry};
use crate::presentation::Presentation;

/// Load FAQ entries from `.json` or `.jsonl`.
///
/// A JSON file may hold an array of entries or an object keyed by id; the
/// file order becomes the collection order either way.
pub fn load_faq(path: &Path) -> Result<Vec<FaqEntry>> {
    let entries = if path.extension().is_some_and(|ext| ext == "jsonl") {
        load_faq_jsonl(path)?
    } else {
        load_faq_json(path)?
    };
    info!(path = %path.display(), entries = entries.len(), "loaded faq");
    Ok(entries)
}

pub fn load_faq_json(path: &Path) -> Result<Vec<FaqEntry>> {
    let value: Value = read_json(path)?;
    faqs_from_value(value).with_context(|| format!("read faq entries from {}", path.display()))
}

pub fn load_faq_jsonl(path: &Path) -> Result<Vec<FaqEntry>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line.context("read jsonl line")?;
        if line.trim().is_empty() {
            continue;
        }
        let mut entry: FaqEntry = serde_json::from_str(&line).context("parse faq entry json")?;
        if entry.id.is_empty() {
            entry.id = entries.len().to_string();
        }
        entries.push(entry);
    }

    Ok(entries)
}

/// Like [`load_faq`], but a missing file yields an empty collection.
pub fn load_faq_or_empty(path: &Path) -> Result<Vec<FaqEntry>> {
    if !exists_or_warn(path, "faq")? {
        return Ok(Vec::new());
    }
    load_faq(path)
}

pub fn load_intents_json(path: &Path) -> Result<Vec<IntentEntry>> {
    let intents: Vec<IntentEntry> = read_json(path)?;
    info!(path = %path.display(), intents = intents.len(), "loaded intents");
    Ok(intents)
}

/// Like [`load_intents_json`], but a missing file yields `fallback`.
pub fn load_intents_or(path: &Path, fallback: Vec<IntentEntry>) -> Result<Vec<IntentEntry>> {
    if !exists_or_warn(path, "intents")? {
        return Ok(fallback);
    }
    load_intents_json(path)
}

pub fn load_presentation_json(path: &Path) -> Result<Presentation> {
    read_json(path)
}

/// Like [`load_presentation_json`], but a missing file yields the built-in
/// presentation.
pub fn load_presentation_or_builtin(path: &Path) -> Result<Presentation> {
    if !exists_or_warn(path, "presentation")? {
        return Ok(Presentation::builtin());
    }
    load_presentation_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse json {}", path.display()))
}

fn exists_or_warn(path: &Path, what: &str) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "{what} file not found; using fallback");
            Ok(false)
        }
        Err(err) => Err(err).with_context(|| format!("stat {}", path.display())),
    }
}

fn faqs_from_value(value: Value) -> Result<Vec<FaqEntry>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| -> Result<FaqEntry> {
                let mut entry: FaqEntry =
                    serde_json::from_value(item).with_context(|| format!("faq #{idx}"))?;
                if entry.id.is_empty() {
                    entry.id = idx.to_string();
                }
                Ok(entry)
            })
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, item)| -> Result<FaqEntry> {
                let mut entry: FaqEntry =
                    serde_json::from_value(item).with_context(|| format!("faq {key}"))?;
                if entry.id.is_empty() {
                    entry.id = key;
                }
                Ok(entry)
            })
            .collect(),
        other => bail!("expected an array or object of faq entries, found {other}"),
    }
}
