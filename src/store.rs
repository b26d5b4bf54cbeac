//! Record store: load-once, read-only list of scheme records.
//!
//! Источник — JSON-массив объектов `{"id":..,"name":"..","link":".."}`
//! (bundled scheme.json). Порядок записей сохраняется как в источнике.
//!
//! Failure policy:
//! - `try_load*` return an error describing why the source is missing/malformed.
//! - `load*` never fail: a bad source degrades to an empty store (warn + metrics),
//!   so the directory renders its empty state instead of crashing.
//!
//! A source is malformed as a whole if any record fails validation
//! (empty name, bad link) or two records share an id.

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::metrics;
use crate::record::SchemeRecord;

/// Immutable ordered record list, cheap to clone (shared `Arc`).
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[SchemeRecord]>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl RecordStore {
    /// Empty store (the degraded state).
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    /// Build from in-process records; validated like a loaded source.
    pub fn from_records(records: Vec<SchemeRecord>) -> Result<Self> {
        validate_all(&records)?;
        Ok(Self {
            records: records.into(),
        })
    }

    // -------- fallible --------

    pub fn try_load_str(json: &str) -> Result<Self> {
        let records: Vec<SchemeRecord> =
            serde_json::from_str(json).context("parse scheme records json (array of objects)")?;
        Self::from_records(records)
    }

    pub fn try_load_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<SchemeRecord> = serde_json::from_reader(reader)
            .context("parse scheme records json (array of objects)")?;
        Self::from_records(records)
    }

    pub fn try_load_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!("record source {} does not exist", path.display()));
        }
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::try_load_str(&raw).with_context(|| format!("load {}", path.display()))
    }

    // -------- infallible (degrade to empty) --------

    pub fn load_str(json: &str) -> Self {
        degrade(Self::try_load_str(json), "inline json")
    }

    pub fn load_reader<R: Read>(reader: R) -> Self {
        degrade(Self::try_load_reader(reader), "reader")
    }

    pub fn load_path(path: &Path) -> Self {
        degrade(Self::try_load_path(path), &path.display().to_string())
    }

    // -------- accessors --------

    pub fn records(&self) -> &[SchemeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_by_id(&self, id: i64) -> Option<&SchemeRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl Deref for RecordStore {
    type Target = [SchemeRecord];

    fn deref(&self) -> &[SchemeRecord] {
        &self.records
    }
}

fn validate_all(records: &[SchemeRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for r in records {
        r.validate()?;
        if !seen.insert(r.id) {
            return Err(anyhow!("duplicate record id={}", r.id));
        }
    }
    Ok(())
}

fn degrade(res: Result<RecordStore>, source: &str) -> RecordStore {
    match res {
        Ok(store) => {
            info!("loaded {} scheme records from {}", store.len(), source);
            metrics::record_store_load_ok(store.len());
            store
        }
        Err(e) => {
            warn!("scheme source {} unusable, serving empty directory: {:#}", source, e);
            metrics::record_store_load_failed();
            RecordStore::empty()
        }
    }
}
