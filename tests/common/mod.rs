#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use schemedir::{RecordStore, SchemeRecord};

// Генератор уникальных временных путей для тестов
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub fn unique_path(prefix: &str, ext: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("schemedir-{prefix}-{pid}-{t}-{id}.{ext}"))
}

pub fn rec(id: i64, name: &str) -> SchemeRecord {
    SchemeRecord::new(id, name, format!("https://schemes.example.gov.in/{id}"))
}

/// Четыре записи из эталонного сценария.
pub fn sample_records() -> Vec<SchemeRecord> {
    vec![
        rec(1, "PM-KISAN"),
        rec(2, "PM Fasal Bima Yojna"),
        rec(3, "Soil Health Card"),
        rec(4, "PM Krishi Sinchai Yojna"),
    ]
}

pub fn sample_store() -> RecordStore {
    RecordStore::from_records(sample_records()).expect("sample records are valid")
}

/// `n` records with deterministic, varied names.
pub fn generated_records(n: usize) -> Vec<SchemeRecord> {
    const WORDS: [&str; 8] = [
        "Kisan", "Fasal", "Bima", "Soil", "Krishi", "Sinchai", "Dairy", "Kusum",
    ];
    (0..n)
        .map(|i| {
            let a = WORDS[i % WORDS.len()];
            let b = WORDS[(i * 3 + 1) % WORDS.len()];
            let prefix = if i % 3 == 0 { "PM " } else { "" };
            rec(i as i64 + 1, &format!("{prefix}{a} {b} Yojana {i}"))
        })
        .collect()
}

pub fn names<'a, I: IntoIterator<Item = &'a SchemeRecord>>(it: I) -> Vec<String> {
    it.into_iter().map(|r| r.name.clone()).collect()
}
