use std::path::PathBuf;

use schemedir::{DirectoryConfig, RecordStore};

/// ENV config with CLI overrides applied on top.
pub fn config_from(data: Option<PathBuf>, page_size: Option<usize>) -> DirectoryConfig {
    let mut cfg = DirectoryConfig::from_env();
    if data.is_some() {
        cfg = cfg.with_data_path(data);
    }
    if let Some(n) = page_size {
        cfg = cfg.with_page_size(n);
    }
    cfg
}

/// Load-once store; missing/malformed source -> empty store.
pub fn open_store(cfg: &DirectoryConfig) -> RecordStore {
    RecordStore::load_path(&cfg.resolved_data_path())
}
