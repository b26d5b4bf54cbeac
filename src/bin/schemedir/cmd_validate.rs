use anyhow::{anyhow, Result};
use std::path::PathBuf;

use schemedir::RecordStore;

use super::util::config_from;

/// Strict load: unlike the directory views, report why a source is rejected.
pub fn exec(data: Option<PathBuf>, json: bool) -> Result<()> {
    let cfg = config_from(data, None);
    let path = cfg.resolved_data_path();

    let res = RecordStore::try_load_path(&path);
    if json {
        let obj = match &res {
            Ok(store) => serde_json::json!({
                "path": path.display().to_string(),
                "ok": true,
                "records": store.len(),
            }),
            Err(e) => serde_json::json!({
                "path": path.display().to_string(),
                "ok": false,
                "error": format!("{:#}", e),
            }),
        };
        println!("{}", obj);
    } else {
        match &res {
            Ok(store) => println!("OK: {} records in {}", store.len(), path.display()),
            Err(e) => println!("INVALID: {:#}", e),
        }
    }

    // причина уже напечатана в отчёте; main получает только короткий итог
    // (ненулевой код выхода)
    match res {
        Ok(_) => Ok(()),
        Err(_) => Err(anyhow!("source rejected")),
    }
}
