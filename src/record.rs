//! SchemeRecord — одна запись каталога: {id, name, link}.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// One directory entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub id: i64,
    pub name: String,
    pub link: String,
}

impl SchemeRecord {
    pub fn new<N: Into<String>, L: Into<String>>(id: i64, name: N, link: L) -> Self {
        Self {
            id,
            name: name.into(),
            link: link.into(),
        }
    }

    /// Check field-level constraints: non-empty name, absolute http(s) link.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("record id={} has an empty name", self.id));
        }
        if !is_well_formed_link(&self.link) {
            return Err(anyhow!(
                "record id={} has a malformed link '{}'",
                self.id,
                self.link
            ));
        }
        Ok(())
    }
}

/// Absolute http/https URL with a non-empty host and no whitespace.
pub fn is_well_formed_link(link: &str) -> bool {
    // Url::parse молча срезает пробелы по краям — такие ссылки не принимаем
    if link.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(link) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().map_or(false, |h| !h.is_empty())
        }
        Err(_) => false,
    }
}
