//! Centralized configuration and builder for the scheme directory.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - DirectoryConfig::from_env() reads SCHEMEDIR_* variables; CLI flags override them.
//! - Page size and the empty-result page policy are explicit configuration,
//!   not constants baked into each view.
//!
//! Defaults:
//! - page_size = 10
//! - empty_policy = ShowSinglePage ("Page 1 of 1" even for zero results)
//! - data_path = None (callers fall back to ./scheme.json)

use std::fmt;
use std::path::PathBuf;

use crate::consts::{
    DEFAULT_DATA_FILE, DEFAULT_PAGE_SIZE, ENV_DATA, ENV_EMPTY_POLICY, ENV_PAGE_SIZE, MAX_PAGE_SIZE,
};

/// What the paginator reports as page count for an empty filtered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyPagePolicy {
    /// page_count = max(1, ceil(n / size)); empty result shows "Page 1 of 1".
    #[default]
    ShowSinglePage,
    /// page_count = ceil(n / size); empty result has 0 pages and no controls.
    HideControls,
}

impl EmptyPagePolicy {
    /// Parse ENV/CLI spelling. Unknown values -> None.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "show" | "1" => Some(Self::ShowSinglePage),
            "hide" | "hidden" | "0" => Some(Self::HideControls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShowSinglePage => "single",
            Self::HideControls => "hide",
        }
    }
}

/// Top-level configuration for a directory view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Records per page window.
    /// Env: SCHEMEDIR_PAGE_SIZE (default 10; 0 and garbage are ignored)
    pub page_size: usize,

    /// Page count reported for an empty result.
    /// Env: SCHEMEDIR_EMPTY_POLICY = single|hide (default single)
    pub empty_policy: EmptyPagePolicy,

    /// Optional path to the JSON record source.
    /// Env: SCHEMEDIR_DATA = "/absolute/or/relative/path"
    pub data_path: Option<PathBuf>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            empty_policy: EmptyPagePolicy::ShowSinglePage,
            data_path: None,
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from environment variables on top of defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var(ENV_PAGE_SIZE) {
            if let Ok(n) = v.trim().parse::<usize>() {
                if n > 0 {
                    cfg.page_size = n.min(MAX_PAGE_SIZE);
                }
            }
        }

        if let Ok(v) = std::env::var(ENV_EMPTY_POLICY) {
            if let Some(p) = EmptyPagePolicy::parse(&v) {
                cfg.empty_policy = p;
            }
        }

        if let Ok(v) = std::env::var(ENV_DATA) {
            let s = v.trim();
            if !s.is_empty() {
                cfg.data_path = Some(PathBuf::from(s));
            }
        }

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    /// Zero is ignored (page size must stay positive).
    pub fn with_page_size(mut self, size: usize) -> Self {
        if size > 0 {
            self.page_size = size.min(MAX_PAGE_SIZE);
        }
        self
    }

    pub fn with_empty_policy(mut self, policy: EmptyPagePolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    pub fn with_data_path<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.data_path = path.map(Into::into);
        self
    }

    /// Data source to load: explicit path or ./scheme.json.
    pub fn resolved_data_path(&self) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> Self {
        self
    }
}

impl fmt::Display for DirectoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectoryConfig {{ page_size: {}, empty_policy: {}, data_path: {} }}",
            self.page_size,
            self.empty_policy.as_str(),
            self.data_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("default({})", DEFAULT_DATA_FILE)),
        )
    }
}

/// Lightweight builder that produces a DirectoryConfig.
#[derive(Clone, Debug)]
pub struct DirectoryBuilder {
    cfg: DirectoryConfig,
}

impl Default for DirectoryBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: DirectoryConfig::from_env(),
        }
    }
}

impl DirectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: DirectoryConfig::default(),
        }
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.cfg = self.cfg.with_page_size(size);
        self
    }

    pub fn empty_policy(mut self, policy: EmptyPagePolicy) -> Self {
        self.cfg.empty_policy = policy;
        self
    }

    pub fn data_path<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.cfg.data_path = path.map(Into::into);
        self
    }

    pub fn build(self) -> DirectoryConfig {
        self.cfg
    }
}
