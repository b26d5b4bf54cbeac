use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI каталога схем поддержки фермеров
#[derive(Parser, Debug)]
#[command(name = "schemedir", version, about = "Farmer welfare scheme directory")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print one page of all schemes
    List {
        /// JSON record source (default: $SCHEMEDIR_DATA or ./scheme.json)
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        page: i64,
        /// Records per page (default: $SCHEMEDIR_PAGE_SIZE or 10)
        #[arg(long)]
        page_size: Option<usize>,
        /// JSON output (single PageView object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Search schemes by name (case-insensitive substring) and print one page
    ///
    /// Пример:
    ///   schemedir search --data ./scheme.json --query kisan --page 2
    Search {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Interactive browsing on stdin (type "help" for commands)
    Browse {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Check that a record source loads; prints count or the reason it is rejected
    Validate {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Cli as Parser>::parse()
    }
}
