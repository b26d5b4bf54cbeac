use anyhow::Result;
use std::io;
use std::path::PathBuf;

use schemedir::session;
use schemedir::DirectoryController;

use super::util::{config_from, open_store};

pub fn exec(data: Option<PathBuf>, page_size: Option<usize>) -> Result<()> {
    let cfg = config_from(data, page_size);
    let store = open_store(&cfg);
    let mut ctl = DirectoryController::new(store, &cfg);

    eprintln!("{} schemes loaded; type \"help\" for commands", ctl.store().len());
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut ctl, stdin.lock(), stdout.lock())
}
