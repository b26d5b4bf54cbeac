use anyhow::Result;
use std::path::PathBuf;

use schemedir::{DirectoryController, PageRequest};

use super::util::{config_from, open_store};

/// `list` is `search` with an empty query.
pub fn exec(
    data: Option<PathBuf>,
    query: String,
    page: i64,
    page_size: Option<usize>,
    json: bool,
) -> Result<()> {
    let cfg = config_from(data, page_size);
    let store = open_store(&cfg);

    let mut ctl = DirectoryController::new(store, &cfg);
    ctl.set_query(&query);
    let view = ctl.request_page(PageRequest::Number(page));

    if json {
        println!("{}", view.to_json_pretty());
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}
