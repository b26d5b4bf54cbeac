use anyhow::Result;
use env_logger::{Builder, Env};

mod cli;
mod util;
mod cmd_search;
mod cmd_browse;
mod cmd_validate;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug ./schemedir browse ...
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::List { data, page, page_size, json } =>
            cmd_search::exec(data, String::new(), page, page_size, json),

        cli::Cmd::Search { data, query, page, page_size, json } =>
            cmd_search::exec(data, query, page, page_size, json),

        cli::Cmd::Browse { data, page_size } =>
            cmd_browse::exec(data, page_size),

        cli::Cmd::Validate { data, json } =>
            cmd_validate::exec(data, json),
    }
}
