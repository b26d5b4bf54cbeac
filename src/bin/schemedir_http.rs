use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};
use tiny_http::{Header, Response, Server};

use std::path::PathBuf;

use schemedir::metrics;
use schemedir::request::url_path;
use schemedir::{DirectoryConfig, EmptyPagePolicy, RecordStore, ViewRequest};

#[derive(Parser, Debug)]
#[command(
    name = "schemedir_http",
    version,
    about = "Scheme directory over HTTP (JSON pages + Prometheus metrics)"
)]
struct Opt {
    #[arg(long, default_value = "127.0.0.1:9899")]
    addr: String,
    /// JSON record source (default: $SCHEMEDIR_DATA or ./scheme.json)
    #[arg(long)]
    data: Option<PathBuf>,
    #[arg(long)]
    page_size: Option<usize>,
    /// Empty-result page policy: single | hide
    #[arg(long)]
    empty_policy: Option<String>,
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn config_from(opt: &Opt) -> Result<DirectoryConfig> {
    let mut cfg = DirectoryConfig::from_env();
    if opt.data.is_some() {
        cfg = cfg.with_data_path(opt.data.clone());
    }
    if let Some(n) = opt.page_size {
        cfg = cfg.with_page_size(n);
    }
    if let Some(p) = &opt.empty_policy {
        let policy = EmptyPagePolicy::parse(p)
            .ok_or_else(|| anyhow!("unknown --empty-policy '{}' (expected single|hide)", p))?;
        cfg = cfg.with_empty_policy(policy);
    }
    Ok(cfg)
}

fn run() -> Result<()> {
    let opt = Opt::parse();
    let cfg = config_from(&opt)?;
    info!("{}", cfg);

    // store грузится один раз и дальше только читается
    let store = RecordStore::load_path(&cfg.resolved_data_path());

    let server = Server::http(&opt.addr)
        .map_err(|e| anyhow!("bind http at {}: {}", opt.addr, e))?;
    info!("schemedir_http listening on {} ({} records)", opt.addr, store.len());

    loop {
        let rq = match server.recv() {
            Ok(rq) => rq,
            Err(e) => {
                warn!("http recv error: {}", e);
                continue;
            }
        };

        let url = rq.url().to_string();
        let method = rq.method().as_str().to_string();
        let path = url_path(&url);

        if method == "GET" && (path == "/" || path == "/health" || path == "/ready") {
            let resp = Response::from_string("OK\n").with_status_code(200);
            let _ = rq.respond(resp);
            continue;
        }

        if method == "GET" && path == "/schemes" {
            let view = ViewRequest::from_url(&url).execute(&store, &cfg);
            let mut resp = Response::from_string(view.to_json());
            if let Ok(ct) = Header::from_bytes(b"Content-Type", b"application/json") {
                resp.add_header(ct);
            }
            let _ = rq.respond(resp);
            continue;
        }

        if method == "GET" && path == "/metrics" {
            let mut resp = Response::from_string(build_metrics(&store));
            if let Ok(ct) = Header::from_bytes(b"Content-Type", b"text/plain; version=0.0.4") {
                resp.add_header(ct);
            }
            let _ = rq.respond(resp);
            continue;
        }

        let resp = Response::from_string("not found\n").with_status_code(404);
        let _ = rq.respond(resp);
    }
}

fn build_metrics(store: &RecordStore) -> String {
    let m = metrics::snapshot();
    let mut out = String::new();

    let ver = env!("CARGO_PKG_VERSION");
    out.push_str("# HELP schemedir_build_info Build info.\n");
    out.push_str("# TYPE schemedir_build_info gauge\n");
    out.push_str(&format!("schemedir_build_info{{version=\"{}\"}} 1\n", ver));

    // --- Store ---
    out.push_str("# HELP schemedir_records Records currently served.\n");
    out.push_str("# TYPE schemedir_records gauge\n");
    out.push_str(&format!("schemedir_records {}\n", store.len()));

    out.push_str("# HELP schemedir_store_loads_ok_total Successful record source loads.\n");
    out.push_str("# TYPE schemedir_store_loads_ok_total counter\n");
    out.push_str(&format!("schemedir_store_loads_ok_total {}\n", m.store_loads_ok));

    out.push_str("# HELP schemedir_store_loads_failed_total Loads degraded to an empty directory.\n");
    out.push_str("# TYPE schemedir_store_loads_failed_total counter\n");
    out.push_str(&format!("schemedir_store_loads_failed_total {}\n", m.store_loads_failed));

    // --- Controller ---
    out.push_str("# HELP schemedir_query_changes_total Query changes (re-filter + page reset).\n");
    out.push_str("# TYPE schemedir_query_changes_total counter\n");
    out.push_str(&format!("schemedir_query_changes_total {}\n", m.query_changes));

    out.push_str("# HELP schemedir_page_requests_total Page navigation requests.\n");
    out.push_str("# TYPE schemedir_page_requests_total counter\n");
    out.push_str(&format!("schemedir_page_requests_total {}\n", m.page_requests));

    out.push_str("# HELP schemedir_page_requests_clamped_total Page requests clamped into range.\n");
    out.push_str("# TYPE schemedir_page_requests_clamped_total counter\n");
    out.push_str(&format!("schemedir_page_requests_clamped_total {}\n", m.page_requests_clamped));

    out.push_str("# HELP schemedir_page_requests_noop_total Page requests that left the page unchanged.\n");
    out.push_str("# TYPE schemedir_page_requests_noop_total counter\n");
    out.push_str(&format!("schemedir_page_requests_noop_total {}\n", m.page_requests_noop));

    // --- Views ---
    out.push_str("# HELP schemedir_views_published_total Page views published.\n");
    out.push_str("# TYPE schemedir_views_published_total counter\n");
    out.push_str(&format!("schemedir_views_published_total {}\n", m.views_published));

    out.push_str("# HELP schemedir_views_empty_ratio Share of empty views (percent).\n");
    out.push_str("# TYPE schemedir_views_empty_ratio gauge\n");
    out.push_str(&format!("schemedir_views_empty_ratio {:.2}\n", m.empty_view_ratio() * 100.0));

    out
}
