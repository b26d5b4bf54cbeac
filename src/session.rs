//! Interactive browse session: one input line -> one controller event.
//!
//! Формат команд:
//!   /текст      — новый поисковый запрос ("/" без текста — сброс запроса)
//!   n | next    — следующая страница
//!   p | prev    — предыдущая страница
//!   g N | goto N — перейти на страницу N
//!   first | last
//!   ? | help
//!   q | quit
//! Любая другая непустая строка трактуется как поисковый запрос.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::controller::{DirectoryController, PageRequest};
use crate::paginator::parse_page_number;
use crate::view::PageView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Query(String),
    Page(PageRequest),
    Help,
    Quit,
    /// Blank line or a malformed command; rerender current view.
    Ignore,
}

pub const HELP: &str = "\
/text     search (\"/\" alone clears the query)
n, next   next page
p, prev   previous page
g N       go to page N
first     first page
last      last page
q, quit   leave";

pub fn parse_line(line: &str) -> Event {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
    if let Some(q) = line.strip_prefix('/') {
        return Event::Query(q.to_string());
    }
    let cmd = line.trim();
    match cmd {
        "" => Event::Ignore,
        "n" | "next" => Event::Page(PageRequest::Next),
        "p" | "prev" => Event::Page(PageRequest::Previous),
        "first" => Event::Page(PageRequest::First),
        "last" => Event::Page(PageRequest::Last),
        "?" | "help" => Event::Help,
        "q" | "quit" => Event::Quit,
        // goto без номера
        "g" | "goto" => Event::Ignore,
        _ => {
            let mut it = cmd.splitn(2, char::is_whitespace);
            match (it.next(), it.next()) {
                (Some("g") | Some("goto"), Some(n)) => match parse_page_number(n) {
                    Some(n) => Event::Page(PageRequest::Number(n)),
                    None => Event::Ignore,
                },
                _ => Event::Query(line.to_string()),
            }
        }
    }
}

/// Apply one event. Returns None on Quit.
pub fn apply(ctl: &mut DirectoryController, ev: &Event) -> Option<PageView> {
    match ev {
        Event::Query(q) => Some(ctl.set_query(q)),
        Event::Page(req) => Some(ctl.request_page(*req)),
        Event::Help | Event::Ignore => Some(ctl.view()),
        Event::Quit => None,
    }
}

/// Event loop: read lines until EOF/quit, render a view after each.
/// Each line is handled to completion before the next is read.
pub fn run<R: BufRead, W: Write>(ctl: &mut DirectoryController, input: R, mut out: W) -> Result<()> {
    write!(out, "{}", ctl.view().render_text())?;
    for line in input.lines() {
        let line = line?;
        let ev = parse_line(&line);
        if ev == Event::Help {
            writeln!(out, "{}", HELP)?;
            continue;
        }
        match apply(ctl, &ev) {
            Some(view) => write!(out, "{}", view.render_text())?,
            None => break,
        }
        out.flush()?;
    }
    Ok(())
}
