//! Command-line interface for refdex
//! Formats article-body text and inspects the builtin article catalog.
//!
//! Usage:
//!   refdex format `<path>`                - Format a text file (or `-` for stdin) as HTML
//!   refdex render `<article-id>`          - Render a catalog article as HTML
//!   refdex search `<query>` [--json]      - Search the catalog
//!   refdex list [--category `<category>`] - List catalog entries

use clap::{Arg, ArgAction, Command};
use refdex::catalog::{Catalog, Category};
use refdex::{format, render};
use std::io::Read;

fn main() {
    let matches = Command::new("refdex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A catalog of technical articles with an HTML body formatter")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("format")
                .about("Format article-body text as an HTML fragment")
                .arg(
                    Arg::new("path")
                        .help("Path to the text file, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a builtin-catalog article as HTML")
                .arg(
                    Arg::new("id")
                        .help("Article id (see 'refdex list')")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search titles, descriptions, tags, and bodies")
                .arg(Arg::new("query").required(true).index(1))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit matches as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list").about("List catalog entries").arg(
                Arg::new("category")
                    .long("category")
                    .short('c')
                    .help("Only entries in this category"),
            ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("format", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_format_command(path);
        }
        Some(("render", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            handle_render_command(id);
        }
        Some(("search", sub)) => {
            let query = sub.get_one::<String>("query").unwrap();
            handle_search_command(query, sub.get_flag("json"));
        }
        Some(("list", sub)) => {
            handle_list_command(sub.get_one::<String>("category").map(String::as_str));
        }
        _ => unreachable!(),
    }
}

/// Handle the format command
fn handle_format_command(path: &str) {
    let source = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            });
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    };

    println!("{}", format(&source));
}

/// Handle the render command
fn handle_render_command(id: &str) {
    let catalog = Catalog::builtin();
    match catalog.get(id) {
        Some(article) => println!("{}", render::render_article(article)),
        None => {
            eprintln!("Error: no article with id '{}'", id);
            std::process::exit(1);
        }
    }
}

/// Handle the search command
fn handle_search_command(query: &str, as_json: bool) {
    let catalog = Catalog::builtin();
    let matches = catalog.search(query);
    if as_json {
        let json = serde_json::to_string_pretty(&matches).unwrap_or_else(|e| {
            eprintln!("Error serializing results: {}", e);
            std::process::exit(1);
        });
        println!("{}", json);
        return;
    }
    if matches.is_empty() {
        println!("No matches for '{}'", query);
        return;
    }
    for article in matches {
        println!("{}  [{}]  {}", article.id, article.category, article.title);
    }
}

/// Handle the list command
fn handle_list_command(category: Option<&str>) {
    let catalog = Catalog::builtin();
    let articles: Vec<_> = match category {
        Some(raw) => {
            let category: Category = raw.parse().unwrap_or_else(|e: String| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            catalog.in_category(category)
        }
        None => catalog.articles().iter().collect(),
    };

    for article in articles {
        println!("{}  [{}]  {}", article.id, article.category, article.title);
    }
}
