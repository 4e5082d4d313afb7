//! hilite - print a source file with incremental syntax highlighting

use std::env;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use hilite::error::Result;
use hilite::syntax::{Highlighter, ProfileRegistry, TextSource};
use hilite::terminal::{terminal_width, Printer};
use hilite::{Config, Document};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    lang: Option<String>,
    spans: bool,
    color: bool,
    width: Option<usize>,
    fit: bool,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("HILITE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let Some(opts) = parse_args(env::args().skip(1)) else {
        return Ok(());
    };

    let Some(path) = opts.file.as_ref() else {
        print_usage();
        process::exit(2);
    };

    let config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring config file: {}", e);
        Config::default()
    });

    let mut registry = ProfileRegistry::new()?;
    if let Err(e) = config.apply_aliases(&mut registry) {
        warn!("ignoring aliases: {}", e);
    }

    let profile = match (&opts.lang, &config.default_language) {
        (Some(tag), _) => registry.resolve(tag),
        (None, default) => match registry.lookup_path(path) {
            Some(profile) => profile,
            None => registry.resolve(default.as_deref().unwrap_or_default()),
        },
    };
    debug!(file = %path.display(), profile = %profile.id, "highlighting");

    let doc = Document::from_file(path)?;
    let mut hl = Highlighter::new(profile).with_batch(config.recompute_batch);
    let mut settled = hl.on_document_loaded(&doc);
    while !settled {
        settled = hl.resume(&doc);
    }

    let width = if opts.fit { terminal_width() } else { opts.width };
    let stdout = io::stdout();
    let mut printer = Printer::new(BufWriter::new(stdout.lock()), config.theme())
        .with_color(opts.color)
        .with_width(width);

    for idx in 0..doc.line_count() {
        let text = doc.line(idx).unwrap_or_default();
        let styles = hl.styled_spans(idx);
        if opts.spans {
            let exit = hl.exit_state(idx).unwrap_or_default();
            printer.write_spans(idx, text, styles, exit)?;
        } else {
            printer.write_line(text, styles)?;
        }
    }
    printer.flush()?;

    Ok(())
}

/// Parse arguments; None means the program should exit successfully
fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Options> {
    let mut opts = Options {
        color: true,
        ..Default::default()
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return None;
            }
            "--version" | "-V" => {
                print_version();
                return None;
            }
            "--lang" | "-l" => opts.lang = args.next(),
            "--spans" => opts.spans = true,
            "--no-color" => opts.color = false,
            "--fit" => opts.fit = true,
            "--width" | "-w" => opts.width = args.next().and_then(|w| w.parse().ok()),
            _ if arg.starts_with('-') => {
                eprintln!("hilite: unknown option '{}'", arg);
            }
            _ => opts.file = Some(PathBuf::from(arg)),
        }
    }

    Some(opts)
}

fn print_usage() {
    println!("hilite {} - incremental syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: hilite [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --lang TAG   Language id or extension (cpp, py, js, ...)");
    println!("      --spans      Print styled spans instead of colored text");
    println!("      --no-color   Print text without colors");
    println!("  -w, --width N    Clip lines to N display columns");
    println!("      --fit        Clip lines to the terminal width");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Set HILITE_LOG (e.g. HILITE_LOG=debug) for diagnostics.");
}

fn print_version() {
    println!("hilite {}", env!("CARGO_PKG_VERSION"));
}
