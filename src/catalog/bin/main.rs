use std::io::{BufRead, IsTerminal, Write};
use clap::Parser;
use tracing::info;
use library_manager::catalog::controller::{dispatch, parse_line};
use library_manager::catalog::factory::create_catalog_service;
use library_manager::core::domain::Configuration;
use library_manager::core::library::LibraryResult;
use library_manager::utils::logs::{parse_level, setup_tracing};

/// Personal library manager: add, view, search, update and delete books for one session
#[derive(Parser, Debug)]
#[command(name = "catalog", version)]
struct Cli {
    /// Label for this session, attached to every catalog event
    #[arg(long, default_value = "personal")]
    branch: String,

    /// Print replies as JSON, one document per line
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Do not publish catalog events
    #[arg(long)]
    no_events: bool,
}

const PROMPT: &str = "catalog> ";

fn main() -> LibraryResult<()> {
    let cli = Cli::parse();
    setup_tracing(parse_level(cli.log_level.as_str()), cli.log_json);

    let config = Configuration::new(cli.branch.as_str()).with_publish_events(!cli.no_events);
    let mut svc = create_catalog_service(&config);
    info!(branch = config.branch_id.as_str(), "catalog session started");

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    if interactive {
        writeln!(stdout, "Personal Library Manager. Type `help` for the menu.")?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "{}", PROMPT)?;
            stdout.flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let reply = match parse_line(line.as_str()) {
            Ok(Some(action)) => dispatch(svc.as_mut(), action),
            Ok(None) => continue,
            Err(reply) => reply,
        };
        if cli.json {
            if reply.notice.is_some() || !reply.books.is_empty() {
                writeln!(stdout, "{}", reply.render_json()?)?;
            }
        } else {
            write!(stdout, "{}", reply.render_text())?;
        }
        if reply.quit {
            break;
        }
    }

    info!(branch = config.branch_id.as_str(), "catalog session ended");
    Ok(())
}
