mod commands;
mod config;
mod render;

use clap::Parser;
use colored::Colorize;
use commands::{Reply, ShellCommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use storyline_editor::EditorController;
use tracing_subscriber::EnvFilter;

/// Storyline - write stories panel by panel
#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./storyline.config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the status line after every command
    #[arg(short, long)]
    status: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = config::load(&cwd, cli.config.as_deref())?;

    let mut editor = EditorController::new(config);
    run(&mut editor, io::stdin().lock(), io::stdout().lock(), cli.status)
}

fn run(
    editor: &mut EditorController,
    input: impl BufRead,
    mut output: impl Write,
    status: bool,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{} {}", "error:".red().bold(), e)?;
                continue;
            }
        };

        match command.run(editor) {
            Reply::Quit => break,
            Reply::Print(text) => writeln!(output, "{}", text)?,
            Reply::Done { changed: false } => {
                writeln!(output, "{}", "(no change)".dimmed())?
            }
            Reply::Done { changed: true } => {}
        }

        if status {
            writeln!(output, "{}", render::status_line(editor))?;
        }
    }

    Ok(())
}
