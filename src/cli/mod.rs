// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All question-answering logic is delegated to Layer 2.
//
// Three commands are supported:
//   1. `session` — interactive loop: set a context, ask away
//   2. `ask`     — answers one question and exits
//   3. `theme`   — shows/toggles/sets the display preference
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use commands::{AskArgs, Commands, SessionArgs, ThemeAction, ThemeArgs};

use crate::application::session::Session;
use crate::domain::theme::Theme;
use crate::domain::traits::SessionView;
use crate::infra::console_view::ConsoleView;
use crate::infra::theme_store::ThemeStore;
use crate::service::lexical::LexicalAnswerer;

/// Shown when the interactive session starts and on `:help`
const SESSION_HELP: &str = "\
Commands:
  :context <file>   load the context passage from a file
  :paste            enter a context passage, finish with a lone '.'
  :theme            toggle between light and dark
  :help             show this help
  :quit             leave the session
Anything else is treated as a question.";

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "context-qa",
    version = "0.1.0",
    about = "Paste a context passage, ask a question, get extractive answers with confidence scores."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct flow.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Session(args) => run_session(args),
            Commands::Ask(args)     => run_ask(args),
            Commands::Theme(args)   => run_theme(args),
        }
    }
}

/// Build a session with the service already loaded (or its load
/// failure already rendered). Shared by `ask` and `session`.
fn load_session(
    options: crate::application::render::RenderOptions,
    view:    &mut dyn SessionView,
) -> Session {
    let mut session = Session::new(options);
    session.begin_service_load(view);
    match LexicalAnswerer::load() {
        Ok(service) => session.install_service(Box::new(service), view),
        // The session stays usable: every submission now gets
        // the fixed not-ready message instead of a crash
        Err(error) => session.fail_service_load(&error, view),
    }
    session
}

/// Handles the `ask` subcommand: one validated submission, then exit.
/// Missing inputs are reported through the same fixed messages the
/// interactive session uses, not as process errors.
fn run_ask(args: AskArgs) -> Result<()> {
    let store    = ThemeStore::new(&args.state_dir);
    let mut view = ConsoleView::new(store.load());
    let mut session = load_session((&args.display).into(), &mut view);

    let context = match (&args.context, &args.context_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file '{path}'"))?,
        // No context given: the validation gate renders the
        // fixed empty-context message
        (None, None) => String::new(),
    };

    session.set_context(&context, &mut view);
    session.set_question(&args.question, &mut view);
    session.submit(&mut view);
    Ok(())
}

/// Handles the `session` subcommand: a read-eval loop standing in
/// for the page. One line per interaction; questions submit
/// immediately, `:`-prefixed lines are commands.
fn run_session(args: SessionArgs) -> Result<()> {
    let store    = ThemeStore::new(&args.state_dir);
    let mut view = ConsoleView::new(store.load());
    let mut session = load_session((&args.display).into(), &mut view);

    if !session.is_ready() {
        println!("The service failed to load; questions cannot be answered in this session.");
    }

    if let Some(path) = &args.context_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file '{path}'"))?;
        println!("Context loaded from '{path}' ({} chars)", text.len());
        session.set_context(&text, &mut view);
    }

    println!("\n{SESSION_HELP}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // EOF ends the session like :quit
            None => break,
        };
        let line = line.trim().to_string();

        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            let (name, rest) = match command.split_once(char::is_whitespace) {
                Some((name, rest)) => (name, rest.trim()),
                None => (command, ""),
            };

            match name {
                "quit" | "q" => break,
                "help" => println!("{SESSION_HELP}"),
                "theme" => {
                    let theme = store.toggle()?;
                    view.set_theme(theme);
                    println!("Theme is now {}", theme.as_str());
                }
                "context" if !rest.is_empty() => match fs::read_to_string(rest) {
                    Ok(text) => {
                        println!("Context loaded from '{rest}' ({} chars)", text.len());
                        session.set_context(&text, &mut view);
                    }
                    // Stay interactive: a bad path is a message,
                    // not the end of the session
                    Err(error) => println!("Could not read '{rest}': {error}"),
                },
                "paste" => {
                    let text = read_pasted_context(&mut lines)?;
                    println!("Context set ({} chars)", text.len());
                    session.set_context(&text, &mut view);
                }
                _ => println!("Unknown command ':{command}' — try :help"),
            }
            continue;
        }

        // Everything else is a question. The begin/complete split
        // is what lets a future concurrent driver discard stale
        // completions; here the two halves simply run back to back.
        session.set_question(&line, &mut view);
        if let Ok(pending) = session.begin_submission(&mut view) {
            tracing::debug!(
                "Submitting {:?} against {} chars of context",
                pending.question(),
                pending.context().len(),
            );
            let result = session.run_query(&pending);
            session.complete_submission(pending, result, &mut view);
        }
    }

    Ok(())
}

/// Read lines until a lone '.' (or EOF) and join them into one
/// context passage.
fn read_pasted_context(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String> {
    let mut collected = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim() == "." {
            break;
        }
        collected.push(line);
    }
    Ok(collected.join("\n"))
}

/// Handles the `theme` subcommand.
fn run_theme(args: ThemeArgs) -> Result<()> {
    let store = ThemeStore::new(&args.state_dir);

    match args.action {
        ThemeAction::Show => {
            println!("{}", store.load().as_str());
        }
        ThemeAction::Toggle => {
            let theme = store.toggle()?;
            println!("Theme is now {}", theme.as_str());
        }
        ThemeAction::Set { value } => {
            let theme = Theme::from_stored(&value)
                .ok_or_else(|| anyhow::anyhow!("Unknown theme '{value}' (use light or dark)"))?;
            store.save(theme)?;
            println!("Theme set to {}", theme.as_str());
        }
    }
    Ok(())
}
