//! `sigdesk` - CLI for signdesk
//!
//! This binary provides the command-line interface for the Moon River
//! knowledge base: login/logout, catalog browsing, the quick estimate
//! calculator, and the SOP flashcard deck.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use clap::Parser;

use signdesk::cli::{
    Cli, Command, ConfigCommand, EstimateCommand, ListCommand, LoginCommand, OutputFormat,
    QuizCommand, SearchCommand,
};
use signdesk::estimate::{Job, LABOR_RATE};
use signdesk::{init_logging, Catalog, Config, Deck, Document, Error, Session, StateStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        // Config commands don't need a session or state database
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
        command => {
            let store = StateStore::open(config.state_path())?;
            let mut session = Session::open(store, config.session.password.clone())?;
            run_command(&config, &mut session, command)
        }
    }
}

/// Dispatch a command against an opened session.
fn run_command(config: &Config, session: &mut Session, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login(login_cmd) => handle_login(session, &login_cmd),
        Command::Logout => handle_logout(session),
        Command::Status(status_cmd) => handle_status(config, session, status_cmd.json),
        Command::List(list_cmd) => {
            ensure_authenticated(session)?;
            handle_list(&list_cmd)
        }
        Command::Search(search_cmd) => {
            ensure_authenticated(session)?;
            handle_search(&search_cmd)
        }
        Command::Categories => {
            ensure_authenticated(session)?;
            handle_categories();
            Ok(())
        }
        Command::Estimate(estimate_cmd) => {
            ensure_authenticated(session)?;
            handle_estimate(&estimate_cmd)
        }
        Command::Quiz(quiz_cmd) => {
            ensure_authenticated(session)?;
            handle_quiz(&quiz_cmd)
        }
        Command::Config(_) => unreachable!("handled before the session is opened"),
    }
}

/// Reject protected commands when the session flag is not set.
fn ensure_authenticated(session: &Session) -> Result<(), Error> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(Error::NotAuthenticated)
    }
}

fn handle_login(session: &mut Session, cmd: &LoginCommand) -> anyhow::Result<()> {
    if session.is_authenticated() {
        println!("Already logged in.");
        return Ok(());
    }

    let password = match &cmd.password {
        Some(password) => password.clone(),
        None => prompt_password()?,
    };

    if session.login(&password)? {
        println!("Logged in. Welcome to the Moon River knowledge base.");
        Ok(())
    } else {
        // Wrong password is an inline message, not an error; any number of
        // retries are permitted.
        eprintln!("Incorrect password. Please try again.");
        std::process::exit(1);
    }
}

/// Prompt for the password on stdin.
///
/// Only the line terminator is stripped; the password itself is never
/// trimmed.
fn prompt_password() -> anyhow::Result<String> {
    print!("Password: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(line.to_string())
}

fn handle_logout(session: &mut Session) -> anyhow::Result<()> {
    session.logout()?;
    println!("Logged out.");
    Ok(())
}

fn handle_status(config: &Config, session: &Session, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let deck = Deck::builtin()?;
    let last_login = session.last_login()?;

    if json {
        let status = serde_json::json!({
            "authenticated": session.is_authenticated(),
            "last_login": last_login.map(|dt| dt.to_rfc3339()),
            "state_path": config.state_path(),
            "documents": catalog.len(),
            "flashcards": deck.len(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("sigdesk status");
        println!("--------------");
        println!(
            "Session:     {}",
            if session.is_authenticated() {
                "logged in"
            } else {
                "logged out"
            }
        );
        match last_login {
            Some(dt) => println!("Last login:  {}", dt.format("%Y-%m-%d %H:%M:%S UTC")),
            None => println!("Last login:  never"),
        }
        println!("State db:    {}", config.state_path().display());
        println!("Documents:   {}", catalog.len());
        println!("Flashcards:  {}", deck.len());
    }
    Ok(())
}

fn handle_list(cmd: &ListCommand) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let results = catalog.query("", &cmd.category);
    print_documents(&results, cmd.format)?;
    Ok(())
}

fn handle_search(cmd: &SearchCommand) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let results = catalog.query(&cmd.query, &cmd.category);
    print_documents(&results, cmd.format)?;
    Ok(())
}

fn print_documents(documents: &[&Document], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(documents)?);
        }
        OutputFormat::Plain => {
            if documents.is_empty() {
                println!("No matching documents.");
                return Ok(());
            }
            for doc in documents {
                println!("{}  {}", doc.id, doc.title);
            }
        }
        OutputFormat::Table => {
            if documents.is_empty() {
                println!("No matching documents.");
                return Ok(());
            }
            println!(
                "{:<26} {:<40} {:<18} {:<8} {}",
                "ID", "TITLE", "CATEGORY", "KIND", "UPDATED"
            );
            for doc in documents {
                println!(
                    "{:<26} {:<40} {:<18} {:<8} {}",
                    doc.id,
                    truncate(doc.title, 40),
                    doc.category,
                    doc.kind,
                    doc.last_updated
                );
            }
            println!();
            println!("{} document(s)", documents.len());
        }
    }
    Ok(())
}

/// Truncate a string for table display.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

fn handle_categories() {
    for category in Catalog::categories() {
        println!("{category}");
    }
}

fn handle_estimate(cmd: &EstimateCommand) -> anyhow::Result<()> {
    let job = Job {
        sign_type: cmd.sign_type,
        quantity: cmd.quantity,
        width_in: cmd.width,
        height_in: cmd.height,
        install_hours: cmd.install_hours,
    };
    let estimate = job.estimate();

    if cmd.json {
        let output = serde_json::json!({
            "job": job,
            "estimate": estimate,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Quick estimate");
        println!("--------------");
        println!("Sign type:   {}", job.sign_type);
        println!("Quantity:    {}", job.quantity);
        println!("Size:        {}\" x {}\"", job.width_in, job.height_in);
        println!();
        println!("Material:    {}", format_usd(estimate.material));
        println!(
            "Labor:       {} ({}h @ {}/h)",
            format_usd(estimate.labor),
            job.install_hours,
            format_usd(LABOR_RATE)
        );
        println!("Subtotal:    {}", format_usd(estimate.subtotal));
        println!("Total:       {} (incl. markup)", format_usd(estimate.total));
        println!();
        println!("Estimate only. Final pricing must be approved by the senior estimator.");
    }
    Ok(())
}

/// Format a dollar amount with thousands separators, e.g. `$1,234.50`.
#[allow(clippy::cast_possible_truncation)]
fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let dollars = (cents / 100).abs().to_string();

    let mut grouped = String::new();
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{:02}", (cents % 100).abs())
}

fn handle_quiz(cmd: &QuizCommand) -> anyhow::Result<()> {
    let deck = Deck::builtin()?;

    match cmd {
        QuizCommand::List { answers } => {
            for (i, card) in deck.cards().iter().enumerate() {
                println!("{:>2}. {}", i + 1, card.question);
                if *answers {
                    println!("    -> {}", card.answer);
                }
            }
        }
        QuizCommand::Show { index, answer } => {
            let Some(card) = index.checked_sub(1).and_then(|i| deck.get(i)) else {
                anyhow::bail!("no card {} (deck has {} cards)", index, deck.len());
            };
            println!("Card {} of {}", index, deck.len());
            println!();
            println!("Q: {}", card.question);
            if *answer {
                println!("A: {}", card.answer);
            } else {
                println!("(run with --answer to reveal)");
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  State db path:  {}", config.state_path().display());
                println!();
                println!("[Session]");
                // The shared secret is advisory-only, but still don't echo it.
                println!(
                    "  Password:       {} (set)",
                    "*".repeat(config.session.password.len())
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
