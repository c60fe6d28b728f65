use clap::Parser;
use entity::{
    blog_post::BlogDraft,
    collection::{CollectionKind, Content, Record},
    contact_links::ContactLinks,
    project::ProjectDraft,
};
use errors::AppError;
use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};
use tracing::info;

use crate::{
    bootstrap::config::Config,
    cli::{BlogCommand, Cli, Command, ContactCommand, EditAction, GenerateCommand, ProjectCommand},
    modules::{
        content::{
            CollectionSession, DeterrenceSecret, EntryGenerator, ExportFormatter, MutationOutcome,
            Portfolio, Render, StaticSourceStore, SystemClock, TerminalPrompt, ToggleOutcome,
            keys::all_keys, render_view,
        },
        storage::{KvStore, MemoryKvStore, RocksDbKvStore},
    },
};

pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    info!(data_dir = %config.data_dir.display(), "Configuration loaded");

    let mut out = io::stdout().lock();
    if let Command::Generate(command) = cli.command {
        return generate(command, &mut out);
    }

    let portfolio = assemble_portfolio(&config, cli.dry_run)?;
    dispatch(&portfolio, &config, cli.command, &mut out)
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// With `dry_run` the RocksDB store is only read: its content keys are
/// copied into memory and the database is closed again.
fn setup_kv_store(config: &Config, dry_run: bool) -> Result<Arc<dyn KvStore>, AppError> {
    info!(path = %config.kv.path.display(), "Setting up KV store with RocksDB");
    let store = RocksDbKvStore::open(&config.kv)
        .map_err(|e| AppError::Storage(format!("Failed to initialize KV store: {}", e).into()))?;

    if dry_run {
        let copy = MemoryKvStore::snapshot(&store, all_keys())?;
        info!("Dry run: local edits are kept in memory only");
        return Ok(Arc::new(copy));
    }
    Ok(Arc::new(store))
}

pub fn assemble_portfolio(config: &Config, dry_run: bool) -> Result<Portfolio, AppError> {
    let kv = setup_kv_store(config, dry_run)?;
    Ok(Portfolio::new(
        kv,
        StaticSourceStore::new(&config.data_dir),
        DeterrenceSecret::new(config.edit_secret.clone()),
        Arc::new(SystemClock),
    ))
}

/// Runs one command against `portfolio`, writing its output to `out`.
pub fn dispatch<W: Write>(
    portfolio: &Portfolio,
    config: &Config,
    command: Command,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Show { collection } => match collection {
            CollectionKind::Projects => show(&portfolio.projects()?, out),
            CollectionKind::BlogPosts => show(&portfolio.blog()?, out),
            CollectionKind::Contact => show(&portfolio.contact()?, out),
        },
        Command::Status => {
            for status in portfolio.status()? {
                writeln!(
                    out,
                    "{:<12} edit mode {:<3}  {}",
                    status.kind.to_string(),
                    if status.edit_mode { "on" } else { "off" },
                    if status.has_override { "local edits" } else { "published" }
                )?;
            }
            Ok(())
        }
        Command::Edit {
            collection,
            action,
            secret,
        } => {
            let mut prompt = TerminalPrompt::new(false, secret);
            match collection {
                CollectionKind::Projects => edit(&mut portfolio.projects()?, action, &mut prompt, out),
                CollectionKind::BlogPosts => edit(&mut portfolio.blog()?, action, &mut prompt, out),
                CollectionKind::Contact => edit(&mut portfolio.contact()?, action, &mut prompt, out),
            }
        }
        Command::Project(command) => {
            let mut session = portfolio.projects()?;
            let outcome = match command {
                ProjectCommand::Add(fields) => session.create(&ProjectDraft::from(fields))?,
                ProjectCommand::Update { id, patch } => {
                    let draft = patch.over(find(&session, id));
                    session.update(id, &draft)?
                }
                ProjectCommand::Delete { id, yes } => {
                    session.delete(id, &mut TerminalPrompt::new(yes, None))?
                }
            };
            report(outcome, out)
        }
        Command::Blog(command) => {
            let mut session = portfolio.blog()?;
            let outcome = match command {
                BlogCommand::Add(fields) => session.create(&BlogDraft::from(fields))?,
                BlogCommand::Update { id, patch } => {
                    let draft = patch.over(find(&session, id));
                    session.update(id, &draft)?
                }
                BlogCommand::Delete { id, yes } => {
                    session.delete(id, &mut TerminalPrompt::new(yes, None))?
                }
            };
            report(outcome, out)
        }
        Command::Contact(ContactCommand::Set(fields)) => {
            let outcome = portfolio.contact()?.replace(&ContactLinks::from(fields))?;
            report(outcome, out)
        }
        Command::Export {
            collection,
            out: dir,
            to_file,
        } => {
            let dir = dir.or_else(|| to_file.then(|| config.export_dir.clone()));
            match collection {
                CollectionKind::Projects => export(&portfolio.projects()?, dir, out),
                CollectionKind::BlogPosts => export(&portfolio.blog()?, dir, out),
                CollectionKind::Contact => export(&portfolio.contact()?, dir, out),
            }
        }
        Command::Reset { collection, all } => {
            if all {
                portfolio.reset_all()?;
                writeln!(out, "local edits and edit modes cleared")?;
                return Ok(());
            }
            match collection {
                Some(CollectionKind::Projects) => reset(&mut portfolio.projects()?, out),
                Some(CollectionKind::BlogPosts) => reset(&mut portfolio.blog()?, out),
                Some(CollectionKind::Contact) => reset(&mut portfolio.contact()?, out),
                None => Err(AppError::Config(
                    "reset needs a collection or --all".to_string(),
                )),
            }
        }
        Command::Generate(command) => generate(command, out),
    }
}

fn find<R: Record>(session: &CollectionSession<Vec<R>>, id: i64) -> Option<&R> {
    session.view().iter().find(|r| r.id() == id)
}

fn show<C: Render, W: Write>(session: &CollectionSession<C>, out: &mut W) -> Result<(), AppError> {
    let edit_mode = session.is_edit_mode_on()?;
    writeln!(
        out,
        "== {} (edit mode {}) ==",
        session.kind(),
        if edit_mode { "on" } else { "off" }
    )?;
    write!(out, "{}", render_view(session.view()))?;
    Ok(())
}

fn edit<C: Content, W: Write>(
    session: &mut CollectionSession<C>,
    action: EditAction,
    prompt: &mut TerminalPrompt,
    out: &mut W,
) -> Result<(), AppError> {
    let message = match action {
        EditAction::On => match session.enable_edit_mode(prompt)? {
            ToggleOutcome::Cancelled => "edit mode unchanged: password prompt dismissed",
            _ => "edit mode on",
        },
        EditAction::Off => {
            session.disable_edit_mode()?;
            "edit mode off"
        }
        EditAction::Status => {
            if session.is_edit_mode_on()? {
                "edit mode on"
            } else {
                "edit mode off"
            }
        }
    };
    writeln!(out, "{}: {}", session.kind(), message)?;
    Ok(())
}

fn report<W: Write>(outcome: MutationOutcome, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{}", outcome)?;
    Ok(())
}

fn export<C: Content, W: Write>(
    session: &CollectionSession<C>,
    dir: Option<PathBuf>,
    out: &mut W,
) -> Result<(), AppError> {
    match dir {
        Some(dir) => {
            let path = ExportFormatter::write_file(session.view(), &dir)?;
            writeln!(out, "{}", path.display())?;
        }
        None => ExportFormatter::write_to(session.view(), out)?,
    }
    Ok(())
}

fn reset<C: Content, W: Write>(session: &mut CollectionSession<C>, out: &mut W) -> Result<(), AppError> {
    if session.discard_override()? {
        writeln!(out, "{}: local edits discarded", session.kind())?;
    } else {
        writeln!(out, "{}: no local edits", session.kind())?;
    }
    Ok(())
}

/// The entry goes to `out`; the paste hint goes to stderr.
fn generate<W: Write>(command: GenerateCommand, out: &mut W) -> Result<(), AppError> {
    let clock = SystemClock;
    let generator = EntryGenerator::new(&clock);
    let (kind, text) = match command {
        GenerateCommand::Project(fields) => (
            CollectionKind::Projects,
            generator
                .project(&ProjectDraft::from(fields))
                .map(|p| EntryGenerator::render(&p))
                .transpose()?,
        ),
        GenerateCommand::Blog(fields) => (
            CollectionKind::BlogPosts,
            generator
                .blog_post(&BlogDraft::from(fields))
                .map(|p| EntryGenerator::render(&p))
                .transpose()?,
        ),
    };

    match text {
        Some(text) => {
            eprintln!("Copy this into {}:", kind.file_name());
            writeln!(out, "{}", text)?;
            Ok(())
        }
        None => report(MutationOutcome::Invalid, out),
    }
}
