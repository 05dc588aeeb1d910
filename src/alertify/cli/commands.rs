//! # CLI Layer
//!
//! One possible client of the alertify library, and the only place that
//! writes to the terminal or decides the exit code.
//!
//! Failure policy: recoverable errors (unknown reference, bad input,
//! backup/restore problems) are printed and the process still succeeds.
//! Anything else, most importantly a reminders file that no longer parses,
//! propagates to `main` and exits with status 1.
//!
//! Mutating commands are followed by the archiving list, so every add,
//! update, status change or removal ends by showing the current reminders.

use super::render::{print_error, print_messages, render_header, render_reminder_list};
use super::setup::{Cli, Commands};
use alertify::api::AlertifyApi;
use alertify::backup::BackupManager;
use alertify::config::AlertifyConfig;
use alertify::error::Result;
use alertify::store::fs::FileStore;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

struct AppContext {
    api: AlertifyApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    print!("{}", render_header());

    match cli.command {
        Some(Commands::Add {
            text,
            due,
            priority,
        }) => {
            let text = text.join(" ");
            let outcome = handle_add(&mut ctx, &text, due.as_deref(), priority.as_deref());
            recover(outcome)?;
            handle_list(&mut ctx, false)
        }
        Some(Commands::List { peek }) => handle_list(&mut ctx, peek),
        Some(Commands::Update {
            reference,
            due,
            priority,
        }) => {
            let outcome = handle_update(&mut ctx, &reference, due.as_deref(), priority.as_deref());
            recover(outcome)?;
            handle_list(&mut ctx, false)
        }
        Some(Commands::Status { reference, status }) => {
            recover(handle_status(&mut ctx, &reference, &status))?;
            handle_list(&mut ctx, false)
        }
        Some(Commands::Remove { reference }) => {
            recover(handle_remove(&mut ctx, &reference))?;
            handle_list(&mut ctx, false)
        }
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Backup) => recover(handle_backup(&ctx)),
        Some(Commands::Restore) => recover(handle_restore(&ctx)),
        None => handle_list(&mut ctx, false),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut config = AlertifyConfig::load(&cwd)?;
    if let Some(file) = &cli.file {
        config = config.with_store_file(file);
    }
    if let Some(backup_file) = &cli.backup_file {
        config = config.with_backup_file(backup_file);
    }

    let paths = config.resolve_paths(&cwd);
    debug!(
        "Using reminders file {} (backup {})",
        paths.store.display(),
        paths.backup.display()
    );

    let store = FileStore::new(&paths.store);
    let backups = BackupManager::new(paths.store, paths.backup);
    Ok(AppContext {
        api: AlertifyApi::new(store, backups),
    })
}

/// Prints recoverable errors and swallows them; everything else propagates.
fn recover(outcome: Result<()>) -> Result<()> {
    match outcome {
        Err(e) if e.is_recoverable() => {
            print_error(&e);
            Ok(())
        }
        other => other,
    }
}

fn handle_add(
    ctx: &mut AppContext,
    text: &str,
    due: Option<&str>,
    priority: Option<&str>,
) -> Result<()> {
    let result = ctx.api.add_reminder(text, due, priority)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, peek: bool) -> Result<()> {
    let result = if peek {
        ctx.api.peek()?
    } else {
        ctx.api.list_and_archive()?
    };
    print!("{}", render_reminder_list(&result.listed_reminders));
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    reference: &str,
    due: Option<&str>,
    priority: Option<&str>,
) -> Result<()> {
    let result = ctx.api.update_reminder(reference, due, priority)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, reference: &str, status: &str) -> Result<()> {
    let result = ctx.api.set_status(reference, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let result = ctx.api.remove_reminder(reference)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.backup()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restore(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.restore()?;
    print_messages(&result.messages);
    Ok(())
}
