//! `sketch project edit`: line-oriented curation session.
//!
//! Mirrors the gallery workflow: pick an image, delete or restore it, toggle
//! favorites, browse the three views, then save or download. Nothing reaches
//! the backend until `save`.

use std::fmt::Write as _;

use sketch_curation::{CurationModel, View};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::{check_index, open};
use crate::cli::subcommands::project::ProjectEditArgs;
use crate::context::AppContext;

const HELP: &str = "\
commands:
  select <i>      show image i
  delete [i]      soft-delete image i (default: the shown image)
  restore <i>     undo a delete
  fav [i]         toggle favorite (default: the shown image)
  list            active images
  deleted         deleted images
  favorites       favorite images
  show            the image currently shown
  save            push the state to the backend
  download        download the image archive
  quit            leave (twice to discard unsaved changes)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditCommand {
    Select(usize),
    Delete(Option<usize>),
    Restore(usize),
    Favorite(Option<usize>),
    List,
    Deleted,
    Favorites,
    Show,
    Save,
    Download,
    Help,
    Quit,
}

fn parse(line: &str) -> Result<EditCommand, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let index = words
        .next()
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| format!("'{raw}' is not an image index"))
        })
        .transpose()?;
    if words.next().is_some() {
        return Err(format!("too many arguments for '{verb}'"));
    }

    let required = |index: Option<usize>| index.ok_or_else(|| format!("'{verb}' needs an index"));
    let command = match verb {
        "select" | "s" => EditCommand::Select(required(index)?),
        "delete" | "d" => EditCommand::Delete(index),
        "restore" | "r" => EditCommand::Restore(required(index)?),
        "fav" | "f" => EditCommand::Favorite(index),
        "list" | "ls" => EditCommand::List,
        "deleted" => EditCommand::Deleted,
        "favorites" => EditCommand::Favorites,
        "show" => EditCommand::Show,
        "save" => EditCommand::Save,
        "download" => EditCommand::Download,
        "help" | "?" => EditCommand::Help,
        "quit" | "q" | "exit" => EditCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };

    let takes_index = matches!(
        command,
        EditCommand::Select(_)
            | EditCommand::Delete(_)
            | EditCommand::Restore(_)
            | EditCommand::Favorite(_)
    );
    if index.is_some() && !takes_index {
        return Err(format!("'{verb}' takes no index"));
    }
    Ok(command)
}

/// Outcome of a purely local command.
#[derive(Debug, PartialEq, Eq)]
struct Applied {
    message: String,
    changed: bool,
}

/// Apply a command that only touches the in-memory model.
///
/// `Save`, `Download`, `Help` and `Quit` are handled by the caller.
fn apply(model: &mut CurationModel, command: EditCommand) -> Result<Applied, String> {
    let unchanged = |message: String| Applied {
        message,
        changed: false,
    };

    Ok(match command {
        EditCommand::Select(index) => {
            let index = target(model, Some(index))?;
            model.select(index);
            unchanged(describe(model))
        }
        EditCommand::Delete(index) => {
            let index = target(model, index)?;
            let changed = model.mark_deleted(index);
            Applied {
                message: if changed {
                    format!("deleted {index}; now {}", describe(model))
                } else {
                    format!("{index} is already deleted")
                },
                changed,
            }
        }
        EditCommand::Restore(index) => {
            let index = target(model, Some(index))?;
            let changed = model.restore(index);
            Applied {
                message: if changed {
                    format!("restored {index}")
                } else {
                    format!("{index} is not deleted")
                },
                changed,
            }
        }
        EditCommand::Favorite(index) => {
            let index = target(model, index)?;
            let now = model.toggle_favorite(index);
            Applied {
                message: format!(
                    "{index} {} favorites",
                    if now { "added to" } else { "removed from" }
                ),
                changed: true,
            }
        }
        EditCommand::List => unchanged(listing("active", model.active_view(), model)),
        EditCommand::Deleted => unchanged(listing("deleted", model.deleted_view(), model)),
        EditCommand::Favorites => unchanged(listing("favorites", model.favorites_view(), model)),
        EditCommand::Show => unchanged(describe(model)),
        EditCommand::Save | EditCommand::Download | EditCommand::Help | EditCommand::Quit => {
            unchanged(String::new())
        }
    })
}

/// An explicit index, or the shown image when none is given.
fn target(model: &CurationModel, index: Option<usize>) -> Result<usize, String> {
    match index {
        Some(index) => check_index(model, index).map_err(|error| error.to_string()),
        None => model
            .displayed()
            .map(|image| image.index)
            .ok_or_else(|| "no image is shown".to_string()),
    }
}

fn describe(model: &CurationModel) -> String {
    match model.displayed() {
        Some(image) => {
            let star = if model.is_favorite(image.index) { " ★" } else { "" };
            format!("showing {}{star}: {}", image.index, image.url)
        }
        None => "no active images".to_string(),
    }
}

fn listing(title: &str, view: View<'_>, model: &CurationModel) -> String {
    let mut out = String::new();
    let mut count = 0usize;
    for image in view {
        count += 1;
        let star = if model.is_favorite(image.index) { "★" } else { " " };
        let _ = writeln!(out, "  {star} {:>4}  {}", image.index, image.url);
    }
    let _ = write!(out, "{count} {title}");
    out
}

pub async fn run(args: &ProjectEditArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let mut session = open(ctx, &args.id).await?;
    let dir = ctx.output_dir(args.out.as_deref());

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut dirty = false;
    let mut confirm_quit = false;

    let model = session.model();
    let banner = format!(
        "project {}: {} images ({} deleted, {} favorites)\n{}\ntype 'help' for commands\n",
        session.project_id(),
        model.len(),
        model.deleted_count(),
        model.favorite_count(),
        describe(model),
    );
    stdout.write_all(banner.as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse(&line) {
            Ok(command) => command,
            Err(message) => {
                stdout.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };

        let reply = match command {
            EditCommand::Quit if dirty && !confirm_quit => {
                confirm_quit = true;
                "unsaved changes; 'save' them or 'quit' again to discard".to_string()
            }
            EditCommand::Quit => break,
            EditCommand::Help => HELP.to_string(),
            EditCommand::Save => match session.save().await {
                Ok(_) => {
                    dirty = false;
                    "saved".to_string()
                }
                Err(error) => format!("{:#}", anyhow::Error::new(error)),
            },
            EditCommand::Download => match session.download_archive_to(&dir).await {
                Ok(path) => format!("archive written to {}", path.display()),
                Err(error) => format!("{:#}", anyhow::Error::new(error)),
            },
            local => match apply(session.model_mut(), local) {
                Ok(applied) => {
                    dirty |= applied.changed;
                    applied.message
                }
                Err(message) => message,
            },
        };
        if !matches!(command, EditCommand::Quit) {
            confirm_quit = false;
        }
        stdout.write_all(format!("{reply}\n").as_bytes()).await?;
    }

    if dirty {
        tracing::warn!(project = %args.id, "left editor with unsaved changes");
    }
    Ok(())
}
