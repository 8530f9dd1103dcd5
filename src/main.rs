//! Markdraft - drive the markdown editing engine from the command line.
//!
//! # Usage
//!
//! ```bash
//! markdraft apply bold --start 0 --end 5 draft.md
//! markdraft apply link --start 4 --end 8 --url https://example.com draft.md
//! printf 'f(' | markdraft pair
//! printf 'see ' | markdraft pair --insert '['
//! markdraft stats --title "My post" draft.md
//! markdraft tags "Rust, AI" --add python
//! markdraft preview --title "My post" --tags rust draft.md
//! markdraft check-upload cover.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use markdraft::command::Command;
use markdraft::config::{
    ConfigFlags, Settings, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use markdraft::dispatch::Outcome;
use markdraft::editor::{Editor, EditorBuffer, TextSurface};
use markdraft::format::InputResponse;
use markdraft::preview::Preview;
use markdraft::stats::WritingStats;
use markdraft::tags::{COMMON_TAGS, add_suggestion, normalize_tags};
use markdraft::upload::{ImageCandidate, validate};

/// Markdown editing engine for blog drafts
#[derive(Parser, Debug)]
#[command(name = "markdraft", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    action: Action,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable closing-marker completion
    #[arg(long, global = true)]
    no_autopair: bool,

    /// Reading speed for reading-time estimates
    #[arg(long, global = true, value_name = "N")]
    wpm: Option<usize>,

    /// Largest accepted cover image, in megabytes
    #[arg(long, global = true, value_name = "MB")]
    max_upload_mb: Option<u64>,

    /// Save current command-line flags as defaults
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults
    #[arg(long, global = true)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Apply a toolbar command to a selection
    Apply(ApplyArgs),
    /// Complete a marker pair after typing at the cursor
    Pair {
        /// Cursor position in characters (default: end of input)
        #[arg(long)]
        cursor: Option<usize>,
        /// Text typed at the cursor before completing
        #[arg(long, value_name = "TEXT")]
        insert: Option<String>,
        /// Input file (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Word count and reading time
    Stats {
        /// Post title, counted with the body
        #[arg(long, default_value = "")]
        title: String,
        /// Input file (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Normalize a comma-separated tag list
    Tags {
        /// Tag field content
        #[arg(default_value = "")]
        input: String,
        /// Suggested tag to add
        #[arg(long, value_name = "TAG")]
        add: Vec<String>,
        /// List the common tag suggestions
        #[arg(long)]
        suggestions: bool,
    },
    /// Render an HTML preview of a draft
    Preview {
        #[arg(long, default_value = "")]
        title: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        /// Input file (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Check a cover image before uploading it
    CheckUpload {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// Command identifier: bold, italic, heading, quote, code, link, image, ul, ol
    command: String,
    /// Selection start in characters
    #[arg(long, default_value_t = 0)]
    start: usize,
    /// Selection end in characters (default: end of input)
    #[arg(long)]
    end: Option<usize>,
    /// URL for link and image commands
    #[arg(long)]
    url: Option<String>,
    /// Link text or alt text for link and image commands
    #[arg(long)]
    text: Option<String>,
    /// Answer a link or image command with a cancel
    #[arg(long, conflicts_with = "url")]
    cancel: bool,
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin"),
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_apply(args: ApplyArgs, settings: Settings, json: bool) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let mut buffer = EditorBuffer::from_text(&text);
    let len = buffer.len_chars();
    let end = args.end.unwrap_or(len);
    anyhow::ensure!(
        args.start <= end && end <= len,
        "Selection {}..{} is outside the {len}-character input",
        args.start,
        end
    );
    buffer.set_selection(args.start, end);

    if args.command.parse::<Command>().is_err() {
        tracing::warn!(command = %args.command, "unknown command, input left unchanged");
    }

    let mut editor = Editor::new(buffer).with_autopair(settings.autopair);
    let mut outcome = editor.execute_named(&args.command)?;
    if matches!(outcome, Outcome::NeedsInput(_)) {
        if let Some(url) = args.url {
            outcome = editor.resume(&InputResponse::provided(url, args.text))?;
        } else if args.cancel {
            outcome = editor.resume(&InputResponse::Cancelled)?;
        }
    }

    if json {
        return print_json(&outcome);
    }
    if let Outcome::NeedsInput(pending) = &outcome {
        for field in pending.fields() {
            eprintln!(
                "{} {} (default: {})",
                field.name,
                field.label,
                field.default.as_deref().unwrap_or("<url>")
            );
        }
        anyhow::bail!("`{}` needs --url (or --cancel)", pending.kind.command());
    }
    print!("{}", editor.surface().value());
    Ok(())
}

fn run_pair(
    cursor: Option<usize>,
    insert: Option<&str>,
    file: Option<&Path>,
    settings: Settings,
    json: bool,
) -> Result<()> {
    let text = read_input(file)?;
    let mut buffer = EditorBuffer::from_text(&text);
    let len = buffer.len_chars();
    buffer.move_to(cursor.unwrap_or(len));
    if let Some(typed) = insert {
        buffer.insert_str(typed);
    }

    let mut editor = Editor::new(buffer).with_autopair(settings.autopair);
    let pair = editor.handle_insert();
    let buffer = editor.into_surface();
    if json {
        return print_json(&serde_json::json!({
            "text": buffer.text(),
            "cursor": buffer.cursor(),
            "pair": pair,
        }));
    }
    print!("{}", buffer.text());
    Ok(())
}

fn run_stats(title: &str, file: Option<&Path>, settings: Settings, json: bool) -> Result<()> {
    let content = read_input(file)?;
    let stats = WritingStats::measure_at(title, &content, settings.words_per_minute);
    if json {
        return print_json(&stats);
    }
    println!("{}", stats.word_label());
    println!("{}", stats.reading_label());
    Ok(())
}

fn run_tags(input: &str, add: &[String], suggestions: bool, json: bool) -> Result<()> {
    if suggestions {
        return if json {
            print_json(&COMMON_TAGS)
        } else {
            println!("{}", COMMON_TAGS.join(", "));
            Ok(())
        };
    }
    let tags = add
        .iter()
        .fold(input.to_owned(), |field, tag| add_suggestion(&field, tag));
    let tags = normalize_tags(&tags);
    if json {
        return print_json(&tags);
    }
    println!("{tags}");
    Ok(())
}

fn run_preview(title: &str, tags: &str, file: Option<&Path>, json: bool) -> Result<()> {
    let content = read_input(file)?;
    let preview = Preview::build(title, &content, tags)?;
    if json {
        return print_json(&preview);
    }
    println!("{preview}");
    Ok(())
}

fn run_check_upload(file: Option<&Path>, settings: Settings, json: bool) -> Result<()> {
    let candidate = file
        .map(ImageCandidate::from_path)
        .transpose()
        .context("Failed to inspect image")?;
    let candidate = validate(candidate.as_ref(), settings.max_upload_bytes)?;
    if json {
        return print_json(candidate);
    }
    println!(
        "{} ({}, {} bytes) can be uploaded",
        candidate.file_name, candidate.mime_type, candidate.size
    );
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        no_autopair: cli.no_autopair,
        words_per_minute: cli.wpm,
        max_upload_mb: cli.max_upload_mb,
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let settings = file_flags.union(&cli_flags).settings();
    tracing::debug!(?settings, "effective settings");

    match cli.action {
        Action::Apply(args) => run_apply(args, settings, cli.json),
        Action::Pair {
            cursor,
            insert,
            file,
        } => run_pair(
            cursor,
            insert.as_deref(),
            file.as_deref(),
            settings,
            cli.json,
        ),
        Action::Stats { title, file } => run_stats(&title, file.as_deref(), settings, cli.json),
        Action::Tags {
            input,
            add,
            suggestions,
        } => run_tags(&input, &add, suggestions, cli.json),
        Action::Preview { title, tags, file } => {
            run_preview(&title, &tags, file.as_deref(), cli.json)
        }
        Action::CheckUpload { file } => run_check_upload(file.as_deref(), settings, cli.json),
    }
}
