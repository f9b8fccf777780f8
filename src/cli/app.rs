//! Interactive shell for the glownotes application
//!
//! This module runs the session loop: it reads lines from stdin, parses
//! them into commands, and dispatches against the in-memory store and the
//! insight client. All state is discarded when the session ends.

use std::io::{self, BufRead, Write};

use chrono::DateTime;
use clap::Parser;
use console::{style, Style};
use log::info;

use crate::{
    derive_action, filter_notes, split_paragraphs, Action, ActionCommands, Commands, GlowError,
    InsightClient, InsightTracker, Note, NoteStore, Result, ShellLine, View,
};

/// Whether the session loop should keep reading lines.
enum Flow {
    Continue,
    Quit,
}

/// Session application - processes shell commands against the note store
/// and the insight client.
pub struct App {
    /// The in-memory note and action store
    store: NoteStore,

    /// Client for the text-generation service
    insight: InsightClient,

    /// Tracker for the in-flight insight request
    tracker: InsightTracker,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new session application over the given store and client
    pub fn new(store: NoteStore, insight: InsightClient, verbose: bool) -> Self {
        Self {
            store,
            insight,
            tracker: InsightTracker::new(),
            verbose,
        }
    }

    /// Run the session loop until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            style("Glow").yellow().bold(),
            style("- type 'help' for commands, 'quit' to leave").dim()
        );

        let stdin = io::stdin();
        loop {
            print!("{} ", style("glow>").yellow());
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // End of input behaves like quit
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.dispatch_line(line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    println!("{}", style(&e).red());
                }
            }
        }

        info!("Session ended, discarding state");
        Ok(())
    }

    /// Parse one input line and run the command it names.
    async fn dispatch_line(&mut self, line: &str) -> Result<Flow> {
        let words = shell_words::split(line).map_err(|e| GlowError::InvalidCommand {
            message: format!("Could not parse input: {}", e),
        })?;

        match ShellLine::try_parse_from(words) {
            Ok(shell) => self.run_command(shell.command).await,
            Err(e) => {
                // clap renders help/usage text itself
                println!("{}", e);
                Ok(Flow::Continue)
            }
        }
    }

    async fn run_command(&mut self, command: Commands) -> Result<Flow> {
        match command {
            Commands::New => {
                let note = self.store.create_note();
                println!(
                    "Created note {} (now active)",
                    style(short_id(&note.id)).dim()
                );
            }

            Commands::Open { id } => {
                let id = self.resolve_note_id(Some(id))?;
                self.store.set_active_note(Some(id.clone()));
                self.show_note(&id)?;
            }

            Commands::List { view, query, json } => {
                if let View::Actions = view {
                    self.show_review();
                } else {
                    self.list_notes(view, query.as_deref().unwrap_or(""), json)?;
                }
            }

            Commands::Show { id } => {
                let id = self.resolve_note_id(id)?;
                self.show_note(&id)?;
            }

            Commands::Edit {
                title,
                content,
                paragraph,
                text,
            } => self.edit_active_note(title, content, paragraph, text)?,

            Commands::Pin { id } => {
                let id = self.resolve_note_id(Some(id))?;
                if let Some(note) = self.store.note(&id) {
                    let updated = note.toggled_pinned();
                    let pinned = updated.is_pinned;
                    self.store.save_note(updated);
                    println!(
                        "{} is now {}",
                        self.title_of(&id),
                        if pinned { "pinned" } else { "unpinned" }
                    );
                }
            }

            Commands::Archive { id } => {
                let id = self.resolve_note_id(Some(id))?;
                if let Some(note) = self.store.note(&id) {
                    let updated = note.toggled_archived();
                    let archived = updated.is_archived;
                    self.store.save_note(updated);
                    println!(
                        "{} is now {}",
                        self.title_of(&id),
                        if archived { "archived" } else { "unarchived" }
                    );
                }
            }

            Commands::Action(action) => self.run_action_command(action)?,

            Commands::Review => self.show_review(),

            Commands::Insight { id } => self.show_insight(id).await?,

            Commands::Extract { id } => self.extract_actions(id).await?,

            Commands::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn run_action_command(&mut self, command: ActionCommands) -> Result<()> {
        match command {
            ActionCommands::Make { note_id, text } => {
                let note_id = self.resolve_note_id(Some(note_id))?;
                match derive_action(&mut self.store, &note_id, &text) {
                    Some(action) => {
                        println!(
                            "Captured action {} {}",
                            style(short_id(&action.id)).dim(),
                            render_action_text(&action)
                        );
                    }
                    None => {
                        println!("Selection is empty, no action created");
                    }
                }
            }

            ActionCommands::Toggle { id } => {
                self.store.toggle_action(&id);
                match self.store.action(&id) {
                    Some(action) if action.completed => println!("Marked complete"),
                    Some(_) => println!("Marked pending"),
                    None => println!("No action with id {}", id),
                }
            }

            ActionCommands::Delete { id } => {
                let existed = self.store.action(&id).is_some();
                self.store.delete_action(&id);
                if existed {
                    println!("Deleted action {}", style(short_id(&id)).dim());
                } else {
                    println!("No action with id {}", id);
                }
            }
        }

        Ok(())
    }

    /// List notes for a view, either styled or as raw JSON.
    fn list_notes(&self, view: View, query: &str, json: bool) -> Result<()> {
        let visible = filter_notes(self.store.notes(), view, query);

        if json {
            println!("{}", serde_json::to_string_pretty(&visible)?);
            return Ok(());
        }

        if visible.is_empty() {
            println!(
                "{}",
                style("Nothing here yet. Notes you create will appear in this view.").dim()
            );
            return Ok(());
        }

        for note in &visible {
            let marker = if note.is_pinned { "*" } else { " " };
            let active = self.store.active_note_id() == Some(note.id.as_str());
            println!(
                "{} {} {} {}{}",
                marker,
                style(short_id(&note.id)).dim(),
                style(note.display_title()).bold(),
                style(format_timestamp(note.updated_at)).dim(),
                if active { style(" (active)").cyan() } else { style("") }
            );
        }

        if self.verbose {
            println!("{}", style(format!("{} note(s)", visible.len())).dim());
        }

        Ok(())
    }

    /// Render a note with numbered paragraphs for `edit --paragraph`.
    fn show_note(&self, id: &str) -> Result<()> {
        let note = self
            .store
            .note(id)
            .ok_or_else(|| GlowError::ApplicationError {
                message: format!("No note with id {}", id),
            })?;

        println!(
            "{}  {}",
            style(note.display_title()).bold(),
            style(format_timestamp(note.updated_at)).dim()
        );
        if note.is_pinned || note.is_archived {
            let mut flags = Vec::new();
            if note.is_pinned {
                flags.push("pinned");
            }
            if note.is_archived {
                flags.push("archived");
            }
            println!("{}", style(flags.join(", ")).dim());
        }

        for (index, paragraph) in split_paragraphs(&note.content).iter().enumerate() {
            println!("{} {}", style(format!("[{}]", index)).dim(), paragraph);
        }

        Ok(())
    }

    /// Apply title/content/paragraph edits to the active note.
    ///
    /// Every edit constructs a fresh note value and replaces the stored
    /// one through `save_note`.
    fn edit_active_note(
        &mut self,
        title: Option<String>,
        content: Option<String>,
        paragraph: Option<usize>,
        text: Option<String>,
    ) -> Result<()> {
        let id = self.resolve_note_id(None)?;
        let note = self
            .store
            .note(&id)
            .ok_or_else(|| GlowError::ApplicationError {
                message: format!("No note with id {}", id),
            })?
            .clone();

        let mut updated = note;
        let mut changed = false;

        if let Some(title) = title {
            updated = updated.with_title(title);
            changed = true;
        }

        if let Some(content) = content {
            updated = updated.with_content(content);
            changed = true;
        }

        match (paragraph, text) {
            (Some(index), Some(replacement)) => {
                let edited = crate::edit_paragraph(&updated.content, index, &replacement);
                updated = updated.with_content(edited);
                changed = true;
            }
            (Some(_), None) => {
                return Err(GlowError::InvalidCommand {
                    message: "--paragraph requires --text".to_string(),
                });
            }
            (None, Some(_)) => {
                return Err(GlowError::InvalidCommand {
                    message: "--text requires --paragraph".to_string(),
                });
            }
            (None, None) => {}
        }

        if !changed {
            println!("Nothing to edit: pass --title, --content, or --paragraph with --text");
            return Ok(());
        }

        self.store.save_note(updated);
        self.show_note(&id)
    }

    /// Render the daily review: pending actions, then completed ones.
    fn show_review(&self) {
        println!("{}", style("Daily Review").bold());

        println!("{}", style("Pending").dim());
        let pending = self.store.pending_actions();
        if pending.is_empty() {
            println!(
                "  {}",
                style("All clear! Enjoy your glowing state of flow.").dim()
            );
        } else {
            for action in pending {
                self.print_action(action);
            }
        }

        let completed = self.store.completed_actions();
        if !completed.is_empty() {
            println!("{}", style("Completed").dim());
            for action in completed {
                self.print_action(action);
            }
        }
    }

    fn print_action(&self, action: &Action) {
        let text = if action.completed {
            style(action.text.clone()).strikethrough().dim()
        } else {
            color_style(&action.color).apply_to(action.text.clone())
        };

        println!(
            "  [{}] {} {} {}",
            if action.completed { "x" } else { " " },
            style(short_id(&action.id)).dim(),
            text,
            style(format!("from: {}", self.store.note_title_for(action))).dim()
        );
    }

    /// Request and display a one-shot insight for a note.
    ///
    /// The request runs as a tracked task keyed by the note id: starting a
    /// new one discards whatever was in flight, so a late result never
    /// shows up against the wrong note.
    async fn show_insight(&mut self, id: Option<String>) -> Result<()> {
        let id = self.resolve_note_id(id)?;
        let note = self
            .store
            .note(&id)
            .ok_or_else(|| GlowError::ApplicationError {
                message: format!("No note with id {}", id),
            })?;

        if note.content.trim().is_empty() {
            println!("Nothing to summarize yet");
            return Ok(());
        }

        let client = self.insight.clone();
        let content = note.content.clone();
        self.tracker
            .start(id.clone(), async move { client.summarize(&content).await });

        match self.tracker.wait(&id).await {
            Some(text) => println!("{} {}", style("Insight:").yellow(), text),
            None => println!("{}", style("No insight available right now").dim()),
        }

        Ok(())
    }

    /// Ask the service for actionable items in a note and capture each one
    /// as a new action.
    async fn extract_actions(&mut self, id: Option<String>) -> Result<()> {
        let id = self.resolve_note_id(id)?;
        let note = self
            .store
            .note(&id)
            .ok_or_else(|| GlowError::ApplicationError {
                message: format!("No note with id {}", id),
            })?;

        if note.content.trim().is_empty() {
            println!("Nothing to extract from yet");
            return Ok(());
        }

        let items = self.insight.extract_actions(&note.content).await;
        if items.is_empty() {
            println!("{}", style("No actionable items found").dim());
            return Ok(());
        }

        let mut captured = 0;
        for item in &items {
            if let Some(action) = derive_action(&mut self.store, &id, item) {
                captured += 1;
                println!(
                    "Captured action {} {}",
                    style(short_id(&action.id)).dim(),
                    render_action_text(&action)
                );
            }
        }
        println!("{} action(s) captured", captured);

        Ok(())
    }

    /// Resolve an optional user-supplied note id to a stored note id.
    ///
    /// With no argument the active note is used. An argument matches by
    /// exact id first, then by unique id prefix.
    fn resolve_note_id(&self, id: Option<String>) -> Result<String> {
        let id = match id {
            Some(id) => id,
            None => {
                return self
                    .store
                    .active_note_id()
                    .map(str::to_string)
                    .ok_or_else(|| GlowError::ApplicationError {
                        message: "No active note. Use 'new' or 'open <id>'".to_string(),
                    });
            }
        };

        if self.store.note(&id).is_some() {
            return Ok(id);
        }

        let matches: Vec<&Note> = self
            .store
            .notes()
            .iter()
            .filter(|n| n.id.starts_with(&id))
            .collect();

        match matches.as_slice() {
            [note] => Ok(note.id.clone()),
            [] => Err(GlowError::ApplicationError {
                message: format!("No note with id {}", id),
            }),
            _ => Err(GlowError::ApplicationError {
                message: format!("Note id prefix {} is ambiguous", id),
            }),
        }
    }

    fn title_of(&self, id: &str) -> String {
        self.store
            .note(id)
            .map(|n| n.display_title().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

/// First 8 characters of an id, enough to resolve by prefix in practice.
fn short_id(id: &str) -> &str {
    if id.len() > 8 {
        &id[..8]
    } else {
        id
    }
}

/// Render a millisecond timestamp as a local-agnostic date-time.
fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Terminal style for an action's palette tag.
fn color_style(color: &str) -> Style {
    match color {
        "rose" => Style::new().red(),
        "amber" => Style::new().yellow(),
        "emerald" => Style::new().green(),
        "sky" => Style::new().cyan(),
        "indigo" => Style::new().blue(),
        "fuchsia" => Style::new().magenta(),
        _ => Style::new(),
    }
}

fn render_action_text(action: &Action) -> String {
    format!(
        "{} {}",
        color_style(&action.color).apply_to(&action.text),
        style(format!("[{}]", action.color)).dim()
    )
}
