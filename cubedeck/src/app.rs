use std::path::Path;

use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use tachyonfx::Duration;
use tracing::{debug, info, warn};

use cubedeck_core::{draft_manual_deck, CubeSnapshot, DeckCollection, DeckId};
use cubedeck_widgets::popup::{centered_rect, PopupWidget};
use cubedeck_widgets::theme::Theme;

use crate::config::Config;
use crate::effects::{self, FxManager};
use crate::files;
use crate::screens::add_deck::AddDeckScreen;
use crate::screens::cube::CubeScreen;
use crate::screens::prompt::PromptScreen;
use crate::screens::Screen;

const NOTICE_WIDTH: u16 = 50;
const NOTICE_HEIGHT: u16 = 30;

/// Which screen owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cube,
    AddDeck,
    Prompt,
}

/// The deck collection plus everything derived from it
pub struct Session {
    pub collection: DeckCollection,
    pub snapshot: CubeSnapshot,
    pub export_label: String,
}

impl Session {
    pub fn new(collection: DeckCollection, export_path: &Path) -> Self {
        let snapshot = CubeSnapshot::compute(&collection);
        Self {
            collection,
            snapshot,
            export_label: export_path.display().to_string(),
        }
    }

    /// Recompute the snapshot if the collection changed since the last call
    pub fn refresh(&mut self) {
        if self.snapshot.refresh(&self.collection) {
            debug!(revision = self.collection.revision(), "snapshot recomputed");
        }
    }
}

/// Popup message; any key dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub lines: Vec<String>,
    pub error: bool,
}

impl Notice {
    pub fn info(title: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: vec![line.into()],
            error: false,
        }
    }

    pub fn error(title: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: vec![line.into()],
            error: true,
        }
    }
}

/// Main application state
pub struct App {
    pub mode: Mode,
    pub session: Session,
    pub config: Config,
    pub tick: u64,
    pub fx: FxManager,
    prev_mode: Option<Mode>,
    pub notice: Option<Notice>,
    notice_fresh: bool,

    // Screens
    pub cube: CubeScreen,
    pub add_deck: AddDeckScreen,
    pub prompt: Option<PromptScreen>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = Session::new(DeckCollection::new(), &config.export);
        let mut app = Self {
            mode: Mode::Cube,
            session,
            tick: 0,
            fx: FxManager::default(),
            prev_mode: None,
            notice: None,
            notice_fresh: false,
            cube: CubeScreen::new(config.sort),
            add_deck: AddDeckScreen::new(&config.colour),
            prompt: None,
            config,
        };
        app.load_startup();
        app
    }

    /// Files and the import document named on the command line
    fn load_startup(&mut self) {
        if !self.config.files.is_empty() {
            let paths = self.config.files.clone();
            self.upload(&paths);
        }
        if let Some(path) = self.config.import.clone() {
            self.import(&path);
        }
        // Start-up successes are not worth a popup
        if self.notice.as_ref().is_some_and(|n| !n.error) {
            self.notice = None;
        }
        self.session.refresh();
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        match self.mode {
            Mode::Cube => self.cube.render(frame, &self.session),
            Mode::AddDeck => self.add_deck.render(frame, &self.session),
            Mode::Prompt => {
                self.cube.render(frame, &self.session);
                if let Some(prompt) = &mut self.prompt {
                    prompt.render(frame, &self.session);
                }
            }
        }

        if let Some(notice) = &self.notice {
            let accent = if notice.error {
                Theme::DANGER
            } else {
                Theme::EXPORT
            };
            let mut popup = PopupWidget::new(notice.title.clone())
                .size(NOTICE_WIDTH, NOTICE_HEIGHT)
                .accent(accent);
            for line in &notice.lines {
                popup = popup.line(line.clone(), Style::default().fg(Theme::BRIGHT_TEXT));
            }
            popup = popup.line("", Style::default()).line(
                "press any key",
                Style::default()
                    .fg(Theme::DIM_TEXT)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(popup, area);

            if self.notice_fresh {
                let popup_area = centered_rect(NOTICE_WIDTH, NOTICE_HEIGHT, area);
                self.fx
                    .add_unique_effect("notice", effects::notice_in().with_area(popup_area));
                self.notice_fresh = false;
            }
        }

        // Apply all tachyonfx effects on top of rendered content
        let tick_duration = Duration::from_millis(33); // ~30fps
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.notice.take().is_some() {
            self.fx.cancel_unique_effect("notice");
            return false;
        }

        let action = match self.mode {
            Mode::Cube => self.cube.handle_key(key, &self.session),
            Mode::AddDeck => self.add_deck.handle_key(key, &self.session),
            Mode::Prompt => match &mut self.prompt {
                Some(prompt) => prompt.handle_key(key, &self.session),
                None => Some(ScreenAction::CloseOverlay),
            },
        };

        self.process_action(action)
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.notice.is_some() {
            return;
        }
        match self.mode {
            Mode::Cube => self.cube.handle_paste(text),
            Mode::AddDeck => self.add_deck.handle_paste(text),
            Mode::Prompt => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.handle_paste(text);
                }
            }
        }
    }

    pub fn tick(&mut self) {
        self.tick += 1;

        // Prompts overlay the cube screen, so only full-screen changes sweep
        let screen_changed = match (self.prev_mode, self.mode) {
            (Some(Mode::Prompt), Mode::Cube) | (Some(Mode::Cube), Mode::Prompt) => false,
            (prev, mode) => prev != Some(mode),
        };
        if screen_changed {
            self.fx
                .add_unique_effect("screen_transition", effects::screen_transition());
        }
        self.prev_mode = Some(self.mode);
    }

    /// An unread error notice is never replaced by an info notice
    fn show(&mut self, notice: Notice) {
        if !notice.error && self.notice.as_ref().is_some_and(|n| n.error) {
            return;
        }
        self.notice = Some(notice);
        self.notice_fresh = true;
    }

    fn close_overlay(&mut self) {
        self.prompt = None;
        self.mode = Mode::Cube;
    }

    fn flash_storage(&mut self) {
        self.fx.add_unique_effect(
            "storage_flash",
            effects::storage_flash().with_area(self.cube.storage_area),
        );
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::OpenAddDeck) => {
                self.mode = Mode::AddDeck;
            }
            Some(ScreenAction::OpenPrompt(kind)) => {
                self.prompt = Some(PromptScreen::new(kind, &self.session));
                self.mode = Mode::Prompt;
            }
            Some(ScreenAction::CloseOverlay) => self.close_overlay(),
            Some(ScreenAction::SubmitManualDeck) => {
                let draft = draft_manual_deck(
                    self.add_deck.text.value(),
                    self.add_deck.name.value(),
                    &self.add_deck.colour_inputs(),
                    self.session.collection.len(),
                );
                info!(name = %draft.name, cards = draft.cards.len(), "deck added");
                self.session.collection.add(draft);
                self.add_deck.reset();
                self.close_overlay();
            }
            Some(ScreenAction::SubmitPrompt(kind, value)) => {
                self.close_overlay();
                self.submit_prompt(kind, &value);
            }
            Some(ScreenAction::ToggleDeck(id)) => {
                self.session.collection.toggle_selected(&id);
            }
            Some(ScreenAction::RemoveDeck(id)) => {
                if let Some(deck) = self.session.collection.remove(&id) {
                    info!(name = %deck.name, "deck removed");
                }
            }
            Some(ScreenAction::WriteDeckText(id)) => self.write_deck_text(&id),
            Some(ScreenAction::Export) => self.export(),
            None => {}
        }

        self.session.refresh();
        false
    }

    fn submit_prompt(&mut self, kind: PromptKind, value: &str) {
        match kind {
            PromptKind::Rename(id) => {
                if !self.session.collection.rename(&id, value) {
                    self.show(Notice::error("Rename", "Deck names cannot be blank."));
                }
            }
            PromptKind::Recolour(id) => {
                self.session.collection.recolour(&id, value.trim());
            }
            PromptKind::Upload => {
                let paths = files::split_paths(value);
                if !paths.is_empty() {
                    self.upload(&paths);
                }
            }
            PromptKind::Import => {
                let value = value.trim();
                if !value.is_empty() {
                    self.import(Path::new(value));
                }
            }
        }
    }

    fn upload(&mut self, paths: &[std::path::PathBuf]) {
        match files::read_deck_files(paths, &self.add_deck.colour_inputs()) {
            Ok(decks) => {
                let ids = self.session.collection.add_many(decks);
                info!(count = ids.len(), "decklists loaded");
                self.show(Notice::info(
                    "Upload",
                    format!("Added {} deck(s).", ids.len()),
                ));
            }
            Err(err) => {
                let message = files::describe(&err);
                warn!(error = %message, "upload failed");
                self.show(Notice::error("Upload failed", message));
            }
        }
    }

    fn import(&mut self, path: &Path) {
        let result = files::read_import(path).and_then(|text| {
            self.session
                .collection
                .import_json(&text)
                .map_err(color_eyre::Report::from)
        });
        match result {
            Ok(ids) => {
                info!(path = %path.display(), count = ids.len(), "decks imported");
                self.show(Notice::info(
                    "Import",
                    format!("Imported {} deck(s) from {}.", ids.len(), path.display()),
                ));
                self.flash_storage();
            }
            Err(err) => {
                let message = files::describe(&err);
                warn!(path = %path.display(), error = %message, "import failed");
                self.show(Notice::error("Import failed", message));
            }
        }
    }

    fn export(&mut self) {
        let path = self.config.export.clone();
        let result = self
            .session
            .collection
            .export_json()
            .map_err(color_eyre::Report::from)
            .and_then(|json| files::write_export(&path, &json));
        match result {
            Ok(()) => {
                info!(path = %path.display(), decks = self.session.collection.len(), "exported");
                self.show(Notice::info(
                    "Export",
                    format!("Saved to {}", path.display()),
                ));
                self.flash_storage();
            }
            Err(err) => {
                let message = files::describe(&err);
                warn!(path = %path.display(), error = %message, "export failed");
                self.show(Notice::error("Export failed", message));
            }
        }
    }

    fn write_deck_text(&mut self, id: &DeckId) {
        let Some(deck) = self.session.collection.get(id) else {
            return;
        };
        let dir = self
            .config
            .export
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        match files::write_deck_text(dir, deck) {
            Ok(path) => {
                info!(path = %path.display(), "deck written as text");
                self.show(Notice::info("Deck saved", format!("Wrote {}", path.display())));
            }
            Err(err) => {
                let message = files::describe(&err);
                warn!(error = %message, "writing deck text failed");
                self.show(Notice::error("Save failed", message));
            }
        }
    }
}

/// What a prompt is asking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Rename(DeckId),
    Recolour(DeckId),
    Upload,
    Import,
}

/// Actions that screens can return
#[derive(Debug, Clone)]
pub enum ScreenAction {
    Quit,
    OpenAddDeck,
    OpenPrompt(PromptKind),
    /// Leave the add-deck form or a prompt without changes
    CloseOverlay,
    SubmitManualDeck,
    SubmitPrompt(PromptKind, String),
    ToggleDeck(DeckId),
    RemoveDeck(DeckId),
    WriteDeckText(DeckId),
    Export,
}
