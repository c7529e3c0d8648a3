use crate::config::{Config, StoreMode};
use crate::constant::{DEFAULT_QUEUE_CAPACITY, DEFAULT_SLOT_CAPACITY, URL_FILE_EXTENSION};
use crate::dropzone::{self, DropAction};
use crate::messages::ResponseMessage;
use crate::persist;
use crate::saver::{SaverMessage, spawn_saver};
use crate::store::{AddOutcome, BoundedUrlStore, StoreError};
use crate::style::configure_style;
use crate::ui::queue_status::QueueStatus;
use crate::ui::slot_list::{SlotAction, SlotList};
use crate::ui::toolbar::{Toolbar, ToolbarAction};
use chrono::Local;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use tracing::{debug, error, info, warn};

pub struct UrlPilerApp {
    mode: StoreMode,
    store: BoundedUrlStore,
    config: Config,
    status: Option<String>,
    /// Recent files changed since startup; written back on exit
    settings_changed: bool,
    saver_sender: Sender<SaverMessage>,
    response_receiver: Receiver<ResponseMessage>,
}

impl UrlPilerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        initial_file: Option<PathBuf>,
    ) -> Self {
        configure_style(&cc.egui_ctx);
        let mut app = Self::with_config(config);

        if let Some(path) = initial_file {
            app.request_load(path);
        } else if app.config.settings.restore_session {
            app.restore_session();
        }

        app
    }

    pub fn with_config(config: Config) -> Self {
        let mode = config.settings.mode;
        let store = build_store(&config);
        let (saver_sender, response_receiver) = spawn_saver();

        Self {
            mode,
            store,
            config,
            status: None,
            settings_changed: false,
            saver_sender,
            response_receiver,
        }
    }

    pub fn store(&self) -> &BoundedUrlStore {
        &self.store
    }

    fn restore_session(&mut self) {
        let session = self.config.session_path();
        if !session.exists() {
            return;
        }
        match persist::read_urls(&session) {
            Ok(lines) => {
                self.store.load_from_lines(&lines);
                info!("Restored {} URLs from last session", self.store.len());
            }
            Err(e) => warn!("Could not restore session: {}", e),
        }
    }

    /// Apply a dropped or pasted payload to the store
    fn apply_drop(&mut self, action: DropAction) {
        match action {
            DropAction::LoadFile(path) => self.request_load(path),
            DropAction::AddUrl(url) => self.add_url(url),
            DropAction::Ignore => {}
        }
    }

    fn add_url(&mut self, url: String) {
        match self.store.add(url.as_str()) {
            AddOutcome::Added => {
                debug!("Added {}", url);
                self.status = None;
            }
            AddOutcome::Duplicate => debug!("Ignoring duplicate {}", url),
            AddOutcome::Full => {
                debug!("Store full, ignoring {}", url);
                self.status = Some(format!("Full ({}), URL not added", self.store.capacity()));
            }
            AddOutcome::Rejected => {}
        }
    }

    fn resize(&mut self, capacity: usize) {
        if let Err(e) = self.store.resize(capacity) {
            warn!("{}", e);
        }
    }

    fn request_load(&mut self, path: PathBuf) {
        if let Err(e) = self.saver_sender.send(SaverMessage::Load(path)) {
            error!("Failed to send load message: {}", e);
        }
    }

    /// Pick a destination on a helper thread, then hand the snapshot to the saver
    fn pick_and_save(&self) {
        let sender = self.saver_sender.clone();
        let lines = self.store.serialize_to_lines();
        let directory = self.config.dialog_dir();
        let file_name = format!(
            "urls_{}.{}",
            Local::now().format("%Y-%m-%d_%H-%M-%S"),
            URL_FILE_EXTENSION
        );
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Save URLs")
                .set_directory(&directory)
                .set_file_name(&file_name)
                .add_filter("Text Files", &[URL_FILE_EXTENSION])
                .save_file()
                && let Err(e) = sender.send(SaverMessage::Save(path, lines))
            {
                error!("Failed to send save message: {}", e);
            }
        });
    }

    fn pick_and_load(&self) {
        let sender = self.saver_sender.clone();
        let directory = self.config.dialog_dir();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Load URLs")
                .set_directory(&directory)
                .add_filter("Text Files", &[URL_FILE_EXTENSION])
                .pick_file()
                && let Err(e) = sender.send(SaverMessage::Load(path))
            {
                error!("Failed to send load message: {}", e);
            }
        });
    }

    fn handle_response(&mut self, response: ResponseMessage) {
        match response {
            ResponseMessage::UrlsLoaded(Ok((path, lines))) => {
                let before = self.store.capacity();
                self.store.load_from_lines(&lines);
                if self.store.capacity() != before {
                    info!(
                        "Raised capacity from {} to {} to fit {} URLs",
                        before,
                        self.store.capacity(),
                        lines.len()
                    );
                }
                self.status = Some(format!("Loaded {} URLs", self.store.len()));
                self.remember_file(path);
            }
            ResponseMessage::UrlsLoaded(Err(e)) => {
                self.status = Some(format!("Load failed: {}", e));
            }
            ResponseMessage::UrlsSaved(Ok((path, written))) => {
                self.status = Some(format!("Saved {} URLs", written));
                self.remember_file(path);
            }
            ResponseMessage::UrlsSaved(Err(e)) => {
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    fn remember_file(&mut self, path: PathBuf) {
        self.config.settings.remember_file(path);
        self.settings_changed = true;
    }

    fn handle_toolbar(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Resize(capacity) => self.resize(capacity),
            ToolbarAction::Save => self.pick_and_save(),
            ToolbarAction::Load => self.pick_and_load(),
            ToolbarAction::LoadRecent(path) => self.request_load(path),
            ToolbarAction::Clear => {
                self.store.clear();
                self.status = None;
            }
        }
    }

    /// Collect native file drops and clipboard pastes
    fn collect_inputs(ctx: &egui::Context) -> Vec<DropAction> {
        ctx.input(|i| {
            let mut actions = Vec::new();
            for file in &i.raw.dropped_files {
                match &file.path {
                    Some(path) => actions.push(dropzone::classify_path(path)),
                    None => actions.extend(dropzone::classify_all(&file.name)),
                }
            }
            for event in &i.events {
                if let egui::Event::Paste(text) = event {
                    actions.extend(dropzone::classify_all(text));
                }
            }
            actions
        })
    }

    fn pop_and_open(&mut self, ctx: &egui::Context) {
        match self.store.remove_front() {
            Ok(url) => {
                info!("Opening {}", url);
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            Err(StoreError::Empty) => debug!("Queue is empty, nothing to open"),
            Err(e) => warn!("{}", e),
        }
    }

    fn show_slots(&mut self, ctx: &egui::Context) {
        let mut toolbar_action = None;
        let mut slot_action = None;

        egui::TopBottomPanel::top("memory_size_panel").show(ctx, |ui| {
            toolbar_action =
                Toolbar::capacity_combo(ui, self.store.options(), self.store.capacity());
        });

        egui::TopBottomPanel::bottom("file_panel").show(ctx, |ui| {
            if let Some(status) = &self.status {
                ui.small(status.as_str());
            }
            if let Some(action) = Toolbar::file_buttons(ui, &self.config.settings.recent_files) {
                toolbar_action = Some(action);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                slot_action = SlotList::show(ui, &self.store.slots());
            });
        });

        if let Some(action) = toolbar_action {
            self.handle_toolbar(action);
        }
        match slot_action {
            Some(SlotAction::Open(url)) => ctx.open_url(egui::OpenUrl::new_tab(url)),
            Some(SlotAction::Clear(index)) => {
                if let Some(url) = self.store.remove_at(index) {
                    debug!("Cleared slot {} ({})", index, url);
                }
            }
            None => {}
        }
    }

    fn show_queue(&mut self, ctx: &egui::Context) {
        let mut toolbar_action = None;
        let mut pill_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            toolbar_action =
                Toolbar::capacity_slider(ui, self.store.options(), self.store.capacity());
            ui.add_space(4.0);
            pill_clicked = QueueStatus::show(
                ui,
                self.store.len(),
                self.store.capacity(),
                self.store.fullness(),
            );
            ui.add_space(4.0);
            let width = ui.available_width();
            if let Some(action) = Toolbar::clear_button(ui, width) {
                toolbar_action = Some(action);
            }
            if let Some(status) = &self.status {
                ui.small(status.as_str());
            }
        });

        if let Some(action) = toolbar_action {
            self.handle_toolbar(action);
        }
        if pill_clicked {
            self.pop_and_open(ctx);
        }
    }

    fn show_drop_hint(ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if !hovering {
            return;
        }
        egui::Area::new(egui::Id::new("drop_hint"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Drop to load").heading());
            });
    }
}

fn build_store(config: &Config) -> BoundedUrlStore {
    let settings = &config.settings;
    let requested = settings.initial_capacity();
    let fallback = match settings.mode {
        StoreMode::Slots => DEFAULT_SLOT_CAPACITY,
        StoreMode::Queue => DEFAULT_QUEUE_CAPACITY,
    };

    let store = BoundedUrlStore::new(requested).unwrap_or_else(|e| {
        warn!("{}, using {}", e, fallback);
        let mut store = BoundedUrlStore::default();
        if let Err(e) = store.resize(fallback) {
            warn!("{}", e);
        }
        store
    });

    store.with_load_policy(settings.load_policy())
}

impl eframe::App for UrlPilerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for finished file operations
        while let Ok(response) = self.response_receiver.try_recv() {
            self.handle_response(response);
        }

        for action in Self::collect_inputs(ctx) {
            self.apply_drop(action);
        }

        match self.mode {
            StoreMode::Slots => self.show_slots(ctx),
            StoreMode::Queue => self.show_queue(ctx),
        }

        Self::show_drop_hint(ctx);

        // Saver replies arrive without input events
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.settings_changed
            && let Err(e) = self.config.save()
        {
            error!("Failed to save settings on exit: {}", e);
        }

        if !self.config.settings.restore_session {
            return;
        }
        let session = self.config.session_path();
        match persist::write_urls(&session, &self.store.serialize_to_lines()) {
            Ok(written) => info!("Saved {} URLs to session {:?}", written, session),
            Err(e) => error!("Failed to save session on exit: {}", e),
        }
    }
}
