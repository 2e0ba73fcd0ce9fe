// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery component.
//!
//! The `App` struct wires together the gallery, localization, the
//! diagnostics collector and durable state. The gallery never touches disk
//! or the log itself: it returns [`Effect`]s which are carried out here.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Tuning};
use crate::diagnostics::{DiagnosticsCollector, UserAction};
use crate::gallery::{self, Gallery};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self as gallery_ui, component, Effect};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use persisted_state::{AppState, StateStore};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: component::State,
    theme_mode: ThemeMode,
    diagnostics: DiagnosticsCollector,
    state_store: StateStore,
    /// Last persisted gallery state, updated on every write.
    app_state: AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.gallery.gallery().len())
            .field("mode", &self.gallery.mode())
            .field("diagnostic_events", &self.diagnostics.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, the gallery and persisted state, then starts the
    /// gallery component on the active item.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let state_store = StateStore::new(flags.data_dir.as_deref().map(Into::into));
        Self::with_store(flags, state_store)
    }

    fn with_store(flags: Flags, state_store: StateStore) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut diagnostics = DiagnosticsCollector::default();

        if let Some(key) = config_warning {
            report_warning(&mut diagnostics, &i18n, key);
        }

        let gallery = match flags.gallery_path.as_deref() {
            Some(path) => load_gallery(Path::new(path), &mut diagnostics, &i18n),
            None => Gallery::default(),
        };

        let (mut app_state, state_warning) = state_store.load();
        if let Some(key) = state_warning {
            report_warning(&mut diagnostics, &i18n, key);
        }
        // Written back at startup so a corrupt file is replaced by a valid one
        let controls_visible = app_state.controls_visible;
        if !persistence::persist_controls_visible(
            &state_store,
            &mut app_state,
            controls_visible,
            &diagnostics.handle(),
        ) {
            diagnostics.process_pending();
        }

        let (gallery, task) = component::State::new(
            gallery,
            Tuning::from_config(&config),
            app_state.controls_visible,
            default_window_size(),
        );

        let app = Self {
            i18n,
            gallery,
            theme_mode: config.general.theme_mode,
            diagnostics,
            state_store,
            app_state,
        };
        (app, task.map(Message::Gallery))
    }

    fn title(&self) -> String {
        match self.gallery.gallery().active_item() {
            Some(item) => self
                .i18n
                .tr_with_args("window-title-with-item", &[("title", item.title.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(&self.gallery),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                let (effect, task) = self.gallery.handle_message(gallery_message);
                self.apply_effect(effect);
                task.map(Message::Gallery)
            }
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::PersistControls(visible) => {
                persistence::persist_controls_visible(
                    &self.state_store,
                    &mut self.app_state,
                    visible,
                    &self.diagnostics.handle(),
                );
                self.diagnostics
                    .log_action(UserAction::ToggleControls { visible });
            }
            Effect::ReportLoadFailure(error) => {
                self.diagnostics.log_load_failure(&error);
            }
            Effect::Action(action) => self.diagnostics.log_action(action),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        gallery_ui::view(&self.gallery, &self.i18n).map(Message::Gallery)
    }

    /// Diagnostic events recorded this session, as pretty JSON.
    pub fn export_diagnostics(&mut self) -> serde_json::Result<String> {
        self.diagnostics.process_pending();
        self.diagnostics.export_json()
    }
}

/// Reads the gallery at `path`. A failure leaves the gallery empty.
fn load_gallery(path: &Path, diagnostics: &mut DiagnosticsCollector, i18n: &I18n) -> Gallery {
    match gallery::load_source(path) {
        Ok(gallery) => gallery,
        Err(error) => {
            let reason = error.to_string();
            eprintln!(
                "{}",
                i18n.tr_with_args("error-gallery-load-failed", &[("reason", &reason)])
            );
            diagnostics.log_warning("error-gallery-load-failed");
            Gallery::default()
        }
    }
}

fn report_warning(diagnostics: &mut DiagnosticsCollector, i18n: &I18n, key: String) {
    eprintln!("{}", i18n.tr(&key));
    diagnostics.log_warning(key);
}
