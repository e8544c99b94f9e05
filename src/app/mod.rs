//! App module - contains the main application state and logic

pub mod launch;
mod modals;

use crate::settings::Settings;
use crate::theme;
use crate::types::LaunchOutcome;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Game path as typed in the settings modal; empty means "next to the
    // launcher executable"
    pub(crate) game_path_str: String,
    pub(crate) show_settings: bool,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Toast notification for launch failures
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_color: egui::Color32,
    pub(crate) toast_start: Option<Instant>,
    // Window geometry tracking for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            game_path_str: settings.game_path.unwrap_or_default(),
            show_settings: false,
            logo_texture: None,
            toast_message: None,
            toast_color: theme::STATUS_ERROR,
            toast_start: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Effective game path: settings override if set, otherwise the fixed
    /// binary name next to the launcher executable.
    pub fn game_path(&self) -> PathBuf {
        let trimmed = self.game_path_str.trim();
        if trimmed.is_empty() {
            launch::default_game_path()
        } else {
            PathBuf::from(trimmed)
        }
    }

    /// Launch button handler. Spawning is fire-and-forget; only a double
    /// failure is surfaced to the user.
    pub fn on_launch_press(&mut self) {
        match launch::launch(&self.game_path()) {
            LaunchOutcome::Launched { .. } => {}
            LaunchOutcome::Failed(failure) => {
                self.show_toast(failure.to_string(), theme::STATUS_ERROR);
            }
        }
    }

    pub(crate) fn show_toast(&mut self, message: String, color: egui::Color32) {
        self.toast_message = Some(message);
        self.toast_color = color;
        self.toast_start = Some(Instant::now());
    }

    pub fn save_settings(&self) {
        let trimmed = self.game_path_str.trim();
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            game_path: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        };
        settings.save(&self.data_dir);
    }
}
