//! Reusable UI components

use crate::theme;
use eframe::egui;
use std::path::Path;

/// Small dim caption label that cannot be selected.
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}

/// Icon, color, and label describing whether the game binary is present.
pub fn presence_badge(path: &Path) -> (&'static str, egui::Color32, &'static str) {
    if path.is_file() {
        (
            egui_phosphor::regular::CHECK_CIRCLE,
            theme::STATUS_SUCCESS,
            "Game found",
        )
    } else {
        (
            egui_phosphor::regular::X_CIRCLE,
            theme::STATUS_ERROR,
            "Game not found",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_badge_reflects_file_existence() {
        let missing = Path::new("/definitely/not/here/deadman-pong");
        let (_, _, label) = presence_badge(missing);
        assert_eq!(label, "Game not found");

        let exe = std::env::current_exe().unwrap();
        let (_, _, label) = presence_badge(&exe);
        assert_eq!(label, "Game found");
    }
}
