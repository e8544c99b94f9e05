#![windows_subsystem = "windows"]
//! Deadman Pong Launcher - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "deadman-pong-launcher.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,deadman_pong_launcher=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Deadman Pong");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Deadman Pong Launcher starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(420.0, 520.0)))
        .with_min_inner_size([380.0, 460.0])
        .with_title(WINDOW_TITLE);

    // Window/taskbar icon rasterized from the embedded SVG
    {
        let (rgba, w, h) = utils::rasterize_icon(64);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.render_settings_modal(ctx);

        let panel_rect = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();

                // Settings gear, top-right overlay
                let gear_rect = egui::Rect::from_center_size(
                    egui::pos2(panel_rect.right() - 24.0, panel_rect.top() + 24.0),
                    egui::vec2(28.0, 28.0),
                );
                let gear_resp =
                    ui.interact(gear_rect, ui.id().with("settings_gear"), egui::Sense::click());
                let gear_color = if gear_resp.hovered() {
                    ui.painter().rect_filled(gear_rect, 4.0, theme::BG_SURFACE);
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    theme::TEXT_PRIMARY
                } else {
                    theme::TEXT_DIM
                };
                ui.painter().text(
                    gear_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::GEAR,
                    egui::FontId::proportional(16.0),
                    gear_color,
                );
                if gear_resp.clicked() {
                    self.show_settings = true;
                }

                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.add_space(36.0);

                    // Header logo
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_icon(192);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
                    ));

                    ui.add_space(theme::SPACING_XL);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(GAME_TITLE)
                                .size(theme::FONT_TITLE)
                                .color(theme::TEXT_PRIMARY)
                                .strong(),
                        )
                        .selectable(false),
                    );

                    ui.add_space(28.0);

                    let launch = theme::menu_button(
                        ui,
                        theme::BTN_ACCENT,
                        theme::ACCENT_TEXT_DARK,
                        egui_phosphor::regular::GAME_CONTROLLER,
                        "Launch Game",
                    );
                    if launch.clicked() {
                        self.on_launch_press();
                    }

                    ui.add_space(theme::SPACING_LG);

                    let exit = theme::menu_button(
                        ui,
                        theme::BTN_DANGER,
                        theme::TEXT_PRIMARY,
                        egui_phosphor::regular::SIGN_OUT,
                        "Exit",
                    );
                    if exit.clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                // Version caption at the very bottom
                ui.painter().text(
                    egui::pos2(panel_rect.center().x, panel_rect.bottom() - 10.0),
                    egui::Align2::CENTER_BOTTOM,
                    format!("v{}", APP_VERSION),
                    egui::FontId::proportional(theme::FONT_CAPTION),
                    egui::Color32::from_rgb(0x45, 0x45, 0x4c),
                );

                panel_rect
            })
            .inner;

        self.render_toast(ctx, panel_rect);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Launcher shutting down");
        self.save_settings();
    }
}

impl App {
    /// Toast notification: bottom-right of the panel, 3s visible then fade,
    /// timer pauses on hover.
    fn render_toast(&mut self, ctx: &egui::Context, panel_rect: egui::Rect) {
        let Some(msg) = self.toast_message.clone() else {
            return;
        };

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let accent = self.toast_color;

        let response = egui::Area::new(egui::Id::new("launch_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self
                    .toast_start
                    .map(|t| t.elapsed().as_secs_f32())
                    .unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    (total_duration - elapsed) / fade_duration
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        0x1a,
                        0x1a,
                        0x1e,
                        (230.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            accent.r(),
                            accent.g(),
                            accent.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(260.0);
                        ui.label(egui::RichText::new(&msg).color(
                            egui::Color32::from_rgba_unmultiplied(
                                255,
                                255,
                                255,
                                (255.0 * alpha) as u8,
                            ),
                        ));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
