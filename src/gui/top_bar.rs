use std::path::PathBuf;

use eframe::egui::{
    self,
    containers,
};
use rfd::FileDialog;

use super::theme::Theme;
use crate::core::Language;

pub enum TopBarAction {
    OpenPage(PathBuf),
    SetLanguage(Language),
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        english_enabled: bool,
        toggle_hidden: bool,
        settled: Option<usize>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Open Unit Page").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Unit pages", &["html", "htm"])
                            .pick_file()
                        {
                            action = Some(TopBarAction::OpenPage(path));
                        }
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_translation_status(ui, theme, settled);

                    if !toggle_hidden {
                        ui.add_space(6.0);
                        if ui
                            .add_enabled(
                                english_enabled,
                                egui::Button::new(Language::English.label()),
                            )
                            .clicked()
                        {
                            action = Some(TopBarAction::SetLanguage(Language::English));
                        }
                        if ui.button(Language::Japanese.label()).clicked() {
                            action = Some(TopBarAction::SetLanguage(Language::Japanese));
                        }
                    }
                });
            });
        });

        action
    }

    fn show_translation_status(ui: &mut egui::Ui, theme: &Theme, settled: Option<usize>) {
        let (color, tooltip) = match settled {
            None => (theme.comment(), "Fetching translations...".to_string()),
            Some(0) => (theme.red(), "No translations available".to_string()),
            Some(n) => (theme.green(), format!("{} skills translated", n)),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("translations").on_hover_text(tooltip.clone());
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
