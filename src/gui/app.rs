use std::{
    path::PathBuf,
    time::Duration,
};

use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        FieldName,
        Language,
        Skill,
        SkillId,
    },
    persistence::{
        data_file_exists,
        load_json_or_default,
        save_json,
    },
};

/// Everything tied to the currently loaded page: the frozen skill sequence
/// in first-encounter order plus the toggle state derived from it.
///
/// Task results are tagged with the generation of the page load that spawned
/// them. Opening a new page bumps the generation, so in-flight results of an
/// abandoned page are dropped instead of leaking into the new one.
struct PageState {
    skills: Vec<Skill>,
    path: Option<PathBuf>,
    status_message: Option<String>,
    english_enabled: bool,
    toggle_hidden: bool,
    /// Number of translated skills, known only after every fetch settled.
    settled: Option<usize>,
    generation: u64,
}

impl PageState {
    fn new() -> Self {
        Self {
            skills: Vec::new(),
            path: None,
            status_message: None,
            english_enabled: true,
            toggle_hidden: false,
            settled: None,
            generation: 0,
        }
    }

    /// Starts loading a new page and returns the generation its task results
    /// must carry.
    fn begin_page(&mut self, path: PathBuf) -> u64 {
        self.generation += 1;
        self.skills.clear();
        self.settled = None;
        self.english_enabled = true;
        self.toggle_hidden = false;
        self.status_message = Some(format!("Loading {}...", path.display()));
        self.path = Some(path);
        self.generation
    }

    /// Applies one task result. Returns the skill ids whose translations
    /// should now be fetched when the page itself just arrived.
    fn apply(&mut self, result: TaskResult) -> Option<Vec<SkillId>> {
        if result.generation() != self.generation {
            return None;
        }

        match result {
            TaskResult::LoadingMessage { message, .. } => {
                self.status_message = Some(message);
            }
            TaskResult::PageLoaded { result: Ok(skills), .. } => {
                self.status_message = None;
                let ids = skills.iter().map(|s| s.id().to_string()).collect();
                self.skills = skills;
                return Some(ids);
            }
            TaskResult::PageLoaded { result: Err(e), .. } => {
                eprintln!("{}", e);
                self.status_message = Some(e);
                self.settled = Some(0);
                self.english_enabled = false;
                self.toggle_hidden = true;
            }
            TaskResult::TranslationFetched { skill_id, fields, .. } => {
                if let Some(skill) = self.skills.iter_mut().find(|s| s.id() == skill_id) {
                    skill.set_translation(fields);
                }
            }
            TaskResult::TranslationsSettled { translated, .. } => {
                // Decided once per page, never re-evaluated.
                if self.settled.is_none() {
                    self.settled = Some(translated);
                    if translated == 0 {
                        self.english_enabled = false;
                        self.toggle_hidden = true;
                    }
                }
            }
        }

        None
    }

    fn set_language(&mut self, lang: Language) {
        for skill in &mut self.skills {
            skill.set_language(lang);
        }
    }

    fn title(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "No page loaded".to_string())
    }
}

pub struct SkillviewApp {
    page: PageState,

    // Configuration
    settings: SettingsData,

    // UI state
    theme: Theme,

    task_manager: TaskManager,
}

impl SkillviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, page: Option<PathBuf>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        if !data_file_exists(SETTINGS_FILE) {
            if let Err(e) = save_json(&settings, SETTINGS_FILE) {
                eprintln!("Failed to write default settings: {}", e);
            }
        }

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let mut app = Self {
            page: PageState::new(),
            settings,
            theme,
            task_manager: TaskManager::new(),
        };

        if let Some(path) = page {
            app.open_page(path);
        }

        app
    }

    fn open_page(&mut self, path: PathBuf) {
        let generation = self.page.begin_page(path.clone());
        self.task_manager.load_page(path, generation);
    }

    fn handle_action(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::OpenPage(path) => self.open_page(path),
            TopBarAction::SetLanguage(lang) => self.page.set_language(lang),
        }
    }

    fn skill_table(&self, ui: &mut egui::Ui) {
        let text_height =
            egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(180.0))
                .column(Column::remainder())
                .header(25.0, |mut header| {
                    header.col(|ui| {
                        ui.label(self.theme.heading("Skill"));
                    });
                    header.col(|ui| {
                        ui.label(self.theme.heading("Description"));
                    });
                })
                .body(|mut body| {
                    for skill in &self.page.skills {
                        let name = skill.display(FieldName::Name).unwrap_or("").to_string();
                        let desc = skill.display(FieldName::Desc).unwrap_or("").to_string();

                        // Rough wrap estimate so long descriptions get room.
                        let lines = 1 + desc.chars().count() / 90;
                        let height = text_height * lines as f32;

                        body.row(height, |mut row| {
                            row.col(|ui| {
                                ui.strong(self.theme.bold(&name));
                            });
                            row.col(|ui| {
                                ui.label(&desc);
                            });
                        });
                    }
                });
        });
    }
}

impl eframe::App for SkillviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            if let Some(ids) = self.page.apply(result) {
                self.task_manager.fetch_translations(
                    self.settings.base_url.clone(),
                    ids,
                    self.page.generation,
                );
            }
        }

        // Keep polling while fetches are still in flight.
        if self.page.path.is_some() && self.page.settled.is_none() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        let action = TopBar::show(
            ctx,
            &self.theme,
            self.page.english_enabled,
            self.page.toggle_hidden,
            self.page.settled,
        );
        if let Some(action) = action {
            self.handle_action(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.page.title());
            ui.add_space(6.0);

            if let Some(message) = &self.page.status_message {
                ui.label(egui::RichText::new(message).color(self.theme.comment()));
                ui.add_space(6.0);
            }

            if !self.page.skills.is_empty() {
                self.skill_table(ui);
            } else if self.page.path.is_none() {
                ui.label("Open a unit page to view its skills (File > Open Unit Page).");
            }
        });
    }
}
