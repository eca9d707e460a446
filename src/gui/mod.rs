pub mod app;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::SkillviewApp;
