use std::path::PathBuf;

use eframe::egui;
use skillview::gui::SkillviewApp;

fn main() -> eframe::Result<()> {
    let page = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Skillview",
        options,
        Box::new(|cc| Ok(Box::new(SkillviewApp::new(cc, page)))),
    )
}
