use checklist_maker::app::ChecklistApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Checklist Maker",
        options,
        Box::new(|_cc| Box::new(ChecklistApp::default())),
    )
}
