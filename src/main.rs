//! Four-in-a-row GUI
//!
//! A graphical interface for playing against the AI, watching two AIs play,
//! or playing hotseat.

use fourline::ui::FourLineApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Four in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Four in a Row",
        options,
        Box::new(|cc| Ok(Box::new(FourLineApp::new(cc)))),
    )
}
