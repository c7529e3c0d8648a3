use std::path::PathBuf;
use url_piler::app::UrlPilerApp;
use url_piler::config::{Config, StoreMode};
use url_piler::constant;
use url_piler::ui;

fn main() -> eframe::Result {
    tracing_subscriber::fmt().with_target(false).init();

    let config = Config::default();
    let mode = config.settings.mode;
    let initial_file = std::env::args().nth(1).map(PathBuf::from);
    let options = ui::viewport::build_viewport(mode);

    let title = match mode {
        StoreMode::Slots => constant::SLOTS_WINDOW_TITLE,
        StoreMode::Queue => constant::QUEUE_WINDOW_TITLE,
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(UrlPilerApp::new(cc, config, initial_file)))),
    )
}
