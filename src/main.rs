mod app;

use app::FlashzillaApp;
use flashzilla::config::AppConfig;
use flashzilla::database::CardStore;
use flashzilla::database::db::{self, SqliteCardStore};
use flashzilla::models::Card;
use log::{info, warn};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::load();
    let conn = db::init_database(&config.database_path)
        .or_else(|e| {
            warn!(
                "Could not open {}: {}. Cards will not outlive this run.",
                config.database_path.display(),
                e
            );
            db::open_in_memory()
        })
        .expect("Failed to initialize database");
    let store = SqliteCardStore::new(conn);

    if matches!(store.try_load(), Ok(cards) if cards.is_empty()) {
        store.save(&[Card::example()]);
        info!("Sample card created");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashzilla",
        options,
        Box::new(move |_cc| Ok(Box::new(FlashzillaApp::new(&config, store)))),
    )
}
