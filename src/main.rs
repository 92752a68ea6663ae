// Exam Countdown
// Terminal host: renders the deadline table on a fixed tick.

use std::io::Write;
use std::thread;

use chrono::Local;

use exam_countdown::services::autostart;
use exam_countdown::services::countdown::{self, DeadlineRow, VisibleRegistry};
use exam_countdown::services::deadline::DeadlineStore;
use exam_countdown::services::settings::Settings;
use exam_countdown::utils::paths::{self, AppPaths};

fn main() {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Exam Countdown");

    let settings = Settings::load_or_default(&paths::config_file());

    if settings.register_autostart {
        if let Err(err) = autostart::register() {
            log::warn!("Failed to register autostart: {err:#}");
        }
    }

    let app_paths = AppPaths::resolve(&settings);
    let store = DeadlineStore::new(&app_paths.deadlines);
    let mut registry = VisibleRegistry::new();

    loop {
        let records = store.load();
        let rows = countdown::rows(&records, Local::now().naive_local());

        // Rows that appeared since the last pass need a structural rebuild;
        // otherwise a tick update (refresh in place, retract the vanished)
        // is enough.
        if registry.visible_keys().is_empty() || !registry.pending_keys(&rows).is_empty() {
            registry.rebuild(&rows);
            render(&rows);
        } else {
            let update = registry.tick(&rows);
            render(&update.updates);
        }

        thread::sleep(settings.tick());
    }
}

fn render(rows: &[DeadlineRow]) {
    let mut out = std::io::stdout().lock();
    // Repaint from the top-left each tick.
    let _ = write!(out, "\x1B[2J\x1B[H");
    for row in rows {
        let marker = if row.completed { "✔" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {} | {} | {}  [{:>3}%]",
            row.countdown_label, row.date_label, row.course, row.progress_percent
        );
    }
    let _ = out.flush();
}
