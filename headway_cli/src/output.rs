use std::{fs::File, io::BufWriter, path::Path};

use headway_optimizer::{
    json::types::JsonOptimizedSchedule, solver::optimized_timetable::OptimizedTimetable,
    timetable::schedule_csv::write_schedule_csv,
};
use tracing::info;

/// Writes JSON when `out` ends in `.json`, CSV otherwise.
pub fn write_timetable(out: &Path, timetable: &OptimizedTimetable) -> Result<(), anyhow::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let writer = BufWriter::new(File::create(out)?);
    if is_json(out) {
        serde_json::to_writer_pretty(writer, &JsonOptimizedSchedule::from(timetable))?;
    } else {
        write_schedule_csv(writer, &timetable.schedule)?;
    }

    info!("Schedule written to {}", out.display());

    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}
