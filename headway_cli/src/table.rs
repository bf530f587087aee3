use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use headway_optimizer::{
    problem::{clock::format_clock, station::Station},
    timetable::schedule_entry::ScheduleEntry,
};

pub fn schedule_table(schedule: &[ScheduleEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Train", "Type", "A", "A cap", "A in", "B", "B cap", "B in", "C", "C cap", "C in",
            "U", "U cap", "U out",
        ]);

    for entry in schedule {
        let mut row = vec![entry.train_number.to_string(), entry.train_type.to_string()];
        for station in Station::BOARDING {
            let call = entry.call(station);
            row.push(format_clock(call.arrival_time));
            row.push(call.available_capacity.to_string());
            row.push(call.boarding.to_string());
        }
        row.push(format_clock(entry.terminus.arrival_time));
        row.push(entry.terminus.residual_capacity.to_string());
        row.push(entry.terminus.offloading.to_string());

        table.add_row(row);
    }

    table
}
