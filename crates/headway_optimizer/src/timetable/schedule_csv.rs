use std::io::{self, Write};

use crate::problem::{clock::format_clock, station::Station};

use super::schedule_entry::ScheduleEntry;

pub const SCHEDULE_CSV_HEADER: &str = "TrainNum,TrainType,\
A_ArrivalTime,A_AvailCap,A_Boarding,\
B_ArrivalTime,B_AvailCap,B_Boarding,\
C_ArrivalTime,C_AvailCap,C_Boarding,\
U_ArrivalTime,U_AvailCap,U_Offloading";

/// Writes the schedule as CSV, one line per train after the header.
pub fn write_schedule_csv<W: Write>(mut writer: W, schedule: &[ScheduleEntry]) -> io::Result<()> {
    writeln!(writer, "{SCHEDULE_CSV_HEADER}")?;

    for entry in schedule {
        write!(writer, "{},{}", entry.train_number, entry.train_type)?;
        for station in Station::BOARDING {
            let call = entry.call(station);
            write!(
                writer,
                ",{},{},{}",
                format_clock(call.arrival_time),
                call.available_capacity,
                call.boarding
            )?;
        }
        writeln!(
            writer,
            ",{},{},{}",
            format_clock(entry.terminus.arrival_time),
            entry.terminus.residual_capacity,
            entry.terminus.offloading
        )?;
    }

    writer.flush()
}
