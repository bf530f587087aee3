use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::{
    parsers::parser::DatasetParser,
    problem::{
        arrival_model::{ArrivalModel, ArrivalSample},
        clock::parse_clock,
        station::Station,
    },
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseArrivalsError {
    #[error("line {line}: expected 3 fields (station,time,count), found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: unknown station \"{station}\"")]
    UnknownStation { line: usize, station: String },

    #[error("line {line}: passengers cannot board at the terminus")]
    TerminusArrival { line: usize },

    #[error("line {line}: invalid time \"{value}\", expected H:MM")]
    InvalidTime { line: usize, value: String },

    #[error("line {line}: invalid passenger count \"{value}\"")]
    InvalidCount { line: usize, value: String },
}

/// Reads `station,H:MM,count` lines, one sample per line.
pub struct ArrivalsCsvParser;

impl DatasetParser for ArrivalsCsvParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<ArrivalModel, anyhow::Error> {
        let file_content = std::fs::read_to_string(file)?;
        let samples = parse_arrivals(&file_content)?;

        Ok(ArrivalModel::new(samples))
    }
}

pub fn parse_arrivals(text: &str) -> Result<Vec<ArrivalSample>, ParseArrivalsError> {
    let mut samples = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ParseArrivalsError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        if samples.is_empty() && is_header(&fields) {
            debug!("Skipping header line {line}");
            continue;
        }

        samples.push(parse_sample(line, &fields)?);
    }

    Ok(samples)
}

fn is_header(fields: &[&str]) -> bool {
    fields[2].parse::<u32>().is_err() && parse_clock(fields[1]).is_none()
}

fn parse_sample(line: usize, fields: &[&str]) -> Result<ArrivalSample, ParseArrivalsError> {
    let station: Station = fields[0]
        .parse()
        .map_err(|_| ParseArrivalsError::UnknownStation {
            line,
            station: fields[0].to_owned(),
        })?;
    if station.is_terminus() {
        return Err(ParseArrivalsError::TerminusArrival { line });
    }

    let minute = parse_clock(fields[1]).ok_or_else(|| ParseArrivalsError::InvalidTime {
        line,
        value: fields[1].to_owned(),
    })?;

    let count = fields[2]
        .parse::<u32>()
        .map_err(|_| ParseArrivalsError::InvalidCount {
            line,
            value: fields[2].to_owned(),
        })?;

    Ok(ArrivalSample::new(station, minute, count))
}
