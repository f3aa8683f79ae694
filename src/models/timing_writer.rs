use csv::Writer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

use super::timing::Timing;
use crate::lib::constants::FN_NEW;
use crate::lib::error::AppError;
use crate::lib::format::{duration_nanos, duration_seconds};

const PATH: &str = "models/timing_writer";
const FN_WRITE_TIMING: &str = "write_timing";

const KEY_COL: &str = "key";
const NANOS_COL: &str = "nanos";
const SECONDS_COL: &str = "seconds";

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TimingRow {
    pub key: String,
    pub nanos: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub seconds: Decimal,
}

pub struct TimingWriter {
    writer: Writer<File>,
}

impl TimingWriter {
    pub fn new(file_path: &str) -> Result<Self, AppError> {
        if let Some(dir) = Path::new(file_path).parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .map_err(|e| AppError::new(PATH, FN_NEW, "00", &e.to_string()))?;
            }
        }

        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(file_path)
            .map_err(|e| AppError::new(PATH, FN_NEW, "01", &e.to_string()))?;
        Ok(Self { writer })
    }

    /// Write a header and one row per timer, returning the row count.
    pub fn write_timing<T: Timing>(&mut self, timing: &T) -> Result<usize, AppError> {
        self.writer
            .write_record(&[KEY_COL, NANOS_COL, SECONDS_COL])
            .map_err(|e| AppError::new(PATH, FN_WRITE_TIMING, "00", &e.to_string()))?;

        let rows = Self::rows(timing);
        for row in &rows {
            self.writer
                .serialize(row)
                .map_err(|e| AppError::new(PATH, FN_WRITE_TIMING, "01", &e.to_string()))?;
        }

        self.writer
            .flush()
            .map_err(|e| AppError::new(PATH, FN_WRITE_TIMING, "02", &e.to_string()))?;

        Ok(rows.len())
    }

    pub fn rows<T: Timing>(timing: &T) -> Vec<TimingRow> {
        timing
            .durations()
            .into_iter()
            .map(|(key, d)| TimingRow {
                key,
                nanos: duration_nanos(&d),
                seconds: duration_seconds(&d),
            })
            .collect()
    }
}
