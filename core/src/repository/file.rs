use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::resolve_data_dir;
use crate::model::attendance::DayAttendance;
use crate::model::settings::MonthlySettings;
use crate::repository::traits::LedgerRepository;

const ATTENDANCE_FILE_NAME: &str = "attendance.json";
const SETTINGS_FILE_NAME: &str = "monthly_settings.json";

/// JSON files in the data directory, one per record set.
#[derive(Clone)]
pub struct FileLedgerRepository {
    attendance_path: PathBuf,
    settings_path: PathBuf,
}

impl FileLedgerRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = resolve_data_dir(base_dir)?;
        let attendance_path = dir.join(ATTENDANCE_FILE_NAME);
        let settings_path = dir.join(SETTINGS_FILE_NAME);

        // Start every file as an empty JSON array
        if !attendance_path.exists() {
            write_json(&attendance_path, &Vec::<DayAttendance>::new())?;
        }
        if !settings_path.exists() {
            write_json(&settings_path, &Vec::<MonthlySettings>::new())?;
        }

        Ok(FileLedgerRepository {
            attendance_path,
            settings_path,
        })
    }

    pub fn attendance_path(&self) -> &Path {
        &self.attendance_path
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(records)
}

fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    debug!(path = %path.display(), count = records.len(), "wrote records");
    Ok(())
}

impl LedgerRepository for FileLedgerRepository {
    fn load_attendance(&self) -> Result<Vec<DayAttendance>> {
        read_json(&self.attendance_path)
    }

    fn load_settings(&self) -> Result<Vec<MonthlySettings>> {
        read_json(&self.settings_path)
    }

    fn save_attendance(&self, records: &[DayAttendance]) -> Result<()> {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| r.date);
        write_json(&self.attendance_path, &sorted)
    }

    fn save_settings(&self, records: &[MonthlySettings]) -> Result<()> {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|s| (s.year, s.month));
        write_json(&self.settings_path, &sorted)
    }
}
