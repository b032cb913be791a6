use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::CoreError;

const TMP_SUFFIX: &str = "tmp";

/// Discount and interest policy applied to boleta balances.
///
/// Windows are counted in business days from the infraction date; the
/// grace window must end after the discount window so the two phases
/// never overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tariff {
    pub discount_rate: f64,
    pub discount_window_days: u32,
    pub interest_rate: f64,
    pub grace_window_days: u32,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            discount_rate: 0.25,
            discount_window_days: 5,
            interest_rate: 0.20,
            grace_window_days: 6,
        }
    }
}

impl Tariff {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.discount_rate) {
            return Err(CoreError::InvalidInput(format!(
                "discount rate {} outside [0, 1]",
                self.discount_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.interest_rate) {
            return Err(CoreError::InvalidInput(format!(
                "interest rate {} outside [0, 1]",
                self.interest_rate
            )));
        }
        if self.grace_window_days <= self.discount_window_days {
            return Err(CoreError::InvalidInput(
                "grace window must end after the discount window".into(),
            ));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let data = fs::read_to_string(path)?;
        let tariff: Tariff = serde_json::from_str(&data)?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Falls back to the production defaults when no file exists yet.
    pub fn load_or_default(path: &Path) -> Result<Self, CoreError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
