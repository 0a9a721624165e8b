use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
    pub blue: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: 400, height: 200, output_dir: PathBuf::from("./renders"), blue: 100 }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn output_path(&self, unix_seconds: u64) -> PathBuf {
        self.output_dir.join(format!("{}.png", unix_seconds))
    }
}
