//! Local writer for server-produced portfolio exports
//!
//! The server renders the export body (JSON rows or a finished CSV string)
//! and picks the filename; this module only puts the bytes on disk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::api::ExportResponse;

/// Write an export payload into `dir`, returning the created file path
pub fn write_export(response: &ExportResponse, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    // Keep only the filename component; the server should not steer where
    // the file lands
    let filename = Path::new(&response.filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "portfolio_export".to_string());
    let path = dir.join(filename);

    let body = match &response.data {
        serde_json::Value::String(csv_text) => csv_text.clone(),
        rows => serde_json::to_string_pretty(rows).context("Failed to render export body")?,
    };

    std::fs::write(&path, body)
        .with_context(|| format!("Failed to write export file {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("coinfolio-export-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_writes_json_payload() {
        let dir = scratch_dir("json");
        let response = ExportResponse {
            data: serde_json::json!([{"coin_id": "bitcoin", "quantity": 0.5}]),
            filename: "portfolio_export_20250820.json".to_string(),
        };

        let path = write_export(&response, &dir).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("bitcoin"));
        assert!(path.ends_with("portfolio_export_20250820.json"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_writes_csv_body_verbatim() {
        let dir = scratch_dir("csv");
        let csv = "coin_id,quantity\nbitcoin,0.5\n";
        let response = ExportResponse {
            data: serde_json::Value::String(csv.to_string()),
            filename: "portfolio_export_20250820.csv".to_string(),
        };

        let path = write_export(&response, &dir).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), csv);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_filename_is_stripped_to_basename() {
        let dir = scratch_dir("basename");
        let response = ExportResponse {
            data: serde_json::json!([]),
            filename: "../outside/export.json".to_string(),
        };

        let path = write_export(&response, &dir).unwrap();
        assert_eq!(path.parent().unwrap(), dir.as_path());
        assert!(path.ends_with("export.json"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
