//! Bundled report handling
//!
//! The report ships inside the binary via `rust-embed`. Opening it writes
//! the file to the platform temp directory and hands the path to the OS
//! default application. Failures are returned as [`QhoError::ReportError`]
//! and shown in the status bar without affecting plotting.

use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;

use qho_core::{QhoError, QhoResult};

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// File name of the bundled report
pub const REPORT_FILE: &str = "oscillator_report.md";

/// Materialize the bundled report and open it with the default application.
///
/// Returns the path the report was written to.
pub fn open_report() -> QhoResult<PathBuf> {
    let report = Assets::get(REPORT_FILE)
        .ok_or_else(|| QhoError::report_error(REPORT_FILE, "report is not bundled"))?;

    let path = std::env::temp_dir().join(REPORT_FILE);
    std::fs::write(&path, report.data.as_ref())
        .map_err(|e| QhoError::report_error(path.display().to_string(), e.to_string()))?;

    open_with_default_app(&path)?;
    Ok(path)
}

/// Launch the platform default application for a file
fn open_with_default_app(path: &Path) -> QhoResult<()> {
    let launch_error =
        |e: std::io::Error| QhoError::report_error(path.display().to_string(), e.to_string());

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()
            .map_err(launch_error)?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(launch_error)?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(launch_error)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_bundled() {
        let report = Assets::get(REPORT_FILE).expect("report asset missing");
        let body = std::str::from_utf8(report.data.as_ref()).unwrap();
        assert!(body.contains("Hermite"));
    }
}
