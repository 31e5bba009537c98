//! Server-rendered preview: write the HTML to a temp file and open it

use std::io::Write;
use std::path::{Path, PathBuf};

use skyadmin_core::prelude::*;

/// Store `html` in a temporary `.html` file that outlives the process
///
/// The file is kept so the browser can still read it after we return.
pub(crate) fn write_preview(html: &str) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("skyadmin-preview-")
        .suffix(".html")
        .tempfile()
        .context("Failed to create preview file")?;
    file.write_all(html.as_bytes())
        .with_context(|| format!("Failed to write {}", file.path().display()))?;
    let (_, path) = file.keep().map_err(|e| Error::Io(e.error))?;
    debug!("Preview written to {}", path.display());
    Ok(path)
}

/// Write the preview and hand it to a browser
pub(crate) fn open_preview(html: &str, browser: &str) -> Result<PathBuf> {
    let path = write_preview(html)?;
    open_in_browser(&path, browser)?;
    Ok(path)
}

/// Open a file in the system browser (cross-platform, fire-and-forget).
///
/// If `browser` is non-empty, uses it as the browser command.
/// Otherwise uses the platform-default opener.
fn open_in_browser(path: &Path, browser: &str) -> std::io::Result<()> {
    use std::process::Command;

    if !browser.is_empty() {
        Command::new(browser).arg(path).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(path).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(path).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_preview_keeps_file() {
        let path = write_preview("<h1>Preview</h1>").unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<h1>Preview</h1>");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_browser_command_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let result = open_in_browser(&temp.path().join("x.html"), "skyadmin-no-such-browser");
        assert!(result.is_err());
    }
}
