use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::page::{Dom, HtmlPage};
use crate::regions;

/// Run all boot checks before binding.
/// Reads the host page, creates the output directory if missing and warns
/// about regions the page does not carry. Returns the page source, or an
/// error when the run cannot go ahead.
pub fn run(config: &Config) -> Result<String, String> {
    info!("Boot check starting...");

    let mut warnings = 0u32;

    // ── 1. Host page ───────────────────────────────────
    let source = fs::read_to_string(&config.page).map_err(|e| {
        error!("  Cannot read host page {}: {}", config.page.display(), e);
        format!("Boot check FAILED: host page {} unreadable", config.page.display())
    })?;

    // ── 2. Output directory ────────────────────────────
    if !config.writes_to_stdout() {
        if let Some(dir) = Path::new(&config.output).parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                match fs::create_dir_all(dir) {
                    Ok(_) => info!("  Created directory: {}", dir.display()),
                    Err(e) => {
                        error!("  FAILED to create directory {}: {}", dir.display(), e);
                        return Err(format!(
                            "Boot check FAILED: output directory {} unavailable",
                            dir.display()
                        ));
                    }
                }
            }
        }
    }

    // ── 3. Placeholder regions ─────────────────────────
    let page = HtmlPage::new(source.as_str());
    for id in missing_regions(&page) {
        warn!("  Missing region #{} (its content will not be bound)", id);
        warnings += 1;
    }

    // ── Summary ────────────────────────────────────────
    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some regions will keep their static markup.",
            warnings
        );
    } else {
        info!("Boot check passed. All regions present.");
    }

    Ok(source)
}

/// Well-known regions the page does not contain.
pub fn missing_regions(page: &HtmlPage) -> Vec<&'static str> {
    regions::ALL.iter().copied().filter(|id| !page.contains(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_regions_listed() {
        let page = HtmlPage::new(r#"<div id="cms-gallery"></div><p id="cms-footer-motto"></p>"#);
        let missing = missing_regions(&page);
        assert_eq!(missing.len(), regions::ALL.len() - 2);
        assert!(!missing.contains(&regions::GALLERY));
        assert!(missing.contains(&regions::MENU_TABS));
    }

    #[test]
    fn test_unreadable_page_fails() {
        let config = Config { page: "/nonexistent/index.html".into(), ..Config::default() };
        assert!(run(&config).is_err());
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, "<html><body></body></html>").unwrap();
        let output = dir.path().join("dist/site/index.html");
        let config = Config {
            page,
            output: output.to_string_lossy().into_owned(),
            ..Config::default()
        };
        assert_eq!(run(&config).unwrap(), "<html><body></body></html>");
        assert!(dir.path().join("dist/site").is_dir());
    }
}
