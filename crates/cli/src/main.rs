use std::path::{Path, PathBuf};
use std::process;

use regionblur_core::blur::blur_regions;
use regionblur_core::error::BlurError;
use regionblur_core::region::Region;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), BlurError> {
    // Window screenshot: folder names and paths in the "Folder Sync Status"
    // section, one row per synced folder.
    let window_regions = [
        Region::new(100, 440, 225, 470, 15.0),
        Region::new(100, 483, 200, 513, 15.0),
        Region::new(100, 527, 195, 557, 15.0),
    ];
    blur_screenshot("SHOTTR--2025-10-31--13-48-31.png", &window_regions)?;

    // Menu bar screenshot: same rows, shifted layout.
    let menubar_regions = [
        Region::new(48, 408, 225, 438, 15.0),
        Region::new(48, 451, 200, 481, 15.0),
        Region::new(48, 495, 195, 525, 15.0),
    ];
    blur_screenshot("SHOTTR--2025-10-31--13-52-01.png", &menubar_regions)?;

    Ok(())
}

/// Blurs one screenshot, writing the result next to it with a `-blurred`
/// suffix before the extension.
fn blur_screenshot(input: &str, regions: &[Region]) -> Result<(), BlurError> {
    let input = Path::new(input);
    let output = blurred_path(input);
    log::debug!("blurring {} regions in {}", regions.len(), input.display());
    blur_regions(input, &output, regions)?;
    println!("Saved blurred image to {}", output.display());
    Ok(())
}

/// `shot.png` -> `shot-blurred.png`.
fn blurred_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("png");
    input.with_file_name(format!("{stem}-blurred.{ext}"))
}
