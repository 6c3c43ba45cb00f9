//! glyphgrid-test - Regression test framework for glyphgrid
//!
//! Two halves:
//!
//! - [`RegParams`] tracks a numbered sequence of checks inside one
//!   `*_reg` test and reports every failure at the end.
//! - [`paint`] draws synthetic glyph pages with known geometry, so tests
//!   can state the exact rows and glyph boxes segmentation must find.
//!
//! # Usage
//!
//! ```ignore
//! use glyphgrid_test::{RegParams, paint::{Layout, shapes}};
//!
//! let page = Layout::default().render(&[vec![shapes::ring(), shapes::cross()]])?;
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(2.0, glyph_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"; display
//!   mode also writes intermediate canvases to `tests/regout`

mod error;
pub mod paint;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use glyphgrid_core::Canvas;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // glyphgrid-test is at crates/glyphgrid-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Get a fresh scratch directory below regout for one test.
///
/// Any previous content is removed.
pub fn scratch_dir(name: &str) -> TestResult<String> {
    let dir = format!("{}/{}", regout_dir(), name);
    if std::path::Path::new(&dir).exists() {
        std::fs::remove_dir_all(&dir)?;
    }
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load an image written earlier by a test.
pub fn load_image(path: &str) -> TestResult<Canvas> {
    glyphgrid_io::read_image(path).map_err(|e| TestError::ImageLoad {
        path: path.to_string(),
        message: e.to_string(),
    })
}
