//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use glyphgrid_core::Canvas;
use glyphgrid_io::ImageFormat;
use std::fmt::Debug;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run the checks only (default)
    #[default]
    Compare,
    /// Run the checks and write intermediate canvases for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and
/// every failure recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "segment")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Check a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if condition {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg)
        }
    }

    /// Compare any two values with `PartialEq`, reporting both on mismatch
    pub fn compare_debug<T: PartialEq + Debug>(&mut self, expected: &T, actual: &T) -> bool {
        self.index += 1;
        if expected == actual {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg)
        }
    }

    /// Compare two canvases for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the canvases have the same size and pixels.
    pub fn compare_canvas(&mut self, canvas1: &Canvas, canvas2: &Canvas) -> bool {
        self.index += 1;

        if canvas1.dimensions() != canvas2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: canvas comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                canvas1.dimensions(),
                canvas2.dimensions()
            );
            return self.fail(msg);
        }

        for y in 0..canvas1.height() {
            for x in 0..canvas1.width() {
                if canvas1.get_pixel(x, y) != canvas2.get_pixel(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: canvas comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Write a canvas to regout when in display mode
    ///
    /// The file is named `<test>.<index>.png`. Does nothing in compare
    /// mode.
    pub fn write_canvas(&mut self, canvas: &Canvas) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        fs::create_dir_all(regout_dir())?;
        let path = format!("{}/{}.{:02}.png", regout_dir(), self.test_name, self.index);
        glyphgrid_io::write_image(canvas, &path, ImageFormat::Png).map_err(|e| {
            TestError::ImageWrite {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
