//! Glyph dumps grouped by dimension
//!
//! [`DimensionDump`] is a [`GlyphSink`] that writes every glyph it sees to
//! `<root>/<height>x<width>/r<row>c<column>.<ext>` and keeps an index of
//! which glyphs share a bounding-box size. Glyphs of one symbol that land
//! in several size directories are the crop/anti-aliasing variance that
//! identity matching has to absorb.

use crate::{ImageFormat, IoResult, write_image};
use glyphgrid_core::{Glyph, GlyphSink};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Glyph size key, `(height, width)` to match the directory naming.
pub type Dimension = (u32, u32);

/// Writes glyph images into one directory per glyph size.
#[derive(Debug)]
pub struct DimensionDump {
    root: PathBuf,
    format: ImageFormat,
    write_images: bool,
    index: BTreeMap<Dimension, Vec<String>>,
}

impl DimensionDump {
    /// Dump PNG glyph images below `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            format: ImageFormat::Png,
            write_images: true,
            index: BTreeMap::new(),
        }
    }

    /// Only build the dimension index; write nothing to disk.
    pub fn index_only() -> Self {
        Self {
            root: PathBuf::new(),
            format: ImageFormat::Png,
            write_images: false,
            index: BTreeMap::new(),
        }
    }

    /// Set the image format for dumped glyphs.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Directory that receives glyphs of the given size.
    pub fn dimension_dir(&self, dimension: Dimension) -> PathBuf {
        self.root.join(format!("{}x{}", dimension.0, dimension.1))
    }

    /// Glyph names (`r<row>c<column>`) grouped by `(height, width)`.
    pub fn dimension_map(&self) -> &BTreeMap<Dimension, Vec<String>> {
        &self.index
    }

    /// Number of distinct glyph sizes seen.
    pub fn distinct_dimensions(&self) -> usize {
        self.index.len()
    }

    /// Total number of glyphs seen.
    pub fn glyph_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    /// One line per size: `HxW: name name ...`, preceded by a count line.
    pub fn summary(&self) -> String {
        let mut out = format!("{} unique dimensions\n", self.index.len());
        for ((h, w), names) in &self.index {
            out.push_str(&format!("{}x{}: {}\n", h, w, names.join(" ")));
        }
        out
    }

    fn record(&mut self, glyph: &Glyph) -> IoResult<()> {
        let dimension = (glyph.height(), glyph.width());
        let name = format!("r{}c{}", glyph.row(), glyph.column());

        if self.write_images {
            let dir = self.dimension_dir(dimension);
            fs::create_dir_all(&dir)?;
            let path = dir.join(format!("{}.{}", name, self.format.extension()));
            write_image(glyph.image(), &path, self.format)?;
            log::trace!("dumped glyph {} to {}", name, path.display());
        }

        self.index.entry(dimension).or_default().push(name);
        Ok(())
    }
}

impl GlyphSink for DimensionDump {
    fn accept(&mut self, glyph: &Glyph) -> glyphgrid_core::Result<()> {
        self.record(glyph)
            .map_err(|e| glyphgrid_core::Error::Sink(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphgrid_core::{Canvas, Pixel, Region};

    fn glyph(w: u32, h: u32, row: usize, column: usize) -> Glyph {
        let image = Canvas::new_filled(w, h, 3, Pixel::BLACK).unwrap();
        Glyph::new(image, Region::new(0, 0, w, h), row, column)
    }

    #[test]
    fn test_index_only_groups_by_size() {
        let mut dump = DimensionDump::index_only();
        dump.accept(&glyph(3, 5, 0, 0)).unwrap();
        dump.accept(&glyph(4, 5, 0, 1)).unwrap();
        dump.accept(&glyph(3, 5, 1, 0)).unwrap();

        assert_eq!(dump.distinct_dimensions(), 2);
        assert_eq!(dump.glyph_count(), 3);
        assert_eq!(
            dump.dimension_map().get(&(5, 3)),
            Some(&vec!["r0c0".to_string(), "r1c0".to_string()])
        );
        assert!(dump.summary().starts_with("2 unique dimensions\n"));
        assert!(dump.summary().contains("5x4: r0c1\n"));
    }

    #[test]
    fn test_dimension_dir_naming() {
        let dump = DimensionDump::new("/tmp/glyphs");
        assert_eq!(
            dump.dimension_dir((36, 37)),
            PathBuf::from("/tmp/glyphs/36x37")
        );
    }
}
