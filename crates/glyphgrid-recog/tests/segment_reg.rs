//! Segmentation regression test
//!
//! Lays out synthetic glyph pages with known separators and checks that
//! the row and glyph bands found match the construction exactly.

use glyphgrid_core::{Band, Canvas, Pixel, Region};
use glyphgrid_recog::SegmentOptions;
use glyphgrid_recog::segment::{find_glyphs, find_rows, segment};
use glyphgrid_test::RegParams;
use glyphgrid_test::paint::{GlyphPainter, Layout, shapes};

fn regions(glyphs: &[Vec<glyphgrid_core::Glyph>]) -> Vec<Vec<Region>> {
    glyphs
        .iter()
        .map(|row| row.iter().map(|g| g.region()).collect())
        .collect()
}

#[test_log::test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");
    let options = SegmentOptions::default();

    // --- Test 1: exact rows and glyph boxes on a plain page ---
    let page = Layout::default()
        .render_shapes(
            &GlyphPainter::default(),
            &[
                vec![shapes::ring(), shapes::cross(), shapes::bar(), shapes::tee()],
                vec![shapes::bar(), shapes::ring()],
                vec![shapes::cross()],
            ],
        )
        .expect("render page");
    rp.write_canvas(&page.canvas).expect("display output");

    let rows = find_rows(&page.canvas, &options);
    eprintln!("  rows: {:?}", rows);
    rp.compare_debug(&page.row_bands(), &rows);

    for (band, expected) in rows.iter().zip(&page.glyphs) {
        let columns = find_glyphs(&page.canvas, *band, &options);
        let expected_columns: Vec<Band> = expected.iter().map(|r| Band::new(r.x, r.right())).collect();
        rp.compare_debug(&expected_columns, &columns);
    }

    let glyphs = segment(&page.canvas, &options).expect("segment");
    rp.compare_debug(&page.glyphs, &regions(&glyphs));
    rp.compare_values(7.0, glyphs.iter().map(Vec::len).sum::<usize>() as f64, 0.0);

    // --- Test 2: trim minimality ---
    let mut tight = true;
    for g in glyphs.iter().flatten() {
        let img = g.image();
        let (w, h) = img.dimensions();
        tight &= !img.is_row_blank(0, Pixel::WHITE)
            && !img.is_row_blank(h - 1, Pixel::WHITE)
            && !img.is_column_blank(0, Pixel::WHITE)
            && !img.is_column_blank(w - 1, Pixel::WHITE);
    }
    rp.check(tight, "every glyph has ink on all four edges");

    // --- Test 3: halo glyphs grow their boxes by the halo ---
    let halo_page = Layout::default()
        .render_shapes(
            &GlyphPainter::default().with_halo(Pixel::gray(190)),
            &[vec![shapes::ring(), shapes::tee()]],
        )
        .expect("render halo page");
    let glyphs = segment(&halo_page.canvas, &options).expect("segment halo");
    rp.compare_debug(&halo_page.glyphs, &regions(&glyphs));
    rp.compare_debug(&(23, 23), &glyphs[0][0].dimensions());

    assert!(rp.cleanup());
}

#[test_log::test]
fn segment_gap_reg() {
    let mut rp = RegParams::new("segment_gap");

    // An "i" (dot, 2 blank rows, stem) next to a plain bar, then a second
    // text row 6 blank rows further down.
    let mut c = Canvas::new_filled(20, 30, 3, Pixel::WHITE).expect("canvas").to_mut();
    c.fill_rect(2, 2, 2, 2, Pixel::BLACK); // dot
    c.fill_rect(2, 6, 2, 8, Pixel::BLACK); // stem
    c.fill_rect(7, 6, 3, 8, Pixel::BLACK); // bar
    c.fill_rect(2, 20, 5, 5, Pixel::BLACK); // second row
    let canvas: Canvas = c.into();

    // --- Test 1: minimum height 1 splits at the dot gap ---
    let loose = SegmentOptions::default();
    rp.compare_debug(
        &vec![Band::new(2, 4), Band::new(6, 14), Band::new(20, 25)],
        &find_rows(&canvas, &loose),
    );

    // --- Test 2: a gap inside a band shorter than the minimum does not split ---
    let strict = SegmentOptions::default().with_min_row_height(10);
    let rows = find_rows(&canvas, &strict);
    // The last band never reaches the minimum and closes at the canvas end
    rp.compare_debug(&vec![Band::new(2, 14), Band::new(20, 30)], &rows);

    let glyphs = segment(&canvas, &strict).expect("segment");
    rp.compare_debug(
        &vec![
            vec![Region::new(2, 2, 2, 12), Region::new(7, 6, 3, 8)],
            vec![Region::new(2, 20, 5, 5)],
        ],
        &regions(&glyphs),
    );

    // --- Test 3: minimum glyph width merges thin strokes ---
    let mut c = Canvas::new_filled(12, 5, 3, Pixel::WHITE).expect("canvas").to_mut();
    c.fill_rect(1, 0, 1, 5, Pixel::BLACK);
    c.fill_rect(3, 0, 1, 5, Pixel::BLACK);
    c.fill_rect(8, 0, 3, 5, Pixel::BLACK);
    let canvas: Canvas = c.into();
    let row = Band::new(0, 5);
    rp.compare_debug(
        &vec![Band::new(1, 2), Band::new(3, 4), Band::new(8, 11)],
        &find_glyphs(&canvas, row, &SegmentOptions::default()),
    );
    rp.compare_debug(
        &vec![Band::new(1, 4), Band::new(8, 11)],
        &find_glyphs(&canvas, row, &SegmentOptions::default().with_min_glyph_width(3)),
    );

    assert!(rp.cleanup());
}
