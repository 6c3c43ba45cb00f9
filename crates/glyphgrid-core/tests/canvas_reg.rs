//! Canvas regression test
//!
//! Exercises clipping, trimming and color isolation on synthetic glyph
//! pages whose geometry is known in advance.
//!
//! Run with:
//! ```
//! cargo test -p glyphgrid-core --test canvas_reg
//! ```

use glyphgrid_core::{Canvas, Pixel, Region};
use glyphgrid_test::RegParams;
use glyphgrid_test::paint::{GlyphPainter, Layout, shapes};

#[test]
fn canvas_reg() {
    let mut rp = RegParams::new("canvas");

    let painter = GlyphPainter::default();
    let page = Layout::default()
        .render_shapes(&painter, &[vec![shapes::ring(), shapes::cross(), shapes::bar()]])
        .expect("render page");
    let canvas = &page.canvas;
    rp.write_canvas(canvas).expect("display output");

    // Test 1: content bounds cover exactly the laid-out glyphs
    let row = &page.glyphs[0];
    let first = row[0];
    let last = row[row.len() - 1];
    let expected = Region::new(first.x, first.y, last.right() - first.x, first.h);
    rp.compare_debug(&Some(expected), &canvas.content_bounds(Pixel::WHITE));

    // Test 2-4: clipping each glyph box and trimming it is a no-op
    for region in row {
        let clipped = canvas.clip_region(region).expect("clip");
        let (trimmed, bounds) = clipped
            .trim_to_content(Pixel::WHITE)
            .expect("trim")
            .expect("glyph has ink");
        rp.compare_debug(&Region::new(0, 0, region.w, region.h), &bounds);
        rp.compare_canvas(&clipped, &trimmed);
    }

    // Test 5: padding is trimmed away again
    let padded = canvas
        .clip_rectangle(first.x - 2, first.y - 2, first.w + 4, first.h + 4)
        .expect("clip padded");
    let (trimmed, bounds) = padded
        .trim_to_content(Pixel::WHITE)
        .expect("trim")
        .expect("has ink");
    rp.compare_debug(&Region::new(2, 2, first.w, first.h), &bounds);
    rp.compare_canvas(&canvas.clip_region(&first).expect("clip"), &trimmed);

    // Test 6: a blank canvas has no content
    let blank = Canvas::new_filled(8, 8, 3, Pixel::WHITE).expect("blank");
    rp.check(
        blank.trim_to_content(Pixel::WHITE).expect("trim").is_none(),
        "blank canvas trims to nothing",
    );

    assert!(rp.cleanup());
}

#[test]
fn canvas_isolate_reg() {
    let mut rp = RegParams::new("canvas_isolate");

    let halo = Pixel::rgb(160, 160, 200);
    let plain = GlyphPainter::default().paint(&shapes::ring()).expect("paint");
    let fringed = GlyphPainter::default()
        .with_halo(halo)
        .paint(&shapes::ring())
        .expect("paint");
    rp.write_canvas(&fringed).expect("display output");

    // Halo pixels count as foreground until isolated
    let ink = plain.count_foreground(Pixel::WHITE);
    rp.check(
        fringed.count_foreground(Pixel::WHITE) > ink,
        "halo adds foreground pixels",
    );

    let isolated = fringed.isolate_color(Pixel::BLACK, Pixel::WHITE);
    rp.compare_values(ink as f64, isolated.count_foreground(Pixel::WHITE) as f64, 0.0);

    // After isolation the halo ring is blank and trims back to the plain glyph
    let (trimmed, bounds) = isolated
        .trim_to_content(Pixel::WHITE)
        .expect("trim")
        .expect("has ink");
    rp.compare_debug(&Region::new(1, 1, plain.width(), plain.height()), &bounds);
    rp.compare_canvas(&plain, &trimmed);

    assert!(rp.cleanup());
}
