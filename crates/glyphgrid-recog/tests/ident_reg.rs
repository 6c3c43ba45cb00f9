//! Glyph identity regression test
//!
//! Renders every built-in shape with the rendering variance seen in real
//! screenshots (anti-aliased halo, one-pixel crops of any edge) and checks that
//! variants of one shape match while different shapes stay apart.

use glyphgrid_core::{Canvas, Pixel};
use glyphgrid_recog::{GlyphIdentity, MatchOptions};
use glyphgrid_test::RegParams;
use glyphgrid_test::paint::{GlyphPainter, Shape, shapes};

fn identity(canvas: &Canvas, options: &MatchOptions) -> GlyphIdentity {
    GlyphIdentity::from_canvas(canvas, Pixel::WHITE, options)
}

fn named_shapes() -> Vec<(&'static str, Shape)> {
    vec![
        ("ring", shapes::ring()),
        ("ring_with_tail", shapes::ring_with_tail()),
        ("cross", shapes::cross()),
        ("bar", shapes::bar()),
        ("tee", shapes::tee()),
    ]
}

fn variants() -> Vec<(&'static str, GlyphPainter)> {
    let halo = Pixel::rgb(170, 170, 190);
    vec![
        ("halo", GlyphPainter::default().with_halo(halo)),
        ("crop right", GlyphPainter::default().with_trim(1, 0)),
        ("crop bottom", GlyphPainter::default().with_trim(0, 1)),
        ("crop both", GlyphPainter::default().with_trim(1, 1)),
        (
            "halo + crop",
            GlyphPainter::default().with_halo(halo).with_trim(1, 0),
        ),
    ]
}

#[test_log::test]
fn ident_tolerance_reg() {
    let mut rp = RegParams::new("ident_tolerance");
    let options = MatchOptions::default();
    let plain = GlyphPainter::default();

    for (name, shape) in named_shapes() {
        let reference = identity(&plain.paint(&shape).expect("paint"), &options);
        for (variant, painter) in variants() {
            let canvas = painter.paint(&shape).expect("paint variant");
            let other = identity(&canvas, &options);
            let d = reference.distance(&other, &options);
            eprintln!(
                "  {} vs {} {:?}: distance {:.4}",
                name,
                variant,
                other.dimensions(),
                d
            );
            rp.check(
                reference.matches(&other, &options),
                &format!("{} matches its {} variant", name, variant),
            );
        }
    }

    assert!(rp.cleanup());
}

/// One-pixel crops of the left, top and every edge.
fn edge_crops(canvas: &Canvas) -> Vec<(&'static str, Canvas)> {
    let (w, h) = canvas.dimensions();
    [
        ("crop left", (1, 0, w - 1, h)),
        ("crop top", (0, 1, w, h - 1)),
        ("crop left + top", (1, 1, w - 1, h - 1)),
        ("crop all edges", (1, 1, w - 2, h - 2)),
    ]
    .into_iter()
    .map(|(name, (x, y, cw, ch))| {
        let cropped = canvas.clip_rectangle(x, y, cw, ch).expect("clip");
        (name, cropped)
    })
    .collect()
}

#[test_log::test]
fn ident_edge_crop_reg() {
    let mut rp = RegParams::new("ident_edge_crop");
    let options = MatchOptions::default();
    let plain = GlyphPainter::default();
    let halo = GlyphPainter::default().with_halo(Pixel::rgb(170, 170, 190));

    for (name, shape) in named_shapes() {
        let canvas = plain.paint(&shape).expect("paint");
        let reference = identity(&canvas, &options);
        let haloed = halo.paint(&shape).expect("paint halo");
        let crops = edge_crops(&canvas).into_iter().chain(edge_crops(&haloed));
        for (variant, cropped) in crops {
            let other = identity(&cropped, &options);
            let d = reference.distance(&other, &options);
            eprintln!(
                "  {} vs {} {:?}: distance {:.4}",
                name,
                variant,
                other.dimensions(),
                d
            );
            rp.check(
                reference.matches(&other, &options),
                &format!("{} matches its {} variant", name, variant),
            );
        }
    }

    assert!(rp.cleanup());
}

#[test_log::test]
fn ident_discrimination_reg() {
    let mut rp = RegParams::new("ident_discrimination");
    let options = MatchOptions::default();
    let named = named_shapes();

    for painter in [
        GlyphPainter::default(),
        GlyphPainter::default().with_halo(Pixel::gray(200)),
    ] {
        let ids: Vec<GlyphIdentity> = named
            .iter()
            .map(|(_, s)| identity(&painter.paint(s).expect("paint"), &options))
            .collect();
        for i in 0..ids.len() {
            for j in i + 1..ids.len() {
                let d = ids[i].distance(&ids[j], &options);
                eprintln!("  {} vs {}: distance {:.4}", named[i].0, named[j].0, d);
                rp.check(
                    !ids[i].matches(&ids[j], &options),
                    &format!("{} differs from {}", named[i].0, named[j].0),
                );
            }
        }
    }

    // O and Q share their box; the tail alone must keep them apart
    let plain = GlyphPainter::default();
    let ring = identity(&plain.paint(&shapes::ring()).expect("paint"), &options);
    let tail = identity(&plain.paint(&shapes::ring_with_tail()).expect("paint"), &options);
    rp.compare_debug(&ring.dimensions(), &tail.dimensions());
    rp.check(
        ring.distance(&tail, &options) > 2.0 * options.max_distance,
        "ring and ring_with_tail are well separated",
    );

    assert!(rp.cleanup());
}

#[test_log::test]
fn ident_threshold_reg() {
    let mut rp = RegParams::new("ident_threshold");
    let ring = GlyphPainter::default().paint(&shapes::ring()).expect("paint");
    let tail = GlyphPainter::default()
        .paint(&shapes::ring_with_tail())
        .expect("paint");

    // The threshold is the tuning knob: loosening it far enough merges O and Q
    let strict = MatchOptions::default();
    let loose = MatchOptions::default().with_max_distance(0.5);
    let a = identity(&ring, &strict);
    let b = identity(&tail, &strict);
    rp.check(!a.matches(&b, &strict), "default threshold separates O and Q");
    rp.check(a.matches(&b, &loose), "loose threshold merges O and Q");

    // Without dilation a one-pixel crop is no longer absorbed
    let exact = MatchOptions::default()
        .with_dilation_radius(0)
        .with_size_tolerance(0);
    let cropped = GlyphPainter::default()
        .with_trim(1, 0)
        .paint(&shapes::ring())
        .expect("paint");
    let d = identity(&ring, &exact).distance(&identity(&cropped, &exact), &exact);
    eprintln!("  exact ring vs cropped: {:.4}", d);
    rp.compare_values(1.0, d as f64, 0.0);

    // Gray fringes can be ignored through the ink threshold instead
    let fringed = GlyphPainter::default()
        .with_halo(Pixel::gray(230))
        .paint(&shapes::ring())
        .expect("paint");
    let thresholded = MatchOptions::default().with_ink_threshold(40);
    let f = identity(&fringed, &thresholded);
    rp.compare_values(
        identity(&ring, &thresholded).ink_count() as f64,
        f.ink_count() as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
