// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exporting courts with overlays drawn on top.

use hoopline_court::{CourtGeometry, CourtZones, Orientation, Origin, Side, Zone};
use hoopline_overlay::{HeatmapOptions, LineOptions, LineStyle, build_heatmap, build_line};
use hoopline_render::{Canvas, CourtStyle, render_court, zone_primitive};
use hoopline_svg::SvgCanvas;
use kurbo::Point;
use peniko::Color;

#[test]
fn heatmap_cells_come_before_court_lines() {
    let g = CourtGeometry::default();
    let shots = [Point::new(-40.0, 0.0), Point::new(-25.0, 10.0)];
    let heatmap = build_heatmap(
        &shots,
        &g,
        Orientation::HalfLeft,
        Origin::Center,
        &HeatmapOptions::default().with_bins(4, 4),
    )
    .unwrap();
    let court = render_court(&g, Orientation::HalfLeft, Origin::Center, &CourtStyle::default())
        .unwrap();

    let mut canvas = SvgCanvas::default();
    canvas.set_view(court.bounds);
    heatmap.draw(&mut canvas);
    canvas.draw_all(&court.primitives);
    assert_eq!(
        canvas.primitives().len(),
        16 + court.primitives.len()
    );

    let svg = canvas.to_svg(400, 400);
    let first_cell = svg.find("<rect ").unwrap();
    let first_line = svg.find("<line ").unwrap();
    assert!(first_cell < first_line);
    assert_eq!(canvas.view(), Some(court.bounds));
}

#[test]
fn comet_lines_export_tapering_segments() {
    let options = LineOptions::default()
        .with_style(LineStyle::Comet)
        .with_segments(4)
        .with_width_start(0.0)
        .with_width(2.0);
    let pass = build_line(&[Point::new(-10.0, 0.0), Point::new(10.0, 0.0)], &options).unwrap();
    let mut canvas = SvgCanvas::default();
    canvas.draw(&pass);
    let svg = canvas.to_svg(100, 100);
    for width in ["0", "0.667", "1.333", "2"] {
        assert!(
            svg.contains(&format!("stroke-width=\"{width}\"")),
            "missing width {width} in {svg}"
        );
    }
    assert_eq!(svg.matches("<line ").count(), 4);
}

#[test]
fn shaded_paint_exports_as_a_closed_path() {
    let g = CourtGeometry::default();
    let zones = CourtZones::new(&g, Orientation::H, Origin::Center);
    let mut canvas = SvgCanvas::default();
    canvas.draw(&zone_primitive(
        &zones,
        Zone::Paint,
        Side::Left,
        Color::from_rgba8(255, 0, 0, 255),
        0.0,
    ));
    let svg = canvas.to_svg(400, 200);
    let path = svg.find("<path d=\"M-47 ").unwrap();
    let close = svg[path..].find("Z\" fill=\"#ff0000\" stroke=\"none\"/>");
    assert!(close.is_some(), "{svg}");
}
