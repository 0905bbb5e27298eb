// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `render_court` across framings, origins and units.

use hoopline_court::{CourtGeometry, League, Orientation, Origin, Units};
use hoopline_render::{CourtDrawing, CourtStyle, Element, render_court};
use kurbo::{Affine, Rect};

const EPS: f64 = 1e-6;

fn draw(g: &CourtGeometry, orientation: Orientation, origin: Origin) -> CourtDrawing {
    render_court(g, orientation, origin, &CourtStyle::default()).unwrap()
}

fn close(a: Rect, b: Rect, tol: f64) -> bool {
    (a.x0 - b.x0).abs() < tol
        && (a.y0 - b.y0).abs() < tol
        && (a.x1 - b.x1).abs() < tol
        && (a.y1 - b.y1).abs() < tol
}

#[test]
fn half_courts_stay_on_their_half() {
    for league in League::ALL {
        let g = CourtGeometry::new(league, Units::Feet);
        let checks: [(Orientation, fn(Rect) -> bool); 4] = [
            (Orientation::HalfLeft, |r| r.x1 <= EPS),
            (Orientation::HalfRight, |r| r.x0 >= -EPS),
            (Orientation::HalfUp, |r| r.y0 >= -EPS),
            (Orientation::HalfDown, |r| r.y1 <= EPS),
        ];
        for (orientation, inside) in checks {
            let drawing = draw(&g, orientation, Origin::Center);
            for p in &drawing.primitives {
                let bbox = p.shape.bounding_box();
                assert!(
                    inside(bbox),
                    "{league} {orientation}: {:?} at {bbox:?}",
                    p.element
                );
            }
        }
    }
}

#[test]
fn half_courts_keep_one_basket() {
    let g = CourtGeometry::default();
    let full = draw(&g, Orientation::H, Origin::Center);
    for orientation in [
        Orientation::HalfLeft,
        Orientation::HalfRight,
        Orientation::HalfUp,
        Orientation::HalfDown,
    ] {
        let half = draw(&g, orientation, Origin::Center);
        for element in [
            Element::Hoop,
            Element::Backboard,
            Element::ThreePointArc,
            Element::OuterPaint,
        ] {
            assert_eq!(
                2 * half.elements(element).count(),
                full.elements(element).count(),
                "{orientation} {element:?}"
            );
        }
        assert_eq!(half.elements(Element::Boundary).count(), 1);
        assert_eq!(half.elements(Element::CenterCircleOuter).count(), 1);
    }
}

#[test]
fn vertical_is_a_quarter_turn_of_horizontal() {
    let turn = Affine::new([0.0, 1.0, -1.0, 0.0, 0.0, 0.0]);
    let g = CourtGeometry::new(League::Wnba, Units::Meters);
    for (h, v) in [
        (Orientation::H, Orientation::V),
        (Orientation::HalfRight, Orientation::HalfUp),
        (Orientation::HalfLeft, Orientation::HalfDown),
    ] {
        let hd = draw(&g, h, Origin::Center);
        let vd = draw(&g, v, Origin::Center);
        assert_eq!(hd.primitives.len(), vd.primitives.len());
        for (a, b) in hd.primitives.iter().zip(&vd.primitives) {
            let turned = a.transformed(turn);
            assert_eq!(turned.element, b.element);
            assert_eq!(turned.style, b.style);
            assert!(
                close(turned.shape.bounding_box(), b.shape.bounding_box(), EPS),
                "{h} -> {v}: {:?}",
                a.element
            );
        }
        assert!(close(turn.transform_rect_bbox(hd.bounds), vd.bounds, EPS));
    }
}

#[test]
fn origins_translate_everything() {
    let g = CourtGeometry::default();
    for orientation in Orientation::ALL {
        let center = draw(&g, orientation, Origin::Center);
        for origin in Origin::ALL {
            let shifted = draw(&g, orientation, origin);
            let offset = origin.center_offset(orientation.frame_size(g.length, g.width));
            assert!(close(shifted.bounds, center.bounds + offset, EPS));
            for (a, b) in center.primitives.iter().zip(&shifted.primitives) {
                assert!(close(a.shape.bounding_box() + offset, b.shape.bounding_box(), EPS));
            }
        }
    }
}

#[test]
fn meters_are_scaled_feet() {
    let ft = CourtGeometry::new(League::Fiba, Units::Feet);
    let m = CourtGeometry::new(League::Fiba, Units::Meters);
    let scale = Affine::scale(0.3048);
    let a = draw(&ft, Orientation::V, Origin::BottomLeft);
    let b = draw(&m, Orientation::V, Origin::BottomLeft);
    assert!(close(scale.transform_rect_bbox(a.bounds), b.bounds, 1e-9));
    for (pa, pb) in a.primitives.iter().zip(&b.primitives) {
        let scaled = pa.transformed(scale);
        assert!(close(
            scaled.shape.bounding_box(),
            pb.shape.bounding_box(),
            1e-6
        ));
        let wa = scaled.style.stroke.as_ref().map(|s| s.width);
        let wb = pb.style.stroke.as_ref().map(|s| s.width);
        assert!((wa.unwrap() - wb.unwrap()).abs() < 1e-12);
    }
}
