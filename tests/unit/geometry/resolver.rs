use super::*;

fn input(frame: (f64, f64), piece: (f64, f64), scale: f64, margin_top: f64) -> GeometryInput {
    GeometryInput {
        frame: Dimensions::new(frame.0, frame.1),
        piece: Dimensions::new(piece.0, piece.1),
        piece_scale: scale,
        margin_top,
    }
}

#[test]
fn travel_bounds_keep_piece_inside_frame() {
    let g = resolve_geometry(&input((1080.0, 1920.0), (200.0, 200.0), 1.0, 10.0)).unwrap();
    assert_eq!(g.travel.x_min, 0.0);
    assert_eq!(g.travel.x_max, 880.0);
    assert_eq!(g.travel.y_min, 192.0);
    assert_eq!(g.travel.y_max, 1720.0);
    assert_eq!(g.center, Point::new(440.0, 860.0));
}

#[test]
fn piece_scale_applies_before_bounds() {
    let g = resolve_geometry(&input((1000.0, 1000.0), (200.0, 100.0), 2.0, 0.0)).unwrap();
    assert_eq!(g.piece, Dimensions::new(400.0, 200.0));
    assert_eq!(g.travel.x_max, 600.0);
    assert_eq!(g.travel.y_max, 800.0);
    assert_eq!(g.center, Point::new(300.0, 400.0));
}

#[test]
fn oversize_piece_is_invalid() {
    let err = resolve_geometry(&input((300.0, 300.0), (200.0, 200.0), 2.0, 0.0)).unwrap_err();
    assert!(matches!(err, PlanError::InvalidGeometry(_)));
}

#[test]
fn large_top_margin_leaves_no_travel() {
    let err = resolve_geometry(&input((1000.0, 1000.0), (200.0, 200.0), 1.0, 90.0)).unwrap_err();
    assert!(matches!(err, PlanError::InvalidGeometry(_)));
}

#[test]
fn zero_dimensions_are_invalid() {
    assert!(resolve_geometry(&input((0.0, 100.0), (10.0, 10.0), 1.0, 0.0)).is_err());
    assert!(resolve_geometry(&input((100.0, 100.0), (10.0, -1.0), 1.0, 0.0)).is_err());
}

#[test]
fn inset_shrinks_symmetrically() {
    let b = TravelBounds {
        x_min: 0.0,
        x_max: 100.0,
        y_min: 50.0,
        y_max: 250.0,
    };
    let i = b.inset(0.1);
    assert_eq!(i.x_min, 10.0);
    assert_eq!(i.x_max, 90.0);
    assert_eq!(i.y_min, 70.0);
    assert_eq!(i.y_max, 230.0);
    assert!(b.contains(100.0 + 1e-9, 50.0, 1e-6));
    assert!(!b.contains(101.0, 50.0, 1e-6));
}

#[test]
fn source_image_fits_coverage_and_centers() {
    let frame = Dimensions::new(1000.0, 2000.0);
    let image = Dimensions::new(400.0, 400.0);
    let r = place_source_image(frame, image, 80.0).unwrap();
    assert_eq!(r.width(), 800.0);
    assert_eq!(r.height(), 800.0);
    assert_eq!(r.x0, 100.0);
    assert_eq!(r.y0, 600.0);
}

#[test]
fn source_image_rejects_bad_coverage() {
    let frame = Dimensions::new(1000.0, 1000.0);
    let image = Dimensions::new(400.0, 400.0);
    assert!(place_source_image(frame, image, 0.0).is_err());
    assert!(place_source_image(frame, image, 120.0).is_err());
}
