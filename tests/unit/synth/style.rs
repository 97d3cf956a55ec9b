use super::*;

fn bounds() -> TravelBounds {
    TravelBounds {
        x_min: 0.0,
        x_max: 800.0,
        y_min: 100.0,
        y_max: 1700.0,
    }
}

#[test]
fn parses_canonical_names_case_insensitively() {
    assert_eq!(
        "Chaotic".parse::<StyleRequest>().unwrap(),
        StyleRequest::Fixed(MovementStyle::Chaotic)
    );
    assert_eq!(
        " zigzag ".parse::<StyleRequest>().unwrap(),
        StyleRequest::Fixed(MovementStyle::Zigzag)
    );
    assert_eq!("random".parse::<StyleRequest>().unwrap(), StyleRequest::Random);
}

#[test]
fn unknown_style_is_resolution_error() {
    let err = "spiral".parse::<StyleRequest>().unwrap_err();
    assert!(matches!(err, PlanError::StyleResolution(_)));
    let err = resolve_style("", &mut Rng64::new(0)).unwrap_err();
    assert!(matches!(err, PlanError::StyleResolution(_)));
}

#[test]
fn random_resolves_to_every_style_eventually() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..64 {
        seen.insert(resolve_style("random", &mut Rng64::new(seed)).unwrap());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn chaotic_sweeps_down_then_resets() {
    let tuning = StyleTuning::default();
    let mut rng = Rng64::new(4);
    let mut shape = ShapeState::new(MovementStyle::Chaotic, bounds(), &tuning, &mut rng);
    let ys: Vec<f64> = (0..5).map(|_| shape.next_point(&mut rng).1).collect();
    assert_eq!(ys[0], 100.0);
    assert!(ys[1] > ys[0] && ys[2] > ys[1]);
    assert_eq!(ys[3], 1700.0);
    assert_eq!(ys[4], 100.0);
}

#[test]
fn rotating_points_lie_on_inscribed_ellipse() {
    let tuning = StyleTuning::default();
    let mut rng = Rng64::new(9);
    let b = bounds();
    let mut shape = ShapeState::new(MovementStyle::Rotating, b, &tuning, &mut rng);
    let (cx, cy) = (400.0, 900.0);
    let (rx, ry) = (400.0, 800.0);
    for _ in 0..16 {
        let (x, y) = shape.next_point(&mut rng);
        assert!(b.contains(x, y, 1e-9));
        let r = ((x - cx) / rx).powi(2) + ((y - cy) / ry).powi(2);
        assert!((r - 1.0).abs() < 1e-9, "off ellipse: {r}");
    }
}

#[test]
fn rotating_rotation_advances_within_step_range() {
    let tuning = StyleTuning::default();
    let mut rng = Rng64::new(2);
    let shape = ShapeState::new(MovementStyle::Rotating, bounds(), &tuning, &mut rng);
    let mut r = 0.0;
    for _ in 0..10 {
        let next = shape.next_rotation(r, &mut rng);
        assert!(next - r >= 90.0 && next - r < 180.0);
        r = next;
    }
}

#[test]
fn zigzag_cycles_inset_corners() {
    let tuning = StyleTuning::default();
    let mut rng = Rng64::new(0);
    let mut shape = ShapeState::new(MovementStyle::Zigzag, bounds(), &tuning, &mut rng);
    let pts: Vec<(f64, f64)> = (0..5).map(|_| shape.next_point(&mut rng)).collect();
    assert_eq!(pts[0], (80.0, 260.0));
    assert_eq!(pts[1], (720.0, 1540.0));
    assert_eq!(pts[2], (720.0, 260.0));
    assert_eq!(pts[3], (80.0, 1540.0));
    assert_eq!(pts[4], pts[0]);
    assert_eq!(shape.next_rotation(0.0, &mut rng), 0.0);
}
