use super::*;

#[test]
fn defaults_validate() {
    PlanConfig::default().validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = PlanConfig::from_json(
        r#"{ "duration_secs": 12.5, "movement_style": "zigzag", "schedule": { "min_gap_secs": 0.5 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.duration_secs, 12.5);
    assert_eq!(cfg.movement_style, "zigzag");
    assert_eq!(cfg.schedule.min_gap_secs, 0.5);
    assert_eq!(cfg.schedule.default_alignments, AlignmentRange { min: 3, max: 5 });
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert_eq!(cfg.render.syntax, ExprSyntax::Function);
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases: Vec<Box<dyn Fn(&mut PlanConfig)>> = vec![
        Box::new(|c| c.num_alignments = Some(0)),
        Box::new(|c| c.num_alignments = Some(21)),
        Box::new(|c| c.hold_frames = 91),
        Box::new(|c| c.margin_top = 95.0),
        Box::new(|c| c.piece_scale = 2.5),
        Box::new(|c| c.image_coverage = 40.0),
        Box::new(|c| c.duration_secs = 0.0),
        Box::new(|c| c.fps = Fps { num: 240, den: 1 }),
        Box::new(|c| c.fps = Fps { num: 30, den: 0 }),
        Box::new(|c| c.schedule.min_gap_secs = -1.0),
        Box::new(|c| c.schedule.default_alignments = AlignmentRange { min: 5, max: 3 }),
        Box::new(|c| c.style.rotation_step_min_deg = 0.0),
        Box::new(|c| c.style.zigzag_inset = 0.5),
    ];
    for (i, mutate) in cases.iter().enumerate() {
        let mut cfg = PlanConfig::default();
        mutate(&mut cfg);
        let err = cfg.validate().unwrap_err();
        assert!(
            matches!(err, PlanError::InvalidConfig(_)),
            "case {i}: unexpected error {err:?}"
        );
    }
}

#[test]
fn request_converts_hold_frames_to_seconds() {
    let cfg = PlanConfig {
        hold_frames: 45,
        fps: Fps { num: 30, den: 1 },
        ..PlanConfig::default()
    };
    let req = cfg.to_request().unwrap();
    assert!((req.hold_secs - 1.5).abs() < 1e-12);
    assert_eq!(req.movement_style, cfg.movement_style);
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = PlanConfig {
        seed: Some(42),
        num_alignments: Some(4),
        image: Some(Dimensions::new(800.0, 600.0)),
        ..PlanConfig::default()
    };
    let s = cfg.to_json_pretty().unwrap();
    assert_eq!(PlanConfig::from_json(&s).unwrap(), cfg);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = PlanConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PlanError::Serde(_)));
}
