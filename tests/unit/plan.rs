use super::*;
use crate::config::PlanConfig;
use crate::foundation::error::PlanError;

fn request(style: &str) -> PlanRequest {
    PlanConfig {
        movement_style: style.to_string(),
        num_alignments: Some(3),
        ..PlanConfig::default()
    }
    .to_request()
    .unwrap()
}

#[test]
fn plan_carries_metadata() {
    let out = plan_motion(&request("zigzag"), &mut Rng64::new(1)).unwrap();
    let plan = &out.plan;
    assert_eq!(plan.style(), MovementStyle::Zigzag);
    assert_eq!(plan.duration(), 10.0);
    assert_eq!(plan.fps(), Fps::default());
    assert_eq!(plan.frame(), Dimensions::new(1080.0, 1920.0));
    assert_eq!(plan.piece(), Dimensions::new(200.0, 200.0));
    assert_eq!(plan.center(), Point::new(440.0, 860.0));
    assert_eq!(plan.travel().y_min, 192.0);
    assert_eq!(plan.spans().len(), 3);
    assert_eq!(out.report, plan.report());
    assert_eq!(out.report.granted, 3);
    assert!(!out.report.downgraded);
}

#[test]
fn every_span_is_a_pair_of_center_keyframes() {
    let out = plan_motion(&request("rotating"), &mut Rng64::new(4)).unwrap();
    let plan = &out.plan;
    let aligned: Vec<_> = plan.keyframes().iter().filter(|k| k.is_alignment).collect();
    assert_eq!(aligned.len(), plan.spans().len() * 2);
    for k in aligned {
        assert_eq!((k.x, k.y, k.rotation), (440.0, 860.0, 0.0));
    }
}

#[test]
fn fingerprint_tracks_seed() {
    let req = request("chaotic");
    let a = plan_motion(&req, &mut Rng64::new(7)).unwrap().plan;
    let b = plan_motion(&req, &mut Rng64::new(7)).unwrap().plan;
    let c = plan_motion(&req, &mut Rng64::new(8)).unwrap().plan;
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a, b);
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn unknown_style_fails_before_scheduling() {
    let err = plan_motion(&request("spiral"), &mut Rng64::new(1)).unwrap_err();
    assert!(matches!(err, PlanError::StyleResolution(_)));
}

#[test]
fn invalid_policy_is_rejected() {
    let mut req = request("chaotic");
    req.schedule.min_gap_secs = 0.0;
    let err = plan_motion(&req, &mut Rng64::new(1)).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfig(_)));
}

#[test]
fn oversized_piece_is_invalid_geometry() {
    let mut req = request("chaotic");
    req.piece = Dimensions::new(2000.0, 200.0);
    let err = plan_motion(&req, &mut Rng64::new(1)).unwrap_err();
    assert!(matches!(err, PlanError::InvalidGeometry(_)));
}

#[test]
fn serializes_to_json() {
    let out = plan_motion(&request("zigzag"), &mut Rng64::new(2)).unwrap();
    let v: serde_json::Value = serde_json::to_value(&out).unwrap();
    assert_eq!(v["plan"]["style"], "zigzag");
    assert_eq!(v["report"]["granted"], 3);
    let n = v["plan"]["keyframes"].as_array().unwrap().len();
    assert_eq!(n, out.plan.keyframes().len());
}
