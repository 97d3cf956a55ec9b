use super::*;

fn kf(time: f64, x: f64) -> Keyframe {
    Keyframe::motion(time, x, 0.0, 0.0)
}

#[test]
fn fewer_than_two_keyframes_is_empty_plan() {
    let err = build_axis_program(&[], Axis::X).unwrap_err();
    assert!(matches!(err, PlanError::EmptyPlan { keyframes: 0 }));
    let err = build_axis_program(&[kf(0.0, 1.0)], Axis::X).unwrap_err();
    assert!(matches!(err, PlanError::EmptyPlan { keyframes: 1 }));
}

#[test]
fn decreasing_time_is_rejected_with_index() {
    let err = build_axis_program(&[kf(0.0, 0.0), kf(2.0, 1.0), kf(1.0, 2.0)], Axis::X)
        .unwrap_err();
    match err {
        PlanError::NonMonotonicTime { index, prev, next } => {
            assert_eq!(index, 2);
            assert_eq!(prev, 2.0);
            assert_eq!(next, 1.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nan_time_is_rejected() {
    let err = build_axis_program(&[kf(0.0, 0.0), kf(f64::NAN, 1.0)], Axis::X).unwrap_err();
    assert!(matches!(err, PlanError::NonMonotonicTime { index: 1, .. }));
}

#[test]
fn segments_interpolate_and_tail_holds() {
    let p = build_axis_program(&[kf(0.0, 0.0), kf(2.0, 10.0), kf(4.0, 10.0)], Axis::X).unwrap();
    assert_eq!(p.segments.len(), 2);
    assert!(matches!(p.segments[0], Segment::Linear { .. }));
    assert!(matches!(p.segments[1], Segment::Constant { value, .. } if value == 10.0));

    assert_eq!(p.eval(0.0), 0.0);
    assert_eq!(p.eval(1.0), 5.0);
    assert_eq!(p.eval(2.0), 10.0);
    assert_eq!(p.eval(3.0), 10.0);
    assert_eq!(p.eval(4.0), 10.0);
    assert_eq!(p.eval(100.0), 10.0);
    assert_eq!(p.last_time(), 4.0);
}

#[test]
fn equal_times_become_constant_segments() {
    let p = build_axis_program(&[kf(0.0, 0.0), kf(1.0, 4.0), kf(1.0, 8.0), kf(2.0, 0.0)], Axis::X)
        .unwrap();
    assert!(matches!(p.segments[1], Segment::Constant { value, .. } if value == 4.0));
    // The zero-length segment is never selected; t=1 falls into the next one.
    assert_eq!(p.eval(1.0), 8.0);
    assert_eq!(p.eval(1.5), 4.0);
}

#[test]
fn reads_the_requested_channel() {
    let frames = [
        Keyframe::motion(0.0, 1.0, 2.0, 0.0),
        Keyframe::motion(1.0, 3.0, 6.0, 90.0),
    ];
    assert_eq!(build_axis_program(&frames, Axis::Y).unwrap().eval(0.5), 4.0);
    assert_eq!(
        build_axis_program(&frames, Axis::Rotation).unwrap().eval(0.5),
        45.0
    );
}
