use super::*;
use crate::foundation::core::{Dimensions, Fps};
use crate::geometry::resolver::{GeometryInput, resolve_geometry};

fn geometry() -> Geometry {
    resolve_geometry(&GeometryInput {
        frame: Dimensions::new(1000.0, 1000.0),
        piece: Dimensions::new(200.0, 200.0),
        piece_scale: 1.0,
        margin_top: 10.0,
    })
    .unwrap()
}

fn span(enter: f64, exit: f64) -> AlignmentSpan {
    AlignmentSpan { enter, exit }
}

fn run(style: MovementStyle, spans: &[AlignmentSpan], duration: f64, seed: u64) -> Vec<Keyframe> {
    let g = geometry();
    let tuning = StyleTuning::default();
    let input = SynthInput {
        geometry: &g,
        spans,
        style,
        duration,
        fps: Fps::new(30, 1).unwrap(),
        tuning: &tuning,
    };
    synthesize(&input, &mut Rng64::new(seed))
}

fn assert_time_ordered(kfs: &[Keyframe], duration: f64) {
    assert_eq!(kfs.first().unwrap().time, 0.0);
    assert!((kfs.last().unwrap().time - duration).abs() < 1e-9);
    for w in kfs.windows(2) {
        assert!(w[0].time < w[1].time, "times not increasing: {w:?}");
    }
}

#[test]
fn every_style_spans_window_inside_bounds() {
    let g = geometry();
    let spans = [span(2.0, 2.5), span(6.0, 6.5)];
    for style in MovementStyle::ALL {
        let kfs = run(style, &spans, 10.0, 5);
        assert_time_ordered(&kfs, 10.0);
        for k in &kfs {
            if k.is_alignment {
                assert_eq!((k.x, k.y, k.rotation), (400.0, 400.0, 0.0));
            } else {
                assert!(g.travel.contains(k.x, k.y, 1e-9), "{style}: {k:?}");
            }
        }
        assert_eq!(kfs.iter().filter(|k| k.is_alignment).count(), 4);
    }
}

#[test]
fn alignment_at_window_edges_replaces_synthetic_keyframes() {
    let kfs = run(MovementStyle::Zigzag, &[span(0.0, 0.5), span(9.5, 10.0)], 10.0, 1);
    assert!(kfs[0].is_alignment);
    assert_eq!(kfs[0].time, 0.0);
    let last = kfs.last().unwrap();
    assert!(last.is_alignment);
    assert_eq!(last.time, 10.0);
    assert_time_ordered(&kfs, 10.0);
}

#[test]
fn short_gaps_get_no_intermediates() {
    // 0.05 s between holds is 1.5 frames at 30 fps: no room for an intermediate.
    let kfs = run(MovementStyle::Chaotic, &[span(1.0, 1.5), span(1.55, 2.05)], 4.0, 2);
    let exit = kfs.iter().position(|k| k.time == 1.5).unwrap();
    assert!(kfs[exit + 1].is_alignment);
    assert_eq!(kfs[exit + 1].time, 1.55);
}

#[test]
fn instant_span_emits_single_keyframe() {
    let kfs = run(MovementStyle::Chaotic, &[span(3.0, 3.0)], 6.0, 3);
    assert_eq!(kfs.iter().filter(|k| k.is_alignment).count(), 1);
    assert_time_ordered(&kfs, 6.0);
}

#[test]
fn rotating_spins_between_holds_and_resets_on_alignment() {
    let kfs = run(MovementStyle::Rotating, &[span(3.0, 3.5), span(7.0, 7.5)], 10.0, 8);
    for w in kfs.windows(2) {
        if w[0].is_alignment && w[1].is_alignment {
            continue;
        }
        assert_ne!(w[0].rotation, w[1].rotation, "flat rotation: {w:?}");
        if !w[1].is_alignment {
            assert!(w[1].rotation > w[0].rotation, "rotation went backwards: {w:?}");
        }
    }
    // Three intermediates in each of the three motion intervals plus two endpoints.
    assert_eq!(kfs.iter().filter(|k| !k.is_alignment).count(), 11);
}

#[test]
fn same_seed_same_keyframes() {
    let spans = [span(2.0, 2.5)];
    assert_eq!(
        run(MovementStyle::Chaotic, &spans, 5.0, 42),
        run(MovementStyle::Chaotic, &spans, 5.0, 42)
    );
}
