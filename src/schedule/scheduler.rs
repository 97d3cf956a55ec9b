use crate::config::{MAX_ALIGNMENTS, SchedulePolicy};
use crate::foundation::error::{PlanError, PlanResult};
use crate::foundation::rng::Rng64;

/// Absorbs float noise in the gap comparison so exact-fit requests are accepted.
const FIT_SLACK: f64 = 1e-9;

/// One hold window during which the piece sits at the alignment center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlignmentSpan {
    pub enter: f64,
    pub exit: f64,
}

impl AlignmentSpan {
    pub fn hold(&self) -> f64 {
        self.exit - self.enter
    }

    pub fn midpoint(&self) -> f64 {
        (self.enter + self.exit) / 2.0
    }

    /// Zero-length holds collapse to a single alignment keyframe.
    pub fn is_instant(&self) -> bool {
        self.exit == self.enter
    }
}

/// What was asked for versus what was scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AlignmentReport {
    /// Count requested by the caller, or drawn from the default range.
    pub requested: u32,
    /// Count actually scheduled.
    pub granted: u32,
    /// `true` when `granted < requested`.
    pub downgraded: bool,
    /// `true` when `requested` came from the default range.
    pub randomized: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    pub spans: Vec<AlignmentSpan>,
    pub report: AlignmentReport,
}

/// Whether `n` holds of `hold` seconds fit into `duration` with `min_gap` between them.
pub fn fits(n: u32, duration: f64, hold: f64, min_gap: f64) -> bool {
    match n {
        0 => false,
        1 => hold <= duration,
        _ => {
            let segment = duration / f64::from(n + 1);
            segment - hold + FIT_SLACK >= min_gap
        }
    }
}

/// Largest count in `1..=limit` that fits, or 0 when none does.
pub fn max_feasible(limit: u32, duration: f64, hold: f64, min_gap: f64) -> u32 {
    (1..=limit)
        .rev()
        .find(|&n| fits(n, duration, hold, min_gap))
        .unwrap_or(0)
}

/// Place alignment holds across `[0, duration]`.
///
/// Holds are centered on the interior division points of `requested + 1` equal segments,
/// each shifted by a seeded jitter that never breaks the edge or gap constraints. When the
/// requested count does not fit, the largest count that does is scheduled instead and the
/// reduction is recorded in the returned [`AlignmentReport`].
#[tracing::instrument(skip(policy, rng))]
pub fn schedule_alignments(
    duration: f64,
    requested: Option<u32>,
    hold: f64,
    policy: &SchedulePolicy,
    rng: &mut Rng64,
) -> PlanResult<Schedule> {
    if !(duration.is_finite() && duration > 0.0) {
        return Err(PlanError::config(format!(
            "duration must be > 0, got {duration}"
        )));
    }
    if !(hold.is_finite() && hold >= 0.0) {
        return Err(PlanError::config(format!("hold must be >= 0, got {hold}")));
    }

    let (wanted, randomized) = match requested {
        Some(n) => {
            if n == 0 || n > MAX_ALIGNMENTS {
                return Err(PlanError::config(format!(
                    "num_alignments must be between 1 and {MAX_ALIGNMENTS}, got {n}"
                )));
            }
            (n, false)
        }
        None => {
            let r = policy.default_alignments;
            (rng.range_u32_inclusive(r.min, r.max), true)
        }
    };

    let granted = max_feasible(wanted, duration, hold, policy.min_gap_secs);
    if granted == 0 {
        return Err(PlanError::infeasible(
            format!("hold of {hold}s does not fit in {duration}s"),
            0,
        ));
    }

    let report = AlignmentReport {
        requested: wanted,
        granted,
        downgraded: granted < wanted,
        randomized,
    };
    if report.downgraded {
        tracing::warn!(
            requested = wanted,
            granted,
            duration,
            hold,
            "alignment count reduced to fit timing constraints"
        );
    }

    let segment = duration / f64::from(granted + 1);
    let edge_slack = segment - hold / 2.0;
    let mut jitter_max = (policy.jitter_fraction * segment).min(edge_slack);
    if granted >= 2 {
        jitter_max = jitter_max.min((segment - hold - policy.min_gap_secs) / 2.0);
    }
    let jitter_max = jitter_max.max(0.0);

    let mut spans = Vec::with_capacity(granted as usize);
    for i in 1..=granted {
        let jitter = if jitter_max > 0.0 {
            rng.range_f64(-jitter_max, jitter_max)
        } else {
            0.0
        };
        let center = segment * f64::from(i) + jitter;
        let mut enter = center - hold / 2.0;
        if enter < 0.0 {
            enter = 0.0;
        }
        if enter + hold > duration {
            enter = duration - hold;
        }
        spans.push(AlignmentSpan {
            enter,
            exit: enter + hold,
        });
    }

    tracing::debug!(count = spans.len(), "alignment spans scheduled");
    Ok(Schedule { spans, report })
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
