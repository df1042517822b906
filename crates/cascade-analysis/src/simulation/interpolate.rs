//! Linear blend between two snapshots for display animation.

use std::collections::BTreeMap;

use cascade_core::{AssessmentSnapshot, SkillId};

/// `a + (b - a) * t` over the union of assessed keys, missing keys as 0.
///
/// `t` is clamped to `[0, 1]`. The fractional result is for display only and
/// is not a valid assessment snapshot.
pub fn interpolate_assessments(
    a: &AssessmentSnapshot,
    b: &AssessmentSnapshot,
    t: f64,
) -> BTreeMap<SkillId, f64> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let mut blended: BTreeMap<SkillId, f64> = BTreeMap::new();
    for (id, _) in a.iter().chain(b.iter()) {
        if blended.contains_key(id) {
            continue;
        }
        let from = a.level(id.as_str()).map_or(0.0, |l| l.as_f64());
        let to = b.level(id.as_str()).map_or(0.0, |l| l.as_f64());
        blended.insert(id.clone(), from + (to - from) * t);
    }
    blended
}
