use argminmax::ArgMinMax;

/// (min, max) of a slice, or None when it is empty. NaNs are skipped by argminmax.
#[inline]
pub(crate) fn min_max_f64(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index): (usize, usize) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

#[inline]
pub(crate) fn min_max_i64(vec: &[i64]) -> Option<(i64, i64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index): (usize, usize) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

/// Human-friendly step (1, 2, 5, 10, 20, 50...) that splits `range` into roughly `target_count` parts.
pub(crate) fn nice_step(range: f64, target_count: f64) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let raw_step = range / target_count.max(1.0);
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // 1.0 .. 10.0

    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}
