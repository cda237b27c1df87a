// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers for linear and log10 axes.

/// Round `raw` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Evenly spaced "nice" ticks inside `[min, max]`, roughly `target` of them.
/// Returns the ticks and the step used.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() {
        return (vec![lo], 1.0);
    }
    let step = nice_step(span / target.max(1) as f64);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let ticks = (first..=last)
        .map(|i| i as f64 * step)
        // snap -0.0 and float noise near zero
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect();
    (ticks, step)
}

/// Major (decade) and minor (2..9 × decade) ticks inside `[min, max]`.
/// Both bounds must be positive.
pub fn log_ticks(min: f64, max: f64) -> (Vec<f64>, Vec<f64>) {
    if min <= 0.0 || max <= min || !max.is_finite() {
        return (Vec::new(), Vec::new());
    }
    let first = min.log10().floor() as i32;
    let last = max.log10().ceil() as i32;
    let mut major = Vec::new();
    let mut minor = Vec::new();
    for e in first..=last {
        let decade = 10f64.powi(e);
        if in_range(decade, min, max) { major.push(decade); }
        for m in 2..=9 {
            let v = decade * m as f64;
            if in_range(v, min, max) { minor.push(v); }
        }
    }
    // short ranges (< one decade) get their minor ticks promoted so the axis is labelled
    if major.len() < 2 {
        major.extend(minor.drain(..));
        major.sort_by(|a, b| a.total_cmp(b));
    }
    (major, minor)
}

fn in_range(v: f64, min: f64, max: f64) -> bool {
    v >= min * (1.0 - 1e-9) && v <= max * (1.0 + 1e-9)
}

/// Compact tick label: trailing zeros trimmed, scientific for very large/small magnitudes.
pub fn format_tick(v: f64, step: f64) -> String {
    if v == 0.0 { return "0".to_string(); }
    let a = v.abs();
    if a >= 1e6 || a < 1e-4 {
        return format!("{:e}", v);
    }
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize + 1
    } else if a < 1.0 {
        4
    } else {
        0
    };
    let s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
