/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// `n == 1` yields `[start]`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Running sum in input order: `out[i] = xs[0] + .. + xs[i]`.
pub fn prefix_sum<I>(xs: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut acc = 0.0;
    xs.into_iter()
        .map(|x| {
            acc += x;
            acc
        })
        .collect()
}

/// Round `raw` up to a 1/2/2.5/5/10 multiple of its decade.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Expand `[lo, hi]` outward to nice tick boundaries and return `(lo, hi, step)`.
///
/// Degenerate ranges are widened so the result always spans a non-zero interval.
pub fn nice_range(lo: f64, hi: f64, target_ticks: usize) -> (f64, f64, f64) {
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if (hi - lo).abs() < f64::EPSILON {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        lo -= pad;
        hi += pad;
    }
    let step = nice_step((hi - lo) / target_ticks.max(1) as f64);
    ((lo / step).floor() * step, (hi / step).ceil() * step, step)
}

/// Undo alpha premultiplication of tightly packed RGBA8 pixels.
pub fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
