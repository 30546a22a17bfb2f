use crate::charts::HistogramBin;

/// Number of points at which the density curve is evaluated.
pub const DENSITY_POINTS: usize = 200;

/// Splits `values` into `bin_count` equal-width bins spanning their range.
///
/// The last bin is closed on the right so the maximum is counted. A column
/// with a single distinct value gets a unit-wide range centred on it.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = value_range(values) else {
        return Vec::new();
    };

    if bin_count == 0 {
        return Vec::new();
    }

    let (low, high) = if max > min { (min, max) } else { (min - 0.5, max + 0.5) };
    let width = (high - low) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];

    for value in values {
        let index = (((value - low) / width).floor() as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    counts.into_iter()
        .enumerate()
        .map(|(index, count)| HistogramBin {
            start: low + width * index as f64,
            end: if index + 1 == bin_count { high } else { low + width * (index + 1) as f64 },
            count
        })
        .collect()
}

/// Gaussian kernel density estimate scaled to histogram counts.
///
/// Uses Scott's rule for the bandwidth. Returns an empty curve when the
/// values have no spread, as no meaningful bandwidth exists.
pub fn density_curve(values: &[f64], bin_width: f64) -> Vec<(f64, f64)> {
    let Some((min, max)) = value_range(values) else {
        return Vec::new();
    };

    let Some(bandwidth) = scott_bandwidth(values) else {
        return Vec::new();
    };

    let count = values.len() as f64;
    let normaliser = count * bandwidth * (2.0 * std::f64::consts::PI).sqrt();
    let step = (max - min) / (DENSITY_POINTS - 1) as f64;

    (0..DENSITY_POINTS)
        .map(|index| {
            let x = min + step * index as f64;
            let density: f64 = values.iter()
                .map(|value| {
                    let z = (x - value) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>() / normaliser;

            (x, density * count * bin_width)
        })
        .collect()
}

/// `std * n^(-1/5)` with the sample standard deviation.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let deviation = sample_std_dev(values)?;

    if deviation <= 0.0 {
        return None;
    }

    Some(deviation * (values.len() as f64).powf(-0.2))
}

pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / (count - 1.0);

    Some(variance.sqrt())
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;

    Some(values.iter().fold((first, first), |(min, max), value| (min.min(*value), max.max(*value))))
}
