//! Small aggregations over table columns.

use ahash::AHashMap;

/// Category frequencies in first-encountered order. Null categories are skipped.
pub fn value_counts<S: AsRef<str>>(values: &[Option<S>]) -> Vec<(String, usize)> {
    let mut index = AHashMap::<&str, usize>::new();
    let mut counts = Vec::<(String, usize)>::new();
    for value in values.iter().flatten() {
        let value = value.as_ref();
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts
}

/// The `n` most frequent categories. Equal counts keep first-encountered order.
pub fn top_n<S: AsRef<str>>(values: &[Option<S>], n: usize) -> Vec<(String, usize)> {
    let mut counts = value_counts(values);
    // stable sort
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Sum `values` per category, in first-encountered category order.
/// Rows with a null category or a null value do not contribute.
pub fn group_sums<S: AsRef<str>>(categories: &[Option<S>], values: &[Option<f64>]) -> Vec<(String, f64)> {
    let mut index = AHashMap::<&str, usize>::new();
    let mut sums = Vec::<(String, f64)>::new();
    for (category, value) in categories.iter().zip(values) {
        let (Some(category), Some(value)) = (category, value) else { continue };
        let category = category.as_ref();
        match index.get(category) {
            Some(&i) => sums[i].1 += value,
            None => {
                index.insert(category, sums.len());
                sums.push((category.to_string(), *value));
            }
        }
    }
    sums
}

/// Minimum and maximum of the finite values, if any.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Five-number summary with Tukey fences, as drawn by a box plot.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value inside the lower fence.
    pub lower_whisker: f64,
    /// Largest value inside the upper fence.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
    pub count: usize,
}

impl BoxStats {
    /// Summarize `values`; `None` when there are no finite values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted = values.into_iter().filter(|v| v.is_finite()).collect::<Vec<_>>();
        if sorted.is_empty() { return None }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        let inside = sorted.iter().copied().filter(|v| (lo_fence..=hi_fence).contains(v));
        let lower_whisker = inside.clone().next().unwrap_or(q1);
        let upper_whisker = inside.last().unwrap_or(q3);
        let outliers = sorted.iter().copied().filter(|v| !(lo_fence..=hi_fence).contains(v)).collect();

        Some(Self { q1, median, q3, lower_whisker, upper_whisker, outliers, count: sorted.len() })
    }

    /// Full drawn range, whiskers and outliers included.
    pub fn span(&self) -> (f64, f64) {
        let lo = self.outliers.iter().copied().fold(self.lower_whisker, f64::min);
        let hi = self.outliers.iter().copied().fold(self.upper_whisker, f64::max);
        (lo, hi)
    }
}

/// Linear-interpolated quantile of sorted data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let (lo, hi) = (pos.floor() as usize, pos.ceil() as usize);
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
