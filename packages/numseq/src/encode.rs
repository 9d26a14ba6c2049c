use itertools::Itertools;

use crate::Numeric;

/// How many values, starting at the first value of a new run, are inspected to pick the stride
/// of that run.
pub const STRIDE_WINDOW: usize = 4;

/// Converts a list of numbers into the compact textual sequence form understood by
/// [`SequenceParser::parse()`][crate::SequenceParser::parse].
///
/// The values are grouped into runs of a constant positive stride. A run of one value is emitted
/// as `N`, a run of two values as `A,B` and a longer run as `LOWER-UPPER`, with `/STRIDE`
/// appended if the stride is not 1. The order of the input is preserved and nothing is
/// deduplicated, so parsing the output yields the input again as long as every value is finite.
/// Infinities and `NaN` are written out as `inf` and `NaN`, which the parsers reject.
///
/// An empty input produces an empty string, which is not itself valid parser input.
///
/// # Example
///
/// ```
/// let text = numseq::encode([5_i64, 10, 15, 20, 25, 30, 100, 101, 102, 110]);
/// assert_eq!(text, "5-30/5,100-102,110");
/// ```
pub fn encode<T: Numeric>(values: impl IntoIterator<Item = T>) -> String {
    let values = values.into_iter().collect_vec();

    let mut terms = Vec::new();
    let mut remaining = values.as_slice();

    while let Some((&base, rest)) = remaining.split_first() {
        let stride = choose_stride(remaining);

        let mut last = base;
        let extension = rest
            .iter()
            .take_while(|&&value| match last.checked_add(stride) {
                Some(expected) if expected > last && value == expected => {
                    last = expected;
                    true
                }
                _ => false,
            })
            .count();

        tracing::trace!(%base, %last, %stride, "emitting run");

        match extension {
            0 => terms.push(base.to_string()),
            // "4,5" rather than "4-5".
            1 => {
                terms.push(base.to_string());
                terms.push(last.to_string());
            }
            _ if stride == T::one() => terms.push(format!("{base}-{last}")),
            _ => terms.push(format!("{base}-{last}/{stride}")),
        }

        remaining = rest.get(extension..).unwrap_or_default();
    }

    terms.into_iter().join(",")
}

/// Picks the most frequent positive difference between consecutive values in the window at the
/// start of `values`. A stride of 1 wins ties and is the fallback if there are no positive
/// differences; other ties go to the difference seen first.
fn choose_stride<T: Numeric>(values: &[T]) -> T {
    let window = values.get(..STRIDE_WINDOW).unwrap_or(values);

    let mut counts: Vec<(T, usize)> = Vec::with_capacity(STRIDE_WINDOW);

    for (&previous, &next) in window.iter().tuple_windows() {
        let Some(difference) = next.checked_sub(previous) else {
            continue;
        };

        if difference <= T::zero() {
            continue;
        }

        match counts.iter_mut().find(|(stride, _)| *stride == difference) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => counts.push((difference, 1)),
        }
    }

    let unit_count = counts
        .iter()
        .find(|(stride, _)| *stride == T::one())
        .map_or(0, |(_, count)| *count);

    counts
        .into_iter()
        .fold((T::one(), unit_count), |best, candidate| {
            if candidate.1 > best.1 { candidate } else { best }
        })
        .0
}
