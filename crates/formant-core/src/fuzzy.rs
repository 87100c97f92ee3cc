//! Partial-ratio string similarity.
//!
//! Scores how well the shorter of two strings occurs inside the longer
//! one, tolerating small edits. The shorter string is slid over every
//! same-length character window of the longer; each window is scored by
//! normalized Levenshtein distance and the best window wins. Scores are
//! integers in [0, 100]. Case folding is the caller's concern.

/// Best windowed similarity between `a` and `b`.
///
/// Symmetric in argument order. Two empty strings score 100; exactly one
/// empty string scores 0.
pub fn partial_ratio(a: &str, b: &str) -> i32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() && b_chars.is_empty() {
        return 100;
    }
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let needle: String = short.iter().collect();
    let mut best = 0;
    for window in long.windows(short.len()) {
        let candidate: String = window.iter().collect();
        let distance = strsim::levenshtein(&needle, &candidate);
        let score = ratio(distance, short.len());
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// Normalized edit distance over a window of `len` characters.
fn ratio(distance: usize, len: usize) -> i32 {
    let kept = len.saturating_sub(distance);
    ((kept as f64 / len as f64) * 100.0).round() as i32
}
