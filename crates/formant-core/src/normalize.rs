//! Cleanup of raw DOM text into a usable field label.

/// Reduce surrounding-text noise to a short label candidate.
///
/// Strips required-field markers (`*`, `:`), splits the text into lines,
/// keeps the shortest non-empty line (first on ties), and collapses its
/// internal whitespace. Returns an empty string when nothing survives;
/// length acceptance is the caller's decision.
pub fn clean_field_label(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| *c != '*' && *c != ':').collect();

    let mut shortest: Option<&str> = None;
    for line in stripped.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let keep = match shortest {
            Some(current) => line.chars().count() < current.chars().count(),
            None => true,
        };
        if keep {
            shortest = Some(line);
        }
    }

    shortest
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
