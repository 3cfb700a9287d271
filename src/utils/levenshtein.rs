//! Edit distance between navigation strings.

/// Case-insensitive Levenshtein distance between two strings.
///
/// Counts single-character insertions, deletions and substitutions over
/// Unicode scalar values. Transpositions cost two edits.
///
/// # Examples
///
/// ```
/// use site_router::utils::levenshtein::distance;
///
/// assert_eq!(distance("/profile/spacez", "/profile/spacex"), 1);
/// assert_eq!(distance("SRD", "srd"), 0);
/// assert_eq!(distance("kitten", "sitting"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
