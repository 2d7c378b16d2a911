use std::cmp;

/// Levenshtein edit distance over chars, two rolling rows.
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let sub_cost = usize::from(ac != bc);
            curr[j + 1] = cmp::min(
                cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + sub_cost,
            );
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Scores `needle` against `hay`, both already lowercased.
/// Every needle token is matched against its best hay token; a hay token that
/// starts with the needle token counts as a full hit so partial typing ranks well.
pub fn score(needle: &str, hay: &str) -> f64 {
    let hay_tokens: Vec<&str> = hay.split_whitespace().collect();
    if hay_tokens.is_empty() {
        return 0.0;
    }

    let mut tokens = 0;
    let mut total = 0.0;
    for token in needle.split_whitespace() {
        tokens += 1;
        total += hay_tokens
            .iter()
            .map(|hay_token| token_score(token, hay_token))
            .fold(0.0, f64::max);
    }

    if tokens == 0 {
        0.0
    } else {
        total / tokens as f64
    }
}

fn token_score(needle: &str, hay: &str) -> f64 {
    if hay.starts_with(needle) {
        return 1.0;
    }
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    1.0 - (distance(needle, hay) as f64 / longest as f64)
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(distance("", "abc"), 3);
}

#[test]
fn fuzzy_substitution() {
    assert_eq!(distance("hall", "hill"), 1);
}

#[test]
fn fuzzy_unicode_distinct() {
    assert_eq!(distance("café", "cafe"), 1);
}

#[test]
fn score_prefix_is_full_hit() {
    assert_eq!(score("libr", "university library"), 1.0);
}

#[test]
fn score_empty_needle() {
    assert_eq!(score("", "daniel hall"), 0.0);
}
