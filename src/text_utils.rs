use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Comparison key: compatibility decomposition, accents dropped, case folded.
pub fn collation_key(text: &str) -> String {
    text.nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style ordering: primary on the folded key, raw text breaks ties.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_in_both_directions() {
        assert!(contains_ignore_case("Amazon S3 Basics", "s3 b"));
        assert!(contains_ignore_case("ec2", "EC2"));
        assert!(!contains_ignore_case("Lambda", "ec2"));
    }

    #[test]
    fn empty_needle_matches() {
        assert!(contains_ignore_case("", ""));
        assert!(contains_ignore_case("anything", ""));
    }

    #[test]
    fn accents_and_case_sort_together() {
        let mut words = vec!["zeta", "Émile", "apple", "eclair", "Banana"];
        words.sort_by(|a, b| compare_text(a, b));
        assert_eq!(words, vec!["apple", "Banana", "eclair", "Émile", "zeta"]);
    }

    #[test]
    fn raw_text_breaks_ties() {
        assert_eq!(compare_text("S3", "s3"), Ordering::Less);
        assert_eq!(compare_text("s3", "s3"), Ordering::Equal);
    }
}
