//! Set Comparator: matched/missing keywords and match percentage.
//!
//! All comparisons are case-insensitive. Results are alphabetical.

use std::collections::BTreeSet;

fn lowered_set(keywords: &[String]) -> BTreeSet<String> {
    keywords.iter().map(|k| k.to_lowercase()).collect()
}

/// Keywords present in both lists.
pub fn matched(resume_keywords: &[String], jd_keywords: &[String]) -> Vec<String> {
    let resume = lowered_set(resume_keywords);
    lowered_set(jd_keywords)
        .into_iter()
        .filter(|k| resume.contains(k))
        .collect()
}

/// JD keywords absent from the résumé.
pub fn missing(resume_keywords: &[String], jd_keywords: &[String]) -> Vec<String> {
    let resume = lowered_set(resume_keywords);
    lowered_set(jd_keywords)
        .into_iter()
        .filter(|k| !resume.contains(k))
        .collect()
}

/// `|matched| / |jd| × 100`; 0 when the JD has no keywords.
pub fn match_percentage(resume_keywords: &[String], jd_keywords: &[String]) -> f64 {
    if jd_keywords.is_empty() {
        return 0.0;
    }
    let matched_count = matched(resume_keywords, jd_keywords).len();
    matched_count as f64 / jd_keywords.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_match_percentage_empty_jd_is_zero() {
        assert_eq!(match_percentage(&kws(&["rust", "go"]), &[]), 0.0);
        assert_eq!(match_percentage(&[], &[]), 0.0);
    }

    #[test]
    fn test_identical_lists() {
        let k = kws(&["rust", "docker", "aws"]);
        assert_eq!(matched(&k, &k), kws(&["aws", "docker", "rust"]));
        assert!(missing(&k, &k).is_empty());
        assert!((match_percentage(&k, &k) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_overlap() {
        let resume = kws(&["python", "react", "django"]);
        let jd = kws(&["aws", "django", "python"]);
        assert_eq!(matched(&resume, &jd), kws(&["django", "python"]));
        assert_eq!(missing(&resume, &jd), kws(&["aws"]));
        let pct = match_percentage(&resume, &jd);
        assert!((pct - 200.0 / 3.0).abs() < 1e-9, "pct was {pct}");
    }

    #[test]
    fn test_case_insensitive() {
        let resume = kws(&["Rust"]);
        let jd = kws(&["rust", "KAFKA"]);
        assert_eq!(matched(&resume, &jd), kws(&["rust"]));
        assert_eq!(missing(&resume, &jd), kws(&["kafka"]));
    }

    #[test]
    fn test_resume_only_keywords_are_not_missing() {
        let resume = kws(&["react", "rust"]);
        let jd = kws(&["rust"]);
        assert!(missing(&resume, &jd).is_empty());
    }
}
