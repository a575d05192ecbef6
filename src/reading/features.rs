use crate::lexicon::{self, Category};
use crate::models::FeatureFlags;
use crate::reading::config::ReadingConfig;

/// Trim each line, drop empty ones, and join the rest with `\n`.
/// Lines beyond `max_lines` are ignored.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S], max_lines: usize) -> String {
    lines
        .iter()
        .take(max_lines)
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Length in Unicode scalar values, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub fn extract_features(text: &str, config: &ReadingConfig) -> FeatureFlags {
    let len = char_len(text);
    let hit = |category: Category| lexicon::vocabulary(category).matches(text);

    FeatureFlags {
        hedge: hit(Category::Hedge),
        assertive: hit(Category::Assertive),
        neg_conflict: hit(Category::NegConflict),
        theta: hit(Category::Theta),
        gamma: hit(Category::Gamma),
        alpha: hit(Category::Alpha),
        beta: hit(Category::Beta),
        delta: hit(Category::Delta),
        unspoken: text.contains(lexicon::UNSPOKEN_PHRASE),
        essence: lexicon::contains_any(text, lexicon::ESSENCE_TERMS),
        short: len <= config.short_len,
        very_short: len <= config.very_short_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_drops_empty_and_caps_lines() {
        let lines = ["  สวัสดี ", "", "   ", "ok", "four", "five"];
        assert_eq!(normalize_lines(&lines, 3), "สวัสดี");
        assert_eq!(normalize_lines(&lines, 6), "สวัสดี\nok\nfour\nfive");
        let none: [&str; 0] = [];
        assert_eq!(normalize_lines(&none, 3), "");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 16 scalar values, 46 bytes in UTF-8.
        let text = "ฉันรู้ พร้อมแล้ว";
        assert_eq!(char_len(text), 16);
        assert!(text.len() > 16);
    }

    #[test]
    fn length_thresholds_are_inclusive() {
        let config = ReadingConfig::default();
        let fifteen = "a".repeat(15);
        let thirty = "b".repeat(30);
        let thirty_one = "b".repeat(31);

        let flags = extract_features(&fifteen, &config);
        assert!(flags.short && flags.very_short);

        let flags = extract_features(&thirty, &config);
        assert!(flags.short && !flags.very_short);

        let flags = extract_features(&thirty_one, &config);
        assert!(!flags.short && !flags.very_short);
    }

    #[test]
    fn detects_hedge_and_conflict_together() {
        let flags = extract_features("อาจจะ ไม่แน่ใจ", &ReadingConfig::default());
        assert!(flags.hedge);
        assert!(flags.neg_conflict);
        assert!(!flags.assertive);
        assert!(!flags.gamma);
    }

    #[test]
    fn unspoken_phrase_also_counts_as_theta() {
        let flags = extract_features("ไม่ต้องพูดก็เข้าใจ", &ReadingConfig::default());
        assert!(flags.unspoken);
        assert!(flags.theta);
        assert!(!flags.essence);
    }
}
