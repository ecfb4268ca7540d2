//! Simulated fallback results, used when the optimization service is unreachable.

use crate::models::{OptimizationResult, ResultSource};
use crate::rng::XorShift64;

pub const FALLBACK_SCORE_MIN: u8 = 65;
pub const FALLBACK_SCORE_MAX: u8 = 95;

pub const FALLBACK_KEYWORDS: [&str; 8] = [
    "JavaScript",
    "React",
    "Node.js",
    "AWS",
    "Agile",
    "Python",
    "SQL",
    "Git",
];

pub const FALLBACK_SUGGESTIONS: [&str; 4] = [
    "Add \"Docker\" to your skills section",
    "Quantify your achievements with specific numbers and percentages",
    "Include more leadership-related keywords for managerial roles",
    "Add a projects section to showcase specific implementations",
];

pub struct FallbackSimulator {
    rng: XorShift64,
}

impl Default for FallbackSimulator {
    fn default() -> Self {
        Self {
            rng: XorShift64::from_entropy(),
        }
    }
}

impl FallbackSimulator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: XorShift64::seeded(seed),
        }
    }

    /// Score uniform in [65, 95]; fixed keyword and suggestion pools.
    pub fn synthesize(&mut self) -> OptimizationResult {
        let score = self
            .rng
            .range_inclusive(u64::from(FALLBACK_SCORE_MIN), u64::from(FALLBACK_SCORE_MAX));

        OptimizationResult {
            match_score: score as u8,
            keywords: FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            missing_keywords: Vec::new(),
            recommendation: None,
            report_url: None,
            resume_url: None,
            source: ResultSource::Simulated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_stay_in_range() {
        let mut sim = FallbackSimulator::seeded(2024);
        for _ in 0..1_000 {
            let r = sim.synthesize();
            assert!((FALLBACK_SCORE_MIN..=FALLBACK_SCORE_MAX).contains(&r.match_score));
        }
    }

    #[test]
    fn test_result_is_marked_simulated() {
        let r = FallbackSimulator::default().synthesize();
        assert!(r.is_simulated());
        assert_eq!(r.keywords.len(), 8);
        assert_eq!(r.suggestions.len(), 4);
        assert_eq!(r.keywords[0], "JavaScript");
    }
}
