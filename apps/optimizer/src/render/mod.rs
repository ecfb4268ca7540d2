//! Result Renderer: pushes an [`OptimizationResult`] into the display ports.

pub mod keywords;
pub mod score;

use tracing::debug;

use crate::models::OptimizationResult;
use crate::rng::XorShift64;
use crate::views::{DownloadKind, Notice, ViewPorts};

pub use keywords::{select_suggestions, KeywordSelection, MAX_KEYWORDS, MAX_SUGGESTIONS};
pub use score::{ScoreBand, ScoreGauge};

pub struct ResultRenderer {
    views: ViewPorts,
    keyword_selection: KeywordSelection,
    salt: u64,
}

impl ResultRenderer {
    pub fn new(views: ViewPorts, keyword_selection: KeywordSelection) -> Self {
        Self {
            views,
            keyword_selection,
            salt: XorShift64::from_entropy().next_u64(),
        }
    }

    /// Draws the empty gauge shown before any submission.
    pub fn initialize(&self) {
        self.show_score(0);
    }

    /// Updates score, keywords and suggestions, then reveals the results.
    ///
    /// Empty keyword or suggestion lists leave the previous display in place.
    /// Rendering the same result again yields the same display.
    pub fn render(&self, result: &OptimizationResult) {
        self.show_score(result.match_score);

        if !result.keywords.is_empty() {
            let shown = self.keyword_selection.select(&result.keywords, self.salt);
            self.views.keywords.show_keywords(&shown);
        }

        if !result.suggestions.is_empty() {
            self.views
                .suggestions
                .show_suggestions(&select_suggestions(&result.suggestions));
        }

        self.views.results.reveal_results(result.source);
        debug!(
            score = result.match_score,
            keywords = result.keywords.len(),
            suggestions = result.suggestions.len(),
            source = ?result.source,
            "rendered optimization result"
        );
    }

    /// Acknowledges a download request. No file is transferred.
    pub fn download(&self, kind: DownloadKind, result: Option<&OptimizationResult>) {
        let url = result.and_then(|r| match kind {
            DownloadKind::Report => r.report_url.clone(),
            DownloadKind::OptimizedResume => r.resume_url.clone(),
        });
        self.views.notices.notify(&Notice::Download { kind, url });
    }

    fn show_score(&self, score: u8) {
        let score = score.min(100);
        self.views
            .score
            .show_score(score, ScoreBand::classify(score), ScoreGauge::for_score(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultSource;
    use crate::views::recording::RecordingView;

    fn result(score: u8, keywords: usize, suggestions: usize) -> OptimizationResult {
        OptimizationResult {
            match_score: score,
            keywords: (0..keywords).map(|i| format!("kw{i}")).collect(),
            suggestions: (0..suggestions).map(|i| format!("tip{i}")).collect(),
            missing_keywords: vec![],
            recommendation: None,
            report_url: None,
            resume_url: None,
            source: ResultSource::Backend,
        }
    }

    #[test]
    fn test_initialize_draws_zero() {
        let view = RecordingView::new();
        ResultRenderer::new(view.ports(), KeywordSelection::Leading).initialize();
        let (score, band, _) = view.display().score.unwrap();
        assert_eq!(score, 0);
        assert_eq!(band, ScoreBand::Poor);
    }

    #[test]
    fn test_render_truncates_keywords_and_suggestions() {
        let view = RecordingView::new();
        let renderer = ResultRenderer::new(view.ports(), KeywordSelection::Leading);
        renderer.render(&result(85, 10, 7));

        let display = view.snapshot();
        assert_eq!(display.score.map(|s| (s.0, s.1)), Some((85, ScoreBand::Good)));
        assert_eq!(display.keywords.len(), 8);
        assert_eq!(display.keywords[0], "kw0");
        assert_eq!(display.keywords[7], "kw7");
        assert_eq!(display.suggestions.len(), 5);
        assert_eq!(display.revealed, Some(ResultSource::Backend));
    }

    #[test]
    fn test_render_clamps_score() {
        let view = RecordingView::new();
        let renderer = ResultRenderer::new(view.ports(), KeywordSelection::Leading);
        renderer.render(&result(250, 0, 0));
        let (score, band, gauge) = view.display().score.unwrap();
        assert_eq!(score, 100);
        assert_eq!(band, ScoreBand::Good);
        assert!(gauge.dash_offset.abs() < 1e-9);
    }

    #[test]
    fn test_render_twice_is_idempotent() {
        for selection in [KeywordSelection::Leading, KeywordSelection::RandomSubset] {
            let view = RecordingView::new();
            let renderer = ResultRenderer::new(view.ports(), selection);
            let r = result(72, 10, 6);

            renderer.render(&r);
            let first = view.snapshot();
            renderer.render(&r);
            let second = view.snapshot();

            assert_eq!(first.score, second.score);
            assert_eq!(first.keywords, second.keywords);
            assert_eq!(first.suggestions, second.suggestions);
        }
    }

    #[test]
    fn test_empty_lists_keep_previous_display() {
        let view = RecordingView::new();
        let renderer = ResultRenderer::new(view.ports(), KeywordSelection::Leading);
        renderer.render(&result(90, 3, 2));
        renderer.render(&result(40, 0, 0));

        let display = view.snapshot();
        assert_eq!(display.score.map(|s| s.1), Some(ScoreBand::Poor));
        assert_eq!(display.keywords, vec!["kw0", "kw1", "kw2"]);
        assert_eq!(display.suggestions, vec!["tip0", "tip1"]);
    }

    #[test]
    fn test_download_acknowledges_with_optional_url() {
        let view = RecordingView::new();
        let renderer = ResultRenderer::new(view.ports(), KeywordSelection::Leading);
        let mut r = result(80, 0, 0);
        r.resume_url = Some("http://localhost:5000/resume.pdf".into());

        renderer.download(DownloadKind::Report, Some(&r));
        renderer.download(DownloadKind::OptimizedResume, Some(&r));

        let notices = view.snapshot().notices;
        assert_eq!(
            notices,
            vec![
                Notice::Download {
                    kind: DownloadKind::Report,
                    url: None
                },
                Notice::Download {
                    kind: DownloadKind::OptimizedResume,
                    url: Some("http://localhost:5000/resume.pdf".into())
                },
            ]
        );
    }
}
