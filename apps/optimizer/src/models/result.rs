use serde::{Deserialize, Serialize};

/// Score shown when the service omits `matchScore`.
pub const DEFAULT_MATCH_SCORE: u8 = 78;

/// Where a result came from. Simulated results must never pass as real ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultSource {
    Backend,
    Simulated,
}

/// A rendered-once optimization outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub match_score: u8, // 0 – 100
    pub keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendation: Option<String>,
    pub report_url: Option<String>,
    pub resume_url: Option<String>,
    pub source: ResultSource,
}

impl OptimizationResult {
    pub fn is_simulated(&self) -> bool {
        self.source == ResultSource::Simulated
    }
}

/// Wire shape of a successful `POST /optimize` response.
/// Every field is optional; absent or null fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub missing: Option<Vec<String>>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub report_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl From<OptimizeResponse> for OptimizationResult {
    fn from(wire: OptimizeResponse) -> Self {
        let match_score = wire
            .match_score
            .filter(|s| s.is_finite())
            .map(|s| s.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(DEFAULT_MATCH_SCORE);

        Self {
            match_score,
            keywords: wire.keywords.unwrap_or_default(),
            suggestions: wire.suggestions.unwrap_or_default(),
            missing_keywords: wire.missing.unwrap_or_default(),
            recommendation: wire.recommendation.filter(|r| !r.trim().is_empty()),
            report_url: wire.report_url,
            resume_url: wire.resume_url,
            source: ResultSource::Backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> OptimizationResult {
        serde_json::from_str::<OptimizeResponse>(json).unwrap().into()
    }

    #[test]
    fn test_full_response_decodes() {
        let result = decode(
            r#"{
                "matchScore": 84,
                "keywords": ["Rust", "Tokio"],
                "suggestions": ["Quantify impact"],
                "missing": ["kubernetes"],
                "recommendation": "Add kubernetes to your resume."
            }"#,
        );
        assert_eq!(result.match_score, 84);
        assert_eq!(result.keywords, vec!["Rust", "Tokio"]);
        assert_eq!(result.suggestions, vec!["Quantify impact"]);
        assert_eq!(result.missing_keywords, vec!["kubernetes"]);
        assert_eq!(
            result.recommendation.as_deref(),
            Some("Add kubernetes to your resume.")
        );
        assert_eq!(result.source, ResultSource::Backend);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let result = decode("{}");
        assert_eq!(result.match_score, DEFAULT_MATCH_SCORE);
        assert!(result.keywords.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(result.recommendation.is_none());
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let result = decode(r#"{"matchScore": null, "keywords": null}"#);
        assert_eq!(result.match_score, 78);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_fractional_and_out_of_range_scores() {
        assert_eq!(decode(r#"{"matchScore": 66.6}"#).match_score, 67);
        assert_eq!(decode(r#"{"matchScore": 140}"#).match_score, 100);
        assert_eq!(decode(r#"{"matchScore": -3}"#).match_score, 0);
        assert_eq!(decode(r#"{"matchScore": 0}"#).match_score, 0);
    }

    #[test]
    fn test_download_urls_are_optional() {
        let result = decode(r#"{"reportUrl": "http://localhost:5000/report/1"}"#);
        assert_eq!(
            result.report_url.as_deref(),
            Some("http://localhost:5000/report/1")
        );
        assert!(result.resume_url.is_none());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<OptimizeResponse>(r#"{"keywords": "Rust"}"#).is_err());
    }
}
