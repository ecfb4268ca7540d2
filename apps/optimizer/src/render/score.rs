use serde::Serialize;

/// Radius of the circular score gauge, in SVG user units.
pub const GAUGE_RADIUS: f64 = 54.0;

/// Colour band of the score indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    /// 80 and above.
    Good,
    /// 60 to 79.
    Fair,
    /// Below 60.
    Poor,
}

impl ScoreBand {
    pub fn classify(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Good
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }

    /// Stroke colour of the gauge.
    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Good => "#2ecc71",
            ScoreBand::Fair => "#3498db",
            ScoreBand::Poor => "#e74c3c",
        }
    }
}

/// Stroke geometry for drawing a score as an arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreGauge {
    pub circumference: f64,
    pub dash_offset: f64,
}

impl ScoreGauge {
    pub fn for_score(score: u8) -> Self {
        let circumference = 2.0 * std::f64::consts::PI * GAUGE_RADIUS;
        let fraction = f64::from(score.min(100)) / 100.0;
        Self {
            circumference,
            dash_offset: circumference - fraction * circumference,
        }
    }
}
