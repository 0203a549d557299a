use crate::domain::model::{ScoreModel, SustainabilityLabel};
use crate::utils::error::DomainError;

pub const MAX_DISPLAY_SCORE: f64 = 10.0;

const HIGH_THRESHOLD: f64 = 0.67;
const MEDIUM_THRESHOLD: f64 = 0.34;

impl ScoreModel {
    /// 轉換成購物車使用的 [0, 1] 分數；超出 [0, 10] 則拒絕
    pub fn to_normalized(&self) -> Result<f64, DomainError> {
        if !(0.0..=MAX_DISPLAY_SCORE).contains(&self.overall_score) {
            return Err(DomainError::ScoreOutOfRange {
                score: self.overall_score,
                max: MAX_DISPLAY_SCORE,
            });
        }
        Ok(self.overall_score / MAX_DISPLAY_SCORE)
    }

    /// Breakdown ordered by category name, byte-wise ascending.
    pub fn sorted_components(&self) -> Vec<(&str, f64)> {
        let mut components: Vec<(&str, f64)> = self
            .components
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        components.sort_by(|a, b| a.0.cmp(b.0));
        components
    }

    pub fn label(&self) -> Result<SustainabilityLabel, DomainError> {
        self.to_normalized().map(label_for_normalized)
    }

    pub fn score_line(&self) -> String {
        format_display_score(self.overall_score)
    }

    pub fn breakdown_lines(&self) -> Vec<String> {
        self.sorted_components()
            .into_iter()
            .map(|(name, value)| format!("{}: {:.2}", name, value))
            .collect()
    }
}

pub fn label_for_normalized(score: f64) -> SustainabilityLabel {
    if score >= HIGH_THRESHOLD {
        SustainabilityLabel::High
    } else if score >= MEDIUM_THRESHOLD {
        SustainabilityLabel::Medium
    } else {
        SustainabilityLabel::Low
    }
}

pub fn format_display_score(score: f64) -> String {
    format!("{:.1} / 10", score)
}
