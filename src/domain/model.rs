use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// 購物車項目的識別碼，在建立項目時產生，與欄位內容無關
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The `name / image / description` triple a product screen hands over on add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub image_ref: String,
    pub description: String,
}

impl ProductInfo {
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_ref: image_ref.into(),
            description: description.into(),
        }
    }
}

/// A product's eco score on the 0-10 display scale plus its breakdown.
///
/// The value is immutable once built. Range checking happens in
/// [`ScoreModel::to_normalized`], the only place a score crosses into cart
/// storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreModel {
    pub(crate) overall_score: f64,
    pub(crate) components: HashMap<String, f64>,
    pub(crate) rationale: Vec<String>,
}

impl ScoreModel {
    pub fn new(
        overall_score: f64,
        components: HashMap<String, f64>,
        rationale: Vec<String>,
    ) -> Self {
        Self {
            overall_score,
            components,
            rationale,
        }
    }

    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    pub fn components(&self) -> &HashMap<String, f64> {
        &self.components
    }

    pub fn rationale(&self) -> &[String] {
        &self.rationale
    }
}

/// One product admitted to the cart. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    pub(crate) id: EntryId,
    pub(crate) name: String,
    pub(crate) image_ref: String,
    pub(crate) description: String,
    pub(crate) normalized_score: f64,
}

impl CartEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Score in [0, 1].
    pub fn normalized_score(&self) -> f64 {
        self.normalized_score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SustainabilityLabel {
    High,
    Medium,
    Low,
}

impl fmt::Display for SustainabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SustainabilityLabel::High => "High",
            SustainabilityLabel::Medium => "Medium",
            SustainabilityLabel::Low => "Low",
        };
        f.write_str(text)
    }
}

/// Serializable view of a cart for the `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct CartReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<CartEntry>,
    pub aggregate_score: f64,
    pub label: Option<SustainabilityLabel>,
}
