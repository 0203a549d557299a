use crate::core::score::{label_for_normalized, MAX_DISPLAY_SCORE};
use crate::domain::model::{CartEntry, CartReport, EntryId, ProductInfo, ScoreModel};
use crate::utils::error::DomainError;
use chrono::Utc;

impl CartEntry {
    /// Builds an entry from an already normalized score in [0, 1].
    pub fn new(product: ProductInfo, normalized_score: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&normalized_score) {
            return Err(DomainError::ScoreOutOfRange {
                score: normalized_score,
                max: 1.0,
            });
        }

        Ok(Self {
            id: EntryId::new(),
            name: product.name,
            image_ref: product.image_ref,
            description: product.description,
            normalized_score,
        })
    }

    /// Builds an entry from a 0-10 score. This is the one place the score is
    /// divided by ten.
    pub fn from_score(product: ProductInfo, score: &ScoreModel) -> Result<Self, DomainError> {
        let normalized = score.to_normalized()?;
        Self::new(product, normalized)
    }

    pub fn score_line(&self) -> String {
        format!("Score: {:.1}", self.normalized_score * MAX_DISPLAY_SCORE)
    }
}

/// The in-memory cart. Entry names are unique; order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名商品已存在時不加入，回傳 false
    pub fn add(&mut self, entry: CartEntry) -> bool {
        if self.contains_name(&entry.name) {
            tracing::debug!("Skipping duplicate cart entry: {}", entry.name);
            return false;
        }

        tracing::debug!(
            "Adding cart entry {} ({}) with score {:.2}",
            entry.name,
            entry.id,
            entry.normalized_score
        );
        self.entries.push(entry);
        true
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                let removed = self.entries.remove(index);
                tracing::debug!("Removed cart entry {} ({})", removed.name, id);
                true
            }
            None => {
                tracing::debug!("No cart entry with id {}", id);
                false
            }
        }
    }

    /// Mean normalized score on the 0-10 scale; 0.0 for an empty cart.
    pub fn aggregate_score(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }

        let total: f64 = self.entries.iter().map(|e| e.normalized_score).sum();
        total / self.entries.len() as f64 * MAX_DISPLAY_SCORE
    }

    pub fn snapshot(&self) -> Vec<CartEntry> {
        self.entries.clone()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn report(&self) -> CartReport {
        build_report(self.snapshot(), self.aggregate_score())
    }
}

pub fn build_report(entries: Vec<CartEntry>, aggregate_score: f64) -> CartReport {
    let label = if entries.is_empty() {
        None
    } else {
        Some(label_for_normalized(aggregate_score / MAX_DISPLAY_SCORE))
    };

    CartReport {
        generated_at: Utc::now(),
        entries,
        aggregate_score,
        label,
    }
}
