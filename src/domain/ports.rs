use crate::config::catalog::ProductConfig;
use crate::domain::model::{CartEntry, EntryId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A cart whose mutations are serialized by its owner (a lock or a channel).
///
/// The error path only covers the serializing transport going away; the cart
/// operations themselves never fail.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn add(&self, entry: CartEntry) -> Result<bool>;
    async fn remove(&self, id: EntryId) -> Result<bool>;
    async fn aggregate_score(&self) -> Result<f64>;
    async fn snapshot(&self) -> Result<Vec<CartEntry>>;
}

/// Called after a mutating cart call actually changed the cart.
pub trait CartObserver: Send + Sync {
    fn cart_changed(&self, snapshot: &[CartEntry], aggregate_score: f64);
}

pub trait CatalogProvider: Send + Sync {
    fn products(&self) -> &[ProductConfig];

    fn find_product(&self, name: &str) -> Option<&ProductConfig> {
        self.products().iter().find(|p| p.name == name)
    }
}
