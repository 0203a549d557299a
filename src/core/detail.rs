use crate::core::cart::CartStore;
use crate::domain::model::{CartEntry, ProductInfo, ScoreModel};
use crate::domain::ports::CartService;
use crate::utils::error::{DomainError, Result};

/// A product detail screen's state: the product, its score, and whether the
/// add button has already been used.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: ProductInfo,
    score: ScoreModel,
    is_added: bool,
}

impl ProductDetail {
    pub fn new(product: ProductInfo, score: ScoreModel) -> Self {
        Self {
            product,
            score,
            is_added: false,
        }
    }

    pub fn product(&self) -> &ProductInfo {
        &self.product
    }

    pub fn score(&self) -> &ScoreModel {
        &self.score
    }

    pub fn is_added(&self) -> bool {
        self.is_added
    }

    fn cart_entry(&self) -> std::result::Result<CartEntry, DomainError> {
        CartEntry::from_score(self.product.clone(), &self.score).inspect_err(|e| {
            tracing::warn!("Rejected add of {}: {}", self.product.name, e);
        })
    }

    /// 回傳購物車是否有變動。分數錯誤時購物車與按鈕狀態都不變
    pub fn add_to_cart(&mut self, cart: &mut CartStore) -> std::result::Result<bool, DomainError> {
        if self.is_added {
            return Ok(false);
        }

        let entry = self.cart_entry()?;
        let added = cart.add(entry);
        self.is_added = true;
        Ok(added)
    }

    pub async fn submit<S>(&mut self, cart: &S) -> Result<bool>
    where
        S: CartService + ?Sized,
    {
        if self.is_added {
            return Ok(false);
        }

        let entry = self.cart_entry()?;
        let added = cart.add(entry).await?;
        self.is_added = true;
        Ok(added)
    }
}
