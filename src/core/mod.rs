pub mod actor;
pub mod cart;
pub mod detail;
pub mod observer;
pub mod score;
pub mod shared;

pub use crate::domain::model::{CartEntry, CartReport, EntryId, ProductInfo, ScoreModel};
pub use crate::domain::ports::{CartObserver, CartService, CatalogProvider};
pub use crate::utils::error::Result;
