pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::catalog::{CatalogConfig, ProductConfig};
pub use crate::core::{
    actor::{CartActor, CartHandle},
    cart::CartStore,
    detail::ProductDetail,
    observer::LoggingObserver,
    shared::SharedCart,
};
pub use crate::domain::model::{
    CartEntry, CartReport, EntryId, ProductInfo, ScoreModel, SustainabilityLabel,
};
pub use crate::domain::ports::{CartObserver, CartService, CatalogProvider};
pub use crate::utils::error::{DomainError, EcoCartError, Result};
