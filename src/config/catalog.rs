use crate::core::detail::ProductDetail;
use crate::core::score::MAX_DISPLAY_SCORE;
use crate::domain::model::{ProductInfo, ScoreModel};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{EcoCartError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../catalog.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogMeta,
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub image: String,
    #[serde(default = "default_description")]
    pub description: String,
    pub score: f64,
    #[serde(default)]
    pub components: HashMap<String, f64>,
    #[serde(default)]
    pub rationale: Vec<String>,
}

fn default_description() -> String {
    "Description goes here".to_string()
}

impl ProductConfig {
    pub fn product_info(&self) -> ProductInfo {
        ProductInfo::new(&self.name, &self.image, &self.description)
    }

    pub fn score_model(&self) -> ScoreModel {
        ScoreModel::new(self.score, self.components.clone(), self.rationale.clone())
    }

    pub fn detail(&self) -> ProductDetail {
        ProductDetail::new(self.product_info(), self.score_model())
    }
}

impl CatalogConfig {
    /// 從 TOML 檔案載入商品目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 內建的商品目錄
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EcoCartError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${IMAGE_PREFIX})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EcoCartError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("catalog.name", &self.catalog.name)?;

        for product in &self.products {
            validation::validate_non_empty_string("products.name", &product.name)?;
            validation::validate_range(
                &format!("products.{}.score", product.name),
                product.score,
                0.0,
                MAX_DISPLAY_SCORE,
            )?;
            for (category, value) in &product.components {
                validation::validate_finite(
                    &format!("products.{}.components.{}", product.name, category),
                    *value,
                )?;
            }
        }

        validation::validate_unique_names(
            "products.name",
            self.products.iter().map(|p| p.name.as_str()),
        )?;

        Ok(())
    }

    pub fn require_product(&self, name: &str) -> Result<&ProductConfig> {
        self.find_product(name)
            .ok_or_else(|| EcoCartError::ProductNotFound {
                name: name.to_string(),
            })
    }
}

impl CatalogProvider for CatalogConfig {
    fn products(&self) -> &[ProductConfig] {
        &self.products
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
