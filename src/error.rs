use thiserror::Error;

use crate::models::PizzaSize;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Manual pricing for '{slug}' is missing: {}", .fields.join(", "))]
    Configuration {
        slug: String,
        fields: Vec<&'static str>,
    },

    #[error("Size {size} is not available for '{slug}'")]
    UnsupportedSize { slug: String, size: PizzaSize },

    #[error("Product not found: {slug}{}", suggestion_hint(.suggestion))]
    ProductNotFound {
        slug: String,
        suggestion: Option<String>,
    },

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MenuError {
    /// Whether the error means "nothing here" to a caller serving lookups.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MenuError::ProductNotFound { .. }
                | MenuError::CategoryNotFound(_)
                | MenuError::UnsupportedSize { .. }
        )
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
