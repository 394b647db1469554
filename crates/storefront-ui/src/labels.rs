//! User-facing component text.

use serde::{Deserialize, Serialize};

/// Localized strings rendered by the components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Buy button of a catalog item.
    #[serde(default = "default_buy")]
    pub buy: String,

    /// Delete button of a cart row.
    #[serde(default = "default_delete")]
    pub delete: String,

    /// Shown instead of the catalog when nothing matches.
    #[serde(default = "default_not_found")]
    pub not_found: String,

    /// Placeholder of the search input.
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    /// Suffix after prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_buy() -> String {
    "Купить".to_string()
}

fn default_delete() -> String {
    "Удалить".to_string()
}

fn default_not_found() -> String {
    "Ничего не найдено".to_string()
}

fn default_search_placeholder() -> String {
    "Поиск...".to_string()
}

fn default_currency() -> String {
    "руб.".to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            buy: default_buy(),
            delete: default_delete(),
            not_found: default_not_found(),
            search_placeholder: default_search_placeholder(),
            currency: default_currency(),
        }
    }
}
