use log::warn;
use serde_json::Value;
use std::collections::HashMap;

/// Product title (trimmed, case-sensitive) to unit price.
pub type PriceLookup = HashMap<String, f64>;

#[derive(Debug, Default)]
pub struct CatalogNormalization {
    pub prices: PriceLookup,
    /// Non-fatal catalog issues in the order they were found.
    pub warnings: Vec<String>,
}

impl CatalogNormalization {
    fn push_warning(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }
}

/// Builds the price lookup from a parsed catalog.
///
/// Malformed entries are skipped and reported as warnings; a later entry with
/// the same title replaces an earlier one.
pub fn normalize_catalog(catalog: &Value) -> CatalogNormalization {
    let mut normalized = CatalogNormalization::default();

    let Value::Array(items) = catalog else {
        normalized.push_warning(
            "El catálogo no es una lista. Se esperaba una lista de productos.".to_string(),
        );
        return normalized;
    };

    for (idx, item) in items.iter().enumerate() {
        let position = idx + 1;

        let Value::Object(entry) = item else {
            normalized.push_warning(format!(
                "Catálogo: elemento #{} no es un objeto JSON.",
                position
            ));
            continue;
        };

        let title = match entry.get("title") {
            Some(Value::String(text)) if !text.trim().is_empty() => text.trim(),
            _ => {
                normalized.push_warning(format!(
                    "Catálogo: elemento #{} no tiene 'title' válido (string).",
                    position
                ));
                continue;
            }
        };

        let price = match entry.get("price") {
            Some(Value::Number(number)) => number.as_f64(),
            _ => None,
        };

        match price {
            Some(price) => {
                normalized.prices.insert(title.to_string(), price);
            }
            None => normalized.push_warning(format!(
                "Catálogo: '{}' no tiene 'price' numérico válido.",
                title
            )),
        }
    }

    normalized
}
