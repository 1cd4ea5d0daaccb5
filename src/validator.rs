use crate::catalog::PriceLookup;
use crate::fields::{get_int, get_string};
use serde_json::Value;
use std::fmt;

/// One business rule violated by a sales record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    NotAnObject,
    /// A required field is absent or has the wrong shape.
    InvalidField(&'static str),
    NegativeQuantity,
    UnknownProduct(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::NotAnObject => write!(f, "Registro no es un objeto JSON (dict)."),
            Problem::InvalidField(field) => write!(f, "{} inválido o faltante", field),
            Problem::NegativeQuantity => write!(f, "Quantity no puede ser negativa"),
            Problem::UnknownProduct(product) => {
                write!(f, "Producto no existe en catálogo: '{}'", product)
            }
        }
    }
}

/// Joins problems the way they appear in the errors section of the report.
pub fn join_problems(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A sales record that passed every rule, with its unit price resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSale {
    pub sale_id: i128,
    pub sale_date: String,
    pub product: String,
    pub quantity: i128,
    pub unit_price: f64,
}

impl ValidSale {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Checks one raw sales record against the price lookup.
///
/// All four fields are checked independently so a record reports every
/// problem it has, in the order SALE_ID, SALE_Date, Product, Quantity,
/// then catalog membership.
pub fn validate_record(record: &Value, prices: &PriceLookup) -> Result<ValidSale, Vec<Problem>> {
    let Value::Object(fields) = record else {
        return Err(vec![Problem::NotAnObject]);
    };

    let sale_id = get_int(fields, "SALE_ID");
    let sale_date = get_string(fields, "SALE_Date");
    let product = get_string(fields, "Product");
    let quantity = get_int(fields, "Quantity");

    let mut problems = Vec::new();
    if sale_id.is_none() {
        problems.push(Problem::InvalidField("SALE_ID"));
    }
    if sale_date.is_none() {
        problems.push(Problem::InvalidField("SALE_Date"));
    }
    if product.is_none() {
        problems.push(Problem::InvalidField("Product"));
    }
    match quantity {
        None => problems.push(Problem::InvalidField("Quantity")),
        Some(qty) if qty < 0 => problems.push(Problem::NegativeQuantity),
        Some(_) => {}
    }

    let unit_price = product.and_then(|name| prices.get(name).copied());
    if let (Some(name), None) = (product, unit_price) {
        problems.push(Problem::UnknownProduct(name.to_string()));
    }

    match (sale_id, sale_date, product, quantity, unit_price) {
        (Some(sale_id), Some(sale_date), Some(product), Some(quantity), Some(unit_price))
            if problems.is_empty() =>
        {
            Ok(ValidSale {
                sale_id,
                sale_date: sale_date.to_string(),
                product: product.to_string(),
                quantity,
                unit_price,
            })
        }
        _ => Err(problems),
    }
}
