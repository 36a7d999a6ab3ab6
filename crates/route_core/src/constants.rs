/// Edge weight type. Fares are non-negative prices.
pub type Weight = f64;
