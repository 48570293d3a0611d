//! Unified filter enums for CLI commands

use clap::ValueEnum;

use crate::inventory::TireRecord;

/// Stock filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum StockFilter {
    /// In-stock records only
    InStock,
    /// Out-of-stock records only
    OutOfStock,
    /// All records - default
    #[default]
    All,
}

impl StockFilter {
    /// Check if a record matches this filter
    pub fn matches(&self, record: &TireRecord) -> bool {
        match self {
            StockFilter::InStock => record.in_stock,
            StockFilter::OutOfStock => !record.in_stock,
            StockFilter::All => true,
        }
    }
}

impl std::fmt::Display for StockFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockFilter::InStock => write!(f, "in-stock"),
            StockFilter::OutOfStock => write!(f, "out-of-stock"),
            StockFilter::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_filter_matches() {
        let in_stock = TireRecord {
            sku: "A".to_string(),
            ..TireRecord::default()
        };
        let out_of_stock = TireRecord {
            sku: "B".to_string(),
            in_stock: false,
            ..TireRecord::default()
        };

        assert!(StockFilter::InStock.matches(&in_stock));
        assert!(!StockFilter::InStock.matches(&out_of_stock));
        assert!(StockFilter::OutOfStock.matches(&out_of_stock));
        assert!(StockFilter::All.matches(&in_stock));
        assert!(StockFilter::All.matches(&out_of_stock));
    }
}
