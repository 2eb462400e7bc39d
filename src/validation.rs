//! Input validators for order parameters.
//!
//! Quantities and prices are parsed as exact decimals so that "0.1" stays
//! 0.1 on the wire instead of drifting through binary floating point.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::orders::OrderSide;

/// Validate a trading symbol and return its uppercase form.
pub fn validate_symbol(symbol: &str) -> Result<String, ValidationError> {
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }

    Ok(symbol.to_uppercase())
}

/// Validate an order quantity. Must parse as a decimal and be strictly positive.
pub fn validate_quantity(quantity: &str) -> Result<Decimal, ValidationError> {
    parse_positive(quantity).ok_or(ValidationError::InvalidQuantity)
}

/// Validate a limit or stop price. Same rules as quantity.
pub fn validate_price(price: &str) -> Result<Decimal, ValidationError> {
    parse_positive(price).ok_or(ValidationError::InvalidPrice)
}

/// Validate an order side, case-insensitively.
pub fn validate_side(side: &str) -> Result<OrderSide, ValidationError> {
    match side.to_uppercase().as_str() {
        "BUY" => Ok(OrderSide::Buy),
        "SELL" => Ok(OrderSide::Sell),
        _ => Err(ValidationError::InvalidSide),
    }
}

fn parse_positive(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    let value = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()?;

    if value <= Decimal::ZERO {
        return None;
    }

    Some(value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_is_uppercased() {
        assert_eq!(validate_symbol("btcusdt").unwrap(), "BTCUSDT");
        assert_eq!(validate_symbol("EthUsdt").unwrap(), "ETHUSDT");
    }

    #[test]
    fn test_symbol_validation_is_idempotent() {
        let once = validate_symbol("solusdt").unwrap();
        assert_eq!(validate_symbol(&once).unwrap(), once);
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(validate_symbol(""), Err(ValidationError::EmptySymbol));
    }

    #[test]
    fn test_quantity_keeps_decimal_precision() {
        assert_eq!(validate_quantity("0.01").unwrap(), dec!(0.01));
        assert_eq!(validate_quantity("0.1").unwrap().to_string(), "0.1");
        assert_eq!(validate_quantity(" 1.50 ").unwrap().to_string(), "1.5");
        assert_eq!(validate_quantity("1e-3").unwrap(), dec!(0.001));
    }

    #[test]
    fn test_non_positive_or_garbage_quantity_rejected() {
        for raw in ["0", "-1", "-0.5", "0.000", "abc", "", "1.2.3", "NaN"] {
            assert_eq!(
                validate_quantity(raw),
                Err(ValidationError::InvalidQuantity),
                "quantity {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_price_validation() {
        assert_eq!(validate_price("3000").unwrap(), dec!(3000));
        assert_eq!(validate_price("61000.00").unwrap().to_string(), "61000");
        assert_eq!(validate_price("0"), Err(ValidationError::InvalidPrice));
        assert_eq!(validate_price("-5"), Err(ValidationError::InvalidPrice));
        assert_eq!(validate_price("ten"), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_side_is_case_insensitive() {
        assert_eq!(validate_side("buy").unwrap(), OrderSide::Buy);
        assert_eq!(validate_side("Sell").unwrap(), OrderSide::Sell);
        assert_eq!(validate_side("SELL").unwrap(), OrderSide::Sell);
    }

    #[test]
    fn test_unknown_side_rejected() {
        for raw in ["long", "", "b", "BUYY"] {
            let err = validate_side(raw).unwrap_err();
            assert!(err.to_string().contains("Side must be"));
        }
    }
}
