//! Net premium of entering a position.

use rust_decimal::Decimal;

use super::leg::StrategyLeg;

/// Signed cash flow of entering the position, credit positive.
///
/// Option legs contribute `premium * quantity * 100`, received for
/// short legs and paid for long legs. Stock legs contribute nothing:
/// their entry price is not a premium. The sum is order-independent.
#[must_use]
pub fn net_premium(legs: &[StrategyLeg]) -> Decimal {
    legs.iter().map(StrategyLeg::net_premium).sum()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::super::leg::{InstrumentType, LegDirection};
    use super::*;

    #[test]
    fn test_debit_spread_is_negative() {
        // Long call at 5, short call at 2: net debit of 300
        let legs = vec![
            StrategyLeg::new(
                InstrumentType::Call,
                LegDirection::Long,
                dec!(100),
                dec!(5),
                1,
            ),
            StrategyLeg::new(
                InstrumentType::Call,
                LegDirection::Short,
                dec!(110),
                dec!(2),
                1,
            ),
        ];
        assert_eq!(net_premium(&legs), dec!(-300));
    }

    #[test]
    fn test_credit_position_is_positive() {
        let legs = vec![StrategyLeg::new(
            InstrumentType::Put,
            LegDirection::Short,
            dec!(95),
            dec!(1.75),
            2,
        )];
        assert_eq!(net_premium(&legs), dec!(350.00));
    }

    #[test]
    fn test_stock_legs_contribute_nothing() {
        let legs = vec![
            StrategyLeg::new(
                InstrumentType::Stock,
                LegDirection::Long,
                dec!(100),
                dec!(0),
                1,
            ),
            StrategyLeg::new(
                InstrumentType::Call,
                LegDirection::Short,
                dec!(110),
                dec!(2),
                1,
            ),
        ];
        // Covered call: only the short call's credit counts
        assert_eq!(net_premium(&legs), dec!(200));
    }

    #[test]
    fn test_empty_legs_have_zero_premium() {
        assert_eq!(net_premium(&[]), Decimal::ZERO);
    }
}
