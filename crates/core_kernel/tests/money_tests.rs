//! Money value-object tests
//!
//! Covers minor-unit arithmetic, decimal rounding into minor units, and
//! currency safety.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn round_half_up_matches_published_premium_examples() {
    // risk premium 900 -> base 1000, suggested 1286
    let base = Money::from_decimal_minor(dec!(900) / dec!(0.9), Currency::MUR).unwrap();
    assert_eq!(base.minor_units(), 1000);

    let suggested = Money::from_decimal_minor(dec!(900) / dec!(0.7), Currency::MUR).unwrap();
    assert_eq!(suggested.minor_units(), 1286);
}

#[test]
fn negative_balances_round_away_from_zero() {
    let m = Money::from_decimal_minor(dec!(-0.5), Currency::MUR).unwrap();
    assert_eq!(m.minor_units(), -1);
}

#[test]
fn subtraction_can_go_negative() {
    let a = Money::from_minor(100, Currency::MUR);
    let b = Money::from_minor(350, Currency::MUR);
    let balance = a.checked_sub(&b).unwrap();
    assert!(balance.is_negative());
    assert_eq!(balance.abs().minor_units(), 250);
}

#[test]
fn mixed_currency_operations_are_rejected() {
    let mur = Money::from_minor(5_000, Currency::MUR);
    let usd = Money::from_minor(5_000, Currency::USD);
    let err = mur.checked_sub(&usd).unwrap_err();
    assert_eq!(
        err,
        MoneyError::CurrencyMismatch("MUR".to_string(), "USD".to_string())
    );
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whole_decimals_round_trip_exactly(minor in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::from_decimal_minor(Decimal::from(minor), Currency::MUR).unwrap();
            prop_assert_eq!(money.minor_units(), minor);
        }

        #[test]
        fn addition_is_commutative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a, Currency::MUR);
            let mb = Money::from_minor(b, Currency::MUR);
            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn rounding_error_is_at_most_half_a_unit(numer in 0i64..10_000_000i64) {
            // divide by the 0.7 suggested-premium load and round
            let exact = Decimal::from(numer) / dec!(0.7);
            let rounded = Money::from_decimal_minor(exact, Currency::MUR).unwrap();
            let diff = (Decimal::from(rounded.minor_units()) - exact).abs();
            prop_assert!(diff <= dec!(0.5));
        }
    }
}
