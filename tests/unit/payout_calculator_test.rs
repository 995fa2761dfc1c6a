// Property-based tests for artist payout calculation
//
// Covers the four deal families:
// - Flat Guarantee: payout = guarantee
// - Percentage: payout = net tickets × split%
// - Versus: payout = max(guarantee, net tickets × split%)
// - Hybrid: guarantee, plus split% of net tickets above the split point

use encore::events::models::{DealTerms, DealType};
use encore::events::PayoutCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn deal(
    deal_type: Option<DealType>,
    guarantee: Decimal,
    percentage_split: Decimal,
    hybrid_split_point: Decimal,
) -> DealTerms {
    DealTerms {
        deal_type,
        guarantee,
        percentage_split,
        hybrid_split_point,
    }
}

fn any_deal_type() -> impl Strategy<Value = Option<DealType>> {
    prop_oneof![
        Just(None),
        Just(Some(DealType::FlatGuarantee)),
        Just(Some(DealType::Percentage)),
        Just(Some(DealType::Versus)),
        Just(Some(DealType::Hybrid)),
    ]
}

#[test]
fn test_hybrid_at_or_below_split_pays_guarantee_only() {
    let terms = deal(Some(DealType::Hybrid), dec!(1000), dec!(20), dec!(6000));
    assert_eq!(PayoutCalculator::calculate(dec!(5000), &terms), dec!(1000));
}

#[test]
fn test_hybrid_above_split_adds_overage_share() {
    let terms = deal(Some(DealType::Hybrid), dec!(1000), dec!(20), dec!(6000));
    assert_eq!(PayoutCalculator::calculate(dec!(8000), &terms), dec!(1400));
}

#[test]
fn test_flat_guarantee_scenario() {
    let terms = deal(Some(DealType::FlatGuarantee), dec!(2000), dec!(0), dec!(0));
    assert_eq!(PayoutCalculator::calculate(dec!(9000), &terms), dec!(2000));
}

proptest! {
    #[test]
    fn test_payout_is_never_negative(
        deal_type in any_deal_type(),
        net in -1_000_000i64..10_000_000i64,
        guarantee in 0i64..1_000_000i64,
        split in 0u32..=100u32,
        split_point in 0i64..5_000_000i64
    ) {
        let terms = deal(deal_type, cents(guarantee), Decimal::from(split), cents(split_point));
        let payout = PayoutCalculator::calculate(cents(net), &terms);
        prop_assert!(payout >= Decimal::ZERO, "Payout must be non-negative: got {}", payout);
    }

    #[test]
    fn test_payout_is_deterministic(
        deal_type in any_deal_type(),
        net in 0i64..10_000_000i64,
        guarantee in 0i64..1_000_000i64,
        split in 0u32..=100u32,
        split_point in 0i64..5_000_000i64
    ) {
        let terms = deal(deal_type, cents(guarantee), Decimal::from(split), cents(split_point));
        prop_assert_eq!(
            PayoutCalculator::calculate(cents(net), &terms),
            PayoutCalculator::calculate(cents(net), &terms)
        );
    }

    #[test]
    fn test_flat_guarantee_ignores_revenue(
        net in 0i64..10_000_000i64,
        guarantee in 0i64..1_000_000i64
    ) {
        let terms = deal(
            Some(DealType::FlatGuarantee),
            cents(guarantee),
            Decimal::ZERO,
            Decimal::ZERO,
        );
        prop_assert_eq!(PayoutCalculator::calculate(cents(net), &terms), cents(guarantee));
    }

    #[test]
    fn test_versus_at_least_guarantee(
        net in 0i64..10_000_000i64,
        guarantee in 1i64..1_000_000i64,
        split in 1u32..=100u32
    ) {
        let terms = deal(
            Some(DealType::Versus),
            cents(guarantee),
            Decimal::from(split),
            Decimal::ZERO,
        );
        let payout = PayoutCalculator::calculate(cents(net), &terms);
        let share = cents(net) * Decimal::from(split) / Decimal::ONE_HUNDRED;

        prop_assert!(payout >= cents(guarantee));
        prop_assert!(payout >= share);
        prop_assert!(payout == cents(guarantee) || payout == share);
    }

    #[test]
    fn test_hybrid_never_below_guarantee(
        net in 0i64..10_000_000i64,
        guarantee in 1i64..1_000_000i64,
        split in 1u32..=100u32,
        split_point in 1i64..5_000_000i64
    ) {
        let terms = deal(
            Some(DealType::Hybrid),
            cents(guarantee),
            Decimal::from(split),
            cents(split_point),
        );
        let payout = PayoutCalculator::calculate(cents(net), &terms);

        prop_assert!(payout >= cents(guarantee));
        if cents(net) <= cents(split_point) {
            prop_assert_eq!(payout, cents(guarantee));
        }
    }

    #[test]
    fn test_unrecognized_deal_pays_zero(
        net in 0i64..10_000_000i64,
        guarantee in 0i64..1_000_000i64,
        split in 0u32..=100u32
    ) {
        let terms = deal(None, cents(guarantee), Decimal::from(split), Decimal::ZERO);
        prop_assert_eq!(PayoutCalculator::calculate(cents(net), &terms), Decimal::ZERO);
    }
}
