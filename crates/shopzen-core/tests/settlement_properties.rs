//! Property-based tests for the settlement engine.
//!
//! Run with: `cargo test -p shopzen-core --test settlement_properties`

use proptest::prelude::*;
use rust_decimal::Decimal;
use shopzen_core::validation::{parse_amount, parse_percent, validate_tax_rate};
use shopzen_core::{
    breakdown, settle, Cart, CatalogEntry, GlobalDiscount, LineItem, Money, Percent,
    SettlementParameters, MAX_AMOUNT_CENTS,
};

// ── Strategies ──────────────────────────────────────────────────────────────

/// (unit price cents, quantity, line discount whole %)
fn arb_line() -> impl Strategy<Value = (i64, i64, i64)> {
    (0i64..500_000, 1i64..50, 0i64..=100)
}

fn arb_cart() -> impl Strategy<Value = Cart> {
    prop::collection::vec(arb_line(), 0..12).prop_map(|lines| {
        let mut cart = Cart::new();
        for (i, (cents, qty, discount)) in lines.into_iter().enumerate() {
            let id = format!("item-{}", i);
            cart.add(
                CatalogEntry::new(id.clone(), id.clone(), Money::from_cents(cents)),
                qty,
            )
            .unwrap();
            cart.set_discount(&id, Percent::from_whole(discount)).unwrap();
        }
        cart
    })
}

/// Percent in basis points, 0% to 100%.
fn arb_percent() -> impl Strategy<Value = Percent> {
    (0i64..=10_000).prop_map(Percent::from_bps)
}

fn arb_params() -> impl Strategy<Value = SettlementParameters> {
    (arb_percent(), (0i64..=5_000), 0i64..5_000_000).prop_map(|(discount, tax_bps, paid)| {
        SettlementParameters::new(discount, Percent::from_bps(tax_bps))
            .with_amount_paid(Money::from_cents(paid))
    })
}

/// Any percentage `Decimal` can hold, from tiny fractions to `Decimal::MAX`.
fn arb_wild_percent() -> impl Strategy<Value = Percent> {
    prop_oneof![
        (any::<i64>(), 0u32..=28).prop_map(|(m, scale)| Percent::new(Decimal::new(m, scale))),
        Just(Percent::new(Decimal::MAX)),
        Just(Percent::new(Decimal::MIN)),
    ]
}

/// Lines built directly, bypassing the cart's limits.
fn arb_wild_lines() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(
        (any::<i64>(), any::<i64>(), arb_wild_percent()),
        0..6,
    )
    .prop_map(|lines| {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, (cents, quantity, discount))| LineItem {
                id: i.to_string(),
                name: format!("Line {}", i),
                unit_price: Money::from_cents(cents),
                quantity,
                discount,
            })
            .collect()
    })
}

fn arb_wild_params() -> impl Strategy<Value = SettlementParameters> {
    (
        prop_oneof![
            arb_wild_percent().prop_map(GlobalDiscount::Percent),
            any::<i64>().prop_map(|c| GlobalDiscount::Flat(Money::from_cents(c))),
        ],
        arb_wild_percent(),
        any::<i64>(),
    )
        .prop_map(|(global_discount, tax_rate, paid)| SettlementParameters {
            global_discount,
            tax_rate,
            amount_paid: Money::from_cents(paid),
        })
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// subtotal = Σ unit_price × qty × (1 − line_discount/100)
    #[test]
    fn subtotal_is_sum_of_discounted_lines(cart in arb_cart(), params in arb_params()) {
        let expected: Decimal = cart
            .lines()
            .iter()
            .map(|l| {
                l.unit_price.to_decimal()
                    * Decimal::from(l.quantity)
                    * (Decimal::ONE - l.discount.value() / Decimal::ONE_HUNDRED)
            })
            .sum();

        prop_assert_eq!(settle(cart.lines(), &params).subtotal, expected);
    }

    #[test]
    fn figures_are_non_negative_for_in_range_inputs(cart in arb_cart(), params in arb_params()) {
        let r = settle(cart.lines(), &params);

        prop_assert!(r.subtotal >= Decimal::ZERO);
        prop_assert!(r.tax_amount >= Decimal::ZERO);
        prop_assert!(r.grand_total >= Decimal::ZERO);
        prop_assert!(r.balance_due >= Decimal::ZERO);
    }

    #[test]
    fn grand_total_and_balance_invariants(cart in arb_cart(), params in arb_params()) {
        let r = settle(cart.lines(), &params);

        prop_assert_eq!(r.grand_total, (r.subtotal - r.global_discount_amount) + r.tax_amount);
        prop_assert_eq!(
            r.balance_due,
            (r.grand_total - params.amount_paid.to_decimal()).max(Decimal::ZERO)
        );
    }

    #[test]
    fn settling_twice_is_identical(cart in arb_cart(), params in arb_params()) {
        prop_assert_eq!(settle(cart.lines(), &params), settle(cart.lines(), &params));
    }

    #[test]
    fn raising_tax_never_lowers_grand_total(
        cart in arb_cart(),
        discount in arb_percent(),
        low in 0i64..=5_000,
        bump in 0i64..=5_000,
    ) {
        let lower = SettlementParameters::new(discount, Percent::from_bps(low));
        let higher = SettlementParameters::new(discount, Percent::from_bps(low + bump));

        prop_assert!(
            settle(cart.lines(), &higher).grand_total >= settle(cart.lines(), &lower).grand_total
        );
    }

    /// The engine is total over the whole input range: no panics, and the
    /// balance never goes below zero.
    #[test]
    fn settle_never_panics_on_extreme_inputs(
        lines in arb_wild_lines(),
        params in arb_wild_params(),
    ) {
        let r = settle(&lines, &params);
        let totals = r.rounded();
        let nets: Vec<Money> = breakdown(&lines).iter().map(|l| l.net_rounded()).collect();

        prop_assert_eq!(nets.len(), lines.len());

        prop_assert!(r.balance_due >= Decimal::ZERO);
        prop_assert!(totals.balance_due.cents() >= 0);
    }

    /// Typed amounts either parse inside the accepted range or are rejected.
    #[test]
    fn parsed_amounts_stay_in_range(digits in "-?[0-9]{1,40}(\\.[0-9]{1,6})?") {
        if let Ok(amount) = parse_amount("price", &digits) {
            prop_assert!(amount.cents().abs() <= MAX_AMOUNT_CENTS);
        }
        if let Ok(rate) = parse_percent("tax rate", &digits) {
            if validate_tax_rate(rate).is_ok() {
                prop_assert!(rate.value() >= Decimal::ZERO);
                prop_assert!(rate.value() <= Decimal::ONE_HUNDRED);
            }
        }
    }

    /// Line order never changes the result.
    #[test]
    fn settlement_is_order_independent(cart in arb_cart(), params in arb_params()) {
        let mut reversed = cart.lines().to_vec();
        reversed.reverse();

        prop_assert_eq!(settle(cart.lines(), &params), settle(&reversed, &params));
    }
}

#[test]
fn empty_cart_is_all_zero() {
    let params = SettlementParameters::new(Percent::from_whole(5), Percent::from_whole(10));
    let r = settle(Cart::new().lines(), &params).rounded();

    assert!(r.subtotal.is_zero());
    assert!(r.global_discount_amount.is_zero());
    assert!(r.tax_amount.is_zero());
    assert!(r.grand_total.is_zero());
    assert!(r.balance_due.is_zero());
}
