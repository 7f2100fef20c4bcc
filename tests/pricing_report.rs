use pricing_desk::domain::{
    recompute, recompute_with, BusinessProfile, FixedCostAllocator, FixedCostMode, InfeasibleScope,
    InputError, Item, MarkupStrategy, PricingError, PricingSettings, RealizedMarkup,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn bakery() -> Vec<Item> {
    vec![
        Item::new("Sourdough", 50.0).with_practiced_price(90.0),
        Item::new("Baguette", 20.0).with_practiced_price(60.0),
    ]
}

#[test]
fn reference_profile_prices_a_fifty_dollar_item_at_102_04() {
    let profile = BusinessProfile::default();
    let report = recompute(&profile, &[Item::new("Widget", 50.0)], &PricingSettings::default())
        .expect("default profile is feasible");

    assert!(close(report.summary.load_factor, 0.51));
    assert!(close(report.summary.markup, 1.0 / 0.49));
    assert!(close(report.summary.break_even_revenue, 2_000.0 / 0.89));

    let result = report.rows[0].result().expect("item is priced");
    assert!((result.ideal_price() - 102.04).abs() < 0.01);
    // Contribution keeps everything but the variable rates and the unit cost.
    assert!(close(result.contribution_margin_ideal_pct(), 100.0 * (0.51 - 0.11)));
    assert!(result.practiced.is_none());
}

#[test]
fn ideal_contribution_margin_does_not_depend_on_unit_cost() {
    let items = vec![
        Item::new("Sticker", 0.5),
        Item::new("Mug", 20.0),
        Item::new("Espresso machine", 900.0),
    ];
    let report = recompute(&BusinessProfile::default(), &items, &PricingSettings::default())
        .expect("feasible");
    let expected =
        100.0 * (report.summary.load_factor - report.summary.variable_rate);

    for row in &report.rows {
        let margin = row.result().expect("priced").contribution_margin_ideal_pct();
        assert!(close(margin, expected), "{}: {margin} != {expected}", row.name);
    }
}

#[test]
fn an_overflowing_price_fails_only_its_row() {
    let items = vec![Item::new("Scone", 3.0), Item::new("Castle", 1e308)];
    let report = recompute(&BusinessProfile::default(), &items, &PricingSettings::default())
        .expect("other rows still price");

    assert_eq!(report.rows.len(), 2);
    assert!(report.rows[0].result().is_some());
    let err = report.rows[1].error().expect("row fails");
    assert!(err.is_infeasible());
    assert_eq!(report.priced_count(), 1);
}

#[test]
fn rows_follow_registration_order() {
    let report = recompute(&BusinessProfile::default(), &bakery(), &PricingSettings::default())
        .expect("feasible");

    let names: Vec<_> = report.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["Sourdough", "Baguette"]);
    assert_eq!(report.rows[1].position, 2);
    assert_eq!(report.priced_count(), 2);
}

#[test]
fn recompute_is_idempotent() {
    let profile = BusinessProfile::default();
    let settings = PricingSettings {
        strategy: MarkupStrategy::TargetContribution,
        fixed_cost_mode: FixedCostMode::PerItemAllocation,
        ..PricingSettings::default()
    };

    let first = recompute(&profile, &bakery(), &settings).expect("feasible");
    let second = recompute(&profile, &bakery(), &settings).expect("feasible");
    assert_eq!(first, second);
}

#[test]
fn practiced_margins_use_the_equal_fixed_cost_share() {
    let report = recompute(&BusinessProfile::default(), &bakery(), &PricingSettings::default())
        .expect("feasible");
    let sourdough = report.rows[0].result().expect("priced");
    let practiced = sourdough.practiced.as_ref().expect("practiced price set");

    // 90 - 50 - 11% of 90 = 30.1, minus half of the 2000 fixed cost.
    assert!(close(practiced.contribution, 30.1));
    assert!(close(practiced.allocated_fixed_cost, 1_000.0));
    assert!(close(practiced.net_profit, 30.1 - 1_000.0));
    assert!(close(practiced.net_margin_pct, 100.0 * (30.1 - 1_000.0) / 90.0));
    assert_eq!(practiced.markup, RealizedMarkup::Defined(1.8));

    let flags = report.rows[0].flags;
    assert!(flags.negative_net_margin);
    assert!(flags.contribution_below_ideal);
}

#[test]
fn a_load_factor_of_one_hundred_percent_aborts_the_recompute() {
    let profile = BusinessProfile {
        forecast_revenue: 1_000.0,
        total_fixed_cost: 500.0,
        tax_rate: 0.25,
        fee_rate: 0.0,
        commission_rate: 0.125,
        profit_rate: 0.125,
        reserve_rate: 0.0,
    };

    let err = recompute(&profile, &bakery(), &PricingSettings::default()).unwrap_err();
    match err {
        PricingError::InfeasibleConfiguration { scope, denominator } => {
            assert_eq!(scope, InfeasibleScope::Global);
            assert_eq!(denominator, 0.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The same rates are feasible once the fixed share leaves the load factor.
    let per_item = PricingSettings {
        fixed_cost_mode: FixedCostMode::PerItemAllocation,
        ..PricingSettings::default()
    };
    assert!(recompute(&profile, &bakery(), &per_item).is_ok());
}

#[test]
fn zero_cost_items_have_an_undefined_markup() {
    let items = vec![Item::new("Gift wrap", 0.0).with_practiced_price(5.0)];
    let report = recompute(&BusinessProfile::default(), &items, &PricingSettings::default())
        .expect("feasible");
    let result = report.rows[0].result().expect("priced");

    assert_eq!(result.ideal_price(), 0.0);
    assert_eq!(result.contribution_margin_ideal_pct(), 0.0);
    assert_eq!(result.markup_ideal(), RealizedMarkup::Undefined);
    assert_eq!(
        result.markup_ideal().value("Gift wrap"),
        Err(PricingError::UndefinedMarkup {
            item: "Gift wrap".to_string()
        })
    );
    assert_eq!(result.markup_practiced(), Some(RealizedMarkup::Undefined));
}

#[test]
fn per_item_allocation_adds_the_share_to_the_cost_basis() {
    let settings = PricingSettings {
        fixed_cost_mode: FixedCostMode::PerItemAllocation,
        ..PricingSettings::default()
    };
    let report = recompute(&BusinessProfile::default(), &bakery(), &settings).expect("feasible");

    assert!(close(report.summary.load_factor, 0.31));
    let baguette = report.rows[1].result().expect("priced");
    assert!(close(baguette.ideal_price(), (20.0 + 1_000.0) / 0.69));
    // At the ideal price the share is fully covered.
    assert!(baguette.ideal.net_profit > 0.0);
}

#[test]
fn target_contribution_matches_cost_plus_on_global_average() {
    let profile = BusinessProfile::default();
    let cost_plus = recompute(&profile, &bakery(), &PricingSettings::default()).expect("feasible");
    let target = recompute(
        &profile,
        &bakery(),
        &PricingSettings {
            strategy: MarkupStrategy::TargetContribution,
            ..PricingSettings::default()
        },
    )
    .expect("feasible");

    for (a, b) in cost_plus.rows.iter().zip(&target.rows) {
        let a = a.result().expect("priced").ideal_price();
        let b = b.result().expect("priced").ideal_price();
        assert!(close(a, b));
    }
    assert_eq!(target.summary.strategy, MarkupStrategy::TargetContribution);
}

struct ByUnitCost;

impl FixedCostAllocator for ByUnitCost {
    fn allocate(&self, total_fixed_cost: f64, items: &[Item]) -> Vec<f64> {
        let total: f64 = items.iter().map(|item| item.unit_variable_cost).sum();
        items
            .iter()
            .map(|item| total_fixed_cost * item.unit_variable_cost / total)
            .collect()
    }
}

#[test]
fn custom_allocators_drive_net_profit() {
    let report = recompute_with(
        &BusinessProfile::default(),
        &bakery(),
        &PricingSettings::default(),
        &ByUnitCost,
    )
    .expect("feasible");

    let shares: Vec<_> = report
        .rows
        .iter()
        .map(|row| row.result().expect("priced").ideal.allocated_fixed_cost)
        .collect();
    assert!(close(shares[0], 2_000.0 * 50.0 / 70.0));
    assert!(close(shares[1], 2_000.0 * 20.0 / 70.0));
}

#[test]
fn invalid_inputs_abort_before_pricing() {
    let items = vec![Item::new("Scone", 3.0), Item::new("  ", 4.0)];
    let err = recompute(&BusinessProfile::default(), &items, &PricingSettings::default())
        .unwrap_err();
    assert_eq!(
        err,
        PricingError::InvalidInput(InputError::EmptyItemName { position: 2 })
    );

    let err = recompute(&BusinessProfile::default(), &[], &PricingSettings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        PricingError::InvalidInput(InputError::ItemCount { count: 0, .. })
    ));
}

#[test]
fn variable_rates_of_one_hundred_percent_are_infeasible() {
    let profile = BusinessProfile {
        tax_rate: 0.5,
        fee_rate: 0.25,
        commission_rate: 0.25,
        profit_rate: 0.0,
        reserve_rate: 0.0,
        forecast_revenue: 0.0,
        ..BusinessProfile::default()
    };

    let err = recompute(&profile, &bakery(), &PricingSettings::default()).unwrap_err();
    assert!(err.is_infeasible());
}

struct FirstItemOnly;

impl FixedCostAllocator for FirstItemOnly {
    fn allocate(&self, total_fixed_cost: f64, _items: &[Item]) -> Vec<f64> {
        vec![total_fixed_cost]
    }
}

#[test]
fn allocators_must_return_one_share_per_item() {
    let items = vec![
        Item::new("Scone", 3.0),
        Item::new("Tart", 4.0),
        Item::new("Pie", 9.0),
    ];
    let err = recompute_with(
        &BusinessProfile::default(),
        &items,
        &PricingSettings::default(),
        &FirstItemOnly,
    )
    .unwrap_err();

    assert_eq!(
        err,
        PricingError::InvalidInput(InputError::AllocationMismatch {
            expected: 3,
            got: 1
        })
    );
}
