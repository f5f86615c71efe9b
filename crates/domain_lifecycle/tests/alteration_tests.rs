//! Alteration hook pricing and application.

use chrono::{TimeZone, Utc};

use core_kernel::{Currency, Money};
use domain_lifecycle::{
    apply_alteration, get_alteration, AlterationData, AlterationHook, LifecycleError,
};
use test_utils::TestPolicyBuilder;

fn mur(minor: i64) -> Money {
    Money::from_minor(minor, Currency::MUR)
}

fn alteration_data() -> AlterationData {
    AlterationData {
        cover_amount: mur(750_000),
        age: 35,
        gender: None,
    }
}

#[test]
fn test_unknown_alteration_key_is_an_error() {
    assert!("hook_1".parse::<AlterationHook>().is_ok());
    let err = "hook_2".parse::<AlterationHook>().unwrap_err();
    assert!(matches!(err, LifecycleError::UnknownAlterationHook(key) if key == "hook_2"));
}

#[test]
fn test_get_alteration_prices_the_uplift() {
    // sum_assured 500000, monthly 860, base 669
    let policy = TestPolicyBuilder::new().build();
    let package = get_alteration(AlterationHook::Hook1, &alteration_data(), &policy);

    assert_eq!(package.sum_assured, mur(599_900));
    assert_eq!(package.monthly_premium, mur(11_960));
    assert_eq!(package.change_description, "applying alteration hook 1");

    assert_eq!(package.module.package_name, "Funeral Cover");
    assert_eq!(package.module.base_premium, mur(11_769));
    assert_eq!(package.module.suggested_premium, mur(11_769));
    assert_eq!(package.module.cover_amount, mur(750_000));
    assert_eq!(package.module.age, 35);
    assert!(package.module.alteration_package_applied);
    assert_eq!(package.module.billing_frequency, "monthly");
}

#[test]
fn test_apply_alteration_extends_cover_two_years() {
    let policy = TestPolicyBuilder::new().build();
    let package = get_alteration(AlterationHook::Hook1, &alteration_data(), &policy);
    let now = Utc.with_ymd_and_hms(2025, 9, 15, 10, 0, 0).unwrap();

    let altered = apply_alteration(AlterationHook::Hook1, &policy, &package, now);

    assert_eq!(altered.package_name, "Funeral Cover");
    assert_eq!(altered.sum_assured, mur(611_000));
    assert_eq!(altered.monthly_premium, mur(23_060));
    assert_eq!(altered.base_premium, mur(22_869));
    assert_eq!(altered.start_date, policy.start_date);
    // Full timestamp, two years on from the application clock
    assert_eq!(
        altered.end_date,
        Utc.with_ymd_and_hms(2027, 9, 15, 10, 0, 0).unwrap()
    );
    assert_eq!(altered.charges, policy.charges);
}

#[test]
fn test_applied_module_shadows_policy_module() {
    let policy = TestPolicyBuilder::new().build();
    let package = get_alteration(AlterationHook::Hook1, &alteration_data(), &policy);
    let now = Utc.with_ymd_and_hms(2025, 9, 15, 10, 0, 0).unwrap();

    let altered = apply_alteration(AlterationHook::Hook1, &policy, &package, now);

    // Package fields win where both sides define the key.
    assert_eq!(
        altered.module["cover_amount"],
        serde_json::to_value(mur(750_000)).unwrap()
    );
    assert_eq!(altered.module["age"], 35);
    assert_eq!(altered.module["alteration_package_applied"], true);
    assert_eq!(altered.module["billing_frequency"], "monthly");
    // Policy-only fields survive the merge.
    assert_eq!(altered.module["type"], "root_funeral");
    assert_eq!(altered.module["spouse_included"], false);
}
