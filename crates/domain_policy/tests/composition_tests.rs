//! Quote -> application -> policy composition, end to end.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Timezone};
use domain_policy::{
    issue_policy, requote_policy, Application, ApplicationChecks, ApplicationComposer,
    ApplicationRequest, Charge, PersonDetails, Policyholder, Quote, QuoteComposer, PACKAGE_TYPE,
};
use domain_rating::{Child, Gender, HouseholdMember, QuoteRequest, RateTables};

fn composer() -> QuoteComposer {
    QuoteComposer::new(
        RateTables::load().unwrap(),
        Timezone::new(chrono_tz::Indian::Mauritius),
    )
}

fn mur(minor: i64) -> Money {
    Money::from_minor(minor, Currency::MUR)
}

fn quote_main_thirty_male() -> Quote {
    let request = QuoteRequest::main_member_only(mur(500_000), 30, Some(Gender::Male));
    composer().quote(&request).unwrap()
}

#[test]
fn test_quote_for_thirty_year_old_male() {
    let quote = quote_main_thirty_male();

    assert_eq!(quote.package_name, "Funeral Cover: Main Member");
    assert_eq!(quote.sum_assured, mur(500_000));
    assert_eq!(quote.base_premium, mur(669));
    assert_eq!(quote.suggested_premium, mur(860));
    assert_eq!(
        quote.terms,
        vec!["No claim for natural death in first 3 months.".to_string()]
    );
    assert_eq!(quote.module.module_type, PACKAGE_TYPE);
}

#[test]
fn test_full_household_quote_names_family_package() {
    let mut request = QuoteRequest::main_member_only(mur(500_000), 30, None);
    request.spouse_included = true;
    request.spouse_cover_amount = Some(mur(300_000));
    request.spouse = Some(HouseholdMember {
        age: 28,
        gender: None,
    });
    request.children_included = true;
    request.children_cover_amount = Some(mur(100_000));
    request.children = Some(vec![Child { age: 4 }]);
    request.extended_family_included = true;
    request.extended_family_cover_amount = Some(mur(200_000));
    request.extended_family = Some(vec![HouseholdMember {
        age: 60,
        gender: Some(Gender::Female),
    }]);

    let quote = composer().quote(&request).unwrap();
    assert_eq!(
        quote.package_name,
        "Funeral Cover: Family & Extended Family"
    );
    assert_eq!(quote.terms.len(), 2);
    assert!(quote.terms[1].starts_with("Cover for children terminates"));
}

#[test]
fn test_application_carries_quoted_premiums_without_repricing() {
    let quote = quote_main_thirty_male();
    let application = ApplicationComposer::default()
        .application(
            &ApplicationRequest::default(),
            &Policyholder::default(),
            &quote,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .unwrap();

    assert_eq!(application.package_name, quote.package_name);
    assert_eq!(application.sum_assured, quote.sum_assured);
    assert_eq!(application.base_premium, quote.base_premium);
    assert_eq!(application.monthly_premium, quote.suggested_premium);
    assert_eq!(application.module.cover_amount, quote.module.cover_amount);
    assert_eq!(application.module.timezone.name(), "Indian/Mauritius");
}

#[test]
fn test_application_replaces_anonymous_members_with_named_people() {
    let mut request = QuoteRequest::main_member_only(mur(500_000), 30, None);
    request.children_included = true;
    request.children_cover_amount = Some(mur(100_000));
    request.children = Some(vec![Child { age: 4 }]);
    let quote = composer().quote(&request).unwrap();

    let application_request = ApplicationRequest {
        children: Some(vec![PersonDetails {
            first_name: "Devi".to_string(),
            last_name: "Curpen".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2021, 2, 10).unwrap(),
        }]),
        ..Default::default()
    };
    let application = ApplicationComposer::default()
        .application(
            &application_request,
            &Policyholder::default(),
            &quote,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .unwrap();

    let children = application.module.children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].first_name, "Devi");
    assert!(application.module.children_included);
}

fn issued_policy(application: &Application) -> domain_policy::Policy {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
    issue_policy(application, &Policyholder::default(), now)
}

#[test]
fn test_issued_policy_runs_for_one_year_with_zero_balance() {
    let quote = quote_main_thirty_male();
    let application = ApplicationComposer::default()
        .application(
            &ApplicationRequest::default(),
            &Policyholder::default(),
            &quote,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .unwrap();
    let policy = issued_policy(&application);

    assert_eq!(
        policy.start_date,
        Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap()
    );
    assert_eq!(
        policy.end_date,
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap()
    );
    assert!(policy.balance.is_zero());
    assert_eq!(policy.monthly_premium, mur(860));
}

#[test]
fn test_issued_policy_charge_schedule() {
    let quote = quote_main_thirty_male();
    let application = ApplicationComposer::default()
        .application(
            &ApplicationRequest::default(),
            &Policyholder::default(),
            &quote,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .unwrap();
    let policy = issued_policy(&application);

    assert_eq!(policy.charges.len(), 3);
    match &policy.charges[0] {
        Charge::Fixed { name, amount, .. } => {
            assert_eq!(name, "Fixed Fee");
            assert_eq!(*amount, mur(1000));
        }
        other => panic!("expected fixed charge, got {other:?}"),
    }
    match &policy.charges[1] {
        Charge::Variable { rate, .. } => assert_eq!(*rate, dec!(0.1)),
        other => panic!("expected variable charge, got {other:?}"),
    }
    assert!(matches!(&policy.charges[2], Charge::Balance { .. }));
}

#[test]
fn test_requote_runs_a_new_year_from_now() {
    let quote = quote_main_thirty_male();
    let application = ApplicationComposer::default()
        .application(
            &ApplicationRequest::default(),
            &Policyholder::default(),
            &quote,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .unwrap();
    let policy = issued_policy(&application);

    let now = Utc.with_ymd_and_hms(2025, 10, 20, 9, 0, 0).unwrap();
    let requoted = requote_policy(&policy, &Policyholder::default(), &application, now);
    assert_eq!(
        requoted.end_date,
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    );
    assert_eq!(requoted.monthly_premium, application.monthly_premium);
    assert_eq!(requoted.module, application.module);
    assert_eq!(
        serde_json::to_value(&requoted).unwrap()["end_date"],
        "2026-10-20"
    );
}

mod gated_checks {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn quote_with_children() -> Quote {
        let mut request = QuoteRequest::main_member_only(mur(500_000), 30, None);
        request.children_included = true;
        request.children_cover_amount = Some(mur(100_000));
        request.children = Some(vec![Child { age: 4 }, Child { age: 9 }]);
        composer().quote(&request).unwrap()
    }

    #[test]
    fn test_checks_disabled_by_default() {
        // A mismatching application passes while every switch is off.
        let application = ApplicationComposer::default().application(
            &ApplicationRequest::default(),
            &Policyholder::default(),
            &quote_with_children(),
            as_of(),
        );
        assert!(application.is_ok());
    }

    #[test]
    fn test_child_count_must_match_when_enabled() {
        let composer = ApplicationComposer::new(ApplicationChecks {
            children_match_quote: true,
            ..Default::default()
        });
        let err = composer
            .application(
                &ApplicationRequest::default(),
                &Policyholder::default(),
                &quote_with_children(),
                as_of(),
            )
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("Incorrect number of children provided. Expected: 2"));
    }

    #[test]
    fn test_child_ages_checked_against_quote() {
        let composer = ApplicationComposer::new(ApplicationChecks {
            children_match_quote: true,
            ..Default::default()
        });
        let request = ApplicationRequest {
            children: Some(vec![
                PersonDetails {
                    first_name: "Devi".to_string(),
                    last_name: "Curpen".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(2021, 2, 10).unwrap(),
                },
                PersonDetails {
                    first_name: "Ravi".to_string(),
                    last_name: "Curpen".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(2018, 2, 10).unwrap(),
                },
            ]),
            ..Default::default()
        };
        // Ages come out as 4 and 7, quote expects 4 and 9.
        let err = composer
            .application(
                &request,
                &Policyholder::default(),
                &quote_with_children(),
                as_of(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("Child ages do not match quote"));
    }

    #[test]
    fn test_policyholder_age_eligibility_bounds() {
        let composer = ApplicationComposer::new(ApplicationChecks {
            policyholder_age_eligible: true,
            ..Default::default()
        });
        let quote = quote_main_thirty_male();

        let minor = Policyholder {
            date_of_birth: NaiveDate::from_ymd_opt(2010, 1, 1),
            ..Default::default()
        };
        let err = composer
            .application(&ApplicationRequest::default(), &minor, &quote, as_of())
            .unwrap_err();
        assert!(err.to_string().contains("older than 18"));

        let senior = Policyholder {
            date_of_birth: NaiveDate::from_ymd_opt(1950, 1, 1),
            ..Default::default()
        };
        let err = composer
            .application(&ApplicationRequest::default(), &senior, &quote, as_of())
            .unwrap_err();
        assert!(err.to_string().contains("can't be older than 70"));
    }

    #[test]
    fn test_gendered_quote_requires_matching_policyholder_gender() {
        let composer = ApplicationComposer::new(ApplicationChecks {
            policyholder_gender_matches_quote: true,
            ..Default::default()
        });
        let quote = quote_main_thirty_male();

        let err = composer
            .application(
                &ApplicationRequest::default(),
                &Policyholder::default(),
                &quote,
                as_of(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("does not have gender set"));

        let mismatched = Policyholder {
            gender: Some(Gender::Female),
            ..Default::default()
        };
        let err = composer
            .application(&ApplicationRequest::default(), &mismatched, &quote, as_of())
            .unwrap_err();
        assert!(err.to_string().contains("does not match quoted gender"));

        let matched = Policyholder {
            gender: Some(Gender::Male),
            ..Default::default()
        };
        assert!(composer
            .application(&ApplicationRequest::default(), &matched, &quote, as_of())
            .is_ok());
    }
}
