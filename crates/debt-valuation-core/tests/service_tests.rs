use chrono::{Duration, NaiveDate};
use debt_valuation_core::{DebtInstrument, Installment, InstrumentService, MemoryStore};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Helpers
// ===========================================================================

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn entry(id: &str, reference: NaiveDate, days_overdue: &[i64]) -> DebtInstrument {
    DebtInstrument {
        id: id.into(),
        debtor_name: "Fulano".into(),
        debtor_tax_id: "12345678901".into(),
        monthly_interest_rate: dec!(0.01),
        penalty_rate: dec!(0.02),
        installments: days_overdue
            .iter()
            .enumerate()
            .map(|(i, days)| Installment {
                number: (i + 1) as i32,
                due_date: (reference - Duration::days(*days)).format("%Y-%m-%d").to_string(),
                face_value: dec!(100),
            })
            .collect(),
    }
}

fn service() -> InstrumentService<MemoryStore> {
    InstrumentService::new(MemoryStore::new())
}

// ===========================================================================
// Create
// ===========================================================================

#[test]
fn test_create_returns_valuation_of_the_entry() {
    let reference = reference();
    let service = service();

    let out = service
        .create_as_of(entry("101010", reference, &[73, 42, 11]), reference)
        .unwrap();

    assert_eq!(out.result.id, "101010");
    assert_eq!(out.result.installment_count, 3);
    assert_eq!(out.result.original_value, dec!(300));
    assert!(out.result.adjusted_value > out.result.original_value);
}

#[test]
fn test_create_persists_the_entry() {
    let reference = reference();
    let service = service();

    service
        .create_as_of(entry("2020", reference, &[5]), reference)
        .unwrap();

    let listed = service.list_as_of(reference).unwrap();
    assert_eq!(listed.result.len(), 1);
    assert_eq!(listed.result[0].id, "2020");
}

#[test]
fn test_create_matches_subsequent_listing() {
    // Create and list against the same reference date must agree exactly:
    // valuations are derived, not stored.
    let reference = reference();
    let service = service();

    let created = service
        .create_as_of(entry("X", reference, &[73, 42, 11]), reference)
        .unwrap();
    let listed = service.list_as_of(reference).unwrap();

    assert_eq!(listed.result[0], created.result);
}

// ===========================================================================
// List
// ===========================================================================

#[test]
fn test_list_empty_store() {
    let listed = service().list_as_of(reference()).unwrap();
    assert!(listed.result.is_empty());
    assert!(listed.warnings.is_empty());
}

#[test]
fn test_list_returns_all_in_insertion_order() {
    let reference = reference();
    let service = service();

    for id in ["A", "B", "C"] {
        service
            .create_as_of(entry(id, reference, &[10]), reference)
            .unwrap();
    }

    let listed = service.list_as_of(reference).unwrap();
    let ids: Vec<&str> = listed.result.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_list_recomputes_against_the_given_date() {
    // The same stored instrument valued on a later date accrues more
    // interest: nothing about the first listing is cached.
    let reference = reference();
    let service = service();
    service
        .create_as_of(entry("R", reference, &[30]), reference)
        .unwrap();

    let on_reference = service.list_as_of(reference).unwrap();
    let a_month_later = service.list_as_of(reference + Duration::days(30)).unwrap();

    assert_eq!(on_reference.result[0].installments[0].days_overdue, 30);
    assert_eq!(a_month_later.result[0].installments[0].days_overdue, 60);
    assert!(a_month_later.result[0].adjusted_value > on_reference.result[0].adjusted_value);
}

#[test]
fn test_list_merges_warnings_per_instrument() {
    let reference = reference();
    let service = service();

    let mut bad = entry("bad", reference, &[1]);
    bad.installments[0].due_date = "soon".into();
    service.create_as_of(bad, reference).unwrap();
    service
        .create_as_of(entry("good", reference, &[1]), reference)
        .unwrap();

    let listed = service.list_as_of(reference).unwrap();
    assert_eq!(listed.result.len(), 2);
    assert_eq!(listed.warnings.len(), 1);
    assert!(listed.warnings[0].contains("soon"));
}
