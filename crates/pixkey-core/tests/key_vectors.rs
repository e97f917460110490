//! # Published Key Vectors
//!
//! End-to-end checks of `validate`, `normalize` and `format` with the
//! standard recognizers and the default region (`BR`).

use pixkey_core::{format, normalize, validate, KeyKind};

use KeyKind::{
    EmailAddress as Email, NationalIdOrg as Cnpj, NationalIdPerson as Cpf, PhoneNumber as Phone,
    RandomToken as Random,
};

const UUID: &str = "37046cb5-d25d-4480-bb66-5ee5bff8ad1f";

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_cpf() {
    assert_eq!(validate("036.376.490-98").kinds(), &[Cpf]);
    assert_eq!(validate("03637649098").kinds(), &[Cpf]);
    assert!(validate("03637649099").is_empty());
}

#[test]
fn validate_cnpj() {
    assert_eq!(validate("84.870.394/0001-29").kinds(), &[Cnpj]);
    assert_eq!(validate("84870394000129").kinds(), &[Cnpj]);
    assert!(validate("84870394000128").is_empty());
}

#[test]
fn validate_email() {
    assert_eq!(validate("johndoe@test.com").kinds(), &[Email]);
    assert!(validate("john doe@test.com").is_empty());
}

#[test]
fn validate_phone() {
    for raw in [
        "+5511987654321",
        "+13239851920",
        "11987654321",
        "(11) 98765-4321",
        "011987654321",
    ] {
        assert_eq!(validate(raw).kinds(), &[Phone], "input {raw}");
    }
    assert!(validate("0119987654321").is_empty());
}

#[test]
fn validate_rejects_landlines() {
    for raw in ["1133334444", "+551133334444", "(11) 3333-4444", "6132125000"] {
        assert!(validate(raw).is_empty(), "input {raw}");
        assert_eq!(normalize(raw, None), None, "input {raw}");
        assert_eq!(format(raw, Some(Phone)), None, "input {raw}");
    }
}

#[test]
fn validate_random() {
    assert_eq!(validate(UUID).kinds(), &[Random]);
}

#[test]
fn validate_reports_overlap_in_priority_order() {
    assert_eq!(validate("85966078033").kinds(), &[Cpf, Phone]);
}

#[test]
fn validate_trims_whitespace() {
    assert_eq!(validate("  johndoe@test.com \t").kinds(), &[Email]);
}

#[test]
fn validate_unmatched() {
    assert!(validate("not a key at all").is_empty());
    assert!(validate("").is_empty());
    assert!(validate("   ").is_empty());
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

#[test]
fn normalize_national_ids() {
    assert_eq!(normalize("036.376.490-98", None).as_deref(), Some("03637649098"));
    assert_eq!(normalize("03637649098", None).as_deref(), Some("03637649098"));
    assert_eq!(normalize("84870394000129", None).as_deref(), Some("84870394000129"));
    assert_eq!(normalize("84.870.394/0001-29", None).as_deref(), Some("84870394000129"));
}

#[test]
fn normalize_random_and_email() {
    assert_eq!(normalize(UUID, None).as_deref(), Some(UUID));
    assert_eq!(normalize("johndoe@test.com", None).as_deref(), Some("johndoe@test.com"));
}

#[test]
fn normalize_phone() {
    assert_eq!(normalize("+5511987654321", None).as_deref(), Some("+5511987654321"));
    assert_eq!(normalize("+13239851920", None).as_deref(), Some("+13239851920"));
    assert_eq!(normalize("11987654321", None).as_deref(), Some("+5511987654321"));
    assert_eq!(normalize("(11) 98765-4321", None).as_deref(), Some("+5511987654321"));
    assert_eq!(normalize("011987654321", None).as_deref(), Some("+5511987654321"));
}

#[test]
fn normalize_dual_key() {
    assert_eq!(normalize("85966078033", None), None);
    assert_eq!(normalize("85966078033", Some(Cpf)).as_deref(), Some("85966078033"));
    assert_eq!(normalize("85966078033", Some(Phone)).as_deref(), Some("+5585966078033"));
}

#[test]
fn normalize_hint_outside_match_set() {
    // Single match: the hint is irrelevant.
    assert_eq!(normalize("johndoe@test.com", Some(Cpf)).as_deref(), Some("johndoe@test.com"));
    // Several matches: a hint naming none of them is refused.
    assert_eq!(normalize("85966078033", Some(Email)), None);
}

#[test]
fn normalize_unmatched() {
    assert_eq!(normalize("not a key at all", None), None);
}

// ---------------------------------------------------------------------------
// format
// ---------------------------------------------------------------------------

#[test]
fn format_national_ids() {
    assert_eq!(format("036.376.490-98", None).as_deref(), Some("036.376.490-98"));
    assert_eq!(format("03637649098", None).as_deref(), Some("036.376.490-98"));
    assert_eq!(format("84870394000129", None).as_deref(), Some("84.870.394/0001-29"));
    assert_eq!(format("84.870.394/0001-29", None).as_deref(), Some("84.870.394/0001-29"));
}

#[test]
fn format_random_and_email() {
    assert_eq!(format(UUID, None).as_deref(), Some(UUID));
    assert_eq!(format("johndoe@test.com", None).as_deref(), Some("johndoe@test.com"));
}

#[test]
fn format_home_phone() {
    for raw in ["+5511987654321", "11987654321", "(11) 98765-4321", "011987654321"] {
        assert_eq!(format(raw, None).as_deref(), Some("(11) 98765-4321"), "input {raw}");
    }
}

#[test]
fn format_foreign_phone() {
    assert_eq!(format("+13239851920", None).as_deref(), Some("+1 323 985 1920"));
}

#[test]
fn format_dual_key() {
    assert_eq!(format("85966078033", Some(Cpf)).as_deref(), Some("859.660.780-33"));
    assert_eq!(format("85966078033", Some(Phone)).as_deref(), Some("(85) 96607-8033"));
    assert_eq!(format("85966078033", None), None);
}

#[test]
fn format_round_trips_to_same_phone() {
    let shown = format("11987654321", None).unwrap();
    assert_eq!(normalize(&shown, None), normalize("11987654321", None));
}

#[test]
fn format_unmatched() {
    assert_eq!(format("not a key at all", None), None);
}
