//! # Pipeline Properties
//!
//! Property tests over arbitrary and generated keys: classification is
//! deterministic and ordered, normalization is idempotent, and no public
//! operation panics.

use pixkey_core::{format, normalize, validate, KeyKind};
use proptest::prelude::*;

/// Append CPF check digits to nine base digits.
fn cpf_from_base(base: &[u32]) -> String {
    let check = |digits: &[u32]| {
        let len = digits.len() as u32;
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * (len + 1 - i as u32))
            .sum();
        (sum * 10) % 11 % 10
    };
    let mut digits = base.to_vec();
    let first = check(&digits);
    digits.push(first);
    let second = check(&digits);
    digits.push(second);
    digits.iter().map(|d| char::from_digit(*d, 10).unwrap_or('0')).collect()
}

proptest! {
    #[test]
    fn validate_is_deterministic_and_ordered(s in "\\PC{0,40}") {
        let first = validate(&s);
        prop_assert_eq!(&first, &validate(&s));
        let kinds = first.kinds();
        prop_assert!(kinds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn operations_never_panic(s in "[0-9()+ .@/a-z-]{0,24}") {
        let _ = validate(&s);
        let _ = normalize(&s, None);
        let _ = format(&s, None);
        for kind in KeyKind::all() {
            let _ = normalize(&s, Some(*kind));
            let _ = format(&s, Some(*kind));
        }
    }

    #[test]
    fn normalize_is_idempotent(s in "[0-9]{10,14}|\\+55[0-9]{10,11}|[a-z]{1,8}@[a-z]{1,8}\\.com") {
        if let Some(once) = normalize(&s, None) {
            prop_assert_eq!(normalize(&once, None), Some(once));
        }
    }

    #[test]
    fn generated_cpf_strips_punctuation(base in proptest::collection::vec(0u32..10, 9)) {
        let digits = cpf_from_base(&base);
        prop_assume!(!digits.chars().all(|c| Some(c) == digits.chars().next()));
        let punctuated = format!("{}.{}.{}-{}", &digits[..3], &digits[3..6], &digits[6..9], &digits[9..]);
        prop_assert!(validate(&punctuated).contains(KeyKind::NationalIdPerson));
        prop_assert_eq!(
            normalize(&punctuated, Some(KeyKind::NationalIdPerson)),
            Some(digits.clone())
        );
        prop_assert_eq!(format(&digits, Some(KeyKind::NationalIdPerson)), Some(punctuated));
    }

    #[test]
    fn random_keys_pass_through(bytes in any::<[u8; 16]>()) {
        let key = uuid::Uuid::from_bytes(bytes).to_string();
        let validation = validate(&key);
        prop_assert_eq!(validation.kinds(), &[KeyKind::RandomToken]);
        prop_assert_eq!(normalize(&key, None), Some(key.clone()));
        prop_assert_eq!(format(&key, None), Some(key));
    }
}
