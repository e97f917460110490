//! # Phone Keys
//!
//! Dialing-plan aware parsing and formatting backed by the `phonenumber`
//! crate (Google libphonenumber metadata). A number without a `+` country
//! code is interpreted as dialed from the default [`Region`]; national
//! trunk prefixes (`0` in Brazil) are stripped by the parser.
//!
//! Only mobile numbers are PIX keys. A number must be valid for its region
//! and typed [`Type::Mobile`], or [`Type::FixedLineOrMobile`] where the
//! dialing plan cannot tell the two apart (NANP numbers, for instance).

use phonenumber::metadata::DATABASE;
use phonenumber::{country, Mode, PhoneNumber, Type};

use crate::error::RecognizerError;
use crate::recognize::ParsedPhone;
use crate::region::Region;

/// Whether `s` is a valid mobile number when dialed from `region`.
///
/// Returns `false` for unknown regions instead of failing.
pub fn is_phone_number(s: &str, region: Region) -> bool {
    match parse_number(s, region) {
        Ok(number) => is_valid_mobile(&number),
        Err(_) => false,
    }
}

/// Parse `s` dialed from `region` and render all of its forms.
///
/// # Errors
///
/// Returns [`RecognizerError::PhoneParse`] if the region is unknown to the
/// metadata, the input is not a phone number, or the parsed number is not
/// a valid mobile number for its region.
pub fn parse(s: &str, region: Region) -> Result<ParsedPhone, RecognizerError> {
    let number = parse_number(s, region)?;
    if !is_valid_mobile(&number) {
        return Err(RecognizerError::PhoneParse {
            input: s.to_string(),
            reason: "not a valid mobile number for its region".to_string(),
        });
    }

    let region = number
        .country()
        .id()
        .and_then(|id| Region::new(format!("{id:?}")).ok());

    Ok(ParsedPhone {
        full_international: number.format().mode(Mode::E164).to_string(),
        region,
        country_code: number.code().value(),
        national_display: number.format().mode(Mode::National).to_string(),
        international_display: space_separated(&number.format().mode(Mode::International).to_string()),
    })
}

fn is_valid_mobile(number: &PhoneNumber) -> bool {
    phonenumber::is_valid(number)
        && matches!(number.number_type(&DATABASE), Type::Mobile | Type::FixedLineOrMobile)
}

/// Collapse every run of group punctuation into a single space, so
/// `+1 323-985-1920` reads `+1 323 985 1920`.
fn space_separated(formatted: &str) -> String {
    formatted
        .split(|c: char| c != '+' && !c.is_ascii_alphanumeric())
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_number(s: &str, region: Region) -> Result<PhoneNumber, RecognizerError> {
    let id: country::Id = region.as_str().parse().map_err(|_| RecognizerError::PhoneParse {
        input: s.to_string(),
        reason: format!("region {region} has no dialing-plan metadata"),
    })?;
    phonenumber::parse(Some(id), s).map_err(|e| RecognizerError::PhoneParse {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_domestic_spellings() {
        for s in [
            "+5511987654321",
            "11987654321",
            "(11) 98765-4321",
            "011987654321",
            "85966078033",
        ] {
            assert!(is_phone_number(s, Region::BR), "{s} should be a phone key");
        }
    }

    #[test]
    fn accepts_foreign_number_with_country_code() {
        assert!(is_phone_number("+13239851920", Region::BR));
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert!(!is_phone_number("0119987654321", Region::BR));
        assert!(!is_phone_number("03637649098", Region::BR));
        assert!(!is_phone_number("johndoe@test.com", Region::BR));
        assert!(!is_phone_number("", Region::BR));
    }

    #[test]
    fn unknown_region_is_no_match() {
        let nowhere = Region::new("QQ").unwrap();
        assert!(!is_phone_number("11987654321", nowhere));
        assert!(matches!(
            parse("11987654321", nowhere),
            Err(RecognizerError::PhoneParse { .. })
        ));
    }

    #[test]
    fn parse_renders_brazilian_number() {
        let parsed = parse("(11) 98765-4321", Region::BR).unwrap();
        assert_eq!(parsed.full_international, "+5511987654321");
        assert_eq!(parsed.region, Some(Region::BR));
        assert_eq!(parsed.country_code, 55);
        assert_eq!(parsed.national_display, "(11) 98765-4321");
        assert_eq!(parsed.international_display, "+55 11 98765 4321");
    }

    #[test]
    fn parse_renders_foreign_number() {
        let parsed = parse("+13239851920", Region::BR).unwrap();
        assert_eq!(parsed.full_international, "+13239851920");
        assert_eq!(parsed.country_code, 1);
        assert_ne!(parsed.region, Some(Region::BR));
        assert_eq!(parsed.international_display, "+1 323 985 1920");
    }

    #[test]
    fn rejects_landlines() {
        for s in ["1133334444", "+551133334444", "(11) 3333-4444", "6132125000"] {
            assert!(!is_phone_number(s, Region::BR), "{s} is a fixed line");
            assert!(parse(s, Region::BR).is_err(), "{s} is a fixed line");
        }
    }

    #[test]
    fn group_separators_become_single_spaces() {
        assert_eq!(space_separated("+1 323-985-1920"), "+1 323 985 1920");
        assert_eq!(space_separated("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(space_separated("+7 (495) 123-45-67"), "+7 495 123 45 67");
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(parse("not a key at all", Region::BR).is_err());
    }
}
