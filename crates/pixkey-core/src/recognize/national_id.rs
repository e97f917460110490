//! # CPF and CNPJ
//!
//! Brazilian federal registry numbers:
//!
//! - CPF (individuals): 11 digits, displayed `ddd.ddd.ddd-dd`.
//! - CNPJ (legal entities): 14 digits, displayed `dd.ddd.ddd/dddd-dd`.
//!
//! Both end in two mod-11 check digits. Input may be bare digits or carry
//! the display punctuation; each separator is individually optional but no
//! other characters are tolerated. Sequences of a single repeated digit
//! pass the checksum and are rejected explicitly.

const CPF_MASK: &str = "ddd.ddd.ddd-dd";
const CNPJ_MASK: &str = "dd.ddd.ddd/dddd-dd";

const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Whether `s` is a checksum-valid CPF.
pub fn is_cpf(s: &str) -> bool {
    match match_mask(s, CPF_MASK) {
        Some(digits) => !is_repeated(&digits) && cpf_check_digits_ok(&digits),
        None => false,
    }
}

/// Whether `s` is a checksum-valid CNPJ.
pub fn is_cnpj(s: &str) -> bool {
    match match_mask(s, CNPJ_MASK) {
        Some(digits) => !is_repeated(&digits) && cnpj_check_digits_ok(&digits),
        None => false,
    }
}

/// Punctuate 11 digits as `ddd.ddd.ddd-dd`.
pub fn mask_cpf(digits: &str) -> Option<String> {
    apply_mask(digits, CPF_MASK)
}

/// Punctuate 14 digits as `dd.ddd.ddd/dddd-dd`.
pub fn mask_cnpj(digits: &str) -> Option<String> {
    apply_mask(digits, CNPJ_MASK)
}

/// Keep only ASCII decimal digits.
pub fn strip_to_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Walk `s` against `mask`; `d` needs a digit, any other mask character is
/// an optional separator. Returns the digit values on a full match.
fn match_mask(s: &str, mask: &str) -> Option<Vec<u32>> {
    let mut input = s.chars().peekable();
    let mut digits = Vec::with_capacity(mask.len());
    for m in mask.chars() {
        if m == 'd' {
            digits.push(input.next()?.to_digit(10)?);
        } else if input.peek() == Some(&m) {
            input.next();
        }
    }
    if input.next().is_some() {
        return None;
    }
    Some(digits)
}

fn apply_mask(digits: &str, mask: &str) -> Option<String> {
    let wanted = mask.chars().filter(|c| *c == 'd').count();
    if digits.len() != wanted || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut source = digits.chars();
    mask.chars()
        .map(|m| if m == 'd' { source.next() } else { Some(m) })
        .collect()
}

fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn cpf_check_digits_ok(d: &[u32]) -> bool {
    // Weights run 10..2 for the first check digit, 11..2 for the second.
    let check = |len: usize| {
        let sum: u32 = d[..len]
            .iter()
            .zip((2..=len as u32 + 1).rev())
            .map(|(digit, weight)| digit * weight)
            .sum();
        (sum * 10) % 11 % 10
    };
    d.len() == 11 && check(9) == d[9] && check(10) == d[10]
}

fn cnpj_check_digits_ok(d: &[u32]) -> bool {
    let check = |len: usize| {
        let weights = &CNPJ_WEIGHTS[CNPJ_WEIGHTS.len() - len..];
        let sum: u32 = d[..len].iter().zip(weights).map(|(digit, w)| digit * w).sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    };
    d.len() == 14 && check(12) == d[12] && check(13) == d[13]
}
