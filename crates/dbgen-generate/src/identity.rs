//! pt_BR identity fields: names, CPF, mobile numbers and e-mail local parts.

use fake::Fake;
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use rand::Rng;

/// Full pt_BR name without honorifics.
pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let name: String = Name(PT_BR).fake_with_rng(rng);
    strip_titles(&name)
}

fn strip_titles(name: &str) -> String {
    let cleaned: Vec<&str> = name
        .split_whitespace()
        .filter(|word| !TITLES.contains(word))
        .collect();
    cleaned.join(" ")
}

/// Valid CPF, masked as `000.000.000-00`.
pub fn cpf<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0_u8; 11];
    loop {
        for digit in digits.iter_mut().take(9) {
            *digit = rng.random_range(0..=9);
        }
        // Repeated-digit bases pass the checksum but are never issued.
        if digits[..9].iter().any(|d| *d != digits[0]) {
            break;
        }
    }
    digits[9] = cpf_check_digit(&digits[..9]);
    digits[10] = cpf_check_digit(&digits[..10]);
    format_cpf(&digits)
}

fn cpf_check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0_u32;
    let mut weight = digits.len() as u32 + 1;
    for digit in digits {
        sum += (*digit as u32) * weight;
        weight = weight.saturating_sub(1);
    }
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

fn format_cpf(digits: &[u8; 11]) -> String {
    let d: String = digits.iter().map(|d| char::from(b'0' + *d)).collect();
    format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
}

/// Checks the mask and both check digits of a CPF.
pub fn is_valid_cpf(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 14 || bytes[3] != b'.' || bytes[7] != b'.' || bytes[11] != b'-' {
        return false;
    }
    let digits: Vec<u8> = value
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .map(|ch| ch as u8 - b'0')
        .collect();
    if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }
    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Mobile number as `(DD) 9XXXX-XXXX`.
pub fn mobile<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ddd = DDD_CODES[rng.random_range(0..DDD_CODES.len())];
    let first = rng.random_range(0..=9999);
    let second = rng.random_range(0..=9999);
    format!("({ddd:02}) 9{first:04}-{second:04}")
}

/// E-mail local part derived from a name: `first.last`, ASCII only.
pub fn email_local_part(name: &str) -> String {
    let base = remove_accents(&name.to_lowercase());
    let parts: Vec<&str> = base
        .split_whitespace()
        .filter(|part| !PREPOSITIONS.contains(part))
        .collect();

    let local = match parts.as_slice() {
        [] => return FALLBACK_LOCAL.to_string(),
        [single] => single.to_string(),
        [first, .., last] => format!("{first}.{last}"),
    };

    let local: String = local
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    let local = local.trim_matches('.');
    if local.is_empty() {
        FALLBACK_LOCAL.to_string()
    } else {
        local.to_string()
    }
}

/// Folds the accented letters of Portuguese names to ASCII. Other diacritics
/// are not transliterated; the ASCII filter in `email_local_part` drops them.
fn remove_accents(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

const FALLBACK_LOCAL: &str = "cliente";

const TITLES: &[&str] = &[
    "Sr.", "Sra.", "Sr", "Sra", "Srta.", "Dr.", "Dra.", "Dr", "Dra", "Prof.", "Prof",
];

const PREPOSITIONS: &[&str] = &["da", "de", "do", "dos", "das"];

// Plausible subset of Brazilian area codes.
const DDD_CODES: &[u8] = &[
    11, 12, 13, 14, 15, 16, 17, 18, 19, 21, 22, 24, 27, 28, 31, 32, 33, 34, 35, 37, 38, 41, 42,
    43, 44, 45, 46, 47, 48, 49, 51, 53, 54, 55, 61, 62, 63, 64, 65, 66, 67, 68, 69, 71, 73, 74,
    75, 77, 79, 81, 82, 83, 84, 85, 86, 87, 88, 89, 91, 92, 93, 94, 95, 96, 97, 98, 99,
];
