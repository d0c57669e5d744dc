//! Input masks for Brazilian phone numbers, CPF and dates.
//!
//! Every mask accepts arbitrary text, keeps the digits, and formats them progressively so
//! it can run on each keystroke. Canonical values (digits only, or `YYYY-MM-DD` for
//! dates) are what the forms store.

/// Keep only ASCII digits.
pub fn unmask(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `(XX) XXXX-XXXX` for up to 10 digits, `(XX) XXXXX-XXXX` beyond that (capped at 11).
pub fn mask_phone(value: &str) -> String {
    let digits = unmask(value);
    let n = digits.len();
    if n <= 2 {
        return digits;
    }
    if n <= 10 {
        if n <= 6 {
            format!("({}) {}", &digits[..2], &digits[2..])
        } else {
            format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
        }
    } else {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11])
    }
}

/// `XXX.XXX.XXX-XX` over up to 11 digits.
pub fn mask_cpf(value: &str) -> String {
    let mut digits = unmask(value);
    digits.truncate(11);
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// `DD/MM/YYYY` over up to 8 digits.
pub fn mask_date(value: &str) -> String {
    let mut digits = unmask(value);
    digits.truncate(8);
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// `DD/MM/YYYY` to `YYYY-MM-DD`. Returns an empty string while the date is incomplete or
/// out of range (day 1-31, month 1-12, year from 1900).
pub fn date_mask_to_iso(masked: &str) -> String {
    let digits = unmask(masked);
    if digits.len() != 8 {
        return String::new();
    }
    let (day, month, year) = (&digits[..2], &digits[2..4], &digits[4..]);
    let parse = |s: &str| s.parse::<u32>().unwrap_or(0);
    let (d, m, y) = (parse(day), parse(month), parse(year));
    if !(1..=31).contains(&d) || !(1..=12).contains(&m) || y < 1900 {
        return String::new();
    }
    format!("{year}-{month}-{day}")
}

/// `YYYY-MM-DD` to `DD/MM/YYYY`. Anything that is not exactly ten characters yields an
/// empty string.
pub fn date_iso_to_mask(iso: &str) -> String {
    if iso.chars().count() != 10 {
        return String::new();
    }
    let mut parts = iso.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{day}/{month}/{year}"),
        _ => String::new(),
    }
}

/// Table display: 11 digits as mobile, 10 as fixed-line, anything else untouched.
pub fn format_phone_display(phone: &str) -> String {
    let digits = unmask(phone);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

/// Date part of an ISO date or timestamp, as `DD/MM/YYYY`.
pub fn format_date_display(value: &str) -> String {
    let date: String = value.chars().take(10).collect();
    match date_iso_to_mask(&date) {
        masked if masked.is_empty() => value.to_string(),
        masked => masked,
    }
}

/// Shorten `text` to `max` characters, appending an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mask_phone_complete_numbers() {
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(mask_phone("1133224455"), "(11) 3322-4455");
        assert_eq!(mask_phone("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn test_mask_phone_progressive() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("113"), "(11) 3");
        assert_eq!(mask_phone("113322"), "(11) 3322");
        assert_eq!(mask_phone("1133224"), "(11) 3322-4");
        assert_eq!(mask_phone("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn test_mask_cpf() {
        assert_eq!(mask_cpf("12345678901"), "123.456.789-01");
        assert_eq!(mask_cpf("123"), "123");
        assert_eq!(mask_cpf("1234"), "123.4");
        assert_eq!(mask_cpf("1234567"), "123.456.7");
        assert_eq!(mask_cpf("1234567890"), "123.456.789-0");
        assert_eq!(mask_cpf("123.456.789-0123"), "123.456.789-01");
    }

    #[test]
    fn test_mask_date() {
        assert_eq!(mask_date("1"), "1");
        assert_eq!(mask_date("150"), "15/0");
        assert_eq!(mask_date("15031990"), "15/03/1990");
        assert_eq!(mask_date("15/03/19901234"), "15/03/1990");
    }

    #[test]
    fn test_date_mask_to_iso() {
        assert_eq!(date_mask_to_iso("15/03/1990"), "1990-03-15");
        assert_eq!(date_mask_to_iso("15/03/199"), "");
        assert_eq!(date_mask_to_iso("32/01/2000"), "");
        assert_eq!(date_mask_to_iso("00/01/2000"), "");
        assert_eq!(date_mask_to_iso("10/13/2000"), "");
        assert_eq!(date_mask_to_iso("10/12/1899"), "");
    }

    #[test]
    fn test_date_iso_to_mask() {
        assert_eq!(date_iso_to_mask("1990-03-15"), "15/03/1990");
        assert_eq!(date_iso_to_mask("1990-3-15"), "");
        assert_eq!(date_iso_to_mask(""), "");
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_phone_display("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone_display("1133224455"), "(11) 3322-4455");
        assert_eq!(format_phone_display("12345"), "12345");
        assert_eq!(format_date_display("2012-03-04T00:00:00.000Z"), "04/03/2012");
        assert_eq!(format_date_display("ontem"), "ontem");
        assert_eq!(truncate("curta", 40), "curta");
        assert_eq!(truncate(&"a".repeat(41), 40), format!("{}…", "a".repeat(40)));
    }

    proptest! {
        #[test]
        fn prop_date_round_trip(day in 1u32..=31, month in 1u32..=12, year in 1900u32..=9999) {
            let input = format!("{day:02}{month:02}{year:04}");
            let masked = mask_date(&input);
            prop_assert_eq!(date_iso_to_mask(&date_mask_to_iso(&masked)), masked);
        }

        #[test]
        fn prop_masks_ignore_non_digits(raw in "[0-9a-z() ./-]{0,20}") {
            prop_assert_eq!(mask_phone(&raw), mask_phone(&unmask(&raw)));
            prop_assert_eq!(mask_cpf(&raw), mask_cpf(&unmask(&raw)));
            prop_assert!(unmask(&mask_cpf(&raw)).len() <= 11);
        }
    }
}
