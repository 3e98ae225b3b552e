//! Small text helpers for event cards and forms

use super::format::is_locale;

/// Uppercase the first character, leave the rest untouched
///
/// # Examples
/// ```
/// use contracts::shared::string_utils::capitalize_first;
/// assert_eq!(capitalize_first("konzert"), "Konzert");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Age restriction sentence built from translated templates
///
/// `t` resolves translation keys: `from_age_sentence` and `to_age_sentence`
/// carry `{age}`, `age_range_sentence` carries `{from}` and `{to}`.
pub fn age_text<F>(t: F, min_age: Option<i32>, max_age: Option<i32>) -> String
where
    F: Fn(&str) -> String,
{
    match (min_age, max_age) {
        (Some(min), None) => t("from_age_sentence").replacen("{age}", &min.to_string(), 1),
        (None, Some(max)) => t("to_age_sentence").replacen("{age}", &max.to_string(), 1),
        (Some(min), Some(max)) => t("age_range_sentence")
            .replacen("{from}", &min.to_string(), 1)
            .replacen("{to}", &max.to_string(), 1),
        (None, None) => String::new(),
    }
}

/// Price sentence built from translated templates
///
/// Keys: `price_from_sentence` / `price_to_sentence` (`{price}`) and
/// `price_range_sentence` (`{from}`, `{to}`). Prices follow [`format_price`].
pub fn price_text<F>(
    t: F,
    min_price: Option<f64>,
    max_price: Option<f64>,
    currency: Option<&str>,
    locale: &str,
) -> String
where
    F: Fn(&str) -> String,
{
    let fmt = |v: f64| format_price(v, currency, locale);
    match (min_price, max_price) {
        (Some(min), None) => t("price_from_sentence").replacen("{price}", &fmt(min), 1),
        (None, Some(max)) => t("price_to_sentence").replacen("{price}", &fmt(max), 1),
        (Some(min), Some(max)) => t("price_range_sentence")
            .replacen("{from}", &fmt(min), 1)
            .replacen("{to}", &fmt(max), 1),
        (None, None) => String::new(),
    }
}

/// Two decimals with thousands grouping in the locale's number style
///
/// `de` and `da` write `1.234,50 €` (symbol or ISO code after the amount),
/// other locales `€1,234.50` or `DKK 1,234.50`.
///
/// # Examples
/// ```
/// use contracts::shared::string_utils::format_price;
/// assert_eq!(format_price(1234.5, Some("EUR"), "de"), "1.234,50 €");
/// assert_eq!(format_price(1234.5, Some("EUR"), "en"), "€1,234.50");
/// ```
pub fn format_price(value: f64, currency: Option<&str>, locale: &str) -> String {
    let comma_decimal = is_locale(locale, "de") || is_locale(locale, "da");
    let fixed = format!("{:.2}", value.abs());
    let sign = if value < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    };
    let amount = if comma_decimal {
        group_amount(&fixed, ',', '.')
    } else {
        group_amount(&fixed, '.', ',')
    };

    let code = match currency.map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => code.to_uppercase(),
        None => return format!("{}{}", sign, amount),
    };
    let symbol = currency_symbol(&code);

    match (comma_decimal, symbol) {
        (true, Some(symbol)) => format!("{}{} {}", sign, amount, symbol),
        (true, None) => format!("{}{} {}", sign, amount, code),
        (false, Some(symbol)) => format!("{}{}{}", sign, symbol, amount),
        (false, None) => format!("{}{} {}", sign, code, amount),
    }
}

/// Unsigned `"1234.50"` to `"1,234.50"` style with the given separators
fn group_amount(fixed: &str, decimal_sep: char, group_sep: char) -> String {
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed, "00"));

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(digit);
    }
    grouped.push(decimal_sep);
    grouped.push_str(frac_part);
    grouped
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "EUR" => Some("€"),
        "USD" => Some("$"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Key used to select a venue (and optionally one of its spaces) in forms
pub fn build_venue_space_key(venue_id: Option<i32>, space_id: Option<i32>) -> String {
    match (venue_id, space_id) {
        (None, _) => String::new(),
        (Some(v), None) => v.to_string(),
        (Some(v), Some(s)) => format!("{}_{}", v, s),
    }
}
