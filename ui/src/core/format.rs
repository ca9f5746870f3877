//! Formatting helpers for contact details and footer copy.

/// `tel:` link target: keeps the leading `+` and digits, drops spacing and punctuation.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .enumerate()
        .filter(|(idx, c)| c.is_ascii_digit() || (*idx == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect();
    format!("tel:{digits}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

pub fn copyright_line(year: i32, organisation: &str, region: &str, rights: &str) -> String {
    format!("© {year} {organisation} - {region}. {rights}")
}
