use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"^[\p{L}\p{Nd}]+$").expect("valid regex");
    static ref LEADING_TOKEN: Regex = Regex::new(r"^[\p{L}\p{Nd}]+").expect("valid regex");
}

/// True when `s` is a non-empty run of Unicode letters and decimal digits.
pub fn is_token(s: &str) -> bool { TOKEN.is_match(s) }

/// The longest token at the start of `s`, if `s` starts with one.
pub fn leading_token(s: &str) -> Option<&str> {
    LEADING_TOKEN.find(s).map(|m| m.as_str())
}
