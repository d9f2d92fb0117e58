use regex::Regex;
use std::sync::LazyLock;

/// Shape check for email addresses, anchored at both ends.
pub static EMAIL_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex should compile")
});

/// True when the value contains something other than whitespace.
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when the value has at least `n` characters, counted as Unicode scalar values.
pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

/// True when the value has at most `n` characters. An empty value always passes.
pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// True when `rx` matches the value. Patterns passed here are expected to
/// carry their own `^...$` anchors, as [`EMAIL_RX`] does.
pub fn matches(value: &str, rx: &Regex) -> bool {
    rx.is_match(value)
}

pub fn equal<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// True when `value` is one of `permitted`. Always false for an empty list.
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}
