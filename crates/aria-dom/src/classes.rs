//! Space-delimited token lists (`class`, `aria-labelledby`, ...)

/// Iterate the tokens of a space-delimited attribute value.
pub(crate) fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_ascii_whitespace()
}

pub(crate) fn contains(value: &str, token: &str) -> bool {
    tokens(value).any(|t| t == token)
}

/// Returns the list with `token` appended, or `None` if already present.
pub(crate) fn with_token(value: &str, token: &str) -> Option<String> {
    if contains(value, token) {
        return None;
    }

    let mut list: Vec<&str> = tokens(value).collect();
    list.push(token);
    Some(list.join(" "))
}

/// Returns the list with every `token` removed, or `None` if it was absent.
pub(crate) fn without_token(value: &str, token: &str) -> Option<String> {
    if !contains(value, token) {
        return None;
    }

    Some(
        tokens(value)
            .filter(|t| *t != token)
            .collect::<Vec<_>>()
            .join(" "),
    )
}
