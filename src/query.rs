/// Split a raw search string into ingredient tokens.
///
/// Tokens are comma separated and trimmed; empty pieces are discarded.
/// Case and repeated tokens are left untouched.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(clean_token)
        .map(str::to_string)
        .collect()
}

/// Trim one ingredient token; `None` if nothing is left
pub(crate) fn clean_token(token: &str) -> Option<&str> {
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
