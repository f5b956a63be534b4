/// Converts a parameter or operation name to kebab-case
///
/// `userId` -> `user-id`, `authServerId` -> `auth-server-id`,
/// `list_groups` -> `list-groups`. Apostrophes are dropped and runs of
/// other separators collapse into a single hyphen.
#[must_use]
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    let mut last_was_sep = true;
    let mut last_was_lower = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {}
            c if c.is_alphanumeric() => {
                let is_upper = c.is_uppercase();

                if !last_was_sep && is_upper && last_was_lower {
                    result.push('-');
                } else if !last_was_sep
                    && is_upper
                    && chars.peek().is_some_and(|&next| next.is_lowercase())
                    && !result.is_empty()
                {
                    result.push('-');
                }

                for lower_ch in c.to_lowercase() {
                    result.push(lower_ch);
                }

                last_was_sep = false;
                last_was_lower = c.is_lowercase() || c.is_numeric();
            }
            _ => {
                if !last_was_sep && !result.is_empty() {
                    result.push('-');
                    last_was_sep = true;
                    last_was_lower = false;
                }
            }
        }
    }

    result.trim_end_matches('-').to_string()
}

/// Leaks a string to obtain a `'static` reference for clap's builder API.
///
/// Commands are built once per process, so the leaked set is bounded by the catalog.
#[must_use]
pub fn to_static_str(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// Formats a response body for the terminal: pretty JSON when it parses, raw text otherwise.
///
/// Returns `None` for an empty (or whitespace-only) body.
#[must_use]
pub fn pretty_print_body(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .or_else(|| Some(body.to_string()))
}
