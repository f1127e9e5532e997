//! Hostname normalization and rule matching.

/// Normalize user-supplied host input into a canonical hostname.
///
/// Accepts bare hosts as well as pasted URLs: scheme, path, query,
/// fragment and port are stripped, the rest is lowercased, a leading dot
/// is removed and any character outside `[a-z0-9.-]` is dropped. Returns
/// `None` when nothing host-like remains.
pub fn normalize_host(input: &str) -> Option<String> {
    let mut s = input.trim().to_ascii_lowercase();
    if let Some(idx) = s.find("://") {
        s.drain(..idx + 3);
    }
    if let Some(idx) = s.find(['/', '?', '#']) {
        s.truncate(idx);
    }
    if let Some(idx) = s.find(':') {
        s.truncate(idx);
    }

    let host: String = s
        .trim_start_matches('.')
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-')
        .collect();

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// A host matches a stored rule when it equals the rule exactly or is a
/// subdomain of it. No wildcard or regex support.
pub fn host_matches(host: &str, rule: &str) -> bool {
    if rule.is_empty() {
        return false;
    }
    host == rule
        || host
            .strip_suffix(rule)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Whether `host` matches any rule in the list. An empty host never
/// matches, so internal pages fall through to the mode default.
pub fn any_match(host: &str, rules: &[String]) -> bool {
    if host.is_empty() {
        return false;
    }
    rules.iter().any(|rule| host_matches(host, rule))
}
