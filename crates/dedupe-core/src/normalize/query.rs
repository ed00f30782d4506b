use std::collections::BTreeSet;

/// Distinct parameter names, sorted, joined by `&`. Values are ignored.
pub fn sorted_key_names(query: &[(String, String)]) -> String {
    let names: BTreeSet<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
    names.into_iter().collect::<Vec<_>>().join("&")
}
