//! `$ARGOFLOW_KEY` token replacement.

use std::collections::BTreeMap;

/// Prefix every replacement variable carries.
pub const VAR_PREFIX: &str = "ARGOFLOW_";

/// Build the replacement table: conf entries keyed `ARGOFLOW_<key>`, overlaid by the
/// `ARGOFLOW_*` environment.
pub fn replacement_vars(
    conf: Vec<(String, String)>,
    environment: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut vars: BTreeMap<String, String> =
        conf.into_iter().map(|(key, value)| (format!("{VAR_PREFIX}{key}"), value)).collect();
    vars.extend(environment);
    vars
}

/// Replace every `$KEY` occurrence with its value in a single left-to-right pass.
///
/// At each `$` the longest matching key wins, so `$ARGOFLOW_GIT_URL` is never split
/// into `$ARGOFLOW_GIT` + `_URL`. Substituted values are not scanned again; unknown
/// tokens are left untouched.
pub fn substitute(text: &str, vars: &BTreeMap<String, String>) -> String {
    let mut tokens: Vec<(&str, &str)> =
        vars.iter().filter(|(k, _)| !k.is_empty()).map(|(k, v)| (k.as_str(), v.as_str())).collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('$') {
        output.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match tokens.iter().find(|(key, _)| after.starts_with(key)) {
            Some((key, value)) => {
                output.push_str(value);
                rest = &after[key.len()..];
            }
            None => {
                output.push('$');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}
