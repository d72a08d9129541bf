use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
});

/// Expand environment placeholders in raw TOML text
///
/// Comment lines are copied untouched so a commented-out example does not
/// require its variables to be set.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut expanded: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            expanded.push(line.to_owned());
            continue;
        }

        let mut failure = None;
        let replaced = PLACEHOLDER.replace_all(line, |caps: &Captures<'_>| {
            resolve(caps).unwrap_or_else(|e| {
                if failure.is_none() {
                    failure = Some(e);
                }
                String::new()
            })
        });

        if let Some(e) = failure {
            return Err(e);
        }

        expanded.push(replaced.into_owned());
    }

    let mut output = expanded.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn resolve(caps: &Captures<'_>) -> Result<String, String> {
    let key = &caps[1];
    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    std::env::var(var_name).or_else(|_| {
        caps.get(2)
            .map(|default| default.as_str().to_owned())
            .ok_or_else(|| format!("environment variable not found: `{var_name}`"))
    })
}
