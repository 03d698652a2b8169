use crate::types::DeprecationState;

/// Append a `/** ... */` block for `description` and `deprecation` at the
/// given indentation. Nothing is written when there is nothing to say.
pub(super) fn write_doc_block(
    out: &mut String,
    indent: &str,
    description: Option<&str>,
    deprecation: &DeprecationState,
) {
    let mut lines: Vec<String> = description
        .into_iter()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    match deprecation {
        DeprecationState::Deprecated(Some(reason)) => lines.push(format!("@deprecated {reason}")),
        DeprecationState::Deprecated(None) => lines.push("@deprecated".to_string()),
        DeprecationState::NotDeprecated => (),
    }
    if lines.is_empty() {
        return;
    }

    out.push_str(&format!("{indent}/**\n"));
    for line in lines {
        out.push_str(&format!("{indent} * {line}\n"));
    }
    out.push_str(&format!("{indent} */\n"));
}
