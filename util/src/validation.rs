use validator::ValidationErrors;

/// Joins every field-level validation message into a single `;`-separated string.
///
/// Messages are sorted so the output does not depend on hash map ordering.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.dedup();
    messages.join("; ")
}
