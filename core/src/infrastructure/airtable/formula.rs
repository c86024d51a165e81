//! Builders for Airtable `filterByFormula` expressions.

/// Escape a value for use inside a single quoted formula string.
pub fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

pub fn field_equals(field: &str, value: &str) -> String {
    format!("{{{field}}} = '{}'", escape(value))
}

pub fn field_equals_ci(field: &str, value: &str) -> String {
    format!("LOWER({{{field}}}) = LOWER('{}')", escape(value))
}

pub fn field_contains_ci(field: &str, value: &str) -> String {
    format!("FIND(LOWER('{}'), LOWER({{{field}}}))", escape(value))
}

pub fn field_is_true(field: &str) -> String {
    format!("{{{field}}} = TRUE()")
}

pub fn field_is_false(field: &str) -> String {
    format!("NOT({{{field}}})")
}

/// Combine clauses with `AND(...)`; `None` when there is nothing to filter on.
pub fn and(clauses: Vec<String>) -> Option<String> {
    match clauses.len() {
        0 => None,
        1 => clauses.into_iter().next(),
        _ => Some(format!("AND({})", clauses.join(", "))),
    }
}
