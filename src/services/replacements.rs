use crate::domain::constants::{
    ClientField, DefaultValue, ReplacementRule, DATE_FORMAT, REPLACEMENT_RULES,
};
use crate::domain::models::{ReplacementEntry, ReplacementTable, ValueSource};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, warn};

/// `data.client.<field>`, or `None` when any step of the path is missing.
/// A non-object document or `client` simply yields `None`.
pub fn lookup_client_field(data: &Value, field: ClientField) -> Option<&Value> {
    data.get("client")?.get(field.key())
}

/// Text for a looked-up value, or `None` when the default should apply.
///
/// Empty strings, `null`, `false` and zero count as unset. Objects and arrays
/// are not rendered and also fall back to the default.
pub fn usable_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::String(_) | Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::Array(_) | Value::Object(_) => {
            warn!("non-scalar client field ignored; using default");
            None
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn default_text(default: DefaultValue, today: NaiveDate) -> String {
    match default {
        DefaultValue::Text(s) => s.to_string(),
        DefaultValue::Today => format_date(today),
    }
}

fn resolve_rule(data: &Value, rule: &ReplacementRule, today: NaiveDate) -> ReplacementEntry {
    let provided = lookup_client_field(data, rule.field).and_then(usable_text);
    let (value, source) = match provided {
        Some(v) => (v, ValueSource::Data),
        None => (default_text(rule.default, today), ValueSource::Default),
    };
    debug!(search = rule.search, field = rule.field.key(), ?source, "replacement resolved");
    ReplacementEntry {
        search: rule.search,
        value,
        source,
    }
}

/// Resolves every rule up front, in table order.
pub fn resolve_table(data: &Value, today: NaiveDate) -> ReplacementTable {
    ReplacementTable {
        entries: REPLACEMENT_RULES
            .iter()
            .map(|rule| resolve_rule(data, rule, today))
            .collect(),
    }
}

pub fn resolve_replacements(data: &Value) -> ReplacementTable {
    resolve_table(data, chrono::Local::now().date_naive())
}
