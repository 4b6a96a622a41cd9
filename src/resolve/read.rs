use super::table::Extractor;
use serde_json::Value;

fn lookup<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(payload, |current, key| current.as_object()?.get(*key))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (number.is_finite() && number != 0.0).then_some(number)
}

fn as_count(value: &Value) -> Option<usize> {
    let count = match value {
        Value::Array(items) => items.len(),
        Value::Object(entries) => entries.len(),
        _ => return None,
    };
    (count > 0).then_some(count)
}

fn text_at(payload: &Value, extractor: &Extractor) -> Option<String> {
    match extractor {
        Extractor::At(path) => lookup(payload, path).and_then(as_text),
        Extractor::Joined(first, second) => {
            let joined = [first, second]
                .iter()
                .filter_map(|path| lookup(payload, path).and_then(as_text))
                .collect::<Vec<_>>()
                .join(" ");
            (!joined.is_empty()).then_some(joined)
        }
    }
}

fn value_at<'a>(payload: &'a Value, extractor: &Extractor) -> Option<&'a Value> {
    match extractor {
        Extractor::At(path) => lookup(payload, path),
        Extractor::Joined(..) => None,
    }
}

/// Each reader tries `layers` innermost first; within a layer the alias
/// chain is tried front to back.
pub(crate) fn text(layers: &[&Value], extractors: &[Extractor]) -> String {
    layers
        .iter()
        .find_map(|payload| {
            extractors
                .iter()
                .find_map(|extractor| text_at(payload, extractor))
        })
        .unwrap_or_default()
}

pub(crate) fn number(layers: &[&Value], extractors: &[Extractor]) -> f64 {
    layers
        .iter()
        .find_map(|payload| {
            extractors
                .iter()
                .find_map(|extractor| value_at(payload, extractor).and_then(as_number))
        })
        .unwrap_or(0.0)
}

pub(crate) fn flag(layers: &[&Value], extractors: &[Extractor]) -> bool {
    layers.iter().any(|payload| {
        extractors
            .iter()
            .any(|extractor| matches!(value_at(payload, extractor), Some(Value::Bool(true))))
    })
}

pub(crate) fn count(layers: &[&Value], extractors: &[Extractor]) -> usize {
    layers
        .iter()
        .find_map(|payload| {
            extractors
                .iter()
                .find_map(|extractor| value_at(payload, extractor).and_then(as_count))
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAME: &[Extractor] = &[
        Extractor::At(&["name"]),
        Extractor::Joined(&["customer", "firstName"], &["customer", "lastName"]),
    ];

    #[test]
    fn text_skips_blank_values_and_falls_through() {
        let payload = json!({ "name": "  ", "customer": { "firstName": "Jane", "lastName": "Doe" } });
        assert_eq!(text(&[&payload], NAME), "Jane Doe");
    }

    #[test]
    fn joined_text_keeps_single_half() {
        let payload = json!({ "customer": { "lastName": " Doe " } });
        assert_eq!(text(&[&payload], NAME), "Doe");
    }

    #[test]
    fn number_accepts_numeric_strings_and_rejects_garbage() {
        let paths = &[Extractor::At(&["a"]), Extractor::At(&["b"])];
        assert_eq!(number(&[&json!({ "a": "900" })], paths), 900.0);
        assert_eq!(number(&[&json!({ "a": "lots", "b": 12 })], paths), 12.0);
        assert_eq!(number(&[&json!({ "a": 0, "b": 7.5 })], paths), 7.5);
        assert_eq!(number(&[&json!({ "a": [1] })], paths), 0.0);
    }

    #[test]
    fn flag_requires_boolean_true() {
        let paths = &[Extractor::At(&["a"])];
        assert!(flag(&[&json!({ "a": true })], paths));
        assert!(!flag(&[&json!({ "a": "true" })], paths));
        assert!(!flag(&[&json!({ "a": 1 })], paths));
    }

    #[test]
    fn inner_layer_wins_and_outer_layer_fills_gaps() {
        let inner = json!({ "name": "Inner Name" });
        let outer = json!({ "name": "Outer Name", "b": 4 });
        let layers = [&inner, &outer];
        assert_eq!(text(&layers, NAME), "Inner Name");
        assert_eq!(number(&layers, &[Extractor::At(&["b"])]), 4.0);
    }

    #[test]
    fn lookup_tolerates_non_object_intermediates() {
        let payload = json!({ "customer": "Jane" });
        assert_eq!(lookup(&payload, &["customer", "firstName"]), None);
        assert_eq!(count(&[&json!({ "h": [] })], &[Extractor::At(&["h"])]), 0);
    }
}
