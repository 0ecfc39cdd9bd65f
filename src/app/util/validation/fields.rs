use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

use super::{kind::ValidationErrorKind, rules::RuleResult};

/// Key used for failures that concern the payload as a whole.
pub const BODY_FIELD: &str = "body";

/// Reads fields out of a raw JSON object while collecting every failure,
/// so a single pass reports all bad fields at once.
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    pub fn new(payload: &'a Value) -> Result<Self, ValidationErrors> {
        match payload.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: ValidationErrors::new(),
            }),
            None => {
                let mut errors = ValidationErrors::new();
                errors.add(
                    BODY_FIELD,
                    ValidationErrorKind::InvalidType.error("body must be a JSON object."),
                );
                Err(errors)
            }
        }
    }

    /// Raw value of a field, `None` when absent or null.
    pub fn value(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    /// A string that must be present. Absent, null and blank values are
    /// reported with `blank`; other JSON types with `InvalidType`.
    pub fn string(
        &mut self,
        field: &'static str,
        blank: ValidationErrorKind,
        rule: impl FnOnce(&str) -> RuleResult,
    ) -> Option<&'a str> {
        let Some(value) = self.value(field) else {
            self.reject(field, blank.error(format!("{} is required.", field)));
            return None;
        };
        let Some(value) = value.as_str() else {
            self.reject(field, ValidationErrorKind::InvalidType.error(format!("{} must be a string.", field)));
            return None;
        };
        if value.trim().is_empty() {
            self.reject(field, blank.error(format!("{} must not be empty.", field)));
            return None;
        }

        self.check(field, rule(value));
        Some(value)
    }

    /// Shorthand for `string` with `MissingField` as the blank kind.
    pub fn required(&mut self, field: &'static str, rule: impl FnOnce(&str) -> RuleResult) -> Option<&'a str> {
        self.string(field, ValidationErrorKind::MissingField, rule)
    }

    pub fn check(&mut self, field: &'static str, result: RuleResult) {
        if let Err(error) = result {
            self.reject(field, error);
        }
    }

    pub fn check_all(&mut self, field: &'static str, results: Vec<ValidationError>) {
        for error in results {
            self.reject(field, error);
        }
    }

    pub fn reject(&mut self, field: &'static str, error: ValidationError) {
        self.errors.add(field, error);
    }

    /// Copy of every key that is not in `known`.
    pub fn rest(&self, known: &[&str]) -> Map<String, Value> {
        self.object
            .iter()
            .filter(|(key, _)| !known.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Flags every key that is not in `allowed`.
    pub fn deny_unknown(&mut self, allowed: &[&'static str]) {
        let mut unexpected: Vec<&String> = self
            .object
            .keys()
            .filter(|key| !allowed.contains(&key.as_str()))
            .collect();
        if unexpected.is_empty() {
            return;
        }
        unexpected.sort();

        let mut error = ValidationErrorKind::UnexpectedField.error(format!(
            "unexpected fields: {}.",
            unexpected.iter().map(|key| key.as_str()).collect::<Vec<_>>().join(", ")
        ));
        error.add_param("fields".into(), &unexpected);
        self.reject(BODY_FIELD, error);
    }

    /// Hands out the parsed value only when nothing was rejected.
    pub fn finish<T>(self, parsed: Option<T>) -> Result<T, ValidationErrors> {
        match (self.errors.errors().is_empty(), parsed) {
            (true, Some(parsed)) => Ok(parsed),
            (_, _) => Err(self.errors),
        }
    }
}

/// Flattens field errors, sorted by field then code.
pub fn field_errors(errors: &ValidationErrors) -> Vec<(&'static str, &ValidationError)> {
    let mut flattened = Vec::new();

    for (field, kind) in errors.errors() {
        if let validator::ValidationErrorsKind::Field(list) = kind {
            for error in list {
                flattened.push((*field, error));
            }
        }
    }
    flattened.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.code.cmp(&b.1.code)));

    flattened
}

/// Kinds reported for one field, in insertion order.
#[cfg(test)]
pub fn kinds_of(errors: &ValidationErrors, field: &str) -> Vec<ValidationErrorKind> {
    match errors.errors().get(field) {
        Some(validator::ValidationErrorsKind::Field(list)) => list
            .iter()
            .filter_map(|error| ValidationErrorKind::from_code(&error.code))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_object_body_is_rejected() {
        let errors = FieldReader::new(&json!(["value"])).err().unwrap();

        assert_eq!(kinds_of(&errors, BODY_FIELD), vec![ValidationErrorKind::InvalidType]);
    }

    #[test]
    fn absent_wrong_type_and_blank_are_told_apart() {
        let payload = json!({ "number": 4, "blank": "  " });
        let mut reader = FieldReader::new(&payload).unwrap();

        assert!(reader.required("absent", |_| Ok(())).is_none());
        assert!(reader.required("number", |_| Ok(())).is_none());
        assert!(reader.string("blank", ValidationErrorKind::EmptyField, |_| Ok(())).is_none());

        let errors = reader.finish(Some(())).unwrap_err();
        assert_eq!(kinds_of(&errors, "absent"), vec![ValidationErrorKind::MissingField]);
        assert_eq!(kinds_of(&errors, "number"), vec![ValidationErrorKind::InvalidType]);
        assert_eq!(kinds_of(&errors, "blank"), vec![ValidationErrorKind::EmptyField]);
    }

    #[test]
    fn null_counts_as_absent() {
        let payload = json!({ "title": null });
        let mut reader = FieldReader::new(&payload).unwrap();

        reader.required("title", |_| Ok(()));

        let errors = reader.finish(Some(())).unwrap_err();
        assert_eq!(kinds_of(&errors, "title"), vec![ValidationErrorKind::MissingField]);
    }

    #[test]
    fn rule_failures_are_collected_but_value_is_returned() {
        let payload = json!({ "title": "short" });
        let mut reader = FieldReader::new(&payload).unwrap();

        let title = reader.required("title", |_| Err(ValidationErrorKind::LengthOutOfRange.error("too short")));

        assert_eq!(title, Some("short"));
        let errors = reader.finish(title).unwrap_err();
        assert_eq!(kinds_of(&errors, "title"), vec![ValidationErrorKind::LengthOutOfRange]);
    }

    #[test]
    fn unknown_keys_are_listed_once_on_the_body() {
        let payload = json!({ "title": "x", "zeta": 1, "alpha": 2 });
        let mut reader = FieldReader::new(&payload).unwrap();

        reader.deny_unknown(&["title"]);

        let errors = reader.finish(Some(())).unwrap_err();
        let flattened = field_errors(&errors);
        assert_eq!(flattened.len(), 1);
        assert_eq!(flattened[0].0, BODY_FIELD);
        assert_eq!(flattened[0].1.code, "unexpected_field");
        assert_eq!(flattened[0].1.params["fields"], json!(["alpha", "zeta"]));
    }

    #[test]
    fn rest_keeps_only_unlisted_keys() {
        let payload = json!({ "value": "hi", "postId": 3, "draft": true });
        let reader = FieldReader::new(&payload).unwrap();

        let rest = reader.rest(&["value"]);

        assert_eq!(Value::Object(rest), json!({ "postId": 3, "draft": true }));
    }

    #[test]
    fn finish_returns_value_when_clean() {
        let payload = json!({});
        let reader = FieldReader::new(&payload).unwrap();

        assert_eq!(reader.finish(Some(7)).unwrap(), 7);
    }

    #[test]
    fn field_errors_are_sorted() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationErrorKind::LengthOutOfRange.error("x"));
        errors.add("link", ValidationErrorKind::InvalidUrlFormat.error("x"));
        errors.add("link", ValidationErrorKind::EmptyField.error("x"));

        let fields: Vec<_> = field_errors(&errors)
            .into_iter()
            .map(|(field, error)| (field, error.code.to_string()))
            .collect();

        assert_eq!(
            fields,
            vec![
                ("link", "empty_field".to_string()),
                ("link", "invalid_url_format".to_string()),
                ("title", "length_out_of_range".to_string()),
            ]
        );
    }
}
