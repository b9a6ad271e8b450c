//! Ordered list of errors accumulated while handling one request.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error_msg::{BoxError, ErrorMsg};
use crate::error_type::ErrorType;

/// Errors in the order they were recorded. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct ErrorMsgs(Vec<ErrorMsg>);

/// JSON shape of an [`ErrorMsgs`]: nothing, one unwrapped object, or an array.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorsJson {
    Empty,
    Single(Value),
    Many(Vec<Value>),
}

impl ErrorsJson {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// `null`, the single object, or an array.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Single(value) => value,
            Self::Many(values) => Value::Array(values),
        }
    }
}

impl Serialize for ErrorsJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_unit(),
            Self::Single(value) => value.serialize(serializer),
            Self::Many(values) => values.serialize(serializer),
        }
    }
}

impl ErrorMsgs {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps `cause` as a [`ErrorType::PRIVATE`] message, appends it and hands
    /// it back so the caller can adjust type or metadata.
    pub fn record(&mut self, cause: impl Into<BoxError>) -> &mut ErrorMsg {
        let idx = self.0.len();
        self.0.push(ErrorMsg::new(cause, ErrorType::PRIVATE));
        &mut self.0[idx]
    }

    pub fn push(&mut self, msg: ErrorMsg) {
        self.0.push(msg);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorMsg> {
        self.0.iter()
    }

    /// Messages whose type overlaps `mask`, in recording order.
    #[must_use]
    pub fn by_type(&self, mask: ErrorType) -> Self {
        if mask == ErrorType::ANY {
            return self.clone();
        }
        self.0.iter().filter(|m| m.is_type(mask)).cloned().collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ErrorMsg> {
        self.0.last()
    }

    /// Messages of every entry, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.0.iter().map(ErrorMsg::message).collect()
    }

    #[must_use]
    pub fn json(&self) -> ErrorsJson {
        match self.0.as_slice() {
            [] => ErrorsJson::Empty,
            [only] => ErrorsJson::Single(only.json()),
            many => ErrorsJson::Many(many.iter().map(ErrorMsg::json).collect()),
        }
    }

    /// Emits one `tracing` error event per message matching `mask`.
    pub fn log_by_type(&self, mask: ErrorType) {
        for (idx, msg) in self.0.iter().enumerate() {
            if !msg.is_type(mask) {
                continue;
            }
            let index = idx + 1;
            match msg.meta() {
                Some(meta) => tracing::error!(
                    index,
                    error_type = %msg.error_type(),
                    error = %msg,
                    meta = %meta,
                    "request error"
                ),
                None => tracing::error!(
                    index,
                    error_type = %msg.error_type(),
                    error = %msg,
                    "request error"
                ),
            }
        }
    }
}

/// Numbered report, one `Error #NN:` line per message plus a `Meta:` line when
/// metadata is attached.
impl fmt::Display for ErrorMsgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, msg) in self.0.iter().enumerate() {
            writeln!(f, "Error #{:02}: {msg}", idx + 1)?;
            if let Some(meta) = msg.meta() {
                writeln!(f, "     Meta: {meta}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for ErrorMsgs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json().serialize(serializer)
    }
}

impl From<Vec<ErrorMsg>> for ErrorMsgs {
    fn from(msgs: Vec<ErrorMsg>) -> Self {
        Self(msgs)
    }
}

impl FromIterator<ErrorMsg> for ErrorMsgs {
    fn from_iter<I: IntoIterator<Item = ErrorMsg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<ErrorMsg> for ErrorMsgs {
    fn extend<I: IntoIterator<Item = ErrorMsg>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ErrorMsgs {
    type Item = ErrorMsg;
    type IntoIter = std::vec::IntoIter<ErrorMsg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorMsgs {
    type Item = &'a ErrorMsg;
    type IntoIter = std::slice::Iter<'a, ErrorMsg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    fn sample() -> ErrorMsgs {
        ErrorMsgs::from(vec![
            ErrorMsg::new("first", ErrorType::PRIVATE),
            ErrorMsg::new("second", ErrorType::PRIVATE).with_meta("some data"),
            ErrorMsg::new("third", ErrorType::PUBLIC).with_meta(json!({"status": "400"})),
        ])
    }

    #[test]
    fn by_type_any_keeps_everything() {
        let errs = sample();
        let all = errs.by_type(ErrorType::ANY);
        assert_eq!(all.errors(), errs.errors());
        assert_eq!(all.json(), errs.json());
    }

    #[test]
    fn by_type_filters_and_keeps_order() {
        let errs = sample();
        assert_eq!(errs.by_type(ErrorType::PUBLIC).errors(), vec!["third"]);
        assert_eq!(
            errs.by_type(ErrorType::PRIVATE).errors(),
            vec!["first", "second"]
        );
        assert_eq!(
            errs.by_type(ErrorType::PUBLIC | ErrorType::PRIVATE).errors(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn by_type_without_match_is_empty() {
        let none = sample().by_type(ErrorType::BIND);
        assert!(none.is_empty());
        assert_eq!(none.to_string(), "");
        assert!(ErrorMsgs::new().by_type(ErrorType::PUBLIC).is_empty());
    }

    #[test]
    fn last_returns_final_entry() {
        let errs = sample();
        assert_eq!(errs.last().map(ErrorMsg::message).as_deref(), Some("third"));
        assert!(ErrorMsgs::new().last().is_none());
    }

    #[test]
    fn display_numbers_entries_and_meta() {
        assert_eq!(
            sample().to_string(),
            "Error #01: first\n\
             Error #02: second\n     Meta: some data\n\
             Error #03: third\n     Meta: {\"status\":\"400\"}\n"
        );
    }

    #[test]
    fn display_pads_to_two_digits_only() {
        let errs: ErrorMsgs = (1..=100)
            .map(|i| ErrorMsg::new(format!("e{i}"), ErrorType::PRIVATE))
            .collect();
        let report = errs.to_string();
        assert!(report.starts_with("Error #01: e1\n"));
        assert!(report.contains("Error #10: e10\n"));
        assert!(report.ends_with("Error #100: e100\n"));
    }

    #[test]
    fn json_has_three_shapes() {
        assert_eq!(ErrorMsgs::new().json(), ErrorsJson::Empty);
        assert_eq!(ErrorMsgs::new().json().into_value(), Value::Null);

        let one: ErrorMsgs = vec![ErrorMsg::new("first", ErrorType::PRIVATE)].into();
        assert_eq!(one.json(), ErrorsJson::Single(json!({"error": "first"})));

        assert_eq!(
            sample().json().into_value(),
            json!([
                {"error": "first"},
                {"error": "second", "meta": "some data"},
                {"error": "third", "status": "400"},
            ])
        );
    }

    #[test]
    fn serialization_mirrors_json_shape() {
        assert_eq!(serde_json::to_string(&ErrorMsgs::new()).unwrap(), "null");
        let one: ErrorMsgs = vec![ErrorMsg::new("first", ErrorType::PRIVATE)].into();
        assert_eq!(serde_json::to_string(&one).unwrap(), r#"{"error":"first"}"#);
        assert_eq!(
            serde_json::to_string(&sample()).unwrap(),
            r#"[{"error":"first"},{"error":"second","meta":"some data"},{"error":"third","status":"400"}]"#
        );
    }

    #[test]
    fn record_defaults_to_private_and_chains() {
        let mut errs = ErrorMsgs::new();
        errs.record("bad input");
        errs.record("shown").set_type(ErrorType::PUBLIC).set_meta("hint");
        assert_eq!(errs.len(), 2);
        assert_eq!(errs.by_type(ErrorType::PRIVATE).errors(), vec!["bad input"]);
        let last = errs.last().unwrap();
        assert_eq!(last.error_type(), ErrorType::PUBLIC);
        assert_eq!(last.json(), json!({"error": "shown", "meta": "hint"}));
    }

    #[test]
    fn null_meta_adds_no_meta_line() {
        let mut errs = ErrorMsgs::new();
        errs.record("x").set_meta(json!(null));
        assert_eq!(errs.to_string(), "Error #01: x\n");
        assert_eq!(errs.json(), ErrorsJson::Single(json!({"error": "x"})));
    }

    #[test]
    fn duplicates_are_kept() {
        let msg = ErrorMsg::new("same", ErrorType::PUBLIC);
        let mut errs = ErrorMsgs::new();
        errs.extend([msg.clone(), msg]);
        assert_eq!(errs.errors(), vec!["same", "same"]);
        assert_eq!((&errs).into_iter().count(), 2);
    }

    #[test]
    #[traced_test]
    fn log_by_type_emits_matching_entries() {
        sample().log_by_type(ErrorType::PRIVATE);
        assert!(logs_contain("request error"));
        assert!(logs_contain("error=first"));
        assert!(logs_contain("meta=some data"));
        assert!(!logs_contain("error=third"));
    }
}
