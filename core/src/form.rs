//! State of the single-field search form.

use crate::error::ValidationError;
use crate::filter::{EmptyQuery, Query};

/// Name of the bound input field.
pub const QUERY_FIELD: &str = "query";

/// The search form: one text field, validated on submit and, once touched,
/// on every change.
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    value: String,
    policy: EmptyQuery,
    touched: bool,
    /// Mirrors the disabled state of the submit button. Validation is
    /// synchronous, so hosts never observe it set; it keeps the rendered
    /// button in the same shape as a form with asynchronous submission.
    submitting: bool,
    error: Option<ValidationError>,
}

impl QueryForm {
    pub fn new(policy: EmptyQuery) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Back to a fresh, untouched form under the same policy.
    pub fn reset(&mut self) {
        *self = Self::new(self.policy);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Inline error to show next to the input, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        if self.touched {
            self.error.as_ref()
        } else {
            None
        }
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        if self.touched {
            self.error = Query::parse(&self.value, self.policy).err();
        }
    }

    /// Validate the current value. The submitting flag is set for the
    /// duration of the call only; there is no asynchronous work to wait on.
    pub fn submit(&mut self) -> Result<Query, ValidationError> {
        self.submitting = true;
        self.touched = true;
        let result = Query::parse(&self.value, self.policy);
        self.error = result.as_ref().err().cloned();
        self.submitting = false;
        result
    }
}
