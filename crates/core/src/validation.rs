//! Field-level request validation and the violation report format.
//!
//! Request bodies declare size constraints through the `validator` derive
//! and blank checks through [`not_blank`]. All violations on a request are
//! collected (never short-circuited) and rendered as one report: sorted
//! `<field>-<code>-<message>` lines joined by newlines, e.g.
//!
//! ```text
//! title-NotBlank-must not be blank
//! title-Size-size must be between 2 and 10
//! ```

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Check that a value contains at least one non-whitespace character.
pub fn not_blank(field: &str, value: &str) -> Option<Violation> {
    if value.trim().is_empty() {
        Some(Violation {
            field: field.to_string(),
            code: "NotBlank".to_string(),
            message: "must not be blank".to_string(),
        })
    } else {
        None
    }
}

/// Flatten `validator` derive output into [`Violation`]s.
pub fn derive_violations(errors: &ValidationErrors) -> Vec<Violation> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| Violation {
                field: field.to_string(),
                code: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string()),
            })
        })
        .collect()
}

/// Render violations as lexicographically sorted `field-code-message` lines.
pub fn report(violations: &[Violation]) -> String {
    let mut lines: Vec<String> = violations
        .iter()
        .map(|v| format!("{}-{}-{}", v.field, v.code, v.message))
        .collect();
    lines.sort();
    lines.join("\n")
}

/// Implemented by request bodies that carry field-level constraints.
///
/// The derive handles size bounds; [`extra_violations`] adds the rules the
/// derive cannot express (blank checks).
///
/// [`extra_violations`]: ValidateRequest::extra_violations
pub trait ValidateRequest: Validate {
    /// Violations the `validator` derive cannot express.
    fn extra_violations(&self) -> Vec<Violation>;

    /// All violations on this request, derive-based and manual.
    fn violations(&self) -> Vec<Violation> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => derive_violations(&errors),
        };
        violations.extend(self.extra_violations());
        violations
    }

    /// The rendered report, or `None` when the request is valid.
    fn violation_report(&self) -> Option<String> {
        let violations = self.violations();
        if violations.is_empty() {
            None
        } else {
            Some(report(&violations))
        }
    }

    /// Validate, converting any violations into a domain error.
    fn validate_request(&self) -> Result<(), CoreError> {
        match self.violation_report() {
            None => Ok(()),
            Some(report) => Err(CoreError::Validation(report)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct TitledRequest {
        #[validate(length(min = 2, max = 10, code = "Size", message = "size must be between 2 and 10"))]
        title: String,
    }

    impl ValidateRequest for TitledRequest {
        fn extra_violations(&self) -> Vec<Violation> {
            not_blank("title", &self.title).into_iter().collect()
        }
    }

    #[test]
    fn valid_value_produces_no_violations() {
        let req = TitledRequest {
            title: "hello".to_string(),
        };
        assert!(req.violations().is_empty());
        assert!(req.validate_request().is_ok());
    }

    #[test]
    fn empty_value_fails_both_constraints() {
        let req = TitledRequest {
            title: String::new(),
        };
        assert_eq!(
            req.violation_report().as_deref(),
            Some("title-NotBlank-must not be blank\ntitle-Size-size must be between 2 and 10"),
        );
    }

    #[test]
    fn whitespace_only_value_fails_only_the_blank_check() {
        // Three spaces satisfy the length bounds but are still blank.
        let req = TitledRequest {
            title: "   ".to_string(),
        };
        assert_eq!(
            req.violation_report().as_deref(),
            Some("title-NotBlank-must not be blank"),
        );
    }

    #[test]
    fn overlong_value_fails_the_size_constraint() {
        let req = TitledRequest {
            title: "a".repeat(11),
        };
        assert_eq!(
            req.violation_report().as_deref(),
            Some("title-Size-size must be between 2 and 10"),
        );
    }

    #[test]
    fn report_lines_are_sorted() {
        let violations = vec![
            Violation {
                field: "title".to_string(),
                code: "Size".to_string(),
                message: "size must be between 2 and 10".to_string(),
            },
            Violation {
                field: "content".to_string(),
                code: "NotBlank".to_string(),
                message: "must not be blank".to_string(),
            },
            Violation {
                field: "title".to_string(),
                code: "NotBlank".to_string(),
                message: "must not be blank".to_string(),
            },
        ];

        assert_eq!(
            report(&violations),
            "content-NotBlank-must not be blank\n\
             title-NotBlank-must not be blank\n\
             title-Size-size must be between 2 and 10",
        );
    }

    #[test]
    fn validate_request_wraps_the_report_in_a_domain_error() {
        let req = TitledRequest {
            title: String::new(),
        };
        match req.validate_request() {
            Err(CoreError::Validation(msg)) => {
                assert!(msg.contains("title-NotBlank"));
                assert!(msg.contains("title-Size"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
