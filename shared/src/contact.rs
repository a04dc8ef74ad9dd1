use std::borrow::Cow;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Fields in the order they appear on the form. Errors are reported in this order.
const FIELD_ORDER: [&str; 3] = ["name", "email", "message"];

const NAME_MIN: usize = 2;
const MESSAGE_MIN: usize = 10;

/// A contact form submission as it arrives over the wire.
///
/// Every field is optional so a missing field turns into a `required`
/// field error instead of a body-level parse failure. A field holding
/// something other than a string is remembered and reported as
/// `invalid_type` on that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(from = "RawPayload")]
pub struct ContactPayload {
    #[validate(required(message = "Required"), custom(function = "name_long_enough"))]
    pub name: Option<String>,
    #[validate(
        required(message = "Required"),
        email(message = "Invalid email address"),
        custom(function = "email_has_tld")
    )]
    pub email: Option<String>,
    #[validate(required(message = "Required"), custom(function = "message_long_enough"))]
    pub message: Option<String>,
    #[serde(skip)]
    mistyped: Vec<&'static str>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Mistyped(IgnoredAny),
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    name: Option<RawField>,
    #[serde(default)]
    email: Option<RawField>,
    #[serde(default)]
    message: Option<RawField>,
}

impl From<RawPayload> for ContactPayload {
    fn from(raw: RawPayload) -> Self {
        let mut mistyped = Vec::new();
        let mut text = |field: &'static str, value: Option<RawField>| match value {
            Some(RawField::Text(value)) => Some(value),
            Some(RawField::Mistyped(_)) => {
                mistyped.push(field);
                None
            }
            None => None,
        };
        let name = text("name", raw.name);
        let email = text("email", raw.email);
        let message = text("message", raw.message);
        Self {
            name,
            email,
            message,
            mistyped,
        }
    }
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Lengths are counted in UTF-16 code units, the way browsers count them.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn name_long_enough(value: &str) -> Result<(), ValidationError> {
    if utf16_len(value) < NAME_MIN {
        return Err(failure("length", "Name must be at least 2 characters"));
    }
    Ok(())
}

fn message_long_enough(value: &str) -> Result<(), ValidationError> {
    if utf16_len(value) < MESSAGE_MIN {
        return Err(failure("length", "Message must be at least 10 characters"));
    }
    Ok(())
}

/// The domain must end in a dot and a top-level label of two or more
/// letters. Addresses without an `@` are left to the `email` rule.
fn email_has_tld(value: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = value.rsplit_once('@') else {
        return Ok(());
    };
    let has_tld = domain.rsplit_once('.').is_some_and(|(host, tld)| {
        !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
    });
    if has_tld {
        Ok(())
    } else {
        Err(failure("email", "Invalid email address"))
    }
}

fn form_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|known| *known == field)
        .unwrap_or(FIELD_ORDER.len())
}

/// A submission that passed validation. Only `ContactPayload::into_message`
/// builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    Required,
    TooShort,
    InvalidEmail,
    InvalidType,
    InvalidBody,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: FieldErrorCode,
    pub message: String,
}

impl ContactPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            mistyped: Vec::new(),
        }
    }

    /// Runs the schema and returns the field errors in form order.
    pub fn check(&self) -> Vec<FieldError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FieldError::from_validation(&errors),
        };
        if self.mistyped.is_empty() {
            return errors;
        }
        errors.retain(|e| !self.mistyped.contains(&e.field.as_str()));
        errors.extend(
            self.mistyped
                .iter()
                .map(|field| FieldError::new(*field, FieldErrorCode::InvalidType, "Expected string")),
        );
        errors.sort_by_key(|e| form_rank(&e.field));
        errors
    }

    pub fn into_message(self) -> Result<ContactMessage, Vec<FieldError>> {
        let errors = self.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        // `required` passed, every field is present
        Ok(ContactMessage {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    /// The single error reported when the request body is not a JSON object.
    pub fn invalid_body(detail: impl Into<String>) -> Self {
        Self::new("body", FieldErrorCode::InvalidBody, detail)
    }

    pub fn from_validation(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut out: Vec<(usize, FieldError)> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            let rank = form_rank(&field);
            for err in field_errors.iter() {
                let code = match err.code.as_ref() {
                    "required" => FieldErrorCode::Required,
                    "length" => FieldErrorCode::TooShort,
                    "email" => FieldErrorCode::InvalidEmail,
                    _ => FieldErrorCode::Invalid,
                };
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                // `email` and the TLD rule can both fail the same address
                if out.iter().any(|(_, e)| e.field == field && e.code == code) {
                    continue;
                }
                out.push((rank, FieldError::new(field.clone(), code, message)));
            }
        }
        out.sort_by_key(|(rank, _)| *rank);
        out.into_iter().map(|(_, e)| e).collect()
    }
}

/// `200` body for an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
    /// Echo of the accepted submission, only sent by stateless deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ContactMessage>,
}

impl ContactAccepted {
    pub fn new(id: Uuid, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id,
            data: None,
        }
    }

    pub fn with_data(mut self, data: ContactMessage) -> Self {
        self.data = Some(data);
        self
    }
}

/// `400` body listing every field that failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRejected {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

impl ContactRejected {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { success: false, errors }
    }
}

/// Body for `405` and `500` responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_submission() {
        let payload = ContactPayload::new("Al", "al@x.com", "Hello there, this is long enough.");
        let message = payload.into_message().expect("valid payload");
        assert_eq!(message.name, "Al");
        assert_eq!(message.email, "al@x.com");
    }

    #[test]
    fn reports_all_three_fields_in_form_order() {
        let errors = ContactPayload::new("A", "bad", "short").check();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
        assert_eq!(errors[0].code, FieldErrorCode::TooShort);
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
        assert_eq!(errors[1].code, FieldErrorCode::InvalidEmail);
        assert_eq!(errors[1].message, "Invalid email address");
        assert_eq!(errors[2].code, FieldErrorCode::TooShort);
    }

    #[test]
    fn boundary_lengths() {
        assert!(ContactPayload::new("Al", "al@x.com", "0123456789").check().is_empty());
        let errors = ContactPayload::new("Al", "al@x.com", "012345678").check();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn email_without_tld_is_rejected() {
        for email in ["al@x", "al@x.c", "al@.com", "al@x.c0m"] {
            let errors = ContactPayload::new("Al", email, "Hello there, this is long enough.").check();
            assert_eq!(errors.len(), 1, "{}", email);
            assert_eq!(errors[0].field, "email");
            assert_eq!(errors[0].code, FieldErrorCode::InvalidEmail);
            assert_eq!(errors[0].message, "Invalid email address");
        }
    }

    #[test]
    fn malformed_email_reports_one_error() {
        let errors = ContactPayload::new("Al", "bad", "Hello there, this is long enough.").check();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, FieldErrorCode::InvalidEmail);
    }

    #[test]
    fn lengths_count_utf16_units() {
        // one emoji is two UTF-16 units
        assert!(ContactPayload::new("😀", "al@x.com", "0123456789").check().is_empty());
        let errors = ContactPayload::new("é", "al@x.com", "😀😀😀😀😀").check();
        assert!(errors.iter().any(|e| e.field == "name" && e.code == FieldErrorCode::TooShort));
        assert!(errors.iter().all(|e| e.field != "message"));
    }

    #[test]
    fn non_string_field_is_reported_on_that_field() {
        let payload: ContactPayload =
            serde_json::from_str(r#"{"name":123,"email":"al@x.com","message":["hi"]}"#).unwrap();
        let errors = payload.check();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].code, FieldErrorCode::InvalidType);
        assert_eq!(errors[0].message, "Expected string");
        assert_eq!(errors[1].field, "message");
        assert_eq!(errors[1].code, FieldErrorCode::InvalidType);
        assert!(payload.into_message().is_err());
    }

    #[test]
    fn non_object_body_does_not_parse() {
        assert!(serde_json::from_str::<ContactPayload>("[1, 2]").is_err());
        assert!(serde_json::from_str::<ContactPayload>(r#""hello""#).is_err());
    }

    #[test]
    fn missing_fields_are_required() {
        let payload: ContactPayload = serde_json::from_str(r#"{"email":"al@x.com"}"#).unwrap();
        let errors = payload.check();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.code == FieldErrorCode::Required));
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1].field, "message");
    }

    #[test]
    fn accepted_body_omits_data_unless_set() {
        let id = Uuid::nil();
        let body = serde_json::to_value(ContactAccepted::new(id, "Message sent successfully")).unwrap();
        assert_eq!(body["success"], true);
        assert!(body.get("data").is_none());
    }

    #[test]
    fn error_codes_serialize_snake_case() {
        let err = FieldError::new("email", FieldErrorCode::InvalidEmail, "Invalid email address");
        let body = serde_json::to_value(&err).unwrap();
        assert_eq!(body["code"], "invalid_email");
    }
}
