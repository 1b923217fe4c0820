// src/domain/inquiry.rs

use crate::errors::InquiryError;
use chrono::NaiveDateTime;

/// A visitor's contact request as submitted through a form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    pub property_id: Option<String>,
    pub property_custom_id: Option<String>,
    pub source: Option<String>,
}

/// A persisted lead.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: Option<String>,
    pub property_custom_id: Option<String>,
    pub source: String,
    pub status: String,
    pub reveal: bool,
    pub created_at: NaiveDateTime,
}

pub const DEFAULT_SOURCE: &str = "website";

impl NewInquiry {
    /// Trims every field, turns blank optionals into `None` and checks the
    /// required ones.
    pub fn validate(self) -> Result<NewInquiry, InquiryError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_lowercase();
        let message = self.message.trim().to_string();

        if name.is_empty() {
            return Err(InquiryError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(InquiryError::MissingField("email"));
        }
        if message.is_empty() {
            return Err(InquiryError::MissingField("message"));
        }
        if !looks_like_email(&email) {
            return Err(InquiryError::InvalidEmail);
        }

        Ok(NewInquiry {
            name,
            email,
            message,
            phone: non_blank(self.phone),
            property_id: non_blank(self.property_id),
            property_custom_id: non_blank(self.property_custom_id),
            source: non_blank(self.source),
        })
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn looks_like_email(e: &str) -> bool {
    match e.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewInquiry {
        NewInquiry {
            name: " Ana ".into(),
            email: "Ana@Example.com ".into(),
            message: "Is the villa still available?".into(),
            phone: Some("  ".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let ok = form().validate().unwrap();
        assert_eq!(ok.name, "Ana");
        assert_eq!(ok.email, "ana@example.com");
        assert_eq!(ok.phone, None);
    }

    #[test]
    fn required_fields_are_enforced() {
        let mut f = form();
        f.message = "   ".into();
        assert_eq!(f.validate(), Err(InquiryError::MissingField("message")));

        let mut f = form();
        f.name.clear();
        assert_eq!(f.validate(), Err(InquiryError::MissingField("name")));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut f = form();
        f.email = "ana@localhost".into();
        assert_eq!(f.validate(), Err(InquiryError::InvalidEmail));
    }
}
