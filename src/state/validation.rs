//! Required-field validation for the vendor form

use super::forms::{FieldId, VendorForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field-scoped error messages. A missing key means the field is valid.
pub type ValidationErrors = BTreeMap<FieldId, String>;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// `local@domain.tld` with no whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Check the four required fields. Everything else is optional.
pub fn validate(form: &VendorForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.company_name.trim().is_empty() {
        errors.insert(FieldId::CompanyName, "Company name is required".to_string());
    }
    if form.primary_contact_name.trim().is_empty() {
        errors.insert(
            FieldId::PrimaryContactName,
            "Primary contact name is required".to_string(),
        );
    }
    if form.email.trim().is_empty() {
        errors.insert(FieldId::Email, "Email address is required".to_string());
    } else if !is_valid_email(&form.email) {
        errors.insert(
            FieldId::Email,
            "Please enter a valid email address".to_string(),
        );
    }
    if form.phone.trim().is_empty() {
        errors.insert(FieldId::Phone, "Phone number is required".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> VendorForm {
        let mut form = VendorForm::empty();
        form.company_name = "Acme".to_string();
        form.primary_contact_name = "Jo".to_string();
        form.email = "jo@acme.io".to_string();
        form.phone = "555".to_string();
        form
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_simple_address() {
            assert!(is_valid_email("a@b.co"));
            assert!(is_valid_email("sarah.mitchell@pinnaclesolutions.com"));
            assert!(is_valid_email("x@sub.domain.org"));
        }

        #[test]
        fn test_rejects_without_at() {
            assert!(!is_valid_email("abc"));
            assert!(!is_valid_email("abc.com"));
        }

        #[test]
        fn test_rejects_without_dot_after_at() {
            assert!(!is_valid_email("a@b"));
            assert!(!is_valid_email("a.b@c"));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!is_valid_email("a b@c.d"));
            assert!(!is_valid_email(" a@b.co"));
            assert!(!is_valid_email("a@@b.co"));
            assert!(!is_valid_email("@b.co"));
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_sample_form_is_valid() {
        assert!(validate(&VendorForm::sample()).is_empty());
    }

    #[test]
    fn test_empty_form_reports_exactly_required_fields() {
        let errors = validate(&VendorForm::empty());
        let keys: Vec<_> = errors.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                FieldId::CompanyName,
                FieldId::PrimaryContactName,
                FieldId::Email,
                FieldId::Phone
            ]
        );
        assert_eq!(errors[&FieldId::CompanyName], "Company name is required");
        assert_eq!(
            errors[&FieldId::PrimaryContactName],
            "Primary contact name is required"
        );
        assert_eq!(errors[&FieldId::Email], "Email address is required");
        assert_eq!(errors[&FieldId::Phone], "Phone number is required");
    }

    #[test]
    fn test_each_missing_field_reports_only_itself() {
        for field in [
            FieldId::CompanyName,
            FieldId::PrimaryContactName,
            FieldId::Email,
            FieldId::Phone,
        ] {
            let mut form = valid_form();
            form.set(field, "");
            let errors = validate(&form);
            assert_eq!(errors.len(), 1, "only {} should fail", field.key());
            assert!(errors.contains_key(&field));
        }
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut form = valid_form();
        form.company_name = "   ".to_string();
        form.phone = "\t".to_string();
        let errors = validate(&form);
        assert!(errors.contains_key(&FieldId::CompanyName));
        assert!(errors.contains_key(&FieldId::Phone));
    }

    #[test]
    fn test_malformed_email_gets_format_message() {
        let mut form = valid_form();
        form.email = "abc".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FieldId::Email).map(String::as_str),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_blank_email_gets_required_message_not_format() {
        let mut form = valid_form();
        form.email = "  ".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FieldId::Email).map(String::as_str),
            Some("Email address is required")
        );
    }

    #[test]
    fn test_optional_fields_never_error() {
        let mut form = valid_form();
        form.secondary_email = "not an email".to_string();
        form.payment_terms = "net90".to_string();
        assert!(validate(&form).is_empty());
    }
}
