//! Builds the task description sent to the generation agent.
//!
//! The wording and line order below are what the agent is prompted with;
//! changing them changes the generated document.

use super::forms::{choice_label, VendorForm, PAYMENT_METHODS, PAYMENT_TERMS};

const NOT_AVAILABLE: &str = "N/A";

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

/// Render the form as the agent prompt. Expects a form that already
/// passed validation; required fields are inserted as-is.
pub fn build_message(form: &VendorForm) -> String {
    let payment_terms = choice_label(PAYMENT_TERMS, &form.payment_terms).unwrap_or(NOT_AVAILABLE);
    let payment_method =
        choice_label(PAYMENT_METHODS, &form.payment_method).unwrap_or(NOT_AVAILABLE);

    let lines = [
        "Generate a professional Vendor Onboarding PDF with the following details:".to_string(),
        String::new(),
        "Company Details:".to_string(),
        format!("- Company Name: {}", form.company_name),
        format!("- Registration Number: {}", or_na(&form.registration_number)),
        format!("- Tax ID/EIN: {}", or_na(&form.tax_id)),
        format!("- Address: {}", or_na(&form.address)),
        format!("- City: {}", or_na(&form.city)),
        format!("- State: {}", or_na(&form.state)),
        format!("- Zip Code: {}", or_na(&form.zip_code)),
        format!("- Country: {}", or_na(&form.country)),
        String::new(),
        "Contact Information:".to_string(),
        format!("- Primary Contact: {}", form.primary_contact_name),
        format!("- Job Title: {}", or_na(&form.job_title)),
        format!("- Email: {}", form.email),
        format!("- Phone: {}", form.phone),
        format!(
            "- Secondary Contact: {}",
            or_na(&form.secondary_contact_name)
        ),
        format!("- Secondary Email: {}", or_na(&form.secondary_email)),
        String::new(),
        "Business Details:".to_string(),
        format!("- Business Type: {}", or_na(&form.business_type)),
        format!("- Industry: {}", or_na(&form.industry)),
        format!("- Annual Revenue: {}", or_na(&form.annual_revenue)),
        format!("- Payment Terms: {payment_terms}"),
        format!("- Preferred Payment Method: {payment_method}"),
    ];

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldId;
    use pretty_assertions::assert_eq;

    fn required_only() -> VendorForm {
        let mut form = VendorForm::empty();
        form.company_name = "Acme".to_string();
        form.primary_contact_name = "Jo Park".to_string();
        form.email = "jo@acme.io".to_string();
        form.phone = "555-0100".to_string();
        form
    }

    fn line_value<'a>(message: &'a str, prefix: &str) -> &'a str {
        message
            .lines()
            .find_map(|l| l.strip_prefix(prefix))
            .unwrap_or_else(|| panic!("missing line {prefix}"))
    }

    #[test]
    fn test_sample_message_matches_exactly() {
        let expected = "Generate a professional Vendor Onboarding PDF with the following details:

Company Details:
- Company Name: Pinnacle Solutions Inc.
- Registration Number: REG-2024-78432
- Tax ID/EIN: 47-1234567
- Address: 1200 Innovation Drive, Suite 450
- City: Austin
- State: Texas
- Zip Code: 78701
- Country: United States

Contact Information:
- Primary Contact: Sarah Mitchell
- Job Title: VP of Procurement
- Email: sarah.mitchell@pinnaclesolutions.com
- Phone: +1 (512) 555-0198
- Secondary Contact: David Chen
- Secondary Email: david.chen@pinnaclesolutions.com

Business Details:
- Business Type: Corporation
- Industry: Technology
- Annual Revenue: $5M-$25M
- Payment Terms: Net 30
- Preferred Payment Method: Bank Transfer";

        assert_eq!(build_message(&VendorForm::sample()), expected);
    }

    #[test]
    fn test_is_deterministic() {
        let form = VendorForm::sample();
        assert_eq!(build_message(&form), build_message(&form.clone()));
    }

    #[test]
    fn test_blank_optional_fields_render_na() {
        let message = build_message(&required_only());
        for prefix in [
            "- Registration Number: ",
            "- Tax ID/EIN: ",
            "- Address: ",
            "- City: ",
            "- State: ",
            "- Zip Code: ",
            "- Country: ",
            "- Job Title: ",
            "- Secondary Contact: ",
            "- Secondary Email: ",
            "- Business Type: ",
            "- Industry: ",
            "- Annual Revenue: ",
            "- Payment Terms: ",
            "- Preferred Payment Method: ",
        ] {
            assert_eq!(line_value(&message, prefix), "N/A", "{prefix}");
        }
        assert_eq!(line_value(&message, "- Company Name: "), "Acme");
        assert_eq!(line_value(&message, "- Phone: "), "555-0100");
    }

    #[test]
    fn test_payment_terms_labels() {
        let mut form = required_only();
        for (code, label) in [
            ("net30", "Net 30"),
            ("net45", "Net 45"),
            ("net60", "Net 60"),
            ("net90", "N/A"),
        ] {
            form.set(FieldId::PaymentTerms, code);
            assert_eq!(
                line_value(&build_message(&form), "- Payment Terms: "),
                label
            );
        }
    }

    #[test]
    fn test_payment_method_labels() {
        let mut form = required_only();
        for (code, label) in [
            ("bank_transfer", "Bank Transfer"),
            ("check", "Check"),
            ("credit_card", "Credit Card"),
            ("crypto", "N/A"),
        ] {
            form.set(FieldId::PaymentMethod, code);
            assert_eq!(
                line_value(&build_message(&form), "- Preferred Payment Method: "),
                label
            );
        }
    }

    #[test]
    fn test_has_no_trailing_newline() {
        assert!(!build_message(&VendorForm::sample()).ends_with('\n'));
    }
}
