//! Vendor form model and its presets

use super::field::FieldId;

/// Trait for moving focus around a form
pub trait Form {
    fn focus_count(&self) -> usize;
    fn focus_index(&self) -> usize;
    fn set_focus_index(&mut self, index: usize);
    fn next_focus(&mut self) {
        let count = self.focus_count();
        let current = self.focus_index();
        self.set_focus_index((current + 1) % count);
    }
    fn prev_focus(&mut self) {
        let count = self.focus_count();
        let current = self.focus_index();
        if current == 0 {
            self.set_focus_index(count - 1);
        } else {
            self.set_focus_index(current - 1);
        }
    }
}

/// Which preset the form was last loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Empty,
    Sample,
}

impl Preset {
    pub fn toggled(&self) -> Self {
        match self {
            Preset::Empty => Preset::Sample,
            Preset::Sample => Preset::Empty,
        }
    }

    pub fn form(&self) -> VendorForm {
        match self {
            Preset::Empty => VendorForm::empty(),
            Preset::Sample => VendorForm::sample(),
        }
    }
}

/// All vendor onboarding inputs. Every value is a plain string; choice
/// fields hold the option value (e.g. `net30`), not its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorForm {
    pub company_name: String,
    pub registration_number: String,
    pub tax_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub primary_contact_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub secondary_contact_name: String,
    pub secondary_email: String,
    pub business_type: String,
    pub industry: String,
    pub annual_revenue: String,
    pub payment_terms: String,
    pub payment_method: String,
}

impl VendorForm {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fully populated demo vendor
    pub fn sample() -> Self {
        Self {
            company_name: "Pinnacle Solutions Inc.".to_string(),
            registration_number: "REG-2024-78432".to_string(),
            tax_id: "47-1234567".to_string(),
            address: "1200 Innovation Drive, Suite 450".to_string(),
            city: "Austin".to_string(),
            state: "Texas".to_string(),
            zip_code: "78701".to_string(),
            country: "United States".to_string(),
            primary_contact_name: "Sarah Mitchell".to_string(),
            job_title: "VP of Procurement".to_string(),
            email: "sarah.mitchell@pinnaclesolutions.com".to_string(),
            phone: "+1 (512) 555-0198".to_string(),
            secondary_contact_name: "David Chen".to_string(),
            secondary_email: "david.chen@pinnaclesolutions.com".to_string(),
            business_type: "Corporation".to_string(),
            industry: "Technology".to_string(),
            annual_revenue: "$5M-$25M".to_string(),
            payment_terms: "net30".to_string(),
            payment_method: "bank_transfer".to_string(),
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::CompanyName => &self.company_name,
            FieldId::RegistrationNumber => &self.registration_number,
            FieldId::TaxId => &self.tax_id,
            FieldId::Address => &self.address,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::ZipCode => &self.zip_code,
            FieldId::Country => &self.country,
            FieldId::PrimaryContactName => &self.primary_contact_name,
            FieldId::JobTitle => &self.job_title,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::SecondaryContactName => &self.secondary_contact_name,
            FieldId::SecondaryEmail => &self.secondary_email,
            FieldId::BusinessType => &self.business_type,
            FieldId::Industry => &self.industry,
            FieldId::AnnualRevenue => &self.annual_revenue,
            FieldId::PaymentTerms => &self.payment_terms,
            FieldId::PaymentMethod => &self.payment_method,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::CompanyName => &mut self.company_name,
            FieldId::RegistrationNumber => &mut self.registration_number,
            FieldId::TaxId => &mut self.tax_id,
            FieldId::Address => &mut self.address,
            FieldId::City => &mut self.city,
            FieldId::State => &mut self.state,
            FieldId::ZipCode => &mut self.zip_code,
            FieldId::Country => &mut self.country,
            FieldId::PrimaryContactName => &mut self.primary_contact_name,
            FieldId::JobTitle => &mut self.job_title,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::SecondaryContactName => &mut self.secondary_contact_name,
            FieldId::SecondaryEmail => &mut self.secondary_email,
            FieldId::BusinessType => &mut self.business_type,
            FieldId::Industry => &mut self.industry,
            FieldId::AnnualRevenue => &mut self.annual_revenue,
            FieldId::PaymentTerms => &mut self.payment_terms,
            FieldId::PaymentMethod => &mut self.payment_method,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Value the field would hold after one keystroke or arrow press.
    /// Returns `None` when the edit does not apply to the field kind.
    pub fn edited_value(&self, field: FieldId, edit: FieldEdit) -> Option<String> {
        let current = self.get(field);
        match (edit, field.kind().choices()) {
            (FieldEdit::Insert(c), None) => {
                let mut next = current.to_string();
                next.push(c);
                Some(next)
            }
            (FieldEdit::Backspace, None) => {
                let mut next = current.to_string();
                next.pop()?;
                Some(next)
            }
            (FieldEdit::Backspace, Some(_)) if !current.is_empty() => Some(String::new()),
            (FieldEdit::NextChoice, Some(choices)) | (FieldEdit::PrevChoice, Some(choices)) => {
                if choices.is_empty() {
                    return None;
                }
                let position = choices.iter().position(|c| c.value == current);
                let index = match (edit, position) {
                    (FieldEdit::NextChoice, Some(i)) => (i + 1) % choices.len(),
                    (FieldEdit::NextChoice, None) => 0,
                    (_, Some(0)) | (_, None) => choices.len() - 1,
                    (_, Some(i)) => i - 1,
                };
                Some(choices[index].value.to_string())
            }
            _ => None,
        }
    }
}

/// A single user edit applied to the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    NextChoice,
    PrevChoice,
}
