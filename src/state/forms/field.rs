//! Form field identities and their fixed option sets

/// A selectable option of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Value stored in the form
    pub value: &'static str,
    /// Label shown to the user and used in the generated prompt
    pub label: &'static str,
}

impl Choice {
    const fn plain(value: &'static str) -> Self {
        Self {
            value,
            label: value,
        }
    }

    const fn coded(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub const COUNTRIES: &[Choice] = &[
    Choice::plain("United States"),
    Choice::plain("Canada"),
    Choice::plain("United Kingdom"),
    Choice::plain("Germany"),
    Choice::plain("France"),
    Choice::plain("Australia"),
    Choice::plain("Japan"),
    Choice::plain("India"),
    Choice::plain("Brazil"),
    Choice::plain("Mexico"),
    Choice::plain("China"),
    Choice::plain("South Korea"),
    Choice::plain("Italy"),
    Choice::plain("Spain"),
    Choice::plain("Netherlands"),
    Choice::plain("Switzerland"),
    Choice::plain("Sweden"),
    Choice::plain("Singapore"),
    Choice::plain("Ireland"),
    Choice::plain("New Zealand"),
    Choice::plain("South Africa"),
    Choice::plain("United Arab Emirates"),
    Choice::plain("Other"),
];

pub const BUSINESS_TYPES: &[Choice] = &[
    Choice::plain("Corporation"),
    Choice::plain("LLC"),
    Choice::plain("Partnership"),
    Choice::plain("Sole Proprietorship"),
    Choice::plain("Non-Profit"),
    Choice::plain("Government"),
    Choice::plain("Other"),
];

pub const INDUSTRIES: &[Choice] = &[
    Choice::plain("Technology"),
    Choice::plain("Healthcare"),
    Choice::plain("Finance"),
    Choice::plain("Manufacturing"),
    Choice::plain("Retail"),
    Choice::plain("Education"),
    Choice::plain("Construction"),
    Choice::plain("Other"),
];

pub const REVENUE_RANGES: &[Choice] = &[
    Choice::plain("Under $1M"),
    Choice::plain("$1M-$5M"),
    Choice::plain("$5M-$25M"),
    Choice::plain("$25M-$100M"),
    Choice::plain("Over $100M"),
];

pub const PAYMENT_TERMS: &[Choice] = &[
    Choice::coded("net30", "Net 30"),
    Choice::coded("net45", "Net 45"),
    Choice::coded("net60", "Net 60"),
];

pub const PAYMENT_METHODS: &[Choice] = &[
    Choice::coded("bank_transfer", "Bank Transfer"),
    Choice::coded("check", "Check"),
    Choice::coded("credit_card", "Credit Card"),
];

/// Look up the display label for a stored value
pub fn choice_label(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices.iter().find(|c| c.value == value).map(|c| c.label)
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text typed by the user
    Text,
    /// Dropdown-style choice, cycled with the arrow keys
    Select(&'static [Choice]),
    /// Inline radio group, all options visible at once
    Radio(&'static [Choice]),
}

impl FieldKind {
    pub fn choices(&self) -> Option<&'static [Choice]> {
        match self {
            FieldKind::Text => None,
            FieldKind::Select(c) | FieldKind::Radio(c) => Some(c),
        }
    }
}

/// Form sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Company,
    Contact,
    Business,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Company, Section::Contact, Section::Business];

    pub fn number(&self) -> u8 {
        match self {
            Section::Company => 1,
            Section::Contact => 2,
            Section::Business => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Company => "Company Details",
            Section::Contact => "Contact Information",
            Section::Business => "Business Details",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::Company => "Legal entity and address information",
            Section::Contact => "Primary and secondary contacts",
            Section::Business => "Classification, revenue, and payment preferences",
        }
    }

    /// Fields belonging to this section, in display order
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::ALL.into_iter().filter(move |f| f.section() == *self)
    }
}

/// Identity of every vendor form field.
///
/// The set is closed: the empty preset, the sample preset and the
/// validation error map are all keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    CompanyName,
    RegistrationNumber,
    TaxId,
    Address,
    City,
    State,
    ZipCode,
    Country,
    PrimaryContactName,
    JobTitle,
    Email,
    Phone,
    SecondaryContactName,
    SecondaryEmail,
    BusinessType,
    Industry,
    AnnualRevenue,
    PaymentTerms,
    PaymentMethod,
}

impl FieldId {
    pub const COUNT: usize = 19;

    pub const ALL: [FieldId; Self::COUNT] = [
        FieldId::CompanyName,
        FieldId::RegistrationNumber,
        FieldId::TaxId,
        FieldId::Address,
        FieldId::City,
        FieldId::State,
        FieldId::ZipCode,
        FieldId::Country,
        FieldId::PrimaryContactName,
        FieldId::JobTitle,
        FieldId::Email,
        FieldId::Phone,
        FieldId::SecondaryContactName,
        FieldId::SecondaryEmail,
        FieldId::BusinessType,
        FieldId::Industry,
        FieldId::AnnualRevenue,
        FieldId::PaymentTerms,
        FieldId::PaymentMethod,
    ];

    /// Position of the field in [`FieldId::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable key used in logs and the error map
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::CompanyName => "companyName",
            FieldId::RegistrationNumber => "registrationNumber",
            FieldId::TaxId => "taxId",
            FieldId::Address => "address",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::ZipCode => "zipCode",
            FieldId::Country => "country",
            FieldId::PrimaryContactName => "primaryContactName",
            FieldId::JobTitle => "jobTitle",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::SecondaryContactName => "secondaryContactName",
            FieldId::SecondaryEmail => "secondaryEmail",
            FieldId::BusinessType => "businessType",
            FieldId::Industry => "industry",
            FieldId::AnnualRevenue => "annualRevenue",
            FieldId::PaymentTerms => "paymentTerms",
            FieldId::PaymentMethod => "paymentMethod",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::CompanyName => "Company Name",
            FieldId::RegistrationNumber => "Registration Number",
            FieldId::TaxId => "Tax ID / EIN",
            FieldId::Address => "Address",
            FieldId::City => "City",
            FieldId::State => "State / Province",
            FieldId::ZipCode => "Zip / Postal Code",
            FieldId::Country => "Country",
            FieldId::PrimaryContactName => "Primary Contact Name",
            FieldId::JobTitle => "Job Title",
            FieldId::Email => "Email Address",
            FieldId::Phone => "Phone Number",
            FieldId::SecondaryContactName => "Secondary Contact Name",
            FieldId::SecondaryEmail => "Secondary Email",
            FieldId::BusinessType => "Business Type",
            FieldId::Industry => "Industry",
            FieldId::AnnualRevenue => "Annual Revenue",
            FieldId::PaymentTerms => "Payment Terms",
            FieldId::PaymentMethod => "Preferred Payment Method",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::CompanyName => "e.g. Acme Corporation",
            FieldId::RegistrationNumber => "e.g. REG-2024-12345",
            FieldId::TaxId => "e.g. 12-3456789",
            FieldId::Address => "e.g. 123 Business Ave, Suite 100",
            FieldId::City => "e.g. San Francisco",
            FieldId::State => "e.g. California",
            FieldId::ZipCode => "e.g. 94105",
            FieldId::Country => "Select country",
            FieldId::PrimaryContactName => "e.g. John Smith",
            FieldId::JobTitle => "e.g. VP of Procurement",
            FieldId::Email => "e.g. john@company.com",
            FieldId::Phone => "e.g. +1 (555) 123-4567",
            FieldId::SecondaryContactName => "e.g. Jane Doe",
            FieldId::SecondaryEmail => "e.g. jane@company.com",
            FieldId::BusinessType => "Select business type",
            FieldId::Industry => "Select industry",
            FieldId::AnnualRevenue => "Select revenue range",
            FieldId::PaymentTerms | FieldId::PaymentMethod => "",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FieldId::CompanyName | FieldId::PrimaryContactName | FieldId::Email | FieldId::Phone
        )
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::Country => FieldKind::Select(COUNTRIES),
            FieldId::BusinessType => FieldKind::Select(BUSINESS_TYPES),
            FieldId::Industry => FieldKind::Select(INDUSTRIES),
            FieldId::AnnualRevenue => FieldKind::Select(REVENUE_RANGES),
            FieldId::PaymentTerms => FieldKind::Radio(PAYMENT_TERMS),
            FieldId::PaymentMethod => FieldKind::Radio(PAYMENT_METHODS),
            _ => FieldKind::Text,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            FieldId::CompanyName
            | FieldId::RegistrationNumber
            | FieldId::TaxId
            | FieldId::Address
            | FieldId::City
            | FieldId::State
            | FieldId::ZipCode
            | FieldId::Country => Section::Company,
            FieldId::PrimaryContactName
            | FieldId::JobTitle
            | FieldId::Email
            | FieldId::Phone
            | FieldId::SecondaryContactName
            | FieldId::SecondaryEmail => Section::Contact,
            FieldId::BusinessType
            | FieldId::Industry
            | FieldId::AnnualRevenue
            | FieldId::PaymentTerms
            | FieldId::PaymentMethod => Section::Business,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(FieldId::from_index(i), Some(*field));
        }
        assert!(FieldId::from_index(FieldId::COUNT).is_none());
    }

    #[test]
    fn test_only_four_fields_are_required() {
        let required: Vec<_> = FieldId::ALL.iter().filter(|f| f.is_required()).collect();
        assert_eq!(
            required,
            vec![
                &FieldId::CompanyName,
                &FieldId::PrimaryContactName,
                &FieldId::Email,
                &FieldId::Phone
            ]
        );
    }

    #[test]
    fn test_sections_partition_all_fields() {
        let total: usize = Section::ALL.iter().map(|s| s.fields().count()).sum();
        assert_eq!(total, FieldId::COUNT);
        assert_eq!(Section::Company.fields().count(), 8);
        assert_eq!(Section::Contact.fields().count(), 6);
        assert_eq!(Section::Business.fields().count(), 5);
    }

    #[test]
    fn test_choice_label_lookup() {
        assert_eq!(choice_label(PAYMENT_TERMS, "net45"), Some("Net 45"));
        assert_eq!(choice_label(PAYMENT_METHODS, "check"), Some("Check"));
        assert_eq!(choice_label(PAYMENT_METHODS, "cash"), None);
        assert_eq!(choice_label(COUNTRIES, "Japan"), Some("Japan"));
    }

    #[test]
    fn test_choice_fields_have_options() {
        assert!(FieldId::CompanyName.kind().choices().is_none());
        assert_eq!(FieldId::Country.kind().choices().map(|c| c.len()), Some(23));
        assert!(matches!(FieldId::PaymentTerms.kind(), FieldKind::Radio(_)));
        assert!(matches!(FieldId::Industry.kind(), FieldKind::Select(_)));
    }
}
