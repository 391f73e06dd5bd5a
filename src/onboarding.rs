//! Onboarding Forms
//!
//! Form state and per-step validation for vendor onboarding and checker
//! registration.

use serde::Serialize;

use crate::wizard::{is_digits, is_valid_email, require, FieldError, StepForm, WizardStep};

// ========================
// Vendor Onboarding
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorStep {
    Business,
    Contact,
    Bank,
    Documents,
    Review,
}

impl WizardStep for VendorStep {
    const ALL: &'static [Self] = &[
        VendorStep::Business,
        VendorStep::Contact,
        VendorStep::Bank,
        VendorStep::Documents,
        VendorStep::Review,
    ];

    fn title(&self) -> &'static str {
        match self {
            VendorStep::Business => "Business Info",
            VendorStep::Contact => "Contact",
            VendorStep::Bank => "Bank Details",
            VendorStep::Documents => "Documents",
            VendorStep::Review => "Review",
        }
    }
}

pub const BUSINESS_TYPES: &[&str] = &["Individual", "Partnership", "Private Limited", "LLP"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorApplication {
    pub business_name: String,
    pub business_type: String,
    /// GSTIN, optional
    pub gst_number: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub pincode: String,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc: String,
    /// Uploaded file names
    pub documents: Vec<String>,
    pub agree_terms: bool,
}

impl StepForm<VendorStep> for VendorApplication {
    fn validate_step(&self, step: VendorStep) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            VendorStep::Business => {
                require(&mut errors, "businessName", &self.business_name, "Business name");
                if !BUSINESS_TYPES.contains(&self.business_type.as_str()) {
                    errors.push(FieldError::new("businessType", "Select a business type"));
                }
                let gst = self.gst_number.trim();
                if !gst.is_empty() && !is_valid_gstin(gst) {
                    errors.push(FieldError::new("gstNumber", "GSTIN must be 15 letters or digits"));
                }
            }
            VendorStep::Contact => {
                require(&mut errors, "contactName", &self.contact_name, "Contact name");
                if !is_valid_email(&self.email) {
                    errors.push(FieldError::new("email", "Enter a valid e-mail address"));
                }
                if !is_digits(&self.phone, 10, 10) {
                    errors.push(FieldError::new("phone", "Phone must be 10 digits"));
                }
                require(&mut errors, "city", &self.city, "City");
                if !is_digits(&self.pincode, 6, 6) {
                    errors.push(FieldError::new("pincode", "PIN code must be 6 digits"));
                }
            }
            VendorStep::Bank => {
                require(&mut errors, "accountHolder", &self.account_holder, "Account holder");
                if !is_digits(&self.account_number, 9, 18) {
                    errors.push(FieldError::new("accountNumber", "Account number must be 9 to 18 digits"));
                }
                if !is_valid_ifsc(&self.ifsc) {
                    errors.push(FieldError::new("ifsc", "IFSC must look like ABCD0123456"));
                }
            }
            VendorStep::Documents => {
                if self.documents.is_empty() {
                    errors.push(FieldError::new("documents", "Upload at least one document"));
                }
            }
            VendorStep::Review => {
                if !self.agree_terms {
                    errors.push(FieldError::new("agreeTerms", "Accept the seller terms to continue"));
                }
            }
        }
        errors
    }
}

fn is_valid_gstin(gst: &str) -> bool {
    gst.len() == 15 && gst.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Four letters, a zero, then six letters or digits
pub fn is_valid_ifsc(ifsc: &str) -> bool {
    let ifsc = ifsc.trim();
    let bytes = ifsc.as_bytes();
    bytes.len() == 11
        && bytes[..4].iter().all(u8::is_ascii_alphabetic)
        && bytes[4] == b'0'
        && bytes[5..].iter().all(u8::is_ascii_alphanumeric)
}

// ========================
// Checker Registration
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerStep {
    Personal,
    Credentials,
    Coverage,
    Review,
}

impl WizardStep for CheckerStep {
    const ALL: &'static [Self] = &[
        CheckerStep::Personal,
        CheckerStep::Credentials,
        CheckerStep::Coverage,
        CheckerStep::Review,
    ];

    fn title(&self) -> &'static str {
        match self {
            CheckerStep::Personal => "Personal Info",
            CheckerStep::Credentials => "Credentials",
            CheckerStep::Coverage => "Coverage",
            CheckerStep::Review => "Review",
        }
    }
}

pub const CHECKER_REGIONS: &[&str] = &["North", "South", "East", "West", "Central"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    pub experience_years: String,
    pub regions: Vec<String>,
    pub category_ids: Vec<u32>,
    pub agree_terms: bool,
}

impl CheckerApplication {
    pub fn toggle_region(&mut self, region: &str) {
        toggle(&mut self.regions, region.to_string());
    }

    pub fn toggle_category(&mut self, id: u32) {
        toggle(&mut self.category_ids, id);
    }
}

fn toggle<T: PartialEq>(list: &mut Vec<T>, value: T) {
    match list.iter().position(|v| *v == value) {
        Some(i) => {
            list.remove(i);
        }
        None => list.push(value),
    }
}

impl StepForm<CheckerStep> for CheckerApplication {
    fn validate_step(&self, step: CheckerStep) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            CheckerStep::Personal => {
                require(&mut errors, "fullName", &self.full_name, "Full name");
                if !is_valid_email(&self.email) {
                    errors.push(FieldError::new("email", "Enter a valid e-mail address"));
                }
                if !is_digits(&self.phone, 10, 10) {
                    errors.push(FieldError::new("phone", "Phone must be 10 digits"));
                }
            }
            CheckerStep::Credentials => {
                require(&mut errors, "qualification", &self.qualification, "Qualification");
                match self.experience_years.trim().parse::<u32>() {
                    Ok(years) if years <= 60 => {}
                    _ => errors.push(FieldError::new("experienceYears", "Experience must be 0 to 60 years")),
                }
            }
            CheckerStep::Coverage => {
                if self.regions.is_empty() {
                    errors.push(FieldError::new("regions", "Pick at least one region"));
                }
                if self.category_ids.is_empty() {
                    errors.push(FieldError::new("categoryIds", "Pick at least one category"));
                }
            }
            CheckerStep::Review => {
                if !self.agree_terms {
                    errors.push(FieldError::new("agreeTerms", "Accept the inspection code of conduct"));
                }
            }
        }
        errors
    }
}

/// Message for `field`, if any
pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Advance, Wizard};

    fn complete_vendor() -> VendorApplication {
        VendorApplication {
            business_name: "Kiran Textiles".into(),
            business_type: "Partnership".into(),
            gst_number: "27ABCDE1234F1Z5".into(),
            contact_name: "Kiran".into(),
            email: "kiran@textiles.in".into(),
            phone: "9876543210".into(),
            city: "Pune".into(),
            pincode: "411001".into(),
            account_holder: "Kiran Textiles".into(),
            account_number: "001234567890".into(),
            ifsc: "HDFC0001234".into(),
            documents: vec!["pan.pdf".into()],
            agree_terms: true,
        }
    }

    #[test]
    fn test_vendor_flow_completes() {
        let form = complete_vendor();
        let mut wizard = Wizard::<VendorStep>::new();
        for _ in 0..4 {
            assert!(matches!(wizard.next(&form), Ok(Advance::Moved(_))));
        }
        assert_eq!(wizard.current(), VendorStep::Review);
        assert_eq!(wizard.next(&form), Ok(Advance::Complete));
    }

    #[test]
    fn test_vendor_business_step_errors() {
        let form = VendorApplication {
            gst_number: "SHORT".into(),
            ..Default::default()
        };
        let errors = form.validate_step(VendorStep::Business);
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["businessName", "businessType", "gstNumber"]);
    }

    #[test]
    fn test_vendor_gst_is_optional() {
        let form = VendorApplication {
            gst_number: String::new(),
            ..complete_vendor()
        };
        assert!(form.validate_step(VendorStep::Business).is_empty());
    }

    #[test]
    fn test_ifsc() {
        assert!(is_valid_ifsc("SBIN0005943"));
        assert!(!is_valid_ifsc("SBIN1005943"));
        assert!(!is_valid_ifsc("SB1N0005943"));
        assert!(!is_valid_ifsc("SBIN000594"));
    }

    #[test]
    fn test_checker_coverage_and_toggle() {
        let mut form = CheckerApplication::default();
        assert_eq!(form.validate_step(CheckerStep::Coverage).len(), 2);

        form.toggle_region("North");
        form.toggle_category(3);
        assert!(form.validate_step(CheckerStep::Coverage).is_empty());

        form.toggle_region("North");
        assert!(form.regions.is_empty());
        assert_eq!(
            error_for(&form.validate_step(CheckerStep::Coverage), "regions").as_deref(),
            Some("Pick at least one region")
        );
    }

    #[test]
    fn test_checker_experience_bounds() {
        let mut form = CheckerApplication {
            qualification: "B.Tech".into(),
            experience_years: "75".into(),
            ..Default::default()
        };
        assert_eq!(form.validate_step(CheckerStep::Credentials).len(), 1);
        form.experience_years = "4".into();
        assert!(form.validate_step(CheckerStep::Credentials).is_empty());
    }
}
