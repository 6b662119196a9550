//! Contact details: phone numbers and e-mail addresses.

mod email;
mod phone;

use serde::Serialize;

pub use email::extract_emails;
pub use phone::{
    extract_phone_numbers, extract_tel_links, is_valid_international, is_valid_us,
    scan_html_for_phones, PhoneSource,
};

use crate::parse::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReport {
    pub phones: Vec<String>,
    /// `None` when no number was found
    pub phone_source: Option<PhoneSource>,
    pub emails: Vec<String>,
}

pub fn extract_contacts(document: &Document) -> ContactReport {
    let (phones, phone_source) = extract_phone_numbers(document);
    ContactReport {
        phones,
        phone_source,
        emails: extract_emails(document),
    }
}
