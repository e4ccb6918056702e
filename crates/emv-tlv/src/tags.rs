//! Well-known EMV tags, for display only
//!
//! The codec never consults this table; a tag missing from it parses the same
//! as any other.

use crate::tag::Tag;

// Templates
pub const FCI_TEMPLATE: Tag = Tag::from_static(&[0x6F]);
pub const FCI_PROPRIETARY_TEMPLATE: Tag = Tag::from_static(&[0xA5]);
pub const RECORD_TEMPLATE: Tag = Tag::from_static(&[0x70]);
pub const RESPONSE_MESSAGE_TEMPLATE_FORMAT_1: Tag = Tag::from_static(&[0x80]);
pub const RESPONSE_MESSAGE_TEMPLATE_FORMAT_2: Tag = Tag::from_static(&[0x77]);
pub const FCI_ISSUER_DISCRETIONARY_DATA: Tag = Tag::from_static(&[0xBF, 0x0C]);

// Application metadata
pub const APPLICATION_IDENTIFIER: Tag = Tag::from_static(&[0x4F]);
pub const APPLICATION_LABEL: Tag = Tag::from_static(&[0x50]);
pub const APPLICATION_PAN: Tag = Tag::from_static(&[0x5A]);
pub const APPLICATION_EXPIRATION_DATE: Tag = Tag::from_static(&[0x5F, 0x24]);
pub const APPLICATION_EFFECTIVE_DATE: Tag = Tag::from_static(&[0x5F, 0x25]);
pub const APPLICATION_PAN_SEQUENCE_NUMBER: Tag = Tag::from_static(&[0x5F, 0x34]);
pub const APPLICATION_PREFERRED_NAME: Tag = Tag::from_static(&[0x9F, 0x12]);
pub const CARDHOLDER_NAME: Tag = Tag::from_static(&[0x5F, 0x20]);
pub const TRACK_2_EQUIVALENT_DATA: Tag = Tag::from_static(&[0x57]);

// Bit fields
pub const APPLICATION_INTERCHANGE_PROFILE: Tag = Tag::from_static(&[0x82]);
pub const APPLICATION_USAGE_CONTROL: Tag = Tag::from_static(&[0x9F, 0x07]);
pub const TERMINAL_VERIFICATION_RESULTS: Tag = Tag::from_static(&[0x95]);
pub const TRANSACTION_STATUS_INFORMATION: Tag = Tag::from_static(&[0x9B]);

// Transaction data
pub const AMOUNT_AUTHORISED: Tag = Tag::from_static(&[0x9F, 0x02]);
pub const TRANSACTION_CURRENCY_CODE: Tag = Tag::from_static(&[0x5F, 0x2A]);
pub const ISSUER_COUNTRY_CODE: Tag = Tag::from_static(&[0x5F, 0x28]);
pub const APPLICATION_FILE_LOCATOR: Tag = Tag::from_static(&[0x94]);
pub const PDOL: Tag = Tag::from_static(&[0x9F, 0x38]);
pub const CDOL1: Tag = Tag::from_static(&[0x8C]);
pub const APPLICATION_CRYPTOGRAM: Tag = Tag::from_static(&[0x9F, 0x26]);
pub const APPLICATION_TRANSACTION_COUNTER: Tag = Tag::from_static(&[0x9F, 0x36]);

// Certificates
pub const CA_PUBLIC_KEY_INDEX: Tag = Tag::from_static(&[0x8F]);
pub const ISSUER_PUBLIC_KEY_CERTIFICATE: Tag = Tag::from_static(&[0x90]);
pub const ICC_PUBLIC_KEY_CERTIFICATE: Tag = Tag::from_static(&[0x9F, 0x46]);

/// Human-readable name for a tag, or `"Unknown Tag"`
pub fn tag_name(tag: &Tag) -> &'static str {
    match tag.bytes() {
        [0x4F] => "Application Identifier (AID)",
        [0x50] => "Application Label",
        [0x57] => "Track 2 Equivalent Data",
        [0x5A] => "Application PAN",
        [0x5F, 0x20] => "Cardholder Name",
        [0x5F, 0x24] => "Application Expiration Date",
        [0x5F, 0x25] => "Application Effective Date",
        [0x5F, 0x28] => "Issuer Country Code",
        [0x5F, 0x2A] => "Transaction Currency Code",
        [0x5F, 0x34] => "Application PAN Sequence Number",
        [0x6F] => "File Control Information Template",
        [0x70] => "Record Template",
        [0x77] => "Response Message Template Format 2",
        [0x80] => "Response Message Template Format 1",
        [0x82] => "Application Interchange Profile",
        [0x8C] => "CDOL1",
        [0x8F] => "CA Public Key Index",
        [0x90] => "Issuer Public Key Certificate",
        [0x94] => "Application File Locator",
        [0x95] => "Terminal Verification Results",
        [0x9B] => "Transaction Status Information",
        [0x9F, 0x02] => "Amount, Authorised",
        [0x9F, 0x07] => "Application Usage Control",
        [0x9F, 0x12] => "Application Preferred Name",
        [0x9F, 0x26] => "Application Cryptogram",
        [0x9F, 0x36] => "Application Transaction Counter",
        [0x9F, 0x38] => "PDOL",
        [0x9F, 0x46] => "ICC Public Key Certificate",
        [0xA5] => "FCI Proprietary Template",
        [0xBF, 0x0C] => "FCI Issuer Discretionary Data",
        _ => "Unknown Tag",
    }
}

/// Tags whose value is a flag field best shown bit by bit
pub fn is_bit_field(tag: &Tag) -> bool {
    [
        APPLICATION_INTERCHANGE_PROFILE,
        APPLICATION_USAGE_CONTROL,
        TERMINAL_VERIFICATION_RESULTS,
        TRANSACTION_STATUS_INFORMATION,
    ]
    .contains(tag)
}
