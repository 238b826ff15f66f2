//! WhatsApp deep link
//!
//! `https://wa.me/{digits}?text={encoded}` where only the ASCII digits of
//! the configured number are kept and every byte of the message except
//! `A-Z a-z 0-9 - . _ ~` is percent-encoded.

use super::message::OrderMessage;
use crate::core::error::DomainError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Characters left untouched in the `text` parameter
const TEXT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A prefilled WhatsApp chat link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    phone: String,
    text: String,
}

impl WhatsAppLink {
    /// Build a link, rejecting numbers without any digits
    pub fn new(phone_number: &str, text: impl Into<String>) -> Result<Self, DomainError> {
        let phone: String = phone_number.chars().filter(char::is_ascii_digit).collect();
        if phone.is_empty() {
            return Err(DomainError::InvalidPhoneNumber(phone_number.to_string()));
        }
        Ok(Self {
            phone,
            text: text.into(),
        })
    }

    pub fn for_message(phone_number: &str, message: &OrderMessage) -> Result<Self, DomainError> {
        Self::new(phone_number, message.text())
    }

    /// Normalized phone number (digits only)
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> String {
        if self.text.is_empty() {
            format!("{}/{}", WHATSAPP_BASE, self.phone)
        } else {
            format!(
                "{}/{}?text={}",
                WHATSAPP_BASE,
                self.phone,
                utf8_percent_encode(&self.text, TEXT_ENCODE_SET)
            )
        }
    }
}

impl fmt::Display for WhatsAppLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_normalized() {
        let link = WhatsAppLink::new("+254 (123) 456-789", "hi").unwrap();
        assert_eq!(link.phone(), "254123456789");
    }

    #[test]
    fn test_rejects_number_without_digits() {
        let err = WhatsAppLink::new("+", "hi").unwrap_err();
        assert_eq!(err, DomainError::InvalidPhoneNumber("+".to_string()));
    }

    #[test]
    fn test_text_is_percent_encoded() {
        let link = WhatsAppLink::new("+254123456789", "1x Hummus - Ksh 1,440\nTotal: Ksh 1,440").unwrap();
        assert_eq!(
            link.url(),
            "https://wa.me/254123456789?text=1x%20Hummus%20-%20Ksh%201%2C440%0ATotal%3A%20Ksh%201%2C440"
        );
    }

    #[test]
    fn test_arabic_text_is_utf8_encoded() {
        let link = WhatsAppLink::new("254", "حمص").unwrap();
        assert_eq!(link.url(), "https://wa.me/254?text=%D8%AD%D9%85%D8%B5");
    }

    #[test]
    fn test_empty_text_omits_query() {
        let link = WhatsAppLink::new("254", "").unwrap();
        assert_eq!(link.to_string(), "https://wa.me/254");
    }
}
