//! Appointment booking over a messaging deep link
//!
//! The booking form never talks to a server: submission formats the fields
//! into one message, percent-encodes it, and opens a WhatsApp deep link in
//! the system browser. Nothing is validated beyond required fields and
//! nothing is persisted.

/// Studio WhatsApp business number.
pub const WHATSAPP_PHONE: &str = "918240423031";

/// Services offered in the booking form's selection list.
pub const SERVICE_OPTIONS: [&str; 6] = [
    "Nail Art & Care",
    "Eyelash Extensions",
    "Permanent Makeup",
    "Korean BB Glow",
    "Eyelash Extensions Course",
    "Nail Extensions Course",
];

/// Booking form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub first_name: String,
    pub last_name: String,
    pub service: Option<&'static str>,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingForm {
    /// All required fields are filled. The additional message is optional.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && self.service.is_some()
            && !self.date.trim().is_empty()
            && !self.time.trim().is_empty()
    }

    /// Format the message sent to the studio.
    pub fn format_message(&self) -> String {
        format!(
            "Hello, this is {} {}.\n\n\
             I would like to book an appointment at i Nails Art & Studio.\n\n\
             Preferred Service: {}\n\
             Preferred Date: {}\n\
             Preferred Time: {}\n\n\
             Additional Message:\n{}\n\nThank you!",
            self.first_name,
            self.last_name,
            self.service.unwrap_or(""),
            self.date,
            self.time,
            self.message,
        )
    }

    /// Deep link carrying the encoded booking message.
    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_PHONE,
            urlencoding::encode(&self.format_message()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        BookingForm {
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            service: Some(SERVICE_OPTIONS[1]),
            date: "2025-08-14".into(),
            time: "14:30".into(),
            message: "First visit & a bit nervous!".into(),
        }
    }

    #[test]
    fn incomplete_until_every_required_field_is_filled() {
        let mut form = BookingForm::default();
        assert!(!form.is_complete());

        form.first_name = "Sarah".into();
        form.last_name = "Johnson".into();
        form.service = Some(SERVICE_OPTIONS[0]);
        form.date = "2025-08-14".into();
        assert!(!form.is_complete());

        form.time = "14:30".into();
        assert!(form.is_complete());
    }

    #[test]
    fn message_is_optional() {
        let mut form = filled_form();
        form.message.clear();
        assert!(form.is_complete());
    }

    #[test]
    fn formatted_message_contains_every_field_and_closes_politely() {
        let form = filled_form();
        let message = form.format_message();
        assert!(message.contains("Sarah Johnson"));
        assert!(message.contains("Preferred Service: Eyelash Extensions"));
        assert!(message.contains("Preferred Date: 2025-08-14"));
        assert!(message.contains("Preferred Time: 14:30"));
        assert!(message.contains("First visit & a bit nervous!"));
        assert!(message.ends_with("Thank you!"));
    }

    #[test]
    fn deep_link_decodes_back_to_the_message() {
        let form = filled_form();
        let url = form.whatsapp_url();
        assert!(url.starts_with("https://wa.me/918240423031?text="));

        let encoded = url.split_once("?text=").unwrap().1;
        // Characters with reserved meanings never appear raw in the query.
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('\n'));

        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, form.format_message());
    }
}
