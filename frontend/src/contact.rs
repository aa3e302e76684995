use std::fmt;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceInterest {
    Coding,
    NoCode,
    Branding,
    Custom,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 4] = [
        ServiceInterest::Coding,
        ServiceInterest::NoCode,
        ServiceInterest::Branding,
        ServiceInterest::Custom,
    ];

    /// `<option>` value.
    pub fn value(self) -> &'static str {
        match self {
            ServiceInterest::Coding => "coding",
            ServiceInterest::NoCode => "nocode",
            ServiceInterest::Branding => "branding",
            ServiceInterest::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::Coding => "Custom Development",
            ServiceInterest::NoCode => "No-Code Solution",
            ServiceInterest::Branding => "Brand Identity",
            ServiceInterest::Custom => "Custom Project",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.value() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub service: Option<ServiceInterest>,
    pub details: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    InvalidEmail,
    MissingDetails,
    /// The browser refused to open the chat, usually a popup blocker.
    ChannelBlocked,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingName => write!(f, "Please tell us your name."),
            FormError::InvalidEmail => write!(f, "Please enter a valid email address."),
            FormError::MissingDetails => write!(f, "Please describe your project."),
            FormError::ChannelBlocked => write!(
                f,
                "Couldn't open WhatsApp, please allow popups and try again."
            ),
        }
    }
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if self.details.trim().is_empty() {
            return Err(FormError::MissingDetails);
        }
        Ok(())
    }

    pub fn compose_message(&self) -> String {
        let mut lines = vec![
            format!("Hello {}! I'd like to discuss a project.", config::STUDIO_NAME),
            String::new(),
            format!("Name: {}", self.name.trim()),
            format!("Email: {}", self.email.trim()),
        ];
        if let Some(service) = self.service {
            lines.push(format!("Service: {}", service.label()));
        }
        lines.push(String::new());
        lines.push(self.details.trim().to_string());
        lines.join("\n")
    }

    /// Validates and builds the deep link the enquiry is sent through.
    pub fn enquiry_link(&self) -> Result<String, FormError> {
        self.validate()?;
        Ok(config::whatsapp_link(&self.compose_message()))
    }

    /// Hands the enquiry link to `open`. The request is only done with once
    /// `open` reports the chat actually opened.
    pub fn submit_with<F>(&self, open: F) -> Result<(), FormError>
    where
        F: FnOnce(&str) -> bool,
    {
        let link = self.enquiry_link()?;
        if open(&link) {
            Ok(())
        } else {
            Err(FormError::ChannelBlocked)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            service: Some(ServiceInterest::NoCode),
            details: "A portfolio site in Webflow.".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_validation_reports_first_problem() {
        let mut request = filled();
        request.name = "   ".to_string();
        request.email = "nope".to_string();
        assert_eq!(request.validate(), Err(FormError::MissingName));

        request.name = "Jo".to_string();
        assert_eq!(request.validate(), Err(FormError::InvalidEmail));

        request.email = "jo@mail.in".to_string();
        request.details = "\n".to_string();
        assert_eq!(request.validate(), Err(FormError::MissingDetails));
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@b@c.de"));
    }

    #[test]
    fn test_compose_message_lists_fields() {
        let message = filled().compose_message();
        assert_eq!(
            message,
            "Hello Crestovix Studio! I'd like to discuss a project.\n\n\
             Name: John Doe\nEmail: john@example.com\nService: No-Code Solution\n\n\
             A portfolio site in Webflow."
        );
    }

    #[test]
    fn test_compose_message_omits_unset_service() {
        let mut request = filled();
        request.service = None;
        assert!(!request.compose_message().contains("Service:"));
    }

    #[test]
    fn test_enquiry_link_validates_first() {
        let mut request = filled();
        request.details.clear();
        assert_eq!(request.enquiry_link(), Err(FormError::MissingDetails));
        assert!(filled().enquiry_link().unwrap().starts_with("https://wa.me/"));
    }

    #[test]
    fn test_submit_succeeds_when_chat_opens() {
        let mut opened = None;
        let result = filled().submit_with(|link| {
            opened = Some(link.to_string());
            true
        });
        assert_eq!(result, Ok(()));
        assert_eq!(opened, filled().enquiry_link().ok());
    }

    #[test]
    fn test_submit_reports_blocked_popup() {
        let request = filled();
        assert_eq!(request.submit_with(|_| false), Err(FormError::ChannelBlocked));
        assert!(FormError::ChannelBlocked.to_string().contains("allow popups"));
    }

    #[test]
    fn test_submit_skips_opening_invalid_request() {
        let mut request = filled();
        request.name.clear();
        let mut called = false;
        let result = request.submit_with(|_| {
            called = true;
            true
        });
        assert_eq!(result, Err(FormError::MissingName));
        assert!(!called);
    }

    #[test]
    fn test_service_values_round_trip() {
        for interest in ServiceInterest::ALL {
            assert_eq!(ServiceInterest::from_value(interest.value()), Some(interest));
        }
        assert_eq!(ServiceInterest::from_value(""), None);
    }
}
