use axum::{Json, debug_handler};
use serde::Deserialize;
use serde_json::{Value, json};
use vitrine_error::{ErrorType, Result, bail};

const MAX_EMAIL_LEN: usize = 255;
const MIN_MESSAGE_LEN: usize = 10;
const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Deserialize)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    #[serde(default)]
    honeypot: Option<String>,
}

impl ContactForm {
    fn validate(&self) -> Result<(), &'static str> {
        if !(2..=100).contains(&self.name.chars().count()) {
            return Err("Name must be between 2 and 100 characters");
        }

        let (local, domain) = self.email.split_once('@').unwrap_or(("", ""));
        if local.is_empty() || !domain.contains('.') || self.email.len() > MAX_EMAIL_LEN {
            return Err("Invalid email address");
        }

        if !(MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&self.message.chars().count()) {
            return Err("Message must be between 10 and 5000 characters");
        }

        Ok(())
    }
}

#[debug_handler(state = crate::state::Zustand)]
pub async fn post(Json(form): Json<ContactForm>) -> Result<Json<Value>> {
    if let Err(reason) = form.validate() {
        bail!(
            type = ErrorType::BadRequest(Some(reason.to_owned())),
            reason
        );
    }

    let accepted = json!({
        "success": true,
        "message": "Message received successfully",
    });

    // Bots that fill the invisible field get the success body as well,
    // so they cannot tell they were dropped
    if form.honeypot.as_deref().is_some_and(|value| !value.is_empty()) {
        warn!(name = %form.name, email = %form.email, "honeypot caught a submission");
        return Ok(Json(accepted));
    }

    // TODO: relay submissions to an email service; for now they only land
    // in the logs
    info!(
        name = %form.name,
        email = %form.email,
        message_len = form.message.len(),
        "contact form submission",
    );

    Ok(Json(accepted))
}

#[cfg(test)]
mod test {
    use super::ContactForm;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            honeypot: None,
        }
    }

    #[test]
    fn accepts_a_sane_submission() {
        let form = form("Ada", "ada@example.com", "I would like to talk about a role.");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_bounds_fields() {
        assert!(form("A", "ada@example.com", "long enough message").validate().is_err());
        assert!(form("Ada", "not-an-email", "long enough message").validate().is_err());
        assert!(form("Ada", "ada@example.com", "short").validate().is_err());
    }
}
