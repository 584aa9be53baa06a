use log::{error, info};
use web_sys::window;

use crate::config;

/// `mailto:` link to the team with the canned subject and greeting.
pub fn contact_mailto_url() -> String {
    build_mailto_url(config::CONTACT_EMAIL, config::MAIL_SUBJECT, config::MAIL_BODY)
}

pub fn build_mailto_url(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Hands the message off to the browser's default mail client.
pub fn open_email_client() {
    let Some(window) = window() else {
        error!("No window available to open the mail client");
        return;
    };
    let url = contact_mailto_url();
    info!("Opening mail client for {}", config::CONTACT_EMAIL);
    if let Err(e) = window.location().set_href(&url) {
        error!("Failed to open mail client: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_link_targets_the_team_inbox() {
        let url = contact_mailto_url();
        assert!(url.starts_with("mailto:hello@tandrtechnologies.com?subject="));
    }

    #[test]
    fn subject_and_body_are_percent_encoded() {
        let url = contact_mailto_url();
        assert!(url.contains("subject=Contact%20Request%20-%20T%26R%20Technologies"));
        assert!(url.contains("&body=Hello%20T%26R%20Technologies%2C%0A%0AI%20would%20like"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn ampersands_in_subject_do_not_split_the_query() {
        let url = build_mailto_url("a@b.c", "x&body=y", "z");
        assert_eq!(url, "mailto:a@b.c?subject=x%26body%3Dy&body=z");
    }
}
