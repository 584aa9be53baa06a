use log::Level;

pub const COMPANY_NAME: &str = "T&R Technologies";
pub const CONTACT_EMAIL: &str = "hello@tandrtechnologies.com";
pub const MAIL_SUBJECT: &str = "Contact Request - T&R Technologies";
pub const MAIL_BODY: &str = "Hello T&R Technologies,\n\nI would like to get in touch with you regarding...";

// Stand-in for the round trip of a real contact endpoint.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
