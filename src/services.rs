//! External collaborator interfaces.
//!
//! The rendering core is synchronous and self-contained; everything that
//! talks to the outside world sits behind one of these traits. The records
//! mirror the wire shapes the surrounding product exchanges with its
//! profile generator, payment provider, and mail service. Implementations
//! live outside this crate.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Quiz answers collected from the owner, keyed by question id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRequest {
    /// The pet's name
    pub pet_name: String,
    /// Species or breed hint, free form
    #[serde(default)]
    pub species: String,
    /// Question id to selected answer
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}

/// Structured profile text produced by the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedProfile {
    /// Headline title, e.g. "The Social Butterfly"
    pub profile_title: String,
    /// One-paragraph summary
    pub profile_summary: String,
    /// Short trait phrases
    #[serde(default)]
    pub personality_traits: Vec<String>,
    /// Longer narrative description
    #[serde(default)]
    pub detailed_description: String,
    /// Optional light-hearted facts
    #[serde(default)]
    pub fun_facts: Vec<String>,
}

/// Produces profile text from quiz responses.
pub trait ProfileGenerator {
    /// Generate a profile. Failures surface as [`crate::Error::Profile`].
    fn generate(&self, request: &ProfileRequest) -> Result<GeneratedProfile>;
}

/// Checkout parameters for unlocking a full report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Opaque identifier of the quiz result being purchased
    pub result_id: String,
    /// Where the payment provider should send the buyer afterwards
    pub success_url: String,
    /// Where to send the buyer if they abandon checkout
    pub cancel_url: String,
}

/// A created checkout session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Opaque session id, later passed to `verify_session`
    pub session_id: String,
    /// URL the buyer is redirected to for payment
    pub checkout_url: String,
}

/// Creates and verifies payment sessions.
pub trait PaymentGateway {
    /// Open a checkout session for one report.
    fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession>;

    /// Whether the session with this id has been paid.
    fn verify_session(&self, session_id: &str) -> Result<bool>;
}

/// An outgoing report email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportEmail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_body: String,
    /// Optional attachment: filename and raw bytes
    #[serde(default)]
    pub attachment: Option<(String, Vec<u8>)>,
}

/// Delivers report emails.
pub trait ReportMailer {
    /// Send one email. Failures surface as [`crate::Error::Mail`].
    fn send(&self, email: &ReportEmail) -> Result<()>;
}
