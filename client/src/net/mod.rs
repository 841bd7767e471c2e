//! Outbound network calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static; the only request it makes is contact-form delivery
//! through the EmailJS REST API.

pub mod mail;
