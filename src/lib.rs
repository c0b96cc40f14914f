//! folio-contact - contact form submission core
//!
//! Validates the four contact fields, drives the submission lifecycle and
//! talks to the remote mail relay. Presentation is derived from state and
//! side effects go through two collaborators:
//!
//! - [`relay::MailRelay`] - the remote endpoint that forwards the message
//! - [`submit::NotificationSink`] - transient status messages for the user
//!
//! The `contact` binary drives this library from a terminal.

pub mod config;
pub mod error;
pub mod relay;
pub mod submit;
pub mod types;
