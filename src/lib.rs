//! Collision-resistant resource names and access credentials for
//! provisioning workflows.
//!
//! Two generators, layered by capability: [`BasicNameGenerator`] produces
//! generic resource instance names, [`SqlNameGenerator`] adds database
//! names, derived usernames and random passwords for managed relational
//! database provisioning. Every operation is stateless and safe to call
//! concurrently without synchronization.

pub mod config;
pub mod credentials;
pub mod names;

pub use credentials::{PasswordError, UsernameError};
pub use names::{BasicNameGenerator, NameGenerator, SqlNameGenerator};
