//! Chat front ends.
//!
//! Both platforms share one command surface ([`command`]) and one set
//! of handlers; the per-platform modules only bind command registration
//! and reply delivery to their SDK.

pub mod command;

#[cfg(feature = "discord")]
pub mod discord;

#[cfg(feature = "telegram")]
pub mod telegram;
