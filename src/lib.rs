//! Decision Journal - record personal decisions and how they turned out.
//!
//! A decision carries weighted pros and cons, the outcomes under
//! consideration, and eventually the option chosen. The journal lives in a
//! single key-value slot and is rewritten after every change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
