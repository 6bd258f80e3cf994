//! Route handlers grouped by area

pub mod auth;
