//! HTTP surface of the Halo Hub backend: Entra ID sign-in and session routes

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
