//! # IO Module
//!
//! Adapter layer between the web frontend and the domain. Requests come in
//! as JSON, are turned into domain calls against [`crate::AppState`], and
//! results go back out as `shared` DTOs.

pub mod rest;
