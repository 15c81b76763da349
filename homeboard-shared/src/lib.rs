#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod models;
