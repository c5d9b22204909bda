#![allow(dead_code)]

pub mod canned_server;
pub mod factories;
pub mod fake_api;
