// Package search bot

pub mod bot;
pub mod cards;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod schema;
pub mod search;
pub mod server;
