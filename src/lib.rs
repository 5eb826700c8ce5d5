//! Campus Concierge - Lex fulfillment backend for a campus helpdesk bot
//!
//! This crate answers student-record lookups and FAQ questions for a
//! conversational bot, reading from DynamoDB and replying with closed,
//! fulfilled Lex response envelopes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
