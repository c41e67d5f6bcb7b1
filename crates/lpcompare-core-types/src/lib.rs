//! Core types shared across lpcompare facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! structured logging macros and the error facility.

pub mod schema;
