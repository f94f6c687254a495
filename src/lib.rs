//! Companion Triage - Conversational Mental-Health Triage Layer
//!
//! This crate implements a single-session triage conversation: each user
//! turn is scored, classified for risk and problem type, and answered
//! either by a crisis short-circuit, a focused AI-generated reply, or a
//! wrap-up action plan.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
