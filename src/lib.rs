//! Cabinet Diagnostic - Needs-Oriented SWOT Diagnostic Service
//!
//! This crate implements a rule-based diagnostic for accounting firm client
//! advisory: a structured client profile is classified into a SWOT grid,
//! mapped to a catalog of candidate needs routed to internal departments,
//! and exported as CSV, a Markdown synthesis, and email draft bundles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
