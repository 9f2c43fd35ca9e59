//! IDMS marketing site
//!
//! This crate serves the IDMS pricing page, the employee payslip document,
//! product detail placeholders and a stub payslip PDF endpoint. Pages are
//! rendered on the server; the little client-side behaviour that remains
//! (scroll reveals, header shadow) lives in the embedded `site.js`.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod content;
pub mod error;
pub mod images;
pub mod interaction;
pub mod models;
pub mod pages;
