//! Domain modules for the folio page.

pub mod ui;
