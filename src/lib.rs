//! Chunked text translation through an external translation service.
//!
//! Long text is split at sentence boundaries, each chunk is sent to a
//! [`Translator`](domain::traits::Translator) in order, and the pieces are
//! stitched back together. A chunk the service fails on is kept in its
//! original language rather than failing the whole run.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
