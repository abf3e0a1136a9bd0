pub mod config;
pub mod glossary;
mod glossary_terms;
pub mod network;
