//! Main module for jam-lex library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod metadata;
pub mod token;
