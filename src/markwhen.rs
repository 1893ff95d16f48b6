//! Main module for markwhen library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod options;
pub mod parsing;
pub mod testing;
