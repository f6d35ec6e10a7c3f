//! shapec — compiles point/shape test programs to Scheme or Prolog.

pub mod config;
pub mod dsl;
pub mod emit;
