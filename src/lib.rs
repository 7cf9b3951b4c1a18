// Library target exists for the criterion benches and integration tests.
// The binary entry point is main.rs; this file re-declares the module tree
// so harnesses can import types via `kelime::review::*` / `kelime::vocab::*`.
// Most code is only exercised through the binary, so suppress dead_code
// warnings.
#![allow(dead_code)]

rust_i18n::i18n!("locales", fallback = "en");

// Public: used directly by benches and integration tests
pub mod review;
pub mod session;
pub mod source;
pub mod vocab;

// Public because `source` exposes them in its API surface
pub mod config;
pub mod event;

// Private: required transitively (won't compile without them)
mod app;
mod speech;
mod ui;
