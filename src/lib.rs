//! Core library for the arith-engine arithmetic evaluation crate.
//!
//! The library exposes a small set of numeric operations together with two
//! file-coupled conveniences built on top of them. The modules are structured
//! to keep responsibilities narrow and composable: the pure arithmetic lives
//! in [`engine::ops`], input representations inside [`engine::model`], the
//! text-store collaborators under [`engine::store`], and the file-coupled
//! orchestration in [`engine::files`].

pub mod engine;

pub use engine::{EngineError, Result, error, files, model, ops, store};
