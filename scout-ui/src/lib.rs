//! scout-ui - stores and pure view components for Vinyl Scout
//!
//! Views take `ReadStore` lenses or plain props plus callbacks; they never
//! talk to the network or the camera themselves.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
