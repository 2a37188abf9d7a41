//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain values mutated through replace-on-write helpers
//! and held in Leptos `RwSignal`s by the owning component. Keeping them free
//! of browser types (outside the hydrate build) lets every transition run
//! under plain `cargo test`.

pub mod form;
