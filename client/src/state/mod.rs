//! Client-side view state.
//!
//! DESIGN
//! ======
//! State structs are plain data with pure transition methods so the render
//! rules can be tested without a reactive runtime; pages wrap them in
//! `RwSignal`s.

pub mod posts;
