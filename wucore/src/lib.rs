//! Platform-independent core of the messaging screen: conversation data,
//! the view-mode state machine, and the pure render derivations. Contains
//! no UI toolkit or I/O so hosts on any platform can drive it.

pub mod error;
pub mod model;
pub mod render;
pub mod store;
pub mod view;
