//! Platform-free widget state and math.
//!
//! Nothing in here touches `web-sys`; the DOM glue in the crate root owns the
//! elements and feeds events into these types.

pub mod constants;
pub mod error;
pub mod fireflies;
pub mod form;
pub mod glow;
pub mod nav;
pub mod pointer;
pub mod prefs;
pub mod sound;

// host tests compile this tree without the glue that uses these
#[allow(unused_imports)]
pub use constants::Anchors;
#[allow(unused_imports)]
pub use error::WidgetError;
