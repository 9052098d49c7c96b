//! Platform-independent core of the AR menu.
//!
//! Nothing here touches `web-sys`; the browser front-end feeds raw input and
//! storage access in through plain types and the [`BlobStore`] and
//! [`SceneSink`] traits, which keeps the whole module tree testable on the host.

pub mod catalog;
pub mod constants;
pub mod dish;
pub mod error;
pub mod form;
pub mod gesture;
pub mod session;
pub mod store;
pub mod transform;
pub mod view;
pub mod xr;

pub use catalog::*;
pub use dish::*;
pub use error::*;
pub use gesture::*;
pub use session::*;
pub use store::*;
pub use transform::*;
