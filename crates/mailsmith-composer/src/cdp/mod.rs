//! Slim Chrome DevTools Protocol client.
//!
//! Just enough CDP for the composer: target discovery and attachment, DOM
//! queries and box models, JavaScript evaluation, function calls on remote
//! elements, and binding events for the injected overlay.

pub mod client;
pub mod error;
pub mod page;
pub mod protocol;
pub mod surface;

pub use client::CdpClient;
pub use error::CdpError;
pub use page::PageSession;
pub use protocol::{CdpEvent, PageInfo};
pub use surface::CdpSurface;
