//! Gallery widgets: a looping hero carousel, a full-screen lightbox and an
//! FAQ tabs/accordion.
//!
//! The widgets are host-independent. A host feeds them [`event::HostEvent`]s,
//! advances their clock, and renders the active markers they write into a
//! [`container::Container`].

pub mod carousel;
pub mod constants;
pub mod container;
pub mod environment;
pub mod error;
pub mod event;
pub mod faq;
pub mod gallery;
pub mod gesture;
pub mod lightbox;
pub mod showcase;
pub mod state;
pub mod timer;

pub use carousel::CarouselController;
pub use container::{Container, SlideMarkers};
pub use environment::{Environment, HostSignals};
pub use error::{GalleryError, Result};
pub use event::{HostEvent, Key};
pub use faq::{Faq, FaqPanel, FaqTarget};
pub use lightbox::{Lightbox, LightboxControl};
pub use showcase::Showcase;
pub use state::{CarouselPhase, CarouselState};
