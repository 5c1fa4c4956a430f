//! Derived-state resolution for panel backgrounds.
//!
//! The resolver is a pure function from a background state bag to the one
//! background that should actually render, reconciling the enablement
//! switch, sponsored content, the user's selection, and a stable random
//! fallback. It is the canonical example of a derived value recomputed on
//! relevant state changes.

mod css;
mod resolve;
mod state;

pub use css::{css_url, escape_css_string};
pub use resolve::{
    default_background, resolve, resolve_background, DEFAULT_BACKGROUND_VALUE, GRADIENT_PALETTE,
    SOLID_PALETTE,
};
pub use state::{
    BackgroundKind, BackgroundState, CatalogBackground, EffectiveBackground, ResolvedBackground,
    SponsoredBackground,
};
