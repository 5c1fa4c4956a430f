use serde::{Deserialize, Serialize};

use super::css::css_url;

/// The kind of background a user can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundKind {
    /// Curated photo from the built-in catalog. Always randomized; there is
    /// no way to select a specific catalog image by value.
    Catalog,
    /// User-uploaded image, selected by locator or randomized.
    Custom,
    /// A single CSS color.
    Solid,
    /// A CSS gradient expression.
    Gradient,
}

/// One entry of the built-in photo catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogBackground {
    pub image_url: String,
    pub author: String,
    pub link: String,
}

/// A sponsored background pushed by the host. When present and backgrounds
/// are enabled, it takes precedence over any user selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SponsoredBackground {
    pub image_url: String,
    pub creative_instance_id: String,
}

/// The single effective background computed from a [`BackgroundState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBackground {
    pub kind: BackgroundKind,
    /// Image locator for `Catalog`/`Custom`, a complete CSS color or
    /// gradient expression for `Solid`/`Gradient`.
    pub value: String,
}

impl ResolvedBackground {
    /// Render this background as a CSS background value.
    ///
    /// Image locators are escaped and wrapped as `url("…")`; solid and
    /// gradient values are already complete CSS expressions and pass
    /// through verbatim.
    pub fn css(&self) -> String {
        match self.kind {
            BackgroundKind::Catalog | BackgroundKind::Custom => css_url(&self.value),
            BackgroundKind::Solid | BackgroundKind::Gradient => self.value.clone(),
        }
    }
}

/// Outcome of background resolution: either sponsored content or whatever
/// the user's settings resolve to.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectiveBackground {
    Sponsored(SponsoredBackground),
    Resolved(ResolvedBackground),
}

impl EffectiveBackground {
    /// Render as a CSS background value.
    pub fn css(&self) -> String {
        match self {
            EffectiveBackground::Sponsored(sponsored) => css_url(&sponsored.image_url),
            EffectiveBackground::Resolved(resolved) => resolved.css(),
        }
    }
}

/// The background-related slice of a new-tab panel's state bag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundState {
    /// Master switch. When off, the fixed default background is shown
    /// regardless of every other field.
    pub backgrounds_enabled: bool,
    pub catalog_backgrounds: Vec<CatalogBackground>,
    /// Locators of user-uploaded images.
    pub custom_backgrounds: Vec<String>,
    pub selected_kind: BackgroundKind,
    /// Explicit selection within the selected kind. Empty means "randomize
    /// within the kind".
    pub selected_value: String,
    pub sponsored: Option<SponsoredBackground>,
    /// Cache of the previous resolution. Keeps a randomized pick stable
    /// across unrelated state changes.
    pub current: Option<ResolvedBackground>,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self {
            backgrounds_enabled: true,
            catalog_backgrounds: Vec::new(),
            custom_backgrounds: Vec::new(),
            selected_kind: BackgroundKind::Catalog,
            selected_value: String::new(),
            sponsored: None,
            current: None,
        }
    }
}
