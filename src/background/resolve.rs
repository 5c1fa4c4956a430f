use rand::seq::IndexedRandom;
use rand::Rng;

use super::state::{
    BackgroundKind, BackgroundState, EffectiveBackground, ResolvedBackground,
};

/// Background shown whenever backgrounds are disabled.
pub const DEFAULT_BACKGROUND_VALUE: &str =
    "linear-gradient(125.83deg, #392DD1 0%, #A91B78 99.09%)";

/// Built-in solid color palette used when a solid background is selected
/// without an explicit value.
pub const SOLID_PALETTE: &[&str] = &[
    "#5B5C63", "#000000", "#151E9A", "#2197F9", "#1FC3DC", "#086582", "#67D4B4", "#077D5A",
    "#3C790B", "#AFCE57", "#F0CB44", "#F28A29", "#FC798F", "#C1226E", "#FAB5EE", "#9677EE",
    "#5433B0", "#4A000C",
];

/// Built-in gradient palette used when a gradient background is selected
/// without an explicit value.
pub const GRADIENT_PALETTE: &[&str] = &[
    "linear-gradient(125.83deg, #392DD1 0%, #A91B78 99.09%)",
    "linear-gradient(125.83deg, #A43CE4 21.15%, #A72B6D 49.6%, #5F219A 88.48%)",
    "linear-gradient(90deg, #4F30AB 0.64%, #435681 99.36%)",
    "linear-gradient(126.47deg, #A0E4E9 16.99%, #101653 86.15%)",
    "radial-gradient(35.13% 34.3% at 50.25% 35.94%, #5D7BDA 0%, #2D0264 100%)",
    "linear-gradient(128.12deg, #43D4D4 6.66%, #1596A9 83.35%)",
    "linear-gradient(323.02deg, #DD7131 18.65%, #FBD460 82.73%)",
    "linear-gradient(128.12deg, #4F86E2 6.66%, #694CD9 83.35%)",
    "linear-gradient(127.39deg, #851B6A 6.04%, #C83553 95.43%)",
    "linear-gradient(130.39deg, #FE6F4C 9.83%, #C53646 85.25%)",
];

/// The fixed background shown when backgrounds are disabled.
pub fn default_background() -> ResolvedBackground {
    ResolvedBackground {
        kind: BackgroundKind::Gradient,
        value: DEFAULT_BACKGROUND_VALUE.to_string(),
    }
}

/// Resolve the single effective background for the given state.
///
/// Precedence, highest first:
///
/// 1. Backgrounds disabled: the fixed default, unconditionally.
/// 2. Sponsored content, when present.
/// 3. The cached previous resolution, when its kind still matches the
///    selected kind and no explicit value is selected. This keeps a
///    randomized pick stable instead of re-rolling on every call.
/// 4. The selected kind: an explicit selection when one is set (custom,
///    solid, gradient), otherwise a uniformly random pick from the
///    matching candidate list. Catalog backgrounds are always randomized.
///
/// An empty candidate list yields `None`; that is "no effective
/// background", not an error, and the caller falls back to a neutral
/// default.
///
/// Callers are expected to invoke this only after a field relevant to the
/// outcome changed, and to write the result back into
/// [`BackgroundState::current`] so step 3 can hold it stable.
pub fn resolve_background<R: Rng + ?Sized>(
    state: &BackgroundState,
    rng: &mut R,
) -> Option<EffectiveBackground> {
    if !state.backgrounds_enabled {
        return Some(EffectiveBackground::Resolved(default_background()));
    }

    if let Some(sponsored) = &state.sponsored {
        return Some(EffectiveBackground::Sponsored(sponsored.clone()));
    }

    if let Some(current) = &state.current {
        if current.kind == state.selected_kind && state.selected_value.is_empty() {
            return Some(EffectiveBackground::Resolved(current.clone()));
        }
    }

    let resolved = match state.selected_kind {
        // Catalog picks ignore any explicit selection.
        BackgroundKind::Catalog => {
            state
                .catalog_backgrounds
                .choose(rng)
                .map(|bg| ResolvedBackground {
                    kind: BackgroundKind::Catalog,
                    value: bg.image_url.clone(),
                })
        }
        BackgroundKind::Custom => {
            if !state.selected_value.is_empty() {
                Some(ResolvedBackground {
                    kind: BackgroundKind::Custom,
                    value: state.selected_value.clone(),
                })
            } else {
                state
                    .custom_backgrounds
                    .choose(rng)
                    .map(|locator| ResolvedBackground {
                        kind: BackgroundKind::Custom,
                        value: locator.clone(),
                    })
            }
        }
        BackgroundKind::Solid => pick_css(BackgroundKind::Solid, state, SOLID_PALETTE, rng),
        BackgroundKind::Gradient => {
            pick_css(BackgroundKind::Gradient, state, GRADIENT_PALETTE, rng)
        }
    };

    resolved.map(EffectiveBackground::Resolved)
}

/// Resolve using the thread RNG.
pub fn resolve(state: &BackgroundState) -> Option<EffectiveBackground> {
    resolve_background(state, &mut rand::rng())
}

fn pick_css<R: Rng + ?Sized>(
    kind: BackgroundKind,
    state: &BackgroundState,
    palette: &[&str],
    rng: &mut R,
) -> Option<ResolvedBackground> {
    if !state.selected_value.is_empty() {
        return Some(ResolvedBackground {
            kind,
            value: state.selected_value.clone(),
        });
    }
    palette.choose(rng).map(|value| ResolvedBackground {
        kind,
        value: (*value).to_string(),
    })
}
