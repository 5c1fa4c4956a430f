//! Background resolution example: precedence and stability

use mural::background::{
    resolve, BackgroundKind, BackgroundState, CatalogBackground, EffectiveBackground,
    SponsoredBackground,
};

fn main() {
    println!("=== Background Resolver Example ===\n");

    let mut state = BackgroundState {
        catalog_backgrounds: vec![
            CatalogBackground {
                image_url: "https://example.com/alps.jpg".to_string(),
                author: "A. Photographer".to_string(),
                link: "https://example.com/alps".to_string(),
            },
            CatalogBackground {
                image_url: "https://example.com/coast.jpg".to_string(),
                author: "B. Photographer".to_string(),
                link: "https://example.com/coast".to_string(),
            },
        ],
        ..BackgroundState::default()
    };

    // Random catalog pick, cached for stability
    if let Some(EffectiveBackground::Resolved(resolved)) = resolve(&state) {
        println!("Catalog pick: {}", resolved.css());
        state.current = Some(resolved);
    }
    println!(
        "Re-resolved (stable): {}",
        resolve(&state).unwrap().css()
    );

    // Sponsored content wins over the cached pick
    state.sponsored = Some(SponsoredBackground {
        image_url: "https://cdn.example.com/sponsored.jpg".to_string(),
        creative_instance_id: "ci-42".to_string(),
    });
    println!("With sponsorship: {}", resolve(&state).unwrap().css());
    state.sponsored = None;

    // Explicit solid selection
    state.selected_kind = BackgroundKind::Solid;
    state.selected_value = "#2197F9".to_string();
    println!("Explicit solid:  {}", resolve(&state).unwrap().css());

    // Disabled: the fixed default overrides everything
    state.backgrounds_enabled = false;
    println!("Disabled:        {}", resolve(&state).unwrap().css());
}
