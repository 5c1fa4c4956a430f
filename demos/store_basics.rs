//! Store example: a small panel state with a persistence listener

use std::time::Duration;

use mural::{JsonStorage, Store};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct PanelState {
    show_clock: bool,
    search_engine: String,
    visits: u32,
}

fn main() {
    println!("=== Store Example ===\n");

    let storage = JsonStorage::<PanelState>::new("/tmp/mural-panel.json");

    // Create a store seeded from persisted state (defaults on first run)
    let store = Store::new(storage.load());

    // Subscribe to state changes
    store.subscribe(|state| {
        println!(
            "State updated! clock={} engine={}",
            state.show_clock, state.search_engine
        );
    });

    // Persistence is just another listener, debounced
    let sub = JsonStorage::<PanelState>::new("/tmp/mural-panel.json")
        .attach(&store, Duration::from_millis(50));

    println!("Toggling the clock...");
    store.update(|state| state.show_clock = !state.show_clock);

    println!("\nSwitching search engine...");
    store.update(|state| {
        state.search_engine = "duckduckgo".to_string();
        state.visits += 1;
    });

    std::thread::sleep(Duration::from_millis(200));
    sub.unsubscribe();

    // Read final state
    println!("\nFinal state: {:#?}", store.get());
}
