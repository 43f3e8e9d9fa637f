//! Property-based tests for repeated event firing.

use extant::{initialize, Capabilities, CallbackRegistry, Event, StaticHost, ThemeConfig};
use proptest::prelude::*;

fn registry(child_theme: bool) -> CallbackRegistry<Capabilities> {
    let mut host = StaticHost::new("/srv/themes/extant", "https://example.com/themes/extant");
    if child_theme {
        host = host.child_theme("https://example.com/themes/extant-child");
    }
    let mut registry = CallbackRegistry::new();
    initialize(&host, ThemeConfig::default(), &mut registry).unwrap();
    registry
}

fn fire_all(registry: &CallbackRegistry<Capabilities>, events: &[Event], caps: &mut Capabilities) {
    for event in events {
        registry.fire(event.as_str(), caps).unwrap();
    }
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(prop::sample::select(Event::ALL.to_vec()), 0..16)
}

proptest! {
    /// Replaying any sequence of firings leaves the capabilities unchanged.
    #[test]
    fn repeated_firing_matches_single_firing(
        events in events_strategy(),
        repeats in 2usize..5,
        child_theme in any::<bool>(),
    ) {
        let registry = registry(child_theme);

        let mut once = Capabilities::new();
        fire_all(&registry, &events, &mut once);

        let mut many = Capabilities::new();
        for _ in 0..repeats {
            fire_all(&registry, &events, &mut many);
        }
        prop_assert_eq!(once, many);
    }

    /// Any sequence covering every event declares the same as one pass in
    /// host order.
    #[test]
    fn firing_order_does_not_change_the_result(
        mut events in events_strategy(),
        child_theme in any::<bool>(),
    ) {
        events.extend(Event::ALL);
        let registry = registry(child_theme);

        let mut shuffled = Capabilities::new();
        fire_all(&registry, &events, &mut shuffled);

        let mut in_order = Capabilities::new();
        fire_all(&registry, &Event::ALL, &mut in_order);
        prop_assert_eq!(shuffled, in_order);
    }
}
