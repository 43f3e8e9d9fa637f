//! Property-based tests for callback ordering.

use extant_hooks::CallbackRegistry;
use proptest::prelude::*;

proptest! {
    /// Firing runs callbacks sorted by priority, ties in registration order.
    #[test]
    fn fire_order_is_stable_priority_sort(
        priorities in prop::collection::vec(-5i32..5, 0..40),
    ) {
        let mut registry: CallbackRegistry<Vec<usize>> = CallbackRegistry::new();
        for (index, priority) in priorities.iter().enumerate() {
            registry.register("event", *priority, move |log: &mut Vec<usize>| {
                log.push(index);
                Ok(())
            });
        }

        let mut log = Vec::new();
        let ran = registry.fire("event", &mut log).unwrap();
        prop_assert_eq!(ran, priorities.len());

        let mut expected: Vec<usize> = (0..priorities.len()).collect();
        expected.sort_by_key(|&i| priorities[i]);
        prop_assert_eq!(log, expected);
    }

    /// Interleaving registrations across events never changes per-event order.
    #[test]
    fn events_do_not_interfere(
        regs in prop::collection::vec((0usize..3, -3i32..3), 0..30),
    ) {
        let names = ["a", "b", "c"];
        let mut registry: CallbackRegistry<Vec<usize>> = CallbackRegistry::new();
        for (index, (event, priority)) in regs.iter().enumerate() {
            registry.register(names[*event], *priority, move |log: &mut Vec<usize>| {
                log.push(index);
                Ok(())
            });
        }

        for (event_index, name) in names.iter().enumerate() {
            let mut log = Vec::new();
            registry.fire(name, &mut log).unwrap();

            let mut expected: Vec<usize> = regs
                .iter()
                .enumerate()
                .filter(|(_, (e, _))| *e == event_index)
                .map(|(i, _)| i)
                .collect();
            expected.sort_by_key(|&i| regs[i].1);
            prop_assert_eq!(log, expected);
        }
    }
}
