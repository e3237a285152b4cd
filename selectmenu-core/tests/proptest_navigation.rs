use proptest::prelude::*;
use selectmenu_core::{resolve, MenuKey, NavAction, SelectOption};

// Options with unique values v0..vN
fn arb_options() -> impl Strategy<Value = Vec<SelectOption>> {
    (1usize..40).prop_map(|n| {
        (0..n)
            .map(|i| SelectOption::new(format!("v{}", i), format!("Option {}", i)))
            .collect()
    })
}

fn selected_value(action: Option<NavAction<'_>>) -> Option<String> {
    match action {
        Some(NavAction::Select(option)) => Some(option.value.clone()),
        _ => None,
    }
}

proptest! {
    /// Property: Down from option i selects option (i + 1) mod n
    #[test]
    fn prop_down_advances_with_wrap(options in arb_options(), seed in any::<usize>()) {
        let n = options.len();
        let i = seed % n;
        let selected = vec![options[i].value.clone()];

        let action = resolve(MenuKey::Down, &options, Some(&selected));
        prop_assert_eq!(selected_value(action), Some(options[(i + 1) % n].value.clone()));
    }

    /// Property: Up from option i selects option (i - 1 + n) mod n
    #[test]
    fn prop_up_retreats_with_wrap(options in arb_options(), seed in any::<usize>()) {
        let n = options.len();
        let i = seed % n;
        let selected = vec![options[i].value.clone()];

        let action = resolve(MenuKey::Up, &options, Some(&selected));
        prop_assert_eq!(selected_value(action), Some(options[(i + n - 1) % n].value.clone()));
    }

    /// Property: Down then Up returns to the starting option
    #[test]
    fn prop_down_up_round_trip(options in arb_options(), seed in any::<usize>()) {
        let i = seed % options.len();
        let start = vec![options[i].value.clone()];

        let after_down = selected_value(resolve(MenuKey::Down, &options, Some(&start)));
        prop_assert!(after_down.is_some());

        let moved = vec![after_down.unwrap_or_default()];
        let after_up = selected_value(resolve(MenuKey::Up, &options, Some(&moved)));
        prop_assert_eq!(after_up, Some(options[i].value.clone()));
    }

    /// Property: an unmatched selection starts the walk at either end and Enter closes
    #[test]
    fn prop_unmatched_selection(options in arb_options(), stray in "[a-z]{1,8}") {
        let selected = vec![format!("missing-{}", stray)];

        prop_assert_eq!(
            selected_value(resolve(MenuKey::Down, &options, Some(&selected))),
            Some(options[0].value.clone())
        );
        prop_assert_eq!(
            selected_value(resolve(MenuKey::Up, &options, Some(&selected))),
            Some(options[options.len() - 1].value.clone())
        );
        prop_assert_eq!(resolve(MenuKey::Enter, &options, Some(&selected)), Some(NavAction::Close));
    }

    /// Property: Enter never closes while an option is current
    #[test]
    fn prop_enter_with_match_is_noop(options in arb_options(), seed in any::<usize>()) {
        let i = seed % options.len();
        let selected = vec![options[i].value.clone()];
        prop_assert_eq!(resolve(MenuKey::Enter, &options, Some(&selected)), None);
    }
}
