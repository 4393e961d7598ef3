use super::traits::{label_for, RichSelectOption};
use leptos::prelude::*;

/// Open/closed flag and current selection of a [`RichSelect`](super::RichSelect)
#[derive(Clone, Copy)]
pub struct RichSelectState {
    is_open: RwSignal<bool>,
    selected: RwSignal<Option<String>>,
    on_change: Option<Callback<String>>,
}

impl RichSelectState {
    pub fn new(on_change: Option<Callback<String>>) -> Self {
        Self {
            is_open: RwSignal::new(false),
            selected: RwSignal::new(None),
            on_change,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn toggle(&self) {
        self.is_open.update(|v| *v = !*v);
    }

    pub fn selected(&self) -> Option<String> {
        self.selected.get()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.with(|selected| selected.as_deref() == Some(value))
    }

    /// Select `value`, close the list and notify `on_change`
    pub fn choose(&self, value: String) {
        self.selected.set(Some(value.clone()));
        self.is_open.set(false);
        if let Some(handler) = self.on_change {
            handler.run(value);
        }
    }

    /// Plain label of the selected item, shown by the collapsed control
    pub fn selected_label<T: RichSelectOption>(&self, items: &[T]) -> Option<String> {
        self.selected
            .with(|selected| selected.as_deref().and_then(|value| label_for(items, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[derive(Clone)]
    struct Item {
        value: &'static str,
        label: &'static str,
        #[allow(dead_code)]
        markup: &'static str,
    }

    impl RichSelectOption for Item {
        fn value(&self) -> String {
            self.value.to_string()
        }

        fn label(&self) -> String {
            self.label.to_string()
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                value: "1",
                label: "Ada Lovelace",
                markup: "<img alt=\"Portrait of Ada Lovelace\"/>Ada Lovelace<div>Mathematician</div>",
            },
            Item {
                value: "2",
                label: "Alan Turing",
                markup: "<img alt=\"Portrait of Alan Turing\"/>Alan Turing<div>Cryptanalyst</div>",
            },
        ]
    }

    #[test]
    fn test_initially_closed_without_selection() {
        let owner = Owner::new();
        let state = owner.with(|| RichSelectState::new(None));
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
        assert_eq!(state.selected_label(&items()), None);
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let owner = Owner::new();
        let state = owner.with(|| RichSelectState::new(None));
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn test_choose_selects_and_closes() {
        let owner = Owner::new();
        let state = owner.with(|| RichSelectState::new(None));
        state.toggle();

        state.choose("2".to_string());

        assert!(!state.is_open());
        assert_eq!(state.selected(), Some("2".to_string()));
        assert!(state.is_selected("2"));
        assert!(!state.is_selected("1"));
    }

    #[test]
    fn test_choose_runs_on_change() {
        let owner = Owner::new();
        let (state, changes) = owner.with(|| {
            let changes = RwSignal::new(Vec::<String>::new());
            let on_change = Callback::new(move |value: String| {
                changes.update(|v| v.push(value));
            });
            (RichSelectState::new(Some(on_change)), changes)
        });

        state.choose("1".to_string());
        state.choose("2".to_string());

        assert_eq!(
            changes.get_untracked(),
            vec!["1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn test_collapsed_control_shows_plain_label() {
        let owner = Owner::new();
        let state = owner.with(|| RichSelectState::new(None));
        let items = items();

        state.choose("1".to_string());

        let label = state.selected_label(&items).unwrap();
        assert_eq!(label, "Ada Lovelace");
        assert!(!label.contains("Portrait"));
        assert!(!label.contains("Mathematician"));
    }

    #[test]
    fn test_unknown_selection_has_no_label() {
        let owner = Owner::new();
        let state = owner.with(|| RichSelectState::new(None));
        state.choose("99".to_string());
        assert_eq!(state.selected_label(&items()), None);
    }
}
