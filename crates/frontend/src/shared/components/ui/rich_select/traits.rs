/// Item that can be shown in a [`RichSelect`](super::RichSelect)
pub trait RichSelectOption {
    /// Value reported on selection, unique within the list
    fn value(&self) -> String;
    /// Plain text shown in the collapsed control when this item is selected
    fn label(&self) -> String;
}

/// Label of the item with `value`, if it is present in `items`
pub fn label_for<T: RichSelectOption>(items: &[T], value: &str) -> Option<String> {
    items
        .iter()
        .find(|item| item.value() == value)
        .map(RichSelectOption::label)
}
