use super::state::RichSelectState;
use super::traits::RichSelectOption;
use leptos::prelude::*;

/// Select with custom-rendered items
///
/// The widget owns its open/closed state and the current selection.
/// Clicking an item selects it, closes the list and reports the value
/// through `on_change`.
#[component]
pub fn RichSelect<T, F, IV>(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Items in display order
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Renders the body of a single item in the open list
    render_item: F,
    /// Text shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// ID prefix for the label and list elements
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView
where
    T: RichSelectOption + Clone + Send + Sync + 'static,
    F: Fn(&T) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let state = RichSelectState::new(on_change);

    let base_id = move || id.get().unwrap_or_else(|| "rich-select".to_string());
    let label_id = move || format!("{}-label", base_id());
    let list_id = move || format!("{}-list", base_id());

    view! {
        <div class="rich-select">
            {move || label.get().map(|l| view! {
                <label class="rich-select__label" id=label_id>{l}</label>
            })}
            <button
                type="button"
                class="rich-select__toggle"
                aria-haspopup="listbox"
                aria-labelledby=label_id
                aria-controls=list_id
                aria-expanded=move || state.is_open().to_string()
                on:click=move |_| state.toggle()
            >
                {move || match items.with(|items_vec| state.selected_label(items_vec)) {
                    Some(text) => view! {
                        <span class="rich-select__value">{text}</span>
                    }.into_any(),
                    None => view! {
                        <span class="rich-select__value rich-select__value--placeholder">
                            {placeholder.get().unwrap_or_default()}
                        </span>
                    }.into_any(),
                }}
            </button>

            <Show when=move || state.is_open()>
                <div class="rich-select__list" role="listbox" id=list_id>
                    {
                        let render_item = render_item.clone();
                        move || items.with(|items_vec| {
                            items_vec.iter().map(|item| {
                                let value = item.value();
                                let value_for_class = value.clone();
                                let value_for_aria = value.clone();

                                view! {
                                    <div
                                        role="option"
                                        aria-selected=move || state.is_selected(&value_for_aria).to_string()
                                        class=move || {
                                            if state.is_selected(&value_for_class) {
                                                "rich-select__item rich-select__item--selected"
                                            } else {
                                                "rich-select__item"
                                            }
                                        }
                                        on:click=move |_| state.choose(value.clone())
                                    >
                                        {render_item(item)}
                                    </div>
                                }
                            }).collect_view()
                        })
                    }
                </div>
            </Show>
        </div>
    }
}
