use crate::domain::a001_person::api::HttpPeopleSource;
use crate::domain::a001_person::loader::{spawn_load, PeopleState};
use crate::domain::a001_person::options::PersonOption;
use crate::shared::components::ui::RichSelect;
use leptos::prelude::*;

/// Select of people with a portrait, name and profession per item
///
/// People are fetched once when the component is created; the collapsed
/// control shows the selected person's full name.
#[component]
pub fn AssigneeSelect() -> impl IntoView {
    let state = PeopleState::new();

    // Загрузка при монтировании
    spawn_load(HttpPeopleSource, state);

    let options = Signal::derive(move || state.options());

    let handle_change = Callback::new(move |value: String| {
        log::debug!("Assignee selected: {}", value);
    });

    view! {
        <RichSelect
            id="assignee"
            label="Assignee"
            items=options
            render_item=render_person_option
            placeholder="Select a person"
            on_change=handle_change
        />
    }
}

fn render_person_option(option: &PersonOption) -> impl IntoView {
    let body = option.body.clone();
    view! {
        <div class="person-option">
            <img
                class="person-option__portrait"
                src=body.picture_url
                alt=body.picture_alt
            />
            <div>
                {body.name}
                <div class="person-option__profession">{body.profession}</div>
            </div>
        </div>
    }
}
