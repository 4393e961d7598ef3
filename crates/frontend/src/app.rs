use crate::domain::a001_person::ui::assignee_select::AssigneeSelect;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <AssigneeSelect />
        </main>
    }
}
