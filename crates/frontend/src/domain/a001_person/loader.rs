use super::api::PeopleSource;
use super::options::{project_options, PersonOption};
use contracts::domain::a001_person::{PeopleRequest, Person, PEOPLE_PAGE_SIZE};
use leptos::prelude::*;

/// Fetch the first page of people, in the order the source returns them
pub async fn load_people<S: PeopleSource>(source: &S) -> Result<Vec<Person>, String> {
    let response = source
        .get_people(PeopleRequest::with_count(PEOPLE_PAGE_SIZE))
        .await?;
    Ok(response.people)
}

/// People held by the assignee select
///
/// `None` until the load completes, then the whole fetched list.
/// The cell belongs to the reactive owner it was created under.
#[derive(Debug, Clone, Copy)]
pub struct PeopleState {
    people: RwSignal<Option<Vec<Person>>>,
}

impl PeopleState {
    pub fn new() -> Self {
        Self {
            people: RwSignal::new(None),
        }
    }

    #[cfg(test)]
    fn is_populated(&self) -> bool {
        self.people.with_untracked(Option::is_some)
    }

    /// Options for the current list; tracked, so views re-render on load
    pub fn options(&self) -> Vec<PersonOption> {
        self.people
            .with(|people| people.as_deref().map(project_options).unwrap_or_default())
    }

    /// Replace the list. Returns `false` if the owner has been disposed,
    /// in which case nothing is written.
    pub fn apply(&self, people: Vec<Person>) -> bool {
        self.people.try_set(Some(people)).is_none()
    }
}

impl Default for PeopleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Load once and write the result into `state`
///
/// Failures are logged and leave the state unpopulated.
pub async fn load_into<S: PeopleSource>(source: &S, state: PeopleState) {
    match load_people(source).await {
        Ok(people) => {
            let count = people.len();
            if state.apply(people) {
                log::debug!("Loaded {} people", count);
            } else {
                log::debug!("People loaded after the view was disposed, dropping result");
            }
        }
        Err(e) => log::error!("Failed to load people: {}", e),
    }
}

/// Start the one-shot load in the background
pub fn spawn_load<S: PeopleSource + 'static>(source: S, state: PeopleState) {
    wasm_bindgen_futures::spawn_local(async move {
        load_into(&source, state).await;
    });
}
