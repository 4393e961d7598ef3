use contracts::domain::a001_person::{PeopleRequest, PeopleResponse, Person};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Dataset compiled into the binary, used when no people file is configured
const EMBEDDED_PEOPLE: &str = include_str!("people.json");

static PEOPLE: OnceCell<Vec<Person>> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum PersonServiceError {
    #[error("failed to read people data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse people data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the dataset once; later calls keep the first one
///
/// Returns the number of records available.
pub fn initialize(path: Option<&Path>) -> Result<usize, PersonServiceError> {
    let people = PEOPLE.get_or_try_init(|| match path {
        Some(path) => {
            tracing::info!("Loading people from: {}", path.display());
            let contents =
                std::fs::read_to_string(path).map_err(|source| PersonServiceError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
            parse_people(&contents)
        }
        None => parse_people(EMBEDDED_PEOPLE),
    })?;
    Ok(people.len())
}

pub fn parse_people(json: &str) -> Result<Vec<Person>, PersonServiceError> {
    Ok(serde_json::from_str(json)?)
}

/// First `count` records in dataset order, or all of them without a count
pub fn take_page(people: &[Person], request: PeopleRequest) -> Vec<Person> {
    let limit = request.count.unwrap_or(people.len()).min(people.len());
    people[..limit].to_vec()
}

/// Page of people for `GET /api/people`
pub fn get_people(request: PeopleRequest) -> Result<PeopleResponse, PersonServiceError> {
    let people = PEOPLE.get_or_try_init(|| parse_people(EMBEDDED_PEOPLE))?;
    Ok(PeopleResponse {
        people: take_page(people, request),
    })
}
