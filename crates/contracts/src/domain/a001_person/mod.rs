pub mod aggregate;

pub use aggregate::{PeopleRequest, PeopleResponse, Person, PEOPLE_PAGE_SIZE};
