use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a001_person::{PeopleRequest, PeopleResponse};

use crate::domain::a001_person;

/// GET /api/people?count=N
pub async fn list(
    Query(request): Query<PeopleRequest>,
) -> Result<Json<PeopleResponse>, StatusCode> {
    match a001_person::service::get_people(request) {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load people: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_person::PEOPLE_PAGE_SIZE;

    #[tokio::test]
    async fn test_list_returns_requested_page() {
        let Json(response) = list(Query(PeopleRequest::with_count(PEOPLE_PAGE_SIZE)))
            .await
            .unwrap();
        assert_eq!(response.people.len(), PEOPLE_PAGE_SIZE);
        assert_eq!(response.people[0].id, 1);
    }

    #[tokio::test]
    async fn test_list_zero_count_is_empty() {
        let Json(response) = list(Query(PeopleRequest::with_count(0))).await.unwrap();
        assert!(response.people.is_empty());
    }
}
