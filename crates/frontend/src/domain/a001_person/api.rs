//! API client for the people data service

use crate::shared::api_utils::api_url;
use contracts::domain::a001_person::{PeopleRequest, PeopleResponse};
use gloo_net::http::Request;
use std::future::Future;

/// Source of person records
pub trait PeopleSource {
    fn get_people(
        &self,
        request: PeopleRequest,
    ) -> impl Future<Output = Result<PeopleResponse, String>>;
}

/// `GET /api/people` on the backend
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPeopleSource;

impl PeopleSource for HttpPeopleSource {
    async fn get_people(&self, request: PeopleRequest) -> Result<PeopleResponse, String> {
        let response = Request::get(&people_url(request))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }
        response.json().await.map_err(|e| e.to_string())
    }
}

fn people_url(request: PeopleRequest) -> String {
    let base = api_url("/api/people");
    match request.count {
        Some(count) => format!("{}?count={}", base, count),
        None => base,
    }
}
