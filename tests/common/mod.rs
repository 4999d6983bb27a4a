#![allow(dead_code)]

//! In-memory repository fakes and test server setup.
//!
//! Handler tests drive the real router over HTTP; the fakes stand in for
//! PostgreSQL so no database is required.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;

use linktally::application::services::{AnalyticsService, LinkService};
use linktally::domain::entities::{Link, NewLink, NewVisit, Visit};
use linktally::domain::repositories::{LinkRepository, VisitRepository};
use linktally::error::AppError;
use linktally::routes::app_router;
use linktally::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

/// In-memory link store enforcing the `short_id` uniqueness constraint.
#[derive(Default)]
pub struct FakeLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl FakeLinkRepository {
    pub fn seed(&self, short_id: &str, original_url: &str) -> Link {
        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            short_id.to_string(),
            original_url.to_string(),
            Utc::now(),
        );
        self.links.lock().unwrap().push(link.clone());
        link
    }

    pub fn contains(&self, short_id: &str) -> bool {
        self.links
            .lock()
            .unwrap()
            .iter()
            .any(|l| l.short_id == short_id)
    }
}

#[async_trait]
impl LinkRepository for FakeLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.short_id == new_link.short_id) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            new_link.short_id,
            new_link.original_url,
            Utc::now(),
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_id == short_id)
            .cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.id != id);
        Ok(links.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory visit store with a switch to simulate insert failures.
#[derive(Default)]
pub struct FakeVisitRepository {
    visits: Mutex<Vec<Visit>>,
    next_id: AtomicI64,
    pub fail_record: AtomicBool,
}

impl FakeVisitRepository {
    /// Inserts a visit row directly, bypassing the repository contract,
    /// so tests can control timestamps and geolocation fields.
    pub fn seed(
        &self,
        link_id: i64,
        visitor_ip: Option<&str>,
        device: Option<&str>,
        referer: Option<&str>,
        visited_at: DateTime<Utc>,
    ) {
        let visit = Visit {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id,
            visitor_ip: visitor_ip.map(str::to_string),
            user_agent: None,
            referer: referer.map(str::to_string),
            visited_at,
            country: None,
            city: None,
            device: device.map(str::to_string),
        };
        self.visits.lock().unwrap().push(visit);
    }

    pub fn recorded(&self) -> Vec<Visit> {
        self.visits.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisitRepository for FakeVisitRepository {
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        if self.fail_record.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let visit = Visit {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id: new_visit.link_id,
            visitor_ip: new_visit.visitor_ip,
            user_agent: new_visit.user_agent,
            referer: new_visit.referer,
            visited_at: Utc::now(),
            country: None,
            city: None,
            device: new_visit.device,
        };
        self.visits.lock().unwrap().push(visit.clone());
        Ok(visit)
    }

    async fn list_for_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError> {
        let mut visits: Vec<Visit> = self
            .visits
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.link_id == link_id)
            .cloned()
            .collect();

        visits.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));
        Ok(visits)
    }

    async fn delete_for_link(&self, link_id: i64) -> Result<u64, AppError> {
        let mut visits = self.visits.lock().unwrap();
        let before = visits.len();
        visits.retain(|v| v.link_id != link_id);
        Ok((before - visits.len()) as u64)
    }
}

/// Builds application state backed by in-memory fakes.
pub fn create_test_state() -> (AppState, Arc<FakeLinkRepository>, Arc<FakeVisitRepository>) {
    let link_repo = Arc::new(FakeLinkRepository::default());
    let visit_repo = Arc::new(FakeVisitRepository::default());

    let link_service = Arc::new(LinkService::new(link_repo.clone(), visit_repo.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(link_repo.clone(), visit_repo.clone()));

    let state = AppState::new(link_service, analytics_service, BASE_URL.to_string());

    (state, link_repo, visit_repo)
}

/// Spins up a test server over the full application router.
pub fn create_test_server() -> (TestServer, Arc<FakeLinkRepository>, Arc<FakeVisitRepository>) {
    let (state, link_repo, visit_repo) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, link_repo, visit_repo)
}
