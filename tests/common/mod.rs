#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tower::Layer;

use linktrack::application::services::{AnalyticsService, LinkService};
use linktrack::domain::click_event::ClickEvent;
use linktrack::domain::entities::{Click, Link, NewClick, NewLink};
use linktrack::domain::repositories::{ClickRepository, LinkRepository, LinkWithClicks};
use linktrack::error::AppError;
use linktrack::infrastructure::cache::MemoryCache;
use linktrack::routes::app_router;
use linktrack::state::AppState;

pub const PEER_ADDR: &str = "127.0.0.1:12345";

#[derive(Default)]
struct Tables {
    links: Vec<Link>,
    clicks: Vec<Click>,
}

/// Link and click store kept in memory, with switches for failure injection.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    find_calls: AtomicUsize,
    fail_clicks: AtomicBool,
    reject_codes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of `find_by_code` calls so far.
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Makes every click insert fail.
    pub fn fail_clicks(&self, fail: bool) {
        self.fail_clicks.store(fail, Ordering::SeqCst);
    }

    /// Makes every link insert report a taken short code.
    pub fn reject_codes(&self, reject: bool) {
        self.reject_codes.store(reject, Ordering::SeqCst);
    }

    pub fn link_count(&self) -> usize {
        self.tables.lock().unwrap().links.len()
    }

    pub fn clicks(&self) -> Vec<Click> {
        self.tables.lock().unwrap().clicks.clone()
    }

    /// Inserts a link directly, bypassing the service.
    pub fn seed_link(&self, short_code: &str, original_url: &str) -> Link {
        let mut tables = self.tables.lock().unwrap();
        let link = Link::new(
            tables.links.len() as i64 + 1,
            short_code.to_string(),
            original_url.to_string(),
            Utc::now(),
        );
        tables.links.push(link.clone());
        link
    }

    /// Inserts a classified click directly, bypassing the worker.
    pub fn seed_click(&self, link_id: i64, region: &str, device: &str) {
        let mut tables = self.tables.lock().unwrap();
        let click = Click::new(
            tables.clicks.len() as i64 + 1,
            link_id,
            None,
            None,
            region.to_string(),
            device.to_string(),
            Utc::now(),
        );
        tables.clicks.push(click);
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tables = self.tables.lock().unwrap();

        if self.reject_codes.load(Ordering::SeqCst)
            || tables
                .links
                .iter()
                .any(|l| l.short_code == new_link.short_code)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_short_code_key" }),
            ));
        }

        let link = Link::new(
            tables.links.len() as i64 + 1,
            new_link.short_code,
            new_link.original_url,
            Utc::now(),
        );
        tables.links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);

        let tables = self.tables.lock().unwrap();
        Ok(tables
            .links
            .iter()
            .find(|l| l.short_code == short_code)
            .cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[async_trait]
impl ClickRepository for InMemoryStore {
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError> {
        if self.fail_clicks.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let mut tables = self.tables.lock().unwrap();

        if !tables.links.iter().any(|l| l.id == new_click.link_id) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let click = Click::new(
            tables.clicks.len() as i64 + 1,
            new_click.link_id,
            new_click.ip,
            new_click.user_agent,
            new_click.region,
            new_click.device,
            Utc::now(),
        );
        tables.clicks.push(click.clone());

        Ok(click)
    }

    async fn find_link_with_clicks(
        &self,
        short_code: &str,
    ) -> Result<Option<LinkWithClicks>, AppError> {
        let tables = self.tables.lock().unwrap();

        let Some(link) = tables
            .links
            .iter()
            .find(|l| l.short_code == short_code)
            .cloned()
        else {
            return Ok(None);
        };

        let clicks = tables
            .clicks
            .iter()
            .filter(|c| c.link_id == link.id)
            .cloned()
            .collect();

        Ok(Some(LinkWithClicks { link, clicks }))
    }
}

/// Services wired to an [`InMemoryStore`] and a real [`MemoryCache`].
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    pub cache: Arc<MemoryCache>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with(Duration::from_secs(300), 100)
}

pub fn create_test_context_with(cache_ttl: Duration, queue_capacity: usize) -> TestContext {
    let store = InMemoryStore::new();
    let cache = Arc::new(MemoryCache::new(1_000));
    let (click_tx, click_rx) = mpsc::channel(queue_capacity);

    let link_service =
        Arc::new(LinkService::new(store.clone(), cache.clone()).with_cache_ttl(cache_ttl));
    let analytics_service = Arc::new(AnalyticsService::new(store.clone()));

    let state = AppState::new(link_service, analytics_service, cache.clone(), click_tx);

    TestContext {
        state,
        store,
        cache,
        click_rx,
    }
}

/// Serves the full application router, with every request coming from [`PEER_ADDR`].
pub fn test_server(state: AppState) -> TestServer {
    let app = app_router(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
