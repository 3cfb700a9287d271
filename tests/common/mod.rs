#![allow(dead_code)]

use axum::extract::ConnectInfo;
use site_router::application::services::SiteService;
use site_router::domain::profiles::Profile;
use site_router::state::AppState;
use std::net::SocketAddr;
use tower::Layer;

pub const DEFAULT_HOST: &str = "localhost:3000";

pub fn create_test_state() -> AppState {
    create_profile_state(Profile::Production)
}

pub fn create_profile_state(profile: Profile) -> AppState {
    let site_service = SiteService::for_profile(profile).unwrap();
    AppState::new(site_service, DEFAULT_HOST, 2048)
}

/// Inserts a fixed peer address so per-IP rate limiting can extract a key.
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
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
