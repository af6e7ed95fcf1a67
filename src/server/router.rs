//! Path routing for the dashboard pages.

use std::time::Instant;

use anyhow::Result;
use hyper::{Method, Response, StatusCode, Uri, body::Bytes, header};
use matchit::Router as MatchitRouter;

use crate::{
    dashboard::Dashboard,
    io::svg::escape_xml,
    views::{Selection, View},
};
use super::query::parse_query;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Route {
    Page(View),
    Health,
}

/// Maps request paths onto views.
pub struct Router {
    inner: MatchitRouter<Route>,
    dashboard: Dashboard,
}

impl Router {
    pub fn new(dashboard: Dashboard) -> Result<Self> {
        let mut inner = MatchitRouter::new();
        for view in View::ALL {
            inner.insert(view.path(), Route::Page(view))?;
        }
        inner.insert("/map", Route::Page(View::Map))?;
        inner.insert("/healthz", Route::Health)?;
        Ok(Self { inner, dashboard })
    }

    /// Answer one request. Never fails: errors become a 500 page.
    pub async fn respond(&self, method: &Method, uri: &Uri) -> Response<Bytes> {
        let start = Instant::now();
        let response = match self.route(method, uri).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(path = uri.path(), error = %format!("{err:#}"), "[server] request failed");
                internal_error()
            }
        };
        tracing::info!(
            %method,
            path = uri.path(),
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "[server] request",
        );
        response
    }

    async fn route(&self, method: &Method, uri: &Uri) -> Result<Response<Bytes>> {
        let Ok(matched) = self.inner.at(uri.path()) else {
            return not_found(uri.path());
        };
        if method != Method::GET && method != Method::HEAD {
            return Ok(Response::builder()
                .status(StatusCode::METHOD_NOT_ALLOWED)
                .header(header::ALLOW, "GET, HEAD")
                .body(Bytes::new())?);
        }

        match *matched.value {
            Route::Health => respond_with(StatusCode::OK, "text/plain; charset=utf-8", "ok"),
            Route::Page(view) => {
                let pairs = parse_query(uri.query());
                let selection = Selection::from_pairs(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())));
                let dashboard = self.dashboard.clone();
                // the map view may block on the boundary fetch
                let page = tokio::task::spawn_blocking(move || dashboard.render(view, &selection)).await??;
                respond_with(StatusCode::OK, "text/html; charset=utf-8", page)
            }
        }
    }
}

fn respond_with(status: StatusCode, content_type: &str, body: impl Into<Bytes>) -> Result<Response<Bytes>> {
    Ok(Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())?)
}

fn not_found(path: &str) -> Result<Response<Bytes>> {
    let page = format!(
        "<!DOCTYPE html>\n<html><body><h1>Not Found</h1><p>No page at {}</p><p><a href=\"/\">Home</a></p></body></html>\n",
        escape_xml(path),
    );
    respond_with(StatusCode::NOT_FOUND, "text/html; charset=utf-8", page)
}

fn internal_error() -> Response<Bytes> {
    let mut response = Response::new(Bytes::from_static(b"Internal Server Error"));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
