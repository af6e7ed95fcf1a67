//! Hyper server setup and connection handling.

use std::{net::SocketAddr, sync::Arc};

use http_body_util::Full;
use hyper::{Request, Response, body::{Bytes, Incoming}};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto::Builder as ConnectionBuilder,
};
use tokio::net::TcpListener;

use super::Router;

/// HTTP server for the dashboard.
pub struct Server {
    addr: SocketAddr,
    router: Arc<Router>,
}

impl Server {
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self { addr, router: Arc::new(router) }
    }

    /// Accept connections until Ctrl-C.
    pub async fn serve(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "[server] listening");

        loop {
            let (stream, peer) = tokio::select! {
                accepted = listener.accept() => accepted?,
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("[server] shutting down");
                    return Ok(());
                }
            };
            let io = TokioIo::new(stream);
            let router = Arc::clone(&self.router);

            tokio::task::spawn(async move {
                let service = hyper::service::service_fn(move |req| handle_request(req, Arc::clone(&router)));
                if let Err(err) = ConnectionBuilder::new(TokioExecutor::new()).serve_connection(io, service).await {
                    tracing::debug!(%peer, error = %err, "[server] connection closed with error");
                }
            });
        }
    }
}

async fn handle_request(req: Request<Incoming>, router: Arc<Router>) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let response = router.respond(req.method(), req.uri()).await;
    Ok(response.map(Full::new))
}
