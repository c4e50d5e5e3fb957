use axum::Extension;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::helper::parse_env_or;

pub(crate) struct Config {
    host: std::net::IpAddr,
    port: u16,

    session: crate::service::session::Config,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: parse_env_or("HOST", IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)))?,
            port: parse_env_or("PORT", 3010)?,

            session: crate::service::session::Config::from_env()?,
        })
    }

    pub fn build(self) -> Application {
        Application {
            socket_address: SocketAddr::from((self.host, self.port)),
            sessions: self.session.build(),
        }
    }
}

pub(crate) struct Application {
    socket_address: SocketAddr,
    sessions: crate::service::session::Manager,
}

impl Application {
    fn router(&self) -> axum::Router {
        crate::router::create()
            .layer(Extension(self.sessions.clone()))
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("binding socket to {}", self.socket_address);
        let listener = TcpListener::bind(self.socket_address).await?;
        tracing::info!("listening on {}", self.socket_address);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

#[cfg(test)]
impl Application {
    pub(crate) fn test() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8080,
            session: crate::service::session::Config::default(),
        }
        .build()
    }

    pub(crate) async fn handle(
        &self,
        req: axum::http::Request<axum::body::Body>,
    ) -> axum::http::Response<axum::body::Body> {
        use tower::ServiceExt;

        self.router().oneshot(req).await.unwrap()
    }
}
