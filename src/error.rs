use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load site configuration: {0}")]
    Config(String),
    #[error("Couldn't bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped: {0}")]
    Serve(#[from] std::io::Error),
}
