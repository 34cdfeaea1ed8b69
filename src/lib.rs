//! DigitalOcean SDK for Rust.
//!
//! A typed, asynchronous client for the DigitalOcean public REST API.
//!
//! # What This SDK Provides
//!
//! - Bearer token authentication: [`BearerTokenProvider`]
//! - A pluggable HTTP transport seam: [`RequestAdapter`], implemented by [`HttpRequestAdapter`]
//! - A client factory bound to `https://api.digitalocean.com`: [`ClientFactory`]
//! - A fluent navigation tree mirroring the API's URL hierarchy, rooted at [`DigitalOceanClient::v2`]
//! - Serde models for accounts, droplets, domains, Kubernetes, databases and more
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use digitalocean_sdk::{BearerTokenProvider, ClientFactory, HttpRequestAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), digitalocean_sdk::DoError> {
//!     let auth = BearerTokenProvider::from_env()?;
//!     let adapter = HttpRequestAdapter::new(auth)?;
//!     let client = ClientFactory::create(adapter);
//!
//!     let balance = client.v2().customers().my().balance().get().await?;
//!     println!("account balance: {:?}", balance.account_balance);
//!     Ok(())
//! }
//! ```
//!
//! # Common Tasks
//!
//! ## Listing With Pagination
//!
//! List responses carry `links.pages.next`. Retarget the same node at that
//! URL to fetch the next page.
//!
//! ```rust,no_run
//! use digitalocean_sdk::{DigitalOceanClient, DropletsQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), digitalocean_sdk::DoError> {
//!     let client = DigitalOceanClient::from_env()?;
//!     let droplets = client.v2().droplets();
//!
//!     let query = DropletsQuery { per_page: Some(50), ..Default::default() };
//!     let mut page = droplets.get_with(&query).await?;
//!     loop {
//!         for droplet in &page.droplets {
//!             println!("{} {}", droplet.id, droplet.name);
//!         }
//!         let next = page.links.as_ref().and_then(|l| l.next_page()).map(str::to_string);
//!         match next {
//!             Some(url) => page = droplets.with_url(url).get().await?,
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Droplet Actions
//!
//! ```rust,no_run
//! use digitalocean_sdk::polling::{wait_for_action, PollOptions};
//! use digitalocean_sdk::{DigitalOceanClient, DropletAction};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), digitalocean_sdk::DoError> {
//!     let client = DigitalOceanClient::from_env()?;
//!     let started = client
//!         .v2()
//!         .droplets()
//!         .by_droplet_id(3164444)
//!         .actions()
//!         .post(&DropletAction::Reboot)
//!         .await?;
//!
//!     let done = wait_for_action(&client, started.action.id, PollOptions::default()).await?;
//!     println!("{:?} finished at {:?}", done.type_, done.completed_at);
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/) facade
//! for every request the adapter sends. Tokens and header values are never logged.
//! Configure any compatible logger in your binary, then set `RUST_LOG=debug`.
//!
//! # Errors
//!
//! All fallible operations return [`DoError`]:
//!
//! - Non-2xx responses are [`DoError::Api`], carrying the status code, the
//!   raw body and the parsed `id`/`message` envelope
//! - Transport and decoding failures are `HttpError` and `JsonError`
//! - A blank token or unusable base URL is `Configuration`
pub mod adapter;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod navigation;
pub mod polling;
pub mod request;

// Re-export primary types for convenience.
pub use adapter::{HttpRequestAdapter, RequestAdapter};
pub use auth::{AnonymousAuthenticationProvider, AuthenticationProvider, BearerTokenProvider};
pub use client::{ClientFactory, DigitalOceanClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL, TOKEN_ENV_VAR};
pub use errors::{ApiError, DoError};
pub use models::*;
pub use navigation::{
    BandwidthQuery, DatabasesQuery, DropletsQuery, ImagesQuery, ListQuery, MetricsQuery,
    QueryParameters, RecordsQuery, TagSelector, V2RequestBuilder, VolumesQuery,
};
pub use request::{HttpMethod, HttpResponse, RequestInformation};
