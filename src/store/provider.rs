use clickhouse::Client;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::Error;

/// Hands out scoped store clients, one per request.
pub struct StoreProvider {
    config: StoreConfig,
}

impl StoreProvider {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Acquire a client for the duration of one request.
    ///
    /// The returned handle owns the client exclusively; it is never shared
    /// across requests, and dropping it releases the client on every exit
    /// path of the enclosing request.
    pub fn acquire(&self) -> Result<StoreHandle, Error> {
        let client = Client::default()
            .with_url(self.config.url.clone())
            .with_user(self.config.user.clone())
            .with_password(self.config.password.clone())
            .with_database(self.config.database.clone());

        debug!("Acquired store client for {}", self.config.url);

        Ok(StoreHandle { client })
    }

    /// Round-trip connectivity check against the configured store.
    pub async fn ping(&self) -> Result<(), Error> {
        let handle = self.acquire()?;
        handle.client.query("SELECT 1").fetch_one::<u8>().await?;

        info!("Store at {} answered ping", self.config.url);
        Ok(())
    }
}

/// Exclusively-owned store client, scoped to a single request.
pub struct StoreHandle {
    pub(crate) client: Client,
}

impl Drop for StoreHandle {
    fn drop(&mut self) {
        // Runs on every exit path: normal return, business failure, or fault.
        debug!("Released store client");
    }
}
