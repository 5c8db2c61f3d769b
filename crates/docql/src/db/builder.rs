use super::{Docql, Shared};
use crate::{driver::Driver, source::Source, Config, Result};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    driver: Option<Box<dyn Driver>>,
    source: Option<Box<dyn Source>>,
    config: Config,
}

impl Builder {
    /// Set the SQL engine requests load tables into.
    ///
    /// Defaults to an in-memory SQLite database when the `sqlite` feature is
    /// enabled.
    pub fn driver(&mut self, driver: impl Driver) -> &mut Self {
        self.driver = Some(Box::new(driver));
        self
    }

    /// Set the remote API tables are loaded from. Required.
    pub fn source(&mut self, source: impl Source) -> &mut Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Set the maximum number of rows one request may load
    pub fn max_rows(&mut self, max_rows: u64) -> &mut Self {
        self.config.max_rows = max_rows;
        self
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn build(&mut self) -> Result<Docql> {
        let Some(source) = self.source.take() else {
            crate::bail!("no source configured; call `Builder::source` before `build`");
        };

        let driver = match self.driver.take() {
            Some(driver) => driver,
            None => default_driver()?,
        };

        Ok(Docql {
            shared: Arc::new(Shared {
                driver,
                source,
                config: self.config.clone(),
            }),
        })
    }
}

#[cfg(feature = "sqlite")]
fn default_driver() -> Result<Box<dyn Driver>> {
    Ok(Box::new(crate::driver::Sqlite::in_memory()))
}

#[cfg(not(feature = "sqlite"))]
fn default_driver() -> Result<Box<dyn Driver>> {
    crate::bail!("no driver configured and the `sqlite` feature is not enabled")
}
