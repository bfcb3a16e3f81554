mod config;
mod repos;

pub use config::Config;
pub use repos::{IEventRepo, Repos};

#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
}

impl Context {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> Context {
    Context::create_inmemory()
}
