use crate::{
    clock::{SharedClock, SystemClock},
    config::Config,
    icons::IconService,
};

/// Services every component is built from
#[derive(Debug, Clone)]
pub struct AppContext {
    pub clock: SharedClock,
    pub icons: IconService,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config, clock: SharedClock) -> Self {
        Self {
            clock,
            icons: IconService::new(config.ui.icon_theme),
            config,
        }
    }

    /// Context on the wall clock
    pub fn with_system_clock(config: Config) -> Self {
        Self::new(config, SystemClock::shared())
    }
}
