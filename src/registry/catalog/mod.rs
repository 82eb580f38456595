//! The standard service catalog
//!
//! One module per service, each returning its full declarative spec. The
//! registry is assembled once at startup; a structural error in any table is
//! fatal at init.

mod assistant;
mod nlc;
mod nlu;
mod stt;
mod tts;
mod vr;

use crate::error::CliResult;
use crate::registry::Registry;

impl Registry {
    /// Build the standard registry of all services
    pub fn standard() -> CliResult<Self> {
        let mut registry = Registry::new();
        registry.register(assistant::service())?;
        registry.register(nlc::service())?;
        registry.register(nlu::service())?;
        registry.register(stt::service())?;
        registry.register(tts::service())?;
        registry.register(vr::service())?;
        Ok(registry)
    }
}
