//! Registration of script providers with the host.

use tracing::info;

use crate::common::error::{ScriptError, ScriptResult};
use crate::host::abi::to_c_string;
use crate::host::Host;

use super::domain::Provider;
use super::registry::{self, MAX_PROVIDERS};

/// Slot of a provider registered by this script.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProviderHandle {
    slot: usize,
}

impl ProviderHandle {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Hand `provider` to the host. The instance stays alive, and reachable by the
/// host, for the rest of the process.
pub fn register<P: Provider>(host: &Host, provider: P) -> ScriptResult<ProviderHandle> {
    let type_name = to_c_string("provider type name", provider.type_name())?;
    let name = to_c_string("provider name", provider.name())?;

    let slot = registry::claim(Box::new(provider))?;
    let callbacks =
        registry::trampolines(slot).ok_or(ScriptError::ProvidersExhausted(MAX_PROVIDERS))?;

    host.register_provider(
        &type_name,
        &name,
        callbacks.read,
        callbacks.write,
        callbacks.get_size,
    );
    info!(slot, type_name = ?type_name, name = ?name, "provider registered");
    Ok(ProviderHandle { slot })
}

/// Register a default-constructed `P`.
pub fn register_default<P: Provider + Default>(host: &Host) -> ScriptResult<ProviderHandle> {
    register(host, P::default())
}

/// Locked access to a registered provider. Returns `None` if the provider
/// panicked while `f` ran.
pub fn with_provider<R>(handle: ProviderHandle, f: impl FnOnce(&mut dyn Provider) -> R) -> Option<R> {
    registry::with_slot(handle.slot, "script", f)
}
