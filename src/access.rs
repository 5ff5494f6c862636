multiversx_sc::imports!();

use crate::capability_proxy;
use crate::errors::{ERR_EMPTY_COUNCIL, ERR_MISSING_CAPABILITY};

/// Named permissions checked before gated operations.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Capability {
    Organizer,
    ComplianceOracle,
    Council,
    Admin,
}

impl Capability {
    pub fn name(&self) -> &'static [u8] {
        match self {
            Capability::Organizer => b"organizer",
            Capability::ComplianceOracle => b"compliance_oracle",
            Capability::Council => b"council",
            Capability::Admin => b"admin",
        }
    }
}

/// Capability predicate backed by the external capability registry.
/// This contract never grants or revokes anything.
#[multiversx_sc::module]
pub trait AccessModule: crate::config::ConfigModule {
    fn has_capability(&self, holder: &ManagedAddress, capability: Capability) -> bool {
        let registry = self.capability_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(capability_proxy::CapabilityRegistryProxy)
            .has_capability(holder.clone(), ManagedBuffer::from(capability.name()))
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn require_capability(&self, holder: &ManagedAddress, capability: Capability) {
        require!(
            self.has_capability(holder, capability),
            ERR_MISSING_CAPABILITY
        );
    }

    /// Current number of council members, as reported by the registry.
    fn council_size(&self) -> usize {
        let registry = self.capability_registry_address().get();
        let size: u32 = self
            .tx()
            .to(&registry)
            .typed(capability_proxy::CapabilityRegistryProxy)
            .capability_holder_count(ManagedBuffer::from(Capability::Council.name()))
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(size > 0, ERR_EMPTY_COUNCIL);
        size as usize
    }
}
