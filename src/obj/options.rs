use crate::db::internal_key::{parse_internal_key, InternalKey};
use crate::db::internal_key_comparator::InternalKeyComparator;
use crate::obj::status::{Result, Status};
use crate::util::bytewise_comparator_impl::bytewise_comparator;
use crate::util::comparator::Comparator;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct Options {
    pub comparator: Arc<dyn Comparator>,
    pub paranoid_checks: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            comparator: bytewise_comparator(),
            paranoid_checks: false,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("comparator", &self.comparator.name())
            .field("paranoid_checks", &self.paranoid_checks)
            .finish()
    }
}

impl Options {
    pub fn with_comparator(mut self, comparator: Arc<dyn Comparator>) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn with_paranoid_checks(mut self, paranoid_checks: bool) -> Self {
        self.paranoid_checks = paranoid_checks;
        self
    }

    pub fn internal_comparator(&self) -> InternalKeyComparator<Arc<dyn Comparator>> {
        InternalKeyComparator::new(self.comparator.clone())
    }

    /// Malformed keys are an error only with `paranoid_checks`.
    pub fn check_internal_key(&self, encoded: &[u8]) -> Result<InternalKey> {
        if self.paranoid_checks {
            return parse_internal_key(encoded);
        }
        let key = InternalKey::decode(encoded);
        if !key.is_valid() {
            debug!(len = encoded.len(), "keeping malformed internal key");
        }
        Ok(key)
    }

    pub fn check_comparator_name(&self, persisted: &str) -> Result<()> {
        let name = self.comparator.name();
        if name != persisted {
            return Err(Status::invalid_argument(
                &format!("{} does not match existing comparator", name),
                Some(persisted),
            ));
        }
        Ok(())
    }
}
