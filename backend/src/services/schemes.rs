//! Government scheme catalog and eligibility views

use std::sync::Arc;

use shared::catalog;
use shared::eligibility;
use shared::{EligibilityResult, Scheme};

use crate::store::ProfileStore;

/// Scheme catalog bound to the profile store, cheap to clone
#[derive(Clone)]
pub struct SchemeService {
    catalog: Arc<Vec<Scheme>>,
    profiles: ProfileStore,
}

impl SchemeService {
    pub fn new(profiles: ProfileStore) -> Self {
        Self {
            catalog: Arc::new(catalog::scheme_catalog()),
            profiles,
        }
    }

    /// Every scheme, in catalog order, regardless of the profile
    pub fn all(&self) -> &[Scheme] {
        &self.catalog
    }

    /// Eligibility of every scheme against the current profile
    pub async fn evaluate_all(&self) -> Vec<(Scheme, EligibilityResult)> {
        let profile = self.profiles.get().await;
        self.catalog
            .iter()
            .map(|scheme| {
                let result = eligibility::evaluate(profile.as_ref(), &scheme.criteria);
                (scheme.clone(), result)
            })
            .collect()
    }

    /// Only the schemes the current profile qualifies for
    pub async fn eligible(&self) -> Vec<Scheme> {
        let profile = self.profiles.get().await;
        eligibility::eligible_schemes(profile.as_ref(), &self.catalog)
            .into_iter()
            .cloned()
            .collect()
    }
}
