//! PlanCatalog: the set of purchasable plans.
//!
//! The admin pricing editor owns the stored catalog; this type only loads
//! and validates it. Without a stored catalog the built-in Free/Pro/Enterprise
//! plans apply.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::features::Feature;
use super::plan::{BillingInterval, PlanTier, SubscriptionPlan};
use super::value::FeatureValue;
use crate::config::EntitlementConfig;
use crate::constants::DEFAULT_PLAN_ID;
use crate::errors::CatalogError;
use crate::types::collections::FxHashSet;

/// Deserializing always validates; an invalid catalog never exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredCatalog")]
pub struct PlanCatalog {
    default_plan: String,
    plans: Vec<SubscriptionPlan>,
}

/// Catalog as written to disk, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCatalog {
    #[serde(default = "default_plan_id")]
    default_plan: String,
    plans: Vec<SubscriptionPlan>,
}

fn default_plan_id() -> String {
    DEFAULT_PLAN_ID.to_string()
}

impl TryFrom<StoredCatalog> for PlanCatalog {
    type Error = CatalogError;

    fn try_from(stored: StoredCatalog) -> Result<Self, Self::Error> {
        Self::new(stored.plans, &stored.default_plan)
    }
}

impl PlanCatalog {
    /// Validate and build a catalog. Plan ids must be unique and
    /// `default_plan` must name one of them.
    pub fn new(plans: Vec<SubscriptionPlan>, default_plan: &str) -> Result<Self, CatalogError> {
        let catalog = Self {
            default_plan: default_plan.to_string(),
            plans,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in Free / Pro / Enterprise catalog.
    pub fn builtin() -> Self {
        use Feature::*;

        let free = SubscriptionPlan::new("free", "Free", PlanTier::Free, BillingInterval::Monthly)
            .with_feature(SavedPalettes, FeatureValue::limited(3))
            .with_feature(PdfExports, FeatureValue::limited(1))
            .with_feature(AiGenerations, FeatureValue::limited(0))
            .with_feature(ProTemplates, FeatureValue::Access(false))
            .with_feature(ImageExtraction, FeatureValue::Access(false))
            .with_feature(WebsiteExtraction, FeatureValue::Access(false))
            .with_feature(RemoveWatermark, FeatureValue::Access(false))
            .with_feature(CustomBranding, FeatureValue::Access(false))
            .with_feature(TeamSeats, FeatureValue::limited(1))
            .with_feature(PrioritySupport, FeatureValue::Access(false));

        let mut pro = SubscriptionPlan::new("pro", "Pro", PlanTier::Pro, BillingInterval::Monthly)
            .with_price(900)
            .with_feature(SavedPalettes, FeatureValue::limited(50))
            .with_feature(PdfExports, FeatureValue::limited(25))
            .with_feature(AiGenerations, FeatureValue::limited(100))
            .with_feature(ProTemplates, FeatureValue::Access(true))
            .with_feature(ImageExtraction, FeatureValue::Access(true))
            .with_feature(WebsiteExtraction, FeatureValue::Access(true))
            .with_feature(RemoveWatermark, FeatureValue::Access(true))
            .with_feature(CustomBranding, FeatureValue::Access(false))
            .with_feature(TeamSeats, FeatureValue::limited(1))
            .with_feature(PrioritySupport, FeatureValue::Access(false));
        pro.popular = true;

        let enterprise = Feature::ALL.iter().fold(
            SubscriptionPlan::new(
                "enterprise",
                "Enterprise",
                PlanTier::Enterprise,
                BillingInterval::Monthly,
            )
            .with_price(4900),
            |plan, &feature| {
                let value = match feature.kind() {
                    super::FeatureKind::Access => FeatureValue::Access(true),
                    super::FeatureKind::Quota => FeatureValue::UNLIMITED,
                };
                plan.with_feature(feature, value)
            },
        );

        Self {
            default_plan: DEFAULT_PLAN_ID.to_string(),
            plans: vec![free, pro, enterprise],
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let stored: StoredCatalog = toml::from_str(toml_str)?;
        Self::try_from(stored)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let stored: StoredCatalog = serde_json::from_str(json)?;
        Self::try_from(stored)
    }

    /// Load a stored catalog; the format follows the file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: shown.clone(),
            source,
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            Some("json") => Self::from_json(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat { path: shown }),
        };

        info!(path = %shown, plans = catalog.plans.len(), "plan catalog loaded");
        Ok(catalog)
    }

    /// Resolve the catalog for a config: the stored catalog when configured
    /// and loadable, the built-in one otherwise. The configured default plan
    /// wins when it exists in the resolved catalog.
    pub fn from_config(config: &EntitlementConfig) -> Self {
        let mut catalog = match &config.catalog_path {
            Some(path) => Self::load(Path::new(path)).unwrap_or_else(|e| {
                warn!(path = %path, error = %e, "plan catalog unusable, using built-in plans");
                Self::builtin()
            }),
            None => Self::builtin(),
        };

        if catalog.get(&config.default_plan).is_some() {
            catalog.default_plan = config.default_plan.clone();
        } else {
            warn!(
                plan = %config.default_plan,
                fallback = %catalog.default_plan,
                "configured default plan not in catalog"
            );
        }
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&SubscriptionPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Plan for users without a subscription.
    pub fn default_plan(&self) -> Option<&SubscriptionPlan> {
        self.get(&self.default_plan)
    }

    /// A user's plan id resolved against the catalog; unknown or absent ids
    /// fall back to the default plan.
    pub fn plan_for(&self, plan_id: Option<&str>) -> Option<&SubscriptionPlan> {
        plan_id.and_then(|id| self.get(id)).or_else(|| self.default_plan())
    }

    pub fn plans(&self) -> &[SubscriptionPlan] {
        &self.plans
    }

    pub fn default_plan_id(&self) -> &str {
        &self.default_plan
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = FxHashSet::default();
        for plan in &self.plans {
            if !seen.insert(plan.id.as_str()) {
                return Err(CatalogError::DuplicatePlan {
                    id: plan.id.clone(),
                });
            }
        }
        if !seen.contains(self.default_plan.as_str()) {
            return Err(CatalogError::UnknownDefault {
                id: self.default_plan.clone(),
            });
        }
        Ok(())
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
