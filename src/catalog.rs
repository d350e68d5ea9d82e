//! Seed catalog for the campaign wizard.
//!
//! All sample data the wizard presents (campaign types, integrations, email
//! providers, default rules and copy) comes from a single read-only catalog,
//! embedded at build time and overridable with `--seed`.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a seed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed data: {0}")]
    Invalid(String),
}

/// Closed set of icon keys used by seed data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKey {
    Gift,
    DollarSign,
    Megaphone,
    GoogleSheets,
    Slack,
}

impl IconKey {
    /// Terminal glyph for this icon key
    pub fn glyph(self) -> &'static str {
        match self {
            IconKey::Gift => "🎁",
            IconKey::DollarSign => "$",
            IconKey::Megaphone => "📣",
            IconKey::GoogleSheets => "▦",
            IconKey::Slack => "#",
        }
    }
}

/// Campaign type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Seeding,
    Paid,
    Other,
}

/// One of the five logical sub-steps shown in the progress rail
#[derive(Debug, Clone, Deserialize)]
pub struct SubStepInfo {
    pub id: u8,
    pub title: String,
    pub description: String,
}

/// A selectable campaign type card
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignTypeOption {
    pub id: CampaignType,
    pub title: String,
    pub description: String,
    pub icon: IconKey,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub description: String,
}

/// A campaign or tracking rule as shipped in seed data
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRule {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: IconKey,
    pub enabled: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailProviderInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectedEmail {
    pub id: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExistingProduct {
    pub id: String,
    pub name: String,
    pub created: String,
}

/// The full seed catalog consumed by the wizard
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub steps: Vec<SubStepInfo>,
    pub campaign_types: Vec<CampaignTypeOption>,
    pub default_product_info: ProductInfo,
    pub default_campaign_rules: Vec<SeedRule>,
    pub default_tracking_rules: Vec<SeedRule>,
    pub integrations: Vec<Integration>,
    pub email_providers: Vec<EmailProviderInfo>,
    pub default_connected_emails: Vec<ConnectedEmail>,
    pub default_email_content: EmailContent,
    pub existing_products: Vec<ExistingProduct>,
}

/// JSON seed data compiled into the binary
const BUILTIN_SEED: &str = include_str!("../seed/campaign.json");

impl Catalog {
    /// Load the embedded seed catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(BUILTIN_SEED)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a seed catalog from a JSON file (the `--seed` override)
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Look up the card for a campaign type
    pub fn campaign_type_option(&self, kind: CampaignType) -> Option<&CampaignTypeOption> {
        self.campaign_types.iter().find(|opt| opt.id == kind)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.steps.len() != 5 {
            return Err(CatalogError::Invalid(format!(
                "expected 5 sub-steps, found {}",
                self.steps.len()
            )));
        }
        for (i, step) in self.steps.iter().enumerate() {
            let expected = (i + 1) as u8;
            if step.id != expected {
                return Err(CatalogError::Invalid(format!(
                    "sub-step at position {} has id {}, expected {}",
                    i, step.id, expected
                )));
            }
        }
        if self.campaign_types.is_empty() {
            return Err(CatalogError::Invalid(
                "at least one campaign type is required".to_string(),
            ));
        }
        if self.email_providers.is_empty() {
            return Err(CatalogError::Invalid(
                "at least one email provider is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.steps.len(), 5);
        assert_eq!(catalog.steps[0].title, "Choose Campaign Type");
        assert!(!catalog.campaign_types.is_empty());
        assert!(!catalog.existing_products.is_empty());
    }

    #[test]
    fn test_campaign_type_lookup() {
        let catalog = Catalog::builtin().unwrap();
        let other = catalog.campaign_type_option(CampaignType::Other).unwrap();
        assert_eq!(other.title, "Other");
        assert!(catalog.campaign_type_option(CampaignType::Seeding).is_some());
    }

    #[test]
    fn test_icon_keys_deserialize_kebab_case() {
        let key: IconKey = serde_json::from_str("\"dollar-sign\"").unwrap();
        assert_eq!(key, IconKey::DollarSign);
        let key: IconKey = serde_json::from_str("\"google-sheets\"").unwrap();
        assert_eq!(key, IconKey::GoogleSheets);
    }

    #[test]
    fn test_every_icon_key_has_a_glyph() {
        for key in [
            IconKey::Gift,
            IconKey::DollarSign,
            IconKey::Megaphone,
            IconKey::GoogleSheets,
            IconKey::Slack,
        ] {
            assert!(!key.glyph().is_empty());
        }
    }

    #[test]
    fn test_validate_rejects_wrong_step_count() {
        let mut catalog = Catalog::builtin().unwrap();
        catalog.steps.pop();
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path(Path::new("/nonexistent/seed.json"));
        assert!(matches!(err, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_from_path_reads_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, BUILTIN_SEED).unwrap();
        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.steps.len(), 5);
    }
}
