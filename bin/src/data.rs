//! Input loading for the Ronda CLI.

use anyhow::{Context, Result};
use ronda_core::CompanyFinancials;
use ronda_trend::TrendConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a default trend configuration file.
pub(crate) const CONFIG_ENV: &str = "RONDA_CONFIG";

/// A file holding either one company or an array of companies.
#[derive(Deserialize)]
#[serde(untagged)]
enum CompanyFile {
    Many(Vec<CompanyFinancials>),
    One(Box<CompanyFinancials>),
}

/// Load a single company from a JSON file.
pub(crate) async fn load_company(path: &Path) -> Result<CompanyFinancials> {
    let raw = read(path).await?;
    parse_company(&raw).with_context(|| format!("Invalid company data in {}", path.display()))
}

/// Load one or more companies from a JSON file.
pub(crate) async fn load_companies(path: &Path) -> Result<Vec<CompanyFinancials>> {
    let raw = read(path).await?;
    parse_companies(&raw).with_context(|| format!("Invalid company data in {}", path.display()))
}

/// Load the trend configuration from `path`, else from `RONDA_CONFIG`, else
/// the defaults. The result is validated.
pub(crate) async fn load_config(path: Option<&Path>) -> Result<TrendConfig> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let config = match path {
        Some(path) => {
            let raw = read(&path).await?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid trend configuration in {}", path.display()))?
        }
        None => TrendConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

async fn read(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_company(raw: &str) -> Result<CompanyFinancials> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_companies(raw: &str) -> Result<Vec<CompanyFinancials>> {
    Ok(match serde_json::from_str(raw)? {
        CompanyFile::Many(companies) => companies,
        CompanyFile::One(company) => vec![*company],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"{"symbol": "ACME", "annual": [{"period": "FY24", "value": 10.0}]}"#;

    #[test]
    fn test_parse_single_company() {
        let company = parse_company(ONE).unwrap();
        assert_eq!(company.symbol, "ACME");
        assert_eq!(company.annual.len(), 1);
        assert!(company.statements.is_empty());
    }

    #[test]
    fn test_parse_companies_one_or_many() {
        assert_eq!(parse_companies(ONE).unwrap().len(), 1);

        let many = format!("[{}, {{\"symbol\": \"BETA\"}}]", ONE);
        let companies = parse_companies(&many).unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[1].symbol, "BETA");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_company("{\"annual\": 3}").is_err());
        assert!(parse_companies("not json").is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = load_company(Path::new("/nonexistent/ronda/company.json")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!("ronda-config-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"classifier": {"direction_threshold": 0.05}}"#)
            .await
            .unwrap();

        let config = load_config(Some(path.as_path())).await.unwrap();
        assert_eq!(config.classifier.direction_threshold, 0.05);

        tokio::fs::write(&path, r#"{"score": {"consistency": -1.0}}"#).await.unwrap();
        assert!(load_config(Some(path.as_path())).await.is_err());

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
