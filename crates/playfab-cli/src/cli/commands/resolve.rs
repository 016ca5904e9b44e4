//! `playfab resolve` – print the fully qualified URL for an API path.

use anyhow::{bail, Result};
use playfab_core::endpoint::{resolve_url, QueryParams};
use playfab_core::settings::{ApiSettings, SharedSettings};

pub fn run_resolve(
    settings: &SharedSettings,
    path: &str,
    params: &[String],
    title_id: Option<String>,
    vertical_name: Option<String>,
    environment_url: Option<String>,
) -> Result<()> {
    let query = parse_params(params)?;
    let overrides = ApiSettings {
        title_id,
        vertical_name,
        production_environment_url: environment_url,
        ..ApiSettings::default()
    };

    let url = resolve_url(path, query.as_ref(), Some(&overrides), settings);
    println!("{url}");
    Ok(())
}

/// Parse repeated `KEY=VALUE` arguments, preserving order.
fn parse_params(params: &[String]) -> Result<Option<QueryParams>> {
    if params.is_empty() {
        return Ok(None);
    }
    let mut query = QueryParams::new();
    for param in params {
        match param.split_once('=') {
            Some((key, value)) if !key.is_empty() => query.insert(key, value),
            _ => bail!("invalid query parameter {param:?}; expected KEY=VALUE"),
        }
    }
    Ok(Some(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_params_empty_is_none() {
        assert!(parse_params(&[]).unwrap().is_none());
    }

    #[test]
    fn parse_params_preserves_order() {
        let params = vec!["b=2".to_string(), "a=1".to_string()];
        let query = parse_params(&params).unwrap().unwrap();
        let keys: Vec<&str> = query.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn parse_params_allows_equals_in_value() {
        let params = vec!["token=a=b".to_string()];
        let query = parse_params(&params).unwrap().unwrap();
        let pairs: Vec<(&str, &str)> = query.iter().collect();
        assert_eq!(pairs, vec![("token", "a=b")]);
    }

    #[test]
    fn parse_params_rejects_missing_separator_or_key() {
        assert!(parse_params(&["novalue".to_string()]).is_err());
        assert!(parse_params(&["=1".to_string()]).is_err());
    }
}
