//! URL construction from resolved endpoint fields.

use super::{Endpoint, QueryParams};
use crate::settings::{ApiSettings, SharedSettings};

impl Endpoint {
    /// Build the fully qualified URL for `api_path`.
    ///
    /// When `base_host` does not already start with a scheme, `https://` is
    /// synthesized and the non-empty title id and vertical name are
    /// prepended as subdomain components, title id first. `api_path` is
    /// appended verbatim (the caller supplies the leading slash), and query
    /// values are appended without percent-encoding.
    ///
    /// Total on its inputs: malformed values produce a malformed URL
    /// string, never a panic.
    pub fn url_for(&self, api_path: &str, query: Option<&QueryParams>) -> String {
        let mut url = String::with_capacity(64 + api_path.len());

        if !self.base_host.starts_with("http") {
            url.push_str("https://");
            if !self.title_id.is_empty() {
                url.push_str(&self.title_id);
                url.push('.');
            }
            if !self.vertical_name.is_empty() {
                url.push_str(&self.vertical_name);
                url.push('.');
            }
        }

        url.push_str(&self.base_host);
        url.push_str(api_path);

        if let Some(params) = query {
            for (index, (key, value)) in params.iter().enumerate() {
                url.push(if index == 0 { '?' } else { '&' });
                url.push_str(key);
                url.push('=');
                url.push_str(value);
            }
        }

        url
    }
}

/// Resolve the full URL for one API call.
///
/// Merges `overrides` over `defaults` (first non-empty wins, per field)
/// and builds the URL for `api_path`. Pure function of its inputs:
/// identical inputs yield identical output, and nothing is mutated.
pub fn resolve_url(
    api_path: &str,
    query: Option<&QueryParams>,
    overrides: Option<&ApiSettings>,
    defaults: &SharedSettings,
) -> String {
    Endpoint::resolve(overrides, defaults).url_for(api_path, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base_host: &str, vertical: &str, title: &str) -> Endpoint {
        Endpoint {
            base_host: base_host.to_string(),
            vertical_name: vertical.to_string(),
            title_id: title.to_string(),
        }
    }

    #[test]
    fn subdomains_come_title_first_then_vertical() {
        let url = endpoint("playfabapi.com", "main", "1234").url_for("/X", None);
        assert_eq!(url, "https://1234.main.playfabapi.com/X");
    }

    #[test]
    fn empty_components_are_skipped() {
        assert_eq!(
            endpoint("playfabapi.com", "", "1234").url_for("/X", None),
            "https://1234.playfabapi.com/X"
        );
        assert_eq!(
            endpoint("playfabapi.com", "main", "").url_for("/X", None),
            "https://main.playfabapi.com/X"
        );
        assert_eq!(
            endpoint("playfabapi.com", "", "").url_for("/X", None),
            "https://playfabapi.com/X"
        );
    }

    #[test]
    fn scheme_prefix_suppresses_subdomain_synthesis() {
        let url = endpoint("http://localhost:5000", "main", "1234").url_for("/X", None);
        assert_eq!(url, "http://localhost:5000/X");

        let url = endpoint("https://custom.example.com", "main", "1234").url_for("/X", None);
        assert_eq!(url, "https://custom.example.com/X");
    }

    #[test]
    fn query_rendering_uses_question_mark_then_ampersands() {
        let mut query = QueryParams::new();
        query.insert("a", "1");
        query.insert("b", "2");
        query.insert("c", "3");
        let url = endpoint("playfabapi.com", "", "").url_for("/X", Some(&query));
        assert_eq!(url, "https://playfabapi.com/X?a=1&b=2&c=3");
    }

    #[test]
    fn empty_query_mapping_renders_nothing() {
        let query = QueryParams::new();
        let url = endpoint("playfabapi.com", "", "").url_for("/X", Some(&query));
        assert_eq!(url, "https://playfabapi.com/X");
    }

    #[test]
    fn query_values_are_not_percent_encoded() {
        let mut query = QueryParams::new();
        query.insert("msg", "hello world");
        let url = endpoint("playfabapi.com", "", "").url_for("/X", Some(&query));
        assert_eq!(url, "https://playfabapi.com/X?msg=hello world");
    }

    #[test]
    fn api_path_is_appended_verbatim() {
        // Malformed input stays malformed instead of panicking.
        let url = endpoint("playfabapi.com", "", "").url_for("no-leading-slash", None);
        assert_eq!(url, "https://playfabapi.comno-leading-slash");
    }
}
