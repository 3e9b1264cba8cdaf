//! Pixabay error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PixabayProvider;

/// Pull the quoted parameter name out of messages such as
/// `[ERROR 400] "page" is out of valid range.`
fn quoted_param(message: &str) -> Option<&str> {
    let start = message.find('"')? + 1;
    let len = message[start..].find('"')?;
    let name = &message[start..start + len];
    (!name.is_empty()).then_some(name)
}

/// Pixabay reports errors as plain-text bodies keyed by HTTP status.
/// Reference: <https://pixabay.com/api/docs/>
impl ProviderErrorMapper for PixabayProvider {
    fn provider_name(&self) -> &'static str {
        "pixabay"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 400: "[ERROR 400] Invalid or missing API key"
            Some("400") if raw.message.to_lowercase().contains("api key") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // 400: "[ERROR 400] "page" is out of valid range."
            Some("400") => {
                let param = quoted_param(&raw.message).map_or_else(
                    || {
                        if context.page.is_some_and(|p| p > 1) {
                            "page".to_string()
                        } else {
                            "query".to_string()
                        }
                    },
                    ToString::to_string,
                );
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param,
                    detail: raw.message,
                }
            }

            Some("401" | "403") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("429") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> PixabayProvider {
        PixabayProvider::new(String::new()).unwrap()
    }

    fn ctx(page: u32) -> ErrorContext {
        ErrorContext { page: Some(page) }
    }

    #[test]
    fn missing_key_maps_to_invalid_credentials() {
        let e = provider().map_error(
            RawApiError::with_code("400", "[ERROR 400] Invalid or missing API key"),
            ctx(1),
        );
        assert!(matches!(e, ProviderError::InvalidCredentials { .. }), "{e:?}");
    }

    #[test]
    fn forbidden_maps_to_invalid_credentials() {
        let e = provider().map_error(RawApiError::with_code("403", "Forbidden"), ctx(1));
        assert!(matches!(e, ProviderError::InvalidCredentials { .. }), "{e:?}");
    }

    #[test]
    fn out_of_range_page_names_param() {
        let e = provider().map_error(
            RawApiError::with_code("400", r#"[ERROR 400] "page" is out of valid range."#),
            ctx(42),
        );
        match e {
            ProviderError::InvalidParameter { param, detail, .. } => {
                assert_eq!(param, "page");
                assert!(detail.contains("out of valid range"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unquoted_bad_request_falls_back_on_context() {
        let e = provider().map_error(RawApiError::with_code("400", "Bad Request"), ctx(1));
        assert!(
            matches!(&e, ProviderError::InvalidParameter { param, .. } if param == "query"),
            "{e:?}"
        );
        let e = provider().map_error(RawApiError::with_code("400", "Bad Request"), ctx(9));
        assert!(
            matches!(&e, ProviderError::InvalidParameter { param, .. } if param == "page"),
            "{e:?}"
        );
    }

    #[test]
    fn rate_limit_code_maps_to_rate_limited() {
        let e = provider().map_error(RawApiError::with_code("429", "slow down"), ctx(1));
        assert!(matches!(e, ProviderError::RateLimited { .. }), "{e:?}");
    }

    #[test]
    fn unknown_status_falls_back() {
        let e = provider().map_error(
            RawApiError::with_code("500", "Internal Server Error"),
            ErrorContext::default(),
        );
        match e {
            ProviderError::Unknown {
                raw_code,
                raw_message,
                ..
            } => {
                assert_eq!(raw_code.as_deref(), Some("500"));
                assert_eq!(raw_message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn codeless_error_is_unknown() {
        let raw = RawApiError {
            code: None,
            message: "boom".to_string(),
        };
        let e = provider().map_error(raw, ErrorContext::default());
        assert!(matches!(e, ProviderError::Unknown { raw_code: None, .. }), "{e:?}");
    }

    #[test]
    fn quoted_param_extraction() {
        assert_eq!(quoted_param(r#"x "per_page" y"#), Some("per_page"));
        assert_eq!(quoted_param("no quotes"), None);
        assert_eq!(quoted_param(r#"empty "" here"#), None);
    }
}
