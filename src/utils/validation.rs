use crate::utils::error::{Result, WeatherError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Strip everything that is not an ASCII decimal digit. Never fails; may
/// return a string of any length, including empty.
pub fn normalize_cep(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub const CEP_LEN: usize = 8;

/// A CEP is valid when its normalized form is exactly 8 digits.
pub fn is_valid_cep(input: &str) -> bool {
    normalize_cep(input).len() == CEP_LEN
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WeatherError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(WeatherError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WeatherError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WeatherError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}
