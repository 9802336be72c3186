use crate::utils::error::{GalleryError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GalleryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Expected host:port, {}", e),
        })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GalleryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("upstream.base_url", "https://dog.ceo/api").is_ok());
        assert!(validate_url("upstream.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("upstream.base_url", "").is_err());
        assert!(validate_url("upstream.base_url", "invalid-url").is_err());
        assert!(validate_url("upstream.base_url", "ftp://dog.ceo").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert_eq!(
            validate_socket_addr("server.bind_addr", "0.0.0.0:3000")
                .unwrap()
                .port(),
            3000
        );
        assert!(validate_socket_addr("server.bind_addr", "localhost").is_err());
        assert!(validate_socket_addr("server.bind_addr", "0.0.0.0:99999").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("upstream.timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("upstream.timeout_seconds", 0u64, 1, 300).is_err());
        assert!(validate_range("upstream.timeout_seconds", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_path_and_string() {
        assert!(validate_path("server.static_dir", "public").is_ok());
        assert!(validate_path("server.static_dir", "").is_err());
        assert!(validate_non_empty_string("logging.level", "   ").is_err());
    }
}
