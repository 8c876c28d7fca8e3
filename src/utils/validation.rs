use crate::utils::error::{Result, ScrapeError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finnkode(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "finnkode must consist of digits only".to_string(),
        });
    }

    Ok(())
}

pub fn validate_bind_addr(field_name: &str, value: &str) -> Result<()> {
    match value.parse::<std::net::SocketAddr>() {
        Ok(_) => Ok(()),
        Err(e) => Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid socket address: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_finnkode_accepts_digits() {
        assert!(validate_finnkode("finnkode", "123456789").is_ok());
    }

    #[test]
    fn test_validate_finnkode_rejects_empty() {
        assert!(validate_finnkode("finnkode", "").is_err());
    }

    #[test]
    fn test_validate_finnkode_rejects_letters() {
        assert!(validate_finnkode("finnkode", "12ab34").is_err());
    }

    #[test]
    fn test_validate_bind_addr() {
        assert!(validate_bind_addr("bind", "127.0.0.1:5000").is_ok());
        assert!(validate_bind_addr("bind", "localhost").is_err());
    }
}
