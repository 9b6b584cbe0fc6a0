use std::env;
use std::net::{AddrParseError, SocketAddrV4};
use std::str::FromStr;

const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_DEVICE_BASE_URL: &str = "http://192.168.1.100:8080";

/// Server configs
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    pub device_base_url: String,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, device_base_url: String) -> Self {
        Self {
            addr,
            device_base_url: device_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `HOST` and `DEVICE_BASE_URL` from the process env.
    pub fn from_env() -> Result<Self, AddrParseError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with `lookup` standing in for the env.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AddrParseError> {
        let addr = SocketAddrV4::from_str(
            lookup("HOST")
                .unwrap_or(DEFAULT_HOST_ADDR.to_string())
                .as_str(),
        )?;
        let device_base_url =
            lookup("DEVICE_BASE_URL").unwrap_or(DEFAULT_DEVICE_BASE_URL.to_string());
        Ok(Self::new(addr, device_base_url))
    }
}
