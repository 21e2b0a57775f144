use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use anyhow::bail;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IpV4Addr(pub [u8; 4]);

impl IpV4Addr {
    /// Parses a dotted-quad IPv4 address. IPv6 literals are rejected, even
    /// when they embed an IPv4 address.
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        match input.parse::<IpAddr>() {
            Ok(IpAddr::V4(ip)) => Ok(Self::from(ip)),
            _ => bail!("invalid ipv4 address"),
        }
    }
}

impl From<u32> for IpV4Addr {
    fn from(value: u32) -> Self {
        Self([
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ])
    }
}

impl From<IpV4Addr> for u32 {
    fn from(value: IpV4Addr) -> Self {
        let [a, b, c, d] = value.0;
        ((a as u32) << 24) | ((b as u32) << 16) | ((c as u32) << 8) | (d as u32)
    }
}

impl From<Ipv4Addr> for IpV4Addr {
    fn from(value: Ipv4Addr) -> Self {
        Self(value.octets())
    }
}

impl fmt::Display for IpV4Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}
