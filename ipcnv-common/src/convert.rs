use std::str::FromStr;

use anyhow::{anyhow, Context};

use crate::IpV4Addr;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    pub fn parse_int(self, input: &str) -> anyhow::Result<u32> {
        match self {
            Self::Signed => input
                .parse::<i32>()
                .map(|value| value as u32)
                .with_context(|| format!("invalid signed 32-bit integer {:?}", input)),
            Self::Unsigned => input
                .parse::<u32>()
                .with_context(|| format!("invalid unsigned 32-bit integer {:?}", input)),
        }
    }

    pub fn render(self, value: u32) -> String {
        match self {
            Self::Signed => (value as i32).to_string(),
            Self::Unsigned => value.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    AddrToInt,
    IntToAddr,
}

const MODE_RANGE: &str = "mode must be >= 0 and <= 3";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Mode {
    pub direction: Direction,
    pub signedness: Signedness,
}

impl Mode {
    pub fn convert(&self, input: &str) -> anyhow::Result<String> {
        match self.direction {
            Direction::AddrToInt => address_to_integer(input, self.signedness),
            Direction::IntToAddr => integer_to_address(input, self.signedness),
        }
    }
}

impl TryFrom<i64> for Mode {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let (direction, signedness) = match value {
            0 => (Direction::AddrToInt, Signedness::Signed),
            1 => (Direction::IntToAddr, Signedness::Signed),
            2 => (Direction::AddrToInt, Signedness::Unsigned),
            3 => (Direction::IntToAddr, Signedness::Unsigned),
            _ => return Err(anyhow!(MODE_RANGE)),
        };
        Ok(Self {
            direction,
            signedness,
        })
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    // Anything that is not a small integer is out of range too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(value) => Self::try_from(value),
            Err(_) => Err(anyhow!(MODE_RANGE)),
        }
    }
}

pub fn address_to_integer(input: &str, signedness: Signedness) -> anyhow::Result<String> {
    let addr = IpV4Addr::parse(input)?;
    Ok(signedness.render(u32::from(addr)))
}

pub fn integer_to_address(input: &str, signedness: Signedness) -> anyhow::Result<String> {
    let value = signedness.parse_int(input)?;
    Ok(IpV4Addr::from(value).to_string())
}
