use std::sync::OnceLock;

use anyhow::bail;

static HOST: OnceLock<Endianness> = OnceLock::new();

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Inspects the native layout of `0x0100`: a leading `0x01` byte means
    /// big-endian, a leading `0x00` byte means little-endian.
    pub fn detect() -> anyhow::Result<Self> {
        Self::from_probe(0x0100u16.to_ne_bytes())
    }

    fn from_probe(probe: [u8; 2]) -> anyhow::Result<Self> {
        match probe[0] {
            0x01 => Ok(Self::Big),
            0x00 => Ok(Self::Little),
            _ => bail!("can not check endianness"),
        }
    }

    pub fn host() -> anyhow::Result<Self> {
        if let Some(host) = HOST.get() {
            return Ok(*host);
        }
        let detected = Self::detect()?;
        Ok(*HOST.get_or_init(|| detected))
    }
}

#[cfg(test)]
mod test {
    use crate::Endianness;

    #[test]
    fn detect_matches_target() {
        let expected = if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        };
        assert_eq!(Endianness::detect().unwrap(), expected);
        assert_eq!(Endianness::host().unwrap(), expected);
    }

    #[test]
    fn unexpected_probe_is_error() {
        let err = Endianness::from_probe([0x42, 0x00]).unwrap_err();
        assert_eq!(err.to_string(), "can not check endianness");
    }
}
