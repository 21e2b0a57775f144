mod convert;
mod endian;
mod ip_addr;

pub use convert::{address_to_integer, integer_to_address, Direction, Mode, Signedness};
pub use endian::Endianness;
pub use ip_addr::IpV4Addr;
