//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing an IPv4 network (address + prefix length),
//! the parser used for route literals, and the containment checks used by the
//! overlap scan.

use crate::error::SubnetError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// How host bits in a subnet literal are treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MaskPolicy {
    /// Host bits must be zero, `10.0.10.0/16` is rejected.
    #[default]
    Strict,
    /// Host bits are cleared, `10.0.10.0/16` becomes `10.0.0.0/16`.
    AutoMask,
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use check_routes::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixTooLong(len.into()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Convert a dotted netmask (`255.255.0.0`) or hostmask (`0.0.255.255`) to a
/// prefix length.
///
/// The netmask reading wins, so `0.0.0.0` is `/0` and `255.255.255.255` is `/32`.
/// Non-contiguous masks are rejected.
pub fn prefix_from_netmask(netmask: Ipv4Addr) -> Result<u8, SubnetError> {
    let bits = u32::from(netmask);
    [bits, !bits]
        .into_iter()
        .find_map(|mask| {
            let len = mask.leading_ones();
            (mask.checked_shl(len).unwrap_or(0) == 0).then_some(len as u8)
        })
        .ok_or_else(|| SubnetError::InvalidNetmask(netmask.to_string()))
}

fn parse_prefix(len_str: &str) -> Result<u8, SubnetError> {
    if !len_str.is_empty() && len_str.bytes().all(|b| b.is_ascii_digit()) {
        let len: u32 = len_str
            .parse()
            .map_err(|_| SubnetError::InvalidPrefix(len_str.to_string()))?;
        if len > MAX_LENGTH as u32 {
            return Err(SubnetError::PrefixTooLong(len));
        }
        return Ok(len as u8);
    }
    match Ipv4Addr::from_str(len_str) {
        Ok(netmask) => prefix_from_netmask(netmask),
        Err(_) => Err(SubnetError::InvalidPrefix(len_str.to_string())),
    }
}

/// Parse a subnet literal (`10.0.0.0/8` or `10.0.0.0/255.0.0.0`).
///
/// The returned [`Ipv4`] always has its host bits cleared. With
/// [`MaskPolicy::Strict`] a literal with host bits set is an error.
pub fn parse_subnet(literal: &str, policy: MaskPolicy) -> Result<Ipv4, SubnetError> {
    if literal.is_empty() {
        return Err(SubnetError::Empty);
    }
    let (addr_str, len_str) = literal
        .split_once('/')
        .ok_or(SubnetError::MissingPrefix)?;
    let addr = Ipv4Addr::from_str(addr_str)
        .map_err(|_| SubnetError::InvalidAddress(addr_str.to_string()))?;
    let mask = parse_prefix(len_str)?;

    let network = Ipv4 {
        addr: cut_addr(addr, mask)?,
        mask,
    };
    if policy == MaskPolicy::Strict && network.addr != addr {
        return Err(SubnetError::HostBitsSet(network.to_string()));
    }
    Ok(network)
}

/// IPv4 network with CIDR notation support.
///
/// Ordering is by address then mask length, so a larger network sorts before
/// the smaller networks that share its address.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_subnet(s, MaskPolicy::Strict)
    }
}

impl Ipv4 {
    /// Subnet mask as u32, a mask length over 32 is treated as 32.
    pub fn netmask(&self) -> u32 {
        let right_len = MAX_LENGTH.saturating_sub(self.mask) as u32;
        u32::MAX.checked_shl(right_len).unwrap_or(0)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.netmask())
    }

    /// True if `ip` falls inside this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// True if the two subnets share any address.
    ///
    /// CIDR blocks are either disjoint or nested, so checking both network
    /// addresses is enough.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.contains(other.lo()) || other.contains(self.lo())
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Ipv4 {
        s.parse().unwrap()
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_prefix_from_netmask() {
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 0, 0)).unwrap(), 16);
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 255, 255)).unwrap(), 32);
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(0, 0, 0, 0)).unwrap(), 0);
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 255, 128)).unwrap(), 25);
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(0, 255, 255, 255)).unwrap(), 8);
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(0, 0, 255, 255)).unwrap(), 16);
        assert!(prefix_from_netmask(Ipv4Addr::new(255, 0, 255, 0)).is_err());
        assert!(prefix_from_netmask(Ipv4Addr::new(0, 255, 0, 255)).is_err());
    }

    #[test]
    fn test_parse_subnet_valid() {
        assert_eq!(
            net("192.168.1.0/24"),
            Ipv4 {
                addr: Ipv4Addr::new(192, 168, 1, 0),
                mask: 24
            }
        );
        assert_eq!(net("0.0.0.0/0").mask, 0);
        assert_eq!(net("10.1.2.3/32").addr, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(net("10.20.0.0/255.255.0.0"), net("10.20.0.0/16"));
        assert_eq!(net("10.0.0.0/0.255.255.255"), net("10.0.0.0/8"));
    }

    #[test]
    fn test_parse_subnet_errors() {
        assert_eq!("".parse::<Ipv4>(), Err(SubnetError::Empty));
        assert_eq!("10.0.0.0".parse::<Ipv4>(), Err(SubnetError::MissingPrefix));
        assert_eq!(
            "10.0.0.256/24".parse::<Ipv4>(),
            Err(SubnetError::InvalidAddress("10.0.0.256".to_string()))
        );
        assert_eq!(
            "10.0.0.0/33".parse::<Ipv4>(),
            Err(SubnetError::PrefixTooLong(33))
        );
        assert_eq!(
            "10.0.0.0/".parse::<Ipv4>(),
            Err(SubnetError::InvalidPrefix("".to_string()))
        );
        assert_eq!(
            "10.0.0.0/+8".parse::<Ipv4>(),
            Err(SubnetError::InvalidPrefix("+8".to_string()))
        );
        assert!("10.0.0.0/99999999999".parse::<Ipv4>().is_err());
        assert!("10.0.0.0/8/8".parse::<Ipv4>().is_err());
        assert!("2001:db8::/32".parse::<Ipv4>().is_err());
        assert!("10.0.0.0 255.255.0.0".parse::<Ipv4>().is_err());
        assert!("10.0.0.0/8 ".parse::<Ipv4>().is_err());
        assert!(" 10.0.0.0/8".parse::<Ipv4>().is_err());
        assert!("10.0.0.0/8\t".parse::<Ipv4>().is_err());
        assert!("010.0.0.0/8".parse::<Ipv4>().is_err());
    }

    #[test]
    fn test_parse_subnet_mask_policy() {
        assert_eq!(
            parse_subnet("10.0.10.0/16", MaskPolicy::Strict),
            Err(SubnetError::HostBitsSet("10.0.0.0/16".to_string()))
        );
        assert_eq!(
            parse_subnet("10.0.10.0/16", MaskPolicy::AutoMask).unwrap(),
            net("10.0.0.0/16")
        );
        assert_eq!(
            parse_subnet("10.0.0.0/16", MaskPolicy::AutoMask).unwrap(),
            parse_subnet("10.0.0.0/16", MaskPolicy::Strict).unwrap()
        );
    }

    #[test]
    fn test_ip4_cmp_overlap() {
        let ip1 = net("10.0.10.0/24");
        let ip2 = net("10.0.0.0/8");
        let ip3 = net("10.0.10.64/26");

        assert!(ip1 > ip2);
        assert!(ip1 < ip3);
        assert!(ip2 < ip3);
        assert!(net("10.10.0.0/16") < net("10.10.0.0/24"));
        assert_eq!(ip2.hi(), Ipv4Addr::new(10, 255, 255, 255));
        assert_eq!(ip3.lo(), Ipv4Addr::new(10, 0, 10, 64));
        assert_eq!(net("0.0.0.0/0").hi(), Ipv4Addr::new(255, 255, 255, 255));

        assert!(ip1.overlaps(&ip2));
        assert!(ip2.overlaps(&ip1));
        assert!(ip1.overlaps(&ip3));
        assert!(ip1.overlaps(&ip1));
        assert!(!net("10.0.0.0/24").overlaps(&net("10.0.1.0/24")));
        assert!(net("0.0.0.0/0").overlaps(&net("192.168.1.1/32")));
    }

    #[test]
    fn test_contains() {
        let ip = net("192.168.1.0/24");
        assert!(ip.contains(Ipv4Addr::new(192, 168, 1, 0)));
        assert!(ip.contains(Ipv4Addr::new(192, 168, 1, 255)));
        assert!(!ip.contains(Ipv4Addr::new(192, 168, 2, 0)));
    }
}
