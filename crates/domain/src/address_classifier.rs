use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// RFC 1918 private networks as `(network, prefix length)`.
const PRIVATE_IPV4_RANGES: &[(Ipv4Addr, u8)] = &[
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// Reserved IPv4 networks a public name must never resolve into, on top of
/// the private and loopback ranges. Same set dnsmasq uses for
/// `--stop-dns-rebind`.
const REBIND_IPV4_RANGES: &[(Ipv4Addr, u8)] = &[
    (Ipv4Addr::new(0, 0, 0, 0), 8),       // "this" network, RFC 5735
    (Ipv4Addr::new(169, 254, 0, 0), 16),  // zeroconf
    (Ipv4Addr::new(192, 0, 2, 0), 24),    // TEST-NET-1
    (Ipv4Addr::new(198, 51, 100, 0), 24), // TEST-NET-2
    (Ipv4Addr::new(203, 0, 113, 0), 24),  // TEST-NET-3
    (Ipv4Addr::BROADCAST, 32),
];

const REBIND_IPV6_ADDRS: &[Ipv6Addr] = &[
    Ipv6Addr::UNSPECIFIED,
    Ipv6Addr::new(0xff01, 0, 0, 0, 0, 0, 0, 1), // interface-local all-nodes
    Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 1), // link-local all-nodes
    Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 2), // link-local all-routers
];

const LOCALHOST: &str = "localhost";

/// Classifies addresses that must not be the answer to a public lookup.
///
/// Every predicate is a pure function of the address bytes. IPv4-mapped
/// IPv6 addresses (`::ffff:a.b.c.d`) classify exactly like their IPv4 form.
pub struct AddressClassifier;

impl AddressClassifier {
    /// RFC 1918 for IPv4, RFC 4193 unique-local (`fc00::/7`) for IPv6.
    pub fn is_private(ip: &IpAddr) -> bool {
        match ip.to_canonical() {
            IpAddr::V4(ipv4) => Self::matches_any_ipv4_range(ipv4, PRIVATE_IPV4_RANGES),
            IpAddr::V6(ipv6) => ipv6.octets()[0] & 0xfe == 0xfc,
        }
    }

    pub fn is_rebind_target(ip: &IpAddr) -> bool {
        let ip = ip.to_canonical();

        let reserved = match ip {
            IpAddr::V4(ipv4) => Self::matches_any_ipv4_range(ipv4, REBIND_IPV4_RANGES),
            IpAddr::V6(ipv6) => REBIND_IPV6_ADDRS.contains(&ipv6),
        };

        reserved || Self::is_private(&ip) || ip.is_loopback()
    }

    /// `host` is either an address literal or a hostname. Only the exact
    /// (case-sensitive) name `localhost` counts as a rebind hostname.
    pub fn is_rebind_hostname(host: &str) -> bool {
        match host.parse::<IpAddr>() {
            Ok(ip) => Self::is_rebind_target(&ip),
            Err(_) => host == LOCALHOST,
        }
    }

    fn matches_any_ipv4_range(ip: Ipv4Addr, ranges: &[(Ipv4Addr, u8)]) -> bool {
        ranges
            .iter()
            .any(|(network, prefix)| Self::matches_ipv4_range(ip, *network, *prefix))
    }

    fn matches_ipv4_range(ip: Ipv4Addr, network: Ipv4Addr, prefix: u8) -> bool {
        let mask = u32::MAX
            .checked_shl(32 - u32::from(prefix))
            .unwrap_or(0);
        u32::from(ip) & mask == u32::from(network) & mask
    }
}
