use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

/// In-place address transform. Must be safe to call from many threads.
pub type IpMutFn = Arc<dyn Fn(&mut IpAddr) + Send + Sync>;

/// Applies an address transform only while enabled.
///
/// The flag can be flipped from any thread while other threads call
/// [`IpMutator::mutate`]. A `mutate` racing with [`IpMutator::set_enabled`]
/// may observe either value; the flag is advisory, so loads and stores are
/// relaxed. Callers sharing one address between threads must serialize
/// access to it themselves.
#[derive(Default)]
pub enum IpMutator {
    /// Built without a transform; never touches the address.
    #[default]
    Nop,
    Custom {
        enabled: AtomicBool,
        mutate: IpMutFn,
    },
}

impl IpMutator {
    pub fn new(enabled: bool, mutate: Option<IpMutFn>) -> Self {
        match mutate {
            Some(mutate) => IpMutator::Custom {
                enabled: AtomicBool::new(enabled),
                mutate,
            },
            None => IpMutator::Nop,
        }
    }

    pub fn with_fn<F>(enabled: bool, f: F) -> Self
    where
        F: Fn(&mut IpAddr) + Send + Sync + 'static,
    {
        Self::new(enabled, Some(Arc::new(f)))
    }

    /// Masks addresses with [`anonymize_ip`] while enabled.
    pub fn anonymizer(enabled: bool) -> Self {
        Self::with_fn(enabled, anonymize_ip)
    }

    pub fn mutate(&self, ip: &mut IpAddr) {
        if let IpMutator::Custom { enabled, mutate } = self {
            if enabled.load(AtomicOrdering::Relaxed) {
                mutate(ip);
            }
        }
    }

    /// No effect on [`IpMutator::Nop`].
    pub fn set_enabled(&self, value: bool) {
        if let IpMutator::Custom { enabled, .. } = self {
            enabled.store(value, AtomicOrdering::Relaxed);
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            IpMutator::Nop => false,
            IpMutator::Custom { enabled, .. } => enabled.load(AtomicOrdering::Relaxed),
        }
    }

    pub fn is_nop(&self) -> bool {
        matches!(self, IpMutator::Nop)
    }
}

impl fmt::Debug for IpMutator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpMutator::Nop => f.write_str("IpMutator::Nop"),
            IpMutator::Custom { enabled, .. } => f
                .debug_struct("IpMutator::Custom")
                .field("enabled", &enabled.load(AtomicOrdering::Relaxed))
                .finish_non_exhaustive(),
        }
    }
}

/// Keeps the /16 of an IPv4 address or the /48 of an IPv6 address and
/// zeroes the host part. The address family never changes.
pub fn anonymize_ip(ip: &mut IpAddr) {
    match ip {
        IpAddr::V4(ipv4) => {
            let [a, b, _, _] = ipv4.octets();
            *ipv4 = Ipv4Addr::new(a, b, 0, 0);
        }
        IpAddr::V6(ipv6) => {
            let mut octets = ipv6.octets();
            octets[6..].fill(0);
            *ipv6 = Ipv6Addr::from(octets);
        }
    }
}
