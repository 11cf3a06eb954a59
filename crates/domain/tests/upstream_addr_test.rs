use relay_dns_domain::UpstreamAddr;

#[test]
fn test_parse_ipv4() {
    let addr: UpstreamAddr = "8.8.8.8:53".parse().unwrap();
    assert_eq!(addr.socket_addr(), Some("8.8.8.8:53".parse().unwrap()));
    assert_eq!(addr.unresolved_parts(), None);
}

#[test]
fn test_parse_udp_prefix() {
    let addr: UpstreamAddr = "udp://1.1.1.1:53".parse().unwrap();
    assert!(matches!(addr, UpstreamAddr::Resolved(a) if a.port() == 53));
}

#[test]
fn test_parse_ipv6() {
    let addr: UpstreamAddr = "[2001:4860:4860::8888]:53".parse().unwrap();
    assert!(matches!(addr, UpstreamAddr::Resolved(a) if a.is_ipv6()));
}

#[test]
fn test_parse_hostname() {
    let addr: UpstreamAddr = "dns.google:53".parse().unwrap();
    assert_eq!(addr.unresolved_parts(), Some(("dns.google", 53)));
    assert_eq!(addr.to_string(), "dns.google:53");
}

#[test]
fn test_parse_rejects_missing_port() {
    assert!("8.8.8.8".parse::<UpstreamAddr>().is_err());
    assert!("dns.google".parse::<UpstreamAddr>().is_err());
    assert!(":53".parse::<UpstreamAddr>().is_err());
    assert!("dns.google:99999".parse::<UpstreamAddr>().is_err());
}

#[test]
fn test_display_resolved() {
    let addr: UpstreamAddr = "127.0.0.1:5300".parse().unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:5300");
}
