//! Derivation of provider-facing record names from user-supplied hostnames.

/// Determine the DNS record name for a hostname within a zone.
///
/// Trailing dots are stripped, and unless `relative` is set, a literal
/// `zone` suffix is stripped as well (the suffix check runs on the
/// dot-trimmed hostname, so `sub.example.com.` with zone `example.com`
/// yields `sub`). An empty result maps to `@`, the zone apex.
///
/// Total over all string inputs; no normalization beyond the above.
pub fn record_name(hostname: &str, zone: &str, relative: bool) -> String {
    let mut name = hostname.trim_end_matches('.');
    if !relative {
        name = name.strip_suffix(zone).unwrap_or(name);
        name = name.trim_end_matches('.');
    }

    if name.is_empty() {
        return "@".to_string();
    }

    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::record_name;

    const ZONE: &str = "example.com";

    #[test]
    fn apex_forms_resolve_to_at() {
        for hostname in ["", "@", "example.com", "example.com."] {
            assert_eq!(record_name(hostname, ZONE, false), "@", "hostname {hostname:?}");
        }
        assert_eq!(record_name("", ZONE, true), "@");
        assert_eq!(record_name("@", ZONE, true), "@");
    }

    #[test]
    fn subdomain_forms() {
        assert_eq!(record_name("sub.example.com", ZONE, false), "sub");
        assert_eq!(record_name("sub.example.com.", ZONE, false), "sub");
        assert_eq!(record_name("sub", ZONE, false), "sub");
        assert_eq!(record_name("sub.", ZONE, false), "sub");
    }

    #[test]
    fn relative_mode_never_strips_the_zone() {
        assert_eq!(record_name("example.com", ZONE, true), "example.com");
        assert_eq!(record_name("example.com.", ZONE, true), "example.com");
        assert_eq!(record_name("sub.example.com", ZONE, true), "sub.example.com");
        assert_eq!(record_name("sub.example.com.", ZONE, true), "sub.example.com");
        assert_eq!(record_name("sub", ZONE, true), "sub");
        assert_eq!(record_name("sub.", ZONE, true), "sub");
    }

    #[test]
    fn resolution_is_idempotent() {
        for hostname in ["", "@", "example.com", "sub.example.com.", "sub"] {
            for relative in [false, true] {
                let once = record_name(hostname, ZONE, relative);
                assert_eq!(record_name(&once, ZONE, relative), once);
            }
        }
    }

    #[test]
    fn suffix_strip_is_literal() {
        // No label-boundary check.
        assert_eq!(record_name("subexample.com", ZONE, false), "sub");
    }
}
