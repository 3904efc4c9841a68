#![cfg(test)]
use std::net::{Ipv4Addr, Ipv6Addr};

use addrcheck_core::{Config, validate_ipv4, validate_ipv4_with, validate_ipv6, validate_ipv6_with};
use proptest::prelude::*;

/// Four non-empty all-digit segments, each fitting a `u8`, within the length cap.
fn ipv4_model(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    s.len() <= addrcheck_core::ipv4::MAX_LEN
        && parts.len() == 4
        && parts.iter().all(|part| {
            !part.is_empty()
                && part.bytes().all(|b| b.is_ascii_digit())
                && part.parse::<u8>().is_ok()
        })
}

fn join_groups(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|group| format!("{group:x}"))
        .collect::<Vec<String>>()
        .join(":")
}

fn compress_at(groups: &[u16], split: usize) -> String {
    format!("{}::{}", join_groups(&groups[..split]), join_groups(&groups[split..]))
}

proptest! {
    /*************************************************************
                             IPv4
    **************************************************************/

    #[test]
    fn ipv4_every_dotted_quad_accepted(a: u8, b: u8, c: u8, d: u8) {
        let text = format!("{a}.{b}.{c}.{d}");
        prop_assert!(validate_ipv4(text.as_str()));
        prop_assert!(validate_ipv4_with(text.as_str(), &Config::strict()));
        prop_assert_eq!(text.parse::<Ipv4Addr>(), Ok(Ipv4Addr::new(a, b, c, d)));
    }

    #[test]
    fn ipv4_padding_follows_policy(a: u8, b: u8, c: u8, d: u8) {
        let text = format!("{a:03}.{b:03}.{c:03}.{d:03}");
        let padded = [a, b, c, d].iter().any(|octet| *octet < 100);

        prop_assert!(validate_ipv4(text.as_str()));
        prop_assert_eq!(validate_ipv4_with(text.as_str(), &Config::strict()), !padded);
    }

    #[test]
    fn ipv4_matches_model(text in "[0-9.]{0,20}") {
        prop_assert_eq!(validate_ipv4(text.as_str()), ipv4_model(&text));
    }

    #[test]
    fn ipv4_out_of_range_octet_rejected(octet in 256u32..100_000, position in 0usize..4) {
        let mut octets = vec![String::from("1"); 4];
        octets[position] = octet.to_string();
        prop_assert!(!validate_ipv4(octets.join(".").as_str()));
    }

    /*************************************************************
                             IPv6
    **************************************************************/

    #[test]
    fn ipv6_std_display_accepted(bits: u128) {
        let text = Ipv6Addr::from(bits).to_string();
        prop_assert!(validate_ipv6(text.as_str()), "{}", text);
    }

    #[test]
    fn ipv6_full_form_accepted(groups in prop::array::uniform8(any::<u16>())) {
        let short = join_groups(&groups);
        let padded = groups
            .iter()
            .map(|group| format!("{group:04X}"))
            .collect::<Vec<String>>()
            .join(":");

        prop_assert!(validate_ipv6(short.as_str()));
        prop_assert!(validate_ipv6(padded.as_str()));
    }

    #[test]
    fn ipv6_nine_groups_rejected(groups in prop::collection::vec(any::<u16>(), 9)) {
        prop_assert!(!validate_ipv6(join_groups(&groups).as_str()));
    }

    #[test]
    fn ipv6_compression_with_eight_groups_rejected(
        groups in prop::array::uniform8(any::<u16>()),
        split in 0usize..=8,
    ) {
        prop_assert!(!validate_ipv6(compress_at(&groups, split).as_str()));
    }

    #[test]
    fn ipv6_compression_with_fewer_groups_accepted(
        (groups, split) in prop::collection::vec(any::<u16>(), 0..8)
            .prop_flat_map(|groups| {
                let len = groups.len();
                (Just(groups), 0..=len)
            }),
    ) {
        let text = compress_at(&groups, split);
        prop_assert!(validate_ipv6(text.as_str()), "{}", text);
    }

    #[test]
    fn ipv6_triple_colon_rejected(head in "[0-9a-f:]{0,10}", tail in "[0-9a-f:]{0,10}") {
        let text = format!("{head}:::{tail}");
        prop_assert!(!validate_ipv6(text.as_str()), "{}", text);
    }

    #[test]
    fn ipv6_embedded_ipv4_counts_two_groups(
        groups in prop::collection::vec(any::<u16>(), 6),
        quad in any::<[u8; 4]>(),
    ) {
        let ipv4 = Ipv4Addr::from(quad);
        let full = format!("{}:{ipv4}", join_groups(&groups));
        let mapped = format!("::ffff:{ipv4}");
        let crowded = format!("{}:1:{ipv4}", join_groups(&groups));

        prop_assert!(validate_ipv6(full.as_str()));
        prop_assert!(validate_ipv6(mapped.as_str()));
        prop_assert!(!validate_ipv6(crowded.as_str()));
    }

    /*************************************************************
                             Both
    **************************************************************/

    #[test]
    fn verdicts_are_repeatable(text in any::<String>()) {
        prop_assert_eq!(validate_ipv4(text.as_str()), validate_ipv4(text.as_str()));
        prop_assert_eq!(validate_ipv6(text.as_str()), validate_ipv6(text.as_str()));
        prop_assert_eq!(
            validate_ipv6_with(text.as_str(), &Config::strict()),
            validate_ipv6_with(text.as_str(), &Config::strict())
        );
    }

    #[test]
    fn non_ascii_rejected(head in "[0-9a-f.:]{0,8}", odd in "[^\\x00-\\x7F]", tail in "[0-9a-f.:]{0,8}") {
        let text = format!("{head}{odd}{tail}");
        prop_assert!(!validate_ipv4(text.as_str()));
        prop_assert!(!validate_ipv6(text.as_str()));
    }
}
