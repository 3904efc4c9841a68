#![cfg(test)]
use addrcheck_core::{Config, validate_ipv4, validate_ipv4_with, validate_ipv6};

/*************************************************************
                       IPv4 scenarios
**************************************************************/

#[test]
fn ipv4_octet_range() {
    assert!(validate_ipv4("255.255.255.255"));
    assert!(!validate_ipv4("256.1.1.1"));
}

#[test]
fn ipv4_octet_count() {
    assert!(!validate_ipv4("192.168.1"));
    assert!(!validate_ipv4("192.168.1.1.1"));
}

#[test]
fn ipv4_overflow_run() {
    assert!(!validate_ipv4("99999999999.1.1.1"));
}

#[test]
fn ipv4_leading_zero_policy() {
    let padded = ["192.001.002.003", "010.020.030.040", "000.000.000.000"];
    for input in padded {
        assert!(validate_ipv4(input), "default policy should accept {input}");
        assert!(
            !validate_ipv4_with(input, &Config::strict()),
            "strict policy should reject {input}"
        );
    }
}

/*************************************************************
                       IPv6 scenarios
**************************************************************/

#[test]
fn ipv6_all_zero_and_loopback() {
    assert!(validate_ipv6("::"));
    assert!(validate_ipv6("::1"));
}

#[test]
fn ipv6_eight_full_groups() {
    assert!(validate_ipv6("2001:0db8:0000:0000:0000:0000:0000:0001"));
}

#[test]
fn ipv6_triple_colon() {
    assert!(!validate_ipv6("2001:db8:::1"));
}

#[test]
fn ipv6_mapped_ipv4() {
    assert!(validate_ipv6("::ffff:192.0.2.128"));
}

#[test]
fn ipv6_nine_groups() {
    assert!(!validate_ipv6("1:2:3:4:5:6:7:8:9"));
}

#[test]
fn ipv6_compression_with_eight_groups() {
    assert!(!validate_ipv6("1:2:3:4:5:6:7:8::"));
    assert!(!validate_ipv6("::1:2:3:4:5:6:7:8"));
    assert!(validate_ipv6("1:2:3:4:5:6:7::"));
}

/*************************************************************
                       Absent input
**************************************************************/

#[test]
fn absent_and_empty_always_fail() {
    assert!(!validate_ipv4(None::<&str>));
    assert!(!validate_ipv6(None::<&str>));
    assert!(!validate_ipv4(""));
    assert!(!validate_ipv6(""));
}
