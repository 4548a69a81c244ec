use hostdash::ui::{byte_format, format_bytes, PLACEHOLDER};

#[test]
fn test_absent_values_render_the_placeholder() {
    assert_eq!(byte_format(None), PLACEHOLDER);
}

#[test]
fn test_card_formatter_tier_selection() {
    // Unit chosen so the scaled value lands in [1, 1024)
    assert_eq!(byte_format(Some(0)), "0 B");
    assert_eq!(byte_format(Some(1023)), "1023 B");
    assert_eq!(byte_format(Some(1024)), "1.00 KB");
    assert_eq!(byte_format(Some(1024 * 1024)), "1.00 MB");
    assert_eq!(byte_format(Some(1_073_741_824)), "1.00 GB");
    assert_eq!(byte_format(Some(1024_u64.pow(4))), "1.00 TB");
    // Beyond TB the unit clamps instead of expanding
    assert_eq!(byte_format(Some(1024_u64.pow(5))), "1024.00 TB");
}

#[test]
fn test_the_two_formatters_are_distinct_contracts() {
    // Card formatter: no decimals at the byte tier
    assert_eq!(byte_format(Some(512)), "512 B");
    assert_eq!(byte_format(Some(1536)), "1.50 KB");

    // General formatter: caller decimals everywhere, zero special-cased,
    // trailing zeros trimmed
    assert_eq!(format_bytes(0.0, 2), "0 Bytes");
    assert_eq!(format_bytes(512.0, 2), "512 Bytes");
    assert_eq!(format_bytes(1536.0, 1), "1.5 KB");
    assert_eq!(format_bytes(1536.0, 2), "1.5 KB");
}

#[test]
fn test_general_formatter_goes_past_terabytes() {
    let pb = 1024_f64.powi(5);
    assert_eq!(format_bytes(pb, 2), "1 PB");
    assert_eq!(format_bytes(3.0 * 1024_f64.powi(6), 2), "3 EB");
}
