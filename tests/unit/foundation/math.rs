use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 128), 64);
    assert_eq!(mul_div255_u8(255, 60), 60);
}

#[test]
fn lerp_u8_hits_endpoints_and_clamps() {
    assert_eq!(lerp_u8(0x21, 0x0D, 0.0), 0x21);
    assert_eq!(lerp_u8(0x21, 0x0D, 1.0), 0x0D);
    assert_eq!(lerp_u8(0, 200, 0.5), 100);
    assert_eq!(lerp_u8(10, 20, -3.0), 10);
    assert_eq!(lerp_u8(10, 20, 7.0), 20);
}

#[test]
fn add_sat_u8_saturates() {
    assert_eq!(add_sat_u8(200, 100), 255);
    assert_eq!(add_sat_u8(1, 2), 3);
}
