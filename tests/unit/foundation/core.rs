use super::*;

#[test]
fn scaled_canvas_rounds_and_rejects_bad_scale() {
    let c = DESIGN_CANVAS.scaled(0.5).unwrap();
    assert_eq!(c, Canvas { width: 407, height: 593 });
    assert!(DESIGN_CANVAS.scaled(0.0).is_err());
    assert!(DESIGN_CANVAS.scaled(f64::NAN).is_err());
    assert!(DESIGN_CANVAS.scaled(100.0).is_err());
}

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(Rgba8::from_hex("#ffffff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::from_hex("#10203040").unwrap(),
        Rgba8 {
            r: 0x10,
            g: 0x20,
            b: 0x30,
            a: 0x40
        }
    );
    assert!(Rgba8::from_hex("fff").is_err());
    assert!(Rgba8::from_hex("#ggg000").is_err());
}

#[test]
fn premultiply_scales_channels_by_alpha() {
    let p = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
