use super::*;
use crate::text::metrics::{FixedAdvanceMetrics, FontFamily};

fn painter(m: &FixedAdvanceMetrics) -> Painter<'_> {
    Painter::new(m, FontSpec::new(FontFamily::Matrix, 20.0))
}

#[test]
fn stroke_pass_follows_fill() {
    let m = FixedAdvanceMetrics;
    let mut p = painter(&m);
    p.set_stroke(Some(TextStroke {
        color: Rgba8::WHITE,
        width: 2.0,
    }));
    p.fill_text("Abc", 10.0, 20.0);
    let list = p.finish();
    let runs: Vec<_> = list.texts().collect();
    assert_eq!(runs.len(), 2);
    assert!(matches!(runs[0].paint, TextPaint::Fill(_)));
    assert!(matches!(runs[1].paint, TextPaint::Stroke(_)));
    assert_eq!(runs[0].origin, runs[1].origin);
}

#[test]
fn save_restore_and_truncate() {
    let m = FixedAdvanceMetrics;
    let mut p = painter(&m);
    p.save();
    p.set_scale(0.5, 1.0);
    p.fill_text("x", 0.0, 0.0);
    p.restore();
    let mark = p.mark();
    p.fill_text("y", 0.0, 0.0);
    p.truncate(mark);
    p.fill_text("", 0.0, 0.0);
    let list = p.finish();
    assert_eq!(list.ops.len(), 1);
    assert_eq!(list.texts().next().map(|t| t.scale.x), Some(0.5));
}

#[test]
fn right_of_placement_uses_drawn_width() {
    let d = ImageDraw {
        image: ImageRef::Asset("icon.png".into()),
        x: ImageX::RightOf {
            edge: 100.0,
            gap: 5.0,
        },
        y: 3.0,
        size: None,
    };
    let (pos, size) = d.resolve(Vec2::new(20.0, 10.0));
    assert_eq!(pos, Point::new(75.0, 3.0));
    assert_eq!(size, Vec2::new(20.0, 10.0));
}

#[test]
fn image_refs_are_deduplicated() {
    let m = FixedAdvanceMetrics;
    let mut p = painter(&m);
    p.draw_image(ImageDraw::at(ImageRef::Artwork, 0.0, 0.0));
    p.draw_image(ImageDraw::at(ImageRef::Asset("a.png".into()), 0.0, 0.0));
    p.draw_image(ImageDraw::at(ImageRef::Artwork, 1.0, 1.0));
    assert_eq!(
        p.finish().image_refs(),
        vec![ImageRef::Artwork, ImageRef::Asset("a.png".into())]
    );
}
