use super::*;
use crate::foundation::core::Canvas;

fn red_surface() -> Surface {
    Surface::filled(
        Canvas {
            width: 3,
            height: 2,
        },
        [128, 0, 0, 128],
    )
}

#[test]
fn png_holds_straight_alpha() {
    let png = encode_png(&red_surface()).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 128]);
}

#[test]
fn file_sink_writes_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSink::new(dir.path().join("out"));
    sink.save("card.png", b"png").unwrap();
    assert_eq!(std::fs::read(dir.path().join("out/card.png")).unwrap(), b"png");
    assert!(sink.save("../escape.png", b"png").is_err());
}

#[test]
fn memory_sink_records_or_refuses() {
    let sink = InMemorySink::new();
    sink.save("a.png", &[1, 2]).unwrap();
    assert_eq!(sink.saved(), vec![("a.png".to_owned(), vec![1, 2])]);

    let locked = InMemorySink::restricted();
    assert!(matches!(
        locked.save("a.png", &[1]),
        Err(CardError::ExportRestricted(_))
    ));
    assert!(locked.saved().is_empty());
}
