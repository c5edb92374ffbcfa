use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: rgba.repeat((width * height) as usize),
        premultiplied: false,
    }
}

#[test]
fn write_png_creates_nested_dirs_and_round_trips_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.png");
    write_png(&path, solid(3, 2, [10, 20, 30, 255])).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1).0, [10, 20, 30, 255]);
}

#[test]
fn write_png_rejects_bad_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let mut frame = solid(2, 2, [0, 0, 0, 255]);
    frame.data.truncate(4);
    assert!(write_png(&dir.path().join("bad.png"), frame).is_err());
}

#[test]
fn ensure_parent_dir_accepts_bare_file_name() {
    ensure_parent_dir(Path::new("chart.png")).unwrap();
}
