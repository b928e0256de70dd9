use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_png(
    filename: impl AsRef<Path>,
    color_type: png::ColorType,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    write_png_with(
        filename,
        color_type,
        png::BitDepth::Eight,
        width,
        height,
        data,
        None,
        None,
    )
}

/// `data` is packed as PNG stores it: sub-byte samples share a byte,
/// 16-bit samples are big endian.
pub fn write_png_with(
    filename: impl AsRef<Path>,
    color_type: png::ColorType,
    depth: png::BitDepth,
    width: u32,
    height: u32,
    data: &[u8],
    palette: Option<&[u8]>,
    trns: Option<&[u8]>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(filename)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(depth);
    if let Some(palette) = palette {
        encoder.set_palette(palette.to_vec());
    }
    if let Some(trns) = trns {
        encoder.set_trns(trns.to_vec());
    }
    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;
    writer.finish()?;

    Ok(())
}

/// Inverse of `write_literal`, for checking emitted text.
pub fn parse_literal(text: &str) -> (String, usize, Vec<(u8, u8, u8)>) {
    let mut lines = text.split('\n');

    let header = lines.next().unwrap();
    let header = header.strip_prefix("pub const ").unwrap();
    let (name, rest) = header.split_at(header.find(':').unwrap());
    let len = rest
        .strip_prefix(":[(u8,u8,u8);")
        .and_then(|r| r.strip_suffix("] = ["))
        .unwrap()
        .parse()
        .unwrap();

    let mut pixels = vec![];
    for line in lines {
        if line == "];" {
            break;
        }
        let inner = line
            .strip_prefix('(')
            .and_then(|l| l.strip_suffix("),"))
            .unwrap();
        let c: Vec<u8> = inner.split(',').map(|x| x.parse().unwrap()).collect();
        assert_eq!(c.len(), 3);
        pixels.push((c[0], c[1], c[2]));
    }

    (name.to_owned(), len, pixels)
}
