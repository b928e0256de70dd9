use std::io::{self, Write};

use crate::raster::Pixel;

/// Write `pixels` as a Rust constant:
///
/// ```text
/// pub const IMAGE:[(u8,u8,u8);23040] = [
/// (c0,c1,c2),
/// ...
/// ];
/// ```
///
/// `declared_len` goes into the header verbatim. The closing `];` has no
/// trailing newline.
pub fn write_literal(
    mut w: impl Write,
    name: &str,
    declared_len: usize,
    pixels: &[Pixel],
) -> io::Result<()> {
    write!(w, "pub const {}:[(u8,u8,u8);{}] = [\n", name, declared_len)?;
    for (c0, c1, c2) in pixels {
        write!(w, "({},{},{}),\n", c0, c1, c2)?;
    }
    write!(w, "];")?;

    Ok(())
}

pub fn render_literal(name: &str, declared_len: usize, pixels: &[Pixel]) -> String {
    let mut out = vec![];
    write_literal(&mut out, name, declared_len, pixels).expect("Vec<u8> never fails to write");
    String::from_utf8(out).expect("Rendered literal is ASCII")
}
