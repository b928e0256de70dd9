use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_IMAGE: &str = "Game_Boy_Camera_Pokémon_sticker.png";
pub const DEFAULT_OUTPUT: &str = "src/image.rs";
pub const DEFAULT_NAME: &str = "IMAGE";

/// 160x144, the Game Boy screen
pub const DEFAULT_LEN: usize = 160 * 144;

/// Component order of the emitted triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// As decoded, no reordering
    Rgb,
    /// First and last component swapped. Matches files made by decoders
    /// that hand out BGR pixels.
    Bgr,
}

impl Default for ChannelOrder {
    fn default() -> ChannelOrder {
        ChannelOrder::Rgb
    }
}

impl FromStr for ChannelOrder {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<ChannelOrder, &'static str> {
        match s {
            "rgb" => Ok(ChannelOrder::Rgb),
            "bgr" => Ok(ChannelOrder::Bgr),
            _ => Err("channel order must be 'rgb' or 'bgr'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Image to read. Defaults to a path under the project root, not the
    /// working directory.
    pub input: PathBuf,

    /// File to write, relative to the working directory
    pub output: PathBuf,

    pub const_name: String,

    /// Array length written in the header. Must equal the pixel count.
    pub declared_len: usize,

    pub channel_order: ChannelOrder,
}

impl Default for ExportConfig {
    fn default() -> ExportConfig {
        ExportConfig {
            input: Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("images")
                .join(DEFAULT_IMAGE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            const_name: DEFAULT_NAME.to_owned(),
            declared_len: DEFAULT_LEN,
            channel_order: ChannelOrder::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_length_is_game_boy_screen() {
        assert_eq!(ExportConfig::default().declared_len, 23040);
    }

    #[test]
    fn default_input_is_under_project_images() {
        let config = ExportConfig::default();
        assert!(config.input.ends_with(Path::new("images").join(DEFAULT_IMAGE)));
        assert!(config.input.is_absolute());
    }

    #[test]
    fn default_output_is_relative() {
        assert_eq!(ExportConfig::default().output, Path::new("src/image.rs"));
    }

    #[test]
    fn parse_channel_order() {
        assert_eq!("rgb".parse(), Ok(ChannelOrder::Rgb));
        assert_eq!("bgr".parse(), Ok(ChannelOrder::Bgr));
        assert!("grb".parse::<ChannelOrder>().is_err());
    }
}
