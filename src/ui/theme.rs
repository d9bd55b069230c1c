use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LABEL_TEXT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const INPUT_BORDER: Color = Color::Rgb(0x4b, 0x55, 0x63);
pub const SLIDER_TRACK: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_BUSY: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
