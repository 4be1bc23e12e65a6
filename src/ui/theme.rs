use ratatui::style::Color;

pub const OMNITRIX_GREEN: Color = Color::Rgb(0x00, 0xff, 0x41);
pub const DIM_GREEN: Color = Color::Rgb(0x0b, 0x5d, 0x24);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const FLASH_WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const WARNING_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x0f, 0x2a, 0x17);
