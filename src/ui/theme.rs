use ratatui::style::Color;

/// Colors for one theme. Both palettes expose the same roles so render
/// code never branches on the theme itself.
pub struct Palette {
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub ok: Color,
    pub error: Color,
    pub highlight: Color,
}

pub const DARK: Palette = Palette {
    border: Color::Rgb(0x40, 0x40, 0x40),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    ok: Color::Rgb(0x22, 0xc5, 0x5e),
    error: Color::Rgb(0xef, 0x44, 0x44),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
};

pub const LIGHT: Palette = Palette {
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x1d, 0x4e, 0xd8),
    ok: Color::Rgb(0x15, 0x80, 0x3d),
    error: Color::Rgb(0xb9, 0x1c, 0x1c),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
