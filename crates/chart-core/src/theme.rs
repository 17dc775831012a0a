// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark color presets for bar chart rendering.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    /// Fill behind the grid.
    pub plot_background: Rgba,
    /// Light gridlines between steps and columns.
    pub grid: Rgba,
    /// Dark baselines (the axes themselves).
    pub axis_line: Rgba,
    pub arrow: Rgba,
    pub axis_label: Rgba,
    pub tick_label: Rgba,
    pub bar: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(238, 238, 238),
            plot_background: Rgba::rgb(255, 255, 255),
            grid: Rgba::rgb(210, 210, 215),
            axis_line: Rgba::rgb(40, 40, 45),
            arrow: Rgba::rgb(40, 40, 45),
            axis_label: Rgba::rgb(20, 20, 30),
            tick_label: Rgba::rgb(80, 80, 90),
            bar: Rgba::rgb(32, 120, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            plot_background: Rgba::rgb(28, 28, 32),
            grid: Rgba::rgb(48, 48, 54),
            axis_line: Rgba::rgb(180, 180, 190),
            arrow: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick_label: Rgba::rgb(150, 150, 160),
            bar: Rgba::rgb(64, 160, 255),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            plot_background: Rgba::rgb(0x00, 0x2b, 0x36),
            grid: Rgba::rgb(0x07, 0x36, 0x42),       // base02
            axis_line: Rgba::rgb(0x93, 0xa1, 0xa1),  // base1
            arrow: Rgba::rgb(0x93, 0xa1, 0xa1),
            axis_label: Rgba::rgb(0xee, 0xe8, 0xd5), // base2
            tick_label: Rgba::rgb(0x83, 0x94, 0x96), // base0
            bar: Rgba::rgb(0x26, 0x8b, 0xd2),        // blue
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            plot_background: Rgba::rgb(0xfd, 0xf6, 0xe3),
            grid: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
            axis_line: Rgba::rgb(0x65, 0x7b, 0x83),  // base00
            arrow: Rgba::rgb(0x65, 0x7b, 0x83),
            axis_label: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            tick_label: Rgba::rgb(0x58, 0x6e, 0x75), // base01
            bar: Rgba::rgb(0x2a, 0xa1, 0x98),        // cyan
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
