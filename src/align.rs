use crate::ansi::visible_width;
use itertools::Itertools;
use std::str::FromStr;

/// The viewport width used when the real one can't be determined.
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 80;

/// How lines are positioned inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AlignMode {
    #[default]
    Left,
    Center,
    Right,
}

impl AlignMode {
    /// Parse an alignment, falling back to [AlignMode::Left] for anything unrecognized.
    pub fn parse_lenient(name: &str) -> Self {
        match Self::from_str(name) {
            Ok(mode) => mode,
            Err(_) => {
                tracing::debug!("unknown alignment '{name}', falling back to left");
                Self::Left
            }
        }
    }
}

/// The area a logo is laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: Option<u16>,
}

impl Viewport {
    pub fn new(width: u16) -> Self {
        Self { width: Some(width) }
    }

    /// Query the terminal for its current width.
    pub fn detect() -> Self {
        match crossterm::terminal::size() {
            Ok((columns, _)) if columns > 0 => Self::new(columns),
            Ok(_) => Self::default(),
            Err(e) => {
                tracing::debug!("could not query terminal size, using {DEFAULT_VIEWPORT_WIDTH} columns: {e}");
                Self::default()
            }
        }
    }

    pub fn columns(&self) -> u16 {
        self.width.unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }
}

/// Prepend whatever padding `mode` requires to every line in `block`.
///
/// Padding is computed from each line's visible width so escape sequences embedded in it don't
/// count. Lines are never modified other than by prepending spaces.
pub fn align(block: &str, mode: AlignMode, width: u16) -> String {
    if mode == AlignMode::Left {
        return block.to_string();
    }
    block
        .split('\n')
        .map(|line| {
            let padding = padding_for(visible_width(line), mode, width as usize);
            format!("{}{line}", " ".repeat(padding))
        })
        .join("\n")
}

fn padding_for(visible: usize, mode: AlignMode, width: usize) -> usize {
    let free = width.saturating_sub(visible);
    match mode {
        AlignMode::Left => 0,
        AlignMode::Center => free / 2,
        AlignMode::Right => free,
    }
}
