use crate::{
    error::LogoError,
    gradient::{colorize_block, colorize_line, is_blank, Gradient},
};
use itertools::Itertools;
use std::str::FromStr;

/// The axis a gradient is laid along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RenderMode {
    /// One sweep from the top row to the bottom one.
    #[default]
    Vertical,

    /// The same left-to-right sweep on every line.
    Horizontal,

    /// A left-to-right sweep whose stops rotate as lines go down.
    Diagonal,
}

impl RenderMode {
    /// Parse a mode, falling back to [RenderMode::Vertical] for anything unrecognized.
    pub fn parse_lenient(name: &str) -> Self {
        match Self::from_str(name) {
            Ok(mode) => mode,
            Err(_) => {
                tracing::debug!("unknown render mode '{name}', falling back to vertical");
                Self::Vertical
            }
        }
    }

    /// Parse a mode, rejecting anything unrecognized.
    pub fn parse_strict(name: &str) -> Result<Self, LogoError> {
        Self::from_str(name).map_err(|_| LogoError::InvalidMode(name.to_string()))
    }
}

/// Paint a glyph block according to `mode`.
pub fn compose(block: &str, gradient: &Gradient, mode: RenderMode) -> String {
    match mode {
        RenderMode::Vertical => colorize_block(block, gradient),
        RenderMode::Horizontal => block.split('\n').map(|line| colorize_line(line, gradient)).join("\n"),
        RenderMode::Diagonal => compose_diagonal(block, gradient),
    }
}

fn compose_diagonal(block: &str, gradient: &Gradient) -> String {
    let line_count = block.split('\n').count();
    block
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if is_blank(line) {
                return line.to_string();
            }
            colorize_line(line, &gradient.rotated(index, line_count))
        })
        .join("\n")
}
