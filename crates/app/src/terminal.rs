//! Terminal rendering of the character screen.
//!
//! The card goes to one writer (stdout), notices to another (stderr).
//! Write failures are logged and otherwise ignored: a broken pipe must
//! not take the controller down.

use std::io::{self, Stderr, Stdout, Write};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use rickview_client::Avatar;
use rickview_core::{CharacterView, Notice, StatusTone};

use crate::view::View;

/// Width of the label column.
const LABEL_WIDTH: usize = 10;

/// Columns used for the avatar sketch.
const AVATAR_COLUMNS: u32 = 32;

/// Characters from empty to dense, by brightness.
const RAMP: &[u8] = b" .:-=+*#%@";

const ANSI_RESET: &str = "\x1b[0m";

/// [`View`] that prints to a terminal.
pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
}

impl TerminalView<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr(), true)
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_out(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<O: Write, E: Write> View for TerminalView<O, E> {
    fn render(&mut self, character: &CharacterView) {
        let card = format_card(character, self.color);
        self.write_out(&card);
    }

    fn set_avatar(&mut self, avatar: &Avatar) {
        let mut sketch = ascii_art(&avatar.image, AVATAR_COLUMNS).join("\n");
        sketch.push('\n');
        self.write_out(&sketch);
    }

    fn show_notice(&mut self, notice: &Notice) {
        if let Err(e) = writeln!(self.err, "! {notice}") {
            tracing::warn!(error = %e, "Failed to write notice");
        }
    }
}

/// Lay out a character as a labelled card.
pub fn format_card(character: &CharacterView, color: bool) -> String {
    let status = if color {
        format!(
            "{}{}{ANSI_RESET}",
            tone_code(character.status.tone),
            character.status.label
        )
    } else {
        character.status.label.to_string()
    };

    let mut card = format!("\n#{} {}\n", character.id, character.name);
    for (label, value) in [
        ("Status", status.as_str()),
        ("Gender", character.gender.as_str()),
        ("Species", character.species.as_str()),
        ("Location", character.location.as_str()),
        ("Episodes", character.episodes.as_str()),
    ] {
        card.push_str(&field(label, value));
    }
    card.push_str("\n[Enter] another character  [q] quit\n");
    card
}

fn field(label: &str, value: &str) -> String {
    let mut lines = value.split('\n');
    let first = lines.next().unwrap_or_default();
    let mut out = format!("{label:<width$}{first}\n", width = LABEL_WIDTH);
    for line in lines {
        out.push_str(&format!("{:width$}{line}\n", "", width = LABEL_WIDTH));
    }
    out
}

fn tone_code(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Green => "\x1b[32m",
        StatusTone::Red => "\x1b[31m",
        StatusTone::Gray => "\x1b[90m",
    }
}

/// Downscale an image to `columns` characters wide. Terminal cells are
/// roughly twice as tall as wide, so rows are halved. Transparent
/// pixels print as blanks.
pub fn ascii_art(image: &RgbaImage, columns: u32) -> Vec<String> {
    if image.width() == 0 || image.height() == 0 || columns == 0 {
        return Vec::new();
    }
    let rows = ((columns as u64 * image.height() as u64) / (image.width() as u64 * 2)).max(1) as u32;
    let small = imageops::resize(image, columns, rows, FilterType::Nearest);

    small
        .rows()
        .map(|row| {
            let line: String = row
                .map(|pixel| {
                    let [r, g, b, a] = pixel.0;
                    if a < 128 {
                        return ' ';
                    }
                    let luma = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
                    let idx = (luma * (RAMP.len() - 1) as f64).round() as usize;
                    RAMP[idx.min(RAMP.len() - 1)] as char
                })
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
