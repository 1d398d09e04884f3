//! Text map loader.
//!
//! # Format
//!
//! A flat stream of whitespace-separated numbers:
//!
//! ```text
//! <height> <width>
//! <obstacle count>
//! <vertex count>  (x, y) (x, y) ...     ← repeated once per obstacle
//! ```
//!
//! Parentheses and commas are treated as whitespace, so `(1.5, 2)` and
//! `1.5 2` are equivalent.  Line breaks carry no meaning.  Each obstacle's
//! vertices must be listed in a consistent winding order; the loader
//! validates them through [`Obstacle::new`].
//!
//! ```text
//! 10 10
//! 2
//! 4  (2, 2) (4, 2) (4, 4) (2, 4)
//! 3  (-5, 0) (-3, 0) (-4, 2)
//! ```

use std::io::Read;
use std::path::Path;

use rrt_core::Point;

use crate::{Map, MapError, MapResult, Obstacle};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Map`] from a file, expanding obstacles by `robot_radius`.
pub fn load_map(path: &Path, robot_radius: f64) -> MapResult<Map> {
    let file = std::fs::File::open(path).map_err(MapError::Io)?;
    load_map_reader(file, robot_radius)
}

/// Like [`load_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for maps embedded as
/// string constants.
pub fn load_map_reader<R: Read>(mut reader: R, robot_radius: f64) -> MapResult<Map> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = Tokens::new(&text);

    let height = tokens.next_f64("map height")?;
    let width = tokens.next_f64("map width")?;
    if !(width > 0.0 && height > 0.0) {
        return Err(MapError::Parse(format!(
            "map dimensions must be positive, got width {width} and height {height}"
        )));
    }

    let count = tokens.next_usize("obstacle count")?;
    let mut obstacles = Vec::with_capacity(count.min(4_096));

    for index in 0..count {
        let vertex_count = tokens.next_usize("vertex count")?;
        let vertices = (0..vertex_count)
            .map(|_| {
                let x = tokens.next_f64("vertex x")?;
                let y = tokens.next_f64("vertex y")?;
                Ok(Point::new(x, y))
            })
            .collect::<MapResult<Vec<Point>>>()?;

        let obstacle = Obstacle::new(vertices)
            .map_err(|source| MapError::InvalidObstacle { index, source })?;
        obstacles.push(obstacle);
    }

    if let Some((pos, extra)) = tokens.next_raw() {
        return Err(MapError::Parse(format!(
            "unexpected trailing token {extra:?} at token {pos} after {count} obstacles"
        )));
    }

    Ok(Map::new(width, height, robot_radius, obstacles))
}

// ── Tokenizer ─────────────────────────────────────────────────────────────────

/// Token stream over the map text; positions are 0-based token indices.
struct Tokens<'a> {
    tokens: Vec<&'a str>,
    pos:    usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let tokens = text
            .split(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | ','))
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens, pos: 0 }
    }

    fn next_raw(&mut self) -> Option<(usize, &'a str)> {
        let tok = *self.tokens.get(self.pos)?;
        self.pos += 1;
        Some((self.pos - 1, tok))
    }

    fn next_token(&mut self, what: &str) -> MapResult<(usize, &'a str)> {
        self.next_raw()
            .ok_or_else(|| MapError::Parse(format!("unexpected end of input, expected {what}")))
    }

    fn next_f64(&mut self, what: &str) -> MapResult<f64> {
        let (pos, tok) = self.next_token(what)?;
        tok.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| MapError::Parse(format!("invalid {what} {tok:?} at token {pos}")))
    }

    fn next_usize(&mut self, what: &str) -> MapResult<usize> {
        let (pos, tok) = self.next_token(what)?;
        tok.parse::<usize>()
            .map_err(|_| MapError::Parse(format!("invalid {what} {tok:?} at token {pos}")))
    }
}
