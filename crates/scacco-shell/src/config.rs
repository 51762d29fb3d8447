//! Shell configuration.

/// How pieces are drawn by the text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    /// FEN letters: uppercase White, lowercase Black.
    #[default]
    Ascii,
    /// Unicode chess symbols.
    Unicode,
}

/// Knobs for the presentation shell, set once at startup.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Virtual window width in pixels.
    pub width: u32,
    /// Virtual window height in pixels.
    pub height: u32,
    /// Piece glyph style.
    pub glyphs: Glyphs,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            glyphs: Glyphs::Ascii,
        }
    }
}
