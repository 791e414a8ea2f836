/// Preview length for narrow viewports
pub const NARROW_PREVIEW_LIMIT: usize = 50;

/// Preview length for wide viewports
pub const WIDE_PREVIEW_LIMIT: usize = 140;

/// Width below which the narrow limit applies
const NARROW_BREAKPOINT: u32 = 700;

/// The viewport width the page is rendered for
///
/// A live page reads the window width at render time; a headless renderer
/// takes it as input instead.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u32,
}

impl Viewport {
    /// Create a viewport with the given width in CSS pixels
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Preview truncation limit for this width
    pub fn preview_limit(&self) -> usize {
        if self.width < NARROW_BREAKPOINT {
            NARROW_PREVIEW_LIMIT
        } else {
            WIDE_PREVIEW_LIMIT
        }
    }

    /// Cut `content` to this viewport's preview length
    ///
    /// Plain prefix cut: no ellipsis, no word-boundary handling. Content
    /// shorter than the limit comes back whole. Counted in characters, not
    /// bytes, so multi-byte content can't be split mid-sequence.
    pub fn truncate_preview<'a>(&self, content: &'a str) -> &'a str {
        let limit = self.preview_limit();
        match content.char_indices().nth(limit) {
            Some((index, _)) => &content[..index],
            None => content,
        }
    }
}
