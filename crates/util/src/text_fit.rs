//! Text fitting to a pixel width.
//!
//! The truncation loop measures the rendered width of the working string and,
//! while it is at or above the limit, removes the last four characters and
//! appends an ellipsis. Measurement goes through the [`Measure`] trait: the
//! default implementation is a pure approximation over unicode display width,
//! and [`PageScratchMeasure`] measures against a scratch page element that is
//! guaranteed to be removed on every exit path, including measurement errors.

use crate::ident::guid;
use pagekit_types::{Element, SharedPage, lock};

/// Default font size, in pixels, when the caller does not supply one.
pub const DEFAULT_FONT_SIZE: u16 = 15;

const ELLIPSIS: &str = "...";

/// Measures the rendered width of text at a font size.
pub trait Measure {
    /// Rendered width of `text` in pixels at `font_size`.
    fn text_width(&mut self, text: &str, font_size: u16) -> anyhow::Result<f64>;
}

/// Pure width approximation: unicode display cells scaled by the font size.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayWidthMeasure;

/// Average glyph advance per display cell, as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.5;

impl Measure for DisplayWidthMeasure {
    fn text_width(&mut self, text: &str, font_size: u16) -> anyhow::Result<f64> {
        let cells = unicode_width::UnicodeWidthStr::width(text) as f64;
        Ok(cells * f64::from(font_size) * GLYPH_ADVANCE)
    }
}

/// Measures through a scratch element inserted into a page.
///
/// Each measurement inserts a hidden element, delegates to the inner measure,
/// and removes the element again. Removal is handled by a drop guard, so the
/// page is left clean even when the inner measurement fails.
pub struct PageScratchMeasure {
    page: SharedPage,
    inner: Box<dyn Measure + Send>,
}

impl PageScratchMeasure {
    pub fn new(page: SharedPage) -> Self {
        Self {
            page,
            inner: Box::new(DisplayWidthMeasure),
        }
    }

    /// Use a custom inner measure, e.g. one backed by a real font renderer.
    pub fn with_inner(page: SharedPage, inner: Box<dyn Measure + Send>) -> Self {
        Self { page, inner }
    }
}

struct ScratchElement {
    page: SharedPage,
    id: String,
}

impl ScratchElement {
    fn insert(page: &SharedPage, text: &str) -> Self {
        let id = format!("measure-{}", guid());
        let mut element = Element::new(id.clone()).with_data("text", text);
        element.visible = false;
        lock(page).insert(element);
        Self {
            page: page.clone(),
            id,
        }
    }
}

impl Drop for ScratchElement {
    fn drop(&mut self) {
        lock(&self.page).remove(&self.id);
    }
}

impl Measure for PageScratchMeasure {
    fn text_width(&mut self, text: &str, font_size: u16) -> anyhow::Result<f64> {
        let _scratch = ScratchElement::insert(&self.page, text);
        self.inner.text_width(text, font_size)
    }
}

/// Fit text to a pixel width at the default font size.
///
/// Returns the input unchanged when it already fits. On the (unreachable with
/// the default measure) error path, the input is returned unmodified.
pub fn fit_text_to_width(text: &str, max_width: f64) -> String {
    fit_text_to_width_sized(text, max_width, DEFAULT_FONT_SIZE)
}

/// Fit text to a pixel width at an explicit font size.
pub fn fit_text_to_width_sized(text: &str, max_width: f64, font_size: u16) -> String {
    fit_text_with(&mut DisplayWidthMeasure, text, max_width, font_size)
        .unwrap_or_else(|_| text.to_string())
}

/// Fit text to a pixel width using a caller-supplied measure.
///
/// While the measured width is at or above the limit, the last four
/// characters are removed and an ellipsis appended. The loop stops once the
/// string stops shrinking, so a limit smaller than the ellipsis itself
/// terminates instead of spinning.
pub fn fit_text_with(
    measure: &mut dyn Measure,
    text: &str,
    max_width: f64,
    font_size: u16,
) -> anyhow::Result<String> {
    let mut current = text.to_string();

    while measure.text_width(&current, font_size)? >= max_width {
        let characters: Vec<char> = current.chars().collect();
        if characters.is_empty() {
            break;
        }
        let keep = characters.len().saturating_sub(ELLIPSIS.len() + 1);
        let mut next: String = characters[..keep].iter().collect();
        next.push_str(ELLIPSIS);
        if next == current {
            break;
        }
        current = next;
    }

    Ok(current)
}
