//! SVG output for draw sequences.
//!
//! The document is sized to the viewport in output units, so rasterizing it
//! at 1:1 gives the preview the host asked for. Paint order follows the
//! renderer contract:
//!
//! 1. background
//! 2. plane outline, stroked once
//! 3. each rectangle in sequence order, fill then stroke
//!
//! SVG paints a shape's fill before its stroke, so one `<rect>` per draw
//! command covers step 3.

use std::fmt::Write;

use crate::geometry::Viewport;
use crate::layout::DrawSequence;
use crate::style::RenderStyle;

/// Build an SVG document for `sequence` drawn on `viewport`.
pub fn layout_to_svg(sequence: &DrawSequence, viewport: &Viewport, style: &RenderStyle) -> String {
    let t = &sequence.transform;

    // ## Rust Lesson #14: String building
    //
    // `write!` into a `String` appends formatted text without allocating a
    // temporary per element the way `push_str(&format!(...))` does. Writing
    // to a String cannot fail, so the `fmt::Result` is safe to ignore.
    let mut svg = String::with_capacity(256 + sequence.len() * 80);

    let _ = write!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="100%" height="100%" fill="{bg}"/>
<rect x="{x:.2}" y="{y:.2}" width="{pw:.2}" height="{ph:.2}" fill="none" stroke="{outline}" stroke-width="{ow}"/>
"#,
        w = viewport.width,
        h = viewport.height,
        bg = escape_attr(&style.background),
        x = t.x0,
        y = t.y0,
        pw = t.width(),
        ph = t.height(),
        outline = escape_attr(&style.outline),
        ow = style.outline_width,
    );

    let _ = writeln!(
        svg,
        r#"<g id="{}" fill="{}" stroke="{}" stroke-width="{}">"#,
        sequence.pattern,
        escape_attr(&style.fill),
        escape_attr(&style.stroke),
        style.stroke_width
    );

    for rect in sequence {
        let _ = writeln!(
            svg,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/>"#,
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height()
        );
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
