//! HTML serialization of box trees and outline lines.
//!
//! Output is inert markup: inline styles and `data-*` attributes only, no
//! scripts or event handler attributes. Hosts wire clicks by reading
//! `data-widget-id` (canvas) or `data-outline-id` (outline).

use crate::boxes::{BoxTag, RenderBox, num};
use crate::outline::OutlineLine;
use std::fmt::Write;

pub fn to_html(root: &RenderBox) -> String {
    let mut out = String::with_capacity(1024);
    write_box(&mut out, root);
    out
}

fn write_box(out: &mut String, b: &RenderBox) {
    let tag = match b.tag {
        BoxTag::Div | BoxTag::Placeholder => "div",
        BoxTag::Span | BoxTag::Icon => "span",
        BoxTag::Img => "img",
        BoxTag::Button => "button",
    };

    let _ = write!(out, "<{tag}");
    if let Some(key) = b.key {
        let _ = write!(out, " data-widget-id=\"{}\"", escape_html(key.as_str()));
    }
    if b.selected {
        out.push_str(" data-selected=\"true\"");
    }
    match b.tag {
        BoxTag::Placeholder => out.push_str(" data-placeholder=\"unknown\""),
        BoxTag::Icon => out.push_str(" data-icon=\"true\""),
        _ => {}
    }
    let css = b.style.to_css();
    if !css.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape_html(&css));
    }

    if b.tag == BoxTag::Img {
        let src = b.src.as_deref().unwrap_or_default();
        let alt = b.text.as_deref().unwrap_or_default();
        let _ = write!(
            out,
            " src=\"{}\" alt=\"{}\">",
            escape_html(src),
            escape_html(alt)
        );
        return;
    }
    out.push('>');

    if let Some(glyph) = &b.glyph {
        if b.tag == BoxTag::Icon {
            out.push_str(&escape_html(glyph));
        } else {
            let _ = write!(out, "<span aria-hidden=\"true\">{}</span>", escape_html(glyph));
        }
    }
    if let Some(text) = &b.text {
        out.push_str(&escape_html(text));
    }
    for child in &b.children {
        write_box(out, child);
    }
    let _ = write!(out, "</{tag}>");
}

/// Outline lines as a flat list of rows, indented by padding.
pub fn outline_to_html(lines: &[OutlineLine]) -> String {
    let mut out = String::from("<div class=\"mb-outline\">");
    for line in lines {
        let _ = write!(
            out,
            "<div class=\"mb-outline-row{}\" data-outline-id=\"{}\" data-depth=\"{}\" style=\"padding-left:{}px;\">",
            if line.selected { " selected" } else { "" },
            escape_html(line.id.as_str()),
            line.depth,
            num(line.indent),
        );
        if line.has_children {
            let _ = write!(
                out,
                "<span class=\"mb-chevron{}\" data-toggle=\"{}\">\u{203A}</span>",
                if line.expanded { " open" } else { "" },
                escape_html(line.id.as_str()),
            );
        } else {
            out.push_str("<span class=\"mb-chevron hidden\"></span>");
        }
        let _ = write!(
            out,
            "<span class=\"mb-icon\" data-icon=\"{}\"></span><span class=\"mb-label\">{}</span><span class=\"mb-id-hint\">{}</span></div>",
            line.icon.as_str(),
            escape_html(&line.label),
            escape_html(&line.id_hint),
        );
    }
    out.push_str("</div>");
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
