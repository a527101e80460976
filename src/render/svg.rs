use std::fmt::{self, Write as _};

use crate::geometry::path_data::fmt_num;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Minimal SVG element tree used to emit decoration markup.
///
/// Attribute values are escaped on write; element names and attribute names are
/// trusted (`&'static str`).
#[derive(Clone, Debug, PartialEq)]
pub struct SvgNode {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<SvgNode>,
    text: String,
}

impl SvgNode {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    pub fn group() -> Self {
        Self::new("g")
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Numeric attribute, rounded the same way as path data.
    pub fn num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    /// Character data written after any children.
    pub fn text(mut self, text: impl fmt::Display) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(mut self, child: SvgNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = SvgNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn child_nodes(&self) -> &[SvgNode] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Wrap in a `<g>` carrying an affine `transform`, unless the transform is the identity.
    pub fn transformed(self, transform: kurbo::Affine) -> SvgNode {
        if transform == kurbo::Affine::IDENTITY {
            return self;
        }
        let [a, b, c, d, e, f] = transform.as_coeffs();
        SvgNode::group()
            .attr(
                "transform",
                format!(
                    "matrix({},{},{},{},{},{})",
                    fmt_coeff(a),
                    fmt_coeff(b),
                    fmt_coeff(c),
                    fmt_coeff(d),
                    fmt_num(e),
                    fmt_num(f)
                ),
            )
            .child(self)
    }

    pub fn write_to(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.name);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {k}=\"{}\"", escape_attr(v));
        }
        if self.children.is_empty() && self.text.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for c in &self.children {
            c.write_to(out);
        }
        out.push_str(&escape_attr(&self.text));
        let _ = write!(out, "</{}>", self.name);
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    /// Serialize as a standalone document, adding the SVG namespace to the root.
    pub fn to_document(&self) -> String {
        let mut root = self.clone();
        if root.get_attr("xmlns").is_none() {
            root.attrs.insert(0, ("xmlns", SVG_NS.to_owned()));
        }
        root.to_markup()
    }
}

fn fmt_coeff(v: f64) -> String {
    let r = (v * 1_000_000.0).round() / 1_000_000.0;
    let r = if r == 0.0 { 0.0 } else { r };
    let s = format!("{r:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn escape_attr(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for ch in v.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
