use std::fmt;
use tracing::warn;

use super::core::UriModel;
use crate::tree::NodeId;

/// Glyph set used when rendering the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Unicode,
    Ascii,
}

impl RenderStyle {
    /// Style for a known name, case-insensitive.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ascii" | "plain" => Some(RenderStyle::Ascii),
            "unicode" => Some(RenderStyle::Unicode),
            _ => None,
        }
    }

    /// Like [`from_name`](Self::from_name), falling back to unicode with a warning.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::from_name(s).unwrap_or_else(|| {
            warn!(value = %s, "Unknown render style, using unicode");
            RenderStyle::Unicode
        })
    }
}

struct TreeGlyphs {
    branch: &'static str,
    last: &'static str,
    vertical: &'static str,
    spacer: &'static str,
}

impl TreeGlyphs {
    fn for_style(style: RenderStyle) -> Self {
        match style {
            RenderStyle::Ascii => Self {
                branch: "+-",
                last: "\\-",
                vertical: "|  ",
                spacer: "   ",
            },
            RenderStyle::Unicode => Self {
                branch: "├─",
                last: "└─",
                vertical: "│  ",
                spacer: "   ",
            },
        }
    }
}

impl UriModel {
    /// Box-drawing rendering of the tree, one segment per line with its methods.
    ///
    /// ```text
    /// /
    /// └─ user [GET]
    ///    └─ account [GET, POST]
    ///       └─ {id} [GET, DELETE]
    /// ```
    ///
    /// Diagnostic output only; the layout is not a stable format.
    #[must_use]
    pub fn render(&self, style: RenderStyle) -> String {
        let glyphs = TreeGlyphs::for_style(style);
        let mut lines = vec![self.render_label(self.root())];
        let children = self.children(self.root());
        for (idx, child) in children.iter().enumerate() {
            let is_last = idx + 1 == children.len();
            self.render_node(&mut lines, "", *child, is_last, &glyphs);
        }
        lines.join("\n")
    }

    fn render_node(
        &self,
        lines: &mut Vec<String>,
        prefix: &str,
        id: NodeId,
        is_last: bool,
        glyphs: &TreeGlyphs,
    ) {
        let connector = if is_last { glyphs.last } else { glyphs.branch };
        lines.push(format!("{prefix}{connector} {}", self.render_label(id)));

        let next_prefix = if is_last {
            format!("{prefix}{}", glyphs.spacer)
        } else {
            format!("{prefix}{}", glyphs.vertical)
        };

        let children = self.children(id);
        for (idx, child) in children.iter().enumerate() {
            let child_is_last = idx + 1 == children.len();
            self.render_node(lines, &next_prefix, *child, child_is_last, glyphs);
        }
    }

    fn render_label(&self, id: NodeId) -> String {
        let segment = self.segment(id);
        if segment.has_operations() {
            let methods: Vec<String> = segment.methods().map(ToString::to_string).collect();
            format!("{segment} [{}]", methods.join(", "))
        } else {
            segment.to_string()
        }
    }
}

impl fmt::Display for UriModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::Unicode))
    }
}
