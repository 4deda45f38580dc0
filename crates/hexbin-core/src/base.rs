// File: crates/hexbin-core/src/base.rs
// Summary: Reusable chart base: root element creation, block content and the mount hook.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::dom::Element;
use crate::error::Result;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Per-mount context handed to a chart's setup function.
#[derive(Clone, Copy, Debug)]
pub struct MountContext {
    instance: u64,
}

impl MountContext {
    pub fn instance(&self) -> u64 { self.instance }

    /// Document-unique id for `local` (e.g. `clip` -> `clip-7`).
    pub fn scoped_id(&self, local: &str) -> String {
        format!("{local}-{}", self.instance)
    }
}

/// Root `<svg>` with declared size plus optional host-provided block text.
#[derive(Clone, Debug)]
pub struct ChartBase {
    root: Element,
    block: Option<String>,
}

impl ChartBase {
    pub fn new(width: u32, height: u32) -> Self {
        let mut root = Element::new("svg");
        root.attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", width)
            .attr("height", height);
        Self { root, block: None }
    }

    /// Host block content, yielded into the root as a `<title>`.
    pub fn with_block(mut self, text: impl Into<String>) -> Self {
        self.block = Some(text.into());
        self
    }

    pub fn root(&self) -> &Element { &self.root }

    /// Insert the component and run `setup` against its own root element.
    /// Whatever `setup` returns is handed back next to the mounted chart.
    pub fn mount<T, F>(self, setup: F) -> Result<(Mounted, T)>
    where
        F: FnOnce(&mut Element, &MountContext) -> Result<T>,
    {
        let ctx = MountContext { instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed) };
        let ChartBase { mut root, block } = self;
        let text = block.as_deref().map(str::trim).unwrap_or_default().to_string();
        if !text.is_empty() {
            root.append("title").text(text.clone());
        }
        let out = setup(&mut root, &ctx)?;
        log::debug!("mounted chart instance {}", ctx.instance);
        Ok((Mounted { root, text, ctx }, out))
    }
}

/// A chart after its setup ran; owns the finished element tree.
#[derive(Clone, Debug)]
pub struct Mounted {
    root: Element,
    text: String,
    ctx: MountContext,
}

impl Mounted {
    pub fn root(&self) -> &Element { &self.root }
    pub fn context(&self) -> &MountContext { &self.ctx }

    /// Host block content, trimmed; empty when none was given.
    /// Axis tick labels are not included; use `root().text_content()` for
    /// every text node in the tree.
    pub fn text(&self) -> &str { &self.text }

    pub fn to_svg_string(&self) -> String {
        self.root.to_svg()
    }
}
