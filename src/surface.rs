//! SVG host plumbing: wrapping the host's children into one transformable
//! group and writing gesture transforms to it.

use web_sys::{Document, Element, SvgElement};

use crate::error::ViewError;
use crate::transform::Matrix;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Handle to the `<g>` wrapper that receives the gesture transform.
pub struct TransformSurface {
    host: SvgElement,
    group: Element,
}

impl TransformSurface {
    /// Moves every existing child of `host` into a fresh `<g>` and appends
    /// the group back, so a single `transform` attribute moves all content.
    /// Performed once at mount.
    pub fn wrap(host: &SvgElement) -> Result<Self, ViewError> {
        let document = host.owner_document().ok_or(ViewError::MissingSurface)?;
        let group = create_svg_element(&document, "g")?;
        while let Some(child) = host.first_child() {
            let _ = group.append_child(&child);
        }
        let _ = host.append_child(&group);
        Ok(Self {
            host: host.clone(),
            group,
        })
    }

    /// Writes `m` to the group's `transform` attribute.
    pub fn apply(&self, m: &Matrix) {
        let _ = self.group.set_attribute("transform", &m.to_svg_attr());
    }

    /// Moves the children back out and removes the wrapper group. Performed
    /// once at unmount.
    pub fn release(&self) {
        while let Some(child) = self.group.first_child() {
            let _ = self.host.append_child(&child);
        }
        let _ = self.host.remove_child(&self.group);
    }
}

fn create_svg_element(document: &Document, tag: &str) -> Result<Element, ViewError> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|_| ViewError::MissingSurface)
}
