//! The page root, which embeds the reference [`Canvas`] in a page container

use simple_xml_builder::XMLElement;

use crate::{
    image::{svg, Image, SvgOpts},
    Canvas, Number,
};

/// The width of the canvas shown on the page
pub const PAGE_CANVAS_WIDTH: f32 = 500.0;
/// The height of the canvas shown on the page
pub const PAGE_CANVAS_HEIGHT: f32 = 500.0;

/// The root of the page.  It takes no input, so every render is identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct Page;

impl Page {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: Number::constant(PAGE_CANVAS_WIDTH, "500"),
            height: Number::constant(PAGE_CANVAS_HEIGHT, "500"),
        }
    }

    pub fn image(&self) -> Image {
        self.canvas().compose()
    }

    /// The `<div>` container holding the canvas' `<svg>`
    pub fn render(&self) -> XMLElement {
        let mut root = XMLElement::new("div");
        root.add_child(svg::gen_svg(&self.image(), &SvgOpts::default()));
        root
    }

    pub fn markup(&self) -> String {
        svg::fragment_string(&self.render())
    }
}
