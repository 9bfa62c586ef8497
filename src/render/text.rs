//! Label rasterization through `usvg`/`resvg`.
//!
//! Each label becomes a one-element SVG document the size of the canvas, so font lookup,
//! shaping and alignment are all handled by `usvg` against the system font database. Rasters
//! are cached by document source.

use std::{collections::HashMap, fmt::Write as _, sync::Arc};

use crate::{
    config::{PLAIN_FONT_FAMILY, TextTemplate},
    foundation::core::{Point, Rect, Rgba8},
    foundation::error::{BankLockerError, BankLockerResult},
    render::viewport::Viewport,
    scene::object::{LabelAlign, LabelKind},
};

/// Borrowed description of a label to rasterize.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LabelSpec<'a> {
    pub(crate) text: &'a str,
    pub(crate) anchor: Point,
    pub(crate) align: LabelAlign,
    pub(crate) em_size: f64,
    pub(crate) kind: LabelKind,
    pub(crate) color: Rgba8,
}

/// Full-canvas raster of one label.
#[derive(Clone)]
pub(crate) struct LabelRaster {
    pub(crate) image: vello_cpu::Image,
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Pixel bounds of the drawn glyphs; `None` when no font could render the text.
    pub(crate) ink: Option<Rect>,
}

pub(crate) struct LabelRasterizer {
    options: usvg::Options<'static>,
    cache: HashMap<String, LabelRaster>,
}

impl LabelRasterizer {
    pub(crate) fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.faces().count(), "loaded system fonts");
        Self {
            options: usvg::Options {
                fontdb: Arc::new(db),
                ..Default::default()
            },
            cache: HashMap::new(),
        }
    }

    pub(crate) fn raster(
        &mut self,
        label: LabelSpec<'_>,
        viewport: &Viewport,
        template: TextTemplate,
    ) -> BankLockerResult<LabelRaster> {
        let source = label_svg(label, viewport, template);
        if let Some(hit) = self.cache.get(&source) {
            return Ok(hit.clone());
        }

        let canvas = viewport.canvas();
        let tree = usvg::Tree::from_str(&source, &self.options)
            .map_err(|e| BankLockerError::render(format!("parse label svg: {e}")))?;
        let bytes = rasterize_svg_to_premul_rgba8(&tree, canvas.width, canvas.height)?;
        let ink = alpha_bounds(&bytes, canvas.width, canvas.height);
        if ink.is_none() {
            tracing::warn!(text = label.text, "label rendered no glyphs; is a matching font installed?");
        }

        let raster = LabelRaster {
            image: rgba_premul_to_image(&bytes, canvas.width, canvas.height)?,
            width: canvas.width,
            height: canvas.height,
            ink,
        };
        self.cache.insert(source, raster.clone());
        Ok(raster)
    }
}

fn label_svg(label: LabelSpec<'_>, viewport: &Viewport, template: TextTemplate) -> String {
    let canvas = viewport.canvas();
    let at = viewport.point_to_pixels(label.anchor);
    let size_px = label.em_size * viewport.px_per_unit();
    let (family, style) = match label.kind {
        LabelKind::Plain => (PLAIN_FONT_FAMILY, "normal"),
        LabelKind::Math => (template.math_font_family(), template.math_font_style()),
    };
    let (anchor, baseline) = match label.align {
        LabelAlign::LeftCenter => ("start", "central"),
        LabelAlign::TopCenter => ("middle", "hanging"),
    };

    let mut s = String::new();
    let _ = write!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
    let _ = write!(
        s,
        r#"<text x="{x:.3}" y="{y:.3}" font-family="{family}" font-style="{style}" font-size="{size_px:.3}" fill="{fill}" fill-opacity="{alpha:.4}" text-anchor="{anchor}" dominant-baseline="{baseline}">"#,
        x = at.x,
        y = at.y,
        fill = label.color.to_hex_rgb(),
        alpha = f64::from(label.color.a) / 255.0,
    );
    escape_xml_into(&mut s, label.text);
    s.push_str("</text></svg>");
    s
}

fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}

fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> BankLockerResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BankLockerError::render("failed to allocate label pixmap"))?;
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap.data().to_vec())
}

fn alpha_bounds(bytes: &[u8], width: u32, height: u32) -> Option<Rect> {
    let w = width as usize;
    let mut min = (usize::MAX, usize::MAX);
    let mut max = (0usize, 0usize);
    let mut any = false;
    for (i, px) in bytes.chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let (x, y) = (i % w, i / w);
        min = (min.0.min(x), min.1.min(y));
        max = (max.0.max(x), max.1.max(y));
        any = true;
    }
    if !any || height == 0 {
        return None;
    }
    Some(Rect::new(
        min.0 as f64,
        min.1 as f64,
        (max.0 + 1) as f64,
        (max.1 + 1) as f64,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> BankLockerResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| BankLockerError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| BankLockerError::render("pixmap height exceeds u16"))?;
    if bytes_premul.len() != (width as usize) * (height as usize) * 4 {
        return Err(BankLockerError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes_premul
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
