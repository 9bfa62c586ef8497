use kurbo::{Shape, Stroke, StrokeOpts};

use crate::{
    config::{RenderConfig, TextTemplate},
    eval::evaluator::{EvaluatedFrame, EvaluatedNode},
    foundation::core::{Affine, BezPath, Canvas, Point, Rgba8},
    foundation::error::{BankLockerError, BankLockerResult},
    render::{
        backend::{FrameRGBA, FrameRenderer},
        text::{LabelRasterizer, LabelSpec},
        viewport::Viewport,
    },
    scene::object::{BRACE_STROKE_WIDTH, DEFAULT_STROKE_WIDTH, GRID_STROKE_WIDTH, SceneObject},
};

/// Flattening tolerance for curves, in pixels.
const TOLERANCE_PX: f64 = 0.1;

/// CPU raster backend powered by `vello_cpu`.
///
/// Strokes are expanded to fills with `kurbo::stroke` in pixel space, so line widths stay
/// constant while objects scale. Labels go through [`LabelRasterizer`].
pub struct CpuRenderer {
    viewport: Viewport,
    background: Rgba8,
    text_template: TextTemplate,
    ctx: Option<vello_cpu::RenderContext>,
    labels: LabelRasterizer,
}

impl CpuRenderer {
    /// Create a renderer for `config`'s canvas, background and text template.
    pub fn new(config: &RenderConfig) -> BankLockerResult<Self> {
        config.validate()?;
        Ok(Self {
            viewport: Viewport::new(config.canvas),
            background: config.background(),
            text_template: config.text_template,
            ctx: None,
            labels: LabelRasterizer::new(),
        })
    }

    /// Scene-to-pixel mapping in use.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> BankLockerResult<R>,
    ) -> BankLockerResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_node(
        &mut self,
        node: &EvaluatedNode<'_>,
        ctx: &mut vello_cpu::RenderContext,
    ) -> BankLockerResult<()> {
        let to_px = self.viewport.to_pixels() * node.transform();
        let opacity = node.opacity;

        match node.object {
            SceneObject::NumberPlane => self.draw_number_plane(opacity, ctx),
            SceneObject::Dot {
                center,
                radius,
                color,
            } => {
                let mut path = kurbo::Circle::new(*center, *radius).to_path(1e-4);
                path.apply_affine(to_px);
                fill(ctx, &path, color.with_opacity(opacity));
            }
            SceneObject::Circle {
                center,
                radius,
                color,
            } => {
                let mut path = kurbo::Circle::new(*center, *radius).to_path(1e-4);
                path.apply_affine(to_px);
                let w = self.viewport.stroke_px(DEFAULT_STROKE_WIDTH);
                stroke(ctx, &path, w, color.with_opacity(opacity));
            }
            SceneObject::Line { start, end, color } => {
                let mut path = BezPath::new();
                path.move_to(*start);
                path.line_to(*end);
                path.apply_affine(to_px);
                let w = self.viewport.stroke_px(DEFAULT_STROKE_WIDTH);
                stroke(ctx, &path, w, color.with_opacity(opacity));
            }
            SceneObject::Brace { shape, color } => {
                let mut path = shape.path.clone();
                path.apply_affine(to_px);
                let w = self.viewport.stroke_px(BRACE_STROKE_WIDTH);
                stroke(ctx, &path, w, color.with_opacity(opacity));
            }
            SceneObject::Label {
                text,
                anchor,
                align,
                em_size,
                kind,
                color,
            } => {
                let label = LabelSpec {
                    text,
                    anchor: *anchor,
                    align: *align,
                    em_size: *em_size,
                    kind: *kind,
                    color: *color,
                };
                let raster = self
                    .labels
                    .raster(label, &self.viewport, self.text_template)?;
                let Some(ink) = raster.ink else {
                    return Ok(());
                };

                let c = ink.center().to_vec2();
                let tr = Affine::translate(c) * Affine::scale(node.scale) * Affine::translate(-c);
                ctx.set_transform(affine_to_cpu(tr));
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(raster.image);
                if opacity < 1.0 {
                    ctx.push_opacity_layer(opacity as f32);
                }
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(raster.width),
                    f64::from(raster.height),
                ));
                if opacity < 1.0 {
                    ctx.pop_layer();
                }
            }
        }
        Ok(())
    }

    fn draw_number_plane(&self, opacity: f64, ctx: &mut vello_cpu::RenderContext) {
        let half = self.viewport.half_extents();
        let nx = half.x.ceil() as i64;
        let ny = half.y.ceil() as i64;
        let (x0, x1) = (-(nx as f64), nx as f64);
        let (y0, y1) = (-(ny as f64), ny as f64);

        let mut grid = BezPath::new();
        for i in (-nx..=nx).filter(|i| *i != 0) {
            grid.move_to(Point::new(i as f64, y0));
            grid.line_to(Point::new(i as f64, y1));
        }
        for j in (-ny..=ny).filter(|j| *j != 0) {
            grid.move_to(Point::new(x0, j as f64));
            grid.line_to(Point::new(x1, j as f64));
        }

        let mut axes = BezPath::new();
        axes.move_to(Point::new(x0, 0.0));
        axes.line_to(Point::new(x1, 0.0));
        axes.move_to(Point::new(0.0, y0));
        axes.line_to(Point::new(0.0, y1));

        let to_px = self.viewport.to_pixels();
        grid.apply_affine(to_px);
        axes.apply_affine(to_px);

        let w = self.viewport.stroke_px(GRID_STROKE_WIDTH);
        stroke(ctx, &grid, w, Rgba8::BLUE_D.with_opacity(opacity));
        stroke(ctx, &axes, w, Rgba8::WHITE.with_opacity(opacity));
    }
}

impl FrameRenderer for CpuRenderer {
    fn canvas(&self) -> Canvas {
        self.viewport.canvas()
    }

    #[tracing::instrument(skip(self, frame), fields(frame_index = frame.frame.0, nodes = frame.nodes.len()))]
    fn render(&mut self, frame: &EvaluatedFrame<'_>) -> BankLockerResult<FrameRGBA> {
        let canvas = self.viewport.canvas();
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BankLockerError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BankLockerError::render("canvas height exceeds u16"))?;

        self.with_ctx_mut(w, h, |this, ctx| {
            let bg = this.background;
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(canvas.width),
                f64::from(canvas.height),
            ));

            for node in &frame.nodes {
                this.draw_node(node, ctx)?;
            }

            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(FrameRGBA {
                width: canvas.width,
                height: canvas.height,
                data: pixmap.data_as_u8_slice().to_vec(),
                premultiplied: true,
            })
        })
    }
}

fn fill(ctx: &mut vello_cpu::RenderContext, path_px: &BezPath, color: Rgba8) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    ctx.fill_path(&bezpath_to_cpu(path_px));
}

fn stroke(ctx: &mut vello_cpu::RenderContext, path_px: &BezPath, width_px: f64, color: Rgba8) {
    let outline = kurbo::stroke(
        path_px.iter(),
        &Stroke::new(width_px),
        &StrokeOpts::default(),
        TOLERANCE_PX,
    );
    fill(ctx, &outline, color);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
