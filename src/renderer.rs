use std::f32::consts::TAU;

use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Shape as EguiShape, Stroke, Vec2};

use crate::element::{BackgroundFill, Element, Shape, ShapeType, Text};
use crate::geometry::element_bounds;
use crate::state::EditorSession;

const ELLIPSE_SEGMENTS: usize = 48;

/// Paints the session's elements, grid and selection outline onto an egui painter.
#[derive(Debug, Clone)]
pub struct CanvasRenderer {
    pub selection_color: Color32,
    pub selection_width: f32,
    pub grid_color: Color32,
    /// Used when an element carries a colour that does not parse
    pub fallback_color: Color32,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self {
            selection_color: Color32::from_rgb(0x4F, 0x46, 0xE5),
            selection_width: 2.0,
            grid_color: Color32::from_black_alpha(32),
            fallback_color: Color32::WHITE,
        }
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `canvas` is the on-screen rect of the whole (zoomed) document.
    pub fn paint(&self, painter: &Painter, canvas: Rect, session: &EditorSession) {
        let view = session.view();
        let scale = view.scale();
        let dimensions = session.dimensions();

        painter.rect_filled(canvas, 0.0, Color32::WHITE);

        for element in session.elements() {
            let bounds = element_bounds(element, dimensions);
            let screen = Rect::from_min_max(
                view.document_to_screen(canvas.min, bounds.min),
                view.document_to_screen(canvas.min, bounds.max),
            );
            match element {
                Element::Background(background) => {
                    self.paint_background(painter, canvas, &background.fill)
                }
                Element::Text(text) => self.paint_text(painter, screen.min, text, scale),
                Element::Shape(shape) => self.paint_shape(painter, screen, shape, scale),
            }
        }

        if view.show_grid() {
            self.paint_grid(painter, canvas, view.grid_step());
        }

        if let Some(selected) = session.selected_element() {
            if !selected.is_background() {
                let bounds = element_bounds(selected, dimensions);
                let screen = Rect::from_min_max(
                    view.document_to_screen(canvas.min, bounds.min),
                    view.document_to_screen(canvas.min, bounds.max),
                )
                .expand(self.selection_width);
                let stroke = Stroke::new(self.selection_width, self.selection_color);
                painter.rect_stroke(screen, 4.0, stroke);
            }
        }
    }

    fn color(&self, hex: &str) -> Color32 {
        parse_hex_color(hex).unwrap_or(self.fallback_color)
    }

    fn paint_background(&self, painter: &Painter, canvas: Rect, fill: &BackgroundFill) {
        match fill {
            BackgroundFill::Color(color) => {
                painter.rect_filled(canvas, 0.0, self.color(color));
            }
            BackgroundFill::Gradient(gradient) => match gradient_stops(gradient) {
                Some(stops) => {
                    painter.add(EguiShape::mesh(gradient_mesh(canvas, &stops)));
                }
                None => {
                    painter.rect_filled(canvas, 0.0, self.fallback_color);
                }
            },
        }
    }

    fn paint_text(&self, painter: &Painter, pos: Pos2, text: &Text, scale: f32) {
        let size = text.font_size as f32 * scale;
        let font = if text.font_family.is_monospace() {
            FontId::monospace(size)
        } else {
            FontId::proportional(size)
        };
        painter.text(pos, Align2::LEFT_TOP, &text.content, font, self.color(&text.color));
    }

    fn paint_shape(&self, painter: &Painter, rect: Rect, shape: &Shape, scale: f32) {
        let fill = self.color(&shape.color);
        let stroke = if shape.has_border() {
            Stroke::new(shape.border_width as f32 * scale, self.color(&shape.border_color))
        } else {
            Stroke::NONE
        };

        match shape.shape_type {
            ShapeType::Circle => {
                let points = ellipse_points(rect, ELLIPSE_SEGMENTS);
                painter.add(EguiShape::convex_polygon(points.clone(), fill, Stroke::NONE));
                if stroke != Stroke::NONE {
                    painter.add(EguiShape::closed_line(points, stroke));
                }
            }
            // Remaining shape types are drawn as their bounding box.
            _ => {
                painter.rect_filled(rect, 0.0, fill);
                if stroke != Stroke::NONE {
                    painter.rect_stroke(rect, 0.0, stroke);
                }
            }
        }
    }

    fn paint_grid(&self, painter: &Painter, canvas: Rect, step: f32) {
        if step < 2.0 {
            return;
        }
        let mut y = canvas.top() + step;
        while y < canvas.bottom() {
            let mut x = canvas.left() + step;
            while x < canvas.right() {
                painter.circle_filled(Pos2::new(x, y), 1.0, self.grid_color);
                x += step;
            }
            y += step;
        }
    }
}

/// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 16 + v;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

/// Two-colour linear gradient taken from a CSS `linear-gradient(...)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStops {
    /// CSS angle: 0 points up, 90 points right
    pub angle_deg: f32,
    pub from: Color32,
    pub to: Color32,
}

/// Extracts the angle and the first and last colour stops.
pub fn gradient_stops(css: &str) -> Option<GradientStops> {
    let inner = css
        .trim()
        .strip_prefix("linear-gradient(")?
        .strip_suffix(')')?;

    let mut angle_deg = 180.0;
    let mut colors = Vec::new();
    for part in inner.split(',').map(str::trim) {
        if let Some(deg) = part.strip_suffix("deg") {
            angle_deg = deg.trim().parse().ok()?;
        } else if let Some(token) = part.split_whitespace().next() {
            if let Some(color) = parse_hex_color(token) {
                colors.push(color);
            }
        }
    }

    Some(GradientStops {
        angle_deg,
        from: *colors.first()?,
        to: *colors.last()?,
    })
}

fn gradient_mesh(rect: Rect, stops: &GradientStops) -> Mesh {
    let angle = stops.angle_deg.to_radians();
    let direction = Vec2::new(angle.sin(), -angle.cos());
    let corners = [rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
    let reach = corners
        .iter()
        .map(|c| (*c - rect.center()).dot(direction).abs())
        .fold(0.0_f32, f32::max)
        .max(f32::EPSILON);

    let mut mesh = Mesh::default();
    for corner in corners {
        let t = ((corner - rect.center()).dot(direction) / reach + 1.0) / 2.0;
        mesh.colored_vertex(corner, lerp_color(stops.from, stops.to, t));
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
        mix(from.a(), to.a()),
    )
}

fn ellipse_points(rect: Rect, segments: usize) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + Vec2::new(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect()
}
