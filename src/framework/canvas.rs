use egui::epaint::RectShape;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

const LINE_WIDTH: f32 = 1.0;

/// 0xRRGGBB => Color32
pub fn rgb_from_hex(color: u32) -> Color32 {
    let [_, r, g, b] = color.to_be_bytes();
    Color32::from_rgb(r, g, b)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect {
        rect: Rect,
        color: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Text {
        text: String,
        pos: Pos2,
        anchor: Align2,
        size: f32,
        color: Color32,
    },
}

/// Retained drawing surface.
///
/// Games draw into it whenever they like (usually straight from an input handler);
/// the front end replays the recorded primitives every frame.
/// TOP / LEFT corner is 0/0
#[derive(Clone, Debug)]
pub struct Canvas {
    size: Vec2,
    primitives: Vec<Primitive>,
}

impl Canvas {
    pub fn new(size: Vec2) -> Self {
        Self { size, primitives: vec![] }
    }

    pub fn size(&self) -> Vec2 { self.size }

    pub fn rect(&self) -> Rect { Rect::from_min_size(Pos2::ZERO, self.size) }

    pub fn primitives(&self) -> &[Primitive] { &self.primitives }

    /// Paints the whole surface, which makes everything drawn before invisible.
    pub fn fill(
        &mut self,
        color: Color32,
    ) {
        self.primitives.clear();
        self.fill_rect(self.rect(), color);
    }

    pub fn fill_rect(
        &mut self,
        rect: Rect,
        color: Color32,
    ) {
        self.primitives.push(Primitive::Rect { rect, color });
    }

    pub fn line(
        &mut self,
        from: Pos2,
        to: Pos2,
        color: Color32,
    ) {
        self.primitives.push(Primitive::Line { from, to, color });
    }

    pub fn circle(
        &mut self,
        center: Pos2,
        radius: f32,
        color: Color32,
    ) {
        self.primitives.push(Primitive::Circle { center, radius, color });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        pos: Pos2,
        anchor: Align2,
        size: f32,
        color: Color32,
    ) {
        self.primitives.push(Primitive::Text {
            text: text.into(),
            pos,
            anchor,
            size,
            color,
        });
    }

    /// Replays the display list onto `painter`, relative to its clip rect.
    pub fn paint(
        &self,
        painter: &Painter,
    ) {
        let offset = painter.clip_rect().min.to_vec2();
        for primitive in &self.primitives {
            let mut shape: Shape = match primitive {
                Primitive::Rect { rect, color } => RectShape::filled(*rect, Rounding::none(), *color).into(),
                Primitive::Line { from, to, color } => Shape::line_segment([*from, *to], Stroke::new(LINE_WIDTH, *color)),
                Primitive::Circle { center, radius, color } => Shape::circle_filled(*center, *radius, *color),
                Primitive::Text { text, pos, anchor, size, color } => {
                    painter.text(*pos + offset, *anchor, text, FontId::proportional(*size), *color);
                    continue;
                }
            };
            shape.translate(offset);
            painter.add(shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::{Color32, Pos2, Vec2};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x012456, Color32::from_rgb(0x01, 0x24, 0x56))]
    #[case(0x8B5742, Color32::from_rgb(139, 87, 66))]
    #[case(0xFFFFFF, Color32::WHITE)]
    #[case(0xAB000000, Color32::BLACK)]
    fn hex_colors(#[case] hex: u32, #[case] expected: Color32) {
        assert_eq!(rgb_from_hex(hex), expected);
    }

    #[test]
    fn fill_covers_previous_drawing() {
        let mut canvas = Canvas::new(Vec2::new(100.0, 50.0));
        canvas.circle(Pos2::new(10.0, 10.0), 5.0, Color32::WHITE);
        canvas.line(Pos2::ZERO, Pos2::new(5.0, 5.0), Color32::BLACK);
        canvas.fill(Color32::RED);

        assert_eq!(canvas.primitives(), &[Primitive::Rect { rect: canvas.rect(), color: Color32::RED }]);
        assert_eq!(canvas.rect().max, Pos2::new(100.0, 50.0));
    }

    #[test]
    fn primitives_keep_drawing_order() {
        let mut canvas = Canvas::new(Vec2::splat(30.0));
        canvas.circle(Pos2::new(15.0, 15.0), 13.0, Color32::BLACK);
        canvas.text("7", Pos2::new(15.0, 15.0), egui::Align2::CENTER_CENTER, 12.0, Color32::WHITE);

        assert!(matches!(canvas.primitives()[0], Primitive::Circle { .. }));
        assert!(matches!(&canvas.primitives()[1], Primitive::Text { text, .. } if text == "7"));
    }
}
