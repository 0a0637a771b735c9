//! Vector drawing of the dial and the particle field
//!
//! Everything goes through the [`Surface`] trait so the same drawing code runs
//! against a browser canvas or a recorder in tests.

use std::borrow::Cow;
use std::f64::consts::TAU;

use glam::DVec2;

use crate::{DialGeometry, ParticleField, Params, Tachometer};

/// Horizontal linear gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub from: DVec2,
    pub to: DVec2,
    pub stops: &'static [(f64, &'static str)],
}

pub const NORMAL_STOPS: &[(f64, &str)] = &[(0.0, "#6C00FF"), (0.5, "#C800FF"), (1.0, "#FF00FF")];
pub const REDLINE_STOPS: &[(f64, &str)] = &[(0.0, "#6C00FF"), (0.7, "#FF0080"), (1.0, "#FF0000")];

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Cow<'static, str>),
    Linear(Gradient),
}

impl Paint {
    pub const fn solid(css: &'static str) -> Self {
        Paint::Solid(Cow::Borrowed(css))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

impl LineCap {
    pub fn css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub cap: LineCap,
    pub alpha: f64,
}

impl Stroke {
    pub fn new(paint: Paint, width: f64) -> Self {
        Self {
            paint,
            width,
            cap: LineCap::Butt,
            alpha: 1.0,
        }
    }

    pub fn round(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

/// 2D drawing primitives supplied by the host
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn stroke_arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, stroke: &Stroke);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke);
    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint, alpha: f64);
    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, color: &str);
}

const BACKGROUND_ARC: &str = "rgba(108, 0, 255, 0.2)";
const MINOR_TICK: &str = "rgba(255, 255, 255, 0.5)";
const NEEDLE_SHADOW: &str = "rgba(0, 0, 0, 0.5)";
const WHITE: &str = "#FFFFFF";
const RED: &str = "#FF0000";
const VIOLET: &str = "#6C00FF";
const LABEL_FONT: &str = "12px monospace";

/// Draw the tachometer dial. A missing surface is silently skipped.
pub fn draw_dial<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    dial: &DialGeometry,
    tach: &Tachometer,
) {
    let Some(surface) = surface else {
        return;
    };
    let (center, radius) = (dial.center, dial.radius);
    let (rpm, max) = (tach.rpm(), tach.max());
    let readout = tach.readout();

    surface.clear(dial.width, dial.height);

    // Background arc
    surface.stroke_arc(
        center,
        radius,
        Params::DIAL_START,
        Params::DIAL_START + Params::DIAL_SWEEP,
        &Stroke::new(Paint::solid(BACKGROUND_ARC), 8.0),
    );

    // Value arc
    let stops = if readout.redline {
        REDLINE_STOPS
    } else {
        NORMAL_STOPS
    };
    let gradient = Gradient {
        from: DVec2::ZERO,
        to: DVec2::new(dial.width, 0.0),
        stops,
    };
    surface.stroke_arc(
        center,
        radius,
        Params::DIAL_START,
        DialGeometry::needle_angle(rpm, max),
        &Stroke::new(Paint::Linear(gradient), 12.0).round(),
    );

    // Ticks and labels
    for i in 0..=Params::DIAL_TICKS {
        let angle = DialGeometry::tick_angle(i);
        let major = i % Params::DIAL_MAJOR_EVERY == 0;
        let (length, width, color) = if major {
            (15.0, 3.0, WHITE)
        } else {
            (8.0, 1.0, MINOR_TICK)
        };

        surface.stroke_line(
            dial.polar(angle, radius - length),
            dial.polar(angle, radius),
            &Stroke::new(Paint::solid(color), width),
        );

        if major {
            let label = (i * Params::DIAL_TICK_VALUE).to_string();
            surface.fill_text(&label, dial.polar(angle, radius - 30.0), LABEL_FONT, WHITE);
        }
    }

    // Needle with a drop shadow
    let needle_angle = DialGeometry::needle_angle(rpm, max);
    let tip = dial.polar(needle_angle, radius - 40.0);
    let shadow = DVec2::splat(2.0);
    surface.stroke_line(
        center + shadow,
        tip + shadow,
        &Stroke::new(Paint::solid(NEEDLE_SHADOW), 4.0),
    );
    let needle_color = if readout.redline { RED } else { WHITE };
    surface.stroke_line(center, tip, &Stroke::new(Paint::solid(needle_color), 3.0));

    // Hub
    let hub_color = if readout.redline { RED } else { VIOLET };
    surface.fill_circle(center, 8.0, &Paint::solid(hub_color), 1.0);
    surface.stroke_arc(center, 8.0, 0.0, TAU, &Stroke::new(Paint::solid(WHITE), 2.0));
}

/// Draw glow trails under the sparks. A missing surface is silently skipped.
pub fn draw_field<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    field: &ParticleField,
    width: f64,
    height: f64,
) {
    let Some(surface) = surface else {
        return;
    };
    surface.clear(width, height);

    let glow = Paint::Solid(Cow::Owned(field.glow_color().to_owned()));
    for trail in field.trails() {
        surface.fill_circle(
            trail.pos.as_dvec2(),
            f64::from(trail.size) / 2.0,
            &glow,
            f64::from(trail.opacity),
        );
    }

    for spark in field.sparks() {
        let pos = spark.pos.as_dvec2();
        let size = f64::from(spark.size);
        let opacity = f64::from(spark.opacity());
        let paint = Paint::solid(spark.color.css());

        // Streak trailing behind the direction of travel
        let heading = f64::from(spark.heading());
        let tail = pos - DVec2::new(heading.cos(), heading.sin()) * size * 3.0;
        surface.stroke_line(
            pos,
            tail,
            &Stroke::new(paint.clone(), 1.0).round().alpha(opacity * 0.8),
        );
        surface.fill_circle(pos, size / 2.0, &paint, opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, FxRng};
    use glam::Vec2;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Arc { end: f64, paint: Paint },
        Line { stroke: Stroke },
        Circle { paint: Paint, alpha: f64 },
        Text(String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Surface for Recorder {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.0.push(Op::Clear);
        }

        fn stroke_arc(&mut self, _c: DVec2, _r: f64, _start: f64, end: f64, stroke: &Stroke) {
            self.0.push(Op::Arc {
                end,
                paint: stroke.paint.clone(),
            });
        }

        fn stroke_line(&mut self, _from: DVec2, _to: DVec2, stroke: &Stroke) {
            self.0.push(Op::Line {
                stroke: stroke.clone(),
            });
        }

        fn fill_circle(&mut self, _c: DVec2, _r: f64, paint: &Paint, alpha: f64) {
            self.0.push(Op::Circle {
                paint: paint.clone(),
                alpha,
            });
        }

        fn fill_text(&mut self, text: &str, _at: DVec2, _font: &str, _color: &str) {
            self.0.push(Op::Text(text.to_string()));
        }
    }

    fn dial_ops(rpm: f64) -> Vec<Op> {
        let mut recorder = Recorder::default();
        let dial = DialGeometry::square(300.0);
        let mut tach = Tachometer::new(&Config::new()).unwrap();
        tach.set_value(rpm);
        draw_dial(Some(&mut recorder), &dial, &tach);
        recorder.0
    }

    #[test]
    fn test_dial_draw_order() {
        let ops = dial_ops(6000.0);
        assert_eq!(ops[0], Op::Clear);
        assert!(matches!(ops[1], Op::Arc { .. }), "background arc");
        assert!(matches!(ops[2], Op::Arc { .. }), "value arc");
        assert!(matches!(ops.last(), Some(Op::Arc { .. })), "hub outline");
    }

    #[test]
    fn test_dial_ticks_and_labels() {
        let ops = dial_ops(6000.0);
        let texts: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            ["0", "3000", "6000", "9000", "12000", "15000", "18000"]
        );

        let lines = ops.iter().filter(|op| matches!(op, Op::Line { .. })).count();
        assert_eq!(lines, 19 + 2, "ticks plus needle and its shadow");
    }

    #[test]
    fn test_value_arc_gradient_follows_redline() {
        let normal = dial_ops(6000.0);
        let redline = dial_ops(13500.0);
        match (&normal[2], &redline[2]) {
            (
                Op::Arc {
                    paint: Paint::Linear(a),
                    ..
                },
                Op::Arc {
                    paint: Paint::Linear(b),
                    ..
                },
            ) => {
                assert_eq!(a.stops, NORMAL_STOPS);
                assert_eq!(b.stops, REDLINE_STOPS);
            }
            other => panic!("unexpected ops {other:?}"),
        }
    }

    #[test]
    fn test_value_arc_end_matches_needle() {
        let ops = dial_ops(9000.0);
        match &ops[2] {
            Op::Arc { end, .. } => {
                assert_eq!(*end, DialGeometry::needle_angle(9000.0, 18000.0));
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn test_missing_surface_is_noop() {
        let dial = DialGeometry::square(200.0);
        let tach = Tachometer::new(&Config::new()).unwrap();
        draw_dial::<Recorder>(None, &dial, &tach);

        let field = ParticleField::new(&Config::new());
        draw_field::<Recorder>(None, &field, 100.0, 40.0);
    }

    #[test]
    fn test_field_draws_trails_and_sparks() {
        let mut field = ParticleField::new(&Config::new());
        let mut rng = FxRng::new(5);
        field.activate();
        field.on_pointer_move(Vec2::new(20.0, 10.0), &mut rng);

        let mut recorder = Recorder::default();
        draw_field(Some(&mut recorder), &field, 100.0, 40.0);

        let circles = recorder
            .0
            .iter()
            .filter(|op| matches!(op, Op::Circle { .. }))
            .count();
        assert_eq!(circles, field.trails().len() + field.sparks().len());
        assert_eq!(recorder.0[0], Op::Clear);
    }

    #[test]
    fn test_trails_use_configured_glow_color() {
        let config = Config {
            glow_color: Some("#00E5FF".into()),
            effect_variant: crate::EffectVariant::Glow,
            ..Config::default()
        };
        let mut field = ParticleField::new(&config);
        let mut rng = FxRng::new(8);
        field.activate();
        field.on_pointer_move(Vec2::new(12.0, 6.0), &mut rng);

        let mut recorder = Recorder::default();
        draw_field(Some(&mut recorder), &field, 100.0, 40.0);

        let paints: Vec<&Paint> = recorder
            .0
            .iter()
            .filter_map(|op| match op {
                Op::Circle { paint, .. } => Some(paint),
                _ => None,
            })
            .collect();
        assert_eq!(paints, [&Paint::solid("#00E5FF")]);
    }
}
