//! Interactive particle life viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state and
//! implements [`eframe::App`] to step and render the simulation through
//! an egui UI: a control bar, a rule-matrix panel, a status bar, and the
//! canvas itself.

use eframe::App;
use glam::DVec2;
use plife_core::{color::ParticleColor, config::Config, simulation::Simulation};
use rand::rng;

/// Background/clear color of the canvas. Deliberately not a
/// [`ParticleColor`]: particles are never black.
const BACKGROUND: egui::Color32 = egui::Color32::BLACK;

/// Draw color for each particle color.
fn fill_color(color: ParticleColor) -> egui::Color32 {
    match color {
        ParticleColor::Red => egui::Color32::RED,
        ParticleColor::Green => egui::Color32::GREEN,
        ParticleColor::Blue => egui::Color32::BLUE,
    }
}

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: a [`Simulation`] built from [`Config::default`].
/// - The rng used to spawn the population and reroll the rules.
/// - eframe/egui callbacks for drawing and input.
///
/// The per-frame update is:
/// 1. Drain input; any key press rerolls the rule matrix.
/// 2. If `running`, advance exactly one [`Simulation::step`].
/// 3. Render the control panels and the canvas.
///
/// ### Fields
/// - `sim` - The engine owning the population and the rule matrix.
/// - `rng` - Random number generator for spawning and rule rerolls.
///
/// - `running` - Whether the simulation is auto-advancing.
/// - `steps` - Ticks completed since the last reset.
///
/// - `last_step_time` - Time stamp of the last tick (egui time).
/// - `last_step_dt` - Time between the last two ticks (for display only).
pub struct Viewer {
    sim: Simulation,
    rng: rand::rngs::ThreadRng,

    running: bool,
    steps: u64,

    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a viewer on the normal startup path: a 600-particle
    /// population spawned uniformly over the canvas and a fully randomized
    /// rule matrix. The simulation starts running immediately.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        let mut rng = rng();
        let sim = Simulation::new(Config::default(), &mut rng);

        Self {
            sim,
            rng,
            running: true,
            steps: 0,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Rebuilds the simulation from scratch: fresh population, fresh rules,
    /// tick counter back to zero. The run/pause state is left as is.
    fn reset(&mut self) {
        let cfg = *self.sim.config();
        self.sim = Simulation::new(cfg, &mut self.rng);
        self.steps = 0;
        self.last_step_time = 0.0;
        self.last_step_dt = 0.0;
    }

    /// Rerolls the interaction rule matrix in place; the next tick uses
    /// the new coefficients.
    fn randomize_rules(&mut self) {
        self.sim.randomize_rules(&mut self.rng);
    }

    /// Advances the simulation by a single tick and counts it.
    fn step_once(&mut self) {
        self.sim.step();
        self.steps += 1;
    }

    /// Largest centered square inside `avail`; the whole canvas maps onto it.
    fn canvas_rect(&self, avail: egui::Rect) -> egui::Rect {
        let side = avail.width().min(avail.height());
        egui::Rect::from_center_size(avail.center(), egui::vec2(side, side))
    }

    /// Maps a canvas-space position to screen-space inside `canvas`.
    ///
    /// The canvas origin is the top-left corner of the square; x grows to
    /// the right and y grows down, matching egui's screen orientation.
    ///
    /// ### Parameters
    /// - `p` - Canvas-space position.
    /// - `canvas` - Screen-space square returned by [`Viewer::canvas_rect`].
    ///
    /// ### Returns
    /// The corresponding egui position in screen-space.
    fn canvas_to_screen(&self, p: DVec2, canvas: egui::Rect) -> egui::Pos2 {
        let scale = f64::from(canvas.width()) / self.sim.config().canvas_size;
        egui::pos2(
            canvas.min.x + (p.x * scale) as f32,
            canvas.min.y + (p.y * scale) as f32,
        )
    }

    /// Builds the top panel UI (run controls, rule reroll, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Randomize rules").clicked() {
                    self.randomize_rules();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the right-hand panel showing the current rule matrix.
    fn ui_rules_panel(&self, ctx: &egui::Context) {
        egui::SidePanel::right("rules_panel")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Rules");
                ui.label("Force on row color from column color.");
                ui.separator();

                egui::Grid::new("rule_matrix").show(ui, |ui| {
                    ui.label("");
                    for target in ParticleColor::ALL {
                        ui.colored_label(fill_color(target), format!("{target:?}"));
                    }
                    ui.end_row();

                    for source in ParticleColor::ALL {
                        ui.colored_label(fill_color(source), format!("{source:?}"));
                        for target in ParticleColor::ALL {
                            let c = self.sim.rules().coefficient(source, target);
                            ui.label(format!("{c:+.0}"));
                        }
                        ui.end_row();
                    }
                });

                ui.separator();
                ui.label("Press any key to reroll the rules.");
            });
    }

    /// Builds the bottom status bar (tick timing, counters, run state).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("ticks = {}", self.steps));
                ui.label(format!("particles = {}", self.sim.particles().len()));
                ui.separator();
                ui.label(if self.running { "running" } else { "paused" });
            });
        });
    }

    /// Builds the central panel: a black square canvas with every particle
    /// drawn as a colored dot.
    fn ui_central_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let canvas = self.canvas_rect(response.rect);
            let painter = ui.painter_at(canvas);

            painter.rect_filled(canvas, egui::CornerRadius::ZERO, BACKGROUND);

            let scale = f64::from(canvas.width()) / self.sim.config().canvas_size;
            let dot_radius = ((scale * 0.5) as f32).max(1.0);

            for p in self.sim.particles() {
                // Positions land on whole canvas units before mapping.
                let pos = self.canvas_to_screen(p.pos.round(), canvas);
                painter.circle_filled(pos, dot_radius, fill_color(p.color));
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that drives one frame.
    ///
    /// This method:
    /// - Drains pending input; any key press rerolls the rule matrix.
    /// - Advances exactly one tick while running; events are only observed
    ///   between ticks, never during one.
    /// - Renders the control bar, rules panel, status bar, and canvas.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            self.randomize_rules();
        }

        if self.running {
            let now = ctx.input(|i| i.time);
            if self.last_step_time > 0.0 {
                self.last_step_dt = now - self.last_step_time;
            }
            self.step_once();
            self.last_step_time = now;
        }

        self.ui_top_panel(ctx);
        self.ui_rules_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);

        // Keep ticking while running; egui otherwise repaints only on input.
        if self.running {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(100.0, 50.0), egui::vec2(600.0, 400.0))
    }

    #[test]
    fn canvas_rect_is_a_centered_square() {
        let viewer = Viewer::new();
        let rect = test_rect();
        let canvas = viewer.canvas_rect(rect);

        assert_eq!(canvas.width(), canvas.height());
        assert_eq!(canvas.width(), 400.0);
        assert_eq!(canvas.center(), rect.center());
    }

    #[test]
    fn canvas_to_screen_maps_corners_onto_the_square() {
        let viewer = Viewer::new();
        let canvas = viewer.canvas_rect(test_rect());
        let size = viewer.sim.config().canvas_size;

        let eps = 1e-3;

        let top_left = viewer.canvas_to_screen(DVec2::ZERO, canvas);
        assert!((top_left.x - canvas.min.x).abs() < eps);
        assert!((top_left.y - canvas.min.y).abs() < eps);

        let bottom_right = viewer.canvas_to_screen(DVec2::new(size, size), canvas);
        assert!(
            (bottom_right.x - canvas.max.x).abs() < eps,
            "far corner x: {} vs {}",
            bottom_right.x,
            canvas.max.x
        );
        assert!((bottom_right.y - canvas.max.y).abs() < eps);
    }

    #[test]
    fn step_once_advances_the_tick_counter() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.steps, 0);

        viewer.step_once();
        viewer.step_once();

        assert_eq!(viewer.steps, 2);
        for p in viewer.sim.particles() {
            assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
        }
    }

    #[test]
    fn reset_rebuilds_the_population_and_zeroes_the_counter() {
        let mut viewer = Viewer::new();
        viewer.step_once();
        viewer.step_once();
        assert!(viewer.steps > 0);

        viewer.reset();

        assert_eq!(viewer.steps, 0);
        assert_eq!(viewer.sim.particles().len(), 600);
        assert_eq!(viewer.last_step_dt, 0.0);
    }

    #[test]
    fn particle_colors_are_distinct_and_never_the_background() {
        let colors = ParticleColor::ALL.map(fill_color);

        for (i, a) in colors.iter().enumerate() {
            assert_ne!(*a, BACKGROUND);
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
