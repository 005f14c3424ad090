// ui.rs - egui front end: controls, pattern inventory, mana bar and the grid

use eframe::egui;
use egui::{RichText, Vec2};
use life_core::{LifeError, Placed};

use crate::view;
use crate::ManaLife;

impl eframe::App for ManaLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.deliver_ticks();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Mana Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.sim.is_running() { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    self.sim.on_toggle_run_pause(&mut self.scheduler);
                }

                if ui.button("⏹ Clear").clicked() {
                    self.sim.reset(false, &mut self.frame);
                }

                if ui.button("🎲 Random").clicked() {
                    self.sim.reset(true, &mut self.frame);
                }

                ui.separator();

                let state = self.sim.state();
                ui.label(format!("Generation: {}", state.generation()));
                ui.label(format!("Live cells: {}", state.grid().population()));
            });

            ui.separator();

            // Pattern inventory; unaffordable slots stay selectable but greyed
            ui.horizontal(|ui| {
                ui.label("Pattern:");
                let catalog = *self.sim.state().catalog();
                for pattern in catalog.iter() {
                    let selected = self.sim.state().selected().name == pattern.name;
                    let affordable = self.frame.is_affordable(pattern.name).unwrap_or(true);
                    let mut label = RichText::new(pattern.label()).strong();
                    if !affordable {
                        label = label.color(view::SLOT_DISABLED_COLOR);
                    }
                    if ui.selectable_label(selected, label).on_hover_text(pattern.title()).clicked() {
                        if let Err(e) = self.sim.on_pattern_select(pattern.name, &mut self.frame) {
                            unreachable!("inventory slot not in catalog: {e}");
                        }
                    }
                }
            });

            if let (Some(fraction), Some(ledger)) =
                (self.frame.mana_fraction(), self.sim.state().gate().ledger())
            {
                ui.add(
                    egui::ProgressBar::new(fraction as f32)
                        .text(format!("Mana {:.2} / {}", ledger.current(), ledger.max())),
                );
            }

            ui.separator();

            // Grid
            let resolution = self.config.resolution as f32;
            let size = Vec2::new(
                self.config.display_width as f32,
                self.config.display_height as f32,
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            let origin = response.rect.min;

            let hovered = response
                .hover_pos()
                .and_then(|pos| self.config.cell_at(pos.x - origin.x, pos.y - origin.y));
            if hovered != self.hovered {
                match hovered {
                    Some((col, row)) => self.sim.on_pointer_move(col, row, &mut self.frame),
                    None => self.sim.on_pointer_leave(&mut self.frame),
                }
                self.hovered = hovered;
            }

            if response.clicked() {
                let clicked = response
                    .interact_pointer_pos()
                    .and_then(|pos| self.config.cell_at(pos.x - origin.x, pos.y - origin.y));
                if let Some((col, row)) = clicked {
                    self.status = match self.sim.on_pointer_click(col, row, &mut self.frame) {
                        Ok(Placed { pattern, cells, cost }) => {
                            format!("Placed {pattern} at ({col}, {row}): {cells} cells for {cost} mana")
                        }
                        Err(LifeError::Refused(refusal)) => {
                            log::debug!("click at ({col}, {row}) refused: {refusal}");
                            format!("Refused: {refusal}")
                        }
                        Err(e) => unreachable!("click mapped inside the grid failed: {e}"),
                    };
                }
            }

            view::paint_grid(&painter, origin, resolution, &self.frame);

            ui.separator();
            ui.label(self.status.as_str());
        });
    }
}
