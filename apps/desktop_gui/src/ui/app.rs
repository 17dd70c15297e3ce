use eframe::egui;
use form_core::{FormAction, FormFields};

use crate::{
    backend_bridge::Backend,
    controller::{
        events::{action_label, ACTION_ROW},
        orchestration::dispatch_form_action,
    },
    ui::dialogs::NativeDialogs,
};

pub struct BankDeskApp {
    backend: Backend,
    dialogs: NativeDialogs,
}

impl BankDeskApp {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            dialogs: NativeDialogs,
        }
    }

    fn show_details(&mut self, ui: &mut egui::Ui, requested: &mut Option<FormAction>) {
        let locked = self.backend.form().is_locked();
        let fields: &mut FormFields = self.backend.form_mut().fields_mut();

        ui.group(|ui| {
            ui.heading("Account Holder Details");
            egui::Grid::new("account_details")
                .num_columns(3)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Account Number:");
                    ui.add_enabled(
                        !locked,
                        egui::TextEdit::singleline(&mut fields.account_number)
                            .desired_width(240.0),
                    );
                    if ui.button(action_label(FormAction::Fetch)).clicked() {
                        *requested = Some(FormAction::Fetch);
                    }
                    ui.end_row();

                    text_row(ui, "Full Name:", &mut fields.full_name);
                    text_row(ui, "Date of Birth (YYYY-MM-DD):", &mut fields.date_of_birth);
                    text_row(ui, "Phone Number:", &mut fields.phone_number);
                    text_row(ui, "Balance:", &mut fields.balance);
                });
        });
    }

    fn show_history(&mut self, ui: &mut egui::Ui) {
        let fields = self.backend.form_mut().fields_mut();
        ui.group(|ui| {
            ui.heading("Transaction History");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut fields.transaction_history)
                        .desired_rows(12)
                        .desired_width(f32::INFINITY),
                );
            });
        });
    }
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(240.0));
    ui.end_row();
}

impl eframe::App for BankDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut requested = None;

        egui::TopBottomPanel::bottom("form_actions").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for action in ACTION_ROW {
                    if ui.button(action_label(action)).clicked() {
                        requested = Some(action);
                    }
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_details(ui, &mut requested);
            ui.add_space(8.0);
            self.show_history(ui);
        });

        if let Some(action) = requested {
            let notice = dispatch_form_action(&mut self.backend, action, &mut self.dialogs);
            self.dialogs.show_notice(&notice);
        }
    }
}
