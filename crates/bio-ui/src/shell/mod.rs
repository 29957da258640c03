use egui::{Context, TopBottomPanel, Ui};

/// Render the application header bar: title on the left, the catalog the
/// client is talking to on the right.
pub fn header_bar(ctx: &Context, catalog_label: &str) {
    TopBottomPanel::top("header_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Biographica");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(catalog_label)
                        .small()
                        .color(crate::theme::muted_color()),
                );
            });
        });
    });
}

/// Framed error banner for failures that the user can recover from.
pub fn error_banner(ui: &mut Ui, message: &str) {
    egui::Frame::none()
        .fill(crate::theme::error_color().linear_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, crate::theme::error_color()))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").color(crate::theme::error_color()));
                ui.label(message);
            });
        });
}

/// Centered muted notice for empty states.
pub fn empty_notice(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new(message).color(crate::theme::muted_color()));
        ui.add_space(24.0);
    });
}
