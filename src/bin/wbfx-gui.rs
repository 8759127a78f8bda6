/*!
 * Desktop client for wbfx-rs - one country, one year, one indicator or exchange rate
 *
 * - Pick a country code, a year and what to look up
 * - The lookup runs on a background thread; the card shows loading, error or result
 * - Country names are fetched once at startup and used to label the card
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use std::sync::mpsc;
use std::thread;
use wbfx_rs::countries::CountryDirectory;
use wbfx_rs::format::Severity;
use wbfx_rs::models::Country;
use wbfx_rs::view::Card;
use wbfx_rs::{
    Config, FetchError, Metric, Payload, Query, RequestController, Sources, Ticket, controller,
};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 480.0])
            .with_min_inner_size([420.0, 360.0])
            .with_title("Social and Economic Indicators - wbfx"),
        ..Default::default()
    };

    eframe::run_native(
        "Social and Economic Indicators",
        options,
        Box::new(|_cc| Ok(Box::new(WbfxApp::new()))),
    )
}

type Completion = (Ticket, Result<Payload, FetchError>);

/// Main application state
struct WbfxApp {
    // Input fields
    country: String,
    metric: Metric,
    year: i32,

    sources: Option<Sources>,
    setup_error: String,
    input_error: String,
    directory: CountryDirectory,
    controller: RequestController,

    // Background operations
    sender: mpsc::Sender<Completion>,
    receiver: mpsc::Receiver<Completion>,
    countries_receiver: Option<mpsc::Receiver<Vec<Country>>>,
}

impl WbfxApp {
    fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        let (sources, setup_error) = match Config::from_env().and_then(|cfg| Sources::new(&cfg)) {
            Ok(s) => (Some(s), String::new()),
            Err(err) => (None, format!("Configuration error: {:#}", err)),
        };

        let mut app = Self {
            country: "BRA".to_string(),
            metric: Metric::ALL[0],
            year: 2000,
            sources,
            setup_error,
            input_error: String::new(),
            directory: CountryDirectory::default(),
            controller: RequestController::new(),
            sender,
            receiver,
            countries_receiver: None,
        };
        app.load_countries();
        app
    }

    /// Fetch the country list once; failures only cost us the names.
    fn load_countries(&mut self) {
        let Some(sources) = self.sources.clone() else {
            return;
        };
        let (tx, rx) = mpsc::channel();
        self.countries_receiver = Some(rx);
        thread::spawn(move || match sources.world_bank.fetch_countries() {
            Ok(list) => {
                let _ = tx.send(list);
            }
            Err(err) => log::warn!("country list unavailable: {:#}", err),
        });
    }

    fn start_lookup(&mut self) {
        self.input_error.clear();
        let Some(sources) = self.sources.clone() else {
            return;
        };
        let query = match Query::new(&self.country, self.metric, self.year) {
            Ok(q) => q,
            Err(err) => {
                self.input_error = format!("Validation error: {}", err);
                return;
            }
        };

        let ticket = self.controller.begin(&query);
        let sender = self.sender.clone();
        // No cancellation: an older thread may still finish, the controller drops it.
        thread::spawn(move || {
            let outcome = controller::resolve(&sources, &query);
            let _ = sender.send((ticket, outcome));
        });
    }

    fn check_results(&mut self) {
        while let Ok((ticket, outcome)) = self.receiver.try_recv() {
            self.controller.complete(ticket, outcome);
        }
        if let Some(rx) = &self.countries_receiver {
            match rx.try_recv() {
                Ok(list) => {
                    log::debug!("loaded {} countries", list.len());
                    self.directory = CountryDirectory::new(list);
                    self.countries_receiver = None;
                }
                // Worker gave up; card labels fall back to codes.
                Err(mpsc::TryRecvError::Disconnected) => self.countries_receiver = None,
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
    }

    fn show_card(&self, ui: &mut egui::Ui) {
        // Label with the country that was queried, not whatever is typed now.
        let name = match self.controller.state().result() {
            Some(Payload::Indicator(r)) => self.directory.name(&r.country),
            _ => None,
        };
        let card = Card::from_state(self.controller.view(), self.controller.state(), name);
        match &card {
            Card::Idle => {}
            Card::Loading { .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(card.to_string());
                });
            }
            Card::Failed { message, .. } => {
                ui.colored_label(egui::Color32::GRAY, message);
            }
            Card::Indicator {
                country,
                indicator,
                value,
                year,
            } => {
                ui.group(|ui| {
                    ui.label(egui::RichText::new(country).strong());
                    ui.label(indicator.label());
                    ui.heading(&value.display);
                    ui.colored_label(
                        severity_color(value.classification.severity),
                        value.classification.label,
                    );
                    ui.weak(format!("Year: {}", year));
                });
            }
            Card::Exchange { display, .. } => {
                ui.group(|ui| {
                    ui.label(egui::RichText::new("Exchange rate").strong());
                    ui.heading(display);
                    ui.weak("Current rate (market reference)");
                });
            }
        }
    }
}

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Danger => egui::Color32::from_rgb(220, 53, 69),
        Severity::Warning => egui::Color32::from_rgb(255, 193, 7),
        Severity::Success => egui::Color32::from_rgb(25, 135, 84),
        Severity::Primary => egui::Color32::from_rgb(13, 110, 253),
        Severity::Secondary => egui::Color32::from_rgb(108, 117, 125),
    }
}

impl eframe::App for WbfxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_results();

        // Keep polling while work is outstanding (spinner, late results)
        if self.controller.state().is_loading() || self.countries_receiver.is_some() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Social and Economic Indicators");
            ui.label("Social and economic indicators and exchange rates by country");
            ui.add_space(10.0);

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Country:");
                    ui.text_edit_singleline(&mut self.country)
                        .on_hover_text("ISO3 country code (e.g., BRA, USA, DEU)");
                    if let Some(name) = self.directory.name(&self.country) {
                        ui.weak(name);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Year:");
                    ui.add(egui::DragValue::new(&mut self.year).range(Query::MIN_YEAR..=2030));
                });

                ui.horizontal(|ui| {
                    ui.label("Show:");
                    egui::ComboBox::from_id_salt("metric")
                        .selected_text(self.metric.label())
                        .show_ui(ui, |ui| {
                            for m in Metric::ALL {
                                ui.selectable_value(&mut self.metric, m, m.label());
                            }
                        });
                });
            });

            ui.add_space(10.0);

            if ui
                .add_enabled(self.sources.is_some(), egui::Button::new("Fetch data"))
                .clicked()
            {
                self.start_lookup();
            }

            ui.add_space(10.0);

            if !self.setup_error.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.setup_error);
            }
            if !self.input_error.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.input_error);
            }

            self.show_card(ui);
        });
    }
}
