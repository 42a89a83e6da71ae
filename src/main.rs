use flipbox::cli::Args;
use flipbox::command::{Command, Reply, dispatch};
use flipbox::component::FlipBox;
use flipbox::config;
use flipbox::core::{FlipEvent, event_channel};
use flipbox::options::FlipOptions;
use flipbox::widgets::{FlipBoxView, PanelContent};

use clap::Parser;
use crossbeam_channel::Receiver;
use eframe::egui;
use log::{debug, info, warn};
use std::time::Duration;
use uuid::Uuid;

/// Demo panel: a colored card with a label.
#[derive(Debug, Clone)]
struct DemoPanel {
    id: Uuid,
    label: String,
    fill: egui::Color32,
}

const PALETTE: &[egui::Color32] = &[
    egui::Color32::from_rgb(0xc0, 0x5b, 0x4d),
    egui::Color32::from_rgb(0x4d, 0x7a, 0xc0),
    egui::Color32::from_rgb(0x50, 0x9c, 0x62),
    egui::Color32::from_rgb(0xb8, 0x8c, 0x3a),
    egui::Color32::from_rgb(0x8a, 0x5d, 0xb0),
    egui::Color32::from_rgb(0x3a, 0x9c, 0x96),
];

impl DemoPanel {
    fn new(ordinal: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: format!("Panel {}", ordinal + 1),
            fill: PALETTE[ordinal % PALETTE.len()],
        }
    }
}

impl PanelContent for DemoPanel {
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 6.0, self.fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &self.label,
            egui::FontId::proportional(28.0),
            egui::Color32::WHITE,
        );
        // Panel identity tag, handy when panels get added/replaced
        let tag = self.id.simple().to_string();
        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            &tag[..8],
            egui::FontId::monospace(10.0),
            egui::Color32::from_white_alpha(140),
        );
    }
}

/// Demo application state
struct FlipBoxApp {
    /// Component slot - emptied when a Destroy command lands
    slot: Option<FlipBox<DemoPanel>>,
    view: FlipBoxView<DemoPanel>,
    events: Receiver<FlipEvent>,
    hovered: bool,
    focused: bool,
    /// Ordinal for the next panel added with the A key
    panel_counter: usize,
}

impl FlipBoxApp {
    fn new(flipbox: FlipBox<DemoPanel>, view: FlipBoxView<DemoPanel>, events: Receiver<FlipEvent>) -> Self {
        let panel_counter = flipbox.size();
        Self {
            slot: Some(flipbox),
            view,
            events,
            hovered: false,
            focused: true,
            panel_counter,
        }
    }

    /// Window focus/blur policy: blur always pauses, focus resumes
    /// whenever autoplay is configured on.
    fn apply_focus_policy(&mut self, focused: bool) {
        if focused == self.focused {
            return;
        }
        self.focused = focused;
        if let Some(flipbox) = self.slot.as_mut() {
            let enabled = focused && flipbox.options().autoplay;
            debug!("window focus {} -> autoplay {}", focused, enabled);
            flipbox.toggle_autoplay(enabled);
        }
    }

    /// Hover policy: only active when configured, and only while
    /// autoplay is on at all.
    fn apply_hover_policy(&mut self, hovered: bool) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if let Some(flipbox) = self.slot.as_mut() {
            let options = flipbox.options();
            if options.autoplay && options.autoplay_pause_on_hover {
                flipbox.toggle_autoplay(!hovered);
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let mut commands: Vec<Command<DemoPanel>> = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                commands.push(Command::Next { reverse: false });
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                commands.push(Command::Prev { reverse: true });
            }
            if i.key_pressed(egui::Key::Home) {
                commands.push(Command::Jump {
                    index: 0,
                    reverse: true,
                });
            }
            if i.key_pressed(egui::Key::End) {
                commands.push(Command::Jump {
                    index: usize::MAX,
                    reverse: false,
                });
            }
            if i.key_pressed(egui::Key::A) {
                commands.push(Command::Add {
                    panel: DemoPanel::new(self.panel_counter),
                    index: None,
                });
                self.panel_counter += 1;
            }
            if i.key_pressed(egui::Key::R) {
                commands.push(Command::Replace {
                    panel: DemoPanel::new(self.panel_counter),
                    index: None,
                });
                self.panel_counter += 1;
            }
            if i.key_pressed(egui::Key::X) || i.key_pressed(egui::Key::Delete) {
                if let Some(flipbox) = self.slot.as_ref() {
                    commands.push(Command::Remove {
                        index: flipbox.current(),
                    });
                }
            }
        });
        for command in commands {
            let reply = dispatch(&mut self.slot, command, &mut self.view);
            if let Reply::Panels(panels) = reply {
                info!("destroyed, {} panels returned", panels.len());
            }
        }
    }
}

impl eframe::App for FlipBoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let focused = ctx.input(|i| i.focused);
        self.apply_focus_policy(focused);
        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(flipbox) = self.slot.as_ref() {
                    ui.label(format!(
                        "panel {}/{}  •  arrows flip, A adds, R replaces, X removes",
                        flipbox.current() + 1,
                        flipbox.size()
                    ));
                }
                ui.add_space(8.0);
                let response = self.view.show(ui);
                self.apply_hover_policy(response.hovered());
            });
        });

        // Pump autoplay and the completion signal
        if let Some(flipbox) = self.slot.as_mut() {
            flipbox.tick(&mut self.view);
            if let Some(ticket) = self.view.take_completed() {
                flipbox.complete_transition(ticket);
            }
        }

        // Drain lifecycle events into the log
        while let Ok(event) = self.events.try_recv() {
            debug!("event: {event:?}");
        }

        // Keep ticking while autoplay may be armed
        ctx.request_repaint_after(Duration::from_millis(33));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let default_level = match args.verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .filter_module("egui", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    info!("flipbox demo starting");

    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());
    if let Err(e) = config::ensure_dirs(&path_config) {
        warn!("failed to create config directory: {e:#}");
    }

    // Persisted options first, CLI overrides on top
    let mut options = config::load_options(&path_config).unwrap_or_else(|e| {
        warn!("ignoring options file: {e:#}");
        FlipOptions::default()
    });
    options.vertical = args.vertical || options.vertical;
    options.autoplay = args.autoplay || options.autoplay;
    options.autoplay_reverse = args.autoplay_reverse || options.autoplay_reverse;
    options.autoplay_pause_on_hover = args.pause_on_hover || options.autoplay_pause_on_hover;
    if let Some(index) = args.index {
        options.index = index;
    }
    if let Some(wait) = args.wait {
        options.autoplay_wait_ms = wait;
    }
    if let Some(duration) = args.duration {
        options.animation_duration_ms = duration;
    }
    if let Some(ref easing) = args.easing {
        options.animation_easing = easing.clone();
    }
    if let Err(e) = config::save_options(&options, &path_config) {
        warn!("failed to persist options: {e:#}");
    }

    let panels: Vec<DemoPanel> = (0..args.panels.max(1)).map(DemoPanel::new).collect();

    let (sender, receiver) = event_channel();
    let flipbox = FlipBox::new(panels, options.clone(), sender)?;
    let mut view = FlipBoxView::new(flipbox.options());
    flipbox.mount(&mut view);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Flipbox v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([options.width + 80.0, options.height + 120.0])
            .with_resizable(true),
        ..Default::default()
    };

    let app = FlipBoxApp::new(flipbox, view, receiver);
    eframe::run_native("flipbox", native_options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}
