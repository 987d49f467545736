//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_config, ValidationLevel},
    dashboard::{Dashboard, ExportAction, ExportOutcome, Tab},
    error::{AppError, Result},
    interactive::InteractiveSession,
    logging::{Logger, LoggerFactory},
    models::{load_records, sample_records, Config, MeasurementRecord},
    output::{OutputCoordinator, OutputFormatterFactory},
    view::{SortDirective, SortKey, TabularDataView},
};
use std::io::{BufRead, Write};

/// How the dashboard is written out after the CLI interactions are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The active tab only
    Active,
    /// Every tab in order
    All,
    /// The current view snapshot as JSON
    Json,
}

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
    config: Config,
    dashboard: Dashboard,
    coordinator: OutputCoordinator,
    logger: Logger,
    mode: RenderMode,
}

impl App {
    /// Create a new application instance from CLI arguments, loading configuration
    pub fn new(cli: Cli) -> Result<Self> {
        cli.validate().map_err(AppError::validation)?;
        let config = load_config(cli.clone())?;
        Self::with_config(cli, config)
    }

    /// Create an application from an already layered configuration
    pub fn with_config(cli: Cli, config: Config) -> Result<Self> {
        let factory = LoggerFactory::new(config.clone());
        let logger = factory.create_logger("app");

        if config.debug {
            logger.debug("Configuration loaded")
                .field("summary", display_config_summary(&config))
                .field("session_id", factory.session_id())
                .log();
        }

        let records = Self::load_dataset(&config, &logger)?;

        for warning in validate_config(&config, &records)? {
            match warning.level {
                ValidationLevel::Info => crate::log_info!(logger, "{}", warning.format()),
                ValidationLevel::Warning => crate::log_warn!(logger, "{}", warning.format()),
            }
        }

        let use_colors = config.enable_color && cli.use_colors();
        let coordinator = OutputCoordinator::new(OutputFormatterFactory::create_formatter(use_colors));
        let dashboard = Dashboard::with_config(TabularDataView::new(records), &config);

        let mode = if cli.json {
            RenderMode::Json
        } else if cli.all {
            RenderMode::All
        } else {
            RenderMode::Active
        };

        let mut app = Self {
            cli,
            config,
            dashboard,
            coordinator,
            logger,
            mode,
        };
        app.apply_cli_interactions()?;

        Ok(app)
    }

    fn load_dataset(config: &Config, logger: &Logger) -> Result<Vec<MeasurementRecord>> {
        match config.data_file {
            Some(ref path) => {
                let records = load_records(path).map_err(|e| {
                    logger.error("Dataset could not be loaded")
                        .field("path", path.display().to_string())
                        .error_info(&e)
                        .log();
                    e
                })?;
                logger.debug("Dataset loaded")
                    .field("path", path.display().to_string())
                    .field("records", records.len())
                    .log();
                Ok(records)
            }
            None => {
                crate::log_debug!(logger, "Using built-in sample dataset");
                Ok(sample_records())
            }
        }
    }

    /// Replay `--search` and `--sort` in the order a user would click
    fn apply_cli_interactions(&mut self) -> Result<()> {
        if let Some(term) = self.cli.search.clone() {
            self.search(&term);
        }

        for key in self.cli.sort_keys()? {
            self.sort(key);
        }

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn coordinator(&self) -> &OutputCoordinator {
        &self.coordinator
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Replace the search text
    pub fn search(&mut self, term: &str) {
        self.dashboard.view_mut().set_search(term);
        self.logger.debug("Search changed")
            .field("term", term)
            .field("visible", self.dashboard.view().visible_records().len())
            .log();
    }

    /// Click the header for `key`
    pub fn sort(&mut self, key: SortKey) -> SortDirective {
        let directive = self.dashboard.view_mut().toggle_sort(key);
        self.logger.debug("Sort toggled")
            .field("key", key.as_str())
            .field("direction", directive.direction)
            .log();
        directive
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.dashboard.select_tab(tab);
        crate::log_debug!(self.logger, "Tab selected: {}", tab.key());
    }

    /// Press an export button
    pub fn export(&self, action: ExportAction) -> ExportOutcome {
        let outcome = self.dashboard.press_export(action);
        self.logger.debug("Export requested")
            .field("action", action.key())
            .field("filtered_only", self.dashboard.export.settings.filtered_only)
            .log();
        outcome
    }

    /// Render the dashboard according to the selected mode
    pub fn render(&self) -> Result<String> {
        match self.mode {
            RenderMode::Active => self.coordinator.render_active(&self.dashboard),
            RenderMode::All => self.coordinator.render_all(&self.dashboard),
            RenderMode::Json => self.coordinator.render_json(&self.dashboard),
        }
    }

    /// Run the application, writing rendered output to `output`
    ///
    /// `input` is only read in interactive mode.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        if let Some(action) = self.cli.export_action()? {
            let message = self.export(action).message();
            if self.mode == RenderMode::Json {
                eprintln!("{}", message);
            } else {
                writeln!(output, "{}\n", self.coordinator.formatter().format_warning(&message)?)?;
            }
        }

        writeln!(output, "{}", self.render()?)?;

        if self.cli.interactive {
            crate::log_info!(self.logger, "Interactive session started");
            let use_colors = self.config.enable_color && self.cli.use_colors();
            InteractiveSession::new(self, use_colors).run(input, output)?;
        }

        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn app(args: &[&str]) -> App {
        let mut argv = vec!["speed-analytics", "--no-color"];
        argv.extend_from_slice(args);
        let cli = Cli::parse_from(argv);
        let mut config = Config::default();
        config.enable_color = false;
        App::with_config(cli, config).unwrap()
    }

    fn run(app: &mut App) -> String {
        let mut output = Vec::new();
        app.run(Cursor::new(Vec::new()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_cli_interactions_replayed_in_order() {
        let app = app(&["--search", "moscow", "--sort", "speed", "--sort", "speed"]);
        let ids: Vec<u32> = app.dashboard().view().visible_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 8, 1, 3]);
    }

    #[test]
    fn test_render_modes() {
        assert_eq!(app(&[]).mode(), RenderMode::Active);
        assert_eq!(app(&["--all"]).mode(), RenderMode::All);
        assert_eq!(app(&["--json"]).mode(), RenderMode::Json);
    }

    #[test]
    fn test_run_renders_table() {
        let output = run(&mut app(&["--search", "kazan"]));
        assert!(output.contains("Speed Analytics"));
        assert!(output.contains("Netflix"));
        assert!(!output.contains("Yandex"));
    }

    #[test]
    fn test_run_export_placeholder() {
        let output = run(&mut app(&["--export", "csv"]));
        assert!(output.contains("Export to CSV: not available"));
    }

    #[test]
    fn test_run_json() {
        let output = run(&mut app(&["--json", "--search", "upload"]));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["visibleCount"], 2);
        assert_eq!(value["aggregates"]["totalCount"], 8);
    }

    #[test]
    fn test_default_tab_from_config() {
        let cli = Cli::parse_from(["speed-analytics", "--no-color"]);
        let mut config = Config::default();
        config.default_tab = Tab::Help;
        let app = App::with_config(cli, config).unwrap();
        assert_eq!(app.dashboard().active_tab(), Tab::Help);
        assert!(app.render().unwrap().contains("Sorting data"));
    }

    #[test]
    fn test_dataset_file_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("speeds.json");
        std::fs::write(&path, r#"[
            {"id": 1, "service": "Rutube", "testType": "Streaming", "speed": 64.0, "unit": "Mbps",
             "status": "Good", "location": "Samara", "date": "2024-09-01"}
        ]"#).unwrap();

        let cli = Cli::parse_from(["speed-analytics", "--no-color"]);
        let mut config = Config::default();
        config.data_file = Some(path);
        let app = App::with_config(cli, config).unwrap();

        assert_eq!(app.dashboard().view().records().len(), 1);
        assert_eq!(app.dashboard().view().records()[0].service, "Rutube");
    }

    #[test]
    fn test_invalid_dataset_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("speeds.json");
        std::fs::write(&path, "{not json").unwrap();

        let cli = Cli::parse_from(["speed-analytics", "--no-color"]);
        let mut config = Config::default();
        config.data_file = Some(path);
        let error = App::with_config(cli, config).err().unwrap();
        assert_eq!(error.category(), "PARSE");
    }
}
