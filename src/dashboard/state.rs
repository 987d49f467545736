use crate::models::Config;
use crate::view::TabularDataView;

use super::{DisplaySettings, ExportAction, ExportOutcome, ExportPanel, NotificationSettings, Tab};

/// Whole dashboard: the data view plus panel state and the selected tab
#[derive(Debug, Clone)]
pub struct Dashboard {
    view: TabularDataView,
    active_tab: Tab,
    pub display: DisplaySettings,
    pub notifications: NotificationSettings,
    pub export: ExportPanel,
}

impl Dashboard {
    pub fn new(view: TabularDataView) -> Self {
        Self {
            view,
            active_tab: Tab::Table,
            display: DisplaySettings::default(),
            notifications: NotificationSettings::default(),
            export: ExportPanel::default(),
        }
    }

    /// Dashboard with the initial tab and toggle states taken from `config`
    pub fn with_config(view: TabularDataView, config: &Config) -> Self {
        Self {
            view,
            active_tab: config.default_tab,
            display: config.display.clone(),
            notifications: config.notifications.clone(),
            export: ExportPanel::new(config.export.clone()),
        }
    }

    pub fn view(&self) -> &TabularDataView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TabularDataView {
        &mut self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Press one of the export buttons
    pub fn press_export(&self, action: ExportAction) -> ExportOutcome {
        self.export.trigger(action)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(TabularDataView::default())
    }
}
