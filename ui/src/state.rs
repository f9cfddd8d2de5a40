use alumni_business::{AlumniRecord, load_records, parse_records};

use crate::config::AppConfig;
use crate::widgets::AlumniTableState;

/// Dataset shown when no path is configured.
const SAMPLE_DATA: &str = include_str!("../assets/alumni.json");

/// The main application state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Alumni records supplied by the host; never modified by the table.
    pub records: Vec<AlumniRecord>,
    /// Text of the search box.
    pub search_query: String,
    /// State of the alumni table widget.
    pub table: AlumniTableState,
}

impl State {
    pub fn new(records: Vec<AlumniRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Builds the state described by `config`.
    ///
    /// A dataset that cannot be loaded is logged and replaced by an empty one.
    pub fn from_config(config: &AppConfig) -> Self {
        let records = match &config.alumni_data {
            Some(path) => load_records(path).unwrap_or_else(|err| {
                log::error!("{err}");
                Vec::new()
            }),
            None => sample_records(),
        };

        Self {
            records,
            search_query: config.alumni_query.clone().unwrap_or_default(),
            table: AlumniTableState::new(),
        }
    }
}

/// The bundled sample dataset.
pub fn sample_records() -> Vec<AlumniRecord> {
    parse_records(SAMPLE_DATA).unwrap_or_else(|err| {
        log::error!("bundled sample dataset is invalid: {err}");
        Vec::new()
    })
}
