use alumni_business::AlumniRecord;
use alumni_ui::widgets::{AlumniTableState, TableResponse, alumni_table};
use egui_kittest::Harness;

/// Wide enough that every column is laid out without horizontal scrolling.
pub const HARNESS_SIZE: egui::Vec2 = egui::vec2(1400.0, 800.0);

/// Host state for driving the table widget on its own.
#[allow(unused)]
pub struct TableHost {
    pub records: Vec<AlumniRecord>,
    pub query: String,
    pub table: AlumniTableState,
    /// Response of the most recent frame.
    pub last: TableResponse,
    /// Every link activated so far.
    pub opened: Vec<String>,
}

impl TableHost {
    #[allow(unused)]
    pub fn new(records: Vec<AlumniRecord>, query: &str) -> Self {
        Self {
            records,
            query: query.to_owned(),
            table: AlumniTableState::new(),
            last: TableResponse::default(),
            opened: Vec::new(),
        }
    }
}

#[allow(unused)]
pub fn table_harness(records: Vec<AlumniRecord>, query: &str) -> Harness<'static, TableHost> {
    let app = |ui: &mut egui::Ui, host: &mut TableHost| {
        let response = alumni_table(ui, &mut host.table, &host.records, &host.query);
        if let Some(url) = &response.opened_link {
            host.opened.push(url.clone());
        }
        host.last = response;
    };

    Harness::builder()
        .with_size(HARNESS_SIZE)
        .build_ui_state(app, TableHost::new(records, query))
}

/// Steps enough frames for a click to be handled and the result drawn.
#[allow(unused)]
pub fn settle<State>(harness: &mut Harness<'_, State>) {
    for _ in 0..3 {
        harness.step();
    }
}

#[allow(unused)]
pub fn record(name: &str, class: &str, linkedin: &str) -> AlumniRecord {
    AlumniRecord {
        name: name.to_owned(),
        class: class.to_owned(),
        family: "Linden".to_owned(),
        industry: "Software".to_owned(),
        company: "Initech".to_owned(),
        linkedin: linkedin.to_owned(),
        title: "Engineer".to_owned(),
    }
}

/// The Alice/Bob pair used by the filtering scenarios.
pub fn alice_and_bob() -> Vec<AlumniRecord> {
    vec![
        record("Alice", "2020", ""),
        record("Bob", "2019", "https://linkedin.com/bob"),
    ]
}
