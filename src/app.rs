use crate::message::Message;
use crate::model::loader::{load_patients, load_visits};
use crate::model::{PatientDetail, PatientRecord, VisitDetail, VisitRecord};
use crate::views::{patient_panel, sidebar_panel};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, scrollable, text};
use iced::{application, Element, Length, Task, Theme};

const APP_TITLE: &str = "Chartbook";

// Published spreadsheet exports for the unit's roster and visit log.
const DEFAULT_PATIENTS_URL: &str = "https://docs.google.com/spreadsheets/d/1lCdnYH1rMBAG9mh_9ncNZeFwMvJJebRk8K7f1BRHhxQ/export?format=csv&gid=0";
const DEFAULT_VISITS_URL: &str = "https://docs.google.com/spreadsheets/d/1FhxF4wHA3rUudwqN1ewn7c3xDJfnkbI0BZ-Sc83bPVY/export?format=csv&gid=0";

const PATIENTS_URL_VAR: &str = "CHARTBOOK_PATIENTS_URL";
const VISITS_URL_VAR: &str = "CHARTBOOK_VISITS_URL";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(App::boot)
}

#[derive(Default)]
pub struct App {
    patients: Vec<PatientRecord>,
    visits: Vec<VisitRecord>,
    selected_patient: Option<String>,
    selected_visit: Option<usize>,
    patient_detail: Option<PatientDetail>,
    visit_detail: Option<VisitDetail>,
    last_error: Option<String>,
}

impl App {
    fn boot() -> (Self, Task<Message>) {
        let patients_url = endpoint(PATIENTS_URL_VAR, DEFAULT_PATIENTS_URL);
        let visits_url = endpoint(VISITS_URL_VAR, DEFAULT_VISITS_URL);

        (
            Self::default(),
            Task::batch([
                Task::perform(load_patients(patients_url), Message::PatientsLoaded),
                Task::perform(load_visits(visits_url), Message::VisitsLoaded),
            ]),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PatientsLoaded(Ok(patients)) => {
                self.patients = patients;
                Task::none()
            }
            Message::VisitsLoaded(Ok(visits)) => {
                self.visits = visits;
                // The visit table can resolve after a patient was already
                // selected; rebuild the chart so its visits appear.
                if let Some(patient_id) = self.selected_patient.clone() {
                    self.show_patient(&patient_id);
                }
                Task::none()
            }
            Message::PatientsLoaded(Err(err)) | Message::VisitsLoaded(Err(err)) => {
                self.record_error(err);
                Task::none()
            }
            Message::SelectPatient(patient_id) => {
                self.show_patient(&patient_id);
                Task::none()
            }
            Message::SelectVisit(index) => {
                if let Some(visit) = self.visits.get(index) {
                    self.selected_visit = Some(index);
                    self.visit_detail = Some(VisitDetail::build(visit));
                }
                Task::none()
            }
            Message::LinkClicked(url) => {
                log::debug!("Ignoring link in chart content: {url}");
                Task::none()
            }
        }
    }

    /// Rebuilds the chart for the first record matching `patient_id`,
    /// auto-selecting the most recent visit. Unknown ids leave the
    /// displayed state untouched.
    fn show_patient(&mut self, patient_id: &str) {
        let Some(patient) = self
            .patients
            .iter()
            .find(|patient| patient.patient_id == patient_id)
        else {
            return;
        };

        let detail = PatientDetail::build(patient, &self.visits);
        let first_visit = detail.tabs.first().map(|tab| tab.source_index);

        self.selected_patient = Some(patient_id.to_string());
        self.selected_visit = first_visit;
        self.visit_detail = first_visit
            .and_then(|index| self.visits.get(index))
            .map(VisitDetail::build);
        self.patient_detail = Some(detail);
    }

    fn record_error(&mut self, err: String) {
        match &mut self.last_error {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(&err);
            }
            None => self.last_error = Some(err),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let roster = sidebar_panel(&self.patients, self.selected_patient.as_deref());
        let roster_panel = container(scrollable(roster))
            .padding(16)
            .width(Length::FillPortion(1));

        let chart = patient_panel(
            self.patient_detail.as_ref(),
            self.visit_detail.as_ref(),
            self.selected_visit,
            !self.patients.is_empty(),
        );
        let chart_panel = container(scrollable(chart))
            .padding(16)
            .width(Length::FillPortion(3))
            .height(Length::Fill);

        let mut content = column![row![roster_panel, chart_panel]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)]
        .spacing(16);

        if let Some(error) = &self.last_error {
            content = content.push(text(error).size(16).wrapping(Wrapping::Word));
        }

        content.padding(20).into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn endpoint(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
