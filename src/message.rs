use crate::model::{PatientRecord, VisitRecord};
use iced::widget::markdown;

#[derive(Debug, Clone)]
pub enum Message {
    PatientsLoaded(Result<Vec<PatientRecord>, String>),
    VisitsLoaded(Result<Vec<VisitRecord>, String>),
    SelectPatient(String),
    SelectVisit(usize),
    LinkClicked(markdown::Url),
}
