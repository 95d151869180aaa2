use super::VisitRecord;
use chrono::NaiveDate;

/// Date formats accepted for visit ordering. Anything else still renders
/// (the raw string labels the tab) but sorts after every parsed date.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// All visits for one patient, tagged with their position in the source
/// table and sorted most recent first. The sort is stable, so visits with
/// equal (or unparseable) dates keep their source order.
pub fn visits_for_patient<'a>(
    visits: &'a [VisitRecord],
    patient_id: &str,
) -> Vec<(usize, &'a VisitRecord)> {
    let mut matches: Vec<(usize, &VisitRecord)> = visits
        .iter()
        .enumerate()
        .filter(|(_, visit)| visit.patient_id == patient_id)
        .collect();

    matches.sort_by(|(_, a), (_, b)| {
        parse_visit_date(&b.visit_date).cmp(&parse_visit_date(&a.visit_date))
    });

    matches
}

pub fn parse_visit_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(patient_id: &str, visit_date: &str) -> VisitRecord {
        VisitRecord {
            patient_id: patient_id.to_string(),
            visit_date: visit_date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filters_by_patient_id() {
        let visits = vec![
            visit("p1", "2024-01-01"),
            visit("p2", "2024-02-01"),
            visit("p1", "2024-03-01"),
        ];
        let matches = visits_for_patient(&visits, "p1");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|(_, v)| v.patient_id == "p1"));
    }

    #[test]
    fn test_sorts_most_recent_first() {
        let visits = vec![
            visit("p1", "2024-01-01"),
            visit("p1", "2024-03-01"),
            visit("p1", "2024-02-01"),
        ];
        let dates: Vec<&str> = visits_for_patient(&visits, "p1")
            .iter()
            .map(|(_, v)| v.visit_date.as_str())
            .collect();
        assert_eq!(dates, ["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_tags_source_indices() {
        let visits = vec![
            visit("p2", "2024-01-01"),
            visit("p1", "2024-01-01"),
            visit("p1", "2024-02-01"),
        ];
        let indices: Vec<usize> = visits_for_patient(&visits, "p1")
            .iter()
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(indices, [2, 1]);
    }

    #[test]
    fn test_equal_dates_keep_source_order() {
        let mut visits = vec![visit("p1", "2024-01-01"); 3];
        visits[0].attending_medic = "first".to_string();
        visits[2].attending_medic = "last".to_string();
        let matches = visits_for_patient(&visits, "p1");
        assert_eq!(matches[0].1.attending_medic, "first");
        assert_eq!(matches[2].1.attending_medic, "last");
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let visits = vec![
            visit("p1", "sometime in spring"),
            visit("p1", "2024-01-01"),
        ];
        let dates: Vec<&str> = visits_for_patient(&visits, "p1")
            .iter()
            .map(|(_, v)| v.visit_date.as_str())
            .collect();
        assert_eq!(dates, ["2024-01-01", "sometime in spring"]);
    }

    #[test]
    fn test_parse_visit_date_formats() {
        assert!(parse_visit_date("2024-01-31").is_some());
        assert!(parse_visit_date("01/31/2024").is_some());
        assert!(parse_visit_date("31 January 2024").is_some());
        assert!(parse_visit_date("January 31, 2024").is_some());
        assert!(parse_visit_date(" 2024-01-31 ").is_some());
        assert!(parse_visit_date("not a date").is_none());
        assert!(parse_visit_date("").is_none());
    }

    #[test]
    fn test_no_matches_for_unknown_patient() {
        let visits = vec![visit("p1", "2024-01-01")];
        assert!(visits_for_patient(&visits, "p9").is_empty());
    }
}
