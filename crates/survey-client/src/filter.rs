//! List filtering.

use survey_sdk::SurveyRecord;

/// Filter surveys by name and date.
///
/// The name query is a case-insensitive substring match tested against the
/// first name, the last name, and the `"first last"` concatenation, so a
/// query spanning both names still matches. The date query is exact string
/// equality on `survey_date`. Both filters AND together when both are
/// non-empty. The source slice is untouched and output order preserves
/// input order.
pub fn filter_surveys(
    surveys: &[SurveyRecord],
    name_query: &str,
    date_query: &str,
) -> Vec<SurveyRecord> {
    let name_query = name_query.to_lowercase();

    surveys
        .iter()
        .filter(|survey| {
            if !name_query.is_empty() {
                let first = survey.first_name.to_lowercase();
                let last = survey.last_name.to_lowercase();
                let full = format!("{first} {last}");
                if !first.contains(&name_query)
                    && !last.contains(&name_query)
                    && !full.contains(&name_query)
                {
                    return false;
                }
            }
            if !date_query.is_empty() && survey.survey_date != date_query {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}
