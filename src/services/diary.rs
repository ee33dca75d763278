use crate::models::{date::Date, diary::DiaryEntry, document::LogDocument};

/// Adds a diary entry stamped with today's date and returns it.
pub fn add_diary_entry(document: &mut LogDocument, name: String, body: String) -> DiaryEntry {
    add_diary_entry_on(document, name, body, Date::today())
}

/// Same as `add_diary_entry` with an explicit date. The date is expected
/// at day granularity (time fields zero), matching `Date::today()`.
pub fn add_diary_entry_on(
    document: &mut LogDocument,
    name: String,
    body: String,
    date: Date,
) -> DiaryEntry {
    let entry = DiaryEntry {
        id: document.diary_entries.len() as i32 + 1,
        date,
        name,
        body,
    };
    document.diary_entries.push(entry.clone());
    entry
}

/// Dates with diary activity, most recent first.
///
/// Today is included even before the first entry of the day exists, so the
/// listing always offers a slot for "write today's entry". Dates from
/// multiple same-day entries are kept as-is.
pub fn sorted_diary_dates(document: &LogDocument) -> Vec<Date> {
    sorted_diary_dates_from(document, Date::today())
}

/// Same as `sorted_diary_dates` with an explicit "today".
pub fn sorted_diary_dates_from(document: &LogDocument, today: Date) -> Vec<Date> {
    let mut dates: Vec<Date> = document.diary_entries.iter().map(|entry| entry.date).collect();
    if !dates.iter().any(|date| date.same_day(&today)) {
        dates.push(today);
    }
    dates.sort_by(|a, b| b.ymd().cmp(&a.ymd()));
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i16, month: i16, day: i16) -> Date {
        Date {
            day,
            month,
            year,
            ..Date::default()
        }
    }

    #[test]
    fn test_entries_get_sequential_ids_and_day_dates() {
        let mut document = LogDocument::named("journal");
        let today = date(2024, 2, 10);

        let first = add_diary_entry_on(&mut document, "Morning".into(), "...".into(), today);
        let second = add_diary_entry_on(&mut document, "Evening".into(), "...".into(), today);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.date.hour, 0);
        assert_eq!(document.diary_entries.len(), 2);
    }

    #[test]
    fn test_dates_sort_descending_with_today_inserted() {
        let mut document = LogDocument::named("journal");
        add_diary_entry_on(&mut document, "New year".into(), "...".into(), date(2024, 1, 1));
        add_diary_entry_on(&mut document, "Spring".into(), "...".into(), date(2024, 3, 5));

        let dates = sorted_diary_dates_from(&document, date(2024, 2, 10));

        let days: Vec<(i16, i16, i16)> = dates.iter().map(Date::ymd).collect();
        assert_eq!(days, vec![(2024, 3, 5), (2024, 2, 10), (2024, 1, 1)]);
    }

    #[test]
    fn test_today_not_duplicated_when_entry_exists() {
        let mut document = LogDocument::named("journal");
        let today = date(2024, 2, 10);
        add_diary_entry_on(&mut document, "Already here".into(), "...".into(), today);

        let dates = sorted_diary_dates_from(&document, today);
        assert_eq!(dates.len(), 1);
        assert!(dates[0].same_day(&today));
    }
}
