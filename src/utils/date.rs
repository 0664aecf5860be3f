use chrono::{Datelike, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn weekday_es(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_short_es(month: u32) -> &'static str {
    match month {
        1 => "ene",
        2 => "feb",
        3 => "mar",
        4 => "abr",
        5 => "may",
        6 => "jun",
        7 => "jul",
        8 => "ago",
        9 => "sept",
        10 => "oct",
        11 => "nov",
        _ => "dic",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Day selector label, e.g. `Jueves, 10 oct`.
pub fn day_label(d: NaiveDate) -> String {
    capitalize(&format!(
        "{}, {} {}",
        weekday_es(d.weekday()),
        d.day(),
        month_short_es(d.month())
    ))
}

/// Long form used on the session page, e.g. `Jueves, 10 de octubre de 2024`.
pub fn long_day_label(d: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];

    capitalize(&format!(
        "{}, {} de {} de {}",
        weekday_es(d.weekday()),
        d.day(),
        MONTHS[d.month0() as usize],
        d.year()
    ))
}

/// ISO label (`2024-10-10`) used when localized labels are turned off.
pub fn iso_label(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
