use chrono::{DateTime, Utc};

pub fn format_number(number: i64) -> String {
    use numfmt::*;
    let mut formatter = Formatter::default()
        .scales(Scales::metric())
        .precision(Precision::Decimals(0));
    formatter.fmt(number as f64).to_string()
}

/// Cut `text` down to `max` characters, marking the cut with an ellipsis
pub fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max).collect();
    short.push('…');
    short
}

/// Relative time in words, e.g. "5 minutes ago". Times in the future are
/// treated as now.
pub fn time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created).num_seconds().max(0);
    if seconds < 30 {
        return "less than a minute ago".to_string();
    }
    let minutes = (seconds + 30) / 60;
    if minutes < 45 {
        return format!("{} ago", plural(minutes, "minute"));
    }
    let hours = (minutes + 30) / 60;
    if hours < 24 {
        return format!("about {} ago", plural(hours, "hour"));
    }
    let days = (hours + 12) / 24;
    if days < 30 {
        return format!("{} ago", plural(days, "day"));
    }
    let months = (days + 15) / 30;
    if months < 12 {
        return format!("{} ago", plural(months, "month"));
    }
    format!("about {} ago", plural(months / 12, "year"))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
