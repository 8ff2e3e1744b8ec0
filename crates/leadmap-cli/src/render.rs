//! Plain-text lead table for the terminal.

use leadmap_core::Lead;

const NAME_WIDTH: usize = 32;
const ADDRESS_WIDTH: usize = 40;
const PHONE_WIDTH: usize = 18;
const WEBSITE_WIDTH: usize = 28;

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn pad(value: &str, width: usize) -> String {
    format!("{:<width$}", truncate(value, width))
}

/// Renders leads as an aligned table. Missing phones read "no phone", missing
/// websites and ratings read "-".
pub(crate) fn render_leads(leads: &[Lead]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} {} {}\n",
        pad("NAME", NAME_WIDTH),
        pad("ADDRESS", ADDRESS_WIDTH),
        pad("PHONE", PHONE_WIDTH),
        pad("WEBSITE", WEBSITE_WIDTH),
        pad("RATING", 6),
        "CITY"
    ));

    for lead in leads {
        let phone = if lead.has_phone() { lead.phone.as_str() } else { "no phone" };
        let website = if lead.has_website() { lead.website.as_str() } else { "-" };
        let rating = if lead.has_rating() { lead.rating.as_str() } else { "-" };
        let line = format!(
            "{} {} {} {} {} {}",
            pad(&lead.name, NAME_WIDTH),
            pad(&lead.address, ADDRESS_WIDTH),
            pad(phone, PHONE_WIDTH),
            pad(website, WEBSITE_WIDTH),
            pad(rating, 6),
            lead.city
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!("{} leads", leads.len()));
    out
}
