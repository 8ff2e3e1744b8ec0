/// Builds the instruction sent to the model for one (segment, city) search.
///
/// Asks for an exhaustive listing, widened with related business terms, and
/// for a bare markdown table in the column order the table parser expects.
#[must_use]
pub fn lead_search_prompt(segment: &str, city: &str) -> String {
    format!(
        r#"You are a meticulous data miner building a list of business leads.

TASK: Using Google Maps, search EXHAUSTIVELY for "{segment}" in the city of "{city}".

COVERAGE RULES:
1. Do not stop at the first handful of results. List every establishment you can find; 30 or more is normal when they exist.
2. Widen the search with related terms and synonyms for the segment (for "Lanchonete", also try "Hamburgueria", "Pastelaria", "Food Truck", "Sanduiche" and "Restaurante popular").
3. Small towns like "{city}" need extra care: include everything that is listed there.

OUTPUT FORMAT:
Reply with a Markdown table and nothing else. No introduction, no closing remarks.

| Name | Address | Phone | Website | Rating |

Column rules:
- Name: the full business name.
- Address: the street address.
- Phone: the contact number, written strictly as "+55 XX XXXXX-XXXX". Write "N/A" when none is listed.
- Website: website or social media profile. Write "N/A" when none is listed.
- Rating: the numeric Google rating (for example 4.5)."#
    )
}
