use super::*;

const WELL_FORMED: &str = "\
| Name | Address | Phone | Website | Rating |
|------|---------|-------|---------|--------|
| Lanchonete Central | Rua A, 10 | (11) 98765-4321 | https://central.example.com | 4.5 |
| Pastelaria Sabor | Av. B, 200 | N/A | N/A | 4.1 |
";

fn assert_same_except_id(a: &Lead, b: &Lead) {
    assert_eq!(a.name, b.name);
    assert_eq!(a.address, b.address);
    assert_eq!(a.phone, b.phone);
    assert_eq!(a.website, b.website);
    assert_eq!(a.rating, b.rating);
    assert_eq!(a.city, b.city);
}

// -----------------------------------------------------------------------
// well-formed tables
// -----------------------------------------------------------------------

#[test]
fn well_formed_table_yields_one_lead_per_data_row() {
    let leads = parse_leads_table(WELL_FORMED, "X");
    assert_eq!(leads.len(), 2);
    assert!(leads.iter().all(|l| l.city == "X"));
    assert_ne!(leads[0].id, leads[1].id);
}

#[test]
fn cells_map_to_fields_by_position() {
    let leads = parse_leads_table(WELL_FORMED, "Campinas");
    let first = &leads[0];
    assert_eq!(first.name, "Lanchonete Central");
    assert_eq!(first.address, "Rua A, 10");
    assert_eq!(first.phone, "+55 11 98765-4321");
    assert_eq!(first.website, "https://central.example.com");
    assert_eq!(first.rating, "4.5");
    assert_eq!(first.city, "Campinas");

    let second = &leads[1];
    assert_eq!(second.phone, "N/A");
    assert_eq!(second.website, "N/A");
}

#[test]
fn rows_keep_source_order() {
    let leads = parse_leads_table(WELL_FORMED, "X");
    let names: Vec<&str> = leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Lanchonete Central", "Pastelaria Sabor"]);
}

#[test]
fn reparsing_yields_equal_leads_with_fresh_ids() {
    let first = parse_leads_table(WELL_FORMED, "X");
    let second = parse_leads_table(WELL_FORMED, "X");
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_same_except_id(a, b);
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn surrounding_prose_is_ignored() {
    let text = format!(
        "Here are the businesses I found in Campinas:\n\n{WELL_FORMED}\nLet me know if you need more."
    );
    let leads = parse_leads_table(&text, "Campinas");
    assert_eq!(leads.len(), 2);
}

#[test]
fn indented_table_and_crlf_line_endings_are_accepted() {
    let text = "  | Name | Address | Phone |\r\n  |:---|:---:|---:|\r\n  | Bar do Zé | Rua C | 1133334444 |\r\n";
    let leads = parse_leads_table(text, "Santos");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Bar do Zé");
    assert_eq!(leads[0].phone, "+55 11 3333-4444");
}

#[test]
fn alignment_colons_in_separator_are_recognized() {
    let text = "| Name | Address | Phone |\n| :--- | :---: | ---: |\n| A | B | 123 |\n";
    assert_eq!(parse_leads_table(text, "X").len(), 1);
}

// -----------------------------------------------------------------------
// missing and short cells
// -----------------------------------------------------------------------

#[test]
fn three_cell_row_defaults_website_and_rating() {
    let text = "| Name | Address | Phone |\n|---|---|---|\n| Padaria Real | Rua D, 5 | 11987654321 |\n";
    let leads = parse_leads_table(text, "Itu");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].website, "N/A");
    assert_eq!(leads[0].rating, "N/A");
}

#[test]
fn empty_cells_become_not_available() {
    let text = "| Name | Address | Phone | Website | Rating |\n|---|---|---|---|---|\n|  |  |  |  |  |\n| Only Name | | | | |\n";
    let leads = parse_leads_table(text, "X");
    // The all-blank row is shaped like a separator and emits nothing.
    assert_eq!(leads.len(), 1);
    let lead = &leads[0];
    assert_eq!(lead.name, "Only Name");
    assert_eq!(lead.address, "N/A");
    assert_eq!(lead.phone, "N/A");
    assert_eq!(lead.website, "N/A");
    assert_eq!(lead.rating, "N/A");
}

#[test]
fn two_cell_row_is_dropped() {
    let text = "| Name | Address |\n|---|---|\n| Lonely | Rua E |\n";
    assert!(parse_leads_table(text, "X").is_empty());
}

#[test]
fn one_short_row_among_many_is_skipped() {
    let text = "\
| Name | Address | Phone |
|---|---|---|
| A | Rua 1 | 1133334444 |
| B | Rua 2 |
| C | Rua 3 | 1133335555 |
| D | Rua 4 | N/A |
";
    let leads = parse_leads_table(text, "X");
    assert_eq!(leads.len(), 3);
    let names: Vec<&str> = leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);
}

#[test]
fn extra_cells_beyond_rating_are_ignored() {
    let text = "| Name | Address | Phone | Website | Rating | Notes |\n|---|---|---|---|---|---|\n| A | B | N/A | site | 5.0 | open late |\n";
    let leads = parse_leads_table(text, "X");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].rating, "5.0");
}

#[test]
fn row_without_outer_pipes_on_the_right_still_parses() {
    let text = "| Name | Address | Phone\n|---|---|---\n| A | B | 11987654321\n";
    let leads = parse_leads_table(text, "X");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].phone, "+55 11 98765-4321");
}

// -----------------------------------------------------------------------
// malformed tables
// -----------------------------------------------------------------------

#[test]
fn table_without_separator_yields_nothing() {
    let text = "| Name | Address | Phone |\n| A | B | 1133334444 |\n| C | D | 1133335555 |\n";
    assert!(parse_leads_table(text, "X").is_empty());
}

#[test]
fn separator_before_any_header_yields_nothing() {
    let text = "|---|---|---|\n| A | B | 1133334444 |\n";
    assert!(parse_leads_table(text, "X").is_empty());
}

#[test]
fn prose_only_yields_nothing() {
    let text = "I could not find any businesses matching that description.";
    assert!(parse_leads_table(text, "X").is_empty());
}

#[test]
fn empty_input_yields_nothing() {
    assert!(parse_leads_table("", "X").is_empty());
}

#[test]
fn unparseable_phone_is_kept_verbatim() {
    let text = "| Name | Address | Phone |\n|---|---|---|\n| A | B | call 0800 77 |\n";
    let leads = parse_leads_table(text, "X");
    assert_eq!(leads[0].phone, "call 0800 77");
}
