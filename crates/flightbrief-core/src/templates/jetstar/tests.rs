use super::JetstarTemplate;
use crate::{
    document::{Document, Row, Section, Table, TextStyle},
    fixtures::sample_plan,
    models::RawFlightPlan,
    templates::BriefTemplate,
};

fn assemble(plan: &RawFlightPlan) -> Document {
    JetstarTemplate::default()
        .assemble(plan)
        .expect("brief should assemble")
}

fn cells(row: &Row) -> Vec<&str> {
    row.cells.iter().map(|c| c.text.as_str()).collect()
}

fn tables(doc: &Document, page: usize) -> Vec<&Table> {
    doc.pages[page]
        .sections
        .iter()
        .filter_map(|s| match s {
            Section::Table(t) => Some(t),
            _ => None,
        })
        .collect()
}

/// The first row on `page` whose first cell is `label`.
fn row_starting<'a>(doc: &'a Document, page: usize, label: &str) -> Vec<&'a str> {
    tables(doc, page)
        .into_iter()
        .flat_map(|t| t.rows.iter())
        .find(|r| r.cells.first().is_some_and(|c| c.text == label))
        .map(cells)
        .unwrap_or_else(|| panic!("no row starting with {label:?} on page {page}"))
}

fn page_lines(doc: &Document, page: usize) -> Vec<String> {
    doc.pages[page]
        .sections
        .iter()
        .flat_map(Section::text_lines)
        .collect()
}

#[test]
fn test_five_pages_in_order() {
    let doc = assemble(&sample_plan());
    let titles: Vec<_> = doc.pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Flight Plan Acceptance Form",
            "Intentionally Left Blank",
            "Flight Brief Cover Page",
            "EFB Effectivity",
            "Flight Plan",
        ]
    );
    assert_eq!(doc.carrier, "JST");
}

#[test]
fn test_page_header() {
    let doc = assemble(&sample_plan());
    let header = tables(&doc, 0)[0];
    assert_eq!(
        cells(&header.rows[0]),
        vec!["Flight Brief", "Flight ID:", "0512", "MEL", "A/C:", "VGA"]
    );
    assert_eq!(
        cells(&header.rows[1]),
        vec!["", "01/10/23", "", "SYD", "MSN:", "4080"]
    );
    // The EFB page carries no header.
    assert!(tables(&doc, 3)
        .iter()
        .all(|t| t.rows[0].cells[0].text != "Flight Brief"));
}

#[test]
fn test_dispatch_block() {
    let doc = assemble(&sample_plan());
    assert_eq!(
        row_starting(&doc, 0, "JST512"),
        vec!["JST512", "MEL / SYD", "01OCT23", "VH-VGA"]
    );
    assert_eq!(
        row_starting(&doc, 0, "Alex Kim"),
        vec!["Alex Kim", "1800 555 555", "123456789"]
    );
}

#[test]
fn test_fuel_summary_rows() {
    let doc = assemble(&sample_plan());

    assert_eq!(
        row_starting(&doc, 0, "FLIGHT FUEL"),
        vec!["FLIGHT FUEL", "01.07", "3650", "0381", "0412", "........"]
    );
    assert_eq!(
        row_starting(&doc, 0, "ALTN      YSCB")[1..5],
        ["00.36", "1150", "0155", "0162"]
    );
    assert_eq!(row_starting(&doc, 0, "WXTFC")[1..3], ["00.15", "450"]);
    assert_eq!(row_starting(&doc, 0, "FIXED RES YSSY ")[1..3], ["00.30", "1050"]);
    assert_eq!(row_starting(&doc, 0, "EXTRA"), vec!["EXTRA", "", "250"]);
    assert_eq!(row_starting(&doc, 0, "TAKE OFF")[1..3], ["02.32", "7733"]);
    assert_eq!(row_starting(&doc, 0, "TANKER")[1..3], ["00.00", "1000"]);
    assert_eq!(row_starting(&doc, 0, "FUEL LOAD")[1..3], ["02.42", "7933"]);

    let lines = page_lines(&doc, 0);
    assert!(lines.contains(&" FOD 4083".to_string()));
    assert!(lines.contains(&"FUEL BURN PER 1000KG VARIATION IN TOW 0042 KGS".to_string()));
}

#[test]
fn test_etops_banner() {
    let doc = assemble(&sample_plan());
    let banner = |doc: &Document| {
        doc.pages[2]
            .sections
            .iter()
            .find_map(|s| match s {
                Section::Text(t) if matches!(t.style, TextStyle::Banner { .. }) => {
                    Some((t.style, t.text.clone()))
                }
                _ => None,
            })
            .expect("cover page has a sector banner")
    };

    assert_eq!(
        banner(&doc),
        (TextStyle::Banner { inverted: false }, "NON ETOPS Sector".to_string())
    );

    let mut plan = sample_plan();
    plan.general.is_etops = "1".to_string();
    assert_eq!(
        banner(&assemble(&plan)),
        (TextStyle::Banner { inverted: true }, "ETOPS Sector".to_string())
    );
}

#[test]
fn test_cover_sector_data() {
    let doc = assemble(&sample_plan());
    let lines = page_lines(&doc, 2);
    assert!(lines.contains(&"Sector MEL - SYD (Melbourne Intl - Sydney Intl)".to_string()));
    assert!(lines.contains(&"Dispatcher: Alex Kim".to_string()));

    assert_eq!(
        row_starting(&doc, 2, "STD:"),
        vec!["STD:", "09:00", "20:00", "Block", "EET", "174"]
    );
    assert_eq!(
        row_starting(&doc, 2, "STA:"),
        vec!["STA:", "10:22", "21:22", "01.22", "01.07", ""]
    );
}

#[test]
fn test_crew_list() {
    let doc = assemble(&sample_plan());
    let crew = tables(&doc, 2)
        .into_iter()
        .find(|t| t.rows[0].cells[0].text == "EMP NO")
        .expect("crew table");

    let ranks: Vec<_> = crew.rows[1..].iter().map(|r| r.cells[1].text.as_str()).collect();
    assert_eq!(ranks, vec!["CP", "FO", "CM", "LF", "LF", "LF"]);
    assert_eq!(
        cells(&crew.rows[2]),
        vec!["123456", "FO", "JANE DOE", "1", "08:00", "20:00"]
    );
    assert_eq!(crew.rows[3].cells[2].text, "SAM LEE");
}

#[test]
fn test_crew_without_first_officer() {
    let mut plan = sample_plan();
    plan.crew.fo = String::new();
    plan.crew.fa.clear();

    let doc = assemble(&plan);
    let crew = tables(&doc, 2)
        .into_iter()
        .find(|t| t.rows[0].cells[0].text == "EMP NO")
        .expect("crew table");
    assert_eq!(crew.rows.len(), 2);
    assert_eq!(crew.rows[1].cells[1].text, "CP");
}

#[test]
fn test_contacts_in_two_columns() {
    let doc = assemble(&sample_plan());
    assert_eq!(
        row_starting(&doc, 2, "Australia"),
        vec!["Australia", "1800 555555", "Indonesia", "001 555 55 555"]
    );
    assert!(page_lines(&doc, 2).contains(&"No MEL Records found for this aircraft".to_string()));
}

#[test]
fn test_efb_page() {
    let doc = assemble(&sample_plan());
    assert_eq!(
        row_starting(&doc, 3, "Current approved IPAD iOS version range"),
        vec!["Current approved IPAD iOS version range", "16.5 - 16.6"]
    );
    assert_eq!(
        row_starting(&doc, 3, "A320-A321 INTAP List"),
        vec!["A320-A321 INTAP List", "3993", "", "07/09/23"]
    );
    assert_eq!(
        row_starting(&doc, 3, "Notes: Refer to email from EFB Admin for further details").len(),
        1
    );
}

#[test]
fn test_flight_plan_text() {
    let doc = assemble(&sample_plan());
    let lines = page_lines(&doc, 4);
    let expected = [
        "RWY 34 YMML DOSEL Q29 LIZZI Q29 BOREE YSSY RWY 34L",
        "YMML/FL360 LIZZI/FL380",
        "CLIMB  250/300/78\tCRZ  CI 45\tDESCENT 78/300/250",
        "PERF FACTOR P2.0",
        "AVG WIND M035  AVG TEMP DEV P02 UPPER AIR DATA DD/MD/FC /071212",
        "JST512/01OCT23",
        "MAIN PLAN FLIGHT FUEL   3650 FUEL LOAD   7933 EET 01.07",
        "FL360",
        "RTE 01  CRZ-CI065   FLIGHT FUEL   3710  EET 0106  ETA ....",
        "FL340",
        "RTE 01  CRZ-CI045   FLIGHT FUEL   3720  EET 0107  ETA ....",
        "NO CRITICAL FUEL SUMMARIES",
        "CO ROUTE MEL-SYD-1",
    ];
    for line in expected {
        assert!(
            lines.iter().any(|l| l.contains(line)),
            "missing line {line:?}"
        );
    }

    assert_eq!(
        row_starting(&doc, 4, "STD MEL"),
        vec!["STD MEL", "0900 Z", "STA SYD", "1022 Z", "EET", "01.07"]
    );
    assert_eq!(
        row_starting(&doc, 4, "ETD"),
        vec!["ETD", "0905 Z", "ETA", "1027 Z", "BLOCK", "01.22"]
    );
    assert_eq!(
        row_starting(&doc, 4, "ZERO FUEL WEIGHT"),
        vec!["ZERO FUEL WEIGHT", "58260", ".........", "MZFW  62500"]
    );
    assert_eq!(row_starting(&doc, 4, "TAKE-OFF FUEL")[1], "7733");
}

#[test]
fn test_alternate_rows() {
    let doc = assemble(&sample_plan());
    assert_eq!(
        row_starting(&doc, 4, "LDG ALTERNATE -"),
        vec![
            "LDG ALTERNATE -",
            "CBR",
            "XXX",
            "216",
            "0162",
            "200",
            "00:36",
            "1053",
            "1150",
            "35"
        ]
    );
    assert_eq!(
        row_starting(&doc, 4, "CO ROUTE SYD-CBR\t 1 YSSY DCT WOL H65 CB YSCB"),
        vec!["CO ROUTE SYD-CBR\t 1 YSSY DCT WOL H65 CB YSCB"]
    );
    assert!(page_lines(&doc, 4).contains(&"FUEL INCLUDES MISSED APPROACH ALLOWANCE".to_string()));
}

#[test]
fn test_no_alternates() {
    let mut plan = sample_plan();
    plan.alternate.clear();
    let doc = assemble(&plan);

    let lines = page_lines(&doc, 4);
    assert!(lines.contains(&"NO ALTERNATES PLANNED".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("LDG ALTERNATE -")));

    let altn = row_starting(&doc, 0, "ALTN      NIL");
    assert_eq!(altn[3..5], ["0000", ""]);
}

#[test]
fn test_navlog_rows() {
    let doc = assemble(&sample_plan());
    let navlog = *tables(&doc, 4).last().expect("navlog table");

    // Header, origin and five fix groups plus one FIR boundary.
    assert_eq!(navlog.rows.len(), 6 + 5 * 4 + 2);

    assert_eq!(
        row_starting(&doc, 4, "012"),
        vec!["012", "034", "3", "....", "CLB", "270/035  M035", "CLB", "310", ".....", "...."]
    );
    assert_eq!(
        row_starting(&doc, 4, "120"),
        vec!["120", "040", "14", "....", "360", "260/080  M035", "M01", "448", ".....", "...."]
    );
    assert_eq!(
        row_starting(&doc, 4, "LIZZI"),
        vec!["LIZZI", "00.29", "....", "...", ".............", "500", "01850", " 5.9", "XX"]
    );
    assert_eq!(row_starting(&doc, 4, "054")[4], "DES");
    assert_eq!(row_starting(&doc, 4, "BOREE3A"), vec!["BOREE3A", "/ "]);
    assert_eq!(
        row_starting(&doc, 4, "-YBBB"),
        vec!["-YBBB", "S35 54.0 E147 30.0", "BRISBANE ", "--------"]
    );
}

#[test]
fn test_fir_boundary_follows_previous_fix() {
    let doc = assemble(&sample_plan());
    let navlog = *tables(&doc, 4).last().expect("navlog table");
    let position = |label: &str| {
        navlog
            .rows
            .iter()
            .position(|r| r.cells.first().is_some_and(|c| c.text == label))
            .expect("row present")
    };

    // TOC's group ends with a spacer, then the crossing, then LIZZI's leg row.
    assert_eq!(position("-YBBB"), position("TOC") + 3);
    assert_eq!(position("120"), position("-YBBB") + 2);
}

#[test]
fn test_bad_navlog_field_names_path() {
    let mut plan = sample_plan();
    plan.navlog.fix[2].time_leg = "soon".to_string();
    let err = JetstarTemplate::default().assemble(&plan).unwrap_err();
    assert_eq!(err.field(), Some("navlog.fix[2].time_leg"));
}

#[test]
fn test_alternate_eta_out_of_range_names_field() {
    let mut plan = sample_plan();

    // Parses, but lands the ETA past the last representable date
    plan.alternate[0].ete = Some("1e15".to_string());
    let err = JetstarTemplate::default().assemble(&plan).unwrap_err();
    assert_eq!(err.field(), Some("alternate[0].ete"));

    plan.alternate[0].ete = Some("9223372036854775807".to_string());
    let err = JetstarTemplate::default().assemble(&plan).unwrap_err();
    assert_eq!(err.field(), Some("alternate[0].ete"));
}

#[test]
fn test_assembly_is_deterministic() {
    let plan = sample_plan();
    assert_eq!(assemble(&plan), assemble(&plan));
}
