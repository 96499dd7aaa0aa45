//! Stateless text and number formatters used by the brief templates.
//!
//! Every function here is pure. Numeric inputs are already parsed; callers
//! are responsible for attaching field paths to parse failures.

use serde_json::Value;

/// Renders a number the way the paper form prints plain quantities: the
/// shortest decimal form, without a trailing `.0` on whole values.
pub fn js_number(value: f64) -> String {
    if value == 0.0 {
        // Avoids printing negative zero as "-0".
        return "0".to_string();
    }
    value.to_string()
}

/// Left-pads `text` with zeros to at least `width` characters.
pub fn pad_zero(text: &str, width: usize) -> String {
    format!("{text:0>width$}")
}

/// Left-pads `text` with spaces to at least `width` characters.
pub fn pad_space(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}

/// Prefixes a signed quantity with `P` (plus) or `M` (minus).
///
/// The magnitude is zero-padded to `min_digits`. Zero carries no sign letter.
///
/// ```rust
/// use flightbrief_core::format::sign_prefixed;
///
/// assert_eq!(sign_prefixed(5.0, 3), "P005");
/// assert_eq!(sign_prefixed(-5.0, 3), "M005");
/// assert_eq!(sign_prefixed(0.0, 3), "000");
/// ```
pub fn sign_prefixed(value: f64, min_digits: usize) -> String {
    if value > 0.0 {
        format!("P{}", pad_zero(&js_number(value), min_digits))
    } else if value < 0.0 {
        format!("M{}", pad_zero(&js_number(value.abs()), min_digits))
    } else {
        pad_zero("0", min_digits)
    }
}

fn split_degrees(value: f64) -> (f64, f64) {
    let magnitude = value.abs();
    let degrees = magnitude.floor();
    (degrees, (magnitude - degrees) * 60.0)
}

/// Converts a decimal-degree position into hemisphere, degrees and decimal
/// minutes, e.g. `S35 54.0 E147 30.0`.
pub fn degrees_minutes(lat: f64, lon: f64) -> String {
    let lat_hemi = if lat >= 0.0 { 'N' } else { 'S' };
    let lon_hemi = if lon >= 0.0 { 'E' } else { 'W' };
    let (lat_deg, lat_min) = split_degrees(lat);
    let (lon_deg, lon_min) = split_degrees(lon);

    format!("{lat_hemi}{lat_deg} {lat_min:.1} {lon_hemi}{lon_deg} {lon_min:.1}")
}

/// Decodes a SimBrief step-climb string into the route profile line.
///
/// ```rust
/// use flightbrief_core::format::decode_step_string;
///
/// assert_eq!(
///     decode_step_string("YMML/0340/LAKOT/0350/VOMPA/0340"),
///     "YMML/FL340 LAKOT/FL350 VOMPA/FL340"
/// );
/// ```
pub fn decode_step_string(steps: &str) -> String {
    if steps.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = steps.split('/').collect();
    parts
        .chunks(2)
        .map(|pair| match pair {
            [ident, altitude] => format!("{ident}/FL{}", altitude.trim_start_matches('0')),
            [ident] => (*ident).to_string(),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a value that may be a single object or a list into a list.
///
/// Lists pass through unchanged, a non-empty object becomes a one-element
/// list, and an empty object or `null` becomes an empty list.
pub fn as_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => vec![other],
    }
}

/// Maps a navlog stage code to its display label (`DSC` prints as `DES`).
pub fn normalize_stage_label(stage: &str) -> &str {
    if stage == "DSC" {
        "DES"
    } else {
        stage
    }
}

/// Removes the first literal `FIR` from a region name, keeping surrounding
/// whitespace (`SYDNEY FIR` → `SYDNEY `).
pub fn strip_fir(name: &str) -> String {
    name.replacen("FIR", "", 1)
}

/// Lower-cases `text` and capitalizes the first letter of each word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
            if ch.is_alphanumeric() {
                at_word_start = false;
            }
        }
    }
    out
}
