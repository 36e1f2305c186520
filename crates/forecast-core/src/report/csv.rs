use crate::projection::ScenarioForecast;
use std::fmt::Write as _;

pub const CSV_HEADER: &str =
    "scenario,month,pro_subs,ent_subs,ultra_subs,pro_mrr,ent_mrr,ultra_mrr,total_mrr,arr";

/// One line per scenario-month, scenarios in input order, after the header.
pub fn render_csv(forecasts: &[ScenarioForecast]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for forecast in forecasts {
        let name = escape_field(&forecast.scenario);
        for row in &forecast.rows {
            let s = &row.subscribers;
            let m = &row.tier_mrr;
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "{name},{},{},{},{},{},{},{},{},{}",
                row.month, s.pro, s.ent, s.ultra, m.pro, m.ent, m.ultra, row.total_mrr, row.arr
            );
        }
    }
    out
}

/// Quote a field containing a delimiter, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
