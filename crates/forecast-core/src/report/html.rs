use crate::error::Result;
use crate::projection::ScenarioForecast;

const DATA_PLACEHOLDER: &str = "__FORECAST_DATA__";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Revenue Forecast</title>
<style>
  body { font-family: system-ui, -apple-system, sans-serif; margin: 2rem; background: #f6f7f9; color: #1d2330; }
  h1 { margin-bottom: 0.25rem; }
  .subtitle { color: #5b6474; margin-top: 0; }
  .card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12); padding: 1.25rem; margin-bottom: 2rem; }
  .summary { display: flex; gap: 2rem; flex-wrap: wrap; margin-bottom: 1rem; }
  .metric .label { font-size: 0.8rem; color: #5b6474; text-transform: uppercase; }
  .metric .value { font-size: 1.4rem; font-weight: 600; }
  table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
  th, td { padding: 0.35rem 0.6rem; text-align: right; border-bottom: 1px solid #e4e7ec; }
  th:first-child, td:first-child { text-align: left; }
  th { background: #f0f2f5; }
</style>
</head>
<body>
<h1>Subscription Revenue Forecast</h1>
<p class="subtitle">Pro $89 &middot; Ent $349 &middot; Ultra $2,500 per subscriber per month</p>
<div id="scenarios"></div>
<script>
const DATA = __FORECAST_DATA__;

const esc = (text) => String(text).replace(/[&<>"']/g, (c) => ({
  "&": "&amp;", "<": "&lt;", ">": "&gt;", '"': "&quot;", "'": "&#39;",
})[c]);
const fmt = (n) => n.toLocaleString("en-US");
const money = (n) => "$" + fmt(n);

function metric(label, value) {
  return `<div class="metric"><div class="label">${label}</div><div class="value">${value}</div></div>`;
}

function renderScenario(s) {
  const m12 = s.rows[11];
  const m24 = s.rows[23];
  const rows = s.rows.map((r) => `<tr>
    <td>${r.month}</td>
    <td>${fmt(r.subscribers.pro)}</td><td>${fmt(r.subscribers.ent)}</td><td>${fmt(r.subscribers.ultra)}</td>
    <td>${money(r.tier_mrr.pro)}</td><td>${money(r.tier_mrr.ent)}</td><td>${money(r.tier_mrr.ultra)}</td>
    <td>${money(r.total_mrr)}</td><td>${money(r.arr)}</td>
  </tr>`).join("");
  return `<section class="card">
    <h2>${esc(s.scenario)} <small>(${(s.growth_rate * 100).toFixed(1)}% monthly growth)</small></h2>
    <div class="summary">
      ${metric("Month 12 MRR", m12 ? money(m12.total_mrr) : "n/a")}
      ${metric("Month 12 ARR", m12 ? money(m12.arr) : "n/a")}
      ${metric("Month 24 MRR", m24 ? money(m24.total_mrr) : "n/a")}
      ${metric("Month 24 ARR", m24 ? money(m24.arr) : "n/a")}
    </div>
    <table>
      <thead><tr>
        <th>Month</th><th>Pro</th><th>Ent</th><th>Ultra</th>
        <th>Pro MRR</th><th>Ent MRR</th><th>Ultra MRR</th><th>Total MRR</th><th>ARR</th>
      </tr></thead>
      <tbody>${rows}</tbody>
    </table>
  </section>`;
}

document.getElementById("scenarios").innerHTML = DATA.map(renderScenario).join("");
</script>
</body>
</html>
"#;

/// Self-contained dashboard with the full dataset inlined as a JSON literal.
pub fn render_html(forecasts: &[ScenarioForecast]) -> Result<String> {
    let json = serde_json::to_string(forecasts)?;
    // A literal "</script>" inside a scenario name must not close the block.
    let json = json.replace("</", "<\\/");
    Ok(TEMPLATE.replacen(DATA_PLACEHOLDER, &json, 1))
}
