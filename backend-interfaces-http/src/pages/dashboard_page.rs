use std::fmt::{Display, Write};

use chrono::TimeZone;

use backend_domain::{CategoryTally, DashboardView, PageView};

const PIE_COLORS: [&str; 6] = [
    "#60a5fa", "#34d399", "#fbbf24", "#f87171", "#a78bfa", "#f472b6",
];

/// Renders the dashboard page. Timestamps are shown in `zone`; the page
/// reloads itself every `refresh_seconds`.
pub fn render_dashboard<Tz>(view: &DashboardView, refresh_seconds: u64, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let last_updated = view
        .last_refresh
        .map(|ts| {
            format!(
                "<div class=\"updated\">Last Updated: {}</div>",
                ts.with_timezone(zone).format("%H:%M:%S")
            )
        })
        .unwrap_or_default();

    let content = if view.loading {
        "<p class=\"loading\">Loading...</p>".to_string()
    } else {
        format!(
            "<div class=\"cards\">{all_time}{this_month}</div>{table}{pagination}",
            all_time = render_card("Whole Time", "total-all", &view.summary.all_time),
            this_month = render_card(
                &format!("This Month ({})", view.summary.month_label),
                "total-month",
                &view.summary.this_month
            ),
            table = render_table(&view.page, zone),
            pagination = render_pagination(&view.page),
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<meta http-equiv="refresh" content="{refresh}" />
<title>TrashVision Dashboard</title>
<style>
:root {{
  --bg: #111827;
  --panel: #1f2937;
  --border: #374151;
  --muted: #9ca3af;
  --ink: #f9fafb;
  --accent: #2563eb;
}}
* {{ box-sizing: border-box; }}
body {{
  margin: 0;
  padding: 32px;
  font-family: "IBM Plex Sans", "Source Sans 3", sans-serif;
  background: var(--bg);
  color: var(--ink);
  min-height: 100vh;
}}
.header {{ display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px; }}
.header h1 {{ margin: 0; font-size: 30px; }}
.updated {{ font-size: 14px; color: var(--muted); }}
.loading {{ text-align: center; font-size: 20px; margin-top: 40px; }}
.cards {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 24px; margin-bottom: 32px; }}
.card {{ background: var(--panel); border-radius: 12px; padding: 24px; box-shadow: 0 12px 28px rgba(0, 0, 0, 0.35); }}
.card h2 {{ margin: 0 0 16px; font-size: 22px; }}
.card .total {{ font-size: 32px; font-weight: 700; margin: 0 0 16px; }}
.card .total-all {{ color: #60a5fa; }}
.card .total-month {{ color: #4ade80; }}
.card-body {{ display: flex; gap: 24px; align-items: center; }}
.card ul {{ list-style: none; margin: 0; padding: 0; flex: 1; }}
.card li {{ display: flex; justify-content: space-between; font-size: 17px; padding: 4px 0; }}
.swatch {{ display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 8px; }}
.pie {{ width: 120px; height: 120px; border-radius: 50%; flex: none; }}
table {{ width: 100%; border-collapse: collapse; border: 1px solid var(--border); border-radius: 12px; overflow: hidden; }}
thead {{ background: var(--border); }}
th, td {{ padding: 14px 16px; text-align: left; }}
tbody {{ background: var(--panel); color: #d1d5db; }}
tbody tr {{ border-top: 1px solid var(--border); }}
tbody tr:hover {{ background: var(--border); }}
.pagination {{ display: flex; justify-content: center; gap: 8px; margin-top: 24px; }}
.pagination a, .pagination span {{
  padding: 8px 16px;
  border: 1px solid #4b5563;
  border-radius: 6px;
  background: var(--border);
  color: var(--ink);
  text-decoration: none;
}}
.pagination .current {{ background: var(--accent); }}
.pagination .disabled {{ opacity: 0.5; }}
</style>
</head>
<body>
<div class="header">
<h1>TrashVision Dashboard</h1>
{last_updated}
</div>
{content}
</body>
</html>
"#,
        refresh = refresh_seconds.max(1),
        last_updated = last_updated,
        content = content,
    )
}

fn render_card(title: &str, total_class: &str, tally: &CategoryTally) -> String {
    let mut items = String::new();
    for (index, entry) in tally.counts.iter().enumerate() {
        let _ = write!(
            items,
            "<li><span><span class=\"swatch\" style=\"background:{color}\"></span>{name}:</span><span>{count}</span></li>",
            color = PIE_COLORS[index % PIE_COLORS.len()],
            name = escape_html(&entry.category),
            count = entry.count,
        );
    }

    format!(
        "<div class=\"card\"><h2>{title}</h2>\
<p class=\"total {total_class}\">Total Trash: {total}</p>\
<div class=\"card-body\"><ul>{items}</ul>\
<div class=\"pie\" style=\"background: {pie}\"></div></div></div>",
        title = escape_html(title),
        total_class = total_class,
        total = tally.total,
        items = items,
        pie = pie_gradient(tally),
    )
}

/// CSS background for a pie of the per-category shares.
fn pie_gradient(tally: &CategoryTally) -> String {
    let categorized = tally.categorized();
    if categorized == 0 {
        return "#374151".to_string();
    }

    let mut stops = Vec::with_capacity(tally.counts.len());
    let mut start = 0.0_f64;
    for (index, entry) in tally.counts.iter().enumerate() {
        let end = start + entry.count as f64 * 100.0 / categorized as f64;
        stops.push(format!(
            "{} {:.2}% {:.2}%",
            PIE_COLORS[index % PIE_COLORS.len()],
            start,
            end
        ));
        start = end;
    }
    format!("conic-gradient({})", stops.join(", "))
}

fn render_table<Tz>(page: &PageView, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut rows = String::new();
    for row in &page.rows {
        let _ = write!(
            rows,
            "<tr><td>{number}</td><td>{name}</td><td>{bin}</td><td>{time}</td><td>{correct}</td></tr>",
            number = row.number,
            name = escape_html(&row.event.trash_name),
            bin = escape_html(&row.event.bin_name),
            time = row
                .event
                .time_stamp
                .with_timezone(zone)
                .format("%Y-%m-%d %H:%M:%S"),
            correct = if row.event.correct { "YES" } else { "NO" },
        );
    }

    format!(
        "<table><thead><tr><th>No.</th><th>Trash Type</th><th>Bin</th><th>Timestamp</th><th>Correct</th></tr></thead>\
<tbody>{}</tbody></table>",
        rows
    )
}

fn render_pagination(page: &PageView) -> String {
    if page.total_pages <= 1 {
        return String::new();
    }

    let mut out = String::from("<nav class=\"pagination\">");
    if page.has_previous {
        let _ = write!(out, "<a href=\"/?page={}\">Previous</a>", page.page - 1);
    } else {
        out.push_str("<span class=\"disabled\">Previous</span>");
    }
    for number in 1..=page.total_pages {
        if number == page.page {
            let _ = write!(out, "<a class=\"current\" href=\"/?page={0}\">{0}</a>", number);
        } else {
            let _ = write!(out, "<a href=\"/?page={0}\">{0}</a>", number);
        }
    }
    if page.has_next {
        let _ = write!(out, "<a href=\"/?page={}\">Next</a>", page.page + 1);
    } else {
        out.push_str("<span class=\"disabled\">Next</span>");
    }
    out.push_str("</nav>");
    out
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
